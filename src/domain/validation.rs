use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    /// `input` holds the rejected value; it is left out of the message.
    InvalidReceiver { input: String },
    InvalidPhoneNumber { input: String },
    InvalidBaseUrl { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} field is required."),
            Self::InvalidReceiver { .. } => f.write_str(
                "receiver must follow the format whatsapp:+<number> with 8 to 15 digits \
                 (e.g. whatsapp:+5511999999999)",
            ),
            Self::InvalidPhoneNumber { .. } => f.write_str("invalid phone number"),
            Self::InvalidBaseUrl { input } => {
                write!(f, "invalid base URL: {input:?} (expected an absolute http(s) URL)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
