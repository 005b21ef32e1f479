use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Arara API key, sent as a bearer token.
///
/// Invariant: non-empty after trimming. `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Field name reported in validation errors (`apiKey`).
    pub const FIELD: &'static str = "apiKey";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// WhatsApp message receiver (`receiver`).
///
/// Invariant: after trimming, the value is `whatsapp:+` followed by 8 to 15 ASCII digits.
/// The trimmed form is what gets sent.
pub struct Receiver(String);

impl Receiver {
    /// JSON field name used by Arara (`receiver`).
    pub const FIELD: &'static str = "receiver";

    /// Literal prefix every receiver starts with.
    pub const PREFIX: &'static str = "whatsapp:+";

    /// Minimum number of digits after [`Receiver::PREFIX`].
    pub const MIN_DIGITS: usize = 8;
    /// Maximum number of digits after [`Receiver::PREFIX`].
    pub const MAX_DIGITS: usize = 15;

    /// Create a validated receiver.
    ///
    /// An empty value is reported before a malformed one.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let well_formed = trimmed.strip_prefix(Self::PREFIX).is_some_and(|digits| {
            (Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits.len())
                && digits.bytes().all(|b| b.is_ascii_digit())
        });
        if !well_formed {
            return Err(ValidationError::InvalidReceiver {
                input: trimmed.to_owned(),
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Build a receiver from an already-parsed phone number, using its E.164 form.
    pub fn from_phone_number(phone: &PhoneNumber) -> Result<Self, ValidationError> {
        Self::new(format!("whatsapp:{}", phone.e164()))
    }

    /// Full receiver value (`whatsapp:+...`).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The digits after `whatsapp:+`.
    pub fn digits(&self) -> &str {
        &self.0[Self::PREFIX.len()..]
    }
}

impl TryFrom<PhoneNumber> for Receiver {
    type Error = ValidationError;

    fn try_from(value: PhoneNumber) -> Result<Self, Self::Error> {
        Self::from_phone_number(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Name of a message template registered with Arara (`templateName`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct TemplateName(String);

impl TemplateName {
    /// JSON field name used by Arara (`templateName`).
    pub const FIELD: &'static str = "templateName";

    /// Create a validated template name.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the template name as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// A phone number normalized to E.164, ready to become a [`Receiver`].
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a number written in any common notation.
    ///
    /// `default_region` applies when the input has no `+<country code>` prefix.
    pub fn parse(default_region: Option<country::Id>, input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::Empty {
                field: Receiver::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, input).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: input.to_owned(),
            }
        })?;
        Ok(Self(
            phonenumber::format(&parsed)
                .mode(phonenumber::Mode::E164)
                .to_string(),
        ))
    }

    /// `+` followed by country code and subscriber digits.
    pub fn e164(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Classification of an HTTP status returned by the Arara API.
///
/// Unmapped codes fall into [`ApiErrorKind::Generic`]; the raw status is kept on the error.
pub enum ApiErrorKind {
    BadRequest,
    Authentication,
    NotFound,
    Validation,
    InternalServer,
    Generic,
}

impl ApiErrorKind {
    /// Classify an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Authentication,
            404 => Self::NotFound,
            422 => Self::Validation,
            500 => Self::InternalServer,
            _ => Self::Generic,
        }
    }

    /// The status code this kind is keyed by, or `None` for [`ApiErrorKind::Generic`].
    pub fn status(self) -> Option<u16> {
        Some(match self {
            Self::BadRequest => 400,
            Self::Authentication => 401,
            Self::NotFound => 404,
            Self::Validation => 422,
            Self::InternalServer => 500,
            Self::Generic => return None,
        })
    }
}
