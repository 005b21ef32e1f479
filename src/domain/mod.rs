//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SendMessage, Variables};
pub use response::SendMessageResponse;
pub use validation::ValidationError;
pub use value::{ApiErrorKind, ApiKey, PhoneNumber, Receiver, TemplateName};
