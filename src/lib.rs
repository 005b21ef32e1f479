//! Typed Rust client for the Arara WhatsApp messaging API.
//!
//! The crate has three layers: a domain layer of strong types with validation, a transport
//! layer for the JSON wire format, and a small client layer that sends the request and
//! classifies failures.
//!
//! ```rust,no_run
//! use arara::{AraraClient, Config, SendMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), arara::AraraError> {
//!     let client = AraraClient::new(Config::new("...")?);
//!     let request = SendMessage::parse("whatsapp:+5511999999999", "welcome")?
//!         .variable("name", "Ana");
//!     let response = client.send_message(request).await?;
//!     println!("{:?}", response.id());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ApiError, AraraClient, AraraClientBuilder, AraraError, Config, ConfigBuilder, EndpointStyle,
    HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError,
};
pub use domain::{
    ApiErrorKind, ApiKey, PhoneNumber, Receiver, SendMessage, SendMessageResponse, TemplateName,
    ValidationError, Variables,
};
