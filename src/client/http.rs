//! HTTP capability consumed by the client, plus the reqwest-backed default.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Boxed future returned by [`HttpTransport::post`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Boxed error type carried by [`TransportError::Request`].
pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A fully prepared `POST` request.
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
    /// Deadline for the whole request, including reading the body.
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any response the server sent back, whatever its status.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
/// No response was received from the server.
pub enum TransportError {
    /// The request did not complete within its timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection, TLS, or I/O failure.
    #[error("request failed: {0}")]
    Request(#[source] BoxError),
}

/// Minimal HTTP capability used by [`AraraClient`](crate::AraraClient).
///
/// Implementations must return `Ok` for every response received (including non-2xx
/// statuses) and `Err` only when no response is available. A body that breaks off after
/// the status line is reported as an empty body with that status. Retry policies belong
/// here, not in the client.
pub trait HttpTransport: Send + Sync {
    fn post<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>>;
}

#[derive(Debug, Clone, Default)]
/// [`HttpTransport`] backed by a shared [`reqwest::Client`].
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn post<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        Box::pin(async move {
            let HttpRequest {
                url,
                headers,
                body,
                timeout,
            } = request;

            let mut builder = self.client.post(url.as_str()).timeout(timeout);
            for (name, value) in &headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            let response = builder
                .body(body)
                .send()
                .await
                .map_err(|err| map_reqwest_error(err, timeout))?;
            let status = response.status().as_u16();
            // A status line was received: keep it even if the body is cut short.
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) if err.is_timeout() => return Err(TransportError::Timeout(timeout)),
                Err(err) => {
                    tracing::debug!(status, error = %err, "failed to read response body");
                    String::new()
                }
            };
            Ok(HttpResponse { status, body })
        })
    }
}

fn map_reqwest_error(err: reqwest::Error, timeout: Duration) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(timeout)
    } else {
        TransportError::Request(Box::new(err))
    }
}
