//! Client layer: orchestrates validation, the HTTP call, and error classification.

mod config;
mod error;
mod http;

use std::sync::Arc;

use tracing::debug;

use crate::domain::{SendMessage, SendMessageResponse, Variables};

pub use config::{
    Config, ConfigBuilder, DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_RETRY_COUNT,
    DEFAULT_RETRY_DELAY, DEFAULT_TIMEOUT, EndpointStyle,
};
pub use error::{ApiError, AraraError, NO_RESPONSE_STATUS};
pub use http::{
    BoxError, BoxFuture, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
    TransportError,
};

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone)]
/// Builder for [`AraraClient`] using the reqwest transport.
///
/// Use this when you need a custom user-agent or want to share a pre-built
/// [`reqwest::Client`].
pub struct AraraClientBuilder {
    config: Config,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl AraraClientBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            user_agent: None,
            http_client: None,
        }
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a pre-built client is supplied through [`AraraClientBuilder::http_client`].
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Reuse an existing reqwest client (and its connection pool).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build an [`AraraClient`].
    pub fn build(self) -> Result<AraraClient, AraraError> {
        let client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                builder.build().map_err(AraraError::ClientBuild)?
            }
        };

        Ok(AraraClient::with_transport(
            self.config,
            ReqwestTransport::new(client),
        ))
    }
}

#[derive(Clone)]
/// High-level Arara client.
///
/// Each call validates its input, sends exactly one `POST` to the `messages` endpoint, and
/// classifies the outcome. The client holds no mutable state and can be cloned and shared
/// across tasks. It never retries; wrap the [`HttpTransport`] for that.
pub struct AraraClient {
    config: Arc<Config>,
    http: Arc<dyn HttpTransport>,
}

impl AraraClient {
    /// Create a client using the default reqwest transport.
    ///
    /// For more customization, use [`AraraClient::builder`].
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, ReqwestTransport::new(reqwest::Client::new()))
    }

    /// Create a client that sends requests through `transport`.
    pub fn with_transport(config: Config, transport: impl HttpTransport + 'static) -> Self {
        Self {
            config: Arc::new(config),
            http: Arc::new(transport),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(config: Config) -> AraraClientBuilder {
        AraraClientBuilder::new(config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate raw parameters and send a templated message.
    ///
    /// Checks run in order (receiver presence, receiver format, template name presence) and
    /// nothing is sent if one fails. `variables` are passed through unchanged.
    pub async fn send(
        &self,
        receiver: &str,
        template_name: &str,
        variables: Variables,
    ) -> Result<SendMessageResponse, AraraError> {
        let request = SendMessage::parse(receiver, template_name)?.with_variables(variables);
        self.send_message(request).await
    }

    /// Send a templated WhatsApp message.
    ///
    /// Errors:
    /// - [`AraraError::Api`] for non-2xx responses and for requests that got no response
    ///   (status [`NO_RESPONSE_STATUS`], see [`ApiError::is_no_response`]),
    /// - [`AraraError::Decode`] when a 2xx body is not a JSON object.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(template = %request.template_name().as_str())
    )]
    pub async fn send_message(
        &self,
        request: SendMessage,
    ) -> Result<SendMessageResponse, AraraError> {
        let body =
            crate::transport::encode_send_message_json(&request).map_err(AraraError::Encode)?;
        let http_request = HttpRequest {
            url: self.config.messages_url().to_string(),
            headers: vec![
                ("Authorization".to_owned(), self.config.api_key().bearer()),
                ("Content-Type".to_owned(), JSON_CONTENT_TYPE.to_owned()),
            ],
            body,
            timeout: self.config.timeout(),
        };

        debug!(url = %http_request.url, "sending message");
        let response = match self.http.post(http_request).await {
            Ok(response) => response,
            Err(err) => {
                debug!(error = %err, "no response received");
                return Err(ApiError::from_transport(err).into());
            }
        };
        debug!(status = response.status, "response received");

        if !(200..=299).contains(&response.status) {
            return Err(ApiError::from_response(response.status, &response.body).into());
        }

        crate::transport::decode_send_message_json_response(&response.body).map_err(|source| {
            AraraError::Decode {
                status: response.status,
                source,
            }
        })
    }
}
