//! Connection settings shared by every request a client sends.

use std::time::Duration;

use url::Url;

use crate::domain::{ApiKey, ValidationError};

/// Default Arara API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.ararahq.com";
/// Default timeout applied to a whole request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default retry count advertised to transport-level retry policies.
pub const DEFAULT_RETRY_COUNT: u32 = 3;
/// Default delay between transport-level retries.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(100);
/// Default API version path segment.
pub const DEFAULT_API_VERSION: &str = "v1";

const MESSAGES_PATH: &str = "messages";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// How the `messages` endpoint is resolved against the base URL.
pub enum EndpointStyle {
    /// `<base_url>/api/<api_version>/messages`.
    #[default]
    Versioned,
    /// `<base_url>/messages`, ignoring the API version.
    ///
    /// Deprecated compatibility mode for base URLs that already carry the version prefix.
    /// Prefer [`EndpointStyle::Versioned`] with a bare origin.
    Direct,
}

#[derive(Debug, Clone)]
/// Immutable connection settings for [`AraraClient`](crate::AraraClient).
///
/// `retry_count` and `retry_delay` are not used by the client itself, which sends each
/// message exactly once. They are exposed for a retrying [`HttpTransport`](crate::HttpTransport)
/// supplied by the caller.
pub struct Config {
    api_key: ApiKey,
    base_url: String,
    timeout: Duration,
    retry_count: u32,
    retry_delay: Duration,
    api_version: String,
    endpoint_style: EndpointStyle,
    messages_url: Url,
}

impl Config {
    /// Build a config with every setting at its default.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ValidationError> {
        Self::builder(api_key).build()
    }

    /// Start building a config with custom settings.
    pub fn builder(api_key: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder::new(api_key)
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn endpoint_style(&self) -> EndpointStyle {
        self.endpoint_style
    }

    /// Fully resolved URL of the `messages` endpoint.
    pub fn messages_url(&self) -> &Url {
        &self.messages_url
    }
}

#[derive(Debug, Clone)]
/// Builder for [`Config`].
pub struct ConfigBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    retry_count: u32,
    retry_delay: Duration,
    api_version: String,
    endpoint_style: EndpointStyle,
}

impl ConfigBuilder {
    /// Create a builder with every setting at its default.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            retry_count: DEFAULT_RETRY_COUNT,
            retry_delay: DEFAULT_RETRY_DELAY,
            api_version: DEFAULT_API_VERSION.to_owned(),
            endpoint_style: EndpointStyle::default(),
        }
    }

    /// Override the API origin. A path prefix is kept.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count;
        self
    }

    pub fn retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn endpoint_style(mut self, endpoint_style: EndpointStyle) -> Self {
        self.endpoint_style = endpoint_style;
        self
    }

    /// Validate the settings and resolve the endpoint URL.
    ///
    /// Fails when the API key or API version is blank, or the base URL is not an
    /// absolute `http`/`https` URL.
    pub fn build(self) -> Result<Config, ValidationError> {
        let api_key = ApiKey::new(self.api_key)?;

        let api_version = self.api_version.trim().to_owned();
        if api_version.is_empty() {
            return Err(ValidationError::Empty {
                field: "apiVersion",
            });
        }

        let base_url = self.base_url.trim().to_owned();
        let messages_url = resolve_messages_url(&base_url, self.endpoint_style, &api_version)?;

        Ok(Config {
            api_key,
            base_url,
            timeout: self.timeout,
            retry_count: self.retry_count,
            retry_delay: self.retry_delay,
            api_version,
            endpoint_style: self.endpoint_style,
            messages_url,
        })
    }
}

fn resolve_messages_url(
    base_url: &str,
    style: EndpointStyle,
    api_version: &str,
) -> Result<Url, ValidationError> {
    let invalid = || ValidationError::InvalidBaseUrl {
        input: base_url.to_owned(),
    };

    let mut url = Url::parse(base_url).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }

    {
        let mut segments = url.path_segments_mut().map_err(|()| invalid())?;
        segments.pop_if_empty();
        if style == EndpointStyle::Versioned {
            segments.push("api").push(api_version);
        }
        segments.push(MESSAGES_PATH);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_defaults() {
        let config = Config::new("test-key").unwrap();

        assert_eq!(config.api_key().as_str(), "test-key");
        assert_eq!(config.base_url(), "https://api.ararahq.com");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.retry_count(), 3);
        assert_eq!(config.retry_delay(), Duration::from_millis(100));
        assert_eq!(config.api_version(), "v1");
        assert_eq!(config.endpoint_style(), EndpointStyle::Versioned);
        assert_eq!(
            config.messages_url().as_str(),
            "https://api.ararahq.com/api/v1/messages"
        );
    }

    #[test]
    fn defaults_do_not_depend_on_construction_order() {
        let _custom = Config::builder("other")
            .timeout(Duration::from_secs(1))
            .retry_count(9)
            .build()
            .unwrap();

        let first = Config::new("test-key").unwrap();
        let second = Config::new("test-key").unwrap();
        assert_eq!(first.timeout(), second.timeout());
        assert_eq!(first.retry_count(), second.retry_count());
        assert_eq!(first.retry_delay(), second.retry_delay());
        assert_eq!(first.api_version(), second.api_version());
        assert_eq!(first.messages_url(), second.messages_url());
        assert_eq!(first.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(first.retry_count(), DEFAULT_RETRY_COUNT);
    }

    #[test]
    fn builder_accepts_custom_values() {
        let config = Config::builder("custom-key")
            .base_url("https://custom.api.com")
            .timeout(Duration::from_secs(60))
            .retry_count(5)
            .retry_delay(Duration::from_millis(200))
            .api_version("v2")
            .build()
            .unwrap();

        assert_eq!(config.api_key().as_str(), "custom-key");
        assert_eq!(config.base_url(), "https://custom.api.com");
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.retry_count(), 5);
        assert_eq!(config.retry_delay(), Duration::from_millis(200));
        assert_eq!(config.api_version(), "v2");
        assert_eq!(
            config.messages_url().as_str(),
            "https://custom.api.com/api/v2/messages"
        );
    }

    #[test]
    fn base_url_path_prefix_is_kept_without_double_slash() {
        let config = Config::builder("key")
            .base_url("https://gateway.example.com/arara/")
            .build()
            .unwrap();
        assert_eq!(
            config.messages_url().as_str(),
            "https://gateway.example.com/arara/api/v1/messages"
        );
    }

    #[test]
    fn direct_style_skips_version_segment() {
        let config = Config::builder("key")
            .base_url("https://api.example.com/api/v1")
            .endpoint_style(EndpointStyle::Direct)
            .build()
            .unwrap();
        assert_eq!(
            config.messages_url().as_str(),
            "https://api.example.com/api/v1/messages"
        );
    }

    #[test]
    fn build_rejects_blank_api_key() {
        assert_eq!(
            Config::new("  ").unwrap_err(),
            ValidationError::Empty {
                field: ApiKey::FIELD
            }
        );
    }

    #[test]
    fn build_rejects_blank_api_version() {
        let err = Config::builder("key").api_version(" ").build().unwrap_err();
        assert_eq!(
            err,
            ValidationError::Empty {
                field: "apiVersion"
            }
        );
    }

    #[test]
    fn build_rejects_unusable_base_urls() {
        for base_url in ["", "api.ararahq.com", "ftp://api.ararahq.com", "mailto:a@b.c"] {
            let err = Config::builder("key").base_url(base_url).build().unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidBaseUrl { .. }),
                "{base_url:?} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn debug_output_does_not_leak_api_key() {
        let config = Config::new("super-secret").unwrap();
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
