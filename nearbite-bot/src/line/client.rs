//! Reply client for the Messaging API.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use nearbite_places::{BlockingHttp, ClientBuildError, DEFAULT_TIMEOUT_SECS, TransportFailure};
use thiserror::Error;

use super::messages::{Message, ReplyRequest};

/// Default root of the Messaging API.
pub const DEFAULT_LINE_API_BASE_URL: &str = "https://api.line.me";

/// Reply endpoint below the API root.
const REPLY_PATH: &str = "v2/bot/message/reply";

/// Default user agent for reply requests.
const DEFAULT_USER_AGENT: &str = "nearbite-bot/0.1";

/// Errors from [`ReplySender::reply`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplyError {
    /// The request could not reach the API.
    #[error("reply request to {url} failed: {message}")]
    NetworkError {
        /// Endpoint that was contacted.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The API did not answer in time.
    #[error("reply request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint that was contacted.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The API rejected the reply.
    #[error("reply request to {url} returned HTTP {status}: {message}")]
    HttpError {
        /// Endpoint that was contacted.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response body, usually a JSON error description.
        message: String,
    },
}

/// Send reply messages for a webhook event.
///
/// Implementations must be `Send` + `Sync` so one sender can serve
/// concurrent events.
pub trait ReplySender: Send + Sync {
    /// Answer the event identified by `reply_token` with `messages`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplyError`] when the messages could not be delivered.
    fn reply(&self, reply_token: &str, messages: &[Message]) -> Result<(), ReplyError>;
}

impl<T: ReplySender + ?Sized> ReplySender for Box<T> {
    fn reply(&self, reply_token: &str, messages: &[Message]) -> Result<(), ReplyError> {
        (**self).reply(reply_token, messages)
    }
}

impl<T: ReplySender + ?Sized> ReplySender for Arc<T> {
    fn reply(&self, reply_token: &str, messages: &[Message]) -> Result<(), ReplyError> {
        (**self).reply(reply_token, messages)
    }
}

/// Configuration for [`LineReplyClient`].
///
/// The channel token is never printed by the `Debug` implementation.
#[derive(Clone)]
pub struct LineClientConfig {
    /// API root, e.g. `"https://api.line.me"`.
    pub base_url: String,
    /// Channel access token sent as a bearer token.
    pub channel_token: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl fmt::Debug for LineClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineClientConfig")
            .field("base_url", &self.base_url)
            .field("channel_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl LineClientConfig {
    /// Create a configuration with the given channel token.
    #[must_use]
    pub fn new(channel_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_LINE_API_BASE_URL.to_owned(),
            channel_token: channel_token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Set the API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn reply_url(&self) -> String {
        format!("{}/{REPLY_PATH}", self.base_url.trim_end_matches('/'))
    }
}

/// [`ReplySender`] posting to the Messaging API reply endpoint.
#[derive(Debug)]
pub struct LineReplyClient {
    http: BlockingHttp,
    config: LineClientConfig,
}

impl LineReplyClient {
    /// Create a client with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: LineClientConfig) -> Result<Self, ClientBuildError> {
        let http = BlockingHttp::new(&config.user_agent, config.timeout)?;
        Ok(Self { http, config })
    }

    async fn reply_async(&self, reply_token: &str, messages: &[Message]) -> Result<(), ReplyError> {
        let url = self.config.reply_url();
        let body = ReplyRequest {
            reply_token,
            messages,
        };
        let response = self
            .http
            .client()
            .post(&url)
            .bearer_auth(&self.config.channel_token)
            .json(&body)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = response.text().await.unwrap_or_default();
        Err(ReplyError::HttpError {
            url,
            status: status.as_u16(),
            message,
        })
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> ReplyError {
        match TransportFailure::classify(error) {
            TransportFailure::Timeout => ReplyError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.http.timeout().as_secs(),
            },
            TransportFailure::Status(status) => ReplyError::HttpError {
                url: url.to_owned(),
                status,
                message: error.to_string(),
            },
            TransportFailure::Network => ReplyError::NetworkError {
                url: url.to_owned(),
                message: error.to_string(),
            },
        }
    }
}

impl ReplySender for LineReplyClient {
    fn reply(&self, reply_token: &str, messages: &[Message]) -> Result<(), ReplyError> {
        log::debug!("replying with {} message(s)", messages.len());
        self.http.block_on(self.reply_async(reply_token, messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://api.line.me", "https://api.line.me/v2/bot/message/reply")]
    #[case("http://127.0.0.1:9000/", "http://127.0.0.1:9000/v2/bot/message/reply")]
    fn reply_url_joins_cleanly(#[case] base: &str, #[case] expected: &str) {
        let config = LineClientConfig::new("token").with_base_url(base);
        assert_eq!(config.reply_url(), expected);
    }

    #[rstest]
    fn debug_output_hides_the_token() {
        let config = LineClientConfig::new("very-secret-token");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("very-secret-token"));
    }

    #[rstest]
    fn unreachable_api_is_a_network_error() {
        let config = LineClientConfig::new("token")
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2));
        let client = LineReplyClient::with_config(config).expect("client should build");
        let messages = [Message::Text {
            text: "hi".to_owned(),
        }];
        let err = client
            .reply("token-1", &messages)
            .expect_err("nothing listens on the discard port");
        assert!(
            matches!(err, ReplyError::NetworkError { .. }),
            "expected NetworkError, got {err:?}"
        );
    }
}
