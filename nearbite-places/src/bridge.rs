//! Run async `reqwest` calls behind synchronous capability traits.
//!
//! [`BlockingHttp`] pairs a [`reqwest::Client`] with a private current-thread
//! runtime. When called from within an existing multi-threaded Tokio runtime
//! (detected via [`Handle::try_current()`] and
//! [`RuntimeFlavor::MultiThread`]) it drives the request on that runtime's
//! handle inside [`tokio::task::block_in_place`] to avoid nested runtime
//! panics. Anywhere else, including a `current_thread` runtime, it falls back
//! to the owned runtime.
//!
//! Dropping a Tokio runtime from inside an async context panics, so owners of
//! a `BlockingHttp` must release their last handle outside async code.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

/// Error returned when an HTTP client cannot be constructed.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Coarse classification of a failed `reqwest` call.
///
/// Each client maps this onto its own error type, keeping the request URL
/// and message alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    /// The request exceeded the configured timeout.
    Timeout,
    /// The server answered with a non-success status.
    Status(u16),
    /// Anything else: DNS, connection, TLS or body errors.
    Network,
}

impl TransportFailure {
    /// Classify `error`.
    #[must_use]
    pub fn classify(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            return Self::Timeout;
        }
        error
            .status()
            .map_or(Self::Network, |status| Self::Status(status.as_u16()))
    }
}

/// HTTP client usable from synchronous code.
pub struct BlockingHttp {
    client: Client,
    runtime: Runtime,
    timeout: Duration,
}

impl fmt::Debug for BlockingHttp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingHttp")
            .field("client", &self.client)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl BlockingHttp {
    /// Build a client with the given user agent and timeout.
    ///
    /// The timeout applies both to connecting and to the whole request.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ClientBuildError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(ClientBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClientBuildError::Runtime)?;
        Ok(Self {
            client,
            runtime,
            timeout,
        })
    }

    /// Underlying async client used to build requests.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// Configured request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Drive `future` to completion from synchronous code.
    ///
    /// # Runtime requirements
    ///
    /// Inside a `current_thread` runtime the owned runtime is used instead,
    /// which blocks the caller's runtime and may deadlock if it is driving
    /// IO this request depends on.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}
