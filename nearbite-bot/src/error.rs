//! Error types emitted by the Nearbite bot.
//!
//! Keep these error types reasonably small: request handlers return
//! `Result<_, WebhookError>` for every event they process.

use std::net::SocketAddr;
use std::sync::Arc;

use nearbite_core::SearchError;
use nearbite_places::ClientBuildError;
use thiserror::Error;

use crate::line::ReplyError;

/// Errors that stop the bot from starting or serving.
#[derive(Debug, Error)]
pub enum BotError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// The `.env` file exists but could not be loaded.
    #[error("failed to load .env file: {0}")]
    EnvFile(#[source] dotenvy::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can provide it.
        env: &'static str,
    },
    /// The bind address is not a valid socket address.
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBindAddress {
        /// Value as configured.
        value: String,
        /// Parser error.
        #[source]
        source: std::net::AddrParseError,
    },
    /// Constructing an HTTP client failed.
    #[error("failed to build {client} client: {source}")]
    BuildClient {
        /// Which client failed, e.g. `"places search"`.
        client: &'static str,
        /// Underlying construction error.
        #[source]
        source: ClientBuildError,
    },
    /// The server runtime could not be created.
    #[error("failed to build server runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// Binding the listening socket failed.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested.
        addr: SocketAddr,
        /// Socket error.
        #[source]
        source: std::io::Error,
    },
    /// The server stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// Errors raised while handling a single webhook event.
///
/// These never fail the webhook request; the handler logs them and moves on
/// to the next event.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Searching for nearby places failed.
    #[error("place search failed: {0}")]
    Search(#[from] SearchError),
    /// Sending the reply failed.
    #[error("reply failed: {0}")]
    Reply(#[from] ReplyError),
    /// The blocking task running the event panicked or was cancelled.
    #[error("event task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}
