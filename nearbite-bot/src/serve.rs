//! Serve command implementation for the Nearbite bot.

use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use nearbite_core::{DetailResolver, PlaceSearch, RankedResultSelector, Recommender};
use nearbite_places::{
    DEFAULT_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_PLACE_TYPE, DEFAULT_RADIUS_M, DEFAULT_TIMEOUT_SECS,
    HttpDetailResolver, HttpPlaceSearch, PlacesClientConfig,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::line::{DEFAULT_LINE_API_BASE_URL, LineClientConfig, LineReplyClient};
use crate::webhook::{BotServices, router};
use crate::{
    ARG_BIND, ARG_CHANNEL_SECRET, ARG_CHANNEL_TOKEN, ARG_LANGUAGE, ARG_LINE_API_BASE_URL,
    ARG_MAPS_API_KEY, ARG_PLACE_TYPE, ARG_PLACES_BASE_URL, ARG_SEARCH_RADIUS, ARG_TIMEOUT_SECS,
    BotError, ENV_CHANNEL_SECRET, ENV_CHANNEL_TOKEN, ENV_MAPS_API_KEY,
};

/// Address the server listens on unless configured otherwise.
pub(crate) const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// CLI arguments for the `serve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "serve",
    long_about = "Serve the LINE webhook over HTTP. Credentials and service \
                 endpoints can come from CLI flags, configuration files, \
                 environment variables or a .env file.",
    about = "Serve the LINE webhook"
)]
#[ortho_config(prefix = "NEARBITE")]
pub(crate) struct ServeArgs {
    /// Socket address to listen on (e.g. "0.0.0.0:8080").
    #[arg(long = ARG_BIND, value_name = "addr")]
    #[serde(default)]
    pub(crate) bind: Option<String>,
    /// Channel secret used to verify webhook signatures.
    #[arg(long = ARG_CHANNEL_SECRET, value_name = "secret")]
    #[serde(default)]
    pub(crate) channel_secret: Option<String>,
    /// Channel access token used to send replies.
    #[arg(long = ARG_CHANNEL_TOKEN, value_name = "token")]
    #[serde(default)]
    pub(crate) channel_token: Option<String>,
    /// API key for the places service.
    #[arg(long = ARG_MAPS_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) maps_api_key: Option<String>,
    /// Root URL of the places service.
    #[arg(long = ARG_PLACES_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) places_base_url: Option<String>,
    /// Root URL of the Messaging API.
    #[arg(long = ARG_LINE_API_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) line_api_base_url: Option<String>,
    /// Search radius in metres.
    #[arg(long = ARG_SEARCH_RADIUS, value_name = "metres")]
    #[serde(default)]
    pub(crate) search_radius: Option<u32>,
    /// Place type to search for (e.g. "restaurant", "cafe").
    #[arg(long = ARG_PLACE_TYPE, value_name = "type")]
    #[serde(default)]
    pub(crate) place_type: Option<String>,
    /// Language code for place names and addresses.
    #[arg(long = ARG_LANGUAGE, value_name = "code")]
    #[serde(default)]
    pub(crate) language: Option<String>,
    /// Timeout for outbound requests, in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl ServeArgs {
    pub(crate) fn into_config(self) -> Result<ServeConfig, BotError> {
        let merged = self.load_and_merge().map_err(BotError::Configuration)?;
        ServeConfig::try_from(merged)
    }
}

/// Resolved `serve` command configuration.
///
/// Secrets are never printed by the `Debug` implementation.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct ServeConfig {
    pub(crate) bind: SocketAddr,
    pub(crate) channel_secret: String,
    pub(crate) channel_token: String,
    pub(crate) maps_api_key: String,
    pub(crate) places_base_url: String,
    pub(crate) line_api_base_url: String,
    pub(crate) search_radius: u32,
    pub(crate) place_type: String,
    pub(crate) language: String,
    pub(crate) timeout: Duration,
}

impl fmt::Debug for ServeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServeConfig")
            .field("bind", &self.bind)
            .field("channel_secret", &"<redacted>")
            .field("channel_token", &"<redacted>")
            .field("maps_api_key", &"<redacted>")
            .field("places_base_url", &self.places_base_url)
            .field("line_api_base_url", &self.line_api_base_url)
            .field("search_radius", &self.search_radius)
            .field("place_type", &self.place_type)
            .field("language", &self.language)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ServeConfig {
    pub(crate) fn places_config(&self) -> PlacesClientConfig {
        PlacesClientConfig::new(self.maps_api_key.clone())
            .with_base_url(self.places_base_url.clone())
            .with_radius(self.search_radius)
            .with_place_type(self.place_type.clone())
            .with_language(self.language.clone())
            .with_timeout(self.timeout)
    }

    pub(crate) fn line_config(&self) -> LineClientConfig {
        LineClientConfig::new(self.channel_token.clone())
            .with_base_url(self.line_api_base_url.clone())
            .with_timeout(self.timeout)
    }
}

impl TryFrom<ServeArgs> for ServeConfig {
    type Error = BotError;

    fn try_from(args: ServeArgs) -> Result<Self, Self::Error> {
        let channel_secret = args.channel_secret.ok_or(BotError::MissingArgument {
            field: ARG_CHANNEL_SECRET,
            env: ENV_CHANNEL_SECRET,
        })?;
        let channel_token = args.channel_token.ok_or(BotError::MissingArgument {
            field: ARG_CHANNEL_TOKEN,
            env: ENV_CHANNEL_TOKEN,
        })?;
        let maps_api_key = args.maps_api_key.ok_or(BotError::MissingArgument {
            field: ARG_MAPS_API_KEY,
            env: ENV_MAPS_API_KEY,
        })?;

        let bind_value = args.bind.unwrap_or_else(|| DEFAULT_BIND.to_owned());
        let bind = bind_value
            .parse::<SocketAddr>()
            .map_err(|source| BotError::InvalidBindAddress {
                value: bind_value.clone(),
                source,
            })?;

        Ok(Self {
            bind,
            channel_secret,
            channel_token,
            maps_api_key,
            places_base_url: args
                .places_base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            line_api_base_url: args
                .line_api_base_url
                .unwrap_or_else(|| DEFAULT_LINE_API_BASE_URL.to_owned()),
            search_radius: args.search_radius.unwrap_or(DEFAULT_RADIUS_M),
            place_type: args
                .place_type
                .unwrap_or_else(|| DEFAULT_PLACE_TYPE.to_owned()),
            language: args.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned()),
            timeout: Duration::from_secs(args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        })
    }
}

/// Builds the webhook collaborators for the current serve invocation.
pub(super) trait ServicesBuilder {
    fn build(&self, config: &ServeConfig) -> Result<BotServices, BotError>;
}

pub(super) struct HttpServicesBuilder;

impl ServicesBuilder for HttpServicesBuilder {
    fn build(&self, config: &ServeConfig) -> Result<BotServices, BotError> {
        let search = HttpPlaceSearch::with_config(config.places_config()).map_err(|source| {
            BotError::BuildClient {
                client: "places search",
                source,
            }
        })?;
        let resolver =
            HttpDetailResolver::with_config(config.places_config()).map_err(|source| {
                BotError::BuildClient {
                    client: "place details",
                    source,
                }
            })?;
        let replies =
            LineReplyClient::with_config(config.line_config()).map_err(|source| {
                BotError::BuildClient {
                    client: "reply",
                    source,
                }
            })?;
        let search: Box<dyn PlaceSearch> = Box::new(search);
        let resolver: Box<dyn DetailResolver> = Box::new(resolver);
        let recommender = Recommender::new(search, resolver, RankedResultSelector::new());
        Ok(BotServices::new(
            config.channel_secret.clone(),
            recommender,
            Box::new(replies),
        ))
    }
}

pub(super) fn run_serve(args: ServeArgs) -> Result<(), BotError> {
    init_logging();
    let config = args.into_config()?;
    run_serve_with(&config, &HttpServicesBuilder)
}

/// Install the process-wide subscriber. `RUST_LOG` overrides the default
/// `info` filter; `log` records are captured as well.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        log::debug!("logging already initialised");
    }
}

pub(super) fn run_serve_with(
    config: &ServeConfig,
    builder: &dyn ServicesBuilder,
) -> Result<(), BotError> {
    log::debug!("starting with {config:?}");
    let services = Arc::new(builder.build(config)?);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(BotError::Runtime)?;
    let app = router(Arc::clone(&services)).layer(TraceLayer::new_for_http());
    let outcome = runtime.block_on(serve(config.bind, app));
    // The clients own runtimes of their own, which must be dropped outside
    // any async context.
    drop(runtime);
    drop(services);
    outcome
}

async fn serve(bind: SocketAddr, app: axum::Router) -> Result<(), BotError> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|source| BotError::Bind { addr: bind, source })?;
    let local = listener.local_addr().unwrap_or(bind);
    log::info!("listening on {local}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(BotError::Serve)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("shutting down"),
        Err(err) => {
            log::error!("failed to listen for shutdown signal: {err}");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ServeConfig, BotError> {
    let merged = ServeArgs::merge_from_layers(layers).map_err(BotError::from)?;
    ServeConfig::try_from(merged)
}
