//! LINE bot that answers shared locations with nearby restaurant suggestions.
//!
//! The `serve` command starts an HTTP server exposing the LINE webhook. Text
//! messages are echoed back; location messages are answered with a carousel
//! of the best-rated restaurants around the shared point.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
pub mod line;
pub mod reply;
mod serve;
pub mod webhook;

pub use error::{BotError, WebhookError};

use serve::{ServeArgs, run_serve};

const ARG_BIND: &str = "bind";
const ARG_CHANNEL_SECRET: &str = "channel-secret";
const ARG_CHANNEL_TOKEN: &str = "channel-token";
const ARG_MAPS_API_KEY: &str = "maps-api-key";
const ARG_PLACES_BASE_URL: &str = "places-base-url";
const ARG_LINE_API_BASE_URL: &str = "line-api-base-url";
const ARG_SEARCH_RADIUS: &str = "search-radius";
const ARG_PLACE_TYPE: &str = "place-type";
const ARG_LANGUAGE: &str = "language";
const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const ENV_CHANNEL_SECRET: &str = "NEARBITE_CMDS_SERVE_CHANNEL_SECRET";
const ENV_CHANNEL_TOKEN: &str = "NEARBITE_CMDS_SERVE_CHANNEL_TOKEN";
const ENV_MAPS_API_KEY: &str = "NEARBITE_CMDS_SERVE_MAPS_API_KEY";

/// Run the bot with the current process arguments and environment.
///
/// A `.env` file in the working directory is loaded first when present, so
/// its variables take part in configuration layering.
///
/// # Errors
///
/// Returns [`BotError`] when the arguments, environment or configuration are
/// unusable, or when the server cannot start.
pub fn run() -> Result<(), BotError> {
    load_env_file()?;
    let cli = Cli::try_parse().map_err(BotError::ArgumentParsing)?;
    match cli.command {
        Command::Serve(args) => run_serve(args),
    }
}

fn load_env_file() -> Result<(), BotError> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(BotError::EnvFile(err)),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "nearbite",
    about = "LINE bot suggesting restaurants near a shared location",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the LINE webhook over HTTP.
    Serve(ServeArgs),
}

#[cfg(test)]
mod tests;
