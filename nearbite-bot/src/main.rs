//! Entry point for the Nearbite bot server.
#![forbid(unsafe_code)]

use nearbite_bot::BotError;

fn main() -> eyre::Result<()> {
    match nearbite_bot::run() {
        Ok(()) => Ok(()),
        // Help and version output also arrive here; let clap print them.
        Err(BotError::ArgumentParsing(err)) => err.exit(),
        Err(err) => Err(err.into()),
    }
}
