//! LINE webhook endpoint.
//!
//! [`router`] exposes two routes: `GET /` answers a fixed liveness string and
//! `POST /callback` receives webhook deliveries. Each delivery is checked
//! against the channel secret before any event is handled.

mod events;
mod handler;
mod signature;

use std::fmt;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use nearbite_core::{DetailResolver, PlaceSearch, Recommender};

use crate::line::ReplySender;

pub use events::{CallbackPayload, MessageContent, WebhookEvent};
#[cfg(test)]
pub(crate) use handler::dispatch;
pub use handler::HELLO_BODY;
pub use signature::{SIGNATURE_HEADER, SignatureError, sign, verify};

/// Recommender over dynamically chosen search and lookup clients.
pub type DynRecommender = Recommender<Box<dyn PlaceSearch>, Box<dyn DetailResolver>>;

/// Collaborators shared by every webhook request.
pub struct BotServices {
    channel_secret: String,
    recommender: DynRecommender,
    replies: Box<dyn ReplySender>,
}

impl fmt::Debug for BotServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotServices")
            .field("channel_secret", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl BotServices {
    /// Bundle the channel secret with the recommendation and reply clients.
    #[must_use]
    pub fn new(
        channel_secret: impl Into<String>,
        recommender: DynRecommender,
        replies: Box<dyn ReplySender>,
    ) -> Self {
        Self {
            channel_secret: channel_secret.into(),
            recommender,
            replies,
        }
    }
}

/// Build the webhook router over shared services.
pub fn router(services: Arc<BotServices>) -> Router {
    Router::new()
        .route("/", get(handler::hello))
        .route("/callback", post(handler::callback))
        .with_state(services)
}
