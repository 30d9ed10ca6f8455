//! Inbound webhook payloads.
//!
//! Only the events and message kinds the bot reacts to are modelled; the rest
//! decode to `Unsupported` variants and are ignored.
//!
//! See: <https://developers.line.biz/en/reference/messaging-api/#webhook-event-objects>

use serde::Deserialize;

/// Body of a webhook request.
#[derive(Debug, Deserialize)]
pub struct CallbackPayload {
    /// Bot user ID the events are addressed to.
    #[serde(default)]
    pub destination: String,
    /// Events in delivery order; empty for verification requests.
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

/// A single webhook event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WebhookEvent {
    /// The user sent a message.
    #[serde(rename_all = "camelCase")]
    Message {
        /// Token for answering this event.
        reply_token: String,
        /// Message content.
        message: MessageContent,
    },
    /// Follow, join, postback and other events the bot ignores.
    #[serde(other)]
    Unsupported,
}

/// Content of a [`WebhookEvent::Message`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MessageContent {
    /// Text typed by the user.
    Text {
        /// Message text.
        text: String,
    },
    /// A shared location.
    Location {
        /// Latitude in degrees.
        latitude: f64,
        /// Longitude in degrees.
        longitude: f64,
        /// Place name, when the user picked a named place.
        #[serde(default)]
        title: Option<String>,
        /// Street address, when available.
        #[serde(default)]
        address: Option<String>,
    },
    /// Images, stickers and other content the bot ignores.
    #[serde(other)]
    Unsupported,
}
