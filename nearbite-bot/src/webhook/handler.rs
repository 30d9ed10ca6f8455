//! HTTP handlers for the webhook routes.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use geo::Coord;

use super::events::{CallbackPayload, MessageContent, WebhookEvent};
use super::BotServices;
use super::signature::{SIGNATURE_HEADER, verify};
use crate::WebhookError;
use crate::line::Message;
use crate::reply::{echo_reply, restaurant_reply};

/// Body of the liveness route.
pub const HELLO_BODY: &str = "Hello World!!!!";

/// Liveness check.
pub(super) async fn hello() -> &'static str {
    HELLO_BODY
}

/// Verify, decode and dispatch a webhook delivery.
///
/// A bad signature yields `400` and an undecodable body `500`. Event
/// failures are logged and never change the status, so the platform does
/// not redeliver events that were already partly answered.
pub(super) async fn callback(
    State(services): State<Arc<BotServices>>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let signature = headers.get(SIGNATURE_HEADER).map(|value| value.as_bytes());
    if let Err(err) = verify(&services.channel_secret, signature, &body) {
        log::warn!("rejecting webhook request: {err}");
        return StatusCode::BAD_REQUEST;
    }

    let payload: CallbackPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => {
            log::error!("failed to decode webhook body: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    };
    log::debug!(
        "received {} event(s) for {}",
        payload.events.len(),
        payload.destination
    );

    for event in payload.events {
        let shared = Arc::clone(&services);
        let outcome = tokio::task::spawn_blocking(move || dispatch(&shared, &event))
            .await
            .map_err(WebhookError::from)
            .and_then(|result| result);
        if let Err(err) = outcome {
            log::error!("webhook event failed: {err}");
        }
    }
    StatusCode::OK
}

/// Answer one event. Runs on a blocking thread because the search and reply
/// clients block.
pub(crate) fn dispatch(services: &BotServices, event: &WebhookEvent) -> Result<(), WebhookError> {
    let WebhookEvent::Message {
        reply_token,
        message,
    } = event
    else {
        log::debug!("ignoring unsupported event");
        return Ok(());
    };

    let reply = match message {
        MessageContent::Text { text } => echo_reply(text),
        MessageContent::Location {
            latitude,
            longitude,
            ..
        } => suggest(
            services,
            Coord {
                x: *longitude,
                y: *latitude,
            },
        )?,
        MessageContent::Unsupported => {
            log::debug!("ignoring unsupported message");
            return Ok(());
        }
    };
    services.replies.reply(reply_token, &[reply])?;
    Ok(())
}

fn suggest(services: &BotServices, location: Coord<f64>) -> Result<Message, WebhookError> {
    let entries = services.recommender.recommend(location)?;
    log::info!(
        "suggesting {} place(s) near ({}, {})",
        entries.len(),
        location.y,
        location.x
    );
    Ok(restaurant_reply(&entries))
}
