//! Test doubles for the webhook collaborators and signed request builders.

use super::*;
use std::sync::{Arc, Mutex, PoisonError};

use axum::body::{Body, to_bytes};
use axum::http::{Request, Response};
use nearbite_core::test_support::{PrefixResolver, StubPlaceSearch};
use nearbite_core::{DetailResolver, PlaceSearch, RankedResultSelector, Recommender};

use crate::line::{Message, ReplyError, ReplySender};
use crate::serve::{ServeConfig, ServicesBuilder};
use crate::webhook::{BotServices, SIGNATURE_HEADER, sign};

pub(super) const CHANNEL_SECRET: &str = "test-channel-secret";
pub(super) const DETAIL_PREFIX: &str = "https://maps.example/?q=";

/// One recorded call to [`ReplySender::reply`].
#[derive(Debug, Clone, PartialEq)]
pub(super) struct SentReply {
    pub(super) reply_token: String,
    pub(super) messages: Vec<Message>,
}

/// Reply sender that records every reply; clones share the same log.
#[derive(Debug, Clone, Default)]
pub(super) struct RecordingReplySender {
    sent: Arc<Mutex<Vec<SentReply>>>,
    reject: bool,
}

impl RecordingReplySender {
    pub(super) fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    pub(super) fn sent(&self) -> Vec<SentReply> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ReplySender for RecordingReplySender {
    fn reply(&self, reply_token: &str, messages: &[Message]) -> Result<(), ReplyError> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SentReply {
                reply_token: reply_token.to_owned(),
                messages: messages.to_vec(),
            });
        if self.reject {
            return Err(ReplyError::HttpError {
                url: "https://api.line.example/v2/bot/message/reply".to_owned(),
                status: 400,
                message: "Invalid reply token".to_owned(),
            });
        }
        Ok(())
    }
}

pub(super) fn services_with(
    search: StubPlaceSearch,
    resolver: impl DetailResolver + 'static,
    replies: &RecordingReplySender,
) -> Arc<BotServices> {
    let search: Box<dyn PlaceSearch> = Box::new(search);
    let resolver: Box<dyn DetailResolver> = Box::new(resolver);
    Arc::new(BotServices::new(
        CHANNEL_SECRET,
        Recommender::new(search, resolver, RankedResultSelector::new()),
        Box::new(replies.clone()),
    ))
}

/// Builder handing out stub-backed services, used in place of the HTTP
/// clients.
#[derive(Debug, Default)]
pub(super) struct StubServicesBuilder {
    pub(super) replies: RecordingReplySender,
}

impl ServicesBuilder for StubServicesBuilder {
    fn build(&self, config: &ServeConfig) -> Result<BotServices, BotError> {
        let search: Box<dyn PlaceSearch> = Box::new(StubPlaceSearch::with_records(Vec::new()));
        let resolver: Box<dyn DetailResolver> = Box::new(PrefixResolver::new(DETAIL_PREFIX));
        Ok(BotServices::new(
            config.channel_secret.clone(),
            Recommender::new(search, resolver, RankedResultSelector::new()),
            Box::new(self.replies.clone()),
        ))
    }
}

pub(super) fn text_event_body(reply_token: &str, text: &str) -> String {
    serde_json::json!({
        "destination": "Ubot",
        "events": [{
            "type": "message",
            "replyToken": reply_token,
            "source": { "type": "user", "userId": "U1" },
            "message": { "id": "1", "type": "text", "text": text }
        }]
    })
    .to_string()
}

pub(super) fn location_event_body(reply_token: &str, latitude: f64, longitude: f64) -> String {
    serde_json::json!({
        "destination": "Ubot",
        "events": [{
            "type": "message",
            "replyToken": reply_token,
            "source": { "type": "user", "userId": "U1" },
            "message": {
                "id": "2",
                "type": "location",
                "title": "渋谷駅",
                "address": "東京都渋谷区道玄坂",
                "latitude": latitude,
                "longitude": longitude
            }
        }]
    })
    .to_string()
}

/// `POST /callback` request signed with [`CHANNEL_SECRET`].
pub(super) fn signed_callback(body: &str) -> Request<Body> {
    let signature = sign(CHANNEL_SECRET, body.as_bytes()).expect("test secret signs");
    callback_request(body, Some(&signature))
}

pub(super) fn callback_request(body: &str, signature: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/callback")
        .header("content-type", "application/json");
    if let Some(value) = signature {
        builder = builder.header(SIGNATURE_HEADER, value);
    }
    builder
        .body(Body::from(body.to_owned()))
        .expect("request should build")
}

pub(super) async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// Strip the quotes Gherkin step arguments keep around their values.
pub(super) fn unquote(text: &str) -> &str {
    text.trim_matches('"')
}
