//! LINE Messaging API: outbound message types and the reply client.

mod client;
mod messages;

pub use client::{
    DEFAULT_LINE_API_BASE_URL, LineClientConfig, LineReplyClient, ReplyError, ReplySender,
};
pub use messages::{
    Action, CarouselColumn, ImageAspectRatio, ImageSize, Message, ReplyRequest, Template,
};
