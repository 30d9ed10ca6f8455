//! Outbound message payloads in the Messaging API JSON shape.
//!
//! See: <https://developers.line.biz/en/reference/messaging-api/#message-objects>

use serde::Serialize;

/// A message sent back to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Message {
    /// Plain text.
    Text {
        /// Message body.
        text: String,
    },
    /// Template message, rendered as rich UI where supported.
    #[serde(rename_all = "camelCase")]
    Template {
        /// Text shown by clients that cannot render templates.
        alt_text: String,
        /// Template content.
        template: Template,
    },
}

/// Template content of a [`Message::Template`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Template {
    /// Horizontally scrollable columns.
    #[serde(rename_all = "camelCase")]
    Carousel {
        /// Columns, at most ten.
        columns: Vec<CarouselColumn>,
        /// Aspect ratio of column images.
        image_aspect_ratio: ImageAspectRatio,
        /// Scaling of column images.
        image_size: ImageSize,
    },
}

/// Aspect ratio of carousel images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageAspectRatio {
    /// 1.51:1.
    Rectangle,
    /// 1:1.
    Square,
}

/// Scaling of carousel images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    /// Fill the image area, cropping if needed.
    Cover,
    /// Fit the whole image, letterboxing if needed.
    Contain,
}

/// One column of a carousel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselColumn {
    /// Optional image at the top of the column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_image_url: Option<String>,
    /// Background colour behind the image, e.g. `#FFFFFF`.
    pub image_background_color: String,
    /// Column title.
    pub title: String,
    /// Column body text.
    pub text: String,
    /// Buttons under the text.
    pub actions: Vec<Action>,
}

/// Button action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Open a URI.
    Uri {
        /// Button label.
        label: String,
        /// Target URI.
        uri: String,
    },
}

/// Body of a reply request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest<'a> {
    /// Token from the webhook event being answered.
    pub reply_token: &'a str,
    /// Messages to send, at most five.
    pub messages: &'a [Message],
}
