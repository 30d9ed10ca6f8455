//! Build reply messages from ranked suggestions.

use nearbite_core::{RankedEntry, truncate_chars};
use url::form_urlencoded;

use crate::line::{Action, CarouselColumn, ImageAspectRatio, ImageSize, Message, Template};

/// Alternative text of the restaurant carousel.
pub const CAROUSEL_ALT_TEXT: &str = "レストラン一覧";

/// Label of the button opening a place on the map.
pub const OPEN_IN_MAPS_LABEL: &str = "Google Mapで開く";

/// Text sent when the search found nothing.
pub const NO_RESULTS_TEXT: &str = "近くにレストランが見つかりませんでした。";

/// Background colour behind column images.
pub const IMAGE_BACKGROUND_COLOR: &str = "#FFFFFF";

/// Map search page used when an entry has no resolved detail URL.
pub const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// Longest column title the Messaging API accepts, in characters.
const MAX_TITLE_CHARS: usize = 40;

/// Echo `text` back to the sender.
#[must_use]
pub fn echo_reply(text: &str) -> Message {
    Message::Text {
        text: text.to_owned(),
    }
}

/// Present ranked suggestions as a carousel, one column per entry.
///
/// A carousel needs at least one column, so an empty ranking produces a
/// plain text notice instead. Entries without a detail URL keep their
/// column; the button then opens a map search for the name and address,
/// since the Messaging API rejects URI actions without a URI.
#[must_use]
pub fn restaurant_reply(entries: &[RankedEntry]) -> Message {
    if entries.is_empty() {
        return Message::Text {
            text: NO_RESULTS_TEXT.to_owned(),
        };
    }
    Message::Template {
        alt_text: CAROUSEL_ALT_TEXT.to_owned(),
        template: Template::Carousel {
            columns: entries.iter().map(column).collect(),
            image_aspect_ratio: ImageAspectRatio::Rectangle,
            image_size: ImageSize::Cover,
        },
    }
}

fn column(entry: &RankedEntry) -> CarouselColumn {
    CarouselColumn {
        thumbnail_image_url: None,
        image_background_color: IMAGE_BACKGROUND_COLOR.to_owned(),
        title: truncate_chars(&entry.name, MAX_TITLE_CHARS).to_owned(),
        text: entry.truncated_address.clone(),
        actions: vec![Action::Uri {
            label: OPEN_IN_MAPS_LABEL.to_owned(),
            uri: button_uri(entry),
        }],
    }
}

fn button_uri(entry: &RankedEntry) -> String {
    if entry.has_detail_url() {
        return entry.detail_url.clone();
    }
    map_search_uri(entry)
}

/// Map search URI for `entry`, querying its name and shortened address.
#[must_use]
pub fn map_search_uri(entry: &RankedEntry) -> String {
    let query = format!("{} {}", entry.name, entry.truncated_address);
    let params = form_urlencoded::Serializer::new(String::new())
        .append_pair("api", "1")
        .append_pair("query", query.trim())
        .finish();
    format!("{MAP_SEARCH_URL}?{params}")
}
