//! API response type definitions.

use serde_json::{Map, Value};

/// A single post picked out of a listing response.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingResult {
    /// The post's `url` field, usually a link to the media to convert.
    pub target_url: String,

    /// The post's full `data` object as returned by Reddit.
    pub raw_post_data: Map<String, Value>,
}

impl ListingResult {
    /// Get a string field from the raw post data.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.raw_post_data.get(name).and_then(Value::as_str)
    }

    /// Post title, if Reddit sent one.
    pub fn title(&self) -> Option<&str> {
        self.field("title")
    }
}
