//! Field extractors over a loaded feed.
//!
//! Field presence is enforced when the feed is deserialized, so extraction
//! is total and borrows straight from the records.

use crate::gallery::Gallery;

/// Every record's title, in feed order.
pub fn titles(gallery: &Gallery) -> Vec<&str> {
    gallery.items.iter().map(|item| item.title.as_str()).collect()
}

/// Every record's raw tags string, in feed order.
pub fn tag_strings(gallery: &Gallery) -> Vec<&str> {
    gallery.items.iter().map(|item| item.tags.as_str()).collect()
}

/// Every record's capture date string, in feed order.
pub fn capture_dates(gallery: &Gallery) -> Vec<&str> {
    gallery
        .items
        .iter()
        .map(|item| item.date_taken.as_str())
        .collect()
}
