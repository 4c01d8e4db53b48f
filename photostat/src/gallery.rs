//! The in-memory photo feed data model.
//!
//! A feed document is a JSON object with a top-level `items` array. Each
//! element carries a `title`, a space-separated `tags` string, and a
//! `date_taken` string. Records are immutable once loaded; every statistic
//! in [`crate::stats`] is a pure function over a borrowed [`Gallery`].

use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use crate::error::{PhotostatError, Result};

/// A single photo record from the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    /// The photo title.
    pub title: String,
    /// Zero or more space-separated descriptive words.
    pub tags: String,
    /// The capture date as it appears in the feed.
    pub date_taken: String,
}

/// A whole photo feed: the top-level `items` array of the feed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    /// The photo records, in feed order.
    pub items: Vec<PhotoRecord>,
}

impl Gallery {
    /// Parses a feed document from raw JSON text.
    ///
    /// An absent `items` array or an absent record field surfaces as
    /// [`PhotostatError::MissingField`]; any other parse problem surfaces as
    /// [`PhotostatError::Json`].
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(classify_feed_error)
    }

    /// The number of records in the feed.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the feed has no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Maps serde's "missing field" data errors onto the crate's own taxonomy.
///
/// serde formats these as ``missing field `name` at line ...``, which is the
/// only stable handle on the field name the deserializer exposes.
fn classify_feed_error(err: serde_json::Error) -> PhotostatError {
    if err.classify() == Category::Data {
        let message = err.to_string();
        if let Some(rest) = message.strip_prefix("missing field `") {
            if let Some(field) = rest.split('`').next() {
                return PhotostatError::missing_field(field);
            }
        }
    }
    PhotostatError::Json(err)
}
