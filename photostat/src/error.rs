//! Error types for the photostat library.

use thiserror::Error;

/// Result type for photostat operations.
pub type Result<T> = std::result::Result<T, PhotostatError>;

/// Errors that can occur while loading a feed or computing statistics.
#[derive(Error, Debug)]
pub enum PhotostatError {
    /// A required field was absent from the photo feed document.
    #[error("missing required field `{0}` in photo feed")]
    MissingField(String),

    /// A `date_taken` value could not be parsed as a calendar time.
    #[error("malformed capture date `{value}`: {reason}")]
    MalformedDate {
        /// The raw date string that failed to parse.
        value: String,
        /// Why none of the accepted formats matched.
        reason: String,
    },

    /// A frequency rank beyond the number of distinct tag words was requested.
    #[error("tag rank {rank} out of range: only {distinct} distinct tag words")]
    RankOutOfRange {
        /// The zero-based rank that was requested.
        rank: usize,
        /// How many distinct tag words the feed actually has.
        distinct: usize,
    },

    /// A statistic that needs at least one record was asked of an empty feed.
    #[error("no photo records available")]
    EmptyGallery,

    /// The feed document was not valid JSON.
    #[error("failed to parse photo feed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A feed file could not be read.
    #[error("failed to read photo feed: {0}")]
    Io(#[from] std::io::Error),
}

impl PhotostatError {
    /// Creates a missing-field error for the given field name.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Creates a malformed-date error for the given raw value.
    pub fn malformed_date(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDate {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates a rank-out-of-range error.
    pub fn rank_out_of_range(rank: usize, distinct: usize) -> Self {
        Self::RankOutOfRange { rank, distinct }
    }
}
