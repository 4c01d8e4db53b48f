//! The statistics pipeline over a loaded photo feed.
//!
//! Everything here is a pure function: raw feed → extracted field sequences
//! → normalized/classified words → aggregates → query results. No stage
//! mutates its input; every stage returns a fresh value.
//!
//! The layers, leaf-first:
//!
//! - **[`extract`]**: pull the `title`, `tags`, and `date_taken` sequences
//!   out of a [`Gallery`](crate::gallery::Gallery) in feed order.
//! - **[`words`]**: split tag strings into one flat word sequence, classify
//!   words as alphanumeric, lower-case/de-duplicate/sort.
//! - **[`aggregate`]**: frequency tallies, descending rank with a
//!   deterministic tie-break, and the title/date pairing with its stable
//!   ascending date sort.
//! - **[`queries`]**: the six public statistics, plus [`StatQuery`] which
//!   names them for the verification layer.

pub mod aggregate;
pub mod extract;
pub mod queries;
pub mod value;
pub mod words;

pub use aggregate::{RankedWord, TitleDatePair};
pub use queries::{
    alphanumeric_tags_uniq, avg_title_length, common_tag_by_rank, image_count,
    non_alphanumeric_tags, oldest_photo_title, StatQuery,
};
pub use value::StatValue;
