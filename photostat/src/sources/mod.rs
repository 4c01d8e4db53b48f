//! Feed loaders.
//!
//! A [`GallerySource`] turns some external representation of a photo feed
//! into an in-memory [`Gallery`](crate::gallery::Gallery). The only shipped
//! implementation reads a JSON document from disk, which is all the
//! fixture-verification harness needs.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::Result;
use crate::gallery::Gallery;

mod json;

pub use json::JsonFileSource;

/// A source a photo feed can be loaded from.
///
/// # Examples
///
/// ```rust,no_run
/// use photostat::sources::{GallerySource, JsonFileSource};
///
/// # async fn example() -> photostat::error::Result<()> {
/// let source = JsonFileSource::new("fixtures/dogs.json");
/// let gallery = source.load().await?;
/// println!("{} records", gallery.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait GallerySource: Debug + Send + Sync {
    /// Reads and parses the feed this source points at.
    async fn load(&self) -> Result<Gallery>;

    /// A human-readable description of the source.
    fn description(&self) -> String;
}
