//! JSON file feed source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::gallery::Gallery;
use crate::sources::GallerySource;

/// Reads a photo feed from a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GallerySource for JsonFileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Gallery> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let gallery = Gallery::from_json_str(&raw)?;
        debug!(records = gallery.len(), "Loaded photo feed");
        Ok(gallery)
    }

    fn description(&self) -> String {
        format!("JSON feed at {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhotostatError;
    use std::io::Write;

    #[tokio::test]
    async fn test_loads_feed_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"items": [{{"title": "Only", "tags": "dog", "date_taken": "2016-06-26 14:12:07"}}]}}"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path());
        let gallery = source.load().await.unwrap();
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.items[0].title, "Only");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = JsonFileSource::new("/definitely/not/here.json");
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, PhotostatError::Io(_)));
    }

    #[tokio::test]
    async fn test_invalid_document_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"items\": 42}}").unwrap();

        let source = JsonFileSource::new(file.path());
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, PhotostatError::Json(_)));
    }

    #[test]
    fn test_description_names_the_path() {
        let source = JsonFileSource::new("fixtures/dogs.json");
        assert_eq!(source.description(), "JSON feed at fixtures/dogs.json");
    }
}
