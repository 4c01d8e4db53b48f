//! Prelude for commonly used types and traits in photostat.

pub use crate::error::{PhotostatError, Result};
pub use crate::formatters::{FormatterConfig, ResultFormatter};
pub use crate::gallery::{Gallery, PhotoRecord};
pub use crate::logging::LoggingConfig;
pub use crate::sources::{GallerySource, JsonFileSource};
pub use crate::stats::{StatQuery, StatValue};
pub use crate::verify::{Assertion, Expectation, SuiteReport, VerificationSuite};
