//! # Photostat - Photo Feed Statistics for Rust
//!
//! Photostat computes derived statistics over photo-sharing feed metadata
//! (a JSON `items` array of records with a title, a space-separated tags
//! string, and a capture date) and verifies shipped feed fixtures against
//! fixed expected values.
//!
//! ## Overview
//!
//! The statistics layer is a set of independent, composable pure
//! transformations over an in-memory feed: field extraction, word
//! normalization and classification, frequency and ordering aggregates,
//! and six public query functions. On top of it, the verification layer
//! runs named value-equality expectations and collects every outcome into
//! a report; the shipped binary maps any failure to a non-zero exit code.
//!
//! ## Quick Start
//!
//! ```rust
//! use photostat::prelude::*;
//! use photostat::verify::VerificationSuite;
//!
//! # async fn example() -> photostat::error::Result<()> {
//! // Load a feed
//! let gallery = JsonFileSource::new("fixtures/dogs.json").load().await?;
//!
//! // Ask individual statistics...
//! let count = photostat::stats::image_count(&gallery);
//! let third = photostat::stats::common_tag_by_rank(2, &gallery)?;
//! println!("{count} photos, third most common tag {third}");
//!
//! // ...or run a suite of named expectations
//! let suite = VerificationSuite::builder("my_checks")
//!     .expect(
//!         "image count should be 20",
//!         StatQuery::ImageCount,
//!         Assertion::Equals(StatValue::Long(20)),
//!     )
//!     .build();
//! let report = suite.run(&gallery).await;
//! println!("passed: {}", report.is_success());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`gallery`]**: the `PhotoRecord`/`Gallery` data model and JSON
//!   parsing with field-presence errors.
//! - **[`sources`]**: feed loaders (`GallerySource`, `JsonFileSource`).
//! - **[`stats`]**: the pure statistics pipeline and the six query
//!   functions.
//! - **[`verify`]**: expectations, assertions, suites, and reports.
//! - **[`harness`]**: the built-in fixture suites and the verification
//!   entry point.
//! - **[`formatters`]**: human-readable and JSON report rendering.
//! - **[`logging`]**: `tracing` subscriber setup for the binary and tests.

pub mod error;
pub mod formatters;
pub mod gallery;
pub mod harness;
pub mod logging;
pub mod prelude;
pub mod sources;
pub mod stats;
pub mod verify;
