//! The built-in fixture verification harness.
//!
//! Two shipped feed fixtures — a dogs feed and a landscapes feed, twenty
//! records each — are checked against fixed expected values. The entry
//! point takes the fixture paths as parameters and returns the structured
//! reports, so callers (the binary, tests) decide how to render them and
//! what exit status to surface.

use std::path::Path;

use tracing::instrument;

use crate::error::Result;
use crate::sources::{GallerySource, JsonFileSource};
use crate::stats::{StatQuery, StatValue};
use crate::verify::{Assertion, SuiteReport, VerificationSuite};

fn word_list(words: &[&str]) -> StatValue {
    StatValue::Words(words.iter().map(|w| (*w).to_owned()).collect())
}

/// The expectations for the dogs feed fixture.
pub fn dogs_suite() -> VerificationSuite {
    VerificationSuite::builder("dogs feed statistics")
        .description("Fixed statistics over the shipped dogs feed fixture")
        .expect(
            "image count should be 20",
            StatQuery::ImageCount,
            Assertion::Equals(StatValue::Long(20)),
        )
        .expect(
            "unique alphanumeric tags, lower-cased and sorted lexicographically",
            StatQuery::AlphanumericTagsUniq,
            Assertion::Equals(word_list(&[
                "baltic",
                "beach",
                "cute",
                "dog",
                "golden",
                "park",
                "pet",
                "poland",
                "portrait",
                "puppy",
                "retriever",
                "sleepy",
                "snow",
                "summer",
            ])),
        )
        .expect(
            "the only non-alphanumeric tag should be świnoujście",
            StatQuery::NonAlphanumericTags,
            Assertion::Equals(word_list(&["świnoujście"])),
        )
        .expect(
            "average title length should round to 26",
            StatQuery::AvgTitleLength,
            Assertion::RoundsTo(26),
        )
        .expect(
            "third most common tag should be puppy",
            StatQuery::CommonTagByRank { rank: 2 },
            Assertion::Equals(StatValue::Text("puppy".into())),
        )
        .expect(
            "oldest photo should be 20160626_P1060675",
            StatQuery::OldestPhotoTitle,
            Assertion::Equals(StatValue::Text("20160626_P1060675".into())),
        )
        .build()
}

/// The expectations for the landscapes feed fixture.
pub fn landscapes_suite() -> VerificationSuite {
    VerificationSuite::builder("landscapes feed statistics")
        .description("Fixed statistics over the shipped landscapes feed fixture")
        .expect(
            "image count should be 20",
            StatQuery::ImageCount,
            Assertion::Equals(StatValue::Long(20)),
        )
        .expect(
            "unique alphanumeric tags, lower-cased and sorted lexicographically",
            StatQuery::AlphanumericTagsUniq,
            Assertion::Equals(word_list(&[
                "autumn",
                "clouds",
                "golyazi",
                "lake",
                "landscape",
                "landscaping",
                "mist",
                "mountains",
                "nature",
                "panorama",
                "sky",
                "sunset",
                "turkey",
                "valley",
            ])),
        )
        .expect(
            "there should be no non-alphanumeric tags",
            StatQuery::NonAlphanumericTags,
            Assertion::Equals(StatValue::Words(vec![])),
        )
        .expect(
            "average title length should round to 16",
            StatQuery::AvgTitleLength,
            Assertion::RoundsTo(16),
        )
        .expect(
            "third most common tag should be landscaping",
            StatQuery::CommonTagByRank { rank: 2 },
            Assertion::Equals(StatValue::Text("landscaping".into())),
        )
        .expect(
            "oldest photo should be Boats of Golyazi",
            StatQuery::OldestPhotoTitle,
            Assertion::Equals(StatValue::Text("Boats of Golyazi".into())),
        )
        .build()
}

/// Loads both fixtures and runs both suites, returning one report per
/// suite.
///
/// A fixture that cannot be read or parsed aborts the run before any
/// expectation is checked; inside a suite, every expectation runs
/// regardless of earlier failures.
#[instrument(skip_all, fields(dogs = %dogs_path.as_ref().display(), landscapes = %landscapes_path.as_ref().display()))]
pub async fn run_fixture_verification(
    dogs_path: impl AsRef<Path>,
    landscapes_path: impl AsRef<Path>,
) -> Result<Vec<SuiteReport>> {
    let dogs = JsonFileSource::new(dogs_path.as_ref()).load().await?;
    let landscapes = JsonFileSource::new(landscapes_path.as_ref()).load().await?;

    let mut reports = Vec::with_capacity(2);
    reports.push(dogs_suite().run(&dogs).await);
    reports.push(landscapes_suite().run(&landscapes).await);
    Ok(reports)
}
