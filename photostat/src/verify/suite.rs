//! Verification suite for organizing and running expectations.

use futures::future;
use tracing::{debug, info, instrument, warn};

use crate::gallery::Gallery;
use crate::stats::StatQuery;
use crate::verify::{Assertion, Expectation, SuiteReport};

/// An ordered, named collection of expectations run together against one
/// feed.
///
/// # Examples
///
/// ```rust
/// use photostat::stats::{StatQuery, StatValue};
/// use photostat::verify::{Assertion, VerificationSuite};
///
/// let suite = VerificationSuite::builder("feed_statistics")
///     .description("Sanity statistics over the sample feed")
///     .expect(
///         "image count should be 20",
///         StatQuery::ImageCount,
///         Assertion::Equals(StatValue::Long(20)),
///     )
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct VerificationSuite {
    name: String,
    description: Option<String>,
    expectations: Vec<Expectation>,
}

impl VerificationSuite {
    /// Starts building a suite with the given name.
    pub fn builder(name: impl Into<String>) -> VerificationSuiteBuilder {
        VerificationSuiteBuilder {
            name: name.into(),
            description: None,
            expectations: Vec::new(),
        }
    }

    /// The suite's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The optional description of the suite's purpose.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The expectations, in declaration order.
    pub fn expectations(&self) -> &[Expectation] {
        &self.expectations
    }

    /// Runs every expectation against the feed and collects all outcomes.
    ///
    /// Expectations are evaluated as independent futures; all outcomes are
    /// collected before the report is assembled, and they appear in
    /// declaration order regardless of completion order.
    #[instrument(skip(self, gallery), fields(suite = %self.name, checks = self.expectations.len()))]
    pub async fn run(&self, gallery: &Gallery) -> SuiteReport {
        debug!(records = gallery.len(), "Running verification suite");

        let outcomes =
            future::join_all(self.expectations.iter().map(|e| e.check(gallery))).await;

        for outcome in &outcomes {
            if outcome.status.is_failed() {
                warn!(
                    check.name = %outcome.name,
                    failure.message = outcome.message.as_deref().unwrap_or("no message"),
                    "Expectation failed"
                );
            } else {
                debug!(check.name = %outcome.name, "Expectation passed");
            }
        }

        let report = SuiteReport::from_outcomes(&self.name, outcomes);
        info!(
            passed = report.metrics.passed_checks,
            failed = report.metrics.failed_checks,
            "Verification suite finished"
        );
        report
    }
}

/// Builder for [`VerificationSuite`].
#[derive(Debug, Clone)]
pub struct VerificationSuiteBuilder {
    name: String,
    description: Option<String>,
    expectations: Vec<Expectation>,
}

impl VerificationSuiteBuilder {
    /// Sets the suite description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a named expectation.
    pub fn expect(mut self, name: impl Into<String>, query: StatQuery, assertion: Assertion) -> Self {
        self.expectations
            .push(Expectation::new(name, query, assertion));
        self
    }

    /// Adds an already-constructed expectation.
    pub fn expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }

    /// Finishes building the suite.
    pub fn build(self) -> VerificationSuite {
        VerificationSuite {
            name: self.name,
            description: self.description,
            expectations: self.expectations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::PhotoRecord;
    use crate::stats::StatValue;

    fn feed() -> Gallery {
        Gallery {
            items: vec![
                PhotoRecord {
                    title: "First".into(),
                    tags: "dog park".into(),
                    date_taken: "2016-06-26 14:12:07".into(),
                },
                PhotoRecord {
                    title: "Second".into(),
                    tags: "dog".into(),
                    date_taken: "2016-07-01 09:00:00".into(),
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_all_passing_suite() {
        let suite = VerificationSuite::builder("passing")
            .expect(
                "two photos",
                StatQuery::ImageCount,
                Assertion::Equals(StatValue::Long(2)),
            )
            .expect(
                "most common tag is dog",
                StatQuery::CommonTagByRank { rank: 0 },
                Assertion::Equals(StatValue::Text("dog".into())),
            )
            .build();

        let report = suite.run(&feed()).await;
        assert!(report.is_success());
        assert_eq!(report.metrics.total_checks, 2);
        assert_eq!(report.metrics.passed_checks, 2);
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_later_checks() {
        let suite = VerificationSuite::builder("mixed")
            .expect(
                "wrong count",
                StatQuery::ImageCount,
                Assertion::Equals(StatValue::Long(5)),
            )
            .expect(
                "oldest is First",
                StatQuery::OldestPhotoTitle,
                Assertion::Equals(StatValue::Text("First".into())),
            )
            .build();

        let report = suite.run(&feed()).await;
        assert!(!report.is_success());
        assert_eq!(report.metrics.failed_checks, 1);
        // Outcomes stay in declaration order.
        assert_eq!(report.outcomes[0].name, "wrong count");
        assert!(report.outcomes[1].status.is_passed());
    }

    #[test]
    fn test_builder_accessors() {
        let suite = VerificationSuite::builder("named")
            .description("a described suite")
            .build();
        assert_eq!(suite.name(), "named");
        assert_eq!(suite.description(), Some("a described suite"));
        assert!(suite.expectations().is_empty());
    }
}
