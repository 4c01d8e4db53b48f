//! Named expectations and their outcomes.

use serde::{Deserialize, Serialize};

use crate::gallery::Gallery;
use crate::stats::{StatQuery, StatValue};
use crate::verify::Assertion;

/// The status of a checked expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The expectation held.
    Passed,
    /// The expectation did not hold, or its query errored.
    Failed,
}

impl CheckStatus {
    /// Returns true if this is a Passed status.
    pub fn is_passed(&self) -> bool {
        matches!(self, CheckStatus::Passed)
    }

    /// Returns true if this is a Failed status.
    pub fn is_failed(&self) -> bool {
        matches!(self, CheckStatus::Failed)
    }
}

/// The outcome of checking one expectation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// The expectation's name.
    pub name: String,
    /// Pass or fail.
    pub status: CheckStatus,
    /// The computed value, when the query succeeded.
    pub actual: Option<StatValue>,
    /// Failure context: the mismatch description or the query error.
    pub message: Option<String>,
}

impl CheckOutcome {
    /// Creates a passed outcome carrying the computed value.
    pub fn passed(name: impl Into<String>, actual: StatValue) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Passed,
            actual: Some(actual),
            message: None,
        }
    }

    /// Creates a failed outcome for a value that did not satisfy the
    /// assertion.
    pub fn failed(name: impl Into<String>, actual: StatValue, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Failed,
            actual: Some(actual),
            message: Some(message.into()),
        }
    }

    /// Creates a failed outcome for a query that errored.
    pub fn errored(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Failed,
            actual: None,
            message: Some(message.into()),
        }
    }
}

/// A named expectation: a statistic and the assertion it must satisfy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expectation {
    name: String,
    query: StatQuery,
    assertion: Assertion,
}

impl Expectation {
    /// Creates a new expectation.
    pub fn new(name: impl Into<String>, query: StatQuery, assertion: Assertion) -> Self {
        Self {
            name: name.into(),
            query,
            assertion,
        }
    }

    /// The expectation's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The statistic this expectation evaluates.
    pub fn query(&self) -> &StatQuery {
        &self.query
    }

    /// The success criterion.
    pub fn assertion(&self) -> &Assertion {
        &self.assertion
    }

    /// Evaluates the statistic over a feed and checks the assertion.
    ///
    /// A query error is reported as a failed outcome rather than
    /// propagated, so one broken expectation cannot silence the rest of a
    /// suite.
    pub async fn check(&self, gallery: &Gallery) -> CheckOutcome {
        match self.query.evaluate(gallery) {
            Ok(actual) => {
                if self.assertion.holds(&actual) {
                    CheckOutcome::passed(&self.name, actual)
                } else {
                    let message = format!("expected {}, got {actual}", self.assertion);
                    CheckOutcome::failed(&self.name, actual, message)
                }
            }
            Err(err) => CheckOutcome::errored(&self.name, format!("query failed: {err}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::PhotoRecord;

    fn one_record_feed() -> Gallery {
        Gallery {
            items: vec![PhotoRecord {
                title: "Snow dog".into(),
                tags: "dog snow".into(),
                date_taken: "2017-04-09 09:51:05".into(),
            }],
        }
    }

    #[tokio::test]
    async fn test_check_passes() {
        let expectation = Expectation::new(
            "one photo",
            StatQuery::ImageCount,
            Assertion::Equals(StatValue::Long(1)),
        );
        let outcome = expectation.check(&one_record_feed()).await;
        assert!(outcome.status.is_passed());
        assert_eq!(outcome.actual, Some(StatValue::Long(1)));
        assert!(outcome.message.is_none());
    }

    #[tokio::test]
    async fn test_check_fails_with_mismatch_message() {
        let expectation = Expectation::new(
            "two photos",
            StatQuery::ImageCount,
            Assertion::Equals(StatValue::Long(2)),
        );
        let outcome = expectation.check(&one_record_feed()).await;
        assert!(outcome.status.is_failed());
        assert_eq!(outcome.message.as_deref(), Some("expected equals 2, got 1"));
    }

    #[tokio::test]
    async fn test_query_error_becomes_failed_outcome() {
        let expectation = Expectation::new(
            "deep rank",
            StatQuery::CommonTagByRank { rank: 99 },
            Assertion::Equals(StatValue::Text("dog".into())),
        );
        let outcome = expectation.check(&one_record_feed()).await;
        assert!(outcome.status.is_failed());
        assert!(outcome.actual.is_none());
        assert!(outcome.message.unwrap().starts_with("query failed:"));
    }
}
