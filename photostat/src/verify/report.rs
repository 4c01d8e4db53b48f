//! Aggregated results of a verification run.

use serde::{Deserialize, Serialize};

use crate::verify::expectation::CheckOutcome;

/// Aggregate counts for a verification run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteMetrics {
    /// How many expectations ran.
    pub total_checks: usize,
    /// How many passed.
    pub passed_checks: usize,
    /// How many failed (including query errors).
    pub failed_checks: usize,
}

impl SuiteMetrics {
    /// Creates empty metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// The passed fraction as a percentage; 100 for an empty run.
    pub fn success_rate(&self) -> f64 {
        if self.total_checks == 0 {
            100.0
        } else {
            self.passed_checks as f64 / self.total_checks as f64 * 100.0
        }
    }
}

/// The results of running one verification suite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteReport {
    /// The suite's name.
    pub suite_name: String,
    /// Every outcome, in declaration order.
    pub outcomes: Vec<CheckOutcome>,
    /// Aggregate counts.
    pub metrics: SuiteMetrics,
}

impl SuiteReport {
    /// Assembles a report from collected outcomes.
    pub fn from_outcomes(suite_name: impl Into<String>, outcomes: Vec<CheckOutcome>) -> Self {
        let passed = outcomes.iter().filter(|o| o.status.is_passed()).count();
        let metrics = SuiteMetrics {
            total_checks: outcomes.len(),
            passed_checks: passed,
            failed_checks: outcomes.len() - passed,
        };
        Self {
            suite_name: suite_name.into(),
            outcomes,
            metrics,
        }
    }

    /// True when no expectation failed.
    pub fn is_success(&self) -> bool {
        self.metrics.failed_checks == 0
    }

    /// The failed outcomes, in declaration order.
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| o.status.is_failed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatValue;

    #[test]
    fn test_metrics_from_outcomes() {
        let report = SuiteReport::from_outcomes(
            "sample",
            vec![
                CheckOutcome::passed("a", StatValue::Long(1)),
                CheckOutcome::failed("b", StatValue::Long(2), "expected equals 3, got 2"),
                CheckOutcome::errored("c", "query failed: no photo records available"),
            ],
        );

        assert_eq!(report.metrics.total_checks, 3);
        assert_eq!(report.metrics.passed_checks, 1);
        assert_eq!(report.metrics.failed_checks, 2);
        assert!(!report.is_success());
        let failed: Vec<&str> = report.failures().map(|o| o.name.as_str()).collect();
        assert_eq!(failed, vec!["b", "c"]);
    }

    #[test]
    fn test_empty_report_is_success() {
        let report = SuiteReport::from_outcomes("empty", vec![]);
        assert!(report.is_success());
        assert_eq!(report.metrics.success_rate(), 100.0);
    }
}
