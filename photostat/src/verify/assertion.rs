//! Success criteria for expectations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stats::StatValue;

/// An assertion evaluated against a computed statistic.
///
/// # Examples
///
/// ```rust
/// use photostat::stats::StatValue;
/// use photostat::verify::Assertion;
///
/// let assertion = Assertion::Equals(StatValue::Long(20));
/// assert!(assertion.holds(&StatValue::Long(20)));
///
/// let assertion = Assertion::RoundsTo(26);
/// assert!(assertion.holds(&StatValue::Double(26.1)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Assertion {
    /// The actual value must deep-equal the expected value.
    Equals(StatValue),
    /// The actual value must be numeric and round to the expected integer.
    RoundsTo(i64),
}

impl Assertion {
    /// Evaluates the assertion against an actual value.
    pub fn holds(&self, actual: &StatValue) -> bool {
        match self {
            Assertion::Equals(expected) => actual == expected,
            Assertion::RoundsTo(expected) => actual
                .as_f64()
                .map(|value| value.round() as i64 == *expected)
                .unwrap_or(false),
        }
    }

    /// A human-readable description of the criterion.
    pub fn description(&self) -> String {
        match self {
            Assertion::Equals(expected) => format!("equals {expected}"),
            Assertion::RoundsTo(expected) => format!("rounds to {expected}"),
        }
    }
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals_is_deep() {
        let assertion = Assertion::Equals(StatValue::Words(vec!["dog".into(), "pet".into()]));
        assert!(assertion.holds(&StatValue::Words(vec!["dog".into(), "pet".into()])));
        assert!(!assertion.holds(&StatValue::Words(vec!["pet".into(), "dog".into()])));
        assert!(!assertion.holds(&StatValue::Text("dog".into())));
    }

    #[test]
    fn test_rounds_to() {
        let assertion = Assertion::RoundsTo(26);
        assert!(assertion.holds(&StatValue::Double(26.1)));
        assert!(assertion.holds(&StatValue::Double(25.5)));
        assert!(assertion.holds(&StatValue::Long(26)));
        assert!(!assertion.holds(&StatValue::Double(26.5)));
        assert!(!assertion.holds(&StatValue::Text("26".into())));
    }

    #[test]
    fn test_description() {
        assert_eq!(
            Assertion::Equals(StatValue::Long(20)).description(),
            "equals 20"
        );
        assert_eq!(Assertion::RoundsTo(16).description(), "rounds to 16");
    }
}
