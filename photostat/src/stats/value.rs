//! The value shapes the query layer produces.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A computed statistic.
///
/// Queries produce one of a handful of shapes; expectations compare them by
/// deep value equality. The serde representation tags the shape so reports
/// serialize unambiguously.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum StatValue {
    /// An integer statistic (e.g. the photo count).
    Long(i64),
    /// A floating-point statistic (e.g. an average length).
    Double(f64),
    /// A single word or title.
    Text(String),
    /// An ordered sequence of words.
    Words(Vec<String>),
}

impl StatValue {
    /// Attempts to view the value as a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Long(v) => Some(*v as f64),
            StatValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// A compact human-readable rendering.
    pub fn to_string_pretty(&self) -> String {
        match self {
            StatValue::Long(v) => v.to_string(),
            StatValue::Double(v) => {
                if v.fract() == 0.0 {
                    format!("{v:.0}")
                } else {
                    format!("{v:.4}")
                }
            }
            StatValue::Text(s) => s.clone(),
            StatValue::Words(words) => format!("[{}]", words.join(", ")),
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_pretty())
    }
}

impl From<i64> for StatValue {
    fn from(value: i64) -> Self {
        StatValue::Long(value)
    }
}

impl From<usize> for StatValue {
    fn from(value: usize) -> Self {
        StatValue::Long(value as i64)
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        StatValue::Double(value)
    }
}

impl From<String> for StatValue {
    fn from(value: String) -> Self {
        StatValue::Text(value)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_owned())
    }
}

impl From<Vec<String>> for StatValue {
    fn from(value: Vec<String>) -> Self {
        StatValue::Words(value)
    }
}
