//! Verification of feed statistics against expected values.
//!
//! This module provides the types for declaring and running named
//! value-equality expectations over a loaded feed:
//!
//! - **[`Assertion`]**: the success criterion (deep equality or integer
//!   rounding).
//! - **[`Expectation`]**: a named statistic paired with its assertion.
//! - **[`VerificationSuite`]**: an ordered collection of expectations with
//!   an async `run` that evaluates every expectation independently and
//!   collects all outcomes.
//! - **[`SuiteReport`]**: outcomes plus aggregate pass/fail metrics.
//!
//! ```text
//! VerificationSuite
//!     ├── Expectation ("image count should be 20")
//!     ├── Expectation ("third most common tag should be puppy")
//!     └── Expectation ("oldest photo should be ...")
//! ```
//!
//! An expectation whose query errors (a malformed date, a rank out of
//! range) is reported as a failed outcome carrying the error message; it
//! never aborts the remaining expectations.

mod assertion;
mod expectation;
mod report;
mod suite;

pub use assertion::Assertion;
pub use expectation::{CheckOutcome, CheckStatus, Expectation};
pub use report::{SuiteMetrics, SuiteReport};
pub use suite::{VerificationSuite, VerificationSuiteBuilder};
