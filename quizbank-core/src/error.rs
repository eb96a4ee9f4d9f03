//! Structured error types for quizbank-core.
//!
//! "Not found" is not an error here: lookups return `Option`. The only
//! failure the core produces is a write payload missing a required field.

use thiserror::Error;

/// A write payload failed its presence checks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent (or `null`) in a create/update payload
    #[error("field required: {field}")]
    MissingField { field: &'static str },
}
