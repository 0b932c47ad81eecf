//! Error types for the value model.

use thiserror::Error;

/// Errors produced by conversion from untyped input.
///
/// Conversion is total for anything a standard `serde_json` parse produces,
/// so these only surface when a caller violates that contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A number could not be represented as a finite `f64`.
    ///
    /// Only reachable when `serde_json` is built with arbitrary-precision
    /// numbers; a default parse never yields one.
    #[error("number is not representable as a finite f64: {repr}")]
    NonFiniteNumber { repr: String },
}
