//! Structural diff engine for jsondelta.
//!
//! Compares two typed JSON values and produces a browsable diff tree. Every
//! outcome — including every mismatch — is success-path data; the engine
//! never fails for any pair of well-formed [`JsonValue`](jsondelta_value::JsonValue)s.
//!
//! Comparison is strictly positional: array elements are matched by index,
//! never re-aligned or reordered. This is a deliberate scope limitation, not
//! an optimization target.
//!
//! # Key Types
//!
//! - [`DiffNode`] — The four-variant diff tree (match, scalar mismatch, array, object)
//! - [`ArrayDiff`] / [`ArraySlot`] — Per-index comparison, with explicit one-sided
//!   slots when the inputs have different lengths
//! - [`ObjectDiff`] / [`FieldChange`] — Key-by-key partition of two objects

pub mod array;
pub mod node;
pub mod object;

pub use array::{diff_arrays, ArrayDiff, ArraySlot};
pub use node::{diff, DiffNode};
pub use object::{diff_objects, FieldChange, ObjectDiff};
