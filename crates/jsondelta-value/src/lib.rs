//! Typed JSON value model for jsondelta.
//!
//! This crate provides the closed, tagged in-memory representation of a JSON
//! document used throughout jsondelta, together with the conversions between
//! it and the untyped `serde_json::Value` form produced by a generic parse.
//!
//! # Key Types
//!
//! - [`JsonValue`] — Closed six-variant representation of any JSON value
//! - [`ValueKind`] — The six variant tags, without payloads
//! - [`ValueError`] — Contract violations during conversion from untyped input
//!
//! Values are constructed once from parsed input and never mutated afterwards;
//! every operation over them is a pure function.

pub mod error;
pub mod value;

pub use error::ValueError;
pub use value::{JsonValue, ValueKind};
