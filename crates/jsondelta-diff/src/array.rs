//! Array-level diff: per-index comparison with explicit one-sided slots.
//!
//! Elements are compared strictly by position; there is no re-alignment of
//! reordered elements. When the inputs have different lengths, the tail of
//! the longer side becomes one-sided slots, so the result always covers
//! `max(left.len(), right.len())` indices and no index is ever read out of
//! range on either side.

use jsondelta_value::JsonValue;
use serde::{Deserialize, Serialize};

use crate::node::{diff, DiffNode};

/// The outcome at a single array index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ArraySlot {
    /// Both sides have an element at this index.
    Both(DiffNode),
    /// Only the left array reaches this index.
    LeftOnly(JsonValue),
    /// Only the right array reaches this index.
    RightOnly(JsonValue),
}

impl ArraySlot {
    /// Returns `true` if both sides have this index and the values carry no
    /// difference anywhere.
    pub fn is_identical(&self) -> bool {
        match self {
            ArraySlot::Both(node) => node.is_identical(),
            ArraySlot::LeftOnly(_) | ArraySlot::RightOnly(_) => false,
        }
    }
}

/// The result of comparing two arrays position by position.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayDiff {
    /// One slot per index, `0..max(left.len(), right.len())`.
    pub slots: Vec<ArraySlot>,
}

impl ArrayDiff {
    /// Create an empty array diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of indices covered.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no indices are covered (both inputs were empty).
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if the two arrays were deeply equal.
    pub fn is_identical(&self) -> bool {
        self.slots.iter().all(ArraySlot::is_identical)
    }
}

/// Compare two arrays index by index.
///
/// Shared indices recurse through [`diff`]; the tail of the longer input is
/// reported as one-sided slots.
pub fn diff_arrays(left: &[JsonValue], right: &[JsonValue]) -> ArrayDiff {
    let shared = left.len().min(right.len());
    let mut slots = Vec::with_capacity(left.len().max(right.len()));

    for i in 0..shared {
        slots.push(ArraySlot::Both(diff(&left[i], &right[i])));
    }
    for val in &left[shared..] {
        slots.push(ArraySlot::LeftOnly(val.clone()));
    }
    for val in &right[shared..] {
        slots.push(ArraySlot::RightOnly(val.clone()));
    }

    ArrayDiff { slots }
}
