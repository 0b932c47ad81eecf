//! Object-level diff: partition two objects' keys into five mappings.
//!
//! Each key in the union of the two key sets lands in exactly one outcome:
//! present only on one side, matching on both, or changed. A changed field is
//! recorded as an opaque left/right pair and never diffed further — only
//! whole-object and whole-array comparisons recurse, never individual fields.

use std::collections::BTreeMap;

use jsondelta_value::JsonValue;
use serde::{Deserialize, Serialize};

/// A field present on both sides with differing values.
///
/// Stored opaquely: the payloads may be containers, but they are not
/// decomposed into a nested diff.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    /// The value on the left side.
    pub left: JsonValue,
    /// The value on the right side.
    pub right: JsonValue,
}

/// The result of comparing two objects key by key.
///
/// All mappings are `BTreeMap`s, so iteration order is lexicographic and
/// deterministic. Presence of a key is decided by membership alone; `false`,
/// `0`, `""`, and `null` values classify exactly like any other value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectDiff {
    /// Keys present on both sides with deeply equal values (value stored once).
    pub matched: BTreeMap<String, JsonValue>,
    /// Keys present on both sides with differing values.
    pub changed: BTreeMap<String, FieldChange>,
    /// Left-side values of every changed key, for flat "everything that
    /// differs" rendering without re-walking [`ObjectDiff::changed`].
    pub changed_left: BTreeMap<String, JsonValue>,
    /// Right-side values of every changed key; mirror of
    /// [`ObjectDiff::changed_left`].
    pub changed_right: BTreeMap<String, JsonValue>,
    /// Keys present only on the left side.
    pub left_only: BTreeMap<String, JsonValue>,
    /// Keys present only on the right side.
    pub right_only: BTreeMap<String, JsonValue>,
}

impl ObjectDiff {
    /// Create an empty object diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the two objects were deeply equal: every key of the
    /// union landed in [`ObjectDiff::matched`].
    pub fn is_identical(&self) -> bool {
        self.changed.is_empty() && self.left_only.is_empty() && self.right_only.is_empty()
    }

    /// Number of keys in the union of the two key sets.
    pub fn key_count(&self) -> usize {
        self.matched.len() + self.changed.len() + self.left_only.len() + self.right_only.len()
    }

    /// Number of keys whose values differ between the sides.
    pub fn changed_count(&self) -> usize {
        self.changed.len()
    }
}

/// Compare two objects and classify every key of their union.
///
/// Single pass over each side, populating the result mappings in place.
pub fn diff_objects(
    left: &BTreeMap<String, JsonValue>,
    right: &BTreeMap<String, JsonValue>,
) -> ObjectDiff {
    let mut result = ObjectDiff::new();

    for (key, left_val) in left {
        match right.get(key) {
            Some(right_val) if left_val == right_val => {
                result.matched.insert(key.clone(), left_val.clone());
            }
            Some(right_val) => {
                result.changed.insert(
                    key.clone(),
                    FieldChange {
                        left: left_val.clone(),
                        right: right_val.clone(),
                    },
                );
                result.changed_left.insert(key.clone(), left_val.clone());
                result.changed_right.insert(key.clone(), right_val.clone());
            }
            None => {
                result.left_only.insert(key.clone(), left_val.clone());
            }
        }
    }

    for (key, right_val) in right {
        if !left.contains_key(key) {
            result.right_only.insert(key.clone(), right_val.clone());
        }
    }

    result
}
