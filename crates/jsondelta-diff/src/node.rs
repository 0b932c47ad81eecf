//! The diff tree and the comparison entry point.

use jsondelta_value::JsonValue;
use serde::{Deserialize, Serialize};

use crate::array::{diff_arrays, ArrayDiff};
use crate::object::{diff_objects, ObjectDiff};

/// The relationship between two compared JSON values.
///
/// Every outcome is data: a mismatch is a successful comparison result, not
/// an error, and [`diff`] can never fail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DiffNode {
    /// The two values are deeply equal; the shared value is stored once.
    Match { value: JsonValue },
    /// Two unequal scalars, or two values of different kinds.
    ScalarMismatch { left: JsonValue, right: JsonValue },
    /// Both values are arrays; compared position by position.
    Array(ArrayDiff),
    /// Both values are objects; keys partitioned into the five mappings.
    Object(ObjectDiff),
}

impl DiffNode {
    /// Returns `true` if the comparison found no difference anywhere.
    ///
    /// Two equal containers still produce an [`DiffNode::Array`] or
    /// [`DiffNode::Object`] node rather than a top-level `Match`; this walks
    /// the structure so a renderer can treat them uniformly.
    pub fn is_identical(&self) -> bool {
        match self {
            DiffNode::Match { .. } => true,
            DiffNode::ScalarMismatch { .. } => false,
            DiffNode::Array(arr) => arr.is_identical(),
            DiffNode::Object(obj) => obj.is_identical(),
        }
    }
}

/// Compare two typed JSON values.
///
/// - Different kinds are reported as a [`DiffNode::ScalarMismatch`] carrying
///   both values whole; a kind mismatch is a result, never a failure.
/// - Scalars of the same kind compare by deep equality.
/// - Two objects or two arrays always produce a structural node, even when
///   deeply equal, so the per-key / per-index detail stays browsable.
pub fn diff(left: &JsonValue, right: &JsonValue) -> DiffNode {
    if left.kind() != right.kind() {
        return DiffNode::ScalarMismatch {
            left: left.clone(),
            right: right.clone(),
        };
    }

    match (left, right) {
        (JsonValue::Object(l), JsonValue::Object(r)) => DiffNode::Object(diff_objects(l, r)),
        (JsonValue::Array(l), JsonValue::Array(r)) => DiffNode::Array(diff_arrays(l, r)),
        _ if left == right => DiffNode::Match {
            value: left.clone(),
        },
        _ => DiffNode::ScalarMismatch {
            left: left.clone(),
            right: right.clone(),
        },
    }
}
