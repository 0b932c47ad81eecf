//! The typed JSON value and its conversions.
//!
//! [`JsonValue`] is a closed variant over the six JSON shapes. Object payloads
//! live in a `BTreeMap`, so key order is normalized on conversion; the model
//! treats key order as semantically insignificant.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValueError;

/// The six variant tags of [`JsonValue`], without payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Returns `true` for the four non-container tags.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            ValueKind::Null | ValueKind::Bool | ValueKind::Number | ValueKind::String
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        write!(f, "{name}")
    }
}

/// Closed, tagged representation of any JSON value.
///
/// Structural equality (`PartialEq`) is deep equality:
///
/// - different variants are never equal;
/// - scalars compare by native payload equality (numbers numerically);
/// - arrays compare positionally and must have equal length;
/// - objects must have identical key sets and equal values per key.
///
/// `Eq` is not derived because numbers are `f64`. A `NaN` payload never
/// arises from [`JsonValue::from_json`], so within the conversion contract
/// equality is reflexive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(BTreeMap<String, JsonValue>),
}

impl JsonValue {
    /// Convert an untyped, already-parsed JSON value into the typed model.
    ///
    /// Classifies by native shape and recurses into containers. Total for
    /// anything a default `serde_json` parse produces; the only failure is a
    /// number outside the finite `f64` range, which is a contract violation
    /// by the caller rather than a runtime path.
    pub fn from_json(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(JsonValue::Null),
            Value::Bool(b) => Ok(JsonValue::Bool(*b)),
            Value::Number(n) => n
                .as_f64()
                .filter(|f| f.is_finite())
                .map(JsonValue::Number)
                .ok_or_else(|| ValueError::NonFiniteNumber {
                    repr: n.to_string(),
                }),
            Value::String(s) => Ok(JsonValue::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Self::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(JsonValue::Array),
            Value::Object(fields) => fields
                .iter()
                .map(|(key, val)| Ok((key.clone(), Self::from_json(val)?)))
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map(JsonValue::Object),
        }
    }

    /// Convert back to the untyped `serde_json` form.
    ///
    /// Inverse shape mapping of [`JsonValue::from_json`]: round-tripping any
    /// parser-produced value reproduces it modulo object key order and
    /// numeric canonicalization. Numbers are doubles in this model, so an
    /// integral payload is emitted as a JSON integer (`1.0` becomes `1`,
    /// `-0.0` becomes `0`). A non-finite payload (outside the conversion
    /// contract) maps to JSON `null`.
    pub fn to_json(&self) -> Value {
        match self {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => {
                // 2^53: integral doubles in this range convert to i64 exactly.
                if n.fract() == 0.0 && n.abs() <= 9_007_199_254_740_992.0 {
                    Value::Number(serde_json::Number::from(*n as i64))
                } else {
                    serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number)
                }
            }
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            JsonValue::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(key, val)| (key.clone(), val.to_json()))
                    .collect(),
            ),
        }
    }

    /// The variant tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            JsonValue::Null => ValueKind::Null,
            JsonValue::Bool(_) => ValueKind::Bool,
            JsonValue::Number(_) => ValueKind::Number,
            JsonValue::String(_) => ValueKind::String,
            JsonValue::Array(_) => ValueKind::Array,
            JsonValue::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` if this value is one of the four non-container shapes.
    pub fn is_scalar(&self) -> bool {
        self.kind().is_scalar()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn typed(value: Value) -> JsonValue {
        JsonValue::from_json(&value).expect("parser-produced value converts")
    }

    #[test]
    fn scalars_convert_by_shape() {
        assert_eq!(typed(json!(null)), JsonValue::Null);
        assert_eq!(typed(json!(true)), JsonValue::Bool(true));
        assert_eq!(typed(json!(42)), JsonValue::Number(42.0));
        assert_eq!(typed(json!("hi")), JsonValue::String("hi".into()));
    }

    #[test]
    fn containers_convert_recursively() {
        let value = typed(json!({"items": [1, {"deep": null}], "n": 2}));
        let JsonValue::Object(fields) = &value else {
            panic!("expected object, got {value:?}");
        };
        assert_eq!(fields.len(), 2);
        assert!(matches!(fields["items"], JsonValue::Array(_)));
    }

    #[test]
    fn round_trip_preserves_structure() {
        let raw = json!({
            "name": "widget",
            "tags": ["a", "b"],
            "count": 3,
            "price": 1.5,
            "nested": {"flag": false, "inner": [null, {"x": 0}]}
        });
        assert_eq!(typed(raw.clone()).to_json(), raw);
    }

    #[test]
    fn round_trip_normalizes_key_order() {
        let raw: Value = serde_json::from_str(r#"{"b": 1, "a": 2}"#).unwrap();
        let back = typed(raw).to_json();
        assert_eq!(back, json!({"a": 2, "b": 1}));
    }

    #[test]
    fn equality_is_reflexive_and_symmetric() {
        let a = typed(json!({"k": [1, 2, {"x": true}]}));
        let b = typed(json!({"k": [1, 2, {"x": true}]}));
        assert_eq!(a, a);
        assert_eq!(a == b, b == a);
        assert_eq!(a, b);
    }

    #[test]
    fn different_kinds_are_never_equal() {
        assert_ne!(typed(json!(0)), typed(json!(null)));
        assert_ne!(typed(json!("1")), typed(json!(1)));
        assert_ne!(typed(json!([])), typed(json!({})));
    }

    #[test]
    fn array_equality_is_positional() {
        // Same elements, different order: not equal.
        assert_ne!(typed(json!([1, 2])), typed(json!([2, 1])));
        // One pairwise match per element is not enough.
        assert_ne!(typed(json!([1, 1])), typed(json!([1, 2])));
        assert_eq!(typed(json!([1, 2])), typed(json!([1, 2])));
    }

    #[test]
    fn array_equality_respects_multiplicity() {
        assert_ne!(typed(json!([1, 2, 2])), typed(json!([1, 1, 2])));
    }

    #[test]
    fn object_equality_requires_identical_key_sets() {
        // Equal size, different keys.
        assert_ne!(typed(json!({"a": 1})), typed(json!({"b": 1})));
        assert_ne!(typed(json!({"a": 1, "b": 2})), typed(json!({"a": 1})));
    }

    #[test]
    fn object_equality_checks_every_key() {
        // A mismatch on a non-final key must not be masked by later matches.
        assert_ne!(
            typed(json!({"a": 1, "z": 9})),
            typed(json!({"a": 2, "z": 9}))
        );
    }

    #[test]
    fn number_equality_is_numeric() {
        let int: Value = serde_json::from_str("1").unwrap();
        let float: Value = serde_json::from_str("1.0").unwrap();
        assert_eq!(typed(int), typed(float));
    }

    #[test]
    fn kind_reports_the_tag() {
        assert_eq!(typed(json!(null)).kind(), ValueKind::Null);
        assert_eq!(typed(json!([1])).kind(), ValueKind::Array);
        assert_eq!(typed(json!({})).kind(), ValueKind::Object);
        assert!(typed(json!("s")).is_scalar());
        assert!(!typed(json!({})).is_scalar());
    }

    #[test]
    fn integral_floats_canonicalize_to_integers() {
        let raw: Value = serde_json::from_str(r#"{"a": 1.0, "b": 1.5}"#).unwrap();
        assert_eq!(typed(raw).to_json(), json!({"a": 1, "b": 1.5}));
    }

    #[test]
    fn serde_roundtrip() {
        let value = typed(json!({"a": [1, false, null]}));
        let encoded = serde_json::to_string(&value).unwrap();
        let decoded: JsonValue = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value, decoded);
    }
}
