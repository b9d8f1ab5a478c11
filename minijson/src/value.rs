// SPDX-License-Identifier: Apache-2.0

//! The in-memory JSON value tree.

use std::collections::BTreeMap;
use std::ops;

/// Lookup misses resolve to a reference to this shared sentinel, keeping
/// chained lookups like `doc["a"]["b"][0]` total.
static NON_EXISTENT: JsonValue = JsonValue::Invalid;

/// The variant tag of a [`JsonValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Invalid,
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

/// One JSON element: a scalar or a container of further values.
///
/// A tree is fully owned; nothing in it refers back to the buffer it was
/// parsed from. `Object` members are kept ordered by key (not by insertion
/// order), which makes serialization reproducible and lookup O(log n).
///
/// `Invalid` means "no value": it is what [`Default`] constructs and what
/// lookups return on a miss. A successful parse never produces it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    #[default]
    Invalid,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(BTreeMap<String, JsonValue>),
}

impl JsonValue {
    /// Returns the variant tag.
    pub fn kind(&self) -> Kind {
        match self {
            JsonValue::Invalid => Kind::Invalid,
            JsonValue::Null => Kind::Null,
            JsonValue::Bool(_) => Kind::Bool,
            JsonValue::Number(_) => Kind::Number,
            JsonValue::String(_) => Kind::String,
            JsonValue::Array(_) => Kind::Array,
            JsonValue::Object(_) => Kind::Object,
        }
    }

    /// Lowercase variant name, for human-facing output.
    pub fn kind_name(&self) -> &'static str {
        match self.kind() {
            Kind::Invalid => "invalid",
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }

    /// False only for the `Invalid` sentinel.
    pub fn is_valid(&self) -> bool {
        !matches!(self, JsonValue::Invalid)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// The payload if this is a `Bool`, `None` otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The payload if this is a `Number`, `None` otherwise.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The payload if this is a `String`, `None` otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements if this is an `Array`, `None` otherwise.
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(values) => Some(values),
            _ => None,
        }
    }

    /// The members if this is an `Object`, `None` otherwise.
    pub fn as_object(&self) -> Option<&BTreeMap<String, JsonValue>> {
        match self {
            JsonValue::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Member lookup. `None` unless this is an object holding `key`.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(members) => members.get(key),
            _ => None,
        }
    }

    /// Element lookup. `None` unless this is an array and `index` is in range.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(values) => values.get(index),
            _ => None,
        }
    }

    /// 0 for `Null` and `Invalid`, the element/member count for containers,
    /// 1 for every scalar.
    pub fn size(&self) -> usize {
        match self {
            JsonValue::Invalid | JsonValue::Null => 0,
            JsonValue::Array(values) => values.len(),
            JsonValue::Object(members) => members.len(),
            _ => 1,
        }
    }

    /// Serialize back to text.
    ///
    /// `indent` is the per-level indentation unit and `indent_level` the
    /// starting nesting depth. Containers always render multi-line with no
    /// trailing comma; object members come out in key order. `Invalid` has
    /// no textual form and renders as the empty string.
    pub fn dump(&self, indent: &str, indent_level: usize) -> String {
        let indent_str = indent.repeat(indent_level);
        match self {
            JsonValue::Invalid => String::new(),
            JsonValue::Null => "null".to_string(),
            JsonValue::Bool(true) => "true".to_string(),
            JsonValue::Bool(false) => "false".to_string(),
            JsonValue::Number(n) => n.to_string(),
            // TODO: escape quotes, backslashes and control characters
            JsonValue::String(s) => format!("\"{s}\""),
            JsonValue::Array(values) => {
                let mut out = String::from("[\n");
                for (i, value) in values.iter().enumerate() {
                    out.push_str(&indent_str);
                    out.push_str(indent);
                    out.push_str(&value.dump(indent, indent_level + 1));
                    if i + 1 < values.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                out.push_str(&indent_str);
                out.push(']');
                out
            }
            JsonValue::Object(members) => {
                let mut out = String::from("{\n");
                for (i, (key, value)) in members.iter().enumerate() {
                    out.push_str(&indent_str);
                    out.push_str(indent);
                    out.push('"');
                    out.push_str(key);
                    out.push_str("\": ");
                    out.push_str(&value.dump(indent, indent_level + 1));
                    if i + 1 < members.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                out.push_str(&indent_str);
                out.push('}');
                out
            }
        }
    }
}

impl<'a> ops::Index<&'a str> for JsonValue {
    type Output = JsonValue;

    /// Total member lookup: any kind of miss yields the `Invalid` sentinel.
    fn index(&self, key: &'a str) -> &JsonValue {
        self.get(key).unwrap_or(&NON_EXISTENT)
    }
}

impl ops::Index<usize> for JsonValue {
    type Output = JsonValue;

    /// Total element lookup: any kind of miss yields the `Invalid` sentinel.
    fn index(&self, index: usize) -> &JsonValue {
        self.get_index(index).unwrap_or(&NON_EXISTENT)
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<f64> for JsonValue {
    fn from(n: f64) -> Self {
        JsonValue::Number(n)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(values: Vec<JsonValue>) -> Self {
        JsonValue::Array(values)
    }
}

impl From<BTreeMap<String, JsonValue>> for JsonValue {
    fn from(members: BTreeMap<String, JsonValue>) -> Self {
        JsonValue::Object(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_the_stored_variant() {
        assert_eq!(JsonValue::Invalid.kind(), Kind::Invalid);
        assert_eq!(JsonValue::Null.kind(), Kind::Null);
        assert_eq!(JsonValue::Bool(true).kind(), Kind::Bool);
        assert_eq!(JsonValue::Number(1.0).kind(), Kind::Number);
        assert_eq!(JsonValue::String("s".to_string()).kind(), Kind::String);
        assert_eq!(JsonValue::Array(vec![]).kind(), Kind::Array);
        assert_eq!(JsonValue::Object(BTreeMap::new()).kind(), Kind::Object);
    }

    #[test]
    fn default_is_the_invalid_sentinel() {
        let value = JsonValue::default();
        assert_eq!(value.kind(), Kind::Invalid);
        assert!(!value.is_valid());
    }

    #[test]
    fn accessors_return_payloads_only_for_matching_kinds() {
        assert_eq!(JsonValue::Bool(true).as_bool(), Some(true));
        assert_eq!(JsonValue::Number(2.5).as_number(), Some(2.5));
        assert_eq!(JsonValue::from("hi").as_str(), Some("hi"));
        assert_eq!(JsonValue::Null.as_bool(), None);
        assert_eq!(JsonValue::Bool(true).as_number(), None);
        assert_eq!(JsonValue::Number(1.0).as_str(), None);
        assert!(JsonValue::Null.as_array().is_none());
        assert!(JsonValue::Null.as_object().is_none());
    }

    #[test]
    fn size_is_zero_for_null_and_invalid_one_for_scalars() {
        assert_eq!(JsonValue::Invalid.size(), 0);
        assert_eq!(JsonValue::Null.size(), 0);
        assert_eq!(JsonValue::Bool(false).size(), 1);
        assert_eq!(JsonValue::Number(0.0).size(), 1);
        assert_eq!(JsonValue::from("").size(), 1);
    }

    #[test]
    fn size_counts_container_entries() {
        let array = JsonValue::from(vec![JsonValue::Null, JsonValue::Bool(true)]);
        assert_eq!(array.size(), 2);

        let members = BTreeMap::from([
            ("a".to_string(), JsonValue::Number(1.0)),
            ("b".to_string(), JsonValue::Number(2.0)),
        ]);
        assert_eq!(JsonValue::from(members).size(), 2);
    }

    #[test]
    fn index_misses_resolve_to_the_sentinel() {
        let doc = JsonValue::from(BTreeMap::from([(
            "a".to_string(),
            JsonValue::Number(1.0),
        )]));
        assert!(doc["a"].is_valid());
        assert!(!doc["b"].is_valid());
        assert!(!doc[0].is_valid());
        assert!(!JsonValue::Null["a"].is_valid());
        assert!(!JsonValue::from(vec![])[7].is_valid());
    }

    #[test]
    fn index_misses_chain() {
        let doc = JsonValue::Null;
        let missing = &doc["a"]["b"][0];
        assert_eq!(missing.kind(), Kind::Invalid);
        assert_eq!(missing.size(), 0);
    }

    #[test]
    fn kind_names_are_lowercase() {
        assert_eq!(JsonValue::Null.kind_name(), "null");
        assert_eq!(JsonValue::Bool(true).kind_name(), "bool");
        assert_eq!(JsonValue::Number(0.0).kind_name(), "number");
        assert_eq!(JsonValue::from("").kind_name(), "string");
        assert_eq!(JsonValue::from(vec![]).kind_name(), "array");
        assert_eq!(JsonValue::Invalid.kind_name(), "invalid");
    }

    #[test]
    fn get_and_get_index_are_the_optional_flavor() {
        let doc = JsonValue::from(BTreeMap::from([(
            "arr".to_string(),
            JsonValue::from(vec![JsonValue::Number(1.0)]),
        )]));
        assert!(doc.get("arr").is_some());
        assert!(doc.get("nope").is_none());
        assert!(doc["arr"].get_index(0).is_some());
        assert!(doc["arr"].get_index(1).is_none());
        assert!(doc.get_index(0).is_none());
    }
}
