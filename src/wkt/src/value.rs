// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use std::borrow::Cow;

/// The numeric type used by [Value::Number] and [Value::NumberSet].
///
/// Numbers keep the representation they were created with, the services
/// reject values that lose precision.
pub use serde_json::Number;

/// An insertion-ordered map of values.
///
/// The order is only used to produce deterministic output, two maps with the
/// same entries in different order compare equal.
pub type Map = indexmap::IndexMap<String, Value>;

/// A single loosely typed value sent to, or received from, a cloud service.
///
/// Values form a tree: composite kinds own their children and there are no
/// back references.
///
/// # Example
/// ```
/// # use cloud_sdk_wkt::{Value, ValueKind};
/// let key = Value::map([("id", Value::from("42")), ("version", Value::from(7))]);
/// assert_eq!(key.kind(), ValueKind::Map);
/// assert_eq!(key.as_map().and_then(|m| m.get("id")), Some(&Value::from("42")));
/// ```
#[derive(Clone, Debug)]
pub enum Value {
    /// An explicit null. Nulls are never written to the wire, they are
    /// equivalent to an absent value.
    Null,
    /// A UTF-8 string.
    String(String),
    /// A number, integer or floating point.
    Number(Number),
    /// A boolean.
    Boolean(bool),
    /// Opaque bytes, sent as a base64 string.
    Binary(Bytes),
    /// A set of strings.
    StringSet(Vec<String>),
    /// A set of numbers.
    NumberSet(Vec<Number>),
    /// A set of byte strings.
    BinarySet(Vec<Bytes>),
    /// An ordered sequence of values.
    List(Vec<Value>),
    /// A mapping from string keys to values.
    Map(Map),
}

/// The kind of a [Value], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    String,
    Number,
    Boolean,
    Binary,
    StringSet,
    NumberSet,
    BinarySet,
    List,
    Map,
}

impl ValueKind {
    /// The name of the kind, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Binary => "binary",
            ValueKind::StringSet => "string set",
            ValueKind::NumberSet => "number set",
            ValueKind::BinarySet => "binary set",
            ValueKind::List => "list",
            ValueKind::Map => "map",
        }
    }

    /// Returns true for the kinds that hold a single value.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            ValueKind::String | ValueKind::Number | ValueKind::Boolean | ValueKind::Binary
        )
    }

    /// Returns true for the kinds encoded as a JSON array.
    pub fn is_sequence(&self) -> bool {
        matches!(
            self,
            ValueKind::StringSet | ValueKind::NumberSet | ValueKind::BinarySet | ValueKind::List
        )
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Creates a [Value::Map] from key-value pairs, preserving their order.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Creates a [Value::List] from its elements.
    pub fn list<I, V>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::List(elements.into_iter().map(Into::into).collect())
    }

    /// Creates a [Value::StringSet] from its members.
    pub fn string_set<I, V>(members: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Value::StringSet(members.into_iter().map(Into::into).collect())
    }

    /// Creates a [Value::NumberSet] from its members.
    pub fn number_set<I, V>(members: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Number>,
    {
        Value::NumberSet(members.into_iter().map(Into::into).collect())
    }

    /// Creates a [Value::BinarySet] from its members.
    pub fn binary_set<I, V>(members: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Bytes>,
    {
        Value::BinarySet(members.into_iter().map(Into::into).collect())
    }

    /// Creates a [Value::Number] from a floating point value.
    ///
    /// Returns `None` for NaN and infinite values, these cannot be
    /// represented on the wire.
    pub fn from_f64(v: f64) -> Option<Self> {
        Number::from_f64(v).map(Value::Number)
    }

    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Binary(_) => ValueKind::Binary,
            Value::StringSet(_) => ValueKind::StringSet,
            Value::NumberSet(_) => ValueKind::NumberSet,
            Value::BinarySet(_) => ValueKind::BinarySet,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&Bytes> {
        match self {
            Value::Binary(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// The number of children in a composite value, `None` for scalars.
    pub fn child_count(&self) -> Option<usize> {
        match self {
            Value::StringSet(v) => Some(v.len()),
            Value::NumberSet(v) => Some(v.len()),
            Value::BinarySet(v) => Some(v.len()),
            Value::List(v) => Some(v.len()),
            Value::Map(m) => Some(m.len()),
            _ => None,
        }
    }

    /// Iterates over the children of a composite value.
    ///
    /// Lists and maps yield their elements (for maps, the values in insertion
    /// order). Set members are yielded as scalar values. Scalars have no
    /// children.
    pub fn children(&self) -> Box<dyn Iterator<Item = Cow<'_, Value>> + '_> {
        match self {
            Value::StringSet(v) => Box::new(
                v.iter()
                    .map(|s| Cow::Owned(Value::String(s.clone()))),
            ),
            Value::NumberSet(v) => Box::new(
                v.iter()
                    .map(|n| Cow::Owned(Value::Number(n.clone()))),
            ),
            Value::BinarySet(v) => Box::new(
                v.iter()
                    .map(|b| Cow::Owned(Value::Binary(b.clone()))),
            ),
            Value::List(v) => Box::new(v.iter().map(Cow::Borrowed)),
            Value::Map(m) => Box::new(m.values().map(Cow::Borrowed)),
            _ => Box::new(std::iter::empty()),
        }
    }

    /// Converts the value to its JSON representation.
    ///
    /// Null elements of lists and null entries of maps are omitted, binary
    /// values become base64 strings. A top-level [Value::Null] converts to
    /// JSON `null`, callers decide whether to write it.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;
        match self {
            Value::Null => Json::Null,
            Value::String(s) => Json::String(s.clone()),
            Value::Number(n) => Json::Number(n.clone()),
            Value::Boolean(b) => Json::Bool(*b),
            Value::Binary(b) => Json::String(STANDARD.encode(b)),
            Value::StringSet(v) => Json::Array(v.iter().cloned().map(Json::String).collect()),
            Value::NumberSet(v) => Json::Array(v.iter().cloned().map(Json::Number).collect()),
            Value::BinarySet(v) => Json::Array(
                v.iter()
                    .map(|b| Json::String(STANDARD.encode(b)))
                    .collect(),
            ),
            Value::List(v) => Json::Array(
                v.iter()
                    .filter(|v| !v.is_null())
                    .map(Value::to_json)
                    .collect(),
            ),
            Value::Map(m) => Json::Object(
                m.iter()
                    .filter(|(_, v)| !v.is_null())
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Binary(a), Value::Binary(b)) => a == b,
            (Value::StringSet(a), Value::StringSet(b)) => same_members(
                a.iter().map(String::as_str),
                b.iter().map(String::as_str),
            ),
            (Value::NumberSet(a), Value::NumberSet(b)) => same_members(
                a.iter().map(Number::to_string),
                b.iter().map(Number::to_string),
            ),
            (Value::BinarySet(a), Value::BinarySet(b)) => {
                same_members(a.iter().map(|b| &b[..]), b.iter().map(|b| &b[..]))
            }
            (Value::List(a), Value::List(b)) => a == b,
            // `IndexMap` equality ignores the insertion order.
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

// Sets compare as multisets.
fn same_members<T, A, B>(a: A, b: B) -> bool
where
    T: Ord,
    A: Iterator<Item = T>,
    B: Iterator<Item = T>,
{
    let mut a = a.collect::<Vec<_>>();
    let mut b = b.collect::<Vec<_>>();
    if a.len() != b.len() {
        return false;
    }
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

impl serde::ser::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(n) => serde::ser::Serialize::serialize(n, serializer),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Binary(b) => serializer.serialize_str(&STANDARD.encode(b)),
            Value::StringSet(v) => serializer.collect_seq(v),
            Value::NumberSet(v) => serializer.collect_seq(v),
            Value::BinarySet(v) => serializer.collect_seq(v.iter().map(|b| STANDARD.encode(b))),
            Value::List(v) => serializer.collect_seq(v.iter().filter(|v| !v.is_null())),
            Value::Map(m) => serializer.collect_map(m.iter().filter(|(_, v)| !v.is_null())),
        }
    }
}

impl<'de> serde::de::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        <serde_json::Value as serde::de::Deserialize>::deserialize(deserializer).map(Value::from)
    }
}

/// Decodes a JSON value.
///
/// JSON carries no set or binary kinds, arrays become [Value::List] and
/// strings become [Value::String]. Re-encoding the result produces the same
/// JSON.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match value {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Boolean(b),
            Json::Number(n) => Value::Number(n),
            Json::String(s) => Value::String(s),
            Json::Array(a) => Value::List(a.into_iter().map(Value::from).collect()),
            Json::Object(o) => Value::Map(o.into_iter().map(|(k, v)| (k, Value::from(v))).collect()),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<Bytes> for Value {
    fn from(value: Bytes) -> Self {
        Value::Binary(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[test_case(Value::Null, ValueKind::Null)]
    #[test_case(Value::from("abc"), ValueKind::String)]
    #[test_case(Value::from(42), ValueKind::Number)]
    #[test_case(Value::from(true), ValueKind::Boolean)]
    #[test_case(Value::from(Bytes::from_static(b"abc")), ValueKind::Binary)]
    #[test_case(Value::string_set(["a"]), ValueKind::StringSet)]
    #[test_case(Value::number_set([1]), ValueKind::NumberSet)]
    #[test_case(Value::binary_set([Bytes::from_static(b"a")]), ValueKind::BinarySet)]
    #[test_case(Value::list([1, 2]), ValueKind::List)]
    #[test_case(Value::map([("a", 1)]), ValueKind::Map)]
    fn kind(input: Value, want: ValueKind) {
        assert_eq!(input.kind(), want, "{input:?}");
    }

    #[test]
    fn kind_predicates() {
        assert!(ValueKind::String.is_scalar());
        assert!(ValueKind::Binary.is_scalar());
        assert!(!ValueKind::Null.is_scalar());
        assert!(!ValueKind::Map.is_scalar());
        assert!(ValueKind::StringSet.is_sequence());
        assert!(ValueKind::List.is_sequence());
        assert!(!ValueKind::Map.is_sequence());
        assert_eq!(ValueKind::NumberSet.to_string(), "number set");
    }

    #[test]
    fn no_coercion() {
        assert_ne!(Value::from("42"), Value::from(42));
        assert_ne!(Value::from("true"), Value::from(true));
        assert_ne!(Value::list(["a"]), Value::string_set(["a"]));
        assert_eq!(Value::from(42).as_str(), None);
        assert_eq!(Value::from("42").as_number(), None);
    }

    #[test]
    fn list_equality_is_ordered() {
        assert_eq!(Value::list([1, 2]), Value::list([1, 2]));
        assert_ne!(Value::list([1, 2]), Value::list([2, 1]));
    }

    #[test]
    fn map_equality_ignores_order() {
        let a = Value::map([("a", 1), ("b", 2)]);
        let b = Value::map([("b", 2), ("a", 1)]);
        assert_eq!(a, b);
        let c = Value::map([("a", 1)]);
        assert_ne!(a, c);
        let d = Value::map([("a", 1), ("c", 2)]);
        assert_ne!(a, d);
    }

    #[test]
    fn set_equality_ignores_order() {
        assert_eq!(Value::string_set(["a", "b"]), Value::string_set(["b", "a"]));
        assert_ne!(Value::string_set(["a", "b"]), Value::string_set(["a"]));
        assert_eq!(Value::number_set([1, 2]), Value::number_set([2, 1]));
        assert_ne!(Value::number_set([1, 2]), Value::number_set([1, 3]));
        let x = Bytes::from_static(b"x");
        let y = Bytes::from_static(b"y");
        assert_eq!(
            Value::binary_set([x.clone(), y.clone()]),
            Value::binary_set([y, x])
        );
    }

    #[test]
    fn empty_is_not_absent() {
        let empty = Value::list(Vec::<Value>::new());
        assert_eq!(empty.child_count(), Some(0));
        assert!(!empty.is_null());
        assert_eq!(empty.to_json(), json!([]));
        let empty = Value::Map(Map::new());
        assert_eq!(empty.to_json(), json!({}));
    }

    #[test]
    fn from_f64() {
        assert!(Value::from_f64(f64::NAN).is_none());
        assert!(Value::from_f64(f64::INFINITY).is_none());
        let v = Value::from_f64(2.5).unwrap();
        assert_eq!(v.to_json(), json!(2.5));
    }

    #[test]
    fn children() {
        let v = Value::map([("a", Value::from(1)), ("b", Value::list(["x"]))]);
        let got = v.children().map(|c| c.into_owned()).collect::<Vec<_>>();
        assert_eq!(got, vec![Value::from(1), Value::list(["x"])]);

        let v = Value::string_set(["a", "b"]);
        let got = v.children().map(|c| c.into_owned()).collect::<Vec<_>>();
        assert_eq!(got, vec![Value::from("a"), Value::from("b")]);

        assert_eq!(Value::from(1).children().count(), 0);
        assert_eq!(Value::from(1).child_count(), None);
    }

    #[test]
    fn to_json() {
        let v = Value::map([
            ("s", Value::from("abc")),
            ("n", Value::from(42)),
            ("b", Value::from(true)),
            ("bin", Value::from(Bytes::from_static(b"hello"))),
            ("ss", Value::string_set(["a", "b"])),
            ("ns", Value::number_set([1, 2])),
            ("bs", Value::binary_set([Bytes::from_static(b"hello")])),
            ("l", Value::list([Value::from(1), Value::Null, Value::from(2)])),
            ("null", Value::Null),
        ]);
        let want = json!({
            "s": "abc",
            "n": 42,
            "b": true,
            "bin": "aGVsbG8=",
            "ss": ["a", "b"],
            "ns": [1, 2],
            "bs": ["aGVsbG8="],
            "l": [1, 2],
        });
        assert_eq!(v.to_json(), want);
    }

    #[test]
    fn serialize_matches_to_json() -> Result {
        let v = Value::map([
            ("z", Value::from("last")),
            ("a", Value::list([Value::Null, Value::map([("k", Value::Null)])])),
            ("bin", Value::binary_set([Bytes::from_static(b"\x00\xff")])),
        ]);
        let got = serde_json::to_string(&v)?;
        let want = serde_json::to_string(&v.to_json())?;
        assert_eq!(got, want);
        assert_eq!(got, r#"{"z":"last","a":[{}],"bin":["AP8="]}"#);
        Ok(())
    }

    #[test]
    fn deserialize() -> Result {
        let got = serde_json::from_str::<Value>(r#"{"b":[1,"x",null],"a":{"c":false}}"#)?;
        let want = Value::map([
            ("b", Value::list([Value::from(1), Value::from("x"), Value::Null])),
            ("a", Value::map([("c", false)])),
        ]);
        assert_eq!(got, want);
        let keys = got
            .as_map()
            .map(|m| m.keys().cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        assert_eq!(keys, vec!["b", "a"]);
        Ok(())
    }
}
