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

use wkt::{Map, Value};

/// The generic representation of a request.
///
/// A request maps field names, as declared in the operation
/// [Shape][crate::shape::Shape], to values. A field that is not in the map is
/// absent and will be omitted from the wire document. Nested structures are
/// [Value::Map]s keyed by the field names of the nested shape.
///
/// # Example
/// ```
/// # use cloud_sdk_gax_internal::request::Request;
/// # use wkt::Value;
/// let request = Request::new()
///     .set("tableName", "Orders")
///     .set("key", Value::map([("id", "42")]));
/// assert_eq!(request.get("tableName"), Some(&Value::from("Orders")));
/// assert!(!request.contains("returnValues"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Request {
    fields: Map,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of `name`, replacing any previous value.
    pub fn set<K: Into<String>, V: Into<Value>>(mut self, name: K, v: V) -> Self {
        self.insert(name, v);
        self
    }

    /// Sets the value of `name` if `v` is `Some`, otherwise leaves the field
    /// absent.
    pub fn set_opt<K: Into<String>, V: Into<Value>>(self, name: K, v: Option<V>) -> Self {
        match v {
            Some(v) => self.set(name, v),
            None => self,
        }
    }

    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, name: K, v: V) -> Option<Value> {
        self.fields.insert(name.into(), v.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &Map {
        &self.fields
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<Map> for Request {
    fn from(fields: Map) -> Self {
        Self { fields }
    }
}

impl From<Request> for Value {
    fn from(value: Request) -> Self {
        Value::Map(value.fields)
    }
}

impl<K, V> FromIterator<(K, V)> for Request
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
