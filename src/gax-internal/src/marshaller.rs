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

//! Converts requests into JSON wire documents.
//!
//! A single marshaller serves every operation: it walks the operation
//! [Shape] in field order and encodes the values found in the [Request].
//! Absent fields are omitted, present-but-empty collections are written as
//! `[]` or `{}`, and `Null` values are never written.

use crate::request::Request;
use crate::service::Protocol;
use crate::shape::{FieldKind, Shape};
use bytes::Bytes;
use gax::error::Error;
use gax::error::shape::ShapeError;
use serde_json::Value as Json;
use wkt::{Map, Value};

type JsonMap = serde_json::Map<String, Json>;

/// A request encoded for the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct Marshalled {
    /// The UTF-8 encoded JSON document.
    pub body: Bytes,
    pub content_type: &'static str,
    /// The length of `body` in bytes.
    pub content_length: usize,
}

/// Encodes `request` using `shape`.
///
/// Returns an [invalid argument][Error::is_invalid_argument] error if the
/// request is `None`. Any problem traversing or encoding the request is
/// reported as a [serialization][Error::is_serialization] error, no partial
/// body is ever returned.
pub fn marshal(
    request: Option<&Request>,
    shape: &Shape,
    protocol: Protocol,
) -> gax::Result<Marshalled> {
    let Some(request) = request else {
        return Err(Error::invalid_argument("the request is missing"));
    };
    let document = to_document(request, shape)?;
    let body = serde_json::to_vec(&document).map_err(Error::ser)?;
    let content_length = body.len();
    tracing::debug!(shape = shape.name, content_length, "marshalled request");
    Ok(Marshalled {
        body: Bytes::from(body),
        content_type: protocol.content_type(),
        content_length,
    })
}

/// Builds the JSON document for `request` without encoding it.
pub fn to_document(request: &Request, shape: &Shape) -> gax::Result<Json> {
    encode_structure(request.fields(), shape, "")
        .map(Json::Object)
        .map_err(Error::ser)
}

fn encode_structure(fields: &Map, shape: &Shape, prefix: &str) -> Result<JsonMap, ShapeError> {
    if let Some(name) = fields.keys().find(|k| shape.field(k).is_none()) {
        return Err(ShapeError::UnknownField {
            shape: shape.name,
            field: join(prefix, name),
        });
    }
    let mut object = JsonMap::new();
    for field in shape.fields {
        match fields.get(field.name) {
            None | Some(Value::Null) if field.required => {
                return Err(ShapeError::MissingRequiredField {
                    shape: shape.name,
                    field: join(prefix, field.name),
                });
            }
            None | Some(Value::Null) => {}
            Some(value) => {
                let path = join(prefix, field.name);
                let encoded = encode_field(value, &field.kind, shape.name, &path)?;
                object.insert(field.wire_name.to_string(), encoded);
            }
        }
    }
    Ok(object)
}

fn encode_field(
    value: &Value,
    kind: &FieldKind,
    shape: &'static str,
    path: &str,
) -> Result<Json, ShapeError> {
    let mismatch = |expected: &'static str, found: &Value, field: String| {
        ShapeError::UnexpectedKind {
            shape,
            field,
            expected,
            found: found.kind(),
        }
    };
    match (kind, value) {
        (FieldKind::Scalar, v) if v.kind().is_scalar() => Ok(v.to_json()),
        (FieldKind::Map, Value::Map(_)) => Ok(value.to_json()),
        (FieldKind::List, v) if v.kind().is_sequence() => Ok(v.to_json()),
        (FieldKind::Document, v) => Ok(v.to_json()),
        (FieldKind::Shape(nested), Value::Map(m)) => {
            encode_structure(m, nested, path).map(Json::Object)
        }
        (FieldKind::MapOf(nested), Value::Map(m)) => {
            let mut object = JsonMap::new();
            for (key, member) in m.iter().filter(|(_, v)| !v.is_null()) {
                let path = join(path, key);
                let Value::Map(fields) = member else {
                    return Err(mismatch("a structure", member, path));
                };
                object.insert(key.clone(), Json::Object(encode_structure(fields, nested, &path)?));
            }
            Ok(Json::Object(object))
        }
        (FieldKind::ListOf(nested), Value::List(l)) => {
            let mut array = Vec::with_capacity(l.len());
            for (index, member) in l.iter().enumerate().filter(|(_, v)| !v.is_null()) {
                let path = join(path, &index.to_string());
                let Value::Map(fields) = member else {
                    return Err(mismatch("a structure", member, path));
                };
                array.push(Json::Object(encode_structure(fields, nested, &path)?));
            }
            Ok(Json::Array(array))
        }
        (k, v) => Err(mismatch(k.expected(), v, path.to_string())),
    }
}

pub(crate) fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::tests::{ITEM, REQUEST};
    use crate::shape::Field;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::error::Error as _;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    static KEYED: Shape = Shape {
        name: "KeyedRequest",
        fields: &[
            Field::required("tableName", "TableName", FieldKind::Scalar),
            Field::required("key", "Key", FieldKind::Map),
            Field::optional("returnValues", "ReturnValues", FieldKind::Scalar),
        ],
    };

    fn shape_error(e: &Error) -> Option<&ShapeError> {
        e.source().and_then(|e| e.downcast_ref::<ShapeError>())
    }

    fn body_json(m: &Marshalled) -> anyhow::Result<Json> {
        Ok(serde_json::from_slice(&m.body)?)
    }

    #[test]
    fn missing_request() {
        let err = marshal(None, &REQUEST, Protocol::Json10).unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
    }

    #[test]
    fn basic() -> TestResult {
        let request = Request::new()
            .set("tableName", "Orders")
            .set("key", Value::map([("id", "42")]));
        let got = marshal(Some(&request), &KEYED, Protocol::Json10)?;
        assert_eq!(got.body.as_ref(), br#"{"TableName":"Orders","Key":{"id":"42"}}"#);
        assert_eq!(got.content_length, got.body.len());
        assert_eq!(got.content_type, "application/x-amz-json-1.0");
        Ok(())
    }

    #[test]
    fn shape_order() -> TestResult {
        let request = Request::new()
            .set("returnValues", "ALL_NEW")
            .set("key", Value::map([("id", "42")]))
            .set("tableName", "Orders");
        let got = marshal(Some(&request), &KEYED, Protocol::Json10)?;
        assert_eq!(
            got.body.as_ref(),
            br#"{"TableName":"Orders","Key":{"id":"42"},"ReturnValues":"ALL_NEW"}"#
        );
        Ok(())
    }

    #[test]
    fn deterministic() -> TestResult {
        let request = Request::new()
            .set("name", "abc")
            .set("labels", Value::map([("b", 1), ("a", 2)]))
            .set("tags", Value::string_set(["x", "y"]));
        let first = marshal(Some(&request), &REQUEST, Protocol::Json10)?;
        let second = marshal(Some(&request), &REQUEST, Protocol::Json10)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn content_type() -> TestResult {
        let request = Request::new().set("name", "abc");
        let got = marshal(Some(&request), &REQUEST, Protocol::Json11)?;
        assert_eq!(got.content_type, "application/x-amz-json-1.1");
        Ok(())
    }

    #[test]
    fn content_length_counts_bytes() -> TestResult {
        let request = Request::new().set("name", "größe");
        let got = marshal(Some(&request), &REQUEST, Protocol::Json10)?;
        assert_eq!(got.content_length, got.body.len());
        assert!(got.content_length > r#"{"Name":"größe"}"#.chars().count());
        Ok(())
    }

    #[test]
    fn absent_fields_omitted() -> TestResult {
        let request = Request::new().set("name", "abc").set("flag", Value::Null);
        let got = marshal(Some(&request), &REQUEST, Protocol::Json10)?;
        assert_eq!(body_json(&got)?, json!({"Name": "abc"}));
        Ok(())
    }

    #[test]
    fn explicit_empty() -> TestResult {
        let request = Request::new()
            .set("name", "abc")
            .set("labels", Value::Map(Map::new()))
            .set("tags", Value::List(Vec::new()))
            .set("updates", Value::Map(Map::new()))
            .set("items", Value::List(Vec::new()));
        let got = marshal(Some(&request), &REQUEST, Protocol::Json10)?;
        assert_eq!(
            got.body.as_ref(),
            br#"{"Name":"abc","Labels":{},"Tags":[],"Updates":{},"Items":[]}"#
        );
        Ok(())
    }

    #[test_case(Value::StringSet(Vec::new()); "string set")]
    #[test_case(Value::NumberSet(Vec::new()); "number set")]
    #[test_case(Value::BinarySet(Vec::new()); "binary set")]
    fn explicit_empty_set(tags: Value) -> TestResult {
        let request = Request::new().set("name", "abc").set("tags", tags);
        let got = marshal(Some(&request), &REQUEST, Protocol::Json10)?;
        assert_eq!(got.body.as_ref(), br#"{"Name":"abc","Tags":[]}"#);
        Ok(())
    }

    #[test]
    fn nulls_in_collections_skipped() -> TestResult {
        let request = Request::new()
            .set("name", "abc")
            .set("labels", Value::map([("a", Value::Null), ("b", Value::from(1))]))
            .set("tags", Value::list([Value::Null, Value::from("x")]))
            .set(
                "updates",
                Value::map([("gone", Value::Null), ("kept", Value::map([("value", 1)]))]),
            )
            .set("items", Value::list([Value::Null, Value::map([("value", 2)])]));
        let got = marshal(Some(&request), &REQUEST, Protocol::Json10)?;
        assert_eq!(
            body_json(&got)?,
            json!({
                "Name": "abc",
                "Labels": {"b": 1},
                "Tags": ["x"],
                "Updates": {"kept": {"Value": 1}},
                "Items": [{"Value": 2}],
            })
        );
        Ok(())
    }

    #[test]
    fn nested() -> TestResult {
        let request = Request::new()
            .set("name", "abc")
            .set("item", Value::map([("action", "PUT"), ("value", "v")]))
            .set(
                "updates",
                Value::map([("color", Value::map([("value", "red"), ("action", "PUT")]))]),
            );
        let got = marshal(Some(&request), &REQUEST, Protocol::Json10)?;
        assert_eq!(
            got.body.as_ref(),
            br#"{"Name":"abc","Item":{"Value":"v","Action":"PUT"},"Updates":{"color":{"Value":"red","Action":"PUT"}}}"#
        );
        Ok(())
    }

    #[test]
    fn nested_absent_and_empty() -> TestResult {
        let item = Value::map([
            ("value", Value::from("")),
            ("action", Value::Null),
        ]);
        let request = Request::new().set("name", "abc").set("item", item);
        let got = marshal(Some(&request), &REQUEST, Protocol::Json10)?;
        assert_eq!(body_json(&got)?, json!({"Name": "abc", "Item": {"Value": ""}}));
        Ok(())
    }

    #[test]
    fn scalars() -> TestResult {
        let request = Request::new()
            .set("name", bytes::Bytes::from_static(b"hello"))
            .set("flag", true)
            .set("tags", Value::list([Value::from(1), Value::from(false)]));
        let got = marshal(Some(&request), &REQUEST, Protocol::Json10)?;
        assert_eq!(
            body_json(&got)?,
            json!({"Name": "aGVsbG8=", "Tags": [1, false], "Flag": true})
        );
        Ok(())
    }

    #[test]
    fn sets() -> TestResult {
        let request = Request::new()
            .set("name", "abc")
            .set("tags", Value::number_set([1, 2]))
            .set("labels", Value::map([("s", Value::binary_set([bytes::Bytes::from_static(b"a")]))]));
        let got = marshal(Some(&request), &REQUEST, Protocol::Json10)?;
        assert_eq!(
            body_json(&got)?,
            json!({"Name": "abc", "Labels": {"s": ["YQ=="]}, "Tags": [1, 2]})
        );
        Ok(())
    }

    #[test_case(Request::new(), "name"; "absent")]
    #[test_case(Request::new().set("name", Value::Null), "name"; "null")]
    #[test_case(Request::new().set("name", "a").set("item", Value::map([("action", "PUT")])), "item.value"; "nested")]
    #[test_case(Request::new().set("name", "a").set("updates", Value::map([("color", Value::map([("action", "PUT")]))])), "updates.color.value"; "map member")]
    #[test_case(Request::new().set("name", "a").set("items", Value::list([Value::map([("value", 1)]), Value::Map(Map::new())])), "items.1.value"; "list member")]
    fn missing_required(request: Request, field: &str) {
        let err = marshal(Some(&request), &REQUEST, Protocol::Json10).unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
        match shape_error(&err) {
            Some(ShapeError::MissingRequiredField { field: got, .. }) => assert_eq!(got, field),
            e => panic!("unexpected error {e:?}"),
        }
    }

    #[test_case(Request::new().set("name", Value::list(["a"])), "name", "a scalar")]
    #[test_case(Request::new().set("name", "a").set("labels", Value::list(["a"])), "labels", "a map")]
    #[test_case(Request::new().set("name", "a").set("tags", "a"), "tags", "a list or set")]
    #[test_case(Request::new().set("name", "a").set("item", "a"), "item", "a structure")]
    #[test_case(Request::new().set("name", "a").set("updates", Value::map([("x", 1)])), "updates.x", "a structure")]
    #[test_case(Request::new().set("name", "a").set("items", Value::list(["x"])), "items.0", "a structure")]
    #[test_case(Request::new().set("name", "a").set("items", Value::Map(Map::new())), "items", "a list of structures")]
    fn unexpected_kind(request: Request, field: &str, expected: &str) {
        let err = marshal(Some(&request), &REQUEST, Protocol::Json10).unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
        match shape_error(&err) {
            Some(ShapeError::UnexpectedKind {
                field: got,
                expected: got_expected,
                ..
            }) => {
                assert_eq!(got, field);
                assert_eq!(*got_expected, expected);
            }
            e => panic!("unexpected error {e:?}"),
        }
    }

    #[test]
    fn unknown_field() {
        let request = Request::new().set("name", "a").set("nmae", "b");
        let err = marshal(Some(&request), &REQUEST, Protocol::Json10).unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
        assert_eq!(
            shape_error(&err),
            Some(&ShapeError::UnknownField {
                shape: "TestRequest",
                field: "nmae".to_string()
            })
        );
    }

    #[test]
    fn unknown_nested_field() {
        let request = Request::new()
            .set("name", "a")
            .set("item", Value::map([("value", "v"), ("extra", "x")]));
        let err = marshal(Some(&request), &REQUEST, Protocol::Json10).unwrap_err();
        assert_eq!(
            shape_error(&err),
            Some(&ShapeError::UnknownField {
                shape: ITEM.name,
                field: "item.extra".to_string()
            })
        );
    }

    #[test]
    fn document() -> TestResult {
        static UPDATE: Shape = Shape {
            name: "Update",
            fields: &[Field::optional("value", "Value", FieldKind::Document)],
        };
        for (value, want) in [
            (Value::from("red"), json!({"Value": "red"})),
            (Value::list([1, 2]), json!({"Value": [1, 2]})),
            (Value::map([("a", true)]), json!({"Value": {"a": true}})),
        ] {
            let request = Request::new().set("value", value);
            assert_eq!(to_document(&request, &UPDATE)?, want);
        }
        Ok(())
    }

    #[test]
    fn to_document_matches_body() -> TestResult {
        let request = Request::new().set("name", "a").set("flag", false);
        let document = to_document(&request, &REQUEST)?;
        let got = marshal(Some(&request), &REQUEST, Protocol::Json10)?;
        assert_eq!(body_json(&got)?, document);
        Ok(())
    }

    #[test_case("", "a", "a")]
    #[test_case("a", "b", "a.b")]
    #[test_case("a.b", "0", "a.b.0")]
    fn join_paths(prefix: &str, name: &str, want: &str) {
        assert_eq!(join(prefix, name), want);
    }
}
