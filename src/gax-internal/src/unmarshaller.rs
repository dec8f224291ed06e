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

//! Converts JSON wire documents back into requests.
//!
//! Decoding uses the same [Shape] as encoding. Wire keys the shape does not
//! declare are ignored and `null` values are treated as absent. Required
//! fields are not checked, that is the marshaller's job.

use crate::marshaller::join;
use crate::request::Request;
use crate::shape::{FieldKind, Shape};
use gax::error::Error;
use gax::error::shape::ShapeError;
use serde_json::Value as Json;
use wkt::{Map, Value};

type JsonMap = serde_json::Map<String, Json>;

/// Decodes a UTF-8 JSON document into a [Request].
pub fn unmarshal(body: &[u8], shape: &Shape) -> gax::Result<Request> {
    let document = serde_json::from_slice::<Json>(body).map_err(Error::deser)?;
    from_document(document, shape)
}

/// Converts a parsed JSON document into a [Request].
pub fn from_document(document: Json, shape: &Shape) -> gax::Result<Request> {
    let object = match document {
        Json::Object(o) => o,
        other => {
            return Err(Error::deser(ShapeError::UnexpectedKind {
                shape: shape.name,
                field: String::new(),
                expected: "a structure",
                found: Value::from(other).kind(),
            }));
        }
    };
    decode_structure(object, shape, "")
        .map(Request::from)
        .map_err(Error::deser)
}

fn decode_structure(object: JsonMap, shape: &Shape, prefix: &str) -> Result<Map, ShapeError> {
    let mut fields = Map::new();
    for (wire_name, json) in object {
        let Some(field) = shape.field_by_wire_name(&wire_name) else {
            continue;
        };
        if json.is_null() {
            continue;
        }
        let path = join(prefix, field.name);
        let value = decode_field(json, &field.kind, shape.name, &path)?;
        fields.insert(field.name.to_string(), value);
    }
    Ok(fields)
}

fn decode_field(
    json: Json,
    kind: &FieldKind,
    shape: &'static str,
    path: &str,
) -> Result<Value, ShapeError> {
    let mismatch = |expected: &'static str, found: Json, field: String| ShapeError::UnexpectedKind {
        shape,
        field,
        expected,
        found: Value::from(found).kind(),
    };
    match (kind, json) {
        (FieldKind::Scalar, j @ (Json::Bool(_) | Json::Number(_) | Json::String(_))) => {
            Ok(Value::from(j))
        }
        (FieldKind::Map, j @ Json::Object(_)) => Ok(Value::from(j)),
        (FieldKind::List, j @ Json::Array(_)) => Ok(Value::from(j)),
        (FieldKind::Document, j) => Ok(Value::from(j)),
        (FieldKind::Shape(nested), Json::Object(o)) => {
            decode_structure(o, nested, path).map(Value::Map)
        }
        (FieldKind::MapOf(nested), Json::Object(o)) => {
            let mut map = Map::new();
            for (key, member) in o.into_iter().filter(|(_, v)| !v.is_null()) {
                let path = join(path, &key);
                let Json::Object(member) = member else {
                    return Err(mismatch("a structure", member, path));
                };
                let decoded = decode_structure(member, nested, &path)?;
                map.insert(key, Value::Map(decoded));
            }
            Ok(Value::Map(map))
        }
        (FieldKind::ListOf(nested), Json::Array(a)) => {
            let mut list = Vec::with_capacity(a.len());
            for (index, member) in a.into_iter().enumerate().filter(|(_, v)| !v.is_null()) {
                let path = join(path, &index.to_string());
                let Json::Object(member) = member else {
                    return Err(mismatch("a structure", member, path));
                };
                list.push(Value::Map(decode_structure(member, nested, &path)?));
            }
            Ok(Value::List(list))
        }
        (k, j) => Err(mismatch(k.expected(), j, path.to_string())),
    }
}
