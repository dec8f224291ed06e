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

//! Client-side checks of documented length constraints.
//!
//! The service validates every request, these checks only report the problem
//! earlier. Clients run them when constraint validation is enabled in their
//! configuration.

use crate::marshaller::join;
use crate::request::Request;
use crate::shape::{FieldKind, Shape};
use gax::error::Error;
use gax::error::shape::ShapeError;
use wkt::{Map, Value};

/// Verifies the length of every field in `request` that declares a range.
///
/// Absent fields are not checked, and values of the wrong kind are left for
/// the marshaller to report.
pub fn validate(request: &Request, shape: &Shape) -> gax::Result<()> {
    check_structure(request.fields(), shape, "").map_err(Error::ser)
}

fn check_structure(fields: &Map, shape: &Shape, prefix: &str) -> Result<(), ShapeError> {
    for field in shape.fields {
        let Some(value) = fields.get(field.name).filter(|v| !v.is_null()) else {
            continue;
        };
        let path = join(prefix, field.name);
        if let Some(range) = field.length {
            if let Some(length) = measure(value) {
                if !range.contains(length) {
                    return Err(ShapeError::LengthOutOfRange {
                        shape: shape.name,
                        field: path,
                        length,
                        min: range.min,
                        max: range.max,
                    });
                }
            }
        }
        match (&field.kind, value) {
            (FieldKind::Shape(nested), Value::Map(m)) => check_structure(m, nested, &path)?,
            (FieldKind::MapOf(nested), Value::Map(m)) => {
                for (key, member) in m {
                    if let Value::Map(member) = member {
                        check_structure(member, nested, &join(&path, key))?;
                    }
                }
            }
            (FieldKind::ListOf(nested), Value::List(l)) => {
                for (index, member) in l.iter().enumerate() {
                    if let Value::Map(member) = member {
                        check_structure(member, nested, &join(&path, &index.to_string()))?;
                    }
                }
            }
            _ => {}
        }
    }
    Ok(())
}

// Strings are measured in characters, binary values in bytes, and composites
// in the members that reach the wire. Null members are never encoded.
fn measure(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Binary(b) => Some(b.len()),
        Value::List(l) => Some(l.iter().filter(|v| !v.is_null()).count()),
        Value::Map(m) => Some(m.values().filter(|v| !v.is_null()).count()),
        v => v.child_count(),
    }
}
