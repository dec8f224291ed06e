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

use wkt::ValueKind;

/// A mismatch between a request and the shape of its operation.
///
/// Field names are the names used in the request, not the wire names. Nested
/// fields are '.'-separated, and map entries use the map key as a segment,
/// e.g. `attributeUpdates.color.action`.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum ShapeError {
    /// A required field was not set.
    #[error("field `{field}` in `{shape}` needs to be set")]
    MissingRequiredField { shape: &'static str, field: String },

    /// A field was set to a kind of value the shape does not accept.
    #[error("field `{field}` in `{shape}` expects {expected}, found a {found}")]
    UnexpectedKind {
        shape: &'static str,
        field: String,
        expected: &'static str,
        found: ValueKind,
    },

    /// The request contains a field the shape does not declare.
    #[error("field `{field}` is not part of `{shape}`")]
    UnknownField { shape: &'static str, field: String },

    /// A field is shorter or longer than the service accepts.
    #[error("field `{field}` in `{shape}` has length {length}, {}", length_range(.min, .max))]
    LengthOutOfRange {
        shape: &'static str,
        field: String,
        length: usize,
        min: usize,
        max: Option<usize>,
    },
}

fn length_range(min: &usize, max: &Option<usize>) -> String {
    match max {
        Some(max) => format!("expected between {min} and {max}"),
        None => format!("expected at least {min}"),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test]
    fn fmt_missing() {
        let e = ShapeError::MissingRequiredField {
            shape: "UpdateItemRequest",
            field: "tableName".to_string(),
        };
        let fmt = e.to_string();
        assert!(
            fmt.contains("tableName") && fmt.contains("UpdateItemRequest"),
            "{fmt}"
        );
        assert!(fmt.contains("needs to be set"), "{fmt}");
    }

    #[test]
    fn fmt_unexpected_kind() {
        let e = ShapeError::UnexpectedKind {
            shape: "UpdateItemRequest",
            field: "key".to_string(),
            expected: "a map",
            found: ValueKind::List,
        };
        let fmt = e.to_string();
        assert!(fmt.contains("key"), "{fmt}");
        assert!(fmt.contains("expects a map, found a list"), "{fmt}");
    }

    #[test]
    fn fmt_unknown() {
        let e = ShapeError::UnknownField {
            shape: "UpdateStackRequest",
            field: "stackNme".to_string(),
        };
        let fmt = e.to_string();
        assert!(
            fmt.contains("stackNme") && fmt.contains("not part of"),
            "{fmt}"
        );
    }

    #[test_case(Some(1024), "expected between 1 and 1024")]
    #[test_case(None, "expected at least 1")]
    fn fmt_length(max: Option<usize>, want: &str) {
        let e = ShapeError::LengthOutOfRange {
            shape: "UpdateStackRequest",
            field: "templateURL".to_string(),
            length: 0,
            min: 1,
            max,
        };
        let fmt = e.to_string();
        assert!(fmt.contains("templateURL"), "{fmt}");
        assert!(fmt.contains("has length 0"), "{fmt}");
        assert!(fmt.contains(want), "{fmt}");
    }
}
