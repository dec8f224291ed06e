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

//! Declarative descriptions of request structures.
//!
//! Each operation has a static [Shape] listing its fields in serialization
//! order. The generic marshaller walks these tables instead of running
//! per-operation code. Shapes are immutable and shared by all requests.
//!
//! # Example
//! ```
//! # use cloud_sdk_gax_internal::shape::*;
//! static GET_THING: Shape = Shape {
//!     name: "GetThingRequest",
//!     fields: &[
//!         Field::required("thingName", "ThingName", FieldKind::Scalar),
//!         Field::optional("labels", "Labels", FieldKind::Map),
//!     ],
//! };
//! assert_eq!(GET_THING.field("labels").map(|f| f.wire_name), Some("Labels"));
//! ```

/// The description of a structure: its name and its fields in wire order.
#[derive(Debug, PartialEq)]
pub struct Shape {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Shape {
    /// Finds a field by its name in the request.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Finds a field by the name used in the wire document.
    pub fn field_by_wire_name(&self, wire_name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.required)
    }
}

/// The description of a single field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Field {
    /// The field name in the [Request][crate::request::Request].
    pub name: &'static str,
    /// The key written to the wire document.
    pub wire_name: &'static str,
    pub required: bool,
    pub kind: FieldKind,
    /// The documented length range, only checked when constraint validation
    /// is enabled.
    pub length: Option<Length>,
}

impl Field {
    pub const fn optional(name: &'static str, wire_name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            wire_name,
            required: false,
            kind,
            length: None,
        }
    }

    pub const fn required(name: &'static str, wire_name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            wire_name,
            required: true,
            kind,
            length: None,
        }
    }

    /// Records the valid length range for the field.
    ///
    /// For strings the length is counted in characters, for binary values in
    /// bytes, and for collections in members.
    pub const fn with_length(self, min: usize, max: Option<usize>) -> Self {
        Self {
            length: Some(Length { min, max }),
            ..self
        }
    }
}

/// How a field value is encoded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    /// A string, number, boolean, or binary value.
    Scalar,
    /// A map from string keys to arbitrary values.
    Map,
    /// A list, or any of the set kinds.
    List,
    /// A nested structure, encoded against its own shape.
    Shape(&'static Shape),
    /// A map whose values are structures of the given shape.
    MapOf(&'static Shape),
    /// A list whose elements are structures of the given shape.
    ListOf(&'static Shape),
    /// Any non-null value, encoded as-is.
    Document,
}

impl FieldKind {
    /// Describes the values accepted by this kind, used in error messages.
    pub fn expected(&self) -> &'static str {
        match self {
            FieldKind::Scalar => "a scalar",
            FieldKind::Map => "a map",
            FieldKind::List => "a list or set",
            FieldKind::Shape(_) => "a structure",
            FieldKind::MapOf(_) => "a map of structures",
            FieldKind::ListOf(_) => "a list of structures",
            FieldKind::Document => "any value",
        }
    }
}

/// An inclusive length range, `max == None` means unbounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub min: usize,
    pub max: Option<usize>,
}

impl Length {
    pub fn contains(&self, length: usize) -> bool {
        length >= self.min && self.max.is_none_or(|max| length <= max)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use test_case::test_case;

    pub(crate) static ITEM: Shape = Shape {
        name: "Item",
        fields: &[
            Field::required("value", "Value", FieldKind::Scalar),
            Field::optional("action", "Action", FieldKind::Scalar),
        ],
    };

    pub(crate) static REQUEST: Shape = Shape {
        name: "TestRequest",
        fields: &[
            Field::required("name", "Name", FieldKind::Scalar).with_length(1, Some(8)),
            Field::optional("labels", "Labels", FieldKind::Map),
            Field::optional("tags", "Tags", FieldKind::List).with_length(0, Some(2)),
            Field::optional("item", "Item", FieldKind::Shape(&ITEM)),
            Field::optional("updates", "Updates", FieldKind::MapOf(&ITEM)),
            Field::optional("items", "Items", FieldKind::ListOf(&ITEM)),
            Field::optional("flag", "Flag", FieldKind::Scalar),
        ],
    };

    #[test]
    fn lookup() {
        let field = REQUEST.field("tags");
        assert_eq!(field.map(|f| f.wire_name), Some("Tags"));
        let field = REQUEST.field_by_wire_name("Updates");
        assert_eq!(field.map(|f| f.name), Some("updates"));
        assert!(REQUEST.field("Tags").is_none());
        assert!(REQUEST.field_by_wire_name("tags").is_none());
    }

    #[test]
    fn required_fields() {
        let got: Vec<_> = REQUEST.required_fields().map(|f| f.name).collect();
        assert_eq!(got, vec!["name"]);
        let got: Vec<_> = ITEM.required_fields().map(|f| f.name).collect();
        assert_eq!(got, vec!["value"]);
    }

    #[test]
    fn constructors() {
        let field = Field::optional("a", "A", FieldKind::List);
        assert!(!field.required);
        assert_eq!(field.length, None);
        let field = Field::required("a", "A", FieldKind::Scalar).with_length(1, None);
        assert!(field.required);
        assert_eq!(field.length, Some(Length { min: 1, max: None }));
    }

    #[test_case(FieldKind::Scalar, "a scalar")]
    #[test_case(FieldKind::Map, "a map")]
    #[test_case(FieldKind::List, "a list or set")]
    #[test_case(FieldKind::Shape(&ITEM), "a structure")]
    #[test_case(FieldKind::MapOf(&ITEM), "a map of structures")]
    #[test_case(FieldKind::ListOf(&ITEM), "a list of structures")]
    #[test_case(FieldKind::Document, "any value")]
    fn expected(kind: FieldKind, want: &str) {
        assert_eq!(kind.expected(), want);
    }

    #[test_case(Length { min: 1, max: Some(3) }, 0, false)]
    #[test_case(Length { min: 1, max: Some(3) }, 1, true)]
    #[test_case(Length { min: 1, max: Some(3) }, 3, true)]
    #[test_case(Length { min: 1, max: Some(3) }, 4, false)]
    #[test_case(Length { min: 1, max: None }, 100_000, true)]
    #[test_case(Length { min: 0, max: Some(5) }, 0, true)]
    fn length(range: Length, length: usize, want: bool) {
        assert_eq!(range.contains(length), want, "{range:?} {length}");
    }
}
