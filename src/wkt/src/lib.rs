// Copyright 2024 Google LLC
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

//! Well-known-types for the Cloud SDK for Rust.
//!
//! The cloud APIs exchange loosely typed documents in a number of fields: the
//! key of an item, the attributes to update, the values referenced by an
//! expression. These fields are represented by [Value], a tagged union over
//! the scalar, binary, set, list and map kinds used by the services.
//!
//! Typed request models convert into maps of [Value]s before they are
//! marshalled. Nothing in this crate performs I/O.

mod value;
pub use crate::value::*;
