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

//! Implementation details for Cloud SDK clients.
//!
//! All the types, traits, and functions defined in this crate are **not**
//! intended for general use. This crate will remain unstable for the
//! foreseeable future, even if used in the implementation for stable client
//! libraries.
//!
//! The service crates describe each operation with a static [shape::Shape],
//! convert their typed request models into a [request::Request], and use the
//! generic [marshaller] to produce the wire document. The [http] module
//! assembles the transport-ready request.

pub mod api_header;
pub mod constraints;
pub mod enums;
pub mod http;
pub mod marshaller;
pub mod observability;
pub mod options;
pub mod request;
pub mod service;
pub mod shape;
pub mod unmarshaller;
