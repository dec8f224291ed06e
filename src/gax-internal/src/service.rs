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

//! The catalog of operations offered by a service.

use crate::shape::Shape;

/// The JSON protocol flavor used by a service.
///
/// The flavors differ only in the content type sent with each request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protocol {
    Json10,
    Json11,
}

impl Protocol {
    pub fn content_type(&self) -> &'static str {
        match self {
            Protocol::Json10 => "application/x-amz-json-1.0",
            Protocol::Json11 => "application/x-amz-json-1.1",
        }
    }
}

/// A service and the operations it exposes.
#[derive(Debug)]
pub struct Service {
    /// A short name used in telemetry.
    pub name: &'static str,
    /// Combined with the operation name to produce the target header, e.g.
    /// `DynamoDB_20120810.UpdateItem`.
    pub target_prefix: &'static str,
    pub protocol: Protocol,
    pub default_endpoint: &'static str,
    pub operations: &'static [Operation],
}

impl Service {
    /// Finds the operation with the given name.
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|o| o.name == name)
    }

    /// The value of the target header for `operation`.
    pub fn target(&self, operation: &Operation) -> String {
        format!("{}.{}", self.target_prefix, operation.name)
    }
}

/// A single remote operation.
#[derive(Debug)]
pub struct Operation {
    pub name: &'static str,
    pub method: http::Method,
    pub path: &'static str,
    /// The shape of the request document.
    pub shape: &'static Shape,
}
