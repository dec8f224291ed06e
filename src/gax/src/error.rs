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

mod core_error;
pub use core_error::*;

/// Errors and error details related to local request validation.
///
/// These errors occur when the fields in a request do not match the shape of
/// the operation: a required field is missing, a field holds the wrong kind
/// of value, or a field is not part of the operation at all. The client fails
/// these requests locally because it does not know how to send them.
pub mod shape;
