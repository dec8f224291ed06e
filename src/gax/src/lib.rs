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

//! Cloud API helpers.
//!
//! This crate contains the types shared by the service crates of the Cloud SDK
//! for Rust: the error type returned by every client method, the generic
//! client builder, and the options that applications can set on each request.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions that marshal requests.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the service clients.
pub mod error;

pub mod client_builder;

pub mod options;
