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

//! Telemetry header helpers.

/// The name of the telemetry header.
pub const API_CLIENT_HEADER: &str = "x-amz-user-agent";

/// Service crates create one static instance of this struct and pass it to
/// [JsonClient][crate::http::JsonClient], which formats the header value once.
#[derive(Debug, PartialEq)]
pub struct ApiClientHeader {
    pub name: &'static str,
    pub library_type: &'static str,
    pub version: &'static str,
}

/// Library type for generated service crates.
pub const GENERATED: &str = "generated";

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl ApiClientHeader {
    /// Format the struct as needed for the telemetry header.
    pub fn header_value(&self) -> String {
        // Strip out the initial "rustc " string from `RUSTC_VERSION`. If not
        // found, leave RUSTC_VERSION unchanged.
        let rustc_version = build_info::RUSTC_VERSION;
        let rustc_version = rustc_version
            .strip_prefix("rustc ")
            .unwrap_or(build_info::RUSTC_VERSION);

        // Capture the gax version too.
        let gax_version = build_info::PKG_VERSION;

        format!(
            "rust/{rustc_version} gax/{gax_version} json/{gax_version} {}/{}",
            self.library_type, self.version
        )
    }
}
