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

//! Per request options.
//!
//! While the client library defaults are intended to work for most
//! applications, it is sometimes necessary to customize a single call made via
//! a client. Every client method accepts a [RequestOptions] argument where
//! applications can override some defaults.

/// A set of options configuring a single request.
///
/// # Example
/// ```
/// # use cloud_sdk_gax::options::RequestOptions;
/// let options = RequestOptions::default().with_user_agent("my-app/1.0");
/// assert_eq!(options.user_agent().as_deref(), Some("my-app/1.0"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    user_agent: Option<String>,
}

impl RequestOptions {
    /// Sets the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Same as [set_user_agent][Self::set_user_agent], consuming and
    /// returning `self`.
    pub fn with_user_agent<T: Into<String>>(mut self, v: T) -> Self {
        self.set_user_agent(v);
        self
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }
}
