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

//! Cloud SDK for Rust - Stack Service
//!
//! This crate contains the request types and the client for the stack
//! service. The client marshals each request into the JSON document expected
//! by the service and returns a transport-ready [http::Request]. Sending it
//! is left to the application.
//!
//! # Example
//! ```
//! # use cloud_sdk_cloudformation::client::CloudFormation;
//! # use cloud_sdk_cloudformation::model::DeleteStackRequest;
//! # use gax::options::RequestOptions;
//! # fn sample() -> anyhow::Result<()> {
//! let client = CloudFormation::builder().build()?;
//! let request = client.delete_stack(
//!     DeleteStackRequest::new().set_stack_name("web"),
//!     RequestOptions::default(),
//! )?;
//! assert_eq!(request.body().as_ref(), br#"{"StackName":"web"}"#);
//! # Ok(()) }
//! # sample().unwrap();
//! ```

/// The request types used by this service.
pub mod model;

/// The wire shapes of the requests, used by the client to marshal them.
pub mod shapes;

/// The client for this service.
pub mod client;

/// Builders to configure the client.
pub mod builder;

pub(crate) mod info {
    use gaxi::api_header::{ApiClientHeader, GENERATED};
    use gaxi::options::InstrumentationClientInfo;

    pub(crate) static INSTRUMENTATION: InstrumentationClientInfo = InstrumentationClientInfo {
        service_name: "cloudformation",
        client_version: VERSION,
        client_artifact: NAME,
    };

    pub(crate) static API_CLIENT: ApiClientHeader = ApiClientHeader {
        name: NAME,
        version: VERSION,
        library_type: GENERATED,
    };

    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
}
