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

//! Assembles transport-ready HTTP requests.
//!
//! Sending the request is left to the caller's transport.

use crate::api_header::{API_CLIENT_HEADER, ApiClientHeader};
use crate::constraints;
use crate::marshaller::{Marshalled, marshal};
use crate::observability::{create_marshal_span, record_marshal_result};
use crate::options::{ClientConfig, InstrumentationClientInfo, tracing_enabled};
use crate::request::Request;
use crate::service::{Operation, Service};
use bytes::Bytes;
use gax::Result;
use gax::client_builder::{Error as BuilderError, Result as BuilderResult};
use gax::error::Error;
use gax::options::RequestOptions;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderName, HeaderValue, USER_AGENT};

/// The header naming the remote operation.
pub const TARGET_HEADER: HeaderName = HeaderName::from_static("x-amz-target");

/// Marshals requests for a single service.
///
/// Service clients hold one of these, it is cheap to clone.
#[derive(Clone, Debug)]
pub struct JsonClient {
    service: &'static Service,
    instrumentation: &'static InstrumentationClientInfo,
    endpoint: String,
    api_client_header: String,
    tracing: bool,
    validate_constraints: bool,
}

impl JsonClient {
    pub fn new(
        config: ClientConfig,
        service: &'static Service,
        instrumentation: &'static InstrumentationClientInfo,
        api_client: &ApiClientHeader,
    ) -> BuilderResult<Self> {
        let tracing = tracing_enabled(&config);
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| service.default_endpoint.to_string());
        let uri = endpoint.parse::<http::Uri>().map_err(BuilderError::endpoint)?;
        if uri.scheme().is_none() {
            return Err(BuilderError::endpoint(format!(
                "missing scheme in `{endpoint}`"
            )));
        }
        Ok(Self {
            service,
            instrumentation,
            endpoint,
            api_client_header: api_client.header_value(),
            tracing,
            validate_constraints: config.validate_constraints,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Marshals `request` for the operation named `operation` and assembles
    /// the HTTP request.
    pub fn prepare(
        &self,
        operation: &str,
        request: Option<&Request>,
        options: &RequestOptions,
    ) -> Result<http::Request<Bytes>> {
        let operation = self.service.operation(operation).ok_or_else(|| {
            Error::invalid_argument(format!(
                "`{operation}` is not an operation of `{}`",
                self.service.name
            ))
        })?;
        let marshalled = if self.tracing {
            let span = create_marshal_span(self.service, operation, self.instrumentation);
            let result = span.in_scope(|| self.marshal(operation, request));
            record_marshal_result(&span, &result);
            result?
        } else {
            self.marshal(operation, request)?
        };
        let mut http_request =
            build_request(self.service, operation, &self.endpoint, marshalled, options)?;
        http_request.headers_mut().insert(
            API_CLIENT_HEADER,
            HeaderValue::from_str(&self.api_client_header).map_err(Error::ser)?,
        );
        Ok(http_request)
    }

    fn marshal(&self, operation: &Operation, request: Option<&Request>) -> Result<Marshalled> {
        if let (true, Some(request)) = (self.validate_constraints, request) {
            constraints::validate(request, operation.shape)?;
        }
        marshal(request, operation.shape, self.service.protocol)
    }
}

/// Creates the HTTP request carrying `marshalled`.
///
/// The method and path come from `operation`. The target, content type, and
/// content length headers are each set exactly once. The user agent is only
/// set when `options` provides one.
pub fn build_request(
    service: &Service,
    operation: &Operation,
    endpoint: &str,
    marshalled: Marshalled,
    options: &RequestOptions,
) -> Result<http::Request<Bytes>> {
    let uri = format!("{}{}", endpoint.trim_end_matches('/'), operation.path);
    let mut builder = http::Request::builder()
        .method(operation.method.clone())
        .uri(uri)
        .header(TARGET_HEADER, service.target(operation))
        .header(CONTENT_TYPE, marshalled.content_type)
        .header(CONTENT_LENGTH, marshalled.content_length);
    if let Some(user_agent) = options.user_agent() {
        builder = builder.header(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(Error::ser)?,
        );
    }
    builder.body(marshalled.body).map_err(Error::ser)
}
