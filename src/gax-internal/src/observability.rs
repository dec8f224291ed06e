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

//! Tracing spans for client calls.
//!
//! Attribute names follow the OpenTelemetry semantic conventions where one
//! exists. See <https://opentelemetry.io/docs/specs/semconv/rpc/rpc-spans/>.

use crate::marshaller::Marshalled;
use crate::options::InstrumentationClientInfo;
use crate::service::{Operation, Service};
use opentelemetry_semantic_conventions::{attribute as otel_attr, trace as otel_trace};
use tracing::{Span, field};

/// Span name for OpenTelemetry interop, "{service}/{operation}".
pub const OTEL_NAME: &str = "otel.name";
/// Always "Internal", marshalling performs no I/O.
pub const OTEL_KIND: &str = "otel.kind";
pub const OTEL_STATUS_CODE: &str = "otel.status_code";
pub const OTEL_STATUS_DESCRIPTION: &str = "otel.status_description";
pub const CLIENT_VERSION: &str = "cloud_sdk.client.version";
pub const CLIENT_ARTIFACT: &str = "cloud_sdk.client.artifact";

pub(crate) const OTEL_KIND_INTERNAL: &str = "Internal";
pub(crate) const RPC_SYSTEM_JSON: &str = "json";

pub mod status_codes {
    pub const UNSET: &str = "UNSET";
    pub const OK: &str = "OK";
    pub const ERROR: &str = "ERROR";
}

/// Creates the span covering the marshalling of a single request.
pub fn create_marshal_span(
    service: &Service,
    operation: &Operation,
    instrumentation: &InstrumentationClientInfo,
) -> Span {
    tracing::info_span!(
        "marshal",
        { OTEL_NAME } = format!("{}/{}", service.target_prefix, operation.name),
        { OTEL_KIND } = OTEL_KIND_INTERNAL,
        { otel_attr::RPC_SYSTEM } = RPC_SYSTEM_JSON,
        { otel_attr::RPC_SERVICE } = instrumentation.service_name,
        { otel_attr::RPC_METHOD } = operation.name,
        { CLIENT_VERSION } = instrumentation.client_version,
        { CLIENT_ARTIFACT } = instrumentation.client_artifact,
        // Fields to be recorded later
        { OTEL_STATUS_CODE } = status_codes::UNSET,
        { OTEL_STATUS_DESCRIPTION } = field::Empty,
        { otel_trace::ERROR_TYPE } = field::Empty,
        // The size of the encoded body, recorded after marshalling.
        { otel_attr::HTTP_REQUEST_BODY_SIZE } = field::Empty,
    )
}

/// Records the outcome of marshalling on `span`.
pub fn record_marshal_result(span: &Span, result: &gax::Result<Marshalled>) {
    match result {
        Ok(m) => {
            span.record(OTEL_STATUS_CODE, status_codes::OK);
            span.record(otel_attr::HTTP_REQUEST_BODY_SIZE, m.content_length as i64);
        }
        Err(e) => {
            span.record(OTEL_STATUS_CODE, status_codes::ERROR);
            span.record(otel_trace::ERROR_TYPE, error_type(e));
            span.record(OTEL_STATUS_DESCRIPTION, e.to_string());
        }
    }
}

fn error_type(error: &gax::error::Error) -> &'static str {
    match error {
        e if e.is_invalid_argument() => "INVALID_ARGUMENT",
        e if e.is_serialization() => "SERIALIZATION",
        e if e.is_deserialization() => "DESERIALIZATION",
        _ => "UNKNOWN",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::tests::SERVICE;
    use bytes::Bytes;
    use cloud_sdk_test_utils::test_layer::TestLayer;
    use gax::error::Error;
    use opentelemetry_semantic_conventions::attribute::{
        HTTP_REQUEST_BODY_SIZE, RPC_METHOD, RPC_SERVICE, RPC_SYSTEM,
    };
    use opentelemetry_semantic_conventions::trace::ERROR_TYPE;
    use std::collections::BTreeMap;
    use test_case::test_case;

    static INFO: InstrumentationClientInfo = InstrumentationClientInfo {
        service_name: "test",
        client_version: "1.2.3",
        client_artifact: "cloud-sdk-test",
    };

    fn attributes(result: gax::Result<Marshalled>) -> anyhow::Result<BTreeMap<String, String>> {
        let guard = TestLayer::initialize();
        let operation = SERVICE
            .operation("TestOperation")
            .ok_or_else(|| anyhow::anyhow!("missing operation"))?;
        let span = create_marshal_span(&SERVICE, operation, &INFO);
        record_marshal_result(&span, &result);
        drop(span);
        let captured = TestLayer::capture(&guard);
        let span = captured
            .iter()
            .find(|s| s.name == "marshal")
            .ok_or_else(|| anyhow::anyhow!("missing span in {captured:?}"))?;
        Ok(span.attributes.clone())
    }

    #[test]
    fn success() -> anyhow::Result<()> {
        let got = attributes(Ok(Marshalled {
            body: Bytes::from_static(b"{}"),
            content_type: "application/x-amz-json-1.0",
            content_length: 2,
        }))?;
        assert_eq!(
            got.get(OTEL_NAME).map(String::as_str),
            Some("Test_20250101/TestOperation")
        );
        assert_eq!(got.get(OTEL_KIND).map(String::as_str), Some("Internal"));
        assert_eq!(got.get(RPC_SYSTEM).map(String::as_str), Some("json"));
        assert_eq!(got.get(RPC_SERVICE).map(String::as_str), Some("test"));
        assert_eq!(got.get(RPC_METHOD).map(String::as_str), Some("TestOperation"));
        assert_eq!(got.get(CLIENT_VERSION).map(String::as_str), Some("1.2.3"));
        assert_eq!(got.get(OTEL_STATUS_CODE).map(String::as_str), Some("OK"));
        assert_eq!(got.get(HTTP_REQUEST_BODY_SIZE).map(String::as_str), Some("2"));
        assert!(got.get(ERROR_TYPE).is_none(), "{got:?}");
        Ok(())
    }

    #[test_case(Error::invalid_argument("missing"), "INVALID_ARGUMENT")]
    #[test_case(Error::ser("bad"), "SERIALIZATION")]
    #[test_case(Error::deser("bad"), "DESERIALIZATION")]
    fn failure(error: Error, want: &str) -> anyhow::Result<()> {
        let description = error.to_string();
        let got = attributes(Err(error))?;
        assert_eq!(got.get(OTEL_STATUS_CODE).map(String::as_str), Some("ERROR"));
        assert_eq!(got.get(ERROR_TYPE).map(String::as_str), Some(want));
        assert_eq!(
            got.get(OTEL_STATUS_DESCRIPTION).map(String::as_str),
            Some(description.as_str())
        );
        assert!(got.get(HTTP_REQUEST_BODY_SIZE).is_none(), "{got:?}");
        Ok(())
    }
}
