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

//! The wire shapes of the stack service requests.

use gaxi::service::{Operation, Protocol, Service};
use gaxi::shape::{Field, FieldKind, Shape};
use http::Method;

pub static PARAMETER: Shape = Shape {
    name: "Parameter",
    fields: &[
        Field::optional("parameterKey", "ParameterKey", FieldKind::Scalar),
        Field::optional("parameterValue", "ParameterValue", FieldKind::Scalar),
        Field::optional("usePreviousValue", "UsePreviousValue", FieldKind::Scalar),
    ],
};

const STACK_NAME: Field = Field::required("stackName", "StackName", FieldKind::Scalar);

pub static UPDATE_STACK: Shape = Shape {
    name: "UpdateStackRequest",
    fields: &[
        STACK_NAME,
        Field::optional("templateBody", "TemplateBody", FieldKind::Scalar).with_length(1, None),
        Field::optional("templateURL", "TemplateURL", FieldKind::Scalar)
            .with_length(1, Some(1024)),
        Field::optional(
            "usePreviousTemplate",
            "UsePreviousTemplate",
            FieldKind::Scalar,
        ),
        Field::optional(
            "stackPolicyDuringUpdateBody",
            "StackPolicyDuringUpdateBody",
            FieldKind::Scalar,
        )
        .with_length(1, Some(16384)),
        Field::optional(
            "stackPolicyDuringUpdateURL",
            "StackPolicyDuringUpdateURL",
            FieldKind::Scalar,
        )
        .with_length(1, Some(1350)),
        Field::optional("parameters", "Parameters", FieldKind::ListOf(&PARAMETER)),
        Field::optional("capabilities", "Capabilities", FieldKind::List),
        Field::optional("stackPolicyBody", "StackPolicyBody", FieldKind::Scalar)
            .with_length(1, Some(16384)),
        Field::optional("stackPolicyURL", "StackPolicyURL", FieldKind::Scalar)
            .with_length(1, Some(1350)),
        Field::optional("notificationARNs", "NotificationARNs", FieldKind::List)
            .with_length(0, Some(5)),
    ],
};

pub static DELETE_STACK: Shape = Shape {
    name: "DeleteStackRequest",
    fields: &[STACK_NAME],
};

pub static DESCRIBE_STACKS: Shape = Shape {
    name: "DescribeStacksRequest",
    fields: &[
        Field::optional("stackName", "StackName", FieldKind::Scalar),
        Field::optional("nextToken", "NextToken", FieldKind::Scalar),
    ],
};

pub(crate) const UPDATE_STACK_OPERATION: &str = "UpdateStack";
pub(crate) const DELETE_STACK_OPERATION: &str = "DeleteStack";
pub(crate) const DESCRIBE_STACKS_OPERATION: &str = "DescribeStacks";

/// The operations of the stack service.
pub static SERVICE: Service = Service {
    name: "cloudformation",
    target_prefix: "CloudFormation_20100515",
    protocol: Protocol::Json10,
    default_endpoint: "https://cloudformation.us-east-1.amazonaws.com",
    operations: &[
        Operation {
            name: UPDATE_STACK_OPERATION,
            method: Method::POST,
            path: "/",
            shape: &UPDATE_STACK,
        },
        Operation {
            name: DELETE_STACK_OPERATION,
            method: Method::POST,
            path: "/",
            shape: &DELETE_STACK,
        },
        Operation {
            name: DESCRIBE_STACKS_OPERATION,
            method: Method::POST,
            path: "/",
            shape: &DESCRIBE_STACKS,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(UPDATE_STACK_OPERATION, &UPDATE_STACK)]
    #[test_case(DELETE_STACK_OPERATION, &DELETE_STACK)]
    #[test_case(DESCRIBE_STACKS_OPERATION, &DESCRIBE_STACKS)]
    fn operations(name: &str, shape: &'static Shape) {
        let operation = SERVICE.operation(name);
        assert_eq!(operation.map(|o| o.shape), Some(shape), "{name}");
    }

    #[test_case("TemplateURL", 1, Some(1024))]
    #[test_case("StackPolicyDuringUpdateBody", 1, Some(16384))]
    #[test_case("StackPolicyURL", 1, Some(1350))]
    #[test_case("NotificationARNs", 0, Some(5))]
    fn lengths(wire_name: &str, min: usize, max: Option<usize>) {
        let length = UPDATE_STACK
            .field_by_wire_name(wire_name)
            .and_then(|f| f.length);
        assert_eq!(length.map(|l| (l.min, l.max)), Some((min, max)), "{wire_name}");
    }
}
