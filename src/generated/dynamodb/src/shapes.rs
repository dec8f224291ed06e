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

//! The wire shapes of the item service requests.

use gaxi::service::{Operation, Protocol, Service};
use gaxi::shape::{Field, FieldKind, Shape};
use http::Method;

pub static ATTRIBUTE_VALUE_UPDATE: Shape = Shape {
    name: "AttributeValueUpdate",
    fields: &[
        Field::optional("value", "Value", FieldKind::Document),
        Field::optional("action", "Action", FieldKind::Scalar),
    ],
};

pub static EXPECTED_ATTRIBUTE_VALUE: Shape = Shape {
    name: "ExpectedAttributeValue",
    fields: &[
        Field::optional("value", "Value", FieldKind::Document),
        Field::optional("exists", "Exists", FieldKind::Scalar),
        Field::optional("comparisonOperator", "ComparisonOperator", FieldKind::Scalar),
        Field::optional("attributeValueList", "AttributeValueList", FieldKind::List),
    ],
};

const TABLE_NAME: Field =
    Field::required("tableName", "TableName", FieldKind::Scalar).with_length(3, Some(255));
const KEY: Field = Field::required("key", "Key", FieldKind::Map);
const CONDITIONAL_OPERATOR: Field =
    Field::optional("conditionalOperator", "ConditionalOperator", FieldKind::Scalar);
const RETURN_VALUES: Field = Field::optional("returnValues", "ReturnValues", FieldKind::Scalar);
const RETURN_CONSUMED_CAPACITY: Field = Field::optional(
    "returnConsumedCapacity",
    "ReturnConsumedCapacity",
    FieldKind::Scalar,
);
const RETURN_ITEM_COLLECTION_METRICS: Field = Field::optional(
    "returnItemCollectionMetrics",
    "ReturnItemCollectionMetrics",
    FieldKind::Scalar,
);
const CONDITION_EXPRESSION: Field =
    Field::optional("conditionExpression", "ConditionExpression", FieldKind::Scalar);
const EXPRESSION_ATTRIBUTE_NAMES: Field = Field::optional(
    "expressionAttributeNames",
    "ExpressionAttributeNames",
    FieldKind::Map,
);
const EXPRESSION_ATTRIBUTE_VALUES: Field = Field::optional(
    "expressionAttributeValues",
    "ExpressionAttributeValues",
    FieldKind::Map,
);

pub static UPDATE_ITEM: Shape = Shape {
    name: "UpdateItemRequest",
    fields: &[
        TABLE_NAME,
        KEY,
        Field::optional(
            "attributeUpdates",
            "AttributeUpdates",
            FieldKind::MapOf(&ATTRIBUTE_VALUE_UPDATE),
        ),
        Field::optional(
            "expected",
            "Expected",
            FieldKind::MapOf(&EXPECTED_ATTRIBUTE_VALUE),
        ),
        CONDITIONAL_OPERATOR,
        RETURN_VALUES,
        RETURN_CONSUMED_CAPACITY,
        RETURN_ITEM_COLLECTION_METRICS,
        Field::optional("updateExpression", "UpdateExpression", FieldKind::Scalar),
        CONDITION_EXPRESSION,
        EXPRESSION_ATTRIBUTE_NAMES,
        EXPRESSION_ATTRIBUTE_VALUES,
    ],
};

pub static GET_ITEM: Shape = Shape {
    name: "GetItemRequest",
    fields: &[
        TABLE_NAME,
        KEY,
        Field::optional("attributesToGet", "AttributesToGet", FieldKind::List)
            .with_length(1, None),
        Field::optional("consistentRead", "ConsistentRead", FieldKind::Scalar),
        RETURN_CONSUMED_CAPACITY,
        Field::optional(
            "projectionExpression",
            "ProjectionExpression",
            FieldKind::Scalar,
        ),
        EXPRESSION_ATTRIBUTE_NAMES,
    ],
};

pub static PUT_ITEM: Shape = Shape {
    name: "PutItemRequest",
    fields: &[
        TABLE_NAME,
        Field::required("item", "Item", FieldKind::Map),
        Field::optional(
            "expected",
            "Expected",
            FieldKind::MapOf(&EXPECTED_ATTRIBUTE_VALUE),
        ),
        RETURN_VALUES,
        RETURN_CONSUMED_CAPACITY,
        RETURN_ITEM_COLLECTION_METRICS,
        CONDITIONAL_OPERATOR,
        CONDITION_EXPRESSION,
        EXPRESSION_ATTRIBUTE_NAMES,
        EXPRESSION_ATTRIBUTE_VALUES,
    ],
};

pub static DELETE_ITEM: Shape = Shape {
    name: "DeleteItemRequest",
    fields: &[
        TABLE_NAME,
        KEY,
        Field::optional(
            "expected",
            "Expected",
            FieldKind::MapOf(&EXPECTED_ATTRIBUTE_VALUE),
        ),
        CONDITIONAL_OPERATOR,
        RETURN_VALUES,
        RETURN_CONSUMED_CAPACITY,
        RETURN_ITEM_COLLECTION_METRICS,
        CONDITION_EXPRESSION,
        EXPRESSION_ATTRIBUTE_NAMES,
        EXPRESSION_ATTRIBUTE_VALUES,
    ],
};

pub(crate) const UPDATE_ITEM_OPERATION: &str = "UpdateItem";
pub(crate) const GET_ITEM_OPERATION: &str = "GetItem";
pub(crate) const PUT_ITEM_OPERATION: &str = "PutItem";
pub(crate) const DELETE_ITEM_OPERATION: &str = "DeleteItem";

/// The operations of the item service.
pub static SERVICE: Service = Service {
    name: "dynamodb",
    target_prefix: "DynamoDB_20120810",
    protocol: Protocol::Json10,
    default_endpoint: "https://dynamodb.us-east-1.amazonaws.com",
    operations: &[
        Operation {
            name: UPDATE_ITEM_OPERATION,
            method: Method::POST,
            path: "/",
            shape: &UPDATE_ITEM,
        },
        Operation {
            name: GET_ITEM_OPERATION,
            method: Method::POST,
            path: "/",
            shape: &GET_ITEM,
        },
        Operation {
            name: PUT_ITEM_OPERATION,
            method: Method::POST,
            path: "/",
            shape: &PUT_ITEM,
        },
        Operation {
            name: DELETE_ITEM_OPERATION,
            method: Method::POST,
            path: "/",
            shape: &DELETE_ITEM,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(UPDATE_ITEM_OPERATION, &UPDATE_ITEM)]
    #[test_case(GET_ITEM_OPERATION, &GET_ITEM)]
    #[test_case(PUT_ITEM_OPERATION, &PUT_ITEM)]
    #[test_case(DELETE_ITEM_OPERATION, &DELETE_ITEM)]
    fn operations(name: &str, shape: &'static Shape) {
        let operation = SERVICE.operation(name);
        assert_eq!(operation.map(|o| o.shape), Some(shape), "{name}");
        assert_eq!(operation.map(|o| &o.method), Some(&Method::POST));
    }

    #[test]
    fn wire_names_are_unique() {
        for shape in [&UPDATE_ITEM, &GET_ITEM, &PUT_ITEM, &DELETE_ITEM] {
            let mut names = shape.fields.iter().map(|f| f.wire_name).collect::<Vec<_>>();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), shape.fields.len(), "{}", shape.name);
        }
    }

    #[test]
    fn required() {
        let names = UPDATE_ITEM
            .required_fields()
            .map(|f| f.wire_name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["TableName", "Key"]);
    }
}
