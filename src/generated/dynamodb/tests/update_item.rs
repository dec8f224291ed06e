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

#[cfg(test)]
mod tests {
    use cloud_sdk_dynamodb::client::DynamoDb;
    use cloud_sdk_dynamodb::model::*;
    use cloud_sdk_dynamodb::shapes::UPDATE_ITEM;
    use gax::options::RequestOptions;
    use gaxi::request::Request;
    use gaxi::marshaller::marshal;
    use gaxi::service::Protocol;
    use gaxi::unmarshaller::unmarshal;
    use pretty_assertions::assert_eq;
    use serde_json::{Value as Json, json};
    use wkt::Value;

    type Result<T> = anyhow::Result<T>;

    fn body(request: &http::Request<bytes::Bytes>) -> Result<Json> {
        Ok(serde_json::from_slice(request.body())?)
    }

    #[test]
    fn minimal() -> Result<()> {
        let client = DynamoDb::builder().build()?;
        let request = UpdateItemRequest::new()
            .set_table_name("Orders")
            .set_key([("id", "42")]);
        let got = client.update_item(request, RequestOptions::default())?;
        assert_eq!(
            got.body().as_ref(),
            br#"{"TableName":"Orders","Key":{"id":"42"}}"#
        );
        Ok(())
    }

    #[test]
    fn all_fields() -> Result<()> {
        let client = DynamoDb::builder().build()?;
        let request = UpdateItemRequest::new()
            .set_table_name("Orders")
            .set_key([("id", "42")])
            .set_attribute_updates([(
                "color",
                AttributeValueUpdate::new()
                    .set_value("red")
                    .set_action(AttributeAction::Put),
            )])
            .set_expected([(
                "status",
                ExpectedAttributeValue::new()
                    .set_value("PENDING")
                    .set_exists(true),
            )])
            .set_conditional_operator(ConditionalOperator::And)
            .set_return_values(ReturnValue::AllNew)
            .set_return_consumed_capacity(ReturnConsumedCapacity::Total)
            .set_return_item_collection_metrics(ReturnItemCollectionMetrics::Size)
            .set_update_expression("SET #s = :s")
            .set_condition_expression("attribute_exists(id)")
            .set_expression_attribute_names([("#s", "status")])
            .set_expression_attribute_values([(":s", "SHIPPED")]);
        let got = client.update_item(request, RequestOptions::default())?;
        let want = json!({
            "TableName": "Orders",
            "Key": {"id": "42"},
            "AttributeUpdates": {"color": {"Value": "red", "Action": "PUT"}},
            "Expected": {"status": {"Value": "PENDING", "Exists": true}},
            "ConditionalOperator": "AND",
            "ReturnValues": "ALL_NEW",
            "ReturnConsumedCapacity": "TOTAL",
            "ReturnItemCollectionMetrics": "SIZE",
            "UpdateExpression": "SET #s = :s",
            "ConditionExpression": "attribute_exists(id)",
            "ExpressionAttributeNames": {"#s": "status"},
            "ExpressionAttributeValues": {":s": "SHIPPED"},
        });
        assert_eq!(body(&got)?, want);
        // The keys follow the declaration order of the shape.
        let keys = body(&got)?
            .as_object()
            .map(|o| o.keys().cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        let declared = UPDATE_ITEM
            .fields
            .iter()
            .map(|f| f.wire_name.to_string())
            .collect::<Vec<_>>();
        assert_eq!(keys, declared);
        Ok(())
    }

    #[test]
    fn explicit_empty_and_unset() -> Result<()> {
        let client = DynamoDb::builder().build()?;
        let request = UpdateItemRequest::new()
            .set_table_name("Orders")
            .set_key([("id", "42")])
            .set_expression_attribute_values(Vec::<(String, Value)>::new());
        let got = client.update_item(request, RequestOptions::default())?;
        assert_eq!(
            body(&got)?,
            json!({"TableName": "Orders", "Key": {"id": "42"}, "ExpressionAttributeValues": {}})
        );

        let request = UpdateItemRequest::new()
            .set_table_name("Orders")
            .set_key([("id", "42")])
            .set_expected([("status", ExpectedAttributeValue::new().set_attribute_value_list(Vec::<Value>::new()))]);
        let got = client.update_item(request, RequestOptions::default())?;
        assert_eq!(
            body(&got)?,
            json!({"TableName": "Orders", "Key": {"id": "42"}, "Expected": {"status": {"AttributeValueList": []}}})
        );
        Ok(())
    }

    #[test]
    fn deterministic() -> Result<()> {
        let client = DynamoDb::builder().build()?;
        let request = UpdateItemRequest::new()
            .set_table_name("Orders")
            .set_key([("id", Value::from("42")), ("sk", Value::from(7))])
            .set_expression_attribute_values([(":a", 1), (":b", 2), (":c", 3)]);
        let first = client.update_item(request.clone(), RequestOptions::default())?;
        for _ in 0..8 {
            let got = client.update_item(request.clone(), RequestOptions::default())?;
            assert_eq!(got.body(), first.body());
        }
        Ok(())
    }

    #[test]
    fn round_trip() -> Result<()> {
        let client = DynamoDb::builder().build()?;
        let request = UpdateItemRequest::new()
            .set_table_name("Orders")
            .set_key([("id", "42")])
            .set_attribute_updates([(
                "tags",
                AttributeValueUpdate::new()
                    .set_value(Value::list(["a", "b"]))
                    .set_action(AttributeAction::Add),
            )])
            .set_update_expression("SET qty = qty + :one")
            .set_expression_attribute_values([(":one", 1)])
            .set_expression_attribute_names(Vec::<(String, String)>::new());
        let got = client.update_item(request.clone(), RequestOptions::default())?;
        let decoded = unmarshal(got.body(), &UPDATE_ITEM)?;
        assert_eq!(decoded, Request::from(request));
        let again = marshal(Some(&decoded), &UPDATE_ITEM, Protocol::Json10)?;
        assert_eq!(&again.body, got.body());
        Ok(())
    }

    #[test]
    fn absent_request() -> Result<()> {
        let client = DynamoDb::builder().build()?;
        let err = client
            .update_item(None::<UpdateItemRequest>, RequestOptions::default())
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        Ok(())
    }

    #[test]
    fn missing_required() -> Result<()> {
        let client = DynamoDb::builder().build()?;
        let err = client
            .update_item(
                UpdateItemRequest::new().set_table_name("Orders"),
                RequestOptions::default(),
            )
            .unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
        assert!(err.to_string().contains("key"), "{err}");
        Ok(())
    }
}
