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

//! The request types for the item service.
//!
//! Every field is optional in the type system. A field that is `None` is
//! omitted from the wire document. A collection set to an empty value is
//! sent as `[]` or `{}`, which the service treats differently from an absent
//! collection.

use gaxi::request::Request;
use indexmap::IndexMap;
use std::sync::LazyLock;
use wkt::Value;

/// The value of an attribute, e.g. `Value::from("42")` or
/// `Value::number_set([1, 2])`.
pub type AttributeValue = Value;

/// A map from attribute names to values.
pub type AttributeMap = IndexMap<String, AttributeValue>;

static EMPTY_ATTRIBUTES: LazyLock<AttributeMap> = LazyLock::new(IndexMap::new);
static EMPTY_NAMES: LazyLock<IndexMap<String, String>> = LazyLock::new(IndexMap::new);
static EMPTY_UPDATES: LazyLock<IndexMap<String, AttributeValueUpdate>> =
    LazyLock::new(IndexMap::new);
static EMPTY_EXPECTED: LazyLock<IndexMap<String, ExpectedAttributeValue>> =
    LazyLock::new(IndexMap::new);

gaxi::string_enum!(
    /// Which item attributes are returned by a write operation.
    ReturnValue {
        None => "NONE",
        AllOld => "ALL_OLD",
        UpdatedOld => "UPDATED_OLD",
        AllNew => "ALL_NEW",
        UpdatedNew => "UPDATED_NEW",
    }
);

gaxi::string_enum!(
    /// The level of detail about consumed capacity in the response.
    ReturnConsumedCapacity {
        Indexes => "INDEXES",
        Total => "TOTAL",
        None => "NONE",
    }
);

gaxi::string_enum!(
    /// Whether item collection metrics are returned.
    ReturnItemCollectionMetrics {
        Size => "SIZE",
        None => "NONE",
    }
);

gaxi::string_enum!(
    /// Combines the conditions in `expected`.
    ConditionalOperator {
        And => "AND",
        Or => "OR",
    }
);

gaxi::string_enum!(
    /// How an attribute is modified by an update.
    AttributeAction {
        Add => "ADD",
        Put => "PUT",
        Delete => "DELETE",
    }
);

gaxi::string_enum!(
    /// Compares an attribute with the values in an expectation.
    ComparisonOperator {
        Eq => "EQ",
        Ne => "NE",
        In => "IN",
        Le => "LE",
        Lt => "LT",
        Ge => "GE",
        Gt => "GT",
        Between => "BETWEEN",
        NotNull => "NOT_NULL",
        Null => "NULL",
        Contains => "CONTAINS",
        NotContains => "NOT_CONTAINS",
        BeginsWith => "BEGINS_WITH",
    }
);

fn attribute_map<T, K, V>(v: T) -> AttributeMap
where
    T: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<AttributeValue>,
{
    v.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

fn to_value<T: Into<Value>>(map: IndexMap<String, T>) -> Value {
    Value::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
}

/// The new value of an attribute and how to apply it.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AttributeValueUpdate {
    pub value: Option<AttributeValue>,

    /// One of the [AttributeAction] names. The service uses `PUT` when
    /// absent.
    pub action: Option<String>,
}

impl AttributeValueUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [value][AttributeValueUpdate::value].
    pub fn set_value<T: Into<AttributeValue>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets or clears the value of [value][AttributeValueUpdate::value].
    pub fn set_or_clear_value<T: Into<AttributeValue>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(Into::into);
        self
    }

    /// Sets the value of [action][AttributeValueUpdate::action].
    ///
    /// ```
    /// # use cloud_sdk_dynamodb::model::*;
    /// let update = AttributeValueUpdate::new()
    ///     .set_value("red")
    ///     .set_action(AttributeAction::Put);
    /// assert_eq!(update.action.as_deref(), Some("PUT"));
    /// ```
    pub fn set_action<T: Into<String>>(mut self, v: T) -> Self {
        self.action = Some(v.into());
        self
    }

    /// Sets or clears the value of [action][AttributeValueUpdate::action].
    pub fn set_or_clear_action<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.action = v.map(Into::into);
        self
    }
}

impl From<AttributeValueUpdate> for Value {
    fn from(v: AttributeValueUpdate) -> Self {
        Request::new()
            .set_opt("value", v.value)
            .set_opt("action", v.action)
            .into()
    }
}

/// A condition on an attribute, checked before a write.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ExpectedAttributeValue {
    pub value: Option<AttributeValue>,

    /// When `false` the attribute must not exist.
    pub exists: Option<bool>,

    /// One of the [ComparisonOperator] names.
    pub comparison_operator: Option<String>,

    /// The operands of `comparison_operator`.
    pub attribute_value_list: Option<Vec<AttributeValue>>,
}

impl ExpectedAttributeValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [value][ExpectedAttributeValue::value].
    pub fn set_value<T: Into<AttributeValue>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets or clears the value of [value][ExpectedAttributeValue::value].
    pub fn set_or_clear_value<T: Into<AttributeValue>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(Into::into);
        self
    }

    /// Sets the value of [exists][ExpectedAttributeValue::exists].
    pub fn set_exists(mut self, v: bool) -> Self {
        self.exists = Some(v);
        self
    }

    /// Sets or clears the value of [exists][ExpectedAttributeValue::exists].
    pub fn set_or_clear_exists(mut self, v: Option<bool>) -> Self {
        self.exists = v;
        self
    }

    /// Sets the value of
    /// [comparison_operator][ExpectedAttributeValue::comparison_operator].
    pub fn set_comparison_operator<T: Into<String>>(mut self, v: T) -> Self {
        self.comparison_operator = Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [comparison_operator][ExpectedAttributeValue::comparison_operator].
    pub fn set_or_clear_comparison_operator<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.comparison_operator = v.map(Into::into);
        self
    }

    /// Sets the value of
    /// [attribute_value_list][ExpectedAttributeValue::attribute_value_list].
    ///
    /// An empty iterator sets the list to an explicitly empty value.
    pub fn set_attribute_value_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AttributeValue>,
    {
        self.attribute_value_list = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets or clears the value of
    /// [attribute_value_list][ExpectedAttributeValue::attribute_value_list].
    pub fn set_or_clear_attribute_value_list<T, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AttributeValue>,
    {
        self.attribute_value_list = v.map(|v| v.into_iter().map(Into::into).collect());
        self
    }

    /// The operands, empty if unset.
    pub fn attribute_value_list(&self) -> &[AttributeValue] {
        self.attribute_value_list.as_deref().unwrap_or_default()
    }
}

impl From<ExpectedAttributeValue> for Value {
    fn from(v: ExpectedAttributeValue) -> Self {
        Request::new()
            .set_opt("value", v.value)
            .set_opt("exists", v.exists)
            .set_opt("comparisonOperator", v.comparison_operator)
            .set_opt("attributeValueList", v.attribute_value_list)
            .into()
    }
}

/// The request for [UpdateItem][crate::client::DynamoDb::update_item].
///
/// # Example
/// ```
/// # use cloud_sdk_dynamodb::model::*;
/// let request = UpdateItemRequest::new()
///     .set_table_name("Orders")
///     .set_key([("id", "42")])
///     .set_update_expression("SET #s = :s")
///     .set_expression_attribute_names([("#s", "status")])
///     .set_expression_attribute_values([(":s", "SHIPPED")])
///     .set_return_values(ReturnValue::UpdatedNew);
/// assert_eq!(request.return_values.as_deref(), Some("UPDATED_NEW"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateItemRequest {
    /// Required. The name of the table containing the item.
    pub table_name: Option<String>,

    /// Required. The primary key of the item.
    pub key: Option<AttributeMap>,

    /// Legacy per-attribute updates, prefer `update_expression`.
    pub attribute_updates: Option<IndexMap<String, AttributeValueUpdate>>,

    /// Legacy conditions, prefer `condition_expression`.
    pub expected: Option<IndexMap<String, ExpectedAttributeValue>>,

    /// One of the [ConditionalOperator] names.
    pub conditional_operator: Option<String>,

    /// One of the [ReturnValue] names.
    pub return_values: Option<String>,

    /// One of the [ReturnConsumedCapacity] names.
    pub return_consumed_capacity: Option<String>,

    /// One of the [ReturnItemCollectionMetrics] names.
    pub return_item_collection_metrics: Option<String>,

    pub update_expression: Option<String>,

    pub condition_expression: Option<String>,

    /// Substitution tokens for attribute names in the expressions.
    pub expression_attribute_names: Option<IndexMap<String, String>>,

    /// Substitution tokens for attribute values in the expressions.
    pub expression_attribute_values: Option<AttributeMap>,
}

impl UpdateItemRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [table_name][UpdateItemRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets or clears the value of [table_name][UpdateItemRequest::table_name].
    pub fn set_or_clear_table_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.table_name = v.map(Into::into);
        self
    }

    /// Sets the value of [key][UpdateItemRequest::key].
    pub fn set_key<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.key = Some(attribute_map(v));
        self
    }

    /// Sets or clears the value of [key][UpdateItemRequest::key].
    pub fn set_or_clear_key<T, K, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.key = v.map(attribute_map);
        self
    }

    /// Sets the value of [attribute_updates][UpdateItemRequest::attribute_updates].
    pub fn set_attribute_updates<T, K>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, AttributeValueUpdate)>,
        K: Into<String>,
    {
        self.attribute_updates = Some(v.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    /// Sets or clears the value of [attribute_updates][UpdateItemRequest::attribute_updates].
    pub fn set_or_clear_attribute_updates<T, K>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = (K, AttributeValueUpdate)>,
        K: Into<String>,
    {
        self.attribute_updates = v.map(|v| v.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    /// Sets the value of [expected][UpdateItemRequest::expected].
    pub fn set_expected<T, K>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, ExpectedAttributeValue)>,
        K: Into<String>,
    {
        self.expected = Some(v.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    /// Sets or clears the value of [expected][UpdateItemRequest::expected].
    pub fn set_or_clear_expected<T, K>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = (K, ExpectedAttributeValue)>,
        K: Into<String>,
    {
        self.expected = v.map(|v| v.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    /// Sets the value of [conditional_operator][UpdateItemRequest::conditional_operator].
    pub fn set_conditional_operator<T: Into<String>>(mut self, v: T) -> Self {
        self.conditional_operator = Some(v.into());
        self
    }

    /// Sets or clears the value of [conditional_operator][UpdateItemRequest::conditional_operator].
    pub fn set_or_clear_conditional_operator<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.conditional_operator = v.map(Into::into);
        self
    }

    /// Sets the value of [return_values][UpdateItemRequest::return_values].
    pub fn set_return_values<T: Into<String>>(mut self, v: T) -> Self {
        self.return_values = Some(v.into());
        self
    }

    /// Sets or clears the value of [return_values][UpdateItemRequest::return_values].
    pub fn set_or_clear_return_values<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.return_values = v.map(Into::into);
        self
    }

    /// Sets the value of [return_consumed_capacity][UpdateItemRequest::return_consumed_capacity].
    pub fn set_return_consumed_capacity<T: Into<String>>(mut self, v: T) -> Self {
        self.return_consumed_capacity = Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [return_consumed_capacity][UpdateItemRequest::return_consumed_capacity].
    pub fn set_or_clear_return_consumed_capacity<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.return_consumed_capacity = v.map(Into::into);
        self
    }

    /// Sets the value of
    /// [return_item_collection_metrics][UpdateItemRequest::return_item_collection_metrics].
    pub fn set_return_item_collection_metrics<T: Into<String>>(mut self, v: T) -> Self {
        self.return_item_collection_metrics = Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [return_item_collection_metrics][UpdateItemRequest::return_item_collection_metrics].
    pub fn set_or_clear_return_item_collection_metrics<T: Into<String>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.return_item_collection_metrics = v.map(Into::into);
        self
    }

    /// Sets the value of [update_expression][UpdateItemRequest::update_expression].
    pub fn set_update_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.update_expression = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_expression][UpdateItemRequest::update_expression].
    pub fn set_or_clear_update_expression<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.update_expression = v.map(Into::into);
        self
    }

    /// Sets the value of [condition_expression][UpdateItemRequest::condition_expression].
    pub fn set_condition_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.condition_expression = Some(v.into());
        self
    }

    /// Sets or clears the value of [condition_expression][UpdateItemRequest::condition_expression].
    pub fn set_or_clear_condition_expression<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.condition_expression = v.map(Into::into);
        self
    }

    /// Sets the value of
    /// [expression_attribute_names][UpdateItemRequest::expression_attribute_names].
    pub fn set_expression_attribute_names<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.expression_attribute_names =
            Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets or clears the value of
    /// [expression_attribute_names][UpdateItemRequest::expression_attribute_names].
    pub fn set_or_clear_expression_attribute_names<T, K, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.expression_attribute_names =
            v.map(|v| v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of
    /// [expression_attribute_values][UpdateItemRequest::expression_attribute_values].
    pub fn set_expression_attribute_values<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.expression_attribute_values = Some(attribute_map(v));
        self
    }

    /// Sets or clears the value of
    /// [expression_attribute_values][UpdateItemRequest::expression_attribute_values].
    pub fn set_or_clear_expression_attribute_values<T, K, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.expression_attribute_values = v.map(attribute_map);
        self
    }

    /// The primary key, empty if unset.
    pub fn key(&self) -> &AttributeMap {
        self.key.as_ref().unwrap_or(&EMPTY_ATTRIBUTES)
    }

    /// The attribute updates, empty if unset.
    pub fn attribute_updates(&self) -> &IndexMap<String, AttributeValueUpdate> {
        self.attribute_updates.as_ref().unwrap_or(&EMPTY_UPDATES)
    }

    /// The expected values, empty if unset.
    pub fn expected(&self) -> &IndexMap<String, ExpectedAttributeValue> {
        self.expected.as_ref().unwrap_or(&EMPTY_EXPECTED)
    }

    /// The attribute name substitutions, empty if unset.
    pub fn expression_attribute_names(&self) -> &IndexMap<String, String> {
        self.expression_attribute_names
            .as_ref()
            .unwrap_or(&EMPTY_NAMES)
    }

    /// The attribute value substitutions, empty if unset.
    pub fn expression_attribute_values(&self) -> &AttributeMap {
        self.expression_attribute_values
            .as_ref()
            .unwrap_or(&EMPTY_ATTRIBUTES)
    }
}

impl From<UpdateItemRequest> for Request {
    fn from(v: UpdateItemRequest) -> Self {
        Request::new()
            .set_opt("tableName", v.table_name)
            .set_opt("key", v.key.map(to_value))
            .set_opt("attributeUpdates", v.attribute_updates.map(to_value))
            .set_opt("expected", v.expected.map(to_value))
            .set_opt("conditionalOperator", v.conditional_operator)
            .set_opt("returnValues", v.return_values)
            .set_opt("returnConsumedCapacity", v.return_consumed_capacity)
            .set_opt("returnItemCollectionMetrics", v.return_item_collection_metrics)
            .set_opt("updateExpression", v.update_expression)
            .set_opt("conditionExpression", v.condition_expression)
            .set_opt("expressionAttributeNames", v.expression_attribute_names.map(to_value))
            .set_opt("expressionAttributeValues", v.expression_attribute_values.map(to_value))
    }
}

/// The request for [GetItem][crate::client::DynamoDb::get_item].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetItemRequest {
    /// Required. The name of the table containing the item.
    pub table_name: Option<String>,

    /// Required. The primary key of the item.
    pub key: Option<AttributeMap>,

    /// Legacy projection, prefer `projection_expression`.
    pub attributes_to_get: Option<Vec<String>>,

    pub consistent_read: Option<bool>,

    /// One of the [ReturnConsumedCapacity] names.
    pub return_consumed_capacity: Option<String>,

    pub projection_expression: Option<String>,

    pub expression_attribute_names: Option<IndexMap<String, String>>,
}

impl GetItemRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [table_name][GetItemRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets or clears the value of [table_name][GetItemRequest::table_name].
    pub fn set_or_clear_table_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.table_name = v.map(Into::into);
        self
    }

    /// Sets the value of [key][GetItemRequest::key].
    pub fn set_key<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.key = Some(attribute_map(v));
        self
    }

    /// Sets or clears the value of [key][GetItemRequest::key].
    pub fn set_or_clear_key<T, K, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.key = v.map(attribute_map);
        self
    }

    /// Sets the value of [attributes_to_get][GetItemRequest::attributes_to_get].
    pub fn set_attributes_to_get<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.attributes_to_get = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets or clears the value of [attributes_to_get][GetItemRequest::attributes_to_get].
    pub fn set_or_clear_attributes_to_get<T, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.attributes_to_get = v.map(|v| v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the value of [consistent_read][GetItemRequest::consistent_read].
    pub fn set_consistent_read(mut self, v: bool) -> Self {
        self.consistent_read = Some(v);
        self
    }

    /// Sets or clears the value of [consistent_read][GetItemRequest::consistent_read].
    pub fn set_or_clear_consistent_read(mut self, v: Option<bool>) -> Self {
        self.consistent_read = v;
        self
    }

    /// Sets the value of [return_consumed_capacity][GetItemRequest::return_consumed_capacity].
    pub fn set_return_consumed_capacity<T: Into<String>>(mut self, v: T) -> Self {
        self.return_consumed_capacity = Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [return_consumed_capacity][GetItemRequest::return_consumed_capacity].
    pub fn set_or_clear_return_consumed_capacity<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.return_consumed_capacity = v.map(Into::into);
        self
    }

    /// Sets the value of [projection_expression][GetItemRequest::projection_expression].
    pub fn set_projection_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.projection_expression = Some(v.into());
        self
    }

    /// Sets or clears the value of [projection_expression][GetItemRequest::projection_expression].
    pub fn set_or_clear_projection_expression<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.projection_expression = v.map(Into::into);
        self
    }

    /// Sets the value of
    /// [expression_attribute_names][GetItemRequest::expression_attribute_names].
    pub fn set_expression_attribute_names<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.expression_attribute_names =
            Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets or clears the value of
    /// [expression_attribute_names][GetItemRequest::expression_attribute_names].
    pub fn set_or_clear_expression_attribute_names<T, K, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.expression_attribute_names =
            v.map(|v| v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// The primary key, empty if unset.
    pub fn key(&self) -> &AttributeMap {
        self.key.as_ref().unwrap_or(&EMPTY_ATTRIBUTES)
    }

    /// The attributes to return, empty if unset.
    pub fn attributes_to_get(&self) -> &[String] {
        self.attributes_to_get.as_deref().unwrap_or_default()
    }
}

impl From<GetItemRequest> for Request {
    fn from(v: GetItemRequest) -> Self {
        Request::new()
            .set_opt("tableName", v.table_name)
            .set_opt("key", v.key.map(to_value))
            .set_opt(
                "attributesToGet",
                v.attributes_to_get.map(Value::list),
            )
            .set_opt("consistentRead", v.consistent_read)
            .set_opt("returnConsumedCapacity", v.return_consumed_capacity)
            .set_opt("projectionExpression", v.projection_expression)
            .set_opt("expressionAttributeNames", v.expression_attribute_names.map(to_value))
    }
}

/// The request for [PutItem][crate::client::DynamoDb::put_item].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PutItemRequest {
    /// Required. The name of the table receiving the item.
    pub table_name: Option<String>,

    /// Required. The attributes of the item, including its primary key.
    pub item: Option<AttributeMap>,

    pub expected: Option<IndexMap<String, ExpectedAttributeValue>>,

    /// One of the [ReturnValue] names, only `NONE` and `ALL_OLD` are valid.
    pub return_values: Option<String>,

    pub return_consumed_capacity: Option<String>,

    pub return_item_collection_metrics: Option<String>,

    pub conditional_operator: Option<String>,

    pub condition_expression: Option<String>,

    pub expression_attribute_names: Option<IndexMap<String, String>>,

    pub expression_attribute_values: Option<AttributeMap>,
}

impl PutItemRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [table_name][PutItemRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets or clears the value of [table_name][PutItemRequest::table_name].
    pub fn set_or_clear_table_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.table_name = v.map(Into::into);
        self
    }

    /// Sets the value of [item][PutItemRequest::item].
    pub fn set_item<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.item = Some(attribute_map(v));
        self
    }

    /// Sets or clears the value of [item][PutItemRequest::item].
    pub fn set_or_clear_item<T, K, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.item = v.map(attribute_map);
        self
    }

    /// Sets the value of [expected][PutItemRequest::expected].
    pub fn set_expected<T, K>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, ExpectedAttributeValue)>,
        K: Into<String>,
    {
        self.expected = Some(v.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    /// Sets or clears the value of [expected][PutItemRequest::expected].
    pub fn set_or_clear_expected<T, K>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = (K, ExpectedAttributeValue)>,
        K: Into<String>,
    {
        self.expected = v.map(|v| v.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    /// Sets the value of [return_values][PutItemRequest::return_values].
    pub fn set_return_values<T: Into<String>>(mut self, v: T) -> Self {
        self.return_values = Some(v.into());
        self
    }

    /// Sets or clears the value of [return_values][PutItemRequest::return_values].
    pub fn set_or_clear_return_values<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.return_values = v.map(Into::into);
        self
    }

    /// Sets the value of [return_consumed_capacity][PutItemRequest::return_consumed_capacity].
    pub fn set_return_consumed_capacity<T: Into<String>>(mut self, v: T) -> Self {
        self.return_consumed_capacity = Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [return_consumed_capacity][PutItemRequest::return_consumed_capacity].
    pub fn set_or_clear_return_consumed_capacity<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.return_consumed_capacity = v.map(Into::into);
        self
    }

    /// Sets the value of
    /// [return_item_collection_metrics][PutItemRequest::return_item_collection_metrics].
    pub fn set_return_item_collection_metrics<T: Into<String>>(mut self, v: T) -> Self {
        self.return_item_collection_metrics = Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [return_item_collection_metrics][PutItemRequest::return_item_collection_metrics].
    pub fn set_or_clear_return_item_collection_metrics<T: Into<String>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.return_item_collection_metrics = v.map(Into::into);
        self
    }

    /// Sets the value of [conditional_operator][PutItemRequest::conditional_operator].
    pub fn set_conditional_operator<T: Into<String>>(mut self, v: T) -> Self {
        self.conditional_operator = Some(v.into());
        self
    }

    /// Sets or clears the value of [conditional_operator][PutItemRequest::conditional_operator].
    pub fn set_or_clear_conditional_operator<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.conditional_operator = v.map(Into::into);
        self
    }

    /// Sets the value of [condition_expression][PutItemRequest::condition_expression].
    pub fn set_condition_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.condition_expression = Some(v.into());
        self
    }

    /// Sets or clears the value of [condition_expression][PutItemRequest::condition_expression].
    pub fn set_or_clear_condition_expression<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.condition_expression = v.map(Into::into);
        self
    }

    /// Sets the value of
    /// [expression_attribute_names][PutItemRequest::expression_attribute_names].
    pub fn set_expression_attribute_names<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.expression_attribute_names =
            Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets or clears the value of
    /// [expression_attribute_names][PutItemRequest::expression_attribute_names].
    pub fn set_or_clear_expression_attribute_names<T, K, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.expression_attribute_names =
            v.map(|v| v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of
    /// [expression_attribute_values][PutItemRequest::expression_attribute_values].
    pub fn set_expression_attribute_values<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.expression_attribute_values = Some(attribute_map(v));
        self
    }

    /// Sets or clears the value of
    /// [expression_attribute_values][PutItemRequest::expression_attribute_values].
    pub fn set_or_clear_expression_attribute_values<T, K, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.expression_attribute_values = v.map(attribute_map);
        self
    }

    /// The item attributes, empty if unset.
    pub fn item(&self) -> &AttributeMap {
        self.item.as_ref().unwrap_or(&EMPTY_ATTRIBUTES)
    }
}

impl From<PutItemRequest> for Request {
    fn from(v: PutItemRequest) -> Self {
        Request::new()
            .set_opt("tableName", v.table_name)
            .set_opt("item", v.item.map(to_value))
            .set_opt("expected", v.expected.map(to_value))
            .set_opt("returnValues", v.return_values)
            .set_opt("returnConsumedCapacity", v.return_consumed_capacity)
            .set_opt("returnItemCollectionMetrics", v.return_item_collection_metrics)
            .set_opt("conditionalOperator", v.conditional_operator)
            .set_opt("conditionExpression", v.condition_expression)
            .set_opt("expressionAttributeNames", v.expression_attribute_names.map(to_value))
            .set_opt("expressionAttributeValues", v.expression_attribute_values.map(to_value))
    }
}

/// The request for [DeleteItem][crate::client::DynamoDb::delete_item].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteItemRequest {
    /// Required. The name of the table containing the item.
    pub table_name: Option<String>,

    /// Required. The primary key of the item.
    pub key: Option<AttributeMap>,

    pub expected: Option<IndexMap<String, ExpectedAttributeValue>>,

    pub conditional_operator: Option<String>,

    /// One of the [ReturnValue] names, only `NONE` and `ALL_OLD` are valid.
    pub return_values: Option<String>,

    pub return_consumed_capacity: Option<String>,

    pub return_item_collection_metrics: Option<String>,

    pub condition_expression: Option<String>,

    pub expression_attribute_names: Option<IndexMap<String, String>>,

    pub expression_attribute_values: Option<AttributeMap>,
}

impl DeleteItemRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [table_name][DeleteItemRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = Some(v.into());
        self
    }

    /// Sets or clears the value of [table_name][DeleteItemRequest::table_name].
    pub fn set_or_clear_table_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.table_name = v.map(Into::into);
        self
    }

    /// Sets the value of [key][DeleteItemRequest::key].
    pub fn set_key<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.key = Some(attribute_map(v));
        self
    }

    /// Sets or clears the value of [key][DeleteItemRequest::key].
    pub fn set_or_clear_key<T, K, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.key = v.map(attribute_map);
        self
    }

    /// Sets the value of [expected][DeleteItemRequest::expected].
    pub fn set_expected<T, K>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, ExpectedAttributeValue)>,
        K: Into<String>,
    {
        self.expected = Some(v.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    /// Sets or clears the value of [expected][DeleteItemRequest::expected].
    pub fn set_or_clear_expected<T, K>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = (K, ExpectedAttributeValue)>,
        K: Into<String>,
    {
        self.expected = v.map(|v| v.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    /// Sets the value of [conditional_operator][DeleteItemRequest::conditional_operator].
    pub fn set_conditional_operator<T: Into<String>>(mut self, v: T) -> Self {
        self.conditional_operator = Some(v.into());
        self
    }

    /// Sets or clears the value of [conditional_operator][DeleteItemRequest::conditional_operator].
    pub fn set_or_clear_conditional_operator<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.conditional_operator = v.map(Into::into);
        self
    }

    /// Sets the value of [return_values][DeleteItemRequest::return_values].
    pub fn set_return_values<T: Into<String>>(mut self, v: T) -> Self {
        self.return_values = Some(v.into());
        self
    }

    /// Sets or clears the value of [return_values][DeleteItemRequest::return_values].
    pub fn set_or_clear_return_values<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.return_values = v.map(Into::into);
        self
    }

    /// Sets the value of
    /// [return_consumed_capacity][DeleteItemRequest::return_consumed_capacity].
    pub fn set_return_consumed_capacity<T: Into<String>>(mut self, v: T) -> Self {
        self.return_consumed_capacity = Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [return_consumed_capacity][DeleteItemRequest::return_consumed_capacity].
    pub fn set_or_clear_return_consumed_capacity<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.return_consumed_capacity = v.map(Into::into);
        self
    }

    /// Sets the value of
    /// [return_item_collection_metrics][DeleteItemRequest::return_item_collection_metrics].
    pub fn set_return_item_collection_metrics<T: Into<String>>(mut self, v: T) -> Self {
        self.return_item_collection_metrics = Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [return_item_collection_metrics][DeleteItemRequest::return_item_collection_metrics].
    pub fn set_or_clear_return_item_collection_metrics<T: Into<String>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.return_item_collection_metrics = v.map(Into::into);
        self
    }

    /// Sets the value of [condition_expression][DeleteItemRequest::condition_expression].
    pub fn set_condition_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.condition_expression = Some(v.into());
        self
    }

    /// Sets or clears the value of [condition_expression][DeleteItemRequest::condition_expression].
    pub fn set_or_clear_condition_expression<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.condition_expression = v.map(Into::into);
        self
    }

    /// Sets the value of
    /// [expression_attribute_names][DeleteItemRequest::expression_attribute_names].
    pub fn set_expression_attribute_names<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.expression_attribute_names =
            Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets or clears the value of
    /// [expression_attribute_names][DeleteItemRequest::expression_attribute_names].
    pub fn set_or_clear_expression_attribute_names<T, K, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.expression_attribute_names =
            v.map(|v| v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of
    /// [expression_attribute_values][DeleteItemRequest::expression_attribute_values].
    pub fn set_expression_attribute_values<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.expression_attribute_values = Some(attribute_map(v));
        self
    }

    /// Sets or clears the value of
    /// [expression_attribute_values][DeleteItemRequest::expression_attribute_values].
    pub fn set_or_clear_expression_attribute_values<T, K, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.expression_attribute_values = v.map(attribute_map);
        self
    }

    /// The primary key, empty if unset.
    pub fn key(&self) -> &AttributeMap {
        self.key.as_ref().unwrap_or(&EMPTY_ATTRIBUTES)
    }
}

impl From<DeleteItemRequest> for Request {
    fn from(v: DeleteItemRequest) -> Self {
        Request::new()
            .set_opt("tableName", v.table_name)
            .set_opt("key", v.key.map(to_value))
            .set_opt("expected", v.expected.map(to_value))
            .set_opt("conditionalOperator", v.conditional_operator)
            .set_opt("returnValues", v.return_values)
            .set_opt("returnConsumedCapacity", v.return_consumed_capacity)
            .set_opt("returnItemCollectionMetrics", v.return_item_collection_metrics)
            .set_opt("conditionExpression", v.condition_expression)
            .set_opt("expressionAttributeNames", v.expression_attribute_names.map(to_value))
            .set_opt("expressionAttributeValues", v.expression_attribute_values.map(to_value))
    }
}
