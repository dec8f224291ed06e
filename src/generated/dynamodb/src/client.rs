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

use crate::model::{DeleteItemRequest, GetItemRequest, PutItemRequest, UpdateItemRequest};
use crate::shapes::{
    DELETE_ITEM_OPERATION, GET_ITEM_OPERATION, PUT_ITEM_OPERATION, UPDATE_ITEM_OPERATION,
};
use bytes::Bytes;
use gax::options::RequestOptions;
use gaxi::http::JsonClient;
use gaxi::request::Request;

/// Implements a client for the item service.
///
/// # Example
/// ```
/// # use cloud_sdk_dynamodb::client::DynamoDb;
/// # fn sample() -> anyhow::Result<()> {
/// let client = DynamoDb::builder().build()?;
/// // use `client` to prepare requests.
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `DynamoDb` use the `with_*` methods in the type returned
/// by [builder()][DynamoDb::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the
///   `https://dynamodb.us-east-1.amazonaws.com` endpoint. Applications using
///   other regions may want to override this default.
/// * [with_constraint_validation()]: check the documented length constraints
///   before marshalling a request.
///
/// # Pooling and Cloning
///
/// `DynamoDb` holds no connections, cloning it is cheap.
///
/// [with_endpoint()]: gax::client_builder::ClientBuilder::with_endpoint
/// [with_constraint_validation()]: gax::client_builder::ClientBuilder::with_constraint_validation
#[derive(Clone, Debug)]
pub struct DynamoDb {
    inner: JsonClient,
}

impl DynamoDb {
    /// Returns a builder for [DynamoDb].
    ///
    /// ```
    /// # use cloud_sdk_dynamodb::client::DynamoDb;
    /// # fn sample() -> anyhow::Result<()> {
    /// let client = DynamoDb::builder().with_tracing().build()?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::dynamo_db::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::dynamo_db::client::Factory)
    }

    pub(crate) fn new(inner: JsonClient) -> Self {
        Self { inner }
    }

    /// The endpoint placed in the request URIs.
    pub fn endpoint(&self) -> &str {
        self.inner.endpoint()
    }

    /// Edits the attributes of an item, or creates the item if it does not
    /// exist.
    ///
    /// Fails with an invalid argument error if `request` is `None`.
    pub fn update_item<T>(
        &self,
        request: T,
        options: RequestOptions,
    ) -> gax::Result<http::Request<Bytes>>
    where
        T: Into<Option<UpdateItemRequest>>,
    {
        self.prepare(UPDATE_ITEM_OPERATION, request.into(), options)
    }

    /// Returns the attributes of an item.
    pub fn get_item<T>(&self, request: T, options: RequestOptions) -> gax::Result<http::Request<Bytes>>
    where
        T: Into<Option<GetItemRequest>>,
    {
        self.prepare(GET_ITEM_OPERATION, request.into(), options)
    }

    /// Creates a new item, or replaces an existing item.
    pub fn put_item<T>(&self, request: T, options: RequestOptions) -> gax::Result<http::Request<Bytes>>
    where
        T: Into<Option<PutItemRequest>>,
    {
        self.prepare(PUT_ITEM_OPERATION, request.into(), options)
    }

    /// Deletes a single item.
    pub fn delete_item<T>(
        &self,
        request: T,
        options: RequestOptions,
    ) -> gax::Result<http::Request<Bytes>>
    where
        T: Into<Option<DeleteItemRequest>>,
    {
        self.prepare(DELETE_ITEM_OPERATION, request.into(), options)
    }

    fn prepare<M>(
        &self,
        operation: &str,
        request: Option<M>,
        options: RequestOptions,
    ) -> gax::Result<http::Request<Bytes>>
    where
        M: Into<Request>,
    {
        let request = request.map(Into::into);
        self.inner.prepare(operation, request.as_ref(), &options)
    }
}
