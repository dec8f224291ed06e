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

use crate::model::{DeleteStackRequest, DescribeStacksRequest, UpdateStackRequest};
use crate::shapes::{DELETE_STACK_OPERATION, DESCRIBE_STACKS_OPERATION, UPDATE_STACK_OPERATION};
use bytes::Bytes;
use gax::options::RequestOptions;
use gaxi::http::JsonClient;
use gaxi::request::Request;

/// Implements a client for the stack service.
///
/// # Example
/// ```
/// # use cloud_sdk_cloudformation::client::CloudFormation;
/// # fn sample() -> anyhow::Result<()> {
/// let client = CloudFormation::builder().build()?;
/// // use `client` to prepare requests.
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `CloudFormation` use the `with_*` methods in the type
/// returned by [builder()][CloudFormation::builder]. By default this client
/// uses the `https://cloudformation.us-east-1.amazonaws.com` endpoint, see
/// [with_endpoint()] to change it.
///
/// [with_endpoint()]: gax::client_builder::ClientBuilder::with_endpoint
#[derive(Clone, Debug)]
pub struct CloudFormation {
    inner: JsonClient,
}

impl CloudFormation {
    /// Returns a builder for [CloudFormation].
    pub fn builder() -> super::builder::cloud_formation::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::cloud_formation::client::Factory)
    }

    pub(crate) fn new(inner: JsonClient) -> Self {
        Self { inner }
    }

    /// The endpoint placed in the request URIs.
    pub fn endpoint(&self) -> &str {
        self.inner.endpoint()
    }

    /// Updates a stack as specified in the template.
    ///
    /// # Example
    /// ```
    /// # use cloud_sdk_cloudformation::client::CloudFormation;
    /// # use cloud_sdk_cloudformation::model::*;
    /// # use gax::options::RequestOptions;
    /// # fn sample(client: &CloudFormation) -> gax::Result<()> {
    /// let request = client.update_stack(
    ///     UpdateStackRequest::new()
    ///         .set_stack_name("web")
    ///         .set_use_previous_template(true)
    ///         .set_notification_arns(Vec::<String>::new()),
    ///     RequestOptions::default(),
    /// )?;
    /// # Ok(()) }
    /// ```
    pub fn update_stack<T>(
        &self,
        request: T,
        options: RequestOptions,
    ) -> gax::Result<http::Request<Bytes>>
    where
        T: Into<Option<UpdateStackRequest>>,
    {
        self.prepare(UPDATE_STACK_OPERATION, request.into(), options)
    }

    /// Deletes a stack.
    pub fn delete_stack<T>(
        &self,
        request: T,
        options: RequestOptions,
    ) -> gax::Result<http::Request<Bytes>>
    where
        T: Into<Option<DeleteStackRequest>>,
    {
        self.prepare(DELETE_STACK_OPERATION, request.into(), options)
    }

    /// Describes one stack, or all the stacks when no name is given.
    pub fn describe_stacks<T>(
        &self,
        request: T,
        options: RequestOptions,
    ) -> gax::Result<http::Request<Bytes>>
    where
        T: Into<Option<DescribeStacksRequest>>,
    {
        self.prepare(DESCRIBE_STACKS_OPERATION, request.into(), options)
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
