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

//! The request types for the stack service.
//!
//! Every field is optional in the type system. A field that is `None` is
//! omitted from the wire document, while an empty list is sent as `[]`.

use gaxi::request::Request;
use wkt::Value;

gaxi::string_enum!(
    /// Acknowledges that a template creates or modifies IAM resources.
    Capability {
        CapabilityIam => "CAPABILITY_IAM",
    }
);

/// An input parameter of a stack template.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Parameter {
    /// The key of the parameter, as declared in the template.
    pub parameter_key: Option<String>,

    pub parameter_value: Option<String>,

    /// Keeps the value currently used by the stack. Do not set
    /// `parameter_value` with this option.
    pub use_previous_value: Option<bool>,
}

impl Parameter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parameter_key][Parameter::parameter_key].
    pub fn set_parameter_key<T: Into<String>>(mut self, v: T) -> Self {
        self.parameter_key = Some(v.into());
        self
    }

    /// Sets or clears the value of [parameter_key][Parameter::parameter_key].
    pub fn set_or_clear_parameter_key<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.parameter_key = v.map(Into::into);
        self
    }

    /// Sets the value of [parameter_value][Parameter::parameter_value].
    pub fn set_parameter_value<T: Into<String>>(mut self, v: T) -> Self {
        self.parameter_value = Some(v.into());
        self
    }

    /// Sets or clears the value of [parameter_value][Parameter::parameter_value].
    pub fn set_or_clear_parameter_value<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.parameter_value = v.map(Into::into);
        self
    }

    /// Sets the value of [use_previous_value][Parameter::use_previous_value].
    pub fn set_use_previous_value(mut self, v: bool) -> Self {
        self.use_previous_value = Some(v);
        self
    }

    /// Sets or clears the value of [use_previous_value][Parameter::use_previous_value].
    pub fn set_or_clear_use_previous_value(mut self, v: Option<bool>) -> Self {
        self.use_previous_value = v;
        self
    }
}

impl From<Parameter> for Value {
    fn from(v: Parameter) -> Self {
        Request::new()
            .set_opt("parameterKey", v.parameter_key)
            .set_opt("parameterValue", v.parameter_value)
            .set_opt("usePreviousValue", v.use_previous_value)
            .into()
    }
}

/// The request for [UpdateStack][crate::client::CloudFormation::update_stack].
///
/// # Example
/// ```
/// # use cloud_sdk_cloudformation::model::*;
/// let request = UpdateStackRequest::new()
///     .set_stack_name("web")
///     .set_use_previous_template(true)
///     .set_parameters([Parameter::new()
///         .set_parameter_key("InstanceType")
///         .set_parameter_value("m1.small")])
///     .set_capabilities([Capability::CapabilityIam]);
/// assert_eq!(request.capabilities(), ["CAPABILITY_IAM"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateStackRequest {
    /// Required. The name or unique id of the stack.
    pub stack_name: Option<String>,

    /// The template document, at most 51,200 bytes.
    pub template_body: Option<String>,

    /// The location of the template document.
    pub template_url: Option<String>,

    /// Reuses the template currently associated with the stack.
    pub use_previous_template: Option<bool>,

    /// A temporary policy applied only during this update.
    pub stack_policy_during_update_body: Option<String>,

    pub stack_policy_during_update_url: Option<String>,

    pub parameters: Option<Vec<Parameter>>,

    /// The [Capability] names acknowledged by the caller.
    pub capabilities: Option<Vec<String>>,

    /// Replaces the stack policy.
    pub stack_policy_body: Option<String>,

    pub stack_policy_url: Option<String>,

    /// The topics receiving stack events. An empty list removes all topics.
    pub notification_arns: Option<Vec<String>>,
}

impl UpdateStackRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [stack_name][UpdateStackRequest::stack_name].
    pub fn set_stack_name<T: Into<String>>(mut self, v: T) -> Self {
        self.stack_name = Some(v.into());
        self
    }

    /// Sets or clears the value of [stack_name][UpdateStackRequest::stack_name].
    pub fn set_or_clear_stack_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.stack_name = v.map(Into::into);
        self
    }

    /// Sets the value of [template_body][UpdateStackRequest::template_body].
    pub fn set_template_body<T: Into<String>>(mut self, v: T) -> Self {
        self.template_body = Some(v.into());
        self
    }

    /// Sets or clears the value of [template_body][UpdateStackRequest::template_body].
    pub fn set_or_clear_template_body<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.template_body = v.map(Into::into);
        self
    }

    /// Sets the value of [template_url][UpdateStackRequest::template_url].
    pub fn set_template_url<T: Into<String>>(mut self, v: T) -> Self {
        self.template_url = Some(v.into());
        self
    }

    /// Sets or clears the value of [template_url][UpdateStackRequest::template_url].
    pub fn set_or_clear_template_url<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.template_url = v.map(Into::into);
        self
    }

    /// Sets the value of [use_previous_template][UpdateStackRequest::use_previous_template].
    pub fn set_use_previous_template(mut self, v: bool) -> Self {
        self.use_previous_template = Some(v);
        self
    }

    /// Sets or clears the value of
    /// [use_previous_template][UpdateStackRequest::use_previous_template].
    pub fn set_or_clear_use_previous_template(mut self, v: Option<bool>) -> Self {
        self.use_previous_template = v;
        self
    }

    /// Sets the value of
    /// [stack_policy_during_update_body][UpdateStackRequest::stack_policy_during_update_body].
    pub fn set_stack_policy_during_update_body<T: Into<String>>(mut self, v: T) -> Self {
        self.stack_policy_during_update_body = Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [stack_policy_during_update_body][UpdateStackRequest::stack_policy_during_update_body].
    pub fn set_or_clear_stack_policy_during_update_body<T: Into<String>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.stack_policy_during_update_body = v.map(Into::into);
        self
    }

    /// Sets the value of
    /// [stack_policy_during_update_url][UpdateStackRequest::stack_policy_during_update_url].
    pub fn set_stack_policy_during_update_url<T: Into<String>>(mut self, v: T) -> Self {
        self.stack_policy_during_update_url = Some(v.into());
        self
    }

    /// Sets or clears the value of
    /// [stack_policy_during_update_url][UpdateStackRequest::stack_policy_during_update_url].
    pub fn set_or_clear_stack_policy_during_update_url<T: Into<String>>(
        mut self,
        v: Option<T>,
    ) -> Self {
        self.stack_policy_during_update_url = v.map(Into::into);
        self
    }

    /// Sets the value of [parameters][UpdateStackRequest::parameters].
    pub fn set_parameters<T>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = Parameter>,
    {
        self.parameters = Some(v.into_iter().collect());
        self
    }

    /// Sets or clears the value of [parameters][UpdateStackRequest::parameters].
    pub fn set_or_clear_parameters<T>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = Parameter>,
    {
        self.parameters = v.map(|v| v.into_iter().collect());
        self
    }

    /// Sets the value of [capabilities][UpdateStackRequest::capabilities].
    pub fn set_capabilities<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.capabilities = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets or clears the value of [capabilities][UpdateStackRequest::capabilities].
    pub fn set_or_clear_capabilities<T, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.capabilities = v.map(|v| v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the value of [stack_policy_body][UpdateStackRequest::stack_policy_body].
    pub fn set_stack_policy_body<T: Into<String>>(mut self, v: T) -> Self {
        self.stack_policy_body = Some(v.into());
        self
    }

    /// Sets or clears the value of [stack_policy_body][UpdateStackRequest::stack_policy_body].
    pub fn set_or_clear_stack_policy_body<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.stack_policy_body = v.map(Into::into);
        self
    }

    /// Sets the value of [stack_policy_url][UpdateStackRequest::stack_policy_url].
    pub fn set_stack_policy_url<T: Into<String>>(mut self, v: T) -> Self {
        self.stack_policy_url = Some(v.into());
        self
    }

    /// Sets or clears the value of [stack_policy_url][UpdateStackRequest::stack_policy_url].
    pub fn set_or_clear_stack_policy_url<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.stack_policy_url = v.map(Into::into);
        self
    }

    /// Sets the value of [notification_arns][UpdateStackRequest::notification_arns].
    pub fn set_notification_arns<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.notification_arns = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets or clears the value of [notification_arns][UpdateStackRequest::notification_arns].
    pub fn set_or_clear_notification_arns<T, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.notification_arns = v.map(|v| v.into_iter().map(Into::into).collect());
        self
    }

    /// The template parameters, empty if unset.
    pub fn parameters(&self) -> &[Parameter] {
        self.parameters.as_deref().unwrap_or_default()
    }

    /// The acknowledged capabilities, empty if unset.
    pub fn capabilities(&self) -> &[String] {
        self.capabilities.as_deref().unwrap_or_default()
    }

    /// The notification topics, empty if unset.
    pub fn notification_arns(&self) -> &[String] {
        self.notification_arns.as_deref().unwrap_or_default()
    }
}

impl From<UpdateStackRequest> for Request {
    fn from(v: UpdateStackRequest) -> Self {
        Request::new()
            .set_opt("stackName", v.stack_name)
            .set_opt("templateBody", v.template_body)
            .set_opt("templateURL", v.template_url)
            .set_opt("usePreviousTemplate", v.use_previous_template)
            .set_opt("stackPolicyDuringUpdateBody", v.stack_policy_during_update_body)
            .set_opt("stackPolicyDuringUpdateURL", v.stack_policy_during_update_url)
            .set_opt("parameters", v.parameters.map(Value::list))
            .set_opt("capabilities", v.capabilities.map(Value::list))
            .set_opt("stackPolicyBody", v.stack_policy_body)
            .set_opt("stackPolicyURL", v.stack_policy_url)
            .set_opt("notificationARNs", v.notification_arns.map(Value::list))
    }
}

/// The request for [DeleteStack][crate::client::CloudFormation::delete_stack].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteStackRequest {
    /// Required. The name or unique id of the stack.
    pub stack_name: Option<String>,
}

impl DeleteStackRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [stack_name][DeleteStackRequest::stack_name].
    pub fn set_stack_name<T: Into<String>>(mut self, v: T) -> Self {
        self.stack_name = Some(v.into());
        self
    }

    /// Sets or clears the value of [stack_name][DeleteStackRequest::stack_name].
    pub fn set_or_clear_stack_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.stack_name = v.map(Into::into);
        self
    }
}

impl From<DeleteStackRequest> for Request {
    fn from(v: DeleteStackRequest) -> Self {
        Request::new().set_opt("stackName", v.stack_name)
    }
}

/// The request for [DescribeStacks][crate::client::CloudFormation::describe_stacks].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeStacksRequest {
    /// Describes all stacks when unset.
    pub stack_name: Option<String>,

    /// The token returned by the previous page of results.
    pub next_token: Option<String>,
}

impl DescribeStacksRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [stack_name][DescribeStacksRequest::stack_name].
    pub fn set_stack_name<T: Into<String>>(mut self, v: T) -> Self {
        self.stack_name = Some(v.into());
        self
    }

    /// Sets or clears the value of [stack_name][DescribeStacksRequest::stack_name].
    pub fn set_or_clear_stack_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.stack_name = v.map(Into::into);
        self
    }

    /// Sets the value of [next_token][DescribeStacksRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_token][DescribeStacksRequest::next_token].
    pub fn set_or_clear_next_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_token = v.map(Into::into);
        self
    }
}

impl From<DescribeStacksRequest> for Request {
    fn from(v: DescribeStacksRequest) -> Self {
        Request::new()
            .set_opt("stackName", v.stack_name)
            .set_opt("nextToken", v.next_token)
    }
}
