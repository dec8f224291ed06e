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

pub mod cloud_formation {
    use crate::client::CloudFormation;
    use gaxi::http::JsonClient;
    use gaxi::options::ClientConfig;

    /// A builder for [CloudFormation].
    ///
    /// ```
    /// # use cloud_sdk_cloudformation::*;
    /// # use builder::cloud_formation::ClientBuilder;
    /// # use client::CloudFormation;
    /// # fn sample() -> gax::client_builder::Result<()> {
    /// let builder: ClientBuilder = CloudFormation::builder();
    /// let client = builder
    ///     .with_constraint_validation()
    ///     .build()?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::*;

        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = CloudFormation;
            fn build(self, config: ClientConfig) -> gax::client_builder::Result<Self::Client> {
                let inner = JsonClient::new(
                    config,
                    &crate::shapes::SERVICE,
                    &crate::info::INSTRUMENTATION,
                    &crate::info::API_CLIENT,
                )?;
                Ok(CloudFormation::new(inner))
            }
        }
    }
}
