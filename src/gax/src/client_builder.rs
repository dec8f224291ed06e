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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or check request
//! constraints before marshalling. The client libraries use a generic builder
//! type to provide such functionality.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use cloud_sdk_gax::client_builder::examples;
//! # use cloud_sdk_gax::client_builder::Result;
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder().build()?;
//! # Result::<()>::Ok(())
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use cloud_sdk_gax::client_builder::examples;
//! # use cloud_sdk_gax::client_builder::Result;
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("http://localhost:8000")
//!     .build()?;
//! # Result::<()>::Ok(())
//! ```

pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```
/// # use cloud_sdk_gax::client_builder::examples;
/// pub use examples::Client; // Placeholder for examples
/// match Client::builder().with_endpoint("not a valid endpoint").build() {
///     Ok(_) => { println!("success, how boring"); },
///     Err(e) if e.is_endpoint() => { println!("bad endpoint {e}"); },
///     Err(e) => { println!("some other error {e}"); },
/// }
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the configured endpoint is not a valid URI.
    pub fn is_endpoint(&self) -> bool {
        matches!(&self.0, ErrorKind::Endpoint(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn endpoint<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Endpoint(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("the endpoint is not a valid URI")]
    Endpoint(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// In the client libraries, clients are built using this type. The type is
/// parameterized by a factory that creates the client once the configuration
/// is complete.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F> {
    config: internal::ClientConfig,
    factory: F,
}

impl<F> ClientBuilder<F> {
    /// Creates a new client.
    pub fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C>,
    {
        self.factory.build(self.config)
    }

    /// Sets the endpoint placed in the request URI.
    ///
    /// ```
    /// # use cloud_sdk_gax::client_builder::examples;
    /// # use cloud_sdk_gax::client_builder::Result;
    /// pub use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_endpoint("https://vpce-123.example.com")
    ///     .build()?;
    /// # Result::<()>::Ok(())
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// Each call runs inside a `marshal` span. Applications must install a
    /// [tracing subscriber] to see the spans.
    ///
    /// [tracing subscriber]: https://docs.rs/tracing/latest/tracing/#in-executables
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Checks the documented length constraints of each request before
    /// marshalling it.
    ///
    /// The service always validates requests. With this option a request
    /// violating a constraint fails without being sent.
    pub fn with_constraint_validation(mut self) -> Self {
        self.config.validate_constraints = true;
        self
    }
}

/// Not part of the public API, subject to change without notice.
#[doc(hidden)]
pub mod internal {
    /// Client libraries implement this trait to create clients from a
    /// configuration.
    pub trait ClientFactory {
        type Client;
        fn build(self, config: ClientConfig) -> super::Result<Self::Client>;
    }

    pub fn new_builder<F, C>(factory: F) -> super::ClientBuilder<F>
    where
        F: ClientFactory<Client = C>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct ClientConfig {
        pub endpoint: Option<String>,
        pub tracing: bool,
        pub validate_constraints: bool,
    }
}

#[doc(hidden)]
pub mod examples {
    //! Helper types used in the rustdoc examples.

    use super::Result;
    use super::internal::ClientConfig;

    #[allow(dead_code)]
    pub struct Client(ClientConfig);
    impl Client {
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        fn new(config: ClientConfig) -> Result<Self> {
            match &config.endpoint {
                Some(e) if !e.contains("://") => Err(super::Error::endpoint(format!(
                    "missing scheme in {e}"
                ))),
                _ => Ok(Self(config)),
            }
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Client = super::Client;
            fn build(self, config: super::ClientConfig) -> super::Result<Self::Client> {
                Self::Client::new(config)
            }
        }
    }

    // We use the examples as scaffolding for the tests.
    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn build_default() -> anyhow::Result<()> {
            let client = Client::builder().build()?;
            assert_eq!(client.0, ClientConfig::default());
            Ok(())
        }

        #[test]
        fn endpoint() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_endpoint("http://example.com")
                .build()?;
            assert_eq!(client.0.endpoint.as_deref(), Some("http://example.com"));
            Ok(())
        }

        #[test]
        fn bad_endpoint() {
            let result = Client::builder().with_endpoint("example.com").build();
            assert!(
                matches!(&result, Err(e) if e.is_endpoint()),
                "{:?}",
                result.map(|c| c.0)
            );
        }

        #[test]
        fn tracing() -> anyhow::Result<()> {
            let client = Client::builder().with_tracing().build()?;
            assert!(client.0.tracing);
            assert!(!client.0.validate_constraints);
            Ok(())
        }

        #[test]
        fn constraint_validation() -> anyhow::Result<()> {
            let client = Client::builder().with_constraint_validation().build()?;
            assert!(client.0.validate_constraints);
            assert!(!client.0.tracing);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn error_endpoint() {
        let error = Error::endpoint("simulated");
        assert!(error.is_endpoint(), "{error:?}");
        assert!(error.to_string().contains("endpoint"), "{error}");
        let got = error.source().map(|e| e.to_string());
        assert_eq!(got.as_deref(), Some("simulated"));
    }
}
