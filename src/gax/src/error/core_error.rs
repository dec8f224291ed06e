// Copyright 2024 Google LLC
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

use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// Marshalling a request fails for a small number of reasons: the application
/// did not provide a request at all, or the request could not be converted to
/// its wire representation. The latter includes missing required fields,
/// fields holding the wrong kind of value, and encoding problems.
///
/// This type offers a series of predicates to determine the error kind.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information, the source is always the original cause.
///
/// # Example
/// ```
/// use cloud_sdk_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_invalid_argument() => { println!("no request {e}"); },
///     Err(e) if e.is_serialization() => { println!("bad request {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::ser("missing required field"))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error representing a missing or unusable request argument.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use cloud_sdk_gax::error::Error;
    /// let error = Error::invalid_argument("the request is missing");
    /// assert!(error.is_invalid_argument());
    /// assert!(error.source().is_some());
    /// ```
    pub fn invalid_argument<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            source: Some(source.into()),
        }
    }

    /// The application did not provide a request to marshal.
    ///
    /// This is always a client-side generated error, generated before any
    /// work is done. No output buffer is allocated and no partial state is
    /// created.
    ///
    /// # Troubleshooting
    ///
    /// Verify the code path that produces the request. Most often the request
    /// was expected from a batch or a queue that turned out to be empty.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument)
    }

    /// Creates an error representing a serialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use cloud_sdk_gax::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is handed to the transport. This error is never transient: the
    /// serialization is deterministic (modulo out of memory conditions), and
    /// will fail on future attempts with the same input data. The library
    /// never retries these errors.
    ///
    /// # Troubleshooting
    ///
    /// The most common causes are a missing required field, or a field set to
    /// the wrong kind of value, e.g., a list where the operation expects a
    /// map. In both cases the [source][std::error::Error::source] is a
    /// [ShapeError][crate::error::shape::ShapeError] naming the field.
    ///
    /// When the request is assembled with constraint validation enabled, a
    /// field whose length is outside the documented range also produces this
    /// error.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use cloud_sdk_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// A wire document could not be decoded.
    ///
    /// # Troubleshooting
    ///
    /// The document is not valid JSON, or it does not match the shape used to
    /// decode it. Verify the document was produced for the same operation.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::InvalidArgument, Some(e)) => {
                write!(f, "invalid argument passed to marshal: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the document {e}")
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

#[derive(Debug)]
enum ErrorKind {
    InvalidArgument,
    Serialization,
    Deserialization,
}
