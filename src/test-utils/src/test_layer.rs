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

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{Subscriber, field, span};
use tracing_subscriber::{Layer, layer::Context, prelude::*, registry::LookupSpan};

/// A span captured by [TestLayer], with its attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedSpan {
    pub id: span::Id,
    pub name: String,
    /// Attribute values, formatted as strings. Fields declared as
    /// [field::Empty] and never recorded are absent.
    pub attributes: BTreeMap<String, String>,
    /// The name of the parent span, if any.
    pub parent: Option<String>,
}

struct TestVisitor<'a>(&'a mut BTreeMap<String, String>);

impl field::Visit for TestVisitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_i64(&mut self, field: &field::Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &field::Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

type SpanLog = Arc<Mutex<Vec<CapturedSpan>>>;

fn lock(log: &SpanLog) -> MutexGuard<'_, Vec<CapturedSpan>> {
    log.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A tracing layer capturing the spans created in a test.
///
/// The layer is installed as the default subscriber for the current thread
/// only, tests running in parallel do not see each other's spans.
///
/// # Example
///
/// ```
/// use cloud_sdk_test_utils::test_layer::TestLayer;
///
/// let guard = TestLayer::initialize();
/// tracing::info_span!("my_operation", foo = "bar").in_scope(|| {
///     tracing::info!("doing something important");
/// });
///
/// let captured = TestLayer::capture(&guard);
/// assert_eq!(captured.len(), 1);
/// assert_eq!(captured[0].name, "my_operation");
/// assert_eq!(captured[0].attributes.get("foo").map(String::as_str), Some("bar"));
/// ```
#[derive(Clone, Default)]
pub struct TestLayer {
    log: SpanLog,
}

/// Keeps the [TestLayer] installed while in scope.
pub struct TestGuard {
    log: SpanLog,
    _default: tracing::subscriber::DefaultGuard,
}

impl TestLayer {
    /// Installs a new layer as the default subscriber for this thread.
    pub fn initialize() -> TestGuard {
        let layer = TestLayer::default();
        let log = layer.log.clone();
        let subscriber = tracing_subscriber::registry().with(layer);
        TestGuard {
            log,
            _default: tracing::subscriber::set_default(subscriber),
        }
    }

    /// Removes and returns the spans captured so far, in creation order.
    pub fn capture(guard: &TestGuard) -> Vec<CapturedSpan> {
        std::mem::take(&mut *lock(&guard.log))
    }
}

impl<S> Layer<S> for TestLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
        let mut attributes = BTreeMap::new();
        attrs.record(&mut TestVisitor(&mut attributes));
        let parent = ctx
            .span(id)
            .and_then(|s| s.parent())
            .map(|p| p.name().to_string());
        lock(&self.log).push(CapturedSpan {
            id: id.clone(),
            name: attrs.metadata().name().to_string(),
            attributes,
            parent,
        });
    }

    fn on_record(&self, id: &span::Id, values: &span::Record<'_>, _ctx: Context<'_, S>) {
        let mut spans = lock(&self.log);
        if let Some(span) = spans.iter_mut().rev().find(|s| s.id == *id) {
            values.record(&mut TestVisitor(&mut span.attributes));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::info_span;

    #[test]
    fn captures_nested_spans() {
        let guard = TestLayer::initialize();
        info_span!("outer").in_scope(|| {
            info_span!("inner").in_scope(|| tracing::info!("deep inside"));
        });
        let captured = TestLayer::capture(&guard);
        let names: Vec<_> = captured.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["outer", "inner"]);
        assert_eq!(captured[0].parent, None);
        assert_eq!(captured[1].parent.as_deref(), Some("outer"));
    }

    #[test]
    fn capture_drains() {
        let guard = TestLayer::initialize();
        let _span = info_span!("once");
        assert_eq!(TestLayer::capture(&guard).len(), 1);
        assert!(TestLayer::capture(&guard).is_empty());
    }

    #[test]
    fn guard_drops() {
        {
            let guard = TestLayer::initialize();
            let _span = info_span!("inside");
            assert_eq!(TestLayer::capture(&guard).len(), 1);
        }
        let guard = TestLayer::initialize();
        let _span = info_span!("outside").entered();
        let captured = TestLayer::capture(&guard);
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].name, "outside");
    }

    #[test]
    fn on_record() {
        let guard = TestLayer::initialize();
        let span = info_span!(
            "my_span",
            initial = "value",
            text = field::Empty,
            number = field::Empty,
            flag = field::Empty,
            listed = field::Empty,
            never = field::Empty,
        );
        span.record("text", "recorded");
        span.record("number", 123_i64);
        span.record("flag", true);
        span.record("listed", field::debug(&vec![1, 2, 3]));

        let captured = TestLayer::capture(&guard);
        assert_eq!(captured.len(), 1);
        let want: BTreeMap<String, String> = [
            ("initial", "value"),
            ("text", "recorded"),
            ("number", "123"),
            ("flag", "true"),
            ("listed", "[1, 2, 3]"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(captured[0].attributes, want);
    }

    #[test]
    fn visitor_types() {
        let guard = TestLayer::initialize();
        let _span = info_span!(
            "types",
            my_str = "hello",
            my_i64 = -123_i64,
            my_u64 = 456_u64,
            my_bool = false,
        );
        let captured = TestLayer::capture(&guard);
        let got = &captured[0].attributes;
        assert_eq!(got.get("my_str").map(String::as_str), Some("hello"));
        assert_eq!(got.get("my_i64").map(String::as_str), Some("-123"));
        assert_eq!(got.get("my_u64").map(String::as_str), Some("456"));
        assert_eq!(got.get("my_bool").map(String::as_str), Some("false"));
    }
}
