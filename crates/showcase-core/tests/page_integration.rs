//! Page model integration tests
//!
//! Covers the host-facing surface: HTML serialisation, event dispatch
//! through callbacks, props attribute round trips and duplicate-key
//! diagnostics.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rstest::*;
use showcase_core::props::required_attr;
use showcase_core::{
	Callback, Component, EventType, IntoPage, Page, PageElement, Props, Result, SyntheticEvent,
	into_event_handler, serialize_props, warn_duplicate_keys,
};
use tracing_subscriber::layer::SubscriberExt as _;

// ============================================================================
// Test Components
// ============================================================================

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CounterProps {
	label: String,
	start_at: i32,
}

impl Props for CounterProps {
	fn from_attrs(attrs: &HashMap<String, String>) -> Result<Self> {
		Ok(Self {
			label: required_attr(attrs, "label")?,
			start_at: required_attr(attrs, "startAt")?,
		})
	}
}

struct Counter {
	props: CounterProps,
	on_press: Callback,
}

impl Component for Counter {
	fn render(&self) -> Page {
		PageElement::new("button")
			.attr("type", "button")
			.on(EventType::Click, into_event_handler(self.on_press.clone()))
			.child(format!("{} {}", self.props.label, self.props.start_at))
			.into_page()
	}

	fn name() -> &'static str {
		"Counter"
	}
}

/// A tracing layer that captures event messages
struct LogCapture {
	logs: Arc<Mutex<Vec<String>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
		struct MessageVisitor(String);

		impl tracing::field::Visit for MessageVisitor {
			fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
				if field.name() == "message" {
					self.0 = format!("{:?}", value);
				}
			}
		}

		if *event.metadata().level() == tracing::Level::WARN {
			let mut visitor = MessageVisitor(String::new());
			event.record(&mut visitor);
			self.logs.lock().unwrap().push(visitor.0);
		}
	}
}

// ============================================================================
// Tests
// ============================================================================

#[rstest]
fn test_component_dispatch_reaches_callback() {
	let presses = Arc::new(Mutex::new(0));
	let counter = Counter {
		props: CounterProps {
			label: "Count".into(),
			start_at: 0,
		},
		on_press: Callback::new({
			let presses = Arc::clone(&presses);
			move |_: SyntheticEvent| *presses.lock().unwrap() += 1
		}),
	};

	let page = counter.render();
	assert_eq!(
		page.render_to_string(),
		"<button type=\"button\">Count 0</button>"
	);

	let button = page.as_element().unwrap();
	assert_eq!(button.dispatch(EventType::Click), 1);
	assert_eq!(*presses.lock().unwrap(), 1);
}

#[rstest]
fn test_props_attribute_round_trip() {
	let attrs = serialize_props(&CounterProps {
		label: "Likes".into(),
		start_at: 12,
	})
	.unwrap();
	let restored = CounterProps::from_attrs(&attrs).unwrap();

	assert_eq!(restored.label, "Likes");
	assert_eq!(restored.start_at, 12);
}

#[rstest]
fn test_warn_duplicate_keys_logs_each_duplicate() {
	let logs = Arc::new(Mutex::new(Vec::new()));
	let subscriber = tracing_subscriber::registry().with(LogCapture {
		logs: Arc::clone(&logs),
	});

	let page = PageElement::new("div")
		.child(PageElement::new("div").key("1"))
		.child(PageElement::new("div").key("1"))
		.child(PageElement::new("div").key("2"))
		.child(PageElement::new("div").key("2"))
		.into_page();

	let found = tracing::subscriber::with_default(subscriber, || warn_duplicate_keys(&page));

	assert_eq!(found, 2);
	let logs = logs.lock().unwrap();
	assert_eq!(logs.len(), 2);
	assert!(
		logs.iter()
			.all(|msg| msg.contains("duplicate structural key"))
	);
}

#[rstest]
fn test_unique_keys_log_nothing() {
	let logs = Arc::new(Mutex::new(Vec::new()));
	let subscriber = tracing_subscriber::registry().with(LogCapture {
		logs: Arc::clone(&logs),
	});

	let page = PageElement::new("ul")
		.children((0..5).map(|i| PageElement::new("li").key(i.to_string())))
		.into_page();

	let found = tracing::subscriber::with_default(subscriber, || warn_duplicate_keys(&page));

	assert_eq!(found, 0);
	assert!(logs.lock().unwrap().is_empty());
}
