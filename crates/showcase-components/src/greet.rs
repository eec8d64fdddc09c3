//! Greeting component.
//!
//! Renders the three greeting fields back to back inside a single `<div>`,
//! without labels or separators:
//!
//! ```
//! use showcase_components::{Greet, GreetProps};
//! use showcase_core::Component;
//!
//! let page = Greet::new(GreetProps {
//!     name: "Ann".into(),
//!     message_count: 3,
//!     is_logged_in: true,
//! })
//! .render();
//!
//! assert_eq!(page.render_to_string(), "<div>Ann3true</div>");
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use showcase_core::props::{Props, required_attr};
use showcase_core::{Component, IntoPage, Page, PageElement, Result};

/// Props for [`Greet`].
///
/// Serialized field names follow the host framework's prop names
/// (`name`, `messageCount`, `isLoggedIn`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetProps {
	/// Display name
	pub name: String,
	/// Number of messages waiting for the user
	pub message_count: i64,
	/// Whether the user is signed in
	pub is_logged_in: bool,
}

impl Props for GreetProps {
	fn from_attrs(attrs: &HashMap<String, String>) -> Result<Self> {
		Ok(Self {
			name: required_attr(attrs, "name")?,
			message_count: required_attr(attrs, "messageCount")?,
			is_logged_in: required_attr(attrs, "isLoggedIn")?,
		})
	}
}

/// Greeting renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greet {
	props: GreetProps,
}

impl Greet {
	/// Creates the component from its props.
	pub fn new(props: GreetProps) -> Self {
		Self { props }
	}
}

impl Component for Greet {
	fn render(&self) -> Page {
		tracing::trace!(component = Self::name(), "render");
		PageElement::new("div")
			.child(self.props.name.clone())
			.child(self.props.message_count.to_string())
			.child(self.props.is_logged_in.to_string())
			.into_page()
	}

	fn name() -> &'static str {
		"Greet"
	}
}

impl IntoPage for Greet {
	fn into_page(self) -> Page {
		self.render()
	}
}

/// Renders a greeting directly from props.
pub fn greet(props: GreetProps) -> Page {
	Greet::new(props).render()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use showcase_core::Error;

	#[fixture]
	fn ann() -> GreetProps {
		GreetProps {
			name: "Ann".into(),
			message_count: 3,
			is_logged_in: true,
		}
	}

	#[rstest]
	fn test_greet_concatenates_fields(ann: GreetProps) {
		let page = greet(ann);
		assert_eq!(page.render_to_string(), "<div>Ann3true</div>");
		assert_eq!(page.text_content(), "Ann3true");
	}

	#[rstest]
	fn test_greet_single_container_with_three_text_nodes(ann: GreetProps) {
		let page = Greet::new(ann).render();
		let root = page.as_element().unwrap();
		assert_eq!(root.tag_name(), "div");
		assert!(root.attrs().is_empty());
		assert_eq!(root.child_views().len(), 3);
		assert!(root.child_views().iter().all(|c| matches!(c, Page::Text(_))));
		assert!(root.event_handlers().is_empty());
	}

	#[rstest]
	#[case("Bob", 0, false, "Bob0false")]
	#[case("", -1, true, "-1true")]
	#[case("Zoë", 1_000, false, "Zoë1000false")]
	fn test_greet_text(
		#[case] name: &str,
		#[case] message_count: i64,
		#[case] is_logged_in: bool,
		#[case] expected: &str,
	) {
		let page = greet(GreetProps {
			name: name.into(),
			message_count,
			is_logged_in,
		});
		assert_eq!(page.text_content(), expected);
	}

	#[rstest]
	fn test_greet_escapes_name() {
		let page = greet(GreetProps {
			name: "<b>Ann</b>".into(),
			message_count: 1,
			is_logged_in: false,
		});
		assert_eq!(
			page.render_to_string(),
			"<div>&lt;b&gt;Ann&lt;/b&gt;1false</div>"
		);
		assert_eq!(page.text_content(), "<b>Ann</b>1false");
	}

	#[rstest]
	fn test_greet_component_name() {
		assert_eq!(Greet::name(), "Greet");
	}

	#[rstest]
	fn test_greet_into_page(ann: GreetProps) {
		let via_into = Greet::new(ann.clone()).into_page().render_to_string();
		assert_eq!(via_into, greet(ann).render_to_string());
	}

	#[rstest]
	fn test_greet_props_from_attrs(ann: GreetProps) {
		let attrs = showcase_core::serialize_props(&ann).unwrap();
		assert_eq!(attrs.get("messageCount").map(String::as_str), Some("3"));
		assert_eq!(attrs.get("isLoggedIn").map(String::as_str), Some("true"));
		assert_eq!(GreetProps::from_attrs(&attrs).unwrap(), ann);
	}

	#[rstest]
	fn test_greet_props_missing_attr() {
		let attrs = HashMap::from([
			("name".to_string(), "Ann".to_string()),
			("messageCount".to_string(), "3".to_string()),
		]);
		let err = GreetProps::from_attrs(&attrs).unwrap_err();
		assert!(matches!(err, Error::MissingProp(name) if name == "isLoggedIn"));
	}

	#[rstest]
	#[case("messageCount", "three")]
	#[case("isLoggedIn", "yes")]
	fn test_greet_props_invalid_attr(#[case] key: &str, #[case] bad: &str) {
		let mut attrs = HashMap::from([
			("name".to_string(), "Ann".to_string()),
			("messageCount".to_string(), "3".to_string()),
			("isLoggedIn".to_string(), "true".to_string()),
		]);
		attrs.insert(key.to_string(), bad.to_string());
		let err = GreetProps::from_attrs(&attrs).unwrap_err();
		assert!(matches!(err, Error::InvalidProp { name, .. } if name == key));
	}
}
