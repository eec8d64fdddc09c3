//! Page types for component rendering.
//!
//! The [`Page`] enum is the render description every component produces. It
//! can represent DOM elements, text nodes, fragments, or nothing at all.
//!
//! ## Example
//!
//! ```
//! use showcase_core::page::{EventType, IntoPage, PageElement, SyntheticEvent};
//! use std::sync::Arc;
//!
//! let view = PageElement::new("div")
//!     .attr("class", "container")
//!     .child("Hello, World!")
//!     .on(EventType::Click, Arc::new(|_: SyntheticEvent| {}))
//!     .into_page();
//!
//! assert_eq!(view.text_content(), "Hello, World!");
//! ```

pub mod event;
mod util;

pub use event::{EventType, SyntheticEvent};
pub use util::{BOOLEAN_ATTRS, html_escape, is_boolean_attr_truthy};

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;

/// Type alias for event handler functions.
pub type PageEventHandler = Arc<dyn Fn(SyntheticEvent) + Send + Sync + 'static>;

/// A unified representation of renderable content.
#[derive(Debug)]
pub enum Page {
	/// A DOM element.
	Element(PageElement),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple views (no wrapper element).
	Fragment(Vec<Page>),
	/// An empty view (renders nothing).
	Empty,
}

/// Represents a DOM element in the view tree.
pub struct PageElement {
	/// The tag name (e.g., "div", "span").
	tag: Cow<'static, str>,
	/// HTML attributes.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child views.
	children: Vec<Page>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
	/// Structural key used by a host engine to match elements across renders.
	key: Option<Cow<'static, str>>,
	/// Event handlers attached to this element.
	event_handlers: Vec<(EventType, PageEventHandler)>,
}

impl std::fmt::Debug for PageElement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PageElement")
			.field("tag", &self.tag)
			.field("attrs", &self.attrs)
			.field("children", &self.children)
			.field("is_void", &self.is_void)
			.field("key", &self.key)
			.field(
				"event_handlers",
				&self
					.event_handlers
					.iter()
					.map(|(event_type, _)| *event_type)
					.collect::<Vec<_>>(),
			)
			.finish()
	}
}

impl PageElement {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
			key: None,
			event_handlers: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a boolean attribute.
	///
	/// When true, the attribute is added with its own name as value
	/// (e.g. `disabled="disabled"`). When false, nothing is added.
	pub fn bool_attr(self, name: impl Into<Cow<'static, str>>, value: bool) -> Self {
		if value {
			let name = name.into();
			self.attr(name.clone(), name)
		} else {
			self
		}
	}

	/// Sets the structural key.
	///
	/// Keys are never serialised to HTML.
	pub fn key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
		self.key = Some(key.into());
		self
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_page()));
		self
	}

	/// Adds an event handler.
	pub fn on(mut self, event_type: EventType, handler: PageEventHandler) -> Self {
		self.event_handlers.push((event_type, handler));
		self
	}

	/// Adds an event listener by DOM event name.
	///
	/// # Errors
	///
	/// Returns [`Error::UnknownEventType`](crate::Error::UnknownEventType) if
	/// the name is not a recognised event.
	pub fn listener<F>(self, event_name: &str, handler: F) -> Result<Self>
	where
		F: Fn(SyntheticEvent) + Send + Sync + 'static,
	{
		let event_type = event_name.parse::<EventType>()?;
		Ok(self.on(event_type, Arc::new(handler)))
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the first value of the named attribute.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[Page] {
		&self.children
	}

	/// Iterates over the direct children that are elements.
	pub fn child_elements(&self) -> impl Iterator<Item = &PageElement> {
		self.children.iter().filter_map(Page::as_element)
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns the structural key, if any.
	pub fn key_value(&self) -> Option<&str> {
		self.key.as_deref()
	}

	/// Returns the event handlers.
	pub fn event_handlers(&self) -> &[(EventType, PageEventHandler)] {
		&self.event_handlers
	}

	/// Invokes every handler registered for `event_type`.
	///
	/// Returns the number of handlers that ran.
	pub fn dispatch(&self, event_type: EventType) -> usize {
		let mut invoked = 0;
		for (registered, handler) in &self.event_handlers {
			if *registered == event_type {
				handler(SyntheticEvent::new(event_type));
				invoked += 1;
			}
		}
		tracing::trace!(
			tag = %self.tag,
			key = self.key.as_deref(),
			event = %event_type,
			invoked,
			"dispatched event"
		);
		invoked
	}

	/// Returns structural keys that occur more than once among the direct
	/// children, in first-duplicate order.
	pub fn duplicate_keys(&self) -> Vec<&str> {
		let mut seen: HashMap<&str, usize> = HashMap::new();
		let mut duplicates = Vec::new();
		for key in self.child_elements().filter_map(PageElement::key_value) {
			let count = seen.entry(key).or_insert(0);
			*count += 1;
			if *count == 2 {
				duplicates.push(key);
			}
		}
		duplicates
	}
}

impl Page {
	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_page()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns the root element, if this page is one.
	pub fn as_element(&self) -> Option<&PageElement> {
		match self {
			Page::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Returns the concatenated text of every text node in the subtree.
	pub fn text_content(&self) -> String {
		let mut output = String::new();
		self.text_content_inner(&mut output);
		output
	}

	fn text_content_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				for child in el.child_views() {
					child.text_content_inner(output);
				}
			}
			Page::Text(text) => output.push_str(text),
			Page::Fragment(children) => {
				for child in children {
					child.text_content_inner(output);
				}
			}
			Page::Empty => {}
		}
	}

	/// Renders the view to an HTML string.
	///
	/// Text and attribute values are escaped. Structural keys and event
	/// handlers are not part of the output.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					let name_str: &str = name.as_ref();
					if BOOLEAN_ATTRS.contains(&name_str) && !is_boolean_attr_truthy(value) {
						continue;
					}

					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Page::Text(text) => {
				output.push_str(&html_escape(text));
			}
			Page::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			Page::Empty => {}
		}
	}
}

/// Logs a warning for every element in the tree whose children share a
/// structural key, and returns the number of duplicated keys found.
///
/// Duplicates are legal; a host engine only loses the ability to match the
/// affected children across renders.
pub fn warn_duplicate_keys(page: &Page) -> usize {
	match page {
		Page::Element(el) => {
			let duplicates = el.duplicate_keys();
			for key in &duplicates {
				tracing::warn!(tag = %el.tag_name(), key, "duplicate structural key among siblings");
			}
			duplicates.len()
				+ el
					.child_views()
					.iter()
					.map(warn_duplicate_keys)
					.sum::<usize>()
		}
		Page::Fragment(children) => children.iter().map(warn_duplicate_keys).sum(),
		Page::Text(_) | Page::Empty => 0,
	}
}

/// Trait for types that can be converted into a Page.
pub trait IntoPage {
	/// Converts self into a Page.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self.clone()))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(v) => v.into_page(),
			None => Page::Empty,
		}
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::Fragment(self.into_iter().map(|v| v.into_page()).collect())
	}
}

impl IntoPage for () {
	fn into_page(self) -> Page {
		Page::Empty
	}
}

impl<A: IntoPage, B: IntoPage> IntoPage for (A, B) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![self.0.into_page(), self.1.into_page()])
	}
}

impl<A: IntoPage, B: IntoPage, C: IntoPage> IntoPage for (A, B, C) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![
			self.0.into_page(),
			self.1.into_page(),
			self.2.into_page(),
		])
	}
}
