//! Generic keyed list component.
//!
//! [`List`] renders a fixed `<h2>` header followed by one `<div>` row per
//! item, in input order. Every row is keyed by the item's id and forwards
//! clicks to the caller's callback with the exact item it was built from.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use showcase_components::{Keyed, List, ListProps};
//! use showcase_core::{Component, EventType};
//!
//! struct Row {
//!     id: i64,
//! }
//!
//! impl Keyed for Row {
//!     fn id(&self) -> i64 {
//!         self.id
//!     }
//! }
//!
//! let clicked = Arc::new(Mutex::new(Vec::new()));
//! let list = List::new(ListProps::new([Row { id: 1 }, Row { id: 2 }], {
//!     let clicked = Arc::clone(&clicked);
//!     move |row: Arc<Row>| clicked.lock().unwrap().push(row.id)
//! }));
//!
//! let page = list.render();
//! assert_eq!(
//!     page.render_to_string(),
//!     "<div><h2>List of items</h2><div>1</div><div>2</div></div>"
//! );
//!
//! let second = page.as_element().unwrap().child_elements().nth(2).unwrap();
//! second.dispatch(EventType::Click);
//! assert_eq!(*clicked.lock().unwrap(), vec![2]);
//! ```

use std::fmt;
use std::sync::Arc;

use showcase_core::{Callback, Component, EventType, IntoPage, Page, PageElement, event_handler};

/// Header text rendered above every list.
pub const LIST_HEADER: &str = "List of items";

/// Items that carry a numeric identifier.
///
/// The id becomes the row's structural key. Uniqueness is up to the caller;
/// duplicates render normally.
pub trait Keyed {
	/// Returns the item's identifier. Also the row text in a [`List`].
	fn id(&self) -> i64;
}

/// A plain value keyed by its position in the source sequence.
///
/// Lets lists of strings or other id-less values be rendered with
/// [`IndexedList`], which shows the value and keys the row by the index.
/// Inside a plain [`List`] the row shows the index, like any other id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indexed<S> {
	index: i64,
	value: S,
}

impl<S> Indexed<S> {
	/// Wraps every value with its zero-based position.
	pub fn enumerate(values: impl IntoIterator<Item = S>) -> Vec<Self> {
		values
			.into_iter()
			.zip(0_i64..)
			.map(|(value, index)| Self { index, value })
			.collect()
	}

	/// Returns the position this value was given.
	pub fn index(&self) -> i64 {
		self.index
	}

	/// Returns the wrapped value.
	pub fn value(&self) -> &S {
		&self.value
	}
}

impl<S> Keyed for Indexed<S> {
	fn id(&self) -> i64 {
		self.index
	}
}

/// Props for [`List`].
pub struct ListProps<T> {
	items: Vec<Arc<T>>,
	on_click: Callback<Arc<T>>,
}

impl<T> ListProps<T> {
	/// Builds props from owned items and a click handler.
	pub fn new<F>(items: impl IntoIterator<Item = T>, on_click: F) -> Self
	where
		F: Fn(Arc<T>) + Send + Sync + 'static,
	{
		Self {
			items: items.into_iter().map(Arc::new).collect(),
			on_click: Callback::new(on_click),
		}
	}

	/// Builds props from items the caller already shares.
	///
	/// Clicks hand back these exact `Arc`s.
	pub fn from_shared(items: Vec<Arc<T>>, on_click: Callback<Arc<T>>) -> Self {
		Self { items, on_click }
	}

	/// Returns the items in render order.
	pub fn items(&self) -> &[Arc<T>] {
		&self.items
	}
}

impl<T> Clone for ListProps<T> {
	fn clone(&self) -> Self {
		Self {
			items: self.items.clone(),
			on_click: self.on_click.clone(),
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for ListProps<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ListProps")
			.field("items", &self.items)
			.field("on_click", &self.on_click)
			.finish()
	}
}

fn row<T>(item: &Arc<T>, text: String, on_click: &Callback<Arc<T>>) -> PageElement
where
	T: Keyed + Send + Sync + 'static,
{
	let on_click = on_click.clone();
	let target = Arc::clone(item);
	PageElement::new("div")
		.key(item.id().to_string())
		.on(
			EventType::Click,
			event_handler(move |_| on_click.call(Arc::clone(&target))),
		)
		.child(text)
}

fn render_rows<T>(name: &'static str, props: &ListProps<T>, text: impl Fn(&T) -> String) -> Page
where
	T: Keyed + Send + Sync + 'static,
{
	tracing::trace!(component = name, items = props.items.len(), "render");
	PageElement::new("div")
		.child(PageElement::new("h2").child(LIST_HEADER))
		.children(
			props
				.items
				.iter()
				.map(|item| row(item, text(item.as_ref()), &props.on_click)),
		)
		.into_page()
}

/// Clickable list renderer, generic over the item type.
///
/// Each row shows the item's id.
#[derive(Debug, Clone)]
pub struct List<T> {
	props: ListProps<T>,
}

impl<T> List<T> {
	/// Creates the component from its props.
	pub fn new(props: ListProps<T>) -> Self {
		Self { props }
	}
}

impl<T> Component for List<T>
where
	T: Keyed + Send + Sync + 'static,
{
	fn render(&self) -> Page {
		render_rows(Self::name(), &self.props, |item| item.id().to_string())
	}

	fn name() -> &'static str {
		"List"
	}
}

impl<T> IntoPage for List<T>
where
	T: Keyed + Send + Sync + 'static,
{
	fn into_page(self) -> Page {
		self.render()
	}
}

/// Renders a list directly from props.
pub fn list<T>(props: ListProps<T>) -> Page
where
	T: Keyed + Send + Sync + 'static,
{
	List::new(props).render()
}

/// List of plain values keyed by position.
///
/// Same layout and click behaviour as [`List`], but each row shows the
/// wrapped value instead of its index.
#[derive(Debug, Clone)]
pub struct IndexedList<S> {
	props: ListProps<Indexed<S>>,
}

impl<S> IndexedList<S> {
	/// Creates the component from its props.
	pub fn new(props: ListProps<Indexed<S>>) -> Self {
		Self { props }
	}
}

impl<S> Component for IndexedList<S>
where
	S: fmt::Display + Send + Sync + 'static,
{
	fn render(&self) -> Page {
		render_rows(Self::name(), &self.props, |item| item.value.to_string())
	}

	fn name() -> &'static str {
		"IndexedList"
	}
}

impl<S> IntoPage for IndexedList<S>
where
	S: fmt::Display + Send + Sync + 'static,
{
	fn into_page(self) -> Page {
		self.render()
	}
}

/// Renders a list of position-keyed values directly from props.
pub fn list_indexed<S>(props: ListProps<Indexed<S>>) -> Page
where
	S: fmt::Display + Send + Sync + 'static,
{
	IndexedList::new(props).render()
}
