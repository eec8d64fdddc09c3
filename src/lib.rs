//! # pages-showcase
//!
//! Two display components on a server-renderable page model:
//!
//! - **Greet** renders a name, a message count and a login flag back to back
//! - **List** renders a header and one clickable, keyed row per item
//!
//! ## Feature Flags
//!
//! - `greet` - the greeting renderer
//! - `list` - the generic keyed list renderer and its position-keyed variant
//! - `full` (default) - both components
//!
//! ## Quick Example
//!
//! ```
//! use pages_showcase::prelude::*;
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

pub mod prelude;

/// Page model, events, callbacks and props plumbing.
pub mod page {
	pub use showcase_core::callback::{
		Callback, IntoEventHandler, event_handler, into_event_handler,
	};
	pub use showcase_core::page::*;
	pub use showcase_core::props::{Props, required_attr, serialize_props};
	pub use showcase_core::{Component, Error, Result};
}

#[cfg(feature = "greet")]
pub use showcase_components::greet;
#[cfg(feature = "list")]
pub use showcase_components::list;

#[cfg(feature = "greet")]
pub use showcase_components::{Greet, GreetProps};
#[cfg(feature = "list")]
pub use showcase_components::{Indexed, IndexedList, Keyed, LIST_HEADER, List, ListProps};
