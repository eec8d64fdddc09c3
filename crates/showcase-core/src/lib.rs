//! # showcase-core
//!
//! Render description types and component plumbing shared by the
//! pages-showcase components.
//!
//! ## Overview
//!
//! A component turns its props into a [`Page`] tree. The tree can be
//! serialised for server-side rendering with [`Page::render_to_string`], and
//! interactions can be replayed against it with [`PageElement::dispatch`].
//!
//! ```
//! use showcase_core::page::{IntoPage, PageElement};
//!
//! let view = PageElement::new("div")
//!     .attr("class", "container")
//!     .child("Hello, World!")
//!     .into_page();
//!
//! assert_eq!(
//!     view.render_to_string(),
//!     "<div class=\"container\">Hello, World!</div>"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`page`]: the `Page` tree, events and HTML serialisation
//! - [`component`]: the `Component` trait
//! - [`callback`]: cloneable callbacks and event handler conversion
//! - [`props`]: props reconstruction from serialized attributes

pub mod callback;
pub mod component;
pub mod error;
pub mod page;
pub mod props;

pub use callback::{Callback, IntoEventHandler, event_handler, into_event_handler};
pub use component::Component;
pub use error::{Error, Result};
pub use page::{
	EventType, IntoPage, Page, PageElement, PageEventHandler, SyntheticEvent, warn_duplicate_keys,
};
pub use props::{Props, serialize_props};
