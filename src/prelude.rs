//! Common imports for building and rendering showcase components.

pub use showcase_core::{
	Callback, Component, EventType, IntoPage, Page, PageElement, SyntheticEvent,
};

#[cfg(feature = "greet")]
pub use showcase_components::{Greet, GreetProps};
#[cfg(feature = "list")]
pub use showcase_components::{Indexed, IndexedList, Keyed, List, ListProps};
