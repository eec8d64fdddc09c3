//! Display components built on the showcase page model.
//!
//! - [`Greet`]: renders a name, a message count and a login flag side by side
//! - [`List`]: renders a header and one clickable row per keyed item
//! - [`IndexedList`]: the same layout for plain values keyed by position
//!
//! Each component sits behind a feature of the same name (`greet`, `list`),
//! both on by default.
//!
//! Both components are pure: rendering the same props twice yields the same
//! [`Page`](showcase_core::Page), and neither keeps state between renders.

#[cfg(feature = "greet")]
pub mod greet;
#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "greet")]
pub use greet::{Greet, GreetProps, greet};
#[cfg(feature = "list")]
pub use list::{Indexed, IndexedList, Keyed, LIST_HEADER, List, ListProps, list, list_indexed};
