//! Component trait definition.

use crate::page::Page;

/// Trait for reusable UI components.
///
/// A component owns its props and turns them into a [`Page`] on every
/// render. Rendering must not mutate the component.
///
/// # Example
///
/// ```
/// use showcase_core::{Component, IntoPage, Page, PageElement};
///
/// struct Badge {
///     label: String,
/// }
///
/// impl Component for Badge {
///     fn render(&self) -> Page {
///         PageElement::new("span")
///             .attr("class", "badge")
///             .child(self.label.clone())
///             .into_page()
///     }
///
///     fn name() -> &'static str {
///         "Badge"
///     }
/// }
///
/// let badge = Badge { label: "new".into() };
/// assert_eq!(badge.render().render_to_string(), "<span class=\"badge\">new</span>");
/// ```
pub trait Component: 'static {
	/// Renders the component to a Page.
	fn render(&self) -> Page;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}
