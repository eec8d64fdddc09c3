//! Callback types and event handler conversion traits.
//!
//! - **Callback<Args, Ret>**: a cloneable wrapper for caller-supplied handlers
//! - **IntoEventHandler**: converts closures, Callbacks and handlers to
//!   [`PageEventHandler`]

use std::sync::Arc;

use crate::page::{PageEventHandler, SyntheticEvent};

/// A type-safe, cloneable callback wrapper.
///
/// `Callback` wraps a function in an `Arc`, so cloning it into every
/// rendered element shares one underlying function.
///
/// ## Example
///
/// ```
/// use showcase_core::Callback;
///
/// let double = Callback::new(|x: i32| x * 2);
/// let copy = double.clone();
/// assert_eq!(copy.call(21), 42);
/// ```
pub struct Callback<Args = SyntheticEvent, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

/// Trait for converting various handler types to [`PageEventHandler`].
pub trait IntoEventHandler {
	/// Converts self into a [`PageEventHandler`].
	fn into_event_handler(self) -> PageEventHandler;
}

impl<F> IntoEventHandler for F
where
	F: Fn(SyntheticEvent) + Send + Sync + 'static,
{
	fn into_event_handler(self) -> PageEventHandler {
		Arc::new(self)
	}
}

impl IntoEventHandler for Callback<SyntheticEvent, ()> {
	fn into_event_handler(self) -> PageEventHandler {
		self.inner
	}
}

impl IntoEventHandler for PageEventHandler {
	fn into_event_handler(self) -> PageEventHandler {
		self
	}
}

/// Converts any supported handler into a [`PageEventHandler`].
pub fn into_event_handler<H: IntoEventHandler>(handler: H) -> PageEventHandler {
	handler.into_event_handler()
}

/// Event handler helper with a concrete argument type, so closures need no
/// parameter annotation.
pub fn event_handler(f: impl Fn(SyntheticEvent) + Send + Sync + 'static) -> PageEventHandler {
	Arc::new(f)
}
