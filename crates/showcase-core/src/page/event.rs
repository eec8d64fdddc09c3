//! DOM event types understood by the page model.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Event types that can carry handlers on a [`PageElement`](super::PageElement).
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
	/// Mouse click
	Click,
	/// Mouse double click
	DblClick,
	/// Input value changed
	Input,
	/// Committed value change
	Change,
	/// Form submission
	Submit,
	/// Key pressed
	KeyDown,
	/// Key released
	KeyUp,
	/// Element gained focus
	Focus,
	/// Element lost focus
	Blur,
	/// Pointer entered the element
	MouseEnter,
	/// Pointer left the element
	MouseLeave,
}

impl EventType {
	/// Returns the DOM event name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Click => "click",
			Self::DblClick => "dblclick",
			Self::Input => "input",
			Self::Change => "change",
			Self::Submit => "submit",
			Self::KeyDown => "keydown",
			Self::KeyUp => "keyup",
			Self::Focus => "focus",
			Self::Blur => "blur",
			Self::MouseEnter => "mouseenter",
			Self::MouseLeave => "mouseleave",
		}
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for EventType {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"click" => Ok(Self::Click),
			"dblclick" => Ok(Self::DblClick),
			"input" => Ok(Self::Input),
			"change" => Ok(Self::Change),
			"submit" => Ok(Self::Submit),
			"keydown" => Ok(Self::KeyDown),
			"keyup" => Ok(Self::KeyUp),
			"focus" => Ok(Self::Focus),
			"blur" => Ok(Self::Blur),
			"mouseenter" => Ok(Self::MouseEnter),
			"mouseleave" => Ok(Self::MouseLeave),
			other => Err(Error::UnknownEventType(other.to_string())),
		}
	}
}

/// Native stand-in for a browser event.
///
/// Handlers take this argument so the same closure signature works whether
/// the page is rendered on the server or driven by a host engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticEvent {
	event_type: EventType,
}

impl SyntheticEvent {
	/// Creates an event of the given type.
	pub fn new(event_type: EventType) -> Self {
		Self { event_type }
	}

	/// Returns the event type.
	pub fn event_type(&self) -> EventType {
		self.event_type
	}

	/// No-op kept for signature parity with DOM events.
	pub fn prevent_default(&self) {}
}

impl Default for SyntheticEvent {
	fn default() -> Self {
		Self::new(EventType::Click)
	}
}
