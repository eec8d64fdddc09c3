//! Error types for showcase-core

use thiserror::Error;

/// Error type for page and props operations
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
	/// Event name that does not map to an [`EventType`](crate::page::EventType)
	#[error("Unknown event type: {0}")]
	UnknownEventType(String),

	/// Property present but not parseable into its declared type
	#[error("Invalid component property `{name}`: {value:?}")]
	InvalidProp {
		/// Property name
		name: String,
		/// Raw attribute value
		value: String,
	},

	/// Required property absent from the attribute map
	#[error("Missing required property: {0}")]
	MissingProp(String),

	/// Props could not be converted to JSON
	#[error("Failed to serialize props: {0}")]
	Serialize(#[from] serde_json::Error),
}

/// Result type for showcase-core operations
pub type Result<T> = std::result::Result<T, Error>;
