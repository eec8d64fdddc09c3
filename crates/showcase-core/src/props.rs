//! Props system for component properties.
//!
//! Props normally arrive as typed Rust values. When a page is rendered on
//! the server and picked up again by a host, the same props travel as a flat
//! map of string attributes: [`serialize_props`] produces that map and
//! [`Props::from_attrs`] reads it back.

use std::collections::HashMap;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// Trait for component properties that can be rebuilt from attributes.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use showcase_core::props::{Props, required_attr};
/// use showcase_core::Result;
///
/// struct ButtonProps {
///     label: String,
/// }
///
/// impl Props for ButtonProps {
///     fn from_attrs(attrs: &HashMap<String, String>) -> Result<Self> {
///         Ok(Self {
///             label: required_attr(attrs, "label")?,
///         })
///     }
/// }
///
/// let attrs = HashMap::from([("label".to_string(), "Save".to_string())]);
/// assert_eq!(ButtonProps::from_attrs(&attrs).unwrap().label, "Save");
/// ```
pub trait Props: Sized {
	/// Constructs props from serialized attributes.
	///
	/// # Errors
	///
	/// Returns [`Error::MissingProp`] for absent keys and
	/// [`Error::InvalidProp`] for values that do not parse.
	fn from_attrs(attrs: &HashMap<String, String>) -> Result<Self>;
}

/// Reads and parses a required attribute.
pub fn required_attr<T: FromStr>(attrs: &HashMap<String, String>, name: &str) -> Result<T> {
	let raw = attrs
		.get(name)
		.ok_or_else(|| Error::MissingProp(name.to_string()))?;
	raw.parse().map_err(|_| Error::InvalidProp {
		name: name.to_string(),
		value: raw.clone(),
	})
}

/// Serializes props to string attributes.
///
/// Strings are kept raw, booleans and numbers use their display form, nulls
/// are dropped and anything else is JSON-encoded.
pub fn serialize_props<P: Serialize>(props: &P) -> Result<HashMap<String, String>> {
	let json = serde_json::to_value(props)?;

	let mut attrs = HashMap::new();
	if let serde_json::Value::Object(map) = json {
		for (key, value) in map {
			let str_value = match value {
				serde_json::Value::String(s) => s,
				serde_json::Value::Bool(b) => b.to_string(),
				serde_json::Value::Number(n) => n.to_string(),
				serde_json::Value::Null => continue,
				other => other.to_string(),
			};
			attrs.insert(key, str_value);
		}
	}
	Ok(attrs)
}
