//! Value shapes accepted by the consolidated `data-options` attribute.

/// A single `data-options` value.
///
/// Collapses the closed set of accepted shapes — text, flag, number, absent —
/// into one type; the `From` conversions cover what callers actually pass, so
/// `Option` arguments flow straight through without unwrapping at the call
/// site. An absent value produces no entry at all.
///
/// ## Example
///
/// ```
/// use grappelli_tags::DataOptionValue;
///
/// assert_eq!(DataOptionValue::from(true), DataOptionValue::Flag(true));
/// assert_eq!(DataOptionValue::from(None::<i32>), DataOptionValue::Absent);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOptionValue {
	/// Free-form text; the only shape the quote flag applies to.
	Text(String),
	/// Encoded as the literals `true` / `false`.
	Flag(bool),
	/// Encoded in decimal.
	Number(i64),
	/// Skipped entirely; no entry is emitted.
	Absent,
}

impl DataOptionValue {
	/// Encoded representation, or `None` when the value is absent.
	pub(crate) fn encode(&self) -> Option<String> {
		match self {
			DataOptionValue::Text(text) => Some(text.clone()),
			DataOptionValue::Flag(flag) => Some(flag.to_string()),
			DataOptionValue::Number(number) => Some(number.to_string()),
			DataOptionValue::Absent => None,
		}
	}

	/// Whether the quote flag applies to this value.
	pub(crate) fn is_text(&self) -> bool {
		matches!(self, DataOptionValue::Text(_))
	}
}

impl From<&str> for DataOptionValue {
	fn from(value: &str) -> Self {
		DataOptionValue::Text(value.to_string())
	}
}

impl From<String> for DataOptionValue {
	fn from(value: String) -> Self {
		DataOptionValue::Text(value)
	}
}

impl From<bool> for DataOptionValue {
	fn from(value: bool) -> Self {
		DataOptionValue::Flag(value)
	}
}

impl From<i32> for DataOptionValue {
	fn from(value: i32) -> Self {
		DataOptionValue::Number(i64::from(value))
	}
}

impl From<i64> for DataOptionValue {
	fn from(value: i64) -> Self {
		DataOptionValue::Number(value)
	}
}

impl<T> From<Option<T>> for DataOptionValue
where
	T: Into<DataOptionValue>,
{
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => value.into(),
			None => DataOptionValue::Absent,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn text_encodes_verbatim() {
		assert_eq!(
			DataOptionValue::from("Save").encode(),
			Some("Save".to_string())
		);
	}

	#[test]
	fn flags_encode_as_literals() {
		assert_eq!(DataOptionValue::from(true).encode(), Some("true".to_string()));
		assert_eq!(
			DataOptionValue::from(false).encode(),
			Some("false".to_string())
		);
	}

	#[test]
	fn numbers_encode_in_decimal() {
		assert_eq!(DataOptionValue::from(100).encode(), Some("100".to_string()));
		assert_eq!(DataOptionValue::from(-3).encode(), Some("-3".to_string()));
	}

	#[test]
	fn absent_encodes_to_nothing() {
		assert_eq!(DataOptionValue::Absent.encode(), None);
		assert_eq!(DataOptionValue::from(None::<bool>).encode(), None);
	}

	#[test]
	fn options_unwrap_through_from() {
		assert_eq!(
			DataOptionValue::from(Some(7)),
			DataOptionValue::Number(7)
		);
		assert_eq!(
			DataOptionValue::from(Some(true)),
			DataOptionValue::Flag(true)
		);
	}

	#[test]
	fn quote_flag_applies_to_text_only() {
		assert!(DataOptionValue::from("x").is_text());
		assert!(!DataOptionValue::from(true).is_text());
		assert!(!DataOptionValue::from(1).is_text());
	}
}
