//! The tag builder: ordered accumulation and final serialization.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;

use crate::options::DataOptionValue;

/// Attribute carrying the merged class token list.
const CLASS_ATTR: &str = "class";

/// One entry of the consolidated `data-options` attribute.
#[derive(Debug, Clone)]
struct DataOption {
	value: String,
	quote: bool,
}

/// Accumulates attributes, inline styles, data-options and inner HTML for a
/// single element, and serializes them into one tag string.
///
/// Attribute order is insertion order; overwriting an existing attribute
/// keeps its original position, so a given call sequence always produces the
/// same output. Serialization emits explicit attributes first, then `style`
/// (from the style sub-mapping), then `data-options` (from the data-option
/// sub-mapping), then the inner HTML between the open and close tags. Void
/// elements (`br`, `input`, …) self-close and never render inner content.
///
/// Attribute values are escaped on output; inner HTML is emitted raw — it is
/// caller-supplied markup by contract. The style and data-option sub-mappings
/// are the canonical source for their attributes; callers use one path per
/// element.
///
/// ## Example
///
/// ```
/// use grappelli_tags::TagBuilder;
///
/// let mut tag = TagBuilder::new("div");
/// tag.add_attribute("id", "panel");
/// tag.add_style("width", "50px");
///
/// assert_eq!(tag.to_string(), r#"<div id="panel" style="width:50px"></div>"#);
/// ```
#[derive(Debug, Clone)]
pub struct TagBuilder {
	tag: Cow<'static, str>,
	attrs: IndexMap<String, String>,
	styles: IndexMap<String, String>,
	data_options: IndexMap<String, DataOption>,
	inner_html: String,
	is_void: bool,
}

impl TagBuilder {
	/// Creates an empty builder for the given element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: IndexMap::new(),
			styles: IndexMap::new(),
			data_options: IndexMap::new(),
			inner_html: String::new(),
			is_void,
		}
	}

	/// Returns the element name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns whether this element renders self-closed.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Reads the current value of an attribute.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.attrs.get(name).map(String::as_str)
	}

	/// Sets an attribute. An existing name is overwritten in place — set,
	/// never duplicated.
	pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.attrs.insert(name.into(), value.into());
	}

	/// Forces `value` to replace any existing value for `name`.
	///
	/// Observably the same as [`add_attribute`](Self::add_attribute) — the
	/// map never duplicates — but callers use it to state replacement
	/// intent, and `id` handling requires the forcing form.
	pub fn update_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.attrs.insert(name.into(), value.into());
	}

	/// Merges one declaration into the style sub-mapping.
	pub fn add_style(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.styles.insert(name.into(), value.into());
	}

	/// Merges whitespace-separated tokens into the class list. Union:
	/// existing tokens keep their order, duplicates are dropped.
	pub fn add_class(&mut self, value: impl AsRef<str>) {
		let existing = self.attrs.get(CLASS_ATTR).map(String::as_str).unwrap_or("");
		let merged = merge_tokens(existing, value.as_ref());
		self.attrs.insert(CLASS_ATTR.to_string(), merged);
	}

	/// Replaces the class list wholesale.
	pub fn update_class(&mut self, value: impl Into<String>) {
		self.attrs.insert(CLASS_ATTR.to_string(), value.into());
	}

	/// Sets the `data-` prefixed attribute for `name`.
	pub fn add_data_attribute(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
		self.attrs
			.insert(format!("data-{}", name.as_ref()), value.into());
	}

	/// Encodes one entry of the consolidated `data-options` attribute.
	///
	/// Accepts text, flag, number and optional shapes through
	/// [`DataOptionValue`]; an absent value is skipped entirely.
	pub fn add_data_option(&mut self, name: impl Into<String>, value: impl Into<DataOptionValue>) {
		self.insert_data_option(name.into(), value.into(), false);
	}

	/// Like [`add_data_option`](Self::add_data_option), but wraps the text
	/// value in quotes in the encoded attribute.
	pub fn add_quoted_data_option(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.insert_data_option(name.into(), DataOptionValue::Text(value.into()), true);
	}

	fn insert_data_option(&mut self, name: String, value: DataOptionValue, quote: bool) {
		let Some(encoded) = value.encode() else {
			return;
		};
		self.data_options.insert(
			name,
			DataOption {
				value: encoded,
				quote: quote && value.is_text(),
			},
		);
	}

	/// Fills the inner-HTML slot. Emitted raw between the open and close
	/// tags.
	pub fn set_inner_html(&mut self, html: impl Into<String>) {
		self.inner_html = html.into();
	}

	/// Returns the inner-HTML slot.
	pub fn inner_html(&self) -> &str {
		&self.inner_html
	}
}

impl fmt::Display for TagBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<{}", self.tag)?;

		for (name, value) in &self.attrs {
			write!(f, " {}=\"{}\"", name, escape_attr(value))?;
		}

		if !self.styles.is_empty() {
			f.write_str(" style=\"")?;
			for (i, (name, value)) in self.styles.iter().enumerate() {
				if i > 0 {
					f.write_str(";")?;
				}
				write!(f, "{}:{}", name, escape_attr(value))?;
			}
			f.write_str("\"")?;
		}

		if !self.data_options.is_empty() {
			f.write_str(" data-options=\"")?;
			for (i, (name, option)) in self.data_options.iter().enumerate() {
				if i > 0 {
					f.write_str(",")?;
				}
				if option.quote {
					write!(f, "{}:'{}'", name, escape_attr(&option.value))?;
				} else {
					write!(f, "{}:{}", name, escape_attr(&option.value))?;
				}
			}
			f.write_str("\"")?;
		}

		if self.is_void {
			f.write_str(" />")
		} else {
			write!(f, ">{}</{}>", self.inner_html, self.tag)
		}
	}
}

/// Token-union merge for the class attribute.
fn merge_tokens(existing: &str, added: &str) -> String {
	let mut tokens: Vec<&str> = existing.split_whitespace().collect();
	for token in added.split_whitespace() {
		if !tokens.contains(&token) {
			tokens.push(token);
		}
	}
	tokens.join(" ")
}

/// Escapes HTML special characters in attribute values.
fn escape_attr(value: &str) -> Cow<'_, str> {
	if !value.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(value);
	}
	let mut escaped = String::with_capacity(value.len() + 8);
	for c in value.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
