//! Constructors for the elements the control layer builds on.

use crate::TagBuilder;

/// Macro for defining element constructor functions
macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name() -> TagBuilder {
			TagBuilder::new($tag)
		}
	};
}

define_element!(
	/// Creates a `<button>` builder.
	///
	/// ## Example
	///
	/// ```
	/// let mut button = grappelli_tags::button();
	/// button.set_inner_html("Go");
	/// assert_eq!(button.to_string(), "<button>Go</button>");
	/// ```
	button, "button"
);

define_element!(
	/// Creates a `<div>` builder.
	div, "div"
);

define_element!(
	/// Creates a `<span>` builder.
	span, "span"
);

define_element!(
	/// Creates an `<input>` builder. Void element; renders self-closed.
	input, "input"
);

define_element!(
	/// Creates a `<textarea>` builder.
	textarea, "textarea"
);

define_element!(
	/// Creates an `<a>` builder (hyperlink).
	a, "a"
);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn constructors_carry_their_tag() {
		assert_eq!(button().tag_name(), "button");
		assert_eq!(div().tag_name(), "div");
		assert_eq!(span().tag_name(), "span");
		assert_eq!(textarea().tag_name(), "textarea");
		assert_eq!(a().tag_name(), "a");
	}

	#[test]
	fn only_the_void_constructor_self_closes() {
		assert!(input().is_void());
		assert!(!button().is_void());
		assert_eq!(input().to_string(), "<input />");
	}
}
