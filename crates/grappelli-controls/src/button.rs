//! The button control.

use grappelli_tags::{self as tags, TagBuilder};

use crate::control::{Control, ControlState};

/// Fluent operations shared by button-shaped controls.
///
/// Extends [`Control`]; both traits' methods chain on the same concrete
/// type, in either order.
pub trait ButtonControl: Control {
	/// Disables the button.
	///
	/// Idempotent: however many times it is called, exactly one
	/// `disabled="disabled"` attribute renders.
	fn disable(self) -> Self {
		self.attr("disabled", "disabled")
	}

	/// Sets the click handler reference — a function name or inline script,
	/// carried as opaque text. Nothing is validated or escaped here.
	fn on_click(self, handler: impl Into<String>) -> Self {
		self.attr("onClick", handler)
	}
}

/// A clickable button rendered as a `<button>` tag.
///
/// The construction-time text is seeded into the builder's inner-HTML slot
/// exactly once, inside the factory hook, before any fluent call can observe
/// the builder.
///
/// ## Example
///
/// ```
/// use grappelli_controls::{Button, ButtonControl, Control};
///
/// let html = Button::new("Go").disable().to_html();
/// assert_eq!(html, r#"<button disabled="disabled">Go</button>"#);
/// ```
#[derive(Debug)]
pub struct Button {
	state: ControlState,
	text: String,
}

impl Button {
	/// Creates a button with the given inner text (empty is fine).
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			state: ControlState::new(),
			text: text.into(),
		}
	}
}

impl Control for Button {
	fn state(&self) -> &ControlState {
		&self.state
	}

	fn state_mut(&mut self) -> &mut ControlState {
		&mut self.state
	}

	fn build_tag(&self) -> TagBuilder {
		let mut builder = tags::button();
		builder.set_inner_html(self.text.clone());
		builder
	}
}

impl ButtonControl for Button {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn text_is_seeded_into_the_builder() {
		let mut button = Button::new("Save");
		assert_eq!(button.builder_mut().inner_html(), "Save");
	}

	#[test]
	fn empty_text_is_allowed() {
		assert_eq!(Button::new("").to_html(), "<button></button>");
	}

	#[test]
	fn disable_is_idempotent() {
		let html = Button::new("Go").disable().disable().to_html();
		assert_eq!(html.matches(r#"disabled="disabled""#).count(), 1);
		assert_eq!(html, r#"<button disabled="disabled">Go</button>"#);
	}

	#[test]
	fn on_click_carries_the_handler_verbatim() {
		let mut button = Button::new("Go").on_click("handleGo(this)");
		assert_eq!(button.attr_value("onClick"), Some("handleGo(this)"));
	}

	#[test]
	fn base_and_button_calls_chain_in_either_order() {
		let html = Button::new("Go")
			.disable()
			.class("btn")
			.on_click("go()")
			.width(80)
			.to_html();
		assert_eq!(
			html,
			r#"<button disabled="disabled" class="btn" onClick="go()" style="width:80px">Go</button>"#
		);
	}
}
