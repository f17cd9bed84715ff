//! The control base: fluent mutation over an owned tag builder, plus the
//! three-phase render pipeline.

use grappelli_tags::{DataOptionValue, TagBuilder};

use crate::unit::{Spacing, Unit};

/// Tracing target of the render-trace events emitted by the default
/// [`Control::after_render`]. Filter on it subscriber-side to capture or
/// silence rendered fragments.
pub const TRACE_TARGET: &str = "grappelli::controls";

/// State every concrete control embeds: the stored identifier and the
/// lazily-created tag builder.
///
/// The builder slot starts empty and is filled at most once, on first
/// access, with whatever the control's factory hook produces; it is never
/// replaced afterward.
#[derive(Debug, Default)]
pub struct ControlState {
	id: Option<String>,
	builder: Option<TagBuilder>,
}

impl ControlState {
	/// Creates empty state: no identifier, no builder yet.
	pub fn new() -> Self {
		Self::default()
	}
}

/// A server-side control: a type-preserving fluent configuration surface
/// over one owned [`TagBuilder`], rendered through a fixed three-phase
/// pipeline.
///
/// Concrete controls embed a [`ControlState`], wire it up through
/// [`state`](Control::state) / [`state_mut`](Control::state_mut), and supply
/// the [`build_tag`](Control::build_tag) factory. Everything else is default
/// methods: each fluent call takes the control by value, mutates the owned
/// builder, and returns the same concrete control, so chains mixing base and
/// widget-specific calls type-check with no casts. A control is intended for
/// one logical caller within one rendering pass; ownership moves through the
/// chain, so nothing is ever copied or shared.
///
/// ```
/// use grappelli_controls::{Button, ButtonControl, Control};
///
/// let html = Button::new("Save")
///     .id("btn1")
///     .disable()
///     .on_click("onSave()")
///     .to_html();
///
/// assert_eq!(
///     html,
///     r#"<button id="btn1" disabled="disabled" onClick="onSave()">Save</button>"#
/// );
/// ```
pub trait Control: Sized {
	/// Shared control state.
	fn state(&self) -> &ControlState;

	/// Mutable shared control state.
	fn state_mut(&mut self) -> &mut ControlState;

	/// Creates this control's tag builder.
	///
	/// Invoked at most once per control, on first builder access; the result
	/// is cached for the control's whole lifetime.
	fn build_tag(&self) -> TagBuilder;

	/// The owned builder, created on first access.
	fn builder_mut(&mut self) -> &mut TagBuilder {
		if self.state().builder.is_none() {
			let builder = self.build_tag();
			self.state_mut().builder = Some(builder);
		}
		match self.state_mut().builder.as_mut() {
			Some(builder) => builder,
			// the branch above just filled the slot
			None => unreachable!("builder slot is filled on first access"),
		}
	}

	/// Sets an attribute. An existing name is overwritten, never duplicated.
	fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.builder_mut().add_attribute(name, value);
		self
	}

	/// Forces `value` to replace any existing value for `name`.
	fn update_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.builder_mut().update_attribute(name, value);
		self
	}

	/// Merges one inline style declaration.
	fn style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.builder_mut().add_style(name, value);
		self
	}

	/// Sets a `data-` prefixed attribute.
	fn data_attr(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
		self.builder_mut().add_data_attribute(name, value);
		self
	}

	/// Sets the `data-toggle` attribute.
	fn data_toggle(self, value: impl Into<String>) -> Self {
		self.data_attr("toggle", value)
	}

	/// Encodes one entry of the consolidated `data-options` attribute.
	///
	/// Accepts text, flag, number and optional shapes; an absent value is
	/// skipped entirely.
	fn data_option(mut self, name: impl Into<String>, value: impl Into<DataOptionValue>) -> Self {
		self.builder_mut().add_data_option(name, value);
		self
	}

	/// Like [`data_option`](Control::data_option), but wraps the text value
	/// in quotes in the encoded attribute.
	fn quoted_data_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.builder_mut().add_quoted_data_option(name, value);
		self
	}

	/// Merges tokens into the class list. Union, not replacement.
	fn class(mut self, value: impl AsRef<str>) -> Self {
		self.builder_mut().add_class(value);
		self
	}

	/// Replaces the class list wholesale.
	fn update_class(mut self, value: impl Into<String>) -> Self {
		self.builder_mut().update_class(value);
		self
	}

	/// Sets the control identifier and forces the `id` attribute to it.
	fn id(mut self, id: impl Into<String>) -> Self {
		let id = id.into();
		self.state_mut().id = Some(id.clone());
		self.update_attr("id", id)
	}

	/// Sets the `width` style in pixels.
	///
	/// An absent value is a designed skip, not an error: the control comes
	/// back unchanged.
	fn width(self, value: impl Into<Option<i32>>) -> Self {
		match value.into() {
			Some(width) => self.style("width", Unit::Px(width).to_string()),
			None => self,
		}
	}

	/// Sets the `width` style as a percentage. Absent values skip.
	fn width_percent(self, value: impl Into<Option<i32>>) -> Self {
		match value.into() {
			Some(width) => self.style("width", Unit::Percent(width).to_string()),
			None => self,
		}
	}

	/// Sets the `height` style in pixels.
	fn height(self, value: i32) -> Self {
		self.style("height", Unit::Px(value).to_string())
	}

	/// Sets the `margin` shorthand. Accepts the 1/2/4-value arities:
	///
	/// ```
	/// use grappelli_controls::{Button, Control};
	///
	/// let html = Button::new("Go").margin((10, 20)).to_html();
	/// assert!(html.contains(r#"style="margin:10px 20px""#));
	/// ```
	fn margin(self, value: impl Into<Spacing>) -> Self {
		self.style("margin", value.into().to_string())
	}

	/// Sets the `padding` shorthand. Accepts the 1/2/4-value arities.
	fn padding(self, value: impl Into<Spacing>) -> Self {
		self.style("padding", value.into().to_string())
	}

	/// The stored identifier, if [`id`](Control::id) has been called.
	fn control_id(&self) -> Option<&str> {
		self.state().id.as_deref()
	}

	/// Current value of an attribute, read through the builder.
	fn attr_value(&mut self, name: &str) -> Option<&str> {
		self.builder_mut().get(name)
	}

	/// Current value of the class attribute.
	fn class_value(&mut self) -> Option<&str> {
		self.builder_mut().get("class")
	}

	/// Runs once before serialization. Override to mutate the builder one
	/// last time; the default does nothing.
	fn before_render(&mut self) {}

	/// Serializes the builder. The default delegates entirely to the
	/// builder's own serialization.
	fn render_tag(&mut self) -> String {
		self.builder_mut().to_string()
	}

	/// Observes the serialized markup after rendering; it cannot alter what
	/// the caller receives.
	///
	/// The default emits a render-trace event under [`TRACE_TARGET`].
	fn after_render(&mut self, html: &str) {
		tracing::debug!(
			target: TRACE_TARGET,
			control = std::any::type_name::<Self>(),
			%html,
			"rendered control"
		);
	}

	/// Renders the control: before-hook, serialization, after-hook, in that
	/// order, returning the serialized markup.
	fn to_html(mut self) -> String {
		self.before_render();
		let html = self.render_tag();
		self.after_render(&html);
		html
	}
}
