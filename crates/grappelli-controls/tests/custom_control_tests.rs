//! Extending the control base with a new concrete control.

use std::cell::Cell;
use std::rc::Rc;

use grappelli_controls::{Control, ControlState};
use grappelli_tags::{self as tags, TagBuilder};

/// A labelled chip that guarantees its base class in the before-render hook.
struct Chip {
	state: ControlState,
	label: String,
	builds: Rc<Cell<usize>>,
}

impl Chip {
	fn new(label: impl Into<String>) -> Self {
		Self {
			state: ControlState::new(),
			label: label.into(),
			builds: Rc::new(Cell::new(0)),
		}
	}

	fn removable(self) -> Self {
		self.data_attr("removable", "true")
	}
}

impl Control for Chip {
	fn state(&self) -> &ControlState {
		&self.state
	}

	fn state_mut(&mut self) -> &mut ControlState {
		&mut self.state
	}

	fn build_tag(&self) -> TagBuilder {
		self.builds.set(self.builds.get() + 1);
		let mut builder = tags::span();
		builder.set_inner_html(self.label.clone());
		builder
	}

	fn before_render(&mut self) {
		self.builder_mut().add_class("chip");
	}
}

#[test]
fn the_before_hook_merges_the_base_class() {
	let html = Chip::new("rust").class("lang").to_html();
	assert_eq!(html, r#"<span class="lang chip">rust</span>"#);
}

#[test]
fn the_factory_runs_once_across_mutations_and_render() {
	let chip = Chip::new("rust");
	let builds = chip.builds.clone();
	let html = chip
		.id("chip-rust")
		.removable()
		.class("lang")
		.margin(2)
		.to_html();
	assert_eq!(builds.get(), 1);
	assert_eq!(
		html,
		r#"<span id="chip-rust" data-removable="true" class="lang chip" style="margin:2px">rust</span>"#
	);
}

#[test]
fn chip_specific_and_base_calls_interleave() {
	// removable() after a base call still yields a Chip, no casts involved
	let html = Chip::new("go").class("lang").removable().to_html();
	assert_eq!(
		html,
		r#"<span class="lang chip" data-removable="true">go</span>"#
	);
}
