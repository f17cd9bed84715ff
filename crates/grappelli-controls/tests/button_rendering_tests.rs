//! End-to-end rendering behavior of the button control.

use grappelli_controls::{Button, ButtonControl, Control, Spacing};
use rstest::rstest;

#[test]
fn save_button_renders_every_configured_attribute_once() {
	let html = Button::new("Save")
		.id("btn1")
		.disable()
		.on_click("onSave()")
		.to_html();

	assert_eq!(html.matches(r#"id="btn1""#).count(), 1);
	assert_eq!(html.matches(r#"disabled="disabled""#).count(), 1);
	assert_eq!(html.matches(r#"onClick="onSave()""#).count(), 1);
	insta::assert_snapshot!(
		html,
		@r#"<button id="btn1" disabled="disabled" onClick="onSave()">Save</button>"#
	);
}

#[test]
fn class_calls_accumulate_and_update_class_resets() {
	let html = Button::new("Go")
		.class("btn")
		.class("btn-primary")
		.to_html();
	assert!(html.contains(r#"class="btn btn-primary""#));

	let html = Button::new("Go")
		.class("btn")
		.class("btn-primary")
		.update_class("plain")
		.to_html();
	assert!(html.contains(r#"class="plain""#));
	assert!(!html.contains("btn-primary"));
}

#[rstest]
#[case(Spacing::Uniform(10), "margin:10px")]
#[case(Spacing::Symmetric(10, 20), "margin:10px 20px")]
#[case(Spacing::Sides(1, 2, 3, 4), "margin:1px 2px 3px 4px")]
fn margin_shorthand_reaches_the_style_attribute(
	#[case] spacing: Spacing,
	#[case] expected: &str,
) {
	let html = Button::new("Go").margin(spacing).to_html();
	assert!(html.contains(expected), "missing `{expected}` in `{html}`");
}

#[rstest]
#[case(None, None)]
#[case(Some(50), Some("width:50px"))]
fn width_is_a_skip_when_absent(#[case] width: Option<i32>, #[case] expected: Option<&str>) {
	let html = Button::new("Go").width(width).to_html();
	match expected {
		Some(expected) => assert!(html.contains(expected)),
		None => assert!(!html.contains("style")),
	}
}

#[test]
fn a_configured_button_renders_fully() {
	let html = Button::new("Submit")
		.id("submit")
		.class("btn btn-primary")
		.width(120)
		.height(32)
		.data_toggle("tooltip")
		.quoted_data_option("title", "Submit the form")
		.on_click("submitForm()")
		.to_html();

	insta::assert_snapshot!(
		html,
		@r#"<button id="submit" class="btn btn-primary" data-toggle="tooltip" onClick="submitForm()" style="width:120px;height:32px" data-options="title:'Submit the form'">Submit</button>"#
	);
}
