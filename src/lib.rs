//! # Grappelli
//!
//! Fluent server-side HTML controls for Rust, companion to the Reinhardt
//! web framework.
//!
//! Grappelli generates interactive UI markup on the server: a control is
//! configured through a chain of fluent calls — each mutating the control's
//! owned tag builder and handing the same, fully-typed control back — and is
//! rendered to its final tag string on demand. It follows Rust's composition
//! patterns instead of class inheritance, so the self-typing fluent surface
//! comes from trait default methods rather than a generic base class.
//!
//! ## Core Principles
//!
//! - **Composition over Inheritance**: control behavior is layered through
//!   traits; concrete controls stay plain structs
//! - **Type-preserving Chains**: every fluent call returns the concrete
//!   control type, so widget-specific and base calls interleave freely
//! - **Render on Demand**: nothing is serialized (and no builder even
//!   exists) until the control is rendered or first configured
//!
//! ## Modules
//!
//! - [`controls`]: the control base trait, render pipeline, and the button
//!   control
//! - [`tags`]: the ordered tag builder the controls render through
//!
//! ## Example
//!
//! ```
//! use grappelli::controls::{Button, ButtonControl, Control};
//!
//! let html = Button::new("Save")
//!     .id("btn1")
//!     .disable()
//!     .on_click("onSave()")
//!     .to_html();
//!
//! assert_eq!(
//!     html,
//!     r#"<button id="btn1" disabled="disabled" onClick="onSave()">Save</button>"#
//! );
//! ```

pub mod controls;
pub mod tags;

pub use controls::{Button, ButtonControl, Control, ControlState, Spacing, Unit};
pub use tags::{DataOptionValue, TagBuilder};
