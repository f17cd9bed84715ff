//! Self-typing fluent controls over [`grappelli_tags`].
//!
//! A control owns a single, lazily-created [`TagBuilder`](grappelli_tags::TagBuilder)
//! and exposes a fluent configuration surface over it: every mutator takes
//! the control by value, mutates the builder, and returns the same concrete
//! control, so chains mixing base and widget-specific calls need no casts.
//! Rendering runs a fixed three-phase pipeline — before-hook, serialization,
//! after-hook — and returns the serialized tag string.
//!
//! The [`Button`] control demonstrates the specialization pattern: a concrete
//! struct embedding [`ControlState`], a factory hook producing its
//! button-flavored builder, and a [`ButtonControl`] trait layering the
//! widget-specific operations on top of [`Control`].
//!
//! ## Example
//!
//! ```
//! use grappelli_controls::{Button, ButtonControl, Control};
//!
//! let html = Button::new("Save")
//!     .class("btn")
//!     .width(80)
//!     .on_click("onSave()")
//!     .to_html();
//!
//! assert_eq!(
//!     html,
//!     r#"<button class="btn" onClick="onSave()" style="width:80px">Save</button>"#
//! );
//! ```

mod button;
mod control;
mod unit;

pub use button::{Button, ButtonControl};
pub use control::{Control, ControlState, TRACE_TARGET};
pub use unit::{Spacing, Unit};
