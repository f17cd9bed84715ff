//! Self-typing fluent controls rendered server-side
//!
//! This module provides access to grappelli-controls: the control base
//! trait with its fluent configuration surface and three-phase render
//! pipeline, plus the button control built on top of it.
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
//! assert!(html.contains(r#"disabled="disabled""#));
//! ```

// Re-export all grappelli-controls functionality
pub use grappelli_controls::*;
