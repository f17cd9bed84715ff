//! Tag accumulation and serialization
//!
//! This module provides access to grappelli-tags: the ordered tag builder
//! the control layer renders through. Useful directly when a caller needs
//! one-off markup without a control type around it.
//!
//! ## Example
//!
//! ```
//! use grappelli::tags;
//!
//! let mut link = tags::a();
//! link.add_attribute("href", "/docs");
//! link.set_inner_html("Docs");
//!
//! assert_eq!(link.to_string(), r#"<a href="/docs">Docs</a>"#);
//! ```

// Re-export all grappelli-tags functionality
pub use grappelli_tags::*;
