//! Tag accumulation and serialization.
//!
//! A [`TagBuilder`] collects everything a single element will render with —
//! attributes, inline style declarations, consolidated `data-options`
//! entries, inner HTML — and serializes the element on demand through its
//! [`Display`](std::fmt::Display) impl. Insertion order is preserved
//! everywhere, so the output of a given call sequence is reproducible.
//!
//! Element constructors ([`button`], [`div`], …) create builders for the
//! tags the control layer works with.
//!
//! ## Example
//!
//! ```
//! use grappelli_tags as tags;
//!
//! let mut button = tags::button();
//! button.add_class("btn");
//! button.set_inner_html("Go");
//!
//! assert_eq!(button.to_string(), r#"<button class="btn">Go</button>"#);
//! ```

mod builder;
mod elements;
mod options;

pub use builder::TagBuilder;
pub use elements::{a, button, div, input, span, textarea};
pub use options::DataOptionValue;
