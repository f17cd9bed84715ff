//! Pixel/percent formatting and the CSS spacing shorthand.

use std::fmt;

/// A numeric CSS dimension: pixels by default, percent when asked for.
///
/// ## Example
///
/// ```
/// use grappelli_controls::Unit;
///
/// assert_eq!(Unit::Px(50).to_string(), "50px");
/// assert_eq!(Unit::Percent(50).to_string(), "50%");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
	/// Rendered as `<value>px`.
	Px(i32),
	/// Rendered as `<value>%`.
	Percent(i32),
}

impl fmt::Display for Unit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Unit::Px(value) => write!(f, "{value}px"),
			Unit::Percent(value) => write!(f, "{value}%"),
		}
	}
}

/// The CSS margin/padding shorthand: one value for all sides, a top-bottom /
/// left-right pair, or all four sides clockwise from the top.
///
/// Built from an `i32`, an `(i32, i32)` pair or an `(i32, i32, i32, i32)`
/// quad. No other arity converts, so unsupported shorthand shapes fail to
/// compile instead of rendering something undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
	/// All four sides equal.
	Uniform(i32),
	/// Top/bottom, then left/right.
	Symmetric(i32, i32),
	/// Top, right, bottom, left.
	Sides(i32, i32, i32, i32),
}

impl From<i32> for Spacing {
	fn from(all: i32) -> Self {
		Spacing::Uniform(all)
	}
}

impl From<(i32, i32)> for Spacing {
	fn from((vertical, horizontal): (i32, i32)) -> Self {
		Spacing::Symmetric(vertical, horizontal)
	}
}

impl From<(i32, i32, i32, i32)> for Spacing {
	fn from((top, right, bottom, left): (i32, i32, i32, i32)) -> Self {
		Spacing::Sides(top, right, bottom, left)
	}
}

impl fmt::Display for Spacing {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self {
			Spacing::Uniform(all) => write!(f, "{}", Unit::Px(all)),
			Spacing::Symmetric(vertical, horizontal) => {
				write!(f, "{} {}", Unit::Px(vertical), Unit::Px(horizontal))
			}
			Spacing::Sides(top, right, bottom, left) => write!(
				f,
				"{} {} {} {}",
				Unit::Px(top),
				Unit::Px(right),
				Unit::Px(bottom),
				Unit::Px(left)
			),
		}
	}
}
