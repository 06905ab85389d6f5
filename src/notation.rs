//! Types describing a dice throw parsed from compact notation like "3d10+2".
//!
//! For turning a string into a [`Notation`], see [`crate::parse`]. For actually throwing the dice it describes, see
//! [`crate::roll`].

use core::fmt;

/// A dice throw described by notation: a number of dice to roll, the number of sides on each die, and an optional flat
/// modifier applied to the total after all dice are rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_structs, reason = "Plain data, stable shape")]
pub struct Notation {
	/// Number of dice to roll (at least 1)
	pub count: u32,

	/// Number of sides for each die (at least 1)
	pub sides: u32,

	/// Flat modifier to apply to the total once all dice are rolled, if any
	pub modifier: Option<Modifier>,
}

impl Notation {
	/// Creates notation for a plain throw with a given die count and number of sides.
	#[must_use]
	pub const fn new(count: u32, sides: u32) -> Self {
		Self {
			count,
			sides,
			modifier: None,
		}
	}

	/// Creates notation matching this one but without any modifier.
	#[must_use]
	#[inline]
	pub const fn plain(&self) -> Self {
		Self::new(self.count, self.sides)
	}

	/// Attaches a modifier to the notation, replacing any existing one.
	///
	/// # Examples
	/// ```
	/// use fortuna::notation::{Modifier, Notation};
	///
	/// let notation = Notation::new(3, 10).with_modifier(Modifier::Plus(2));
	/// assert_eq!(notation.to_string(), "3d10+2");
	/// ```
	#[must_use]
	pub const fn with_modifier(mut self, modifier: Modifier) -> Self {
		self.modifier = Some(modifier);
		self
	}
}

impl Default for Notation {
	/// Creates the default notation (1d20).
	#[inline]
	fn default() -> Self {
		Self::new(1, 20)
	}
}

impl fmt::Display for Notation {
	/// Formats the notation in its canonical form, e.g. `2d8`, `3d10+2`, `1d6-1`.
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}d{}", self.count, self.sides)?;
		match self.modifier {
			Some(modifier) => write!(f, "{modifier}"),
			None => Ok(()),
		}
	}
}

/// Flat adjustment applied to a throw's total after all of its dice have been rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_enums, reason = "The grammar only has + and -")]
pub enum Modifier {
	/// Add the value to the total
	Plus(u32),

	/// Subtract the value from the total
	Minus(u32),
}

impl Modifier {
	/// The magnitude of the adjustment, regardless of sign.
	#[must_use]
	#[inline]
	pub const fn value(&self) -> u32 {
		match self {
			Self::Plus(value) | Self::Minus(value) => *value,
		}
	}

	/// Applies the adjustment to a running total, returning [`None`] on integer overflow.
	#[must_use]
	pub const fn apply(&self, total: i64) -> Option<i64> {
		match self {
			Self::Plus(value) => total.checked_add(*value as i64),
			Self::Minus(value) => total.checked_sub(*value as i64),
		}
	}
}

impl fmt::Display for Modifier {
	/// Formats the modifier the way it appears in notation, sign included, e.g. `+2` or `-1`.
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Plus(value) => write!(f, "+{value}"),
			Self::Minus(value) => write!(f, "-{value}"),
		}
	}
}
