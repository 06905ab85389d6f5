//! Throwing dice described by a [`Notation`] and working with the resulting outcomes.
//!
//! The actual dice-throwing is done by a [`Roller`]; this module holds the types every roller produces.
//!
//! [`Notation`]: crate::notation::Notation

pub mod roller;

use alloc::{string::String, vec::Vec};
use core::fmt;

pub use self::roller::Roller;

/// Result of one fully-evaluated dice throw: the final total, each individual die result, and a human-readable
/// description of every step taken along the way.
///
/// Outcomes are plain data; once returned, nothing in the crate holds onto or mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs, reason = "Plain data, stable shape")]
pub struct Outcome {
	/// Final total of the throw, modifier included
	pub total: i64,

	/// Each individual die result, in the order the dice were rolled
	pub rolls: Vec<u32>,

	/// One message per die roll (in roll order), then one for the modifier if there was one, then a final summary
	pub messages: Vec<String>,
}

impl Outcome {
	/// Sum of the individual die results, without the modifier.
	///
	/// # Examples
	/// ```
	/// let outcome = fortuna::evaluate("2d4+3")?;
	/// assert_eq!(outcome.total, outcome.rolled_sum() + 3);
	/// # Ok::<(), fortuna::eval::Error>(())
	/// ```
	#[must_use]
	pub fn rolled_sum(&self) -> i64 {
		self.rolls.iter().copied().map(i64::from).sum()
	}

	/// Joins all of the step messages with a separator of the caller's choosing.
	#[must_use]
	pub fn describe(&self, separator: &str) -> String {
		self.messages.join(separator)
	}
}

impl fmt::Display for Outcome {
	/// Formats the outcome as its step messages, one per line. Equivalent to `self.describe("\n")`.
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.describe("\n"))
	}
}

/// An error resulting from throwing dice
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// A die was asked to roll with fewer than 1 side. The parser never produces such a [`Notation`], but rollers are
	/// reusable primitives and defend on their own.
	///
	/// [`Notation`]: crate::notation::Notation
	#[error("invalid number of sides for a die: {0}")]
	InvalidSides(u32),

	/// The notation describes more work than the configured [`Limit`] allows.
	///
	/// [`Limit`]: crate::eval::Limit
	#[error("{name} of {value} exceeds the configured limit of {max}")]
	LimitExceeded {
		/// Which bound was breached ("die count" or "sides")
		name: &'static str,
		/// The offending value from the notation
		value: u32,
		/// The configured maximum
		max: u32,
	},

	/// There was an integer overflow while accumulating the throw's total.
	#[error("integer overflow while totaling a throw")]
	Overflow,
}
