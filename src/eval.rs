#![cfg(feature = "parse")]

//! The end-to-end pipeline for evaluating dice-notation strings: parse, check limits, throw, summarize.

use alloc::boxed::Box;
use core::fmt;

#[cfg(all(feature = "fastrand", feature = "std"))]
use crate::roll::roller::FastRand;
use crate::{
	notation::Notation,
	parse,
	roll::{self, Outcome, Roller},
};

/// Upper bounds on what a parsed notation is allowed to describe, checked before any die is rolled.
///
/// The notation grammar itself places no bound on die counts or sides, so a hostile or fat-fingered input like
/// "4294967295d6" would otherwise describe an absurd amount of work. The bounds are a library choice, not part of
/// the grammar; the default of 100 000 for both is far beyond any tabletop need and still cheap to roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_structs, reason = "Plain data, stable shape")]
pub struct Limit {
	/// Maximum number of dice in a single throw
	pub count: u32,

	/// Maximum number of sides per die
	pub sides: u32,
}

impl Limit {
	/// Default bound used for both the die count and the sides.
	pub const DEFAULT_MAX: u32 = 100_000;

	/// Creates a limit with the given bounds.
	#[must_use]
	pub const fn new(count: u32, sides: u32) -> Self {
		Self { count, sides }
	}

	/// Checks a notation against the limit.
	///
	/// # Errors
	/// If the notation's die count or sides exceed the respective bound, [`roll::Error::LimitExceeded`] is returned.
	pub fn check(&self, notation: &Notation) -> Result<(), roll::Error> {
		if notation.count > self.count {
			return Err(roll::Error::LimitExceeded {
				name: "die count",
				value: notation.count,
				max: self.count,
			});
		}
		if notation.sides > self.sides {
			return Err(roll::Error::LimitExceeded {
				name: "sides",
				value: notation.sides,
				max: self.sides,
			});
		}
		Ok(())
	}
}

impl Default for Limit {
	/// Creates the default limit ([`Limit::DEFAULT_MAX`] for both bounds).
	#[inline]
	fn default() -> Self {
		Self::new(Self::DEFAULT_MAX, Self::DEFAULT_MAX)
	}
}

/// Callback invoked with each of an outcome's step messages, in order
type StepFn = Box<dyn FnMut(&str)>;

/// Evaluates dice-notation strings with a specific [`Roller`], [`Limit`], and optionally a step callback.
///
/// Each evaluation is independent; the evaluator holds no state between calls beyond its roller's RNG.
///
/// # Examples
/// ```
/// use fortuna::{eval::{Evaluator, Limit}, roll::roller::FastRand};
///
/// let mut evaluator = Evaluator::with_roller(FastRand::with_seed(0x2a)).limit(Limit::new(100, 1000));
/// let outcome = evaluator.evaluate("4d6-2")?;
/// assert_eq!(outcome.total, outcome.rolled_sum() - 2);
/// # Ok::<(), fortuna::eval::Error>(())
/// ```
pub struct Evaluator<R> {
	/// Source of die rolls
	roller: R,

	/// Bounds checked before rolling
	limit: Limit,

	/// Optional observer for step messages
	on_step: Option<StepFn>,
}

#[cfg(all(feature = "fastrand", feature = "std"))]
impl Evaluator<FastRand> {
	/// Creates an evaluator with a freshly-seeded [`FastRand`] roller and the default limit.
	#[must_use]
	pub fn new() -> Self {
		Self::with_roller(FastRand::default())
	}
}

#[cfg(all(feature = "fastrand", feature = "std"))]
impl Default for Evaluator<FastRand> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Roller> Evaluator<R> {
	/// Creates an evaluator that throws dice with the given roller, with the default limit and no step callback.
	#[must_use]
	pub fn with_roller(roller: R) -> Self {
		Self {
			roller,
			limit: Limit::default(),
			on_step: None,
		}
	}

	/// Sets the limit checked against every parsed notation.
	#[must_use]
	pub fn limit(mut self, limit: Limit) -> Self {
		self.limit = limit;
		self
	}

	/// Sets a callback that receives every step message of each evaluation, in message order. This takes the place
	/// of a debug log; the library itself never writes anywhere.
	#[must_use]
	pub fn on_step(mut self, on_step: impl FnMut(&str) + 'static) -> Self {
		self.on_step = Some(Box::new(on_step));
		self
	}

	/// Evaluates a dice-notation string: parses it, checks it against the limit, throws the dice it describes, and
	/// returns the outcome. The outcome's final summary message names the throw by the input exactly as given.
	///
	/// # Errors
	/// - [`Error::Notation`] if the input does not match the grammar
	/// - [`Error::Roll`] if the notation breaches the limit or the throw itself fails
	pub fn evaluate(&mut self, input: &str) -> Result<Outcome, Error> {
		let notation: Notation = input.parse()?;
		self.limit.check(&notation)?;

		let outcome = self.roller.throw_labeled(&notation, input)?;

		if let Some(on_step) = self.on_step.as_mut() {
			for message in &outcome.messages {
				on_step(message);
			}
		}

		Ok(outcome)
	}
}

impl<R: fmt::Debug> fmt::Debug for Evaluator<R> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Evaluator")
			.field("roller", &self.roller)
			.field("limit", &self.limit)
			.field("on_step", &self.on_step.is_some())
			.finish()
	}
}

/// Any error from evaluating a dice-notation string
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// The input did not parse as dice notation
	#[error("notation error: {0}")]
	Notation(#[from] parse::Error),

	/// The throw could not be made
	#[error("roll error: {0}")]
	Roll(#[from] roll::Error),
}

/// Evaluates a dice-notation string with a freshly-seeded random roller and the default [`Limit`].
///
/// # Errors
/// If the input does not parse, breaches the default limit, or fails to roll, an error variant is returned.
///
/// # Examples
/// ```
/// let outcome = fortuna::evaluate("3d10+2")?;
/// assert_eq!(outcome.rolls.len(), 3);
/// assert!(outcome.rolls.iter().all(|roll| (1..=10).contains(roll)));
/// assert_eq!(outcome.total, outcome.rolled_sum() + 2);
/// # Ok::<(), fortuna::eval::Error>(())
/// ```
#[cfg(all(feature = "fastrand", feature = "std"))]
pub fn evaluate(input: &str) -> Result<Outcome, Error> {
	Evaluator::new().evaluate(input)
}
