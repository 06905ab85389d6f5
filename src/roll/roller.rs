//! Abstractions for rolling dice using various means.

use alloc::{format, string::ToString, vec::Vec};
use core::iter::Peekable;

#[cfg(feature = "fastrand")]
use fastrand::Rng;

use super::{Error, Outcome};
use crate::notation::{Modifier, Notation};

/// Rolls dice - what else is there to say?
pub trait Roller {
	/// Rolls a single die, uniformly distributed over `[1, sides]` with both endpoints included.
	///
	/// # Errors
	/// If `sides` is less than 1, [`Error::InvalidSides`] is returned.
	fn roll_die(&mut self, sides: u32) -> Result<u32, Error>;

	/// Throws all of the dice a notation describes: each die is rolled independently in order, the running total
	/// accumulates left to right, and the modifier (if any) is applied once all dice are rolled.
	///
	/// The outcome's messages carry one line per die, one for the modifier when present, and a final summary naming
	/// the throw by its canonical notation. To name it by the original input string instead, use
	/// [`Roller::throw_labeled`].
	///
	/// # Errors
	/// If any die fails to roll or the total overflows, an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use fortuna::{notation::Notation, roll::roller::{FastRand, Roller}};
	///
	/// let mut roller = FastRand::with_seed(0x750c38d574400);
	/// let outcome = roller.throw(&Notation::new(4, 6))?;
	/// assert_eq!(outcome.rolls.len(), 4);
	/// assert!(outcome.rolls.iter().all(|roll| (1..=6).contains(roll)));
	/// # Ok::<(), fortuna::roll::Error>(())
	/// ```
	fn throw(&mut self, notation: &Notation) -> Result<Outcome, Error>
	where
		Self: Sized,
	{
		self.throw_labeled(notation, &notation.to_string())
	}

	/// Same as [`Roller::throw`], but the final summary message names the throw by `label` - typically the raw input
	/// string the notation was parsed from, whitespace and all.
	///
	/// # Errors
	/// If any die fails to roll or the total overflows, an error variant is returned.
	fn throw_labeled(&mut self, notation: &Notation, label: &str) -> Result<Outcome, Error>
	where
		Self: Sized,
	{
		let mut rolls = Vec::with_capacity(notation.count as usize);
		let mut messages = Vec::with_capacity(notation.count as usize + 2);
		let mut total: i64 = 0;

		// Roll the dice!
		for die in 1..=notation.count {
			let result = self.roll_die(notation.sides)?;
			total = total.checked_add(i64::from(result)).ok_or(Error::Overflow)?;
			messages.push(format!("Die {die} gave {result}"));
			rolls.push(result);
		}

		// The modifier applies once, after every die has been rolled
		if let Some(modifier) = notation.modifier {
			messages.push(match modifier {
				Modifier::Plus(value) => format!("Adding {value}"),
				Modifier::Minus(value) => format!("Subtracting {value}"),
			});
			total = modifier.apply(total).ok_or(Error::Overflow)?;
		}

		messages.push(format!("Final result for throw {label}: {total}"));

		Ok(Outcome { total, rolls, messages })
	}
}

/// Generates rolls with random values using [fastrand]. Requires the `fastrand` feature (enabled by default).
///
/// # Examples
///
/// ## Default fastrand roller
/// ```
/// use fortuna::{notation::Notation, roll::roller::{FastRand, Roller}};
///
/// let mut roller = FastRand::default();
///
/// let notation = Notation::new(4, 6);
/// let _ = roller.throw(&notation)?;
/// let _ = roller.throw(&notation)?;
/// # Ok::<(), fortuna::roll::Error>(())
/// ```
///
/// ## Manually seeded fastrand roller
/// ```
/// use fortuna::{notation::Notation, roll::roller::{FastRand, Roller}};
///
/// let mut roller = FastRand::with_seed(0x750c38d574400);
/// let _ = roller.throw(&Notation::new(4, 6))?;
/// # Ok::<(), fortuna::roll::Error>(())
/// ```
///
/// ## Custom fastrand roller
/// ```
/// use fortuna::{notation::Notation, roll::roller::{FastRand, Roller}};
/// use fastrand::Rng;
///
/// let rng = Rng::with_seed(0x750c38d574400);
/// let mut roller = FastRand::new(rng);
/// let _ = roller.throw(&Notation::new(4, 6))?;
/// # Ok::<(), fortuna::roll::Error>(())
/// ```
#[cfg(feature = "fastrand")]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "std", derive(Default))]
pub struct FastRand(Rng);

#[cfg(feature = "fastrand")]
impl FastRand {
	/// Creates a new fastrand roller that uses the given RNG instance to generate rolls.
	#[must_use]
	#[inline]
	pub const fn new(rng: Rng) -> Self {
		Self(rng)
	}

	/// Creates a new fastrand roller that uses a pre-seeded RNG instance to generate rolls.
	#[must_use]
	#[inline]
	pub fn with_seed(seed: u64) -> Self {
		Self(Rng::with_seed(seed))
	}
}

#[cfg(feature = "fastrand")]
impl Roller for FastRand {
	/// Rolls a single die using the [`fastrand::Rng`] the roller was created with. The integer range
	/// `1..=sides` is sampled directly, so no rounding bias is possible.
	#[inline]
	fn roll_die(&mut self, sides: u32) -> Result<u32, Error> {
		if sides < 1 {
			return Err(Error::InvalidSides(sides));
		}
		Ok(self.0.u32(1..=sides))
	}
}

/// Generates rolls that always have their max value.
///
/// # Examples
/// ```
/// use fortuna::{notation::Notation, roll::roller::{Max, Roller}};
///
/// let outcome = Max.throw(&Notation::new(4, 6))?;
/// assert!(outcome.rolls.iter().all(|roll| *roll == 6));
/// assert_eq!(outcome.total, 24);
/// # Ok::<(), fortuna::roll::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Max;

impl Roller for Max {
	/// Rolls a single die, always with the max value (same as the number of sides).
	#[inline]
	fn roll_die(&mut self, sides: u32) -> Result<u32, Error> {
		if sides < 1 {
			return Err(Error::InvalidSides(sides));
		}
		Ok(sides)
	}
}

/// Generates rolls that always have a specific value.
///
/// # Examples
/// ```
/// use fortuna::{notation::Notation, roll::roller::{Roller, Val}};
///
/// let mut roller = Val(3);
/// let outcome = roller.throw(&Notation::new(4, 6))?;
/// assert!(outcome.rolls.iter().all(|roll| *roll == 3));
/// # Ok::<(), fortuna::roll::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Val(pub u32);

impl Roller for Val {
	/// Rolls a single die, always with one specific value.
	#[inline]
	fn roll_die(&mut self, sides: u32) -> Result<u32, Error> {
		if sides < 1 {
			return Err(Error::InvalidSides(sides));
		}
		Ok(self.0)
	}
}

/// Generates rolls from an iterator of values. Mainly useful for testing purposes.
///
/// # Examples
/// ```
/// use fortuna::{notation::Notation, roll::roller::{Iter, Roller}};
///
/// let mut roller = Iter::new(vec![1, 2, 3, 4, 10]);
/// let outcome = roller.throw(&Notation::new(5, 6))?;
/// assert_eq!(outcome.rolls, vec![1, 2, 3, 4, 10]);
/// # Ok::<(), fortuna::roll::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Iter<I: Iterator<Item = u32>>(Peekable<I>);

impl<I: Iterator<Item = u32>> Iter<I> {
	/// Checks whether the iterator still has values available.
	#[inline]
	pub fn can_roll(&mut self) -> bool {
		self.0.peek().is_some()
	}

	/// Creates a new roller that uses the given iterator to provide roll values.
	#[must_use]
	#[inline]
	pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
		Self(iter.into_iter().peekable())
	}
}

impl<I: Iterator<Item = u32>> Roller for Iter<I> {
	/// Rolls a die with the value from the next iteration.
	///
	/// # Panics
	/// If the iterator has finished, this will panic.
	#[inline]
	#[expect(
		clippy::expect_used,
		reason = "Mostly for testing, otherwise manual checking of can_roll() is expected"
	)]
	fn roll_die(&mut self, sides: u32) -> Result<u32, Error> {
		if sides < 1 {
			return Err(Error::InvalidSides(sides));
		}
		Ok(self.0.next().expect("iterator is finished"))
	}
}
