#![cfg(feature = "parse")]

//! Parser for dice notation, producing [`Notation`] values from strings like "3d10+2".

use alloc::{
	format,
	string::{String, ToString},
	vec::Vec,
};

use chumsky::prelude::*;

use crate::notation::{Modifier, Notation};

/// Generates a parser that handles a single dice-notation token: one or more digits, a literal `d`, one or more
/// digits, and optionally a `+` or `-` followed by one or more digits.
pub fn notation_part<'src>() -> impl Parser<'src, &'src str, Notation, extra::Err<Rich<'src, char>>> + Clone {
	// Digit runs rather than integers, since the grammar admits leading zeroes ("03d010" is a valid throw)
	let digits = any()
		.filter(char::is_ascii_digit)
		.repeated()
		.at_least(1)
		.collect::<String>();

	// Parser for the optional trailing modifier (e.g. +2, -1)
	let modifier = one_of("+-")
		.then(digits.clone())
		.try_map(|(sign, value): (char, String), span| {
			let value = value
				.parse()
				.map_err(|err| Rich::custom(span, format!("Modifier value: {err}")))?;
			Ok(match sign {
				'+' => Modifier::Plus(value),
				_ => Modifier::Minus(value),
			})
		});

	// Parser for the notation as a whole
	digits
		.clone()
		.then_ignore(just('d'))
		.then(digits)
		.then(modifier.or_not())
		.try_map(|((count, sides), modifier): ((String, String), _), span| {
			let count: u32 = count
				.parse()
				.map_err(|err| Rich::custom(span, format!("Die count: {err}")))?;
			let sides: u32 = sides
				.parse()
				.map_err(|err| Rich::custom(span, format!("Die sides: {err}")))?;

			// The grammar matches "0d6" and "3d0", but neither names a throw that can happen
			if count < 1 {
				return Err(Rich::custom(span, "die count must be at least 1"));
			}
			if sides < 1 {
				return Err(Rich::custom(span, "dice must have at least 1 side"));
			}

			Ok(Notation {
				count,
				sides,
				modifier,
			})
		})
}

/// Generates a parser that handles a single dice-notation token like "3d10+2" and expects end of input.
pub fn notation<'src>() -> impl Parser<'src, &'src str, Notation, extra::Err<Rich<'src, char>>> + Clone {
	notation_part().then_ignore(end())
}

/// An error from parsing dice notation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("\"{input}\" did not validate as dice notation, try something like \"3d10+2\"")]
#[allow(clippy::exhaustive_structs, reason = "Plain data, stable shape")]
pub struct Error {
	/// The offending input, exactly as given (before whitespace stripping)
	pub input: String,

	/// Detail messages from the parser
	pub details: String,
}

impl core::str::FromStr for Notation {
	type Err = Error;

	/// Parses a notation string into a [`Notation`].
	///
	/// All whitespace is stripped before parsing, so "3d10 + 2" and "3d10+2" are the same throw.
	///
	/// # Examples
	/// ```
	/// use fortuna::notation::{Modifier, Notation};
	///
	/// let notation: Notation = "3d10+2".parse()?;
	/// assert_eq!(notation, Notation::new(3, 10).with_modifier(Modifier::Plus(2)));
	/// # Ok::<(), fortuna::parse::Error>(())
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
		let result = notation().parse(&cleaned).into_result().map_err(|errs| Error {
			input: s.to_string(),
			details: errs.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "),
		});
		result
	}
}
