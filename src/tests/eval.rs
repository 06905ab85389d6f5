use std::{cell::RefCell, rc::Rc};

use crate::{
	eval::{evaluate, Error, Evaluator, Limit},
	notation::Notation,
	roll::{self, roller::Iter},
};

#[test]
fn valid_input_shape() {
	let outcome = evaluate("3d6").unwrap();
	assert_eq!(outcome.rolls.len(), 3);
	assert!(outcome.rolls.iter().all(|roll| (1..=6).contains(roll)));
	assert_eq!(outcome.total, outcome.rolled_sum());

	// Three die messages plus the summary, no modifier message
	assert_eq!(outcome.messages.len(), 4);
}

#[test]
fn degenerate_single_die() {
	let outcome = evaluate("1d1").unwrap();
	assert_eq!(outcome.rolls, vec![1]);
	assert_eq!(outcome.total, 1);
}

#[test]
fn plus_modifier_total() {
	let outcome = evaluate("2d4+3").unwrap();
	assert_eq!(outcome.total, outcome.rolled_sum() + 3);
}

#[test]
fn minus_modifier_total() {
	let outcome = evaluate("2d4-1").unwrap();
	assert_eq!(outcome.total, outcome.rolled_sum() - 1);
}

#[test]
fn invalid_notation() {
	let result = evaluate("abc");
	assert!(matches!(result, Err(Error::Notation(..))));
}

#[test]
fn zero_dice_is_invalid_notation() {
	assert!(matches!(evaluate("0d6"), Err(Error::Notation(..))));
}

#[test]
fn untrimmed_input_named_in_summary() {
	let outcome = evaluate("3d10 + 2").unwrap();
	let summary = outcome.messages.last().unwrap();
	assert!(summary.starts_with("Final result for throw 3d10 + 2: "));
}

#[test]
fn default_limit_exceeded() {
	let result = evaluate("200000d6");
	assert!(matches!(
		result,
		Err(Error::Roll(roll::Error::LimitExceeded { name: "die count", .. }))
	));

	let result = evaluate("1d200000");
	assert!(matches!(
		result,
		Err(Error::Roll(roll::Error::LimitExceeded { name: "sides", .. }))
	));
}

#[test]
fn nothing_rolled_past_the_limit() {
	// The limit check happens before the roller is ever consulted
	let mut evaluator = Evaluator::with_roller(Iter::new(Vec::new())).limit(Limit::new(10, 10));
	let result = evaluator.evaluate("11d6");
	assert!(matches!(result, Err(Error::Roll(roll::Error::LimitExceeded { .. }))));
}

#[test]
fn custom_limit() {
	let mut evaluator = Evaluator::new().limit(Limit::new(10, 10));
	assert!(evaluator.evaluate("10d10").is_ok());
	assert!(evaluator.evaluate("11d10").is_err());
	assert!(evaluator.evaluate("10d11").is_err());
}

#[test]
fn limit_check_directly() {
	let limit = Limit::new(100, 1000);
	assert_eq!(limit.check(&Notation::new(100, 1000)), Ok(()));
	assert!(limit.check(&Notation::new(101, 1000)).is_err());
	assert!(limit.check(&Notation::new(100, 1001)).is_err());
}

#[test]
fn deterministic_roller_end_to_end() {
	let mut evaluator = Evaluator::with_roller(Iter::new(vec![1, 2, 3]));
	let outcome = evaluator.evaluate("3d6").unwrap();
	assert_eq!(outcome.rolls, vec![1, 2, 3]);
	assert_eq!(outcome.total, 6);
}

#[test]
fn on_step_receives_every_message_in_order() {
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);

	let mut evaluator = Evaluator::with_roller(Iter::new(vec![2, 4])).on_step(move |message| {
		sink.borrow_mut().push(message.to_owned());
	});

	let outcome = evaluator.evaluate("2d6+1").unwrap();
	assert_eq!(*seen.borrow(), outcome.messages);
}

#[test]
fn evaluations_are_independent() {
	let mut evaluator = Evaluator::new();
	let first = evaluator.evaluate("4d6").unwrap();
	let second = evaluator.evaluate("4d6").unwrap();
	assert_eq!(first.rolls.len(), second.rolls.len());
	// Totals may of course coincide; the messages always describe their own throw
	assert_eq!(first.messages.len(), second.messages.len());
}
