use crate::{
	notation::{Modifier, Notation},
	roll::{
		roller::{FastRand, Iter, Max, Roller, Val},
		Error, Outcome,
	},
};

#[test]
fn single_d20() {
	let outcome = throws_successfully_and_in_range(&Notation::new(1, 20));
	assert_eq!(outcome.rolls.len(), 1);
}

#[test]
fn double_d8() {
	let outcome = throws_successfully_and_in_range(&Notation::new(2, 8));
	assert_eq!(outcome.rolls.len(), 2);
}

#[test]
fn hundred_d42s() {
	let outcome = throws_successfully_and_in_range(&Notation::new(100, 42));
	assert_eq!(outcome.rolls.len(), 100);
}

#[test]
fn one_sided_die_is_deterministic() {
	let outcome = FastRand::default().throw(&Notation::new(1, 1)).unwrap();
	assert_eq!(outcome.rolls, vec![1]);
	assert_eq!(outcome.total, 1);
}

#[test]
fn total_is_sum_of_rolls() {
	let outcome = throws_successfully_and_in_range(&Notation::new(10, 6));
	assert_eq!(outcome.total, outcome.rolled_sum());
}

#[test]
fn plus_modifier_applied_after_rolling() {
	let notation = Notation::new(2, 4).with_modifier(Modifier::Plus(3));
	let outcome = Val(3).throw(&notation).unwrap();
	assert_eq!(outcome.rolls, vec![3, 3]);
	assert_eq!(outcome.total, 9);
}

#[test]
fn minus_modifier_applied_after_rolling() {
	let notation = Notation::new(2, 4).with_modifier(Modifier::Minus(1));
	let outcome = Val(3).throw(&notation).unwrap();
	assert_eq!(outcome.total, 5);
}

#[test]
fn minus_modifier_can_go_negative() {
	let notation = Notation::new(1, 1).with_modifier(Modifier::Minus(10));
	let outcome = Max.throw(&notation).unwrap();
	assert_eq!(outcome.total, -9);
}

#[test]
fn message_order_and_wording() {
	let notation = Notation::new(2, 6).with_modifier(Modifier::Plus(3));
	let outcome = Iter::new(vec![2, 4]).throw(&notation).unwrap();

	assert_eq!(
		outcome.messages,
		vec![
			"Die 1 gave 2",
			"Die 2 gave 4",
			"Adding 3",
			"Final result for throw 2d6+3: 9",
		]
	);
}

#[test]
fn subtracting_message_wording() {
	let notation = Notation::new(1, 6).with_modifier(Modifier::Minus(2));
	let outcome = Iter::new(vec![5]).throw(&notation).unwrap();

	assert_eq!(
		outcome.messages,
		vec!["Die 1 gave 5", "Subtracting 2", "Final result for throw 1d6-2: 3"]
	);
}

#[test]
fn no_modifier_message_without_modifier() {
	let outcome = Iter::new(vec![2, 4]).throw(&Notation::new(2, 6)).unwrap();
	assert_eq!(outcome.messages.len(), 3);
	assert!(!outcome.messages.iter().any(|msg| msg.starts_with("Adding")));
	assert!(!outcome.messages.iter().any(|msg| msg.starts_with("Subtracting")));
}

#[test]
fn label_used_in_summary() {
	let outcome = Iter::new(vec![1, 2])
		.throw_labeled(&Notation::new(2, 6), "2d6 ")
		.unwrap();
	assert_eq!(outcome.messages.last().unwrap(), "Final result for throw 2d6 : 3");
}

#[test]
fn describe_joins_messages() {
	let outcome = Iter::new(vec![1, 2]).throw(&Notation::new(2, 6)).unwrap();
	assert_eq!(
		outcome.describe(", "),
		"Die 1 gave 1, Die 2 gave 2, Final result for throw 2d6: 3"
	);
	assert_eq!(outcome.to_string(), outcome.describe("\n"));
}

#[test]
fn invalid_sides() {
	assert_eq!(Max.roll_die(0), Err(Error::InvalidSides(0)));
	assert_eq!(FastRand::default().roll_die(0), Err(Error::InvalidSides(0)));
	assert_eq!(Val(3).roll_die(0), Err(Error::InvalidSides(0)));
	assert_eq!(Iter::new(vec![1]).roll_die(0), Err(Error::InvalidSides(0)));
}

#[test]
fn invalid_sides_aborts_throw() {
	// The parser never produces sides < 1, but a hand-built notation can
	let result = Max.throw(&Notation::new(3, 0));
	assert_eq!(result, Err(Error::InvalidSides(0)));
}

#[test]
fn iter_roller_can_roll() {
	let mut roller = Iter::new(vec![4]);
	assert!(roller.can_roll());
	roller.roll_die(6).unwrap();
	assert!(!roller.can_roll());
}

#[test]
fn all_die_faces_occur_roughly_uniformly() {
	const ROLLS: usize = 10_000;
	const SIDES: u32 = 10;

	let mut roller = FastRand::with_seed(0x750c38d574400);
	let outcome = roller.throw(&Notation::new(ROLLS as u32, SIDES)).unwrap();
	assert_eq!(outcome.rolls.len(), ROLLS);

	let mut counts = [0usize; SIDES as usize];
	for roll in &outcome.rolls {
		assert!((1..=SIDES).contains(roll));
		counts[(roll - 1) as usize] += 1;
	}

	// Every face should land within a generous tolerance of the mean
	let mean = ROLLS / SIDES as usize;
	let tolerance = mean / 5;
	for (face, count) in counts.iter().enumerate() {
		assert!(
			count.abs_diff(mean) <= tolerance,
			"face {} came up {} times, expected {} +/- {}",
			face + 1,
			count,
			mean,
			tolerance
		);
	}
}

fn throws_successfully_and_in_range(notation: &Notation) -> Outcome {
	let result = FastRand::default().throw(notation);
	assert!(result.is_ok());

	let outcome = result.unwrap();
	rolls_in_range(&outcome.rolls, notation.sides);
	assert_eq!(outcome.rolls.len(), notation.count as usize);

	outcome
}

fn rolls_in_range(rolls: &[u32], sides: u32) {
	assert!(!rolls.iter().any(|roll| *roll < 1 || *roll > sides));
}
