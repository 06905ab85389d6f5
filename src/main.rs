#[cfg(feature = "build-binary")]
fn main() {
	use std::io::{self, Write};
	use std::{env, process};

	use ariadne::{Color, Label, Report, ReportKind, Source};
	use chumsky::Parser;

	use fortuna::{
		eval::Limit,
		roll::roller::{FastRand, Roller},
	};

	let args = env::args();
	let input = if args.len() > 1 {
		// Obtain the notation by combining all args passed to the executable, so that it can be left unquoted
		// even with spaces. The first argument is ignored since it is typically the name of the executable itself.
		args.skip(1).collect::<Vec<String>>().join(" ")
	} else {
		let mut lines = io::stdin().lines();

		// If there isn't already input available in stdin, display a prompt for it
		if lines.size_hint().1.is_none() {
			print!("Enter dice notation: ");
			io::stdout().flush().unwrap();
		}

		// Grab the first line available from stdin
		lines.next().unwrap().unwrap()
	};

	// Whitespace is friendly when typing "3d10 + 2" but is not part of the grammar
	let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();

	match fortuna::parse::notation().parse(&cleaned).into_result() {
		Ok(notation) => {
			let result = Limit::default()
				.check(&notation)
				.and_then(|()| FastRand::default().throw_labeled(&notation, &input));

			match result {
				Ok(outcome) => println!("{outcome}"),
				Err(roll_err) => {
					eprintln!("Error: {roll_err}");
					process::exit(1);
				}
			}
		}
		Err(parse_errs) => {
			for err in parse_errs {
				Report::build(ReportKind::Error, ("notation", err.span().into_range()))
					.with_message("Invalid dice notation")
					.with_label(
						Label::new(("notation", err.span().into_range()))
							.with_message(err.to_string())
							.with_color(Color::Red),
					)
					.with_help("try something like \"3d10+2\"")
					.finish()
					.eprint(("notation", Source::from(cleaned.clone())))
					.unwrap();
			}
			process::exit(1);
		}
	};
}

#[cfg(not(feature = "build-binary"))]
fn main() {
	println!("Nothing to do since the build-binary feature is disabled.")
}
