// Copyright (c) 2025 Bastiaan Marinus van de Weerd

use std::fmt;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Part { One, Two }

impl Part {
	pub(crate) const BOTH: [Part; 2] = [Part::One, Part::Two];
}

impl fmt::Display for Part {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Part::One => f.write_str("1"),
			Part::Two => f.write_str("2"),
		}
	}
}

impl TryFrom<u8> for Part {
	type Error = Error;
	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			1 => Ok(Part::One),
			2 => Ok(Part::Two),
			invalid => Err(Error::Part(invalid)),
		}
	}
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error("no solution available for {year} day {day}")]
	Unavailable { year: u16, day: u8 },
	#[error("there is no part {0}")]
	Part(u8),
	#[error("expected {expected:?}, got {found:?}")]
	Unexpected { expected: String, found: String },
}


/// Expands to the registry of solvers: every listed day module must
/// provide `part1` and `part2` taking the input text and returning an
/// `anyhow::Result` of something `Display`.
macro_rules! puzzles {
	( $( $year:literal => [ $( $day:literal ),* $(,)? ] ),* $(,)? ) => { paste::paste! {
		const AVAILABLE: &[(u16, u8)] = &[ $( $( ($year, $day), )* )* ];

		/// Runs `part` of the given day's solver on `input`, rendering its answer.
		pub(crate) fn solve(year: u16, day: u8, part: Part, input: &str) -> anyhow::Result<String> {
			match (year, day, part) {
				$( $(
					($year, $day, Part::One) => crate::[<y $year>]::[<day $day>]::part1(input)
						.map(|answer| answer.to_string()),
					($year, $day, Part::Two) => crate::[<y $year>]::[<day $day>]::part2(input)
						.map(|answer| answer.to_string()),
				)* )*
				_ => Err(Error::Unavailable { year, day }.into()),
			}
		}
	} };
}

puzzles! {
	2021 => [01, 02, 03, 04, 05, 06, 07, 08, 09, 10, 11, 12],
	2022 => [01, 02, 03, 04, 05, 06, 07, 08, 09, 10],
	2023 => [01, 02, 03, 04, 05, 06, 07, 08, 09, 10, 11, 15],
	2024 => [01, 02, 03, 04],
	2025 => [01, 02, 03, 04, 05, 06],
}


pub(crate) fn available() -> impl Iterator<Item = (u16, u8)> {
	AVAILABLE.iter().copied()
}

pub(crate) fn latest_year() -> u16 {
	AVAILABLE.iter().map(|&(year, _)| year).max().unwrap_or_default()
}

/// Compares an answer with an expected one, ignoring surrounding whitespace.
pub(crate) fn check(answer: &str, expected: &str) -> Result<(), Error> {
	if answer.trim() == expected.trim() { return Ok(()) }
	Err(Error::Unexpected { expected: expected.trim().to_owned(), found: answer.trim().to_owned() })
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn registry() {
		use itertools::Itertools as _;
		assert!(available().tuple_windows().all(|(a, b)| a < b));
		assert_eq!(available().count(), 44);
		assert_eq!(latest_year(), 2025);
		assert!(available().any(|p| p == (2023, 15)));
		assert!(!available().any(|p| p == (2023, 12)));
	}

	#[test]
	fn dispatch() {
		assert_eq!(solve(2024, 1, Part::One, "3 4\n4 3\n2 5\n1 3\n3 9\n3 3\n").unwrap(), "11");
		assert_eq!(solve(2024, 1, Part::Two, "3 4\n4 3\n2 5\n1 3\n3 9\n3 3\n").unwrap(), "31");
		assert!(matches!(
			solve(2023, 12, Part::One, "").unwrap_err().downcast_ref::<Error>(),
			Some(Error::Unavailable { year: 2023, day: 12 })));
		assert!(solve(2021, 1, Part::One, "12\nnope\n").is_err());
	}

	#[test]
	fn line_endings() {
		let cases = [
			(2021, 2, Part::Two, "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n", "900"),
			(2022, 5, Part::One, concat!(
				"    [D]    \n",
				"[N] [C]    \n",
				"[Z] [M] [P]\n",
				" 1   2   3 \n",
				"\n",
				"move 1 from 2 to 1\n",
				"move 3 from 1 to 3\n",
				"move 2 from 2 to 1\n",
				"move 1 from 1 to 2\n",
			), "CMZ"),
			(2023, 8, Part::One, "LLR\n\nAAA = (BBB, BBB)\nBBB = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)\n", "6"),
			(2024, 3, Part::Two, "mul(2,4)don't()\nmul(5,5)do()\nmul(8,5)\n", "48"),
			(2025, 6, Part::Two, concat!(
				"123 328  51 64 \n",
				" 45 64  387 23 \n",
				"  6 98  215 314\n",
				"*   +   *   +  \n",
			), "3263827"),
		];
		for (year, day, part, input, answer) in cases {
			assert_eq!(solve(year, day, part, input).unwrap(), answer);
			assert_eq!(solve(year, day, part, &input.replace('\n', "\r\n")).unwrap(), answer);
		}
	}

	#[test]
	fn parts() {
		assert_eq!(Part::try_from(1).unwrap(), Part::One);
		assert_eq!(Part::try_from(2).unwrap(), Part::Two);
		assert!(matches!(Part::try_from(3), Err(Error::Part(3))));
		assert_eq!(Part::Two.to_string(), "2");
	}

	#[test]
	fn checking() {
		assert!(check("42", " 42\n").is_ok());
		assert!(matches!(check("41", "42"), Err(Error::Unexpected { .. })));
	}
}
