// Copyright (c) 2022 Bastiaan Marinus van de Weerd

#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
enum Shape { Rock, Paper, Scissors }

impl Shape {
	fn from_index(index: u8) -> Self {
		match index % 3 {
			0 => Shape::Rock,
			1 => Shape::Paper,
			_ => Shape::Scissors,
		}
	}

	fn index(self) -> u8 {
		self as u8
	}

	/// The shape this one defeats.
	fn defeats(self) -> Self {
		Self::from_index(self.index() + 2)
	}

	fn defeated_by(self) -> Self {
		Self::from_index(self.index() + 1)
	}

	fn score(self) -> u64 {
		self.index() as u64 + 1
	}
}

#[derive(Clone, Copy)]
enum Outcome { Loss, Draw, Win }

impl Outcome {
	fn of(own: Shape, opponent: Shape) -> Self {
		if own == opponent { Outcome::Draw }
		else if own.defeats() == opponent { Outcome::Win }
		else { Outcome::Loss }
	}

	fn score(self) -> u64 {
		self as u64 * 3
	}
}

/// The opponent's shape and the second column, `X`, `Y` or `Z`, as 0 to 2.
type Round = (Shape, u8);


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	let rounds = parsing::try_rounds_from_str(input)?;
	Ok(rounds.iter()
		.map(|&(opponent, column)| {
			let own = Shape::from_index(column);
			own.score() + Outcome::of(own, opponent).score()
		})
		.sum())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	let rounds = parsing::try_rounds_from_str(input)?;
	Ok(rounds.iter()
		.map(|&(opponent, column)| {
			let own = match column {
				0 => opponent.defeats(),
				1 => opponent,
				_ => opponent.defeated_by(),
			};
			own.score() + Outcome::of(own, opponent).score()
		})
		.sum())
}


mod parsing {
	use super::{Round, Shape};

	#[derive(Debug, thiserror::Error)]
	#[error("expected `A`-`C`, a space and `X`-`Z` on line {line}, found {found:?}")]
	pub(super) struct RoundsError { line: usize, found: String }

	pub(super) fn try_rounds_from_str(s: &str) -> Result<Vec<Round>, RoundsError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| match line.trim().as_bytes() {
				&[opponent @ b'A'..=b'C', b' ', own @ b'X'..=b'Z'] =>
					Ok((Shape::from_index(opponent - b'A'), own - b'X')),
				_ => Err(RoundsError { line: l + 1, found: line.to_owned() }),
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		A Y
		B X
		C Z
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 15);
		assert_eq!(part2(INPUT).unwrap(), 12);
		assert_eq!(Shape::Rock.defeats(), Shape::Scissors);
		assert_eq!(Shape::Rock.defeated_by(), Shape::Paper);
		assert!(part1("A W").is_err());
	}
}
