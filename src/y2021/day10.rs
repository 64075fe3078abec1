// Copyright (c) 2021 Bastiaan Marinus van de Weerd

use anyhow::Context as _;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Bracket { Round, Square, Curly, Angle }

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Token { Open(Bracket), Close(Bracket) }

#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Status {
	/// The first closing bracket that did not match.
	Corrupted(Bracket),
	/// The brackets left open, innermost last.
	Incomplete(Vec<Bracket>),
	Complete,
}

fn status(line: &[Token]) -> Status {
	let mut open = Vec::new();
	for &token in line {
		match token {
			Token::Open(bracket) => open.push(bracket),
			Token::Close(bracket) => if open.pop() != Some(bracket) {
				return Status::Corrupted(bracket)
			},
		}
	}
	if open.is_empty() { Status::Complete } else { Status::Incomplete(open) }
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	use Bracket::*;
	let lines = parsing::try_lines_from_str(input)?;
	Ok(lines.iter()
		.filter_map(|line| match status(line) {
			Status::Corrupted(bracket) => Some(bracket),
			_ => None,
		})
		.inspect(|bracket| tracing::debug!(?bracket, "corrupted line"))
		.map(|bracket| match bracket { Round => 3, Square => 57, Curly => 1197, Angle => 25137 })
		.sum())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	use Bracket::*;
	let lines = parsing::try_lines_from_str(input)?;
	let mut scores = lines.iter()
		.filter_map(|line| match status(line) {
			Status::Incomplete(open) => Some(open),
			_ => None,
		})
		.map(|open| open.iter().rev().fold(0, |score, bracket|
			score * 5 + match bracket { Round => 1, Square => 2, Curly => 3, Angle => 4 }))
		.collect::<Vec<_>>();
	scores.sort_unstable();
	scores.get(scores.len() / 2).copied().context("no incomplete lines")
}


mod parsing {
	use super::{Bracket::{self, *}, Token};

	#[derive(Debug, thiserror::Error)]
	#[error("invalid character {found:?} on line {line}, column {column}")]
	pub(super) struct LinesError { line: usize, column: usize, found: char }

	impl TryFrom<char> for Token {
		type Error = char;
		fn try_from(value: char) -> Result<Self, Self::Error> {
			let (open, bracket): (bool, Bracket) = match value {
				'(' => (true, Round),
				')' => (false, Round),
				'[' => (true, Square),
				']' => (false, Square),
				'{' => (true, Curly),
				'}' => (false, Curly),
				'<' => (true, Angle),
				'>' => (false, Angle),
				invalid => return Err(invalid),
			};
			Ok(if open { Token::Open(bracket) } else { Token::Close(bracket) })
		}
	}

	pub(super) fn try_lines_from_str(s: &str) -> Result<Vec<Vec<Token>>, LinesError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.trim_end().chars()
				.enumerate()
				.map(|(c, chr)| Token::try_from(chr)
					.map_err(|found| LinesError { line: l + 1, column: c + 1, found }))
				.collect::<Result<Vec<_>, _>>())
			.filter(|line| !matches!(line, Ok(tokens) if tokens.is_empty()))
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		[({(<(())[]>[[{[]{<()<>>
		[(()[<>])]({[<{<<[]>>(
		{([(<{}[<>[]}>{[]{[(<()>
		(((({<>}<{<{<>}{[]{[]{}
		[[<[([]))<([[{}[[()]]]
		[{[{({}]{}}([{[{{{}}([]
		{<[[]]>}<{[{[{[]{()[[[]
		[<(<(<(<{}))><([]([]()
		<{([([[(<>()){}]>(<<{{
		<{([{{}}[<[[[<>{}]]]>[]]
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 26397);
		assert_eq!(part2(INPUT).unwrap(), 288957);
		let line = parsing::try_lines_from_str("<([]){()}[{}])").unwrap();
		assert_eq!(status(&line[0]), Status::Corrupted(Bracket::Round));
		assert_eq!(status(&parsing::try_lines_from_str("[<>({}){}[([])<>]]").unwrap()[0]), Status::Complete);
		assert!(part1("(]x").is_err());
	}
}
