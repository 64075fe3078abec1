// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::RangeInclusive;


type Pair = (RangeInclusive<u32>, RangeInclusive<u32>);

fn contains(a: &RangeInclusive<u32>, b: &RangeInclusive<u32>) -> bool {
	a.start() <= b.start() && b.end() <= a.end()
}

fn overlaps(a: &RangeInclusive<u32>, b: &RangeInclusive<u32>) -> bool {
	a.start() <= b.end() && b.start() <= a.end()
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	let pairs = parsing::try_pairs_from_str(input)?;
	Ok(pairs.iter().filter(|(a, b)| contains(a, b) || contains(b, a)).count())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	let pairs = parsing::try_pairs_from_str(input)?;
	Ok(pairs.iter().filter(|(a, b)| overlaps(a, b)).count())
}


mod parsing {
	use std::{num::ParseIntError, ops::RangeInclusive};
	use super::Pair;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum PairError {
		#[error("expected two ranges separated by `,`")]
		Format,
		#[error("expected a range like `2-4`")]
		Range,
		#[error("invalid section")]
		Section(#[from] ParseIntError),
		#[error("range {0} ends before it starts")]
		Reversed(String),
	}

	fn try_range_from_str(s: &str) -> Result<RangeInclusive<u32>, PairError> {
		let (start, end) = s.split_once('-').ok_or(PairError::Range)?;
		let (start, end) = (start.parse::<u32>()?, end.parse::<u32>()?);
		if end < start { return Err(PairError::Reversed(s.to_owned())) }
		Ok(start..=end)
	}

	#[derive(Debug, thiserror::Error)]
	#[error("invalid pair on line {line}")]
	pub(super) struct PairsError { line: usize, source: PairError }

	pub(super) fn try_pairs_from_str(s: &str) -> Result<Vec<Pair>, PairsError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| (l, line.trim()))
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| {
				let pair = line.split_once(',')
					.ok_or(PairError::Format)
					.and_then(|(a, b)| Ok((try_range_from_str(a)?, try_range_from_str(b)?)));
				pair.map_err(|e| PairsError { line: l + 1, source: e })
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		2-4,6-8
		2-3,4-5
		5-7,7-9
		2-8,3-7
		6-6,4-6
		2-6,4-8
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 2);
		assert_eq!(part2(INPUT).unwrap(), 4);
		assert!(part1("4-2,1-1").is_err());
		assert!(part1("1-2").is_err());
	}
}
