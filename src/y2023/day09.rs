// Copyright (c) 2023 Bastiaan Marinus van de Weerd

use itertools::Itertools as _;


/// Next value of `history` by summing the last values of its differences.
fn extrapolate(history: &[i64]) -> i64 {
	let mut next = 0;
	let mut values = history.to_vec();
	while values.iter().any(|&v| v != 0) {
		next += values.last().copied().unwrap_or(0);
		values = values.iter().tuple_windows().map(|(a, b)| b - a).collect();
	}
	next
}


pub(crate) fn part1(input: &str) -> anyhow::Result<i64> {
	let histories = parsing::try_histories_from_str(input)?;
	Ok(histories.iter().map(|history| extrapolate(history)).sum())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<i64> {
	let mut histories = parsing::try_histories_from_str(input)?;
	Ok(histories.iter_mut()
		.map(|history| {
			history.reverse();
			extrapolate(history)
		})
		.sum())
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	#[error("invalid value on line {line}")]
	pub(super) struct HistoriesError { line: usize, source: ParseIntError }

	pub(super) fn try_histories_from_str(s: &str) -> Result<Vec<Vec<i64>>, HistoriesError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.split_whitespace()
				.map(str::parse)
				.collect::<Result<Vec<_>, _>>()
				.map_err(|e| HistoriesError { line: l + 1, source: e }))
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		0 3 6 9 12 15
		1 3 6 10 15 21
		10 13 16 21 30 45
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 114);
		assert_eq!(part2(INPUT).unwrap(), 2);
		assert_eq!(extrapolate(&[]), 0);
		assert!(part1("1 2 x").is_err());
	}
}
