// Copyright (c) 2021 Bastiaan Marinus van de Weerd

use anyhow::Context as _;


fn total_fuel(positions: &[i64], target: i64, cost: impl Fn(i64) -> i64) -> i64 {
	positions.iter().map(|&p| cost((p - target).abs())).sum()
}


pub(crate) fn part1(input: &str) -> anyhow::Result<i64> {
	let mut positions = parsing::try_positions_from_str(input)?;
	positions.sort_unstable();
	let median = *positions.get(positions.len() / 2).context("no crabs")?;
	Ok(total_fuel(&positions, median, |distance| distance))
}


/// The cheapest position for triangular costs lies within half a step of
/// the mean, so trying the mean rounded both ways suffices.
pub(crate) fn part2(input: &str) -> anyhow::Result<i64> {
	let positions = parsing::try_positions_from_str(input)?;
	anyhow::ensure!(!positions.is_empty(), "no crabs");
	let sum = positions.iter().sum::<i64>();
	let mean = num_integer::Integer::div_floor(&sum, &(positions.len() as i64));
	let triangular = |distance: i64| distance * (distance + 1) / 2;
	Ok([mean, mean + 1].into_iter()
		.map(|target| total_fuel(&positions, target, triangular))
		.min()
		.unwrap_or_default())
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	#[error("invalid position #{index}")]
	pub(super) struct PositionsError { index: usize, source: ParseIntError }

	pub(super) fn try_positions_from_str(s: &str) -> Result<Vec<i64>, PositionsError> {
		s.trim()
			.split(',')
			.enumerate()
			.map(|(i, p)| p.trim().parse()
				.map_err(|e| PositionsError { index: i + 1, source: e }))
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = "16,1,2,0,4,2,7,1,2,14\n";

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 37);
		assert_eq!(part2(INPUT).unwrap(), 168);
		assert_eq!(part2("0,1").unwrap(), 1);
	}
}
