// Copyright (c) 2021 Bastiaan Marinus van de Weerd

use itertools::Itertools as _;


fn count_increases(depths: impl Iterator<Item = u32>) -> usize {
	depths.tuple_windows().filter(|(prev, next)| next > prev).count()
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	let depths = parsing::try_depths_from_str(input)?;
	Ok(count_increases(depths.into_iter()))
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	let depths = parsing::try_depths_from_str(input)?;
	Ok(count_increases(depths.into_iter()
		.tuple_windows()
		.map(|(a, b, c)| a + b + c)))
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	#[error("invalid depth on line {line}")]
	pub(super) struct DepthsError { line: usize, source: ParseIntError }

	pub(super) fn try_depths_from_str(s: &str) -> Result<Vec<u32>, DepthsError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.trim().parse()
				.map_err(|e| DepthsError { line: l + 1, source: e }))
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		199
		200
		208
		210
		200
		207
		240
		269
		260
		263
	" };

	assert_eq!(part1(INPUT).unwrap(), 7);
	assert_eq!(part2(INPUT).unwrap(), 5);
	assert!(part1("199\n2x0\n").is_err());
}
