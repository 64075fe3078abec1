// Copyright (c) 2025 Bastiaan Marinus van de Weerd

use crate::grid::{Grid, Pos};


const MAX_CROWD: usize = 3;

/// Rolls that forklifts can reach: fewer than four rolls around them.
fn accessible(rolls: &Grid<bool>) -> Vec<Pos> {
	rolls.positions()
		.filter(|&pos| rolls[pos] && rolls.neighbors8(pos).filter(|&n| rolls[n]).count() <= MAX_CROWD)
		.collect()
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	let rolls = parsing::try_rolls_from_str(input)?;
	Ok(accessible(&rolls).len())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	let mut rolls = parsing::try_rolls_from_str(input)?;
	let mut removed = 0;
	loop {
		let batch = accessible(&rolls);
		if batch.is_empty() { break }
		tracing::debug!(count = batch.len(), "removing rolls");
		removed += batch.len();
		for pos in batch { rolls[pos] = false }
	}
	Ok(removed)
}


mod parsing {
	use crate::grid::{Grid, GridError};

	pub(super) fn try_rolls_from_str(s: &str) -> Result<Grid<bool>, GridError> {
		Grid::try_from_str_with(s, |c| match c {
			'@' => Some(true),
			'.' => Some(false),
			_ => None,
		})
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		..@@.@@@@.
		@@@.@.@.@@
		@@@@@.@.@@
		@.@@@@..@.
		@@.@@@@.@@
		.@@@@@@@.@
		.@.@.@.@@@
		@.@@@.@@@@
		.@@@@@@@@.
		@.@.@@@.@.
	" };

	assert_eq!(part1(INPUT).unwrap(), 13);
	assert_eq!(part2(INPUT).unwrap(), 43);
	assert!(part1("@x").is_err());
}
