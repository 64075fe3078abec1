// Copyright (c) 2021 Bastiaan Marinus van de Weerd

use crate::grid::Grid;


const FLASH_LEVEL: u8 = 10;
const MAX_STEPS: usize = 100_000;

/// Advances the energy levels by one step; returns the number of flashes.
fn step(levels: &mut Grid<u8>) -> usize {
	let mut flashing = Vec::new();
	for pos in levels.positions() {
		levels[pos] += 1;
		if levels[pos] == FLASH_LEVEL { flashing.push(pos) }
	}
	while let Some(pos) = flashing.pop() {
		for neighbor in levels.neighbors8(pos).collect::<Vec<_>>() {
			levels[neighbor] += 1;
			if levels[neighbor] == FLASH_LEVEL { flashing.push(neighbor) }
		}
	}
	let mut flashes = 0;
	for level in levels.values_mut().filter(|level| **level >= FLASH_LEVEL) {
		*level = 0;
		flashes += 1;
	}
	flashes
}


fn part1_impl<const N: usize>(input: &str) -> anyhow::Result<usize> {
	let mut levels = Grid::try_digits_from_str(input)?;
	Ok((0..N).map(|_| step(&mut levels)).sum())
}

pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	part1_impl::<100>(input)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	let mut levels = Grid::try_digits_from_str(input)?;
	for steps in 1..=MAX_STEPS {
		if step(&mut levels) == levels.len() { return Ok(steps) }
	}
	anyhow::bail!("octopuses did not synchronize within {MAX_STEPS} steps")
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		5483143223
		2745854711
		5264556173
		6141336146
		6357385478
		4167524645
		2176841721
		6882881134
		4846848554
		5283751526
	" };

	#[test]
	fn tests() {
		assert_eq!(part1_impl::<10>(INPUT).unwrap(), 204);
		assert_eq!(part1(INPUT).unwrap(), 1656);
		assert_eq!(part2(INPUT).unwrap(), 195);
	}
}
