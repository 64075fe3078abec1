// Copyright (c) 2021 Bastiaan Marinus van de Weerd

use crate::grid::{Grid, Pos};


const PEAK: u8 = 9;

fn low_points(heights: &Grid<u8>) -> impl Iterator<Item = Pos> + '_ {
	heights.positions()
		.filter(|&pos| heights.neighbors4(pos).all(|n| heights[n] > heights[pos]))
}

/// Flood-fills from a low point up to, but excluding, the peaks around it.
fn basin_size(heights: &Grid<u8>, low_point: Pos, visited: &mut Grid<bool>) -> usize {
	let mut size = 0;
	let mut stack = vec![low_point];
	while let Some(pos) = stack.pop() {
		if visited[pos] || heights[pos] == PEAK { continue }
		visited[pos] = true;
		size += 1;
		stack.extend(heights.neighbors4(pos));
	}
	size
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u32> {
	let heights = Grid::try_digits_from_str(input)?;
	Ok(low_points(&heights).map(|pos| heights[pos] as u32 + 1).sum())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	let heights = Grid::try_digits_from_str(input)?;
	let mut visited = Grid::try_from_str_with(input, |_| Some(false))?;
	let mut sizes = low_points(&heights)
		.map(|pos| basin_size(&heights, pos, &mut visited))
		.collect::<Vec<_>>();
	anyhow::ensure!(sizes.len() >= 3, "fewer than three basins");
	sizes.sort_unstable_by(|a, b| b.cmp(a));
	Ok(sizes[..3].iter().product())
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		2199943210
		3987894921
		9856789892
		8767896789
		9899965678
	" };

	assert_eq!(part1(INPUT).unwrap(), 15);
	assert_eq!(part2(INPUT).unwrap(), 1134);
}
