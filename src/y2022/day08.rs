// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::grid::{Grid, Pos, OFFSETS4};


/// Positions from `pos` (exclusive) towards the edge in direction `offset`.
fn line_of_sight(heights: &Grid<u8>, pos: Pos, offset: (isize, isize)) -> impl Iterator<Item = Pos> + '_ {
	std::iter::successors(heights.offset(pos, offset), move |&p| heights.offset(p, offset))
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	let heights = Grid::try_digits_from_str(input)?;
	Ok(heights.positions()
		.filter(|&pos| OFFSETS4.into_iter()
			.any(|offset| line_of_sight(&heights, pos, offset).all(|p| heights[p] < heights[pos])))
		.count())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	let heights = Grid::try_digits_from_str(input)?;
	let scenic_score = |pos: Pos| OFFSETS4.into_iter()
		.map(|offset| {
			let mut distance = 0;
			for p in line_of_sight(&heights, pos, offset) {
				distance += 1;
				if heights[p] >= heights[pos] { break }
			}
			distance
		})
		.product::<usize>();
	Ok(heights.positions().map(scenic_score).max().unwrap_or(0))
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		30373
		25512
		65332
		33549
		35390
	" };

	assert_eq!(part1(INPUT).unwrap(), 21);
	assert_eq!(part2(INPUT).unwrap(), 8);
}
