// Copyright (c) 2023 Bastiaan Marinus van de Weerd

use crate::grid::Grid;


/// Maps every row or column index to its coordinate once empty ones are
/// `factor` times as wide.
fn expanded_coordinates(occupied: &[bool], factor: u64) -> Vec<u64> {
	occupied.iter()
		.scan(0, |coordinate, &occupied| {
			let current = *coordinate;
			*coordinate += if occupied { 1 } else { factor };
			Some(current)
		})
		.collect()
}

/// Sums the distances between every pair of galaxies along one axis, given
/// their sorted coordinates.
fn pairwise_distance_sum(sorted: &[u64]) -> u64 {
	let mut preceding = 0;
	sorted.iter()
		.enumerate()
		.map(|(i, &c)| {
			let distances = c * i as u64 - preceding;
			preceding += c;
			distances
		})
		.sum()
}

fn part_impl<const FACTOR: u64>(input: &str) -> anyhow::Result<u64> {
	let image = Grid::try_from_str_with(input, |c| match c {
		'#' => Some(true),
		'.' => Some(false),
		_ => None,
	})?;
	let mut occupied_columns = vec![false; image.width()];
	let mut occupied_rows = vec![false; image.height()];
	for ((x, y), _) in image.iter().filter(|(_, &galaxy)| galaxy) {
		occupied_columns[x] = true;
		occupied_rows[y] = true;
	}
	let xs = expanded_coordinates(&occupied_columns, FACTOR);
	let ys = expanded_coordinates(&occupied_rows, FACTOR);

	let (mut galaxy_xs, galaxy_ys): (Vec<_>, Vec<_>) = image.iter()
		.filter(|(_, &galaxy)| galaxy)
		.map(|((x, y), _)| (xs[x], ys[y]))
		.unzip();
	// Row-major iteration already sorts by y.
	galaxy_xs.sort_unstable();
	tracing::debug!(galaxies = galaxy_xs.len(), "expanded");
	Ok(pairwise_distance_sum(&galaxy_xs) + pairwise_distance_sum(&galaxy_ys))
}

pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	part_impl::<2>(input)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	part_impl::<1_000_000>(input)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		...#......
		.......#..
		#.........
		..........
		......#...
		.#........
		.........#
		..........
		.......#..
		#...#.....
	" };

	assert_eq!(part1(INPUT).unwrap(), 374);
	assert_eq!(part_impl::<10>(INPUT).unwrap(), 1030);
	assert_eq!(part_impl::<100>(INPUT).unwrap(), 8410);
	assert_eq!(pairwise_distance_sum(&[1, 4, 6]), 3 + 5 + 2);
}
