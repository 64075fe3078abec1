// Copyright (c) 2024 Bastiaan Marinus van de Weerd

use crate::grid::{Grid, Pos, OFFSETS8};


/// Whether `word` reads from `pos` onwards in the direction of `offset`.
fn reads(letters: &Grid<char>, pos: Pos, offset: (isize, isize), word: &str) -> bool {
	let mut pos = Some(pos);
	word.chars().all(|c| match pos {
		Some(p) if letters[p] == c => {
			pos = letters.offset(p, offset);
			true
		}
		_ => false,
	})
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	let letters = Grid::try_from_str_with(input, Some)?;
	Ok(letters.positions()
		.map(|pos| OFFSETS8.into_iter().filter(|&offset| reads(&letters, pos, offset, "XMAS")).count())
		.sum())
}


/// Counts `MAS` crossing itself diagonally on an `A`, either way round.
pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	let letters = Grid::try_from_str_with(input, Some)?;
	let diagonal = |center: Pos, (dx, dy): (isize, isize)| {
		let Some(start) = letters.offset(center, (-dx, -dy)) else { return false };
		reads(&letters, start, (dx, dy), "MAS") || reads(&letters, start, (dx, dy), "SAM")
	};
	Ok(letters.positions()
		.filter(|&pos| letters[pos] == 'A' && diagonal(pos, (1, 1)) && diagonal(pos, (1, -1)))
		.count())
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		MMMSXXMASM
		MSAMXMSMSA
		AMXSXMAAMM
		MSAMASMSMX
		XMASAMXAMM
		XXAMMXXAMA
		SMSMSASXSS
		SAXAMASAAA
		MAMMMXMMMM
		MXMXAXMASX
	" };

	assert_eq!(part1(INPUT).unwrap(), 18);
	assert_eq!(part2(INPUT).unwrap(), 9);
	assert_eq!(part1("XMAS\nMM..\nA.A.\nS..S").unwrap(), 3);
}
