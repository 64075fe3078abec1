// Copyright (c) 2023 Bastiaan Marinus van de Weerd

use std::collections::{BTreeSet, HashMap};
use crate::grid::{Grid, Pos};


struct PartNumber {
	value: u32,
	/// Cells around the number, excluding its own digits.
	surroundings: BTreeSet<Pos>,
}

fn is_symbol(c: char) -> bool {
	c != '.' && !c.is_ascii_digit()
}

fn part_numbers(schematic: &Grid<char>) -> Vec<PartNumber> {
	let mut numbers = Vec::new();
	for (y, row) in schematic.rows().enumerate() {
		let mut x = 0;
		while x < row.len() {
			if !row[x].is_ascii_digit() { x += 1; continue }
			let start = x;
			let mut value = 0;
			while let Some(digit) = row.get(x).and_then(|c| c.to_digit(10)) {
				value = value * 10 + digit;
				x += 1;
			}
			let surroundings = (start..x)
				.flat_map(|x| schematic.neighbors8((x, y)))
				.filter(|&(nx, ny)| ny != y || nx < start || nx >= x)
				.collect();
			numbers.push(PartNumber { value, surroundings });
		}
	}
	numbers
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u32> {
	let schematic = Grid::try_from_str_with(input, Some)?;
	Ok(part_numbers(&schematic).iter()
		.filter(|number| number.surroundings.iter().any(|&pos| is_symbol(schematic[pos])))
		.map(|number| number.value)
		.sum())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u32> {
	let schematic = Grid::try_from_str_with(input, Some)?;
	let mut gears = HashMap::<Pos, Vec<u32>>::new();
	for number in part_numbers(&schematic) {
		for &pos in number.surroundings.iter().filter(|&&pos| schematic[pos] == '*') {
			gears.entry(pos).or_default().push(number.value);
		}
	}
	Ok(gears.values()
		.filter(|values| values.len() == 2)
		.map(|values| values[0] * values[1])
		.sum())
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		467..114..
		...*......
		..35..633.
		......#...
		617*......
		.....+.58.
		..592.....
		......755.
		...$.*....
		.664.598..
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 4361);
		assert_eq!(part2(INPUT).unwrap(), 467835);
		let schematic = Grid::try_from_str_with("12.\n..3", Some).unwrap();
		let numbers = part_numbers(&schematic);
		assert_eq!(numbers.iter().map(|n| n.value).collect::<Vec<_>>(), [12, 3]);
		assert_eq!(numbers[0].surroundings.len(), 4);
	}
}
