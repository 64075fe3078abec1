// Copyright (c) 2023 Bastiaan Marinus van de Weerd

use crate::grid::{Grid, Pos};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Direction { North, East, South, West }

impl Direction {
	const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

	fn offset(self) -> (isize, isize) {
		match self {
			Direction::North => (0, -1),
			Direction::East => (1, 0),
			Direction::South => (0, 1),
			Direction::West => (-1, 0),
		}
	}

	fn opposite(self) -> Self {
		Self::ALL[(self as usize + 2) % 4]
	}
}

#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
enum Tile {
	Ground,
	Start,
	Pipe(Direction, Direction),
}

impl Tile {
	fn connects(self, direction: Direction) -> bool {
		matches!(self, Tile::Pipe(a, b) if a == direction || b == direction)
	}
}

/// Tile positions along the loop through the start, the start first.
fn main_loop(tiles: &Grid<Tile>) -> anyhow::Result<Vec<Pos>> {
	let start = tiles.iter()
		.find_map(|(pos, &tile)| (tile == Tile::Start).then_some(pos))
		.ok_or_else(|| anyhow::anyhow!("no start tile"))?;
	let mut heading = Direction::ALL.into_iter()
		.find(|&d| tiles.offset(start, d.offset()).map_or(false, |pos| tiles[pos].connects(d.opposite())))
		.ok_or_else(|| anyhow::anyhow!("no pipe connects to the start"))?;

	let mut path = vec![start];
	let mut pos = start;
	loop {
		pos = tiles.offset(pos, heading.offset())
			.ok_or_else(|| anyhow::anyhow!("loop leaves the field at {pos:?}"))?;
		let came_from = heading.opposite();
		heading = match tiles[pos] {
			Tile::Start => break,
			Tile::Pipe(a, b) if a == came_from => b,
			Tile::Pipe(a, b) if b == came_from => a,
			_ => anyhow::bail!("loop is broken at {pos:?}"),
		};
		path.push(pos);
	}
	Ok(path)
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	let tiles = parsing::try_tiles_from_str(input)?;
	Ok(main_loop(&tiles)?.len() / 2)
}


/// Counts enclosed tiles from the loop's area (shoelace formula) and its
/// boundary length (Pick's theorem).
pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	let tiles = parsing::try_tiles_from_str(input)?;
	let path = main_loop(&tiles)?;
	let double_area = path.iter()
		.zip(path.iter().cycle().skip(1))
		.map(|(&(x0, y0), &(x1, y1))| (x0 * y1) as i64 - (x1 * y0) as i64)
		.sum::<i64>()
		.unsigned_abs() as usize;
	Ok((double_area + 2).saturating_sub(path.len()) / 2)
}


mod parsing {
	use crate::grid::{Grid, GridError};
	use super::{Direction::*, Tile};

	pub(super) fn try_tiles_from_str(s: &str) -> Result<Grid<Tile>, GridError> {
		Grid::try_from_str_with(s, |c| Some(match c {
			'.' => Tile::Ground,
			'S' => Tile::Start,
			'|' => Tile::Pipe(North, South),
			'-' => Tile::Pipe(East, West),
			'L' => Tile::Pipe(North, East),
			'J' => Tile::Pipe(North, West),
			'7' => Tile::Pipe(South, West),
			'F' => Tile::Pipe(South, East),
			_ => return None,
		}))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUTS: [&str; 3] = [
		indoc::indoc! { "
			.....
			.S-7.
			.|.|.
			.L-J.
			.....
		" },
		indoc::indoc! { "
			..F7.
			.FJ|.
			SJ.L7
			|F--J
			LJ...
		" },
		indoc::indoc! { "
			...........
			.S-------7.
			.|F-----7|.
			.||.....||.
			.||.....||.
			.|L-7.F-J|.
			.|..|.|..|.
			.L--J.L--J.
			...........
		" },
	];

	#[test]
	fn tests() {
		assert_eq!(part1(INPUTS[0]).unwrap(), 4);
		assert_eq!(part1(INPUTS[1]).unwrap(), 8);
		assert_eq!(part2(INPUTS[0]).unwrap(), 1);
		assert_eq!(part2(INPUTS[2]).unwrap(), 4);
		assert!(part1(".....\n.S-7.\n.|.|.\n.L.J.\n.....").is_err());
		assert!(part1("..\n..").is_err());
	}
}
