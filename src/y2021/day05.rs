// Copyright (c) 2021 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


type Point = (i32, i32);

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Line { from: Point, to: Point }

impl Line {
	fn is_axis_aligned(&self) -> bool {
		self.from.0 == self.to.0 || self.from.1 == self.to.1
	}

	/// **Note**: Assumes the line is horizontal, vertical, or diagonal at 45°.
	fn points(&self) -> impl Iterator<Item = Point> {
		let (dx, dy) = ((self.to.0 - self.from.0).signum(), (self.to.1 - self.from.1).signum());
		let len = (self.to.0 - self.from.0).abs().max((self.to.1 - self.from.1).abs());
		let from = self.from;
		(0..=len).map(move |i| (from.0 + i * dx, from.1 + i * dy))
	}
}

fn count_overlaps<'a>(lines: impl Iterator<Item = &'a Line>) -> usize {
	let mut covered = HashMap::<Point, usize>::new();
	for point in lines.flat_map(Line::points) {
		*covered.entry(point).or_default() += 1;
	}
	covered.values().filter(|&&n| n > 1).count()
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	let lines = parsing::try_lines_from_str(input)?;
	Ok(count_overlaps(lines.iter().filter(|line| line.is_axis_aligned())))
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	let lines = parsing::try_lines_from_str(input)?;
	Ok(count_overlaps(lines.iter()))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Line, Point};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum LineError {
		#[error("expected `x1,y1 -> x2,y2`")]
		Format,
		#[error("invalid coordinate")]
		Coordinate(#[from] ParseIntError),
		#[error("not horizontal, vertical, or diagonal")]
		Slope,
	}

	fn try_point_from_str(s: &str) -> Result<Point, LineError> {
		let (x, y) = s.trim().split_once(',').ok_or(LineError::Format)?;
		Ok((x.parse()?, y.parse()?))
	}

	impl FromStr for Line {
		type Err = LineError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (from, to) = s.split_once("->").ok_or(LineError::Format)?;
			let line = Line { from: try_point_from_str(from)?, to: try_point_from_str(to)? };
			let (dx, dy) = (line.to.0 - line.from.0, line.to.1 - line.from.1);
			if dx != 0 && dy != 0 && dx.abs() != dy.abs() { return Err(LineError::Slope) }
			Ok(line)
		}
	}

	#[derive(Debug, thiserror::Error)]
	#[error("invalid line of vents on line {line}")]
	pub(super) struct LinesError { line: usize, source: LineError }

	pub(super) fn try_lines_from_str(s: &str) -> Result<Vec<Line>, LinesError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| LinesError { line: l + 1, source: e }))
			.collect()
	}

	#[test]
	fn tests() {
		assert_eq!("0,9 -> 5,9".parse::<Line>().unwrap(), Line { from: (0, 9), to: (5, 9) });
		assert!(matches!("0,9 -> 5,7".parse::<Line>(), Err(LineError::Slope)));
		assert!(matches!("0,9 5,9".parse::<Line>(), Err(LineError::Format)));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		0,9 -> 5,9
		8,0 -> 0,8
		9,4 -> 3,4
		2,2 -> 2,1
		7,0 -> 7,4
		6,4 -> 2,0
		0,9 -> 2,9
		3,4 -> 1,4
		0,0 -> 8,8
		5,5 -> 8,2
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 5);
		assert_eq!(part2(INPUT).unwrap(), 12);
	}
}
