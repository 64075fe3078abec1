// Copyright (c) 2025 Bastiaan Marinus van de Weerd

use std::ops::{Index, IndexMut};


/// `(x, y)`, with `y` growing downwards.
pub(crate) type Pos = (usize, usize);

pub(crate) const OFFSETS4: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
pub(crate) const OFFSETS8: [(isize, isize); 8] = [
	(-1, -1), (0, -1), (1, -1),
	(-1, 0), (1, 0),
	(-1, 1), (0, 1), (1, 1),
];


/// A rectangular, row-major grid of cells.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
pub(crate) struct Grid<T> {
	width: usize,
	cells: Vec<T>,
}

impl<T> Grid<T> {
	pub(crate) fn width(&self) -> usize {
		self.width
	}

	pub(crate) fn height(&self) -> usize {
		self.cells.len() / self.width
	}

	pub(crate) fn len(&self) -> usize {
		self.cells.len()
	}

	pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
		let width = self.width;
		(0..self.cells.len()).map(move |i| (i % width, i / width))
	}

	pub(crate) fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
		self.positions().zip(self.cells.iter())
	}

	pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
		self.cells.iter_mut()
	}

	pub(crate) fn rows(&self) -> impl Iterator<Item = &[T]> {
		self.cells.chunks(self.width)
	}

	/// The position `offset` away from `pos`, if it lies within the grid.
	pub(crate) fn offset(&self, (x, y): Pos, (dx, dy): (isize, isize)) -> Option<Pos> {
		let (x, y) = (x.checked_add_signed(dx)?, y.checked_add_signed(dy)?);
		(x < self.width && y < self.height()).then_some((x, y))
	}

	pub(crate) fn neighbors4(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
		OFFSETS4.into_iter().filter_map(move |offset| self.offset(pos, offset))
	}

	pub(crate) fn neighbors8(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
		OFFSETS8.into_iter().filter_map(move |offset| self.offset(pos, offset))
	}
}

impl<T> Index<Pos> for Grid<T> {
	type Output = T;
	fn index(&self, (x, y): Pos) -> &Self::Output {
		assert!(x < self.width, "column {x} out of bounds");
		&self.cells[y * self.width + x]
	}
}

impl<T> IndexMut<Pos> for Grid<T> {
	fn index_mut(&mut self, (x, y): Pos) -> &mut Self::Output {
		assert!(x < self.width, "column {x} out of bounds");
		&mut self.cells[y * self.width + x]
	}
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum GridError {
	#[error("empty grid")]
	Empty,
	#[error("line {line} is {found} wide, expected {expected}")]
	Ragged { line: usize, found: usize, expected: usize },
	#[error("invalid cell {found:?} at line {line}, column {column}")]
	Cell { line: usize, column: usize, found: char },
}

impl<T> Grid<T> {
	/// Parses one cell per character; blank lines are skipped.
	pub(crate) fn try_from_str_with<F>(s: &str, mut cell: F) -> Result<Self, GridError>
	where F: FnMut(char) -> Option<T> {
		let mut width = None;
		let mut cells = Vec::new();
		for (l, line) in s.lines().enumerate() {
			let line = line.trim_end();
			if line.is_empty() { continue }
			let mut found = 0;
			for (c, chr) in line.chars().enumerate() {
				let value = cell(chr).ok_or(GridError::Cell { line: l + 1, column: c + 1, found: chr })?;
				cells.push(value);
				found += 1;
			}
			match width {
				None => width = Some(found),
				Some(expected) if expected != found =>
					return Err(GridError::Ragged { line: l + 1, found, expected }),
				Some(_) => (),
			}
		}
		let width = width.ok_or(GridError::Empty)?;
		Ok(Grid { width, cells })
	}
}

impl Grid<u8> {
	/// Parses a grid of decimal digits.
	pub(crate) fn try_digits_from_str(s: &str) -> Result<Self, GridError> {
		Self::try_from_str_with(s, |c| c.to_digit(10).map(|d| d as u8))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parsing() {
		let grid = Grid::try_digits_from_str("123\n456\n").unwrap();
		assert_eq!((grid.width(), grid.height(), grid.len()), (3, 2, 6));
		assert_eq!(grid[(2, 1)], 6);
		assert_eq!(grid.offset((2, 1), (1, 0)), None);
		assert_eq!(grid.rows().nth(1).unwrap(), [4, 5, 6]);
		assert!(matches!(Grid::try_digits_from_str("12\n345"), Err(GridError::Ragged { line: 2, found: 3, expected: 2 })));
		assert!(matches!(Grid::try_digits_from_str("12\n3x"), Err(GridError::Cell { line: 2, column: 2, found: 'x' })));
		assert!(matches!(Grid::try_digits_from_str("\n"), Err(GridError::Empty)));
	}

	#[test]
	fn neighbors() {
		let grid = Grid::try_digits_from_str("123\n456\n789").unwrap();
		assert_eq!(grid.neighbors4((0, 0)).collect::<Vec<_>>(), [(1, 0), (0, 1)]);
		assert_eq!(grid.neighbors8((1, 1)).count(), 8);
		assert_eq!(grid.neighbors8((2, 2)).map(|p| grid[p]).collect::<Vec<_>>(), [5, 6, 8]);
		assert_eq!(grid.offset((1, 1), (1, -1)), Some((2, 0)));
		assert_eq!(grid.offset((1, 1), (2, 0)), None);
	}
}
