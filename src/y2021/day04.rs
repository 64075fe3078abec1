// Copyright (c) 2021 Bastiaan Marinus van de Weerd

use anyhow::Context as _;


const SIZE: usize = 5;

#[derive(Clone)]
#[cfg_attr(test, derive(Debug))]
struct Board {
	numbers: [[u32; SIZE]; SIZE],
	marked: [[bool; SIZE]; SIZE],
}

impl Board {
	fn new(numbers: [[u32; SIZE]; SIZE]) -> Self {
		Board { numbers, marked: [[false; SIZE]; SIZE] }
	}

	/// Marks `number`; returns whether that completed a row or a column.
	fn mark(&mut self, number: u32) -> bool {
		let mut completed = false;
		for r in 0..SIZE {
			for c in 0..SIZE {
				if self.numbers[r][c] != number { continue }
				self.marked[r][c] = true;
				completed |= self.marked[r].iter().all(|&m| m)
					|| (0..SIZE).all(|r| self.marked[r][c]);
			}
		}
		completed
	}

	fn unmarked_sum(&self) -> u32 {
		self.numbers.iter().flatten()
			.zip(self.marked.iter().flatten())
			.filter(|(_, &marked)| !marked)
			.map(|(&number, _)| number)
			.sum()
	}
}

struct Game {
	draws: Vec<u32>,
	boards: Vec<Board>,
}

impl Game {
	/// Scores of the boards, in the order they win.
	fn winning_scores(mut self) -> Vec<u32> {
		let mut scores = Vec::with_capacity(self.boards.len());
		for draw in self.draws {
			self.boards.retain_mut(|board| {
				if !board.mark(draw) { return true }
				let score = board.unmarked_sum() * draw;
				tracing::debug!(draw, score, "board won");
				scores.push(score);
				false
			});
			if self.boards.is_empty() { break }
		}
		scores
	}
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u32> {
	let game = parsing::try_game_from_str(input)?;
	game.winning_scores().first().copied().context("no board ever wins")
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u32> {
	let game = parsing::try_game_from_str(input)?;
	game.winning_scores().last().copied().context("no board ever wins")
}


mod parsing {
	use std::num::ParseIntError;
	use itertools::Itertools as _;
	use super::{Board, Game, SIZE};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum GameError {
		#[error("missing draws")]
		Empty,
		#[error("invalid draw")]
		Draw(#[source] ParseIntError),
		#[error("invalid number on line {line}")]
		Number { line: usize, source: ParseIntError },
		#[error("line {line} has {found} numbers, expected 5")]
		Row { line: usize, found: usize },
		#[error("board ending on line {line} has {found} rows, expected 5")]
		Board { line: usize, found: usize },
	}

	fn try_row_from_str(l: usize, s: &str) -> Result<[u32; SIZE], GameError> {
		let numbers = s.split_whitespace()
			.map(|n| n.parse().map_err(|e| GameError::Number { line: l + 1, source: e }))
			.collect::<Result<Vec<u32>, _>>()?;
		let found = numbers.len();
		numbers.try_into().map_err(|_| GameError::Row { line: l + 1, found })
	}

	pub(super) fn try_game_from_str(s: &str) -> Result<Game, GameError> {
		let mut lines = s.lines().enumerate();
		let draws = lines.next()
			.ok_or(GameError::Empty)?.1
			.trim()
			.split(',')
			.map(|n| n.parse().map_err(GameError::Draw))
			.collect::<Result<Vec<_>, _>>()?;

		let mut boards = Vec::new();
		let rows = lines.filter(|(_, line)| !line.trim().is_empty());
		for chunk in &rows.chunks(SIZE) {
			let rows = chunk
				.map(|(l, line)| try_row_from_str(l, line).map(|row| (l, row)))
				.collect::<Result<Vec<_>, _>>()?;
			let (line, found) = (rows.last().map_or(0, |&(l, _)| l + 1), rows.len());
			let numbers = rows.into_iter().map(|(_, row)| row).collect::<Vec<_>>()
				.try_into().map_err(|_| GameError::Board { line, found })?;
			boards.push(Board::new(numbers));
		}
		Ok(Game { draws, boards })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

		22 13 17 11  0
		 8  2 23  4 24
		21  9 14 16  7
		 6 10  3 18  5
		 1 12 20 15 19

		 3 15  0  2 22
		 9 18 13 17  5
		19  8  7 25 23
		20 11 10 24  4
		14 21 16 12  6

		14 21 17 24  4
		10 16 15  9 19
		18  8 23 26 20
		22 11 13  6  5
		 2  0 12  3  7
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 4512);
		assert_eq!(part2(INPUT).unwrap(), 1924);
		assert!(part1(&INPUT[..INPUT.len() - 16]).is_err());
	}
}
