// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use anyhow::Context as _;


/// Crates per stack, bottom first.
type Stacks = Vec<Vec<char>>;

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Move { count: usize, from: usize, to: usize }

#[derive(Debug, thiserror::Error)]
enum MoveError {
	#[error("stack {0} does not exist")]
	Stack(usize),
	#[error("stack {stack} holds fewer than {count} crates")]
	Underflow { stack: usize, count: usize },
}

/// Applies `mv`, moving all crates at once if `AT_ONCE` or else one by one.
fn apply<const AT_ONCE: bool>(stacks: &mut Stacks, mv: Move) -> Result<(), MoveError> {
	for stack in [mv.from, mv.to] {
		if stack == 0 || stack > stacks.len() { return Err(MoveError::Stack(stack)) }
	}
	let from = &mut stacks[mv.from - 1];
	let split = from.len().checked_sub(mv.count)
		.ok_or(MoveError::Underflow { stack: mv.from, count: mv.count })?;
	if mv.from == mv.to { return Ok(()) }
	let mut moved = from.split_off(split);
	if !AT_ONCE { moved.reverse() }
	stacks[mv.to - 1].extend(moved);
	Ok(())
}

fn part_impl<const AT_ONCE: bool>(input: &str) -> anyhow::Result<String> {
	let (mut stacks, moves) = parsing::try_procedure_from_str(input)?;
	for (i, &mv) in moves.iter().enumerate() {
		apply::<AT_ONCE>(&mut stacks, mv)
			.with_context(|| format!("invalid move #{}", i + 1))?;
	}
	tracing::debug!(?stacks, "rearranged");
	Ok(stacks.iter().filter_map(|stack| stack.last()).collect())
}

pub(crate) fn part1(input: &str) -> anyhow::Result<String> {
	part_impl::<false>(input)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<String> {
	part_impl::<true>(input)
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Move, Stacks};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum ProcedureError {
		#[error("expected the drawing and the moves separated by a blank line")]
		Format,
		#[error("drawing lacks stack numbers")]
		Numbers,
		#[error("invalid crate {found:?} on line {line}")]
		Crate { line: usize, found: String },
		#[error("expected `move N from A to B` on line {line}")]
		Move { line: usize },
		#[error("invalid number on line {line}")]
		Number { line: usize, source: ParseIntError },
	}

	fn try_stacks_from_lines(lines: &[&str]) -> Result<Stacks, ProcedureError> {
		let (numbers, drawing) = lines.split_last().ok_or(ProcedureError::Numbers)?;
		let count = numbers.split_whitespace().count();
		if count == 0 { return Err(ProcedureError::Numbers) }
		let mut stacks = vec![Vec::new(); count];
		for (l, line) in drawing.iter().enumerate().rev() {
			let chars = line.chars().collect::<Vec<_>>();
			for (i, cell) in chars.chunks(4).enumerate() {
				match cell {
					[' ', ' ', ' ', ..] => (),
					['[', c @ 'A'..='Z', ']', ..] if i < count => stacks[i].push(*c),
					_ => return Err(ProcedureError::Crate { line: l + 1, found: cell.iter().collect() }),
				}
			}
		}
		Ok(stacks)
	}

	fn try_move_from_str(s: &str, line: usize) -> Result<Move, ProcedureError> {
		let words = s.split_whitespace().collect::<Vec<_>>();
		let &["move", count, "from", from, "to", to] = &words[..] else {
			return Err(ProcedureError::Move { line })
		};
		let number = |s: &str| s.parse::<usize>().map_err(|e| ProcedureError::Number { line, source: e });
		Ok(Move { count: number(count)?, from: number(from)?, to: number(to)? })
	}

	pub(super) fn try_procedure_from_str(s: &str) -> Result<(Stacks, Vec<Move>), ProcedureError> {
		let lines = s.lines().map(|line| line.trim_end()).collect::<Vec<_>>();
		let blank = lines.iter().position(|line| line.is_empty()).ok_or(ProcedureError::Format)?;
		let stacks = try_stacks_from_lines(&lines[..blank])?;
		let moves = lines.iter()
			.enumerate()
			.skip(blank + 1)
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| try_move_from_str(line, l + 1))
			.collect::<Result<_, _>>()?;
		Ok((stacks, moves))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = concat!(
		"    [D]    \n",
		"[N] [C]    \n",
		"[Z] [M] [P]\n",
		" 1   2   3 \n",
		"\n",
		"move 1 from 2 to 1\n",
		"move 3 from 1 to 3\n",
		"move 2 from 2 to 1\n",
		"move 1 from 1 to 2\n",
	);

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), "CMZ");
		assert_eq!(part2(INPUT).unwrap(), "MCD");
		let (stacks, moves) = parsing::try_procedure_from_str(INPUT).unwrap();
		assert_eq!(stacks, [vec!['Z', 'N'], vec!['M', 'C', 'D'], vec!['P']]);
		assert_eq!(moves[1], Move { count: 3, from: 1, to: 3 });
		assert!(part1(&INPUT.replace("move 3", "move 4")).is_err());

		let mut stacks = vec![vec!['C', 'B', 'A']];
		apply::<false>(&mut stacks, Move { count: 2, from: 1, to: 1 }).unwrap();
		assert_eq!(stacks, [vec!['C', 'B', 'A']]);
		assert!(apply::<true>(&mut stacks, Move { count: 4, from: 1, to: 1 }).is_err());
	}
}
