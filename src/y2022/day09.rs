// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;


type Knot = (i32, i32);

/// Moves `knot` one step towards `leader` if they no longer touch.
fn follow(knot: &mut Knot, leader: Knot) {
	let (dx, dy) = (leader.0 - knot.0, leader.1 - knot.1);
	if dx.abs() > 1 || dy.abs() > 1 {
		knot.0 += dx.signum();
		knot.1 += dy.signum();
	}
}

fn part_impl<const N: usize>(input: &str) -> anyhow::Result<usize> {
	let motions = parsing::try_motions_from_str(input)?;
	let mut rope = [(0, 0); N];
	let mut visited = HashSet::from([(0, 0)]);
	for ((dx, dy), steps) in motions {
		for _ in 0..steps {
			rope[0].0 += dx;
			rope[0].1 += dy;
			for i in 1..N {
				let leader = rope[i - 1];
				follow(&mut rope[i], leader);
			}
			visited.insert(rope[N - 1]);
		}
	}
	Ok(visited.len())
}

pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	part_impl::<2>(input)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	part_impl::<10>(input)
}


mod parsing {
	use std::num::ParseIntError;
	use super::Knot;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum MotionError {
		#[error("expected a direction and a step count on line {line}")]
		Format { line: usize },
		#[error("invalid direction {found:?} on line {line}")]
		Direction { line: usize, found: String },
		#[error("invalid step count on line {line}")]
		Steps { line: usize, source: ParseIntError },
	}

	/// Unit offset of each motion with its number of steps.
	pub(super) fn try_motions_from_str(s: &str) -> Result<Vec<(Knot, u32)>, MotionError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| (l, line.trim()))
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| {
				let (direction, steps) = line.split_once(' ').ok_or(MotionError::Format { line: l + 1 })?;
				let offset = match direction {
					"U" => (0, -1),
					"D" => (0, 1),
					"L" => (-1, 0),
					"R" => (1, 0),
					found => return Err(MotionError::Direction { line: l + 1, found: found.to_owned() }),
				};
				let steps = steps.parse::<u32>().map_err(|e| MotionError::Steps { line: l + 1, source: e })?;
				Ok((offset, steps))
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			R 4
			U 4
			L 3
			D 1
			R 4
			D 1
			L 5
			R 2
		" },
		indoc::indoc! { "
			R 5
			U 8
			L 8
			D 3
			R 17
			D 10
			L 25
			U 20
		" },
	];

	#[test]
	fn tests() {
		assert_eq!(part1(INPUTS[0]).unwrap(), 13);
		assert_eq!(part2(INPUTS[0]).unwrap(), 1);
		assert_eq!(part2(INPUTS[1]).unwrap(), 36);
		assert!(part1("X 1").is_err());
	}
}
