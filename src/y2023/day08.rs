// Copyright (c) 2023 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use anyhow::Context as _;


#[derive(Clone, Copy)]
enum Direction { Left, Right }

struct Network<'a> {
	instructions: Vec<Direction>,
	nodes: HashMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> Network<'a> {
	/// Steps from `start` until a node satisfying `is_end` is reached.
	fn steps(&self, start: &'a str, is_end: impl Fn(&str) -> bool) -> anyhow::Result<u64> {
		let limit = self.instructions.len() * self.nodes.len();
		let mut node = start;
		for (steps, direction) in self.instructions.iter().cycle().take(limit).enumerate() {
			if is_end(node) { return Ok(steps as u64) }
			let &(left, right) = self.nodes.get(node).with_context(|| format!("unknown node {node:?}"))?;
			node = match direction { Direction::Left => left, Direction::Right => right };
		}
		if is_end(node) { return Ok(limit as u64) }
		anyhow::bail!("no end reachable from {start:?}")
	}
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	let network = parsing::try_network_from_str(input)?;
	network.steps("AAA", |node| node == "ZZZ")
}


/// Assumes, as the puzzle input guarantees, that every ghost loops back to
/// its first `..Z` node after as many steps as it took to reach it.
pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	let network = parsing::try_network_from_str(input)?;
	let mut starts = network.nodes.keys().copied().filter(|node| node.ends_with('A')).collect::<Vec<_>>();
	anyhow::ensure!(!starts.is_empty(), "no starting nodes");
	starts.sort_unstable();
	starts.into_iter().try_fold(1, |lcm, start| {
		let steps = network.steps(start, |node| node.ends_with('Z'))?;
		tracing::debug!(start, steps, "ghost cycle");
		Ok(num_integer::lcm(lcm, steps))
	})
}


mod parsing {
	use std::collections::HashMap;
	use super::{Direction, Network};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum NetworkError {
		#[error("invalid instruction {0:?}")]
		Instruction(char),
		#[error("expected `AAA = (BBB, CCC)` on line {line}")]
		Node { line: usize },
		#[error("node {0:?} is defined twice")]
		Duplicate(String),
	}

	pub(super) fn try_network_from_str(s: &str) -> Result<Network<'_>, NetworkError> {
		let mut lines = s.lines().enumerate().map(|(l, line)| (l + 1, line.trim()));
		let instructions = lines.next().map_or("", |(_, line)| line)
			.chars()
			.map(|c| match c {
				'L' => Ok(Direction::Left),
				'R' => Ok(Direction::Right),
				invalid => Err(NetworkError::Instruction(invalid)),
			})
			.collect::<Result<Vec<_>, _>>()?;

		let mut nodes = HashMap::new();
		for (line, s) in lines.filter(|(_, line)| !line.is_empty()) {
			let (node, next) = s.split_once(" = ")
				.and_then(|(node, next)| Some((node, next.strip_prefix('(')?.strip_suffix(')')?.split_once(", ")?)))
				.ok_or(NetworkError::Node { line })?;
			if nodes.insert(node, next).is_some() { return Err(NetworkError::Duplicate(node.to_owned())) }
		}
		Ok(Network { instructions, nodes })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tests() {
		assert_eq!(part1(indoc::indoc! { "
			RL

			AAA = (BBB, CCC)
			BBB = (DDD, EEE)
			CCC = (ZZZ, GGG)
			DDD = (DDD, DDD)
			EEE = (EEE, EEE)
			GGG = (GGG, GGG)
			ZZZ = (ZZZ, ZZZ)
		" }).unwrap(), 2);
		assert_eq!(part1(indoc::indoc! { "
			LLR

			AAA = (BBB, BBB)
			BBB = (AAA, ZZZ)
			ZZZ = (ZZZ, ZZZ)
		" }).unwrap(), 6);
		assert_eq!(part2(indoc::indoc! { "
			LR

			11A = (11B, XXX)
			11B = (XXX, 11Z)
			11Z = (11B, XXX)
			22A = (22B, XXX)
			22B = (22C, 22C)
			22C = (22Z, 22Z)
			22Z = (22B, 22B)
			XXX = (XXX, XXX)
		" }).unwrap(), 6);
		assert!(part1("LR\n\nAAA = (AAA, AAA)").is_err());
	}
}
