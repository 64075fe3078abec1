// Copyright (c) 2024 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	let (mut left, mut right) = parsing::try_lists_from_str(input)?;
	left.sort_unstable();
	right.sort_unstable();
	Ok(left.iter().zip(&right).map(|(&l, &r)| l.abs_diff(r)).sum())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	let (left, right) = parsing::try_lists_from_str(input)?;
	let mut counts = HashMap::<u64, u64>::new();
	for id in right { *counts.entry(id).or_default() += 1 }
	Ok(left.iter().map(|id| id * counts.get(id).copied().unwrap_or(0)).sum())
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum ListsError {
		#[error("expected two location IDs on line {line}")]
		Format { line: usize },
		#[error("invalid location ID on line {line}")]
		Id { line: usize, source: ParseIntError },
	}

	/// The left and right columns.
	pub(super) fn try_lists_from_str(s: &str) -> Result<(Vec<u64>, Vec<u64>), ListsError> {
		let mut lists = (Vec::new(), Vec::new());
		for (l, line) in s.lines().enumerate() {
			if line.trim().is_empty() { continue }
			let mut ids = line.split_whitespace();
			let (Some(left), Some(right), None) = (ids.next(), ids.next(), ids.next()) else {
				return Err(ListsError::Format { line: l + 1 })
			};
			let id = |s: &str| s.parse::<u64>().map_err(|e| ListsError::Id { line: l + 1, source: e });
			lists.0.push(id(left)?);
			lists.1.push(id(right)?);
		}
		Ok(lists)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		3   4
		4   3
		2   5
		1   3
		3   9
		3   3
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 11);
		assert_eq!(part2(INPUT).unwrap(), 31);
		assert!(part1("1 2 3").is_err());
	}
}
