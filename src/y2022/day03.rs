// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use anyhow::Context as _;
use itertools::Itertools as _;


/// Item types `a`-`z` and `A`-`Z` as bits 1 through 52, so that an item's
/// bit index is its priority.
#[derive(Clone, Copy)]
struct Items(u64);

impl Items {
	fn intersection(self, other: Items) -> Items {
		Items(self.0 & other.0)
	}

	/// Priority of the single item type left, if exactly one is.
	fn single_priority(self) -> Option<u32> {
		(self.0.count_ones() == 1).then(|| self.0.trailing_zeros())
	}
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u32> {
	let rucksacks = parsing::try_rucksacks_from_str(input)?;
	rucksacks.iter()
		.enumerate()
		.map(|(i, &(left, right))| left.intersection(right).single_priority()
			.with_context(|| format!("rucksack #{} does not share a single item type", i + 1)))
		.sum()
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u32> {
	let rucksacks = parsing::try_rucksacks_from_str(input)?;
	anyhow::ensure!(rucksacks.len() % 3 == 0, "rucksacks do not divide into groups of three");
	rucksacks.iter()
		.map(|&(left, right)| Items(left.0 | right.0))
		.tuples()
		.enumerate()
		.map(|(i, (a, b, c))| a.intersection(b).intersection(c).single_priority()
			.with_context(|| format!("group #{} does not share a single badge", i + 1)))
		.sum()
}


mod parsing {
	use super::Items;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RucksackError {
		#[error("odd number of items on line {line}")]
		Odd { line: usize },
		#[error("invalid item {found:?} on line {line}")]
		Item { line: usize, found: char },
	}

	fn try_items_from_str(s: &str) -> Result<Items, char> {
		s.chars().try_fold(Items(0), |Items(bits), c| {
			let priority = match c {
				'a'..='z' => c as u32 - 'a' as u32 + 1,
				'A'..='Z' => c as u32 - 'A' as u32 + 27,
				invalid => return Err(invalid),
			};
			Ok(Items(bits | 1 << priority))
		})
	}

	/// Both compartments of every rucksack.
	pub(super) fn try_rucksacks_from_str(s: &str) -> Result<Vec<(Items, Items)>, RucksackError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| (l, line.trim()))
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| {
				if line.len() % 2 != 0 { return Err(RucksackError::Odd { line: l + 1 }) }
				let (left, right) = line.split_at(line.len() / 2);
				let items = |s: &str| try_items_from_str(s).map_err(|found| RucksackError::Item { line: l + 1, found });
				Ok((items(left)?, items(right)?))
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		vJrwpWtwJgWrhcsFMMfFFhFp
		jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
		PmmdzqPrVvPwwTWBwg
		wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
		ttgJtRGJQctTZtZT
		CrZsJsPPZsGzwwsLwLmpwMDw
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 157);
		assert_eq!(part2(INPUT).unwrap(), 70);
		assert!(part1("abc").is_err());
		assert!(part1("a1").is_err());
	}
}
