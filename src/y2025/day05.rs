// Copyright (c) 2025 Bastiaan Marinus van de Weerd

use std::ops::RangeInclusive;


struct Inventory {
	fresh: Vec<RangeInclusive<u64>>,
	available: Vec<u64>,
}

/// Sorts and coalesces overlapping or adjacent ranges.
fn merged(mut ranges: Vec<RangeInclusive<u64>>) -> Vec<RangeInclusive<u64>> {
	ranges.sort_unstable_by_key(|range| *range.start());
	let mut merged: Vec<RangeInclusive<u64>> = Vec::with_capacity(ranges.len());
	for range in ranges {
		match merged.last_mut() {
			Some(last) if *range.start() <= last.end().saturating_add(1) => {
				if range.end() > last.end() { *last = *last.start()..=*range.end() }
			}
			_ => merged.push(range),
		}
	}
	merged
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	let inventory = parsing::try_inventory_from_str(input)?;
	Ok(inventory.available.iter()
		.filter(|&id| inventory.fresh.iter().any(|range| range.contains(id)))
		.count())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	let inventory = parsing::try_inventory_from_str(input)?;
	Ok(merged(inventory.fresh).iter().map(|range| range.end() - range.start() + 1).sum())
}


mod parsing {
	use std::num::ParseIntError;
	use super::Inventory;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum InventoryError {
		#[error("expected fresh ranges and available IDs separated by a blank line")]
		Format,
		#[error("expected a range like `3-5` on line {line}")]
		Range { line: usize },
		#[error("range on line {line} ends before it starts")]
		Reversed { line: usize },
		#[error("invalid ID on line {line}")]
		Id { line: usize, source: ParseIntError },
	}

	pub(super) fn try_inventory_from_str(s: &str) -> Result<Inventory, InventoryError> {
		let lines = s.lines().map(str::trim).collect::<Vec<_>>();
		let blank = lines.iter().position(|line| line.is_empty()).ok_or(InventoryError::Format)?;
		let id = |s: &str, line: usize| s.parse::<u64>().map_err(|e| InventoryError::Id { line, source: e });

		let fresh = lines[..blank].iter()
			.enumerate()
			.map(|(l, line)| {
				let (start, end) = line.split_once('-').ok_or(InventoryError::Range { line: l + 1 })?;
				let (start, end) = (id(start, l + 1)?, id(end, l + 1)?);
				if end < start { return Err(InventoryError::Reversed { line: l + 1 }) }
				Ok(start..=end)
			})
			.collect::<Result<_, _>>()?;
		let available = lines.iter()
			.enumerate()
			.skip(blank + 1)
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| id(line, l + 1))
			.collect::<Result<_, _>>()?;
		Ok(Inventory { fresh, available })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		3-5
		10-14
		16-20
		12-18

		1
		5
		8
		11
		17
		32
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 3);
		assert_eq!(part2(INPUT).unwrap(), 14);
		assert_eq!(merged(vec![5..=6, 1..=2, 3..=4, 2..=3]), [1..=6]);
		assert!(part1("5-3\n\n4").is_err());
	}
}
