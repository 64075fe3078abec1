// Copyright (c) 2025 Bastiaan Marinus van de Weerd

use std::ops::RangeInclusive;


/// Whether `id`'s digits are one sequence repeated `times` times.
fn is_repeated(id: u64, times: u32) -> bool {
	let digits = id.checked_ilog10().map_or(1, |log| log + 1);
	if digits % times != 0 { return false }
	let unit = 10u64.pow(digits / times);
	let sequence = id % unit;
	(1..times).try_fold(id / unit, |rest, _| (rest % unit == sequence).then_some(rest / unit)) == Some(0)
}

fn invalid_sum(ranges: &[RangeInclusive<u64>], is_invalid: impl Fn(u64) -> bool) -> u64 {
	ranges.iter()
		.map(|range| {
			let invalid = range.clone().filter(|&id| is_invalid(id)).collect::<Vec<_>>();
			tracing::debug!(?range, ?invalid, "invalid IDs");
			invalid.iter().sum::<u64>()
		})
		.sum()
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	let ranges = parsing::try_ranges_from_str(input)?;
	Ok(invalid_sum(&ranges, |id| is_repeated(id, 2)))
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	let ranges = parsing::try_ranges_from_str(input)?;
	Ok(invalid_sum(&ranges, |id| {
		let digits = id.checked_ilog10().map_or(1, |log| log + 1);
		(2..=digits).any(|times| is_repeated(id, times))
	}))
}


mod parsing {
	use std::{num::ParseIntError, ops::RangeInclusive};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RangeError {
		#[error("expected a range like `11-22`, found {0:?}")]
		Format(String),
		#[error("invalid ID in {range:?}")]
		Id { range: String, source: ParseIntError },
	}

	pub(super) fn try_ranges_from_str(s: &str) -> Result<Vec<RangeInclusive<u64>>, RangeError> {
		s.split(',')
			.map(str::trim)
			.filter(|range| !range.is_empty())
			.map(|range| {
				let (first, last) = range.split_once('-').ok_or_else(|| RangeError::Format(range.to_owned()))?;
				let id = |s: &str| s.parse::<u64>().map_err(|e| RangeError::Id { range: range.to_owned(), source: e });
				Ok(id(first)?..=id(last)?)
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = concat!(
		"11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\n",
		"1698522-1698528,446443-446449,38593856-38593862,565653-565659,\n",
		"824824821-824824827,2121212118-2121212124\n",
	);

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 1227775554);
		assert_eq!(part2(INPUT).unwrap(), 4174379265);
		assert!(is_repeated(123123, 2));
		assert!(!is_repeated(1231234, 2));
		assert!(is_repeated(111, 3));
		assert!(!is_repeated(101, 2));
		assert!(part1("11-x").is_err());
	}
}
