// Copyright (c) 2022 Bastiaan Marinus van de Weerd

fn part_impl<const N: usize>(input: &str) -> anyhow::Result<u64> {
	let mut totals = parsing::try_calories_from_str(input)?;
	anyhow::ensure!(totals.len() >= N, "fewer than {N} elves");
	totals.sort_unstable_by(|a, b| b.cmp(a));
	Ok(totals[..N].iter().sum())
}

pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	part_impl::<1>(input)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	part_impl::<3>(input)
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	#[error("invalid calories on line {line}")]
	pub(super) struct CaloriesError { line: usize, source: ParseIntError }

	/// Total calories carried per elf; elves are separated by blank lines.
	pub(super) fn try_calories_from_str(s: &str) -> Result<Vec<u64>, CaloriesError> {
		let mut totals = Vec::new();
		let mut current = None;
		for (l, line) in s.lines().enumerate() {
			let line = line.trim();
			if line.is_empty() {
				totals.extend(current.take());
				continue
			}
			let calories = line.parse::<u64>().map_err(|e| CaloriesError { line: l + 1, source: e })?;
			*current.get_or_insert(0) += calories;
		}
		totals.extend(current);
		Ok(totals)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		1000
		2000
		3000

		4000

		5000
		6000

		7000
		8000
		9000

		10000
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 24000);
		assert_eq!(part2(INPUT).unwrap(), 45000);
		assert!(part2("1\n\n2").is_err());
		assert!(part1("12a").is_err());
	}
}
