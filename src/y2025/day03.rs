// Copyright (c) 2025 Bastiaan Marinus van de Weerd

/// Largest joltage from turning on exactly `N` batteries, keeping their order.
///
/// Each digit is the first highest one that still leaves enough batteries
/// to its right for the digits after it.
fn max_joltage<const N: usize>(bank: &[u8]) -> Option<u64> {
	if bank.len() < N { return None }
	let mut joltage = 0;
	let mut start = 0;
	for remaining in (0..N).rev() {
		let candidates = &bank[start..bank.len() - remaining];
		let (offset, &digit) = candidates.iter()
			.enumerate()
			.rev()
			.max_by_key(|&(_, digit)| digit)?;
		joltage = joltage * 10 + digit as u64;
		start += offset + 1;
	}
	Some(joltage)
}

fn part_impl<const N: usize>(input: &str) -> anyhow::Result<u64> {
	let banks = parsing::try_banks_from_str(input)?;
	banks.iter()
		.enumerate()
		.map(|(i, bank)| max_joltage::<N>(bank)
			.ok_or_else(|| anyhow::anyhow!("bank #{} has fewer than {N} batteries", i + 1)))
		.sum()
}

pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	part_impl::<2>(input)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	part_impl::<12>(input)
}


mod parsing {
	#[derive(Debug, thiserror::Error)]
	#[error("invalid joltage rating {found:?} on line {line}")]
	pub(super) struct BanksError { line: usize, found: char }

	pub(super) fn try_banks_from_str(s: &str) -> Result<Vec<Vec<u8>>, BanksError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.trim().chars()
				.map(|c| c.to_digit(10).map(|d| d as u8).ok_or(BanksError { line: l + 1, found: c }))
				.collect())
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		987654321111111
		811111111111119
		234234234234278
		818181911112111
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 357);
		assert_eq!(part2(INPUT).unwrap(), 3121910778619);
		assert_eq!(max_joltage::<2>(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 1, 1, 1, 1, 1, 1]), Some(98));
		assert_eq!(max_joltage::<3>(&[1, 2]), None);
		assert!(part2("12345").is_err());
	}
}
