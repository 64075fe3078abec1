// Copyright (c) 2022 Bastiaan Marinus van de Weerd

/// Number of characters processed once the last `N` were all different.
fn marker_end<const N: usize>(input: &str) -> anyhow::Result<usize> {
	let signal = input.trim().as_bytes();
	signal.windows(N)
		.position(|window| window.iter()
			.try_fold(0u128, |seen, &b| {
				let bit = 1 << (b & 0x7f);
				(seen & bit == 0).then_some(seen | bit)
			})
			.is_some())
		.map(|start| start + N)
		.ok_or_else(|| anyhow::anyhow!("no {N} distinct characters in a row"))
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	marker_end::<4>(input)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	marker_end::<14>(input)
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tests() {
		assert_eq!(part1("mjqjpqmgbljsphdztnvjfqwrcgsmlb").unwrap(), 7);
		assert_eq!(part1("bvwbjplbgvbhsrlpgdmjqwftvncz").unwrap(), 5);
		assert_eq!(part1("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsfwdsdmbz\n").unwrap(), 10);
		assert_eq!(part2("mjqjpqmgbljsphdztnvjfqwrcgsmlb").unwrap(), 19);
		assert_eq!(part2("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw").unwrap(), 26);
		assert!(part1("abab").is_err());
	}
}
