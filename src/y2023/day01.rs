// Copyright (c) 2023 Bastiaan Marinus van de Weerd

use anyhow::Context as _;


const WORDS: [&str; 9] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

/// Digits found at every position of `line`; spelled-out digits may overlap.
fn digits(line: &str, spelled: bool) -> impl Iterator<Item = u32> + '_ {
	(0..line.len()).filter_map(move |i| {
		let rest = line.get(i..)?;
		if let Some(digit) = rest.chars().next()?.to_digit(10) { return Some(digit) }
		if !spelled { return None }
		WORDS.iter().position(|word| rest.starts_with(word)).map(|p| p as u32 + 1)
	})
}

fn part_impl<const SPELLED: bool>(input: &str) -> anyhow::Result<u32> {
	input.lines()
		.enumerate()
		.filter(|(_, line)| !line.trim().is_empty())
		.map(|(l, line)| {
			let mut digits = digits(line, SPELLED);
			let first = digits.next().with_context(|| format!("no digit on line {}", l + 1))?;
			anyhow::Ok(first * 10 + digits.last().unwrap_or(first))
		})
		.sum()
}

pub(crate) fn part1(input: &str) -> anyhow::Result<u32> {
	part_impl::<false>(input)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u32> {
	part_impl::<true>(input)
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tests() {
		assert_eq!(part1(indoc::indoc! { "
			1abc2
			pqr3stu8vwx
			a1b2c3d4e5f
			treb7uchet
		" }).unwrap(), 142);
		assert_eq!(part2(indoc::indoc! { "
			two1nine
			eightwothree
			abcone2threexyz
			xtwone3four
			4nineeightseven2
			zoneight234
			7pqrstsixteen
		" }).unwrap(), 281);
		assert_eq!(part2("oneight").unwrap(), 18);
		assert!(part1("abc").is_err());
	}
}
