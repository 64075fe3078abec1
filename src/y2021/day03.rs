// Copyright (c) 2021 Bastiaan Marinus van de Weerd

use anyhow::Context as _;


/// Report numbers, each `width` bits wide.
struct Report {
	width: usize,
	numbers: Vec<u32>,
}

fn ones_at(numbers: &[u32], bit: usize) -> usize {
	numbers.iter().filter(|&&n| n >> bit & 1 == 1).count()
}

/// Narrows the numbers down one bit at a time, starting at the most
/// significant one, keeping those whose bit matches what `keep` picks
/// from the counts of ones and zeroes.
fn rating(report: &Report, keep: impl Fn(usize, usize) -> u32) -> Option<u32> {
	let mut numbers = report.numbers.clone();
	for bit in (0..report.width).rev() {
		if numbers.len() <= 1 { break }
		let ones = ones_at(&numbers, bit);
		let kept = keep(ones, numbers.len() - ones);
		numbers.retain(|&n| n >> bit & 1 == kept);
	}
	match numbers[..] {
		[rating] => Some(rating),
		_ => None,
	}
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	let report = parsing::try_report_from_str(input)?;
	let gamma = (0..report.width)
		.filter(|&bit| {
			let ones = ones_at(&report.numbers, bit);
			ones >= report.numbers.len() - ones
		})
		.fold(0u32, |gamma, bit| gamma | 1 << bit);
	let epsilon = !gamma & ((1 << report.width) - 1);
	Ok(u64::from(gamma) * u64::from(epsilon))
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	let report = parsing::try_report_from_str(input)?;
	let oxygen = rating(&report, |ones, zeroes| (ones >= zeroes) as u32)
		.context("no single oxygen generator rating")?;
	let co2 = rating(&report, |ones, zeroes| (ones < zeroes) as u32)
		.context("no single CO2 scrubber rating")?;
	Ok(u64::from(oxygen) * u64::from(co2))
}


mod parsing {
	use super::Report;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum ReportError {
		#[error("empty report")]
		Empty,
		#[error("line {line} is not a binary number")]
		Number { line: usize },
		#[error("line {line} is {found} bits wide, expected {expected}")]
		Width { line: usize, found: usize, expected: usize },
	}

	pub(super) fn try_report_from_str(s: &str) -> Result<Report, ReportError> {
		let mut width = None;
		let mut numbers = Vec::new();
		for (l, line) in s.lines().enumerate() {
			let line = line.trim();
			if line.is_empty() { continue }
			if line.len() > 31 { return Err(ReportError::Number { line: l + 1 }) }
			let number = u32::from_str_radix(line, 2)
				.map_err(|_| ReportError::Number { line: l + 1 })?;
			match width {
				None => width = Some(line.len()),
				Some(expected) if expected != line.len() =>
					return Err(ReportError::Width { line: l + 1, found: line.len(), expected }),
				Some(_) => (),
			}
			numbers.push(number);
		}
		let width = width.ok_or(ReportError::Empty)?;
		Ok(Report { width, numbers })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		00100
		11110
		10110
		10111
		10101
		01111
		00111
		11100
		10000
		11001
		00010
		01010
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 198);
		assert_eq!(part2(INPUT).unwrap(), 230);
		assert!(part1("0101\n011\n").is_err());
		assert_eq!(part1("10101010101010101010\n").unwrap(), 0b10101010101010101010 * 0b01010101010101010101);
		assert_eq!(part2("1111111111111111111111111111111\n").unwrap(), 0x7fff_ffff * 0x7fff_ffff);
	}
}
