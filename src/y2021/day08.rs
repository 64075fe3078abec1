// Copyright (c) 2021 Bastiaan Marinus van de Weerd

use anyhow::Context as _;


/// Lit segments `a` through `g` as bits 0 through 6.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
struct Pattern(u8);

impl Pattern {
	fn len(self) -> u32 {
		self.0.count_ones()
	}

	fn contains(self, other: Pattern) -> bool {
		self.0 & other.0 == other.0
	}
}

struct Entry {
	signals: [Pattern; 10],
	outputs: [Pattern; 4],
}

impl Entry {
	/// Deduces which signal pattern shows which digit.
	fn digits(&self) -> Option<[Pattern; 10]> {
		let with_len = |len: u32| self.signals.iter().copied().filter(move |p| p.len() == len);
		let one = with_len(2).next()?;
		let four = with_len(4).next()?;
		let seven = with_len(3).next()?;
		let eight = with_len(7).next()?;

		let nine = with_len(6).find(|p| p.contains(four))?;
		let zero = with_len(6).find(|&p| p != nine && p.contains(one))?;
		let six = with_len(6).find(|&p| p != nine && p != zero)?;

		let three = with_len(5).find(|p| p.contains(one))?;
		let five = with_len(5).find(|&p| p != three && six.contains(p))?;
		let two = with_len(5).find(|&p| p != three && p != five)?;

		Some([zero, one, two, three, four, five, six, seven, eight, nine])
	}

	fn output_value(&self) -> Option<u32> {
		let digits = self.digits()?;
		self.outputs.iter().try_fold(0, |value, output| {
			let digit = digits.iter().position(|d| d == output)?;
			Some(value * 10 + digit as u32)
		})
	}
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	let entries = parsing::try_entries_from_str(input)?;
	Ok(entries.iter()
		.flat_map(|entry| entry.outputs.iter())
		.filter(|output| matches!(output.len(), 2 | 3 | 4 | 7))
		.count())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u32> {
	let entries = parsing::try_entries_from_str(input)?;
	entries.iter()
		.enumerate()
		.map(|(i, entry)| entry.output_value()
			.with_context(|| format!("could not decode entry #{}", i + 1)))
		.sum()
}


mod parsing {
	use super::{Entry, Pattern};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum EntryError {
		#[error("expected signal patterns and outputs separated by `|`")]
		Format,
		#[error("invalid segment {0:?}")]
		Segment(char),
		#[error("expected 10 signal patterns and 4 outputs")]
		Count,
	}

	fn try_pattern_from_str(s: &str) -> Result<Pattern, EntryError> {
		s.chars().try_fold(Pattern(0), |Pattern(bits), c| match c {
			'a'..='g' => Ok(Pattern(bits | 1 << (c as u8 - b'a'))),
			invalid => Err(EntryError::Segment(invalid)),
		})
	}

	fn try_patterns_from_str<const N: usize>(s: &str) -> Result<[Pattern; N], EntryError> {
		s.split_whitespace()
			.map(try_pattern_from_str)
			.collect::<Result<Vec<_>, _>>()?
			.try_into()
			.map_err(|_| EntryError::Count)
	}

	impl std::str::FromStr for Entry {
		type Err = EntryError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (signals, outputs) = s.split_once('|').ok_or(EntryError::Format)?;
			Ok(Entry {
				signals: try_patterns_from_str(signals)?,
				outputs: try_patterns_from_str(outputs)?,
			})
		}
	}

	#[derive(Debug, thiserror::Error)]
	#[error("invalid entry on line {line}")]
	pub(super) struct EntriesError { line: usize, source: EntryError }

	pub(super) fn try_entries_from_str(s: &str) -> Result<Vec<Entry>, EntriesError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| EntriesError { line: l + 1, source: e }))
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf
		be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 2);
		assert_eq!(part2(INPUT.lines().next().unwrap()).unwrap(), 5353);
		assert_eq!(part2(INPUT).unwrap(), 5353 + 8394);
		assert!(part1("abc | abc").is_err());
	}
}
