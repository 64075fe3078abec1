// Copyright (c) 2023 Bastiaan Marinus van de Weerd

use std::ops::Range;
use anyhow::Context as _;


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Mapping { destination: u64, source: u64, len: u64 }

impl Mapping {
	fn source_end(&self) -> u64 {
		self.source + self.len
	}
}

/// One category's mappings to the next, ordered by source start.
struct Map(Vec<Mapping>);

impl Map {
	fn get(&self, value: u64) -> u64 {
		self.0.iter()
			.find(|m| (m.source..m.source_end()).contains(&value))
			.map_or(value, |m| value - m.source + m.destination)
	}

	/// Maps whole ranges, splitting them where they straddle mapping edges.
	fn get_ranges(&self, ranges: &[Range<u64>]) -> Vec<Range<u64>> {
		let mut mapped = Vec::with_capacity(ranges.len());
		for range in ranges {
			let mut cursor = range.start;
			for m in &self.0 {
				if m.source_end() <= cursor { continue }
				if m.source >= range.end { break }
				if cursor < m.source {
					mapped.push(cursor..m.source);
					cursor = m.source;
				}
				let stop = range.end.min(m.source_end());
				mapped.push(cursor - m.source + m.destination..stop - m.source + m.destination);
				cursor = stop;
			}
			if cursor < range.end { mapped.push(cursor..range.end) }
		}
		mapped
	}
}

struct Almanac {
	seeds: Vec<u64>,
	maps: Vec<Map>,
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	let almanac = parsing::try_almanac_from_str(input)?;
	almanac.seeds.iter()
		.map(|&seed| almanac.maps.iter().fold(seed, |value, map| map.get(value)))
		.min()
		.context("no seeds")
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	let almanac = parsing::try_almanac_from_str(input)?;
	anyhow::ensure!(almanac.seeds.len() % 2 == 0, "seeds do not pair up into ranges");
	let seeds = almanac.seeds.chunks(2)
		.map(|pair| pair[0]..pair[0] + pair[1])
		.collect::<Vec<_>>();
	let locations = almanac.maps.iter().fold(seeds, |ranges, map| map.get_ranges(&ranges));
	tracing::debug!(ranges = locations.len(), "mapped seed ranges");
	locations.iter()
		.filter(|range| !range.is_empty())
		.map(|range| range.start)
		.min()
		.context("no seeds")
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Almanac, Map, Mapping};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum AlmanacError {
		#[error("expected `seeds:` on the first line")]
		Seeds,
		#[error("expected a map header on line {line}")]
		Header { line: usize },
		#[error("expected three numbers on line {line}")]
		Mapping { line: usize },
		#[error("invalid number on line {line}")]
		Number { line: usize, source: ParseIntError },
	}

	fn try_numbers_from_str(s: &str, line: usize) -> Result<Vec<u64>, AlmanacError> {
		s.split_whitespace()
			.map(|n| n.parse().map_err(|e| AlmanacError::Number { line, source: e }))
			.collect()
	}

	pub(super) fn try_almanac_from_str(s: &str) -> Result<Almanac, AlmanacError> {
		let mut lines = s.lines().enumerate().map(|(l, line)| (l + 1, line.trim()));
		let seeds = lines.next()
			.and_then(|(l, line)| Some((l, line.strip_prefix("seeds:")?)))
			.ok_or(AlmanacError::Seeds)
			.and_then(|(l, seeds)| try_numbers_from_str(seeds, l))?;

		let mut maps = Vec::new();
		let mut current: Option<Vec<Mapping>> = None;
		for (l, line) in lines {
			if line.is_empty() { continue }
			if line.ends_with("map:") {
				maps.extend(current.replace(Vec::new()));
				continue
			}
			let mappings = current.as_mut().ok_or(AlmanacError::Header { line: l })?;
			let &[destination, source, len] = &try_numbers_from_str(line, l)?[..] else {
				return Err(AlmanacError::Mapping { line: l })
			};
			mappings.push(Mapping { destination, source, len });
		}
		maps.extend(current);

		Ok(Almanac {
			seeds,
			maps: maps.into_iter()
				.map(|mut mappings| {
					mappings.sort_unstable_by_key(|m| m.source);
					Map(mappings)
				})
				.collect(),
		})
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		seeds: 79 14 55 13

		seed-to-soil map:
		50 98 2
		52 50 48

		soil-to-fertilizer map:
		0 15 37
		37 52 2
		39 0 15

		fertilizer-to-water map:
		49 53 8
		0 11 42
		42 0 7
		57 7 4

		water-to-light map:
		88 18 7
		18 25 70

		light-to-temperature map:
		45 77 23
		81 45 19
		68 64 13

		temperature-to-humidity map:
		0 69 1
		1 0 69

		humidity-to-location map:
		60 56 37
		56 93 4
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 35);
		assert_eq!(part2(INPUT).unwrap(), 46);

		let map = Map(vec![
			Mapping { destination: 52, source: 50, len: 48 },
			Mapping { destination: 50, source: 98, len: 2 },
		]);
		assert_eq!(map.get(79), 81);
		assert_eq!(map.get(10), 10);
		assert_eq!(map.get_ranges(&[40..100, 120..121]), [40..50, 52..100, 50..52, 120..121]);
		assert!(part1("seeds: 1\n\n1 2 3").is_err());
	}
}
