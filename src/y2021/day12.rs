// Copyright (c) 2021 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


const START: &str = "start";
const END: &str = "end";

/// Cave as key, caves it connects to as value.
type CaveMap<'a> = HashMap<&'a str, Vec<&'a str>>;

fn is_small(cave: &str) -> bool {
	cave.chars().all(|c| c.is_ascii_lowercase())
}

/// Counts the paths from `cave` to the end that do not revisit the small
/// caves in `visited`, except for once if `may_revisit`.
fn count_paths<'a>(map: &CaveMap<'a>, cave: &'a str, visited: &mut Vec<&'a str>, may_revisit: bool) -> usize {
	if cave == END { return 1 }
	let mut count = 0;
	for &next in map.get(cave).into_iter().flatten() {
		if next == START { continue }
		let revisit = is_small(next) && visited.contains(&next);
		if revisit && !may_revisit { continue }
		if is_small(next) { visited.push(next) }
		count += count_paths(map, next, visited, may_revisit && !revisit);
		if is_small(next) { visited.pop(); }
	}
	count
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	let map = parsing::try_cave_map_from_str(input)?;
	Ok(count_paths(&map, START, &mut vec![START], false))
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	let map = parsing::try_cave_map_from_str(input)?;
	Ok(count_paths(&map, START, &mut vec![START], true))
}


mod parsing {
	use super::{CaveMap, START, END, is_small};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum MapError {
		#[error("expected two caves joined by `-` on line {line}")]
		Format { line: usize },
		#[error("invalid cave name {name:?} on line {line}")]
		Cave { line: usize, name: String },
		#[error("missing start or end cave")]
		MissingEnds,
		#[error("big caves {0:?} and {1:?} are connected, allowing endless paths")]
		BigCaves(String, String),
	}

	fn valid_cave(s: &str) -> bool {
		!s.is_empty() && (is_small(s) || s.chars().all(|c| c.is_ascii_uppercase()))
	}

	pub(super) fn try_cave_map_from_str(s: &str) -> Result<CaveMap<'_>, MapError> {
		let mut map = CaveMap::new();
		for (l, line) in s.lines().enumerate() {
			let line = line.trim();
			if line.is_empty() { continue }
			let (a, b) = line.split_once('-').ok_or(MapError::Format { line: l + 1 })?;
			for cave in [a, b] {
				if !valid_cave(cave) { return Err(MapError::Cave { line: l + 1, name: cave.to_owned() }) }
			}
			if !is_small(a) && !is_small(b) { return Err(MapError::BigCaves(a.to_owned(), b.to_owned())) }
			map.entry(a).or_default().push(b);
			map.entry(b).or_default().push(a);
		}
		if !map.contains_key(START) || !map.contains_key(END) { return Err(MapError::MissingEnds) }
		Ok(map)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			start-A
			start-b
			A-c
			A-b
			b-d
			A-end
			b-end
		" },
		indoc::indoc! { "
			dc-end
			HN-start
			start-kj
			dc-start
			dc-HN
			LN-dc
			HN-end
			kj-sa
			kj-HN
			kj-dc
		" },
	];

	#[test]
	fn tests() {
		assert_eq!(part1(INPUTS[0]).unwrap(), 10);
		assert_eq!(part1(INPUTS[1]).unwrap(), 19);
		assert_eq!(part2(INPUTS[0]).unwrap(), 36);
		assert_eq!(part2(INPUTS[1]).unwrap(), 103);
		assert!(part1("start-A\nA-B\nB-end").is_err());
	}
}
