// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{HashMap, HashSet};
use anyhow::Context as _;


const DISK_SIZE: u64 = 70_000_000;
const SPACE_NEEDED: u64 = 30_000_000;

/// Total size of every directory by path, the root being the empty path.
fn directory_sizes<'a>(output: &[parsing::Line<'a>]) -> HashMap<Vec<&'a str>, u64> {
	use parsing::Line::*;

	let mut sizes = HashMap::from([(Vec::new(), 0)]);
	let mut listed = HashSet::new();
	let mut cwd = Vec::new();
	let mut skip_listing = false;
	for line in output {
		match *line {
			Cd("/") => cwd.clear(),
			Cd("..") => { cwd.pop(); }
			Cd(name) => {
				cwd.push(name);
				sizes.entry(cwd.clone()).or_insert(0);
			}
			Ls => skip_listing = !listed.insert(cwd.clone()),
			Dir(_) => (),
			File(size) if !skip_listing => for depth in 0..=cwd.len() {
				*sizes.entry(cwd[..depth].to_vec()).or_insert(0) += size;
			},
			File(_) => (),
		}
	}
	sizes
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	let output = parsing::try_output_from_str(input)?;
	Ok(directory_sizes(&output).into_values().filter(|&size| size <= 100_000).sum())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	let output = parsing::try_output_from_str(input)?;
	let sizes = directory_sizes(&output);
	let root: &[&str] = &[];
	let used = sizes[root];
	let to_free = (used + SPACE_NEEDED).saturating_sub(DISK_SIZE);
	tracing::debug!(used, to_free, "disk usage");
	sizes.into_values()
		.filter(|&size| size >= to_free)
		.min()
		.context("no directory is large enough")
}


mod parsing {
	use std::num::ParseIntError;

	pub(super) enum Line<'a> {
		Cd(&'a str),
		Ls,
		Dir(&'a str),
		File(u64),
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum OutputError {
		#[error("unknown command {found:?} on line {line}")]
		Command { line: usize, found: String },
		#[error("invalid file size on line {line}")]
		Size { line: usize, source: ParseIntError },
		#[error("expected a directory or a size and a file name on line {line}")]
		Entry { line: usize },
	}

	pub(super) fn try_output_from_str(s: &str) -> Result<Vec<Line<'_>>, OutputError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| (l, line.trim()))
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| if let Some(command) = line.strip_prefix("$ ") {
				match command.split_once(' ') {
					Some(("cd", dir)) => Ok(Line::Cd(dir)),
					None if command == "ls" => Ok(Line::Ls),
					_ => Err(OutputError::Command { line: l + 1, found: command.to_owned() }),
				}
			} else {
				match line.split_once(' ') {
					Some(("dir", name)) => Ok(Line::Dir(name)),
					Some((size, _)) => size.parse()
						.map(Line::File)
						.map_err(|e| OutputError::Size { line: l + 1, source: e }),
					None => Err(OutputError::Entry { line: l + 1 }),
				}
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		$ cd /
		$ ls
		dir a
		14848514 b.txt
		8504156 c.dat
		dir d
		$ cd a
		$ ls
		dir e
		29116 f
		2557 g
		62596 h.lst
		$ cd e
		$ ls
		584 i
		$ cd ..
		$ cd ..
		$ cd d
		$ ls
		4060174 j
		8033020 d.log
		5626152 d.ext
		7214296 k
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 95437);
		assert_eq!(part2(INPUT).unwrap(), 24933642);
		let relisted = format!("{INPUT}$ cd /\n$ ls\n14848514 b.txt\n");
		assert_eq!(part1(&relisted).unwrap(), 95437);
		assert!(part1("$ rm -rf /").is_err());
	}
}
