// Copyright (c) 2024 Bastiaan Marinus van de Weerd

use itertools::Itertools as _;


/// Whether levels all increase or all decrease, by 1 to 3 each step.
fn is_safe(levels: impl Iterator<Item = i64> + Clone) -> bool {
	let mut differences = levels.tuple_windows().map(|(a, b)| b - a);
	differences.clone().all(|d| (1..=3).contains(&d))
		|| differences.all(|d| (-3..=-1).contains(&d))
}

/// Whether the report is safe with at most one level removed.
fn is_safe_dampened(report: &[i64]) -> bool {
	is_safe(report.iter().copied()) || (0..report.len()).any(|skip| is_safe(report.iter()
		.enumerate()
		.filter(move |&(i, _)| i != skip)
		.map(|(_, &level)| level)))
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	let reports = parsing::try_reports_from_str(input)?;
	Ok(reports.iter().filter(|report| is_safe(report.iter().copied())).count())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	let reports = parsing::try_reports_from_str(input)?;
	Ok(reports.iter().filter(|report| is_safe_dampened(report)).count())
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	#[error("invalid level on line {line}")]
	pub(super) struct ReportsError { line: usize, source: ParseIntError }

	pub(super) fn try_reports_from_str(s: &str) -> Result<Vec<Vec<i64>>, ReportsError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.split_whitespace()
				.map(str::parse)
				.collect::<Result<Vec<_>, _>>()
				.map_err(|e| ReportsError { line: l + 1, source: e }))
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		7 6 4 2 1
		1 2 7 8 9
		9 7 6 2 1
		1 3 2 4 5
		8 6 4 4 1
		1 3 6 7 9
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 2);
		assert_eq!(part2(INPUT).unwrap(), 4);
		assert!(is_safe_dampened(&[9, 1, 2, 3]));
		assert!(is_safe([5, 3, 1].into_iter()));
		assert!(!is_safe([1, 2, 1].into_iter()));
		assert!(!is_safe_dampened(&[1, 5, 9]));
	}
}
