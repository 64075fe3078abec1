// Copyright (c) 2025 Bastiaan Marinus van de Weerd

use anyhow::Context as _;


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Operator { Add, Multiply }

/// A problem's block of the worksheet: the digit rows of its columns, padded
/// with spaces, and the operator below them.
struct Problem {
	rows: Vec<Vec<u8>>,
	operator: Operator,
}

impl Problem {
	fn width(&self) -> usize {
		self.rows.first().map_or(0, Vec::len)
	}

	fn solve(&self, numbers: impl Iterator<Item = Option<u64>>) -> Option<u64> {
		let numbers = numbers.collect::<Option<Vec<_>>>()?;
		if numbers.is_empty() { return None }
		Some(match self.operator {
			Operator::Add => numbers.iter().sum(),
			Operator::Multiply => numbers.iter().product(),
		})
	}

	/// Reads one number per row.
	fn solve_by_rows(&self) -> Option<u64> {
		self.solve(self.rows.iter().map(|row| number_from_digits(row.iter().copied())))
	}

	/// Reads one number per column, top to bottom, the rightmost column first.
	fn solve_by_columns(&self) -> Option<u64> {
		self.solve((0..self.width()).rev()
			.map(|x| number_from_digits(self.rows.iter().map(|row| row[x]))))
	}
}

/// Joins the digits among `chars`, ignoring spaces; `None` if there are none.
fn number_from_digits(chars: impl Iterator<Item = u8>) -> Option<u64> {
	chars.filter(|&c| c != b' ').try_fold(None, |number: Option<u64>, c| {
		let digit = (c as char).to_digit(10)?;
		Some(Some(number.unwrap_or(0) * 10 + digit as u64))
	})?
}

fn part_impl(input: &str, solve: impl Fn(&Problem) -> Option<u64>) -> anyhow::Result<u64> {
	let problems = parsing::try_problems_from_str(input)?;
	problems.iter()
		.enumerate()
		.map(|(i, problem)| {
			let answer = solve(problem).with_context(|| format!("problem #{} lacks numbers", i + 1))?;
			tracing::debug!(problem = i + 1, answer, "solved");
			anyhow::Ok(answer)
		})
		.sum()
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	part_impl(input, Problem::solve_by_rows)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	part_impl(input, Problem::solve_by_columns)
}


mod parsing {
	use super::{Operator, Problem};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum WorksheetError {
		#[error("expected rows of numbers followed by a row of operators")]
		Format,
		#[error("invalid character {found:?} on line {line}, column {column}")]
		Character { line: usize, column: usize, found: char },
		#[error("expected a single operator below columns {first} through {last}")]
		Operator { first: usize, last: usize },
	}

	pub(super) fn try_problems_from_str(s: &str) -> Result<Vec<Problem>, WorksheetError> {
		let mut lines = s.lines()
			.map(|line| line.trim_end_matches('\r').as_bytes())
			.collect::<Vec<_>>();
		while lines.last().map_or(false, |line| line.iter().all(|&c| c == b' ')) { lines.pop(); }
		let (&operators, rows) = lines.split_last().ok_or(WorksheetError::Format)?;
		if rows.is_empty() { return Err(WorksheetError::Format) }

		for (l, row) in rows.iter().enumerate() {
			if let Some(c) = row.iter().position(|&c| c != b' ' && !c.is_ascii_digit()) {
				return Err(WorksheetError::Character { line: l + 1, column: c + 1, found: row[c] as char })
			}
		}

		let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);
		let cell = |line: &[u8], x: usize| line.get(x).copied().unwrap_or(b' ');
		let is_separator = |x: usize| lines.iter().all(|&line| cell(line, x) == b' ');

		let mut problems = Vec::new();
		let mut x = 0;
		while x < width {
			if is_separator(x) { x += 1; continue }
			let first = x;
			while x < width && !is_separator(x) { x += 1 }
			let mut operator = None;
			for column in first..x {
				let found = match cell(operators, column) {
					b' ' => continue,
					b'+' => Operator::Add,
					b'*' => Operator::Multiply,
					c => return Err(WorksheetError::Character { line: lines.len(), column: column + 1, found: c as char }),
				};
				if operator.replace(found).is_some() {
					return Err(WorksheetError::Operator { first: first + 1, last: x })
				}
			}
			problems.push(Problem {
				rows: rows.iter().map(|&row| (first..x).map(|x| cell(row, x)).collect()).collect(),
				operator: operator.ok_or(WorksheetError::Operator { first: first + 1, last: x })?,
			});
		}
		Ok(problems)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = concat!(
		"123 328  51 64 \n",
		" 45 64  387 23 \n",
		"  6 98  215 314\n",
		"*   +   *   +  \n",
	);

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 4277556);
		assert_eq!(part2(INPUT).unwrap(), 3263827);
		let problems = parsing::try_problems_from_str(INPUT).unwrap();
		assert_eq!(problems.len(), 4);
		assert_eq!(problems[3].operator, Operator::Add);
		assert_eq!(problems[3].solve_by_columns(), Some(4 + 431 + 623));
		assert_eq!(number_from_digits(b" 4 5".iter().copied()), Some(45));
		assert_eq!(number_from_digits(b"   ".iter().copied()), None);
		assert!(part1("1 2\n+ -").is_err());
		assert!(part1("1 2\n+").is_err());
	}
}
