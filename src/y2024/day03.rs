// Copyright (c) 2024 Bastiaan Marinus van de Weerd

use regex::Regex;


#[derive(Clone, Copy, Debug)]
#[cfg_attr(test, derive(PartialEq, Eq))]
enum Instruction {
	Do,
	Dont,
	Mul(u64, u64),
}

/// Scans corrupted memory for intact instructions, in order.
fn instructions(memory: &str) -> anyhow::Result<Vec<Instruction>> {
	let pattern = Regex::new(r"do\(\)|don't\(\)|mul\(([0-9]{1,3}),([0-9]{1,3})\)")?;
	pattern.captures_iter(memory)
		.map(|captures| Ok(match (&captures[0], captures.get(1), captures.get(2)) {
			("do()", ..) => Instruction::Do,
			("don't()", ..) => Instruction::Dont,
			(_, Some(a), Some(b)) => Instruction::Mul(a.as_str().parse()?, b.as_str().parse()?),
			(other, ..) => anyhow::bail!("unexpected match {other:?}"),
		}))
		.collect()
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	Ok(instructions(input)?.iter()
		.map(|instruction| match instruction {
			Instruction::Mul(a, b) => a * b,
			_ => 0,
		})
		.sum())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	let mut enabled = true;
	let mut sum = 0;
	for instruction in instructions(input)? {
		match instruction {
			Instruction::Do => enabled = true,
			Instruction::Dont => enabled = false,
			Instruction::Mul(a, b) if enabled => sum += a * b,
			Instruction::Mul(..) => tracing::debug!(?instruction, "disabled"),
		}
	}
	Ok(sum)
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tests() {
		assert_eq!(part1("xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))").unwrap(), 161);
		assert_eq!(part2("xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))").unwrap(), 48);
		assert_eq!(instructions("mul(1234,5)mul(123,4)do()").unwrap(), [Instruction::Mul(123, 4), Instruction::Do]);
	}
}
