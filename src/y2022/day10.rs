// Copyright (c) 2022 Bastiaan Marinus van de Weerd

const SCREEN_WIDTH: usize = 40;
const SCREEN_HEIGHT: usize = 6;

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Instruction {
	Noop,
	Addx(i64),
}

/// Value of the `X` register during each cycle, the first cycle first.
fn register_values(program: &[Instruction]) -> impl Iterator<Item = i64> + '_ {
	program.iter()
		.scan(1, |x, &instruction| Some(match instruction {
			Instruction::Noop => vec![*x],
			Instruction::Addx(value) => {
				let during = *x;
				*x += value;
				vec![during, during]
			}
		}))
		.flatten()
}


pub(crate) fn part1(input: &str) -> anyhow::Result<i64> {
	let program = parsing::try_program_from_str(input)?;
	Ok(register_values(&program)
		.zip(1..)
		.filter(|&(_, cycle)| cycle % 40 == 20 && cycle <= 220)
		.map(|(x, cycle)| x * cycle)
		.sum())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<String> {
	let program = parsing::try_program_from_str(input)?;
	let pixels = register_values(&program)
		.take(SCREEN_WIDTH * SCREEN_HEIGHT)
		.enumerate()
		.map(|(i, x)| if ((i % SCREEN_WIDTH) as i64 - x).abs() <= 1 { '#' } else { '.' })
		.collect::<Vec<_>>();
	anyhow::ensure!(pixels.len() == SCREEN_WIDTH * SCREEN_HEIGHT,
		"program ends after {} cycles, before the screen is drawn", pixels.len());
	let rows = pixels.chunks(SCREEN_WIDTH)
		.map(|row| row.iter().collect::<String>())
		.collect::<Vec<_>>();
	Ok(rows.join("\n"))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Instruction;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum ProgramError {
		#[error("unknown instruction {found:?} on line {line}")]
		Instruction { line: usize, found: String },
		#[error("invalid value on line {line}")]
		Value { line: usize, source: ParseIntError },
	}

	pub(super) fn try_program_from_str(s: &str) -> Result<Vec<Instruction>, ProgramError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| (l, line.trim()))
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| match line.split_once(' ') {
				None if line == "noop" => Ok(Instruction::Noop),
				Some(("addx", value)) => value.parse()
					.map(Instruction::Addx)
					.map_err(|e| ProgramError::Value { line: l + 1, source: e }),
				_ => Err(ProgramError::Instruction { line: l + 1, found: line.to_owned() }),
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		addx 15
		addx -11
		addx 6
		addx -3
		addx 5
		addx -1
		addx -8
		addx 13
		addx 4
		noop
		addx -1
		addx 5
		addx -1
		addx 5
		addx -1
		addx 5
		addx -1
		addx 5
		addx -1
		addx -35
		addx 1
		addx 24
		addx -19
		addx 1
		addx 16
		addx -11
		noop
		noop
		addx 21
		addx -15
		noop
		noop
		addx -3
		addx 9
		addx 1
		addx -3
		addx 8
		addx 1
		addx 5
		noop
		noop
		noop
		noop
		noop
		addx -36
		noop
		addx 1
		addx 7
		noop
		noop
		noop
		addx 2
		addx 6
		noop
		noop
		noop
		noop
		noop
		addx 1
		noop
		noop
		addx 7
		addx 1
		noop
		addx -13
		addx 13
		addx 7
		noop
		addx 1
		addx -33
		noop
		noop
		noop
		addx 2
		noop
		noop
		noop
		addx 8
		noop
		addx -1
		addx 2
		addx 1
		noop
		addx 17
		addx -9
		addx 1
		addx 1
		addx -3
		addx 11
		noop
		noop
		addx 1
		noop
		addx 1
		noop
		noop
		addx -13
		addx -19
		addx 1
		addx 3
		addx 26
		addx -30
		addx 12
		addx -1
		addx 3
		addx 1
		noop
		noop
		noop
		addx -9
		addx 18
		addx 1
		addx 2
		noop
		noop
		addx 9
		noop
		noop
		noop
		addx -1
		addx 2
		addx -37
		addx 1
		addx 3
		noop
		addx 15
		addx -21
		addx 22
		addx -6
		addx 1
		noop
		addx 2
		addx 1
		noop
		addx -10
		noop
		noop
		addx 20
		addx 1
		addx 2
		addx 2
		addx -6
		addx -11
		noop
		noop
		noop
	" };

	const IMAGE: &str = indoc::indoc! { "
		##..##..##..##..##..##..##..##..##..##..
		###...###...###...###...###...###...###.
		####....####....####....####....####....
		#####.....#####.....#####.....#####.....
		######......######......######......####
		#######.......#######.......#######....." };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 13140);
		assert_eq!(part2(INPUT).unwrap(), IMAGE);

		let program = parsing::try_program_from_str("noop\naddx 3\naddx -5").unwrap();
		assert_eq!(program, [Instruction::Noop, Instruction::Addx(3), Instruction::Addx(-5)]);
		assert_eq!(register_values(&program).collect::<Vec<_>>(), [1, 1, 1, 4, 4]);

		let noops = "noop\n".repeat(240);
		assert_eq!(part1(&noops).unwrap(), 20 + 60 + 100 + 140 + 180 + 220);
		assert_eq!(part1(&format!("addx 5\n{noops}")).unwrap(), 6 * 720);
		let row = format!("###{}", ".".repeat(37));
		assert_eq!(part2(&noops).unwrap(), [row.as_str(); 6].join("\n"));
		assert!(part2("noop").is_err());
		assert!(part1("addx").is_err());
	}
}
