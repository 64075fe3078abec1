// Copyright (c) 2021 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Command {
	Forward(i64),
	Down(i64),
	Up(i64),
}


pub(crate) fn part1(input: &str) -> anyhow::Result<i64> {
	let (horizontal, depth) = parsing::try_commands_from_str(input)?
		.into_iter()
		.fold((0, 0), |(horizontal, depth), command| match command {
			Command::Forward(units) => (horizontal + units, depth),
			Command::Down(units) => (horizontal, depth + units),
			Command::Up(units) => (horizontal, depth - units),
		});
	Ok(horizontal * depth)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<i64> {
	let (horizontal, depth, _) = parsing::try_commands_from_str(input)?
		.into_iter()
		.fold((0, 0, 0), |(horizontal, depth, aim), command| match command {
			Command::Forward(units) => (horizontal + units, depth + aim * units, aim),
			Command::Down(units) => (horizontal, depth, aim + units),
			Command::Up(units) => (horizontal, depth, aim - units),
		});
	Ok(horizontal * depth)
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Command;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum CommandError {
		#[error("expected a direction and a number of units")]
		Format,
		#[error("unknown direction {0:?}")]
		Direction(String),
		#[error("invalid units")]
		Units(#[source] ParseIntError),
	}

	impl FromStr for Command {
		type Err = CommandError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (direction, units) = s.trim().split_once(' ').ok_or(CommandError::Format)?;
			let units = units.parse().map_err(CommandError::Units)?;
			match direction {
				"forward" => Ok(Command::Forward(units)),
				"down" => Ok(Command::Down(units)),
				"up" => Ok(Command::Up(units)),
				invalid => Err(CommandError::Direction(invalid.to_owned())),
			}
		}
	}

	#[derive(Debug, thiserror::Error)]
	#[error("invalid command on line {line}")]
	pub(super) struct CommandsError { line: usize, source: CommandError }

	pub(super) fn try_commands_from_str(s: &str) -> Result<Vec<Command>, CommandsError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| CommandsError { line: l + 1, source: e }))
			.collect()
	}

	#[test]
	fn tests() {
		assert_eq!("forward 5".parse::<Command>().unwrap(), Command::Forward(5));
		assert_eq!("up 3".parse::<Command>().unwrap(), Command::Up(3));
		assert!(matches!("sideways 3".parse::<Command>(), Err(CommandError::Direction(d)) if d == "sideways"));
		assert!(matches!("down".parse::<Command>(), Err(CommandError::Format)));
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		forward 5
		down 5
		forward 8
		up 3
		down 8
		forward 2
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 150);
		assert_eq!(part2(INPUT).unwrap(), 900);
	}
}
