// Copyright (c) 2023 Bastiaan Marinus van de Weerd

/// Red, green and blue cube counts.
#[derive(Clone, Copy, Default)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
struct Cubes([u32; 3]);

impl Cubes {
	fn max(self, other: Cubes) -> Cubes {
		Cubes(std::array::from_fn(|i| self.0[i].max(other.0[i])))
	}

	fn fits_in(self, bag: Cubes) -> bool {
		self.0.iter().zip(bag.0).all(|(&n, max)| n <= max)
	}
}

struct Game {
	id: u32,
	reveals: Vec<Cubes>,
}

impl Game {
	/// The fewest cubes of each color that make the game possible.
	fn minimum(&self) -> Cubes {
		self.reveals.iter().fold(Cubes::default(), |min, &reveal| min.max(reveal))
	}
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u32> {
	const BAG: Cubes = Cubes([12, 13, 14]);
	let games = parsing::try_games_from_str(input)?;
	Ok(games.iter().filter(|game| game.minimum().fits_in(BAG)).map(|game| game.id).sum())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u32> {
	let games = parsing::try_games_from_str(input)?;
	Ok(games.iter().map(|game| game.minimum().0.iter().product::<u32>()).sum())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Cubes, Game};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum GameError {
		#[error("expected `Game N: ` followed by reveals")]
		Format,
		#[error("invalid number")]
		Number(#[from] ParseIntError),
		#[error("expected a count and a color, found {0:?}")]
		Count(String),
		#[error("unknown color {0:?}")]
		Color(String),
	}

	impl FromStr for Cubes {
		type Err = GameError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut cubes = Cubes::default();
			for count in s.split(',').map(str::trim) {
				let (n, color) = count.split_once(' ').ok_or_else(|| GameError::Count(count.to_owned()))?;
				let i = match color {
					"red" => 0,
					"green" => 1,
					"blue" => 2,
					_ => return Err(GameError::Color(color.to_owned())),
				};
				cubes.0[i] += n.parse::<u32>()?;
			}
			Ok(cubes)
		}
	}

	impl FromStr for Game {
		type Err = GameError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (id, reveals) = s.strip_prefix("Game ")
				.and_then(|s| s.split_once(": "))
				.ok_or(GameError::Format)?;
			Ok(Game {
				id: id.parse()?,
				reveals: reveals.split(';').map(str::parse).collect::<Result<_, _>>()?,
			})
		}
	}

	#[derive(Debug, thiserror::Error)]
	#[error("invalid game on line {line}")]
	pub(super) struct GamesError { line: usize, source: GameError }

	pub(super) fn try_games_from_str(s: &str) -> Result<Vec<Game>, GamesError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.trim().parse().map_err(|e| GamesError { line: l + 1, source: e }))
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
		Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
		Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
		Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
		Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 8);
		assert_eq!(part2(INPUT).unwrap(), 2286);
		assert_eq!("3 blue, 4 red".parse::<Cubes>().unwrap(), Cubes([4, 0, 3]));
		assert!(part1("Game 1: 3 purple").is_err());
	}
}
