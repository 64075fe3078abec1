// Copyright (c) 2023 Bastiaan Marinus van de Weerd

use anyhow::Context as _;


struct Card {
	winning: Vec<u32>,
	have: Vec<u32>,
}

impl Card {
	fn matches(&self) -> usize {
		self.have.iter().filter(|n| self.winning.contains(n)).count()
	}
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	let cards = parsing::try_cards_from_str(input)?;
	cards.iter().enumerate().try_fold(0u64, |total, (i, card)| {
		let points = match card.matches() {
			0 => 0,
			n => u32::try_from(n - 1).ok()
				.and_then(|shift| 1u64.checked_shl(shift))
				.with_context(|| format!("card #{} has too many matches ({n})", i + 1))?,
		};
		total.checked_add(points).context("total points overflow")
	})
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	let cards = parsing::try_cards_from_str(input)?;
	let mut copies = vec![1u64; cards.len()];
	for (i, card) in cards.iter().enumerate() {
		let won = (i + 1)..(i + 1 + card.matches()).min(cards.len());
		for j in won {
			copies[j] += copies[i];
		}
	}
	Ok(copies.iter().sum())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Card;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum CardError {
		#[error("expected `Card N: ` then winning numbers and numbers separated by `|`")]
		Format,
		#[error("invalid number")]
		Number(#[from] ParseIntError),
	}

	fn try_numbers_from_str(s: &str) -> Result<Vec<u32>, ParseIntError> {
		s.split_whitespace().map(str::parse).collect()
	}

	impl FromStr for Card {
		type Err = CardError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (_, numbers) = s.strip_prefix("Card")
				.and_then(|s| s.split_once(':'))
				.ok_or(CardError::Format)?;
			let (winning, have) = numbers.split_once('|').ok_or(CardError::Format)?;
			Ok(Card { winning: try_numbers_from_str(winning)?, have: try_numbers_from_str(have)? })
		}
	}

	#[derive(Debug, thiserror::Error)]
	#[error("invalid card on line {line}")]
	pub(super) struct CardsError { line: usize, source: CardError }

	pub(super) fn try_cards_from_str(s: &str) -> Result<Vec<Card>, CardsError> {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.parse().map_err(|e| CardsError { line: l + 1, source: e }))
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
		Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
		Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
		Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
		Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
		Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 13);
		assert_eq!(part2(INPUT).unwrap(), 30);
		assert!(part1("Card 1: 1 2 3").is_err());

		let numbers = |count: u32| (1..=count).map(|n| n.to_string()).collect::<Vec<_>>().join(" ");
		let card = |count| format!("Card 1: {0} | {0}", numbers(count));
		assert_eq!(part1(&card(40)).unwrap(), 1 << 39);
		assert_eq!(part1(&card(64)).unwrap(), 1 << 63);
		assert!(part1(&card(65)).is_err());
	}
}
