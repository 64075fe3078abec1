// Copyright (c) 2023 Bastiaan Marinus van de Weerd

/// Card strength, `2` through `A` as 2 to 14, or 1 for a joker.
type Card = u8;

const JOKER: Card = 1;
const JACK: Card = 11;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
enum HandType {
	HighCard,
	OnePair,
	TwoPair,
	ThreeOfAKind,
	FullHouse,
	FourOfAKind,
	FiveOfAKind,
}

impl HandType {
	fn of(cards: &[Card; 5]) -> Self {
		use HandType::*;

		let mut counts = [0u8; 15];
		for &card in cards { counts[card as usize] += 1 }
		let jokers = std::mem::take(&mut counts[JOKER as usize]);
		counts.sort_unstable_by(|a, b| b.cmp(a));
		match (counts[0] + jokers, counts[1]) {
			(5, _) => FiveOfAKind,
			(4, _) => FourOfAKind,
			(3, 2) => FullHouse,
			(3, _) => ThreeOfAKind,
			(2, 2) => TwoPair,
			(2, _) => OnePair,
			_ => HighCard,
		}
	}
}

struct Hand {
	cards: [Card; 5],
	bid: u64,
}

impl Hand {
	fn with_jokers(mut self) -> Self {
		for card in &mut self.cards {
			if *card == JACK { *card = JOKER }
		}
		self
	}

	fn strength(&self) -> (HandType, [Card; 5]) {
		(HandType::of(&self.cards), self.cards)
	}
}

fn total_winnings(mut hands: Vec<Hand>) -> u64 {
	hands.sort_by_cached_key(Hand::strength);
	hands.iter().zip(1..).map(|(hand, rank)| hand.bid * rank).sum()
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	let hands = parsing::try_hands_from_str(input)?;
	Ok(total_winnings(hands))
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	let hands = parsing::try_hands_from_str(input)?;
	Ok(total_winnings(hands.into_iter().map(Hand::with_jokers).collect()))
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Card, Hand};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum HandError {
		#[error("expected five cards and a bid on line {line}")]
		Format { line: usize },
		#[error("invalid card {found:?} on line {line}")]
		Card { line: usize, found: char },
		#[error("invalid bid on line {line}")]
		Bid { line: usize, source: ParseIntError },
	}

	fn try_card_from_char(c: char) -> Option<Card> {
		match c {
			'2'..='9' => Some(c as u8 - b'0'),
			'T' => Some(10),
			'J' => Some(11),
			'Q' => Some(12),
			'K' => Some(13),
			'A' => Some(14),
			_ => None,
		}
	}

	pub(super) fn try_hands_from_str(s: &str) -> Result<Vec<Hand>, HandError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| (l + 1, line.trim()))
			.filter(|(_, line)| !line.is_empty())
			.map(|(line, s)| {
				let (cards, bid) = s.split_once(' ').ok_or(HandError::Format { line })?;
				let cards = cards.chars()
					.map(|c| try_card_from_char(c).ok_or(HandError::Card { line, found: c }))
					.collect::<Result<Vec<_>, _>>()?
					.try_into()
					.map_err(|_| HandError::Format { line })?;
				let bid = bid.trim().parse().map_err(|e| HandError::Bid { line, source: e })?;
				Ok(Hand { cards, bid })
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		32T3K 765
		T55J5 684
		KK677 28
		KTJJT 220
		QQQJA 483
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 6440);
		assert_eq!(part2(INPUT).unwrap(), 5905);
	}

	#[test]
	fn hand_types() {
		use HandType::*;
		assert_eq!(HandType::of(&[14, 4, 5, 11, 8]), HighCard);
		assert_eq!(HandType::of(&[14, 4, 5, JOKER, 8]), OnePair);
		assert_eq!(HandType::of(&[14, 4, 5, JOKER, JOKER]), ThreeOfAKind);
		assert_eq!(HandType::of(&[14, 2, JOKER, 14, 4]), ThreeOfAKind);
		assert_eq!(HandType::of(&[11, 2, 11, 2, 4]), TwoPair);
		assert_eq!(HandType::of(&[11, 2, JOKER, 2, 11]), FullHouse);
		assert_eq!(HandType::of(&[JOKER; 5]), FiveOfAKind);
		assert!(part1("32T3X 765").is_err());
		assert!(part1("32T3 765").is_err());
	}
}
