// Copyright (c) 2025 Bastiaan Marinus van de Weerd

const DIAL_SIZE: i64 = 100;
const DIAL_START: i64 = 50;

/// Dial rotation in clicks; negative is to the left.
type Rotation = i64;

/// Number of clicks during `rotation` from `position` that land on 0.
fn zero_clicks(position: i64, rotation: Rotation) -> i64 {
	let clicks = rotation.abs();
	let until_zero = match (position, rotation.signum()) {
		(0, _) => DIAL_SIZE,
		(p, 1) => DIAL_SIZE - p,
		(p, _) => p,
	};
	if clicks < until_zero { 0 } else { (clicks - until_zero) / DIAL_SIZE + 1 }
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	let rotations = parsing::try_rotations_from_str(input)?;
	Ok(rotations.iter()
		.scan(DIAL_START, |position, &rotation| {
			*position = (*position + rotation).rem_euclid(DIAL_SIZE);
			tracing::debug!(rotation, position = *position, "rotated");
			Some(*position)
		})
		.filter(|&position| position == 0)
		.count())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<i64> {
	let rotations = parsing::try_rotations_from_str(input)?;
	let mut position = DIAL_START;
	let mut zeroes = 0;
	for rotation in rotations {
		zeroes += zero_clicks(position, rotation);
		position = (position + rotation).rem_euclid(DIAL_SIZE);
	}
	Ok(zeroes)
}


mod parsing {
	use std::num::ParseIntError;
	use super::Rotation;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RotationError {
		#[error("expected `L` or `R` on line {line}")]
		Direction { line: usize },
		#[error("invalid distance on line {line}")]
		Distance { line: usize, source: ParseIntError },
	}

	pub(super) fn try_rotations_from_str(s: &str) -> Result<Vec<Rotation>, RotationError> {
		s.lines()
			.enumerate()
			.map(|(l, line)| (l + 1, line.trim()))
			.filter(|(_, line)| !line.is_empty())
			.map(|(line, s)| {
				let (sign, distance) = match s.split_at(s.find(|c: char| c.is_ascii_digit()).unwrap_or(s.len())) {
					("L", distance) => (-1, distance),
					("R", distance) => (1, distance),
					_ => return Err(RotationError::Direction { line }),
				};
				let distance = distance.parse::<Rotation>().map_err(|e| RotationError::Distance { line, source: e })?;
				Ok(sign * distance)
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		L68
		L30
		R48
		L5
		R60
		L55
		L1
		L99
		R14
		L82
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 3);
		assert_eq!(part2(INPUT).unwrap(), 6);
		assert_eq!(part2("R1000").unwrap(), 10);
		assert_eq!(zero_clicks(0, -100), 1);
		assert_eq!(zero_clicks(5, -4), 0);
		assert!(part1("U3").is_err());
	}
}
