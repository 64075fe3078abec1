// Copyright (c) 2021 Bastiaan Marinus van de Weerd


const SPAWN_TIMER: usize = 8;
const RESET_TIMER: usize = 6;

/// Number of fish per timer value.
type School = [u64; SPAWN_TIMER + 1];

fn school_size_after<const DAYS: usize>(mut school: School) -> u64 {
	for _ in 0..DAYS {
		school.rotate_left(1);
		school[RESET_TIMER] += school[SPAWN_TIMER];
	}
	school.iter().sum()
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	Ok(school_size_after::<80>(parsing::try_school_from_str(input)?))
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	Ok(school_size_after::<256>(parsing::try_school_from_str(input)?))
}


mod parsing {
	use std::num::ParseIntError;
	use super::{School, SPAWN_TIMER};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum SchoolError {
		#[error("invalid timer in column {column}")]
		Timer { column: usize, source: ParseIntError },
		#[error("timer {found} in column {column} is out of range")]
		Range { column: usize, found: usize },
	}

	pub(super) fn try_school_from_str(s: &str) -> Result<School, SchoolError> {
		let mut school = School::default();
		let mut column = 1;
		for timer in s.trim().split(',') {
			let found: usize = timer.parse()
				.map_err(|e| SchoolError::Timer { column, source: e })?;
			if found > SPAWN_TIMER { return Err(SchoolError::Range { column, found }) }
			school[found] += 1;
			column += timer.len() + 1;
		}
		Ok(school)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = "3,4,3,1,2\n";

	#[test]
	fn tests() {
		let school = parsing::try_school_from_str(INPUT).unwrap();
		assert_eq!(school_size_after::<18>(school), 26);
		assert_eq!(part1(INPUT).unwrap(), 5934);
		assert_eq!(part2(INPUT).unwrap(), 26_984_457_539);
		assert!(part1("3,9").is_err());
	}
}
