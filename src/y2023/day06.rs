// Copyright (c) 2023 Bastiaan Marinus van de Weerd

#[derive(Clone, Copy)]
struct Race { time: u64, record: u64 }

impl Race {
	fn beats_record(self, hold: u64) -> bool {
		hold <= self.time && hold * (self.time - hold) > self.record
	}

	/// Number of whole-millisecond hold times that beat the record.
	///
	/// The winning holds lie strictly between the roots of
	/// `hold * (time - hold) = record`; the float estimate of the lower root is
	/// nudged until the integer checks agree, and the range is symmetric.
	fn ways_to_win(self) -> u64 {
		let (time, record) = (self.time as f64, self.record as f64);
		let discriminant = time * time - 4.0 * record;
		if discriminant <= 0.0 { return 0 }
		let mut lowest = ((time - discriminant.sqrt()) / 2.0).max(0.0) as u64;
		while lowest > 0 && self.beats_record(lowest - 1) { lowest -= 1 }
		while lowest <= self.time / 2 && !self.beats_record(lowest) { lowest += 1 }
		if lowest > self.time / 2 { return 0 }
		self.time + 1 - 2 * lowest
	}
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	let races = parsing::try_races_from_str(input, false)?;
	Ok(races.iter().map(|race| race.ways_to_win()).product())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	let races = parsing::try_races_from_str(input, true)?;
	Ok(races.iter().map(|race| race.ways_to_win()).product())
}


mod parsing {
	use std::num::ParseIntError;
	use super::Race;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RacesError {
		#[error("expected a `{0}` line")]
		Line(&'static str),
		#[error("invalid number")]
		Number(#[from] ParseIntError),
		#[error("expected as many times as distances")]
		Mismatch,
	}

	/// Parses the race sheet; with `kerned`, each line holds a single number
	/// with its spaces ignored.
	pub(super) fn try_races_from_str(s: &str, kerned: bool) -> Result<Vec<Race>, RacesError> {
		let mut lines = s.lines().map(str::trim).filter(|line| !line.is_empty());
		let mut numbers = |label: &'static str| -> Result<Vec<u64>, RacesError> {
			let values = lines.next()
				.and_then(|line| line.strip_prefix(label))
				.ok_or(RacesError::Line(label))?;
			if kerned { return Ok(vec![values.replace(' ', "").parse()?]) }
			Ok(values.split_whitespace().map(str::parse).collect::<Result<_, _>>()?)
		};
		let times = numbers("Time:")?;
		let records = numbers("Distance:")?;
		if times.len() != records.len() { return Err(RacesError::Mismatch) }
		Ok(times.into_iter().zip(records).map(|(time, record)| Race { time, record }).collect())
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Time:      7  15   30
		Distance:  9  40  200
	" };

	#[test]
	fn tests() {
		assert_eq!(part1(INPUT).unwrap(), 288);
		assert_eq!(part2(INPUT).unwrap(), 71503);
		assert_eq!(Race { time: 30, record: 200 }.ways_to_win(), 9);
		assert_eq!(Race { time: 4, record: 4 }.ways_to_win(), 0);
		assert_eq!(Race { time: 2, record: 0 }.ways_to_win(), 1);
		assert!(part1("Time: 1 2\nDistance: 3").is_err());
	}
}
