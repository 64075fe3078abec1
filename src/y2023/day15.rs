// Copyright (c) 2023 Bastiaan Marinus van de Weerd

fn hash(s: &str) -> usize {
	s.bytes().fold(0, |value, b| (value + b as usize) * 17 % 256)
}

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
enum Operation { Remove, Insert(u8) }

fn steps(input: &str) -> impl Iterator<Item = &str> {
	input.split(',').map(str::trim).filter(|step| !step.is_empty())
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	Ok(steps(input).map(hash).sum())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	let mut boxes = vec![Vec::<(&str, u8)>::new(); 256];
	for step in steps(input) {
		let (label, operation) = parsing::try_step_from_str(step)?;
		let lenses = &mut boxes[hash(label)];
		let slot = lenses.iter().position(|&(l, _)| l == label);
		match (operation, slot) {
			(Operation::Remove, Some(slot)) => { lenses.remove(slot); }
			(Operation::Remove, None) => (),
			(Operation::Insert(focal_length), Some(slot)) => lenses[slot].1 = focal_length,
			(Operation::Insert(focal_length), None) => lenses.push((label, focal_length)),
		}
	}
	Ok(boxes.iter()
		.enumerate()
		.flat_map(|(b, lenses)| lenses.iter()
			.enumerate()
			.map(move |(s, &(_, focal_length))| (b + 1) * (s + 1) * focal_length as usize))
		.sum())
}


mod parsing {
	use super::Operation;

	#[derive(Debug, thiserror::Error)]
	#[error("invalid step {0:?}")]
	pub(super) struct StepError(String);

	pub(super) fn try_step_from_str(s: &str) -> Result<(&str, Operation), StepError> {
		let error = || StepError(s.to_owned());
		if let Some(label) = s.strip_suffix('-') {
			return Ok((label, Operation::Remove))
		}
		let (label, focal_length) = s.split_once('=').ok_or_else(error)?;
		match focal_length.parse::<u8>() {
			Ok(focal_length @ 1..=9) => Ok((label, Operation::Insert(focal_length))),
			_ => Err(error()),
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7\n";

	#[test]
	fn tests() {
		assert_eq!(hash("HASH"), 52);
		assert_eq!(part1(INPUT).unwrap(), 1320);
		assert_eq!(part2(INPUT).unwrap(), 145);
		assert_eq!(parsing::try_step_from_str("cm-").unwrap(), ("cm", Operation::Remove));
		assert!(part2("rn=x").is_err());
	}
}
