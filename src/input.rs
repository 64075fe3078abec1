// Copyright (c) 2025 Bastiaan Marinus van de Weerd

use std::{io::Read as _, path::Path};

use anyhow::Context as _;


/// Reads the whole puzzle input from `path`, or from standard input when
/// there is no path or it is `-`.
pub(crate) fn read(path: Option<&Path>) -> anyhow::Result<String> {
	match path {
		Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
			.with_context(|| format!("failed to read input file {}", path.display())),
		_ => {
			let mut input = String::new();
			std::io::stdin().lock().read_to_string(&mut input)
				.context("failed to read standard input")?;
			Ok(input)
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_file() {
		let path = std::env::temp_dir().join(format!("advent-input-{}.txt", std::process::id()));
		std::fs::write(&path, "1\n2\n").unwrap();
		assert_eq!(read(Some(&path)).unwrap(), "1\n2\n");
		std::fs::remove_file(&path).unwrap();
		assert!(read(Some(&path)).is_err());
	}
}
