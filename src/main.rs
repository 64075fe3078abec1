// Copyright (c) 2025 Bastiaan Marinus van de Weerd

mod grid;
mod input;
mod puzzle;

mod y2021;
mod y2022;
mod y2023;
mod y2024;
mod y2025;

use std::{path::PathBuf, time::Instant};

use anyhow::Context as _;
use clap::Parser;

use puzzle::Part;


/// Solves a single day's puzzle for the given input
#[derive(Debug, Parser)]
#[command(name = "advent")]
struct Args {
	/// The year to run, the latest available year if omitted
	#[arg(short, long)]
	year: Option<u16>,

	/// The day to run
	#[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25), required_unless_present = "list")]
	day: Option<u8>,

	/// The part to run, both if omitted
	#[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
	part: Option<u8>,

	/// Input file path, standard input if omitted or `-`
	#[arg(short, long)]
	input: Option<PathBuf>,

	/// The expected answer; a different answer fails the run
	#[arg(short, long, requires = "part")]
	expected: Option<String>,

	/// Log debugging output to standard error
	#[arg(short, long)]
	verbose: bool,

	/// List the available days and exit
	#[arg(short, long)]
	list: bool,
}


fn init_tracing(verbose: bool) -> anyhow::Result<()> {
	use tracing_subscriber::{fmt, prelude::*, EnvFilter};

	let filter = if verbose {
		EnvFilter::try_new("debug")?
	} else {
		EnvFilter::try_from_default_env()
			.or_else(|_| EnvFilter::try_new("info"))?
	};
	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(std::io::stderr).with_target(false))
		.init();
	Ok(())
}


fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	init_tracing(args.verbose)?;

	if args.list {
		for (year, day) in puzzle::available() {
			println!("{year} day {day:02}");
		}
		return Ok(())
	}

	let year = args.year.unwrap_or_else(puzzle::latest_year);
	let day = args.day.context("no day given")?;
	let parts = match args.part {
		Some(part) => vec![Part::try_from(part)?],
		None => Part::BOTH.to_vec(),
	};

	let input = input::read(args.input.as_deref())?;
	tracing::debug!(bytes = input.len(), "read input");

	for part in parts {
		let started_at = Instant::now();
		let answer = puzzle::solve(year, day, part, &input)
			.with_context(|| format!("{year} day {day} part {part} failed"))?;
		tracing::info!(elapsed = ?started_at.elapsed(), "solved {year} day {day} part {part}");
		println!("{answer}");

		if let Some(expected) = args.expected.as_deref() {
			puzzle::check(&answer, expected)?;
			tracing::info!("answer matches the expected answer");
		}
	}

	Ok(())
}
