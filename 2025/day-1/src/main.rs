use std::env;
use std::fs;

use miette::*;

use aoc25_day_1::{part1, part2};

const INPUT_PATH: &str = "2025/day-1/input.txt";

/// Reads the puzzle input from `path` at run time.
fn read_input(path: &str) -> Result<String> {
    fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let path = env::args().nth(1).unwrap_or_else(|| INPUT_PATH.to_string());

    // Each part re-reads the input; nothing is cached between them.
    println!("{}", part1::process(&read_input(&path)?)?);
    println!("{}", part2::process(&read_input(&path)?)?);

    Ok(())
}
