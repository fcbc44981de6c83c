use std::env;
use std::fs;

use miette::*;

use aoc25_day_3::{part1, part2};

const INPUT_PATH: &str = "2025/day-3/input.txt";

/// Reads the puzzle input from `path` at run time.
fn read_input(path: &str) -> Result<String> {
    fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let path = env::args().nth(1).unwrap_or_else(|| INPUT_PATH.to_string());
    let input = read_input(&path)?;

    println!("Part 1: {}", part1::process(&input)?);
    println!("Part 2: {}", part2::process(&input)?);

    Ok(())
}
