use std::collections::HashSet;

use itertools::Itertools;
use miette::*;

/// A shelf cell holding a roll, addressed as (row, column).
type Spot = (i32, i32);

/// Collects the positions that hold a paper roll. Any character other
/// than '@' is empty shelf space, so off-grid lookups and '.' cells fall
/// out of the set the same way.
fn parse_rolls(input: &str) -> HashSet<Spot> {
    input
        .lines()
        .enumerate()
        .flat_map(|(row, line)| {
            line.bytes()
                .enumerate()
                .filter(|&(_, byte)| byte == b'@')
                .map(move |(col, _)| (row as i32, col as i32))
        })
        .collect()
}

/// Counts the rolls in the eight cells around `spot`.
fn adjacent_rolls(rolls: &HashSet<Spot>, (row, col): Spot) -> usize {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&offset| offset != (0, 0))
        .filter(|&(dr, dc)| rolls.contains(&(row + dr, col + dc)))
        .count()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rolls = parse_rolls(input);

    // A roll can be lifted out when fewer than 4 rolls crowd around it.
    let accessible = rolls
        .iter()
        .filter(|&&spot| adjacent_rolls(&rolls, spot) < 4)
        .count();

    Ok(accessible.to_string())
}
