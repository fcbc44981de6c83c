use std::collections::HashSet;

use itertools::Itertools;
use miette::*;
use rayon::prelude::*;

/// A shelf cell holding a roll, addressed as (row, column).
type Spot = (i32, i32);

/// Collects the positions that hold a paper roll, as in part one.
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
    let mut rolls = parse_rolls(input);
    let mut removed = 0;

    // Lifting a roll out never crowds another roll in, so the loop ends
    // in the same stable state no matter how removals are batched.
    loop {
        let accessible: Vec<Spot> = rolls
            .par_iter()
            .copied()
            .filter(|&spot| adjacent_rolls(&rolls, spot) < 4)
            .collect();

        if accessible.is_empty() {
            break;
        }

        removed += accessible.len();
        for spot in accessible {
            rolls.remove(&spot);
        }
    }

    Ok(removed.to_string())
}
