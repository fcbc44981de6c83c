use chumsky::prelude::*;
use miette::*;

/// Largest joltage readable from `bank` by turning on exactly `count`
/// batteries while keeping their left-to-right order.
///
/// Greedy: each pick takes the first occurrence of the biggest digit in
/// the window that still leaves room for the picks after it.
fn max_joltage(bank: &str, count: usize) -> u64 {
    let digits = bank.as_bytes();

    if digits.len() < count {
        return 0;
    }

    let mut joltage = 0u64;
    let mut start = 0;

    for remaining in (1..=count).rev() {
        // A pick must leave `remaining - 1` digits after it.
        let end = digits.len() - remaining + 1;

        let mut best = start;
        for idx in start + 1..end {
            if digits[idx] > digits[best] {
                best = idx;
            }
        }

        joltage = joltage * 10 + u64::from(digits[best] - b'0');
        start = best + 1;
    }

    joltage
}

/// Parses one bank of battery ratings per line, kept as a raw digit run
/// so leading zeros survive.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<&'a str>, extra::Err<Rich<'a, char>>> {
    let bank = text::digits(10).to_slice();

    bank.separated_by(text::newline()).allow_trailing().collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let total: u64 = banks.into_iter().map(|bank| max_joltage(bank, 2)).sum();

    Ok(total.to_string())
}
