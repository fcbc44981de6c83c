use chumsky::prelude::*;
use itertools::{Either, Itertools};
use miette::*;

/// One line of the ingredient database.
#[derive(Debug, Clone, Copy)]
enum Record {
    FreshRange(u64, u64),
    Ingredient(u64),
}

/// Every nonblank line is either a `lo-hi` pair or a lone ID, so the
/// blank line between the two blocks is just a wider separator.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Record>, extra::Err<Rich<'a, char>>> {
    let record = text::int(10)
        .from_str::<u64>()
        .unwrapped()
        .then(
            just('-')
                .ignore_then(text::int(10).from_str::<u64>().unwrapped())
                .or_not(),
        )
        .map(|(first, second)| match second {
            Some(end) => Record::FreshRange(first, end),
            None => Record::Ingredient(first),
        });

    record
        .separated_by(text::newline().repeated().at_least(1))
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let records = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let (ranges, ingredients): (Vec<(u64, u64)>, Vec<u64>) =
        records.into_iter().partition_map(|record| match record {
            Record::FreshRange(lo, hi) => Either::Left((lo, hi)),
            Record::Ingredient(id) => Either::Right(id),
        });

    let fresh = ingredients
        .into_iter()
        .filter(|id| ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(id)))
        .count();

    Ok(fresh.to_string())
}
