use chumsky::prelude::*;
use itertools::Itertools;
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

    let total: u64 = records
        .into_iter()
        .filter_map(|record| match record {
            Record::FreshRange(lo, hi) => Some((lo, hi)),
            Record::Ingredient(_) => None,
        })
        .sorted_by_key(|&(lo, _)| lo)
        // Touching or overlapping ranges fold into one: 3-5 and 6-8 cover 3-8.
        .coalesce(|left, right| {
            if right.0 <= left.1 + 1 {
                Ok((left.0, left.1.max(right.1)))
            } else {
                Err((left, right))
            }
        })
        .map(|(lo, hi)| hi - lo + 1)
        .sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_ranges_fuse() -> Result<()> {
        assert_eq!("6", process("3-5\n6-8")?);
        Ok(())
    }

    #[test]
    fn nested_ranges_add_nothing() -> Result<()> {
        assert_eq!("11", process("10-20\n12-15")?);
        Ok(())
    }

    #[test]
    fn gaps_stay_split() -> Result<()> {
        assert_eq!("4", process("1-2\n10-11")?);
        Ok(())
    }

    #[test]
    fn ingredient_ids_are_ignored() -> Result<()> {
        assert_eq!("3", process("3-5\n\n7\n9")?);
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "3-5
10-14
16-20
12-18

1
5
8
11
17
32";
        assert_eq!("14", process(input)?);
        Ok(())
    }
}
