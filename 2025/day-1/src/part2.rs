use chumsky::prelude::*;
use miette::*;

/// Positions on the dial, 0 through 99.
const DIAL_POSITIONS: i64 = 100;

/// Every dial starts out pointing at 50.
const START_POSITION: i64 = 50;

/// One rotation of the dial, with the direction letter kept as parsed.
/// See part one for why the letter is not decoded at parse time.
#[derive(Debug, Clone, Copy)]
struct Rotation {
    letter: char,
    clicks: u32,
}

/// Parses one rotation per line, tolerating spaces between the letter
/// and the click count.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Rotation>, extra::Err<Rich<'a, char>>> {
    let hspace = one_of(" \t").repeated();

    let rotation = any()
        .filter(char::is_ascii_alphabetic)
        .then_ignore(hspace)
        .then(text::int(10).from_str::<u32>().unwrapped())
        .then_ignore(hspace)
        .map(|(letter, clicks)| Rotation { letter, clicks });

    rotation
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rotations = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let mut position = START_POSITION;
    let mut clicks_on_zero = 0u32;

    for rotation in rotations {
        // Only 'R' turns right; any other letter is read as a left turn.
        // The mirror image of part one, which only checks for 'L'.
        let delta = match rotation.letter {
            'R' => 1,
            _ => -1,
        };

        // Every click that lands on 0 counts, not just the resting
        // position, so the dial advances one click at a time.
        for _ in 0..rotation.clicks {
            position = (position + delta).rem_euclid(DIAL_POSITIONS);
            if position == 0 {
                clicks_on_zero += 1;
            }
        }
    }

    Ok(clicks_on_zero.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::no_rotations("", "0")]
    #[case::left_onto_zero("L50", "1")]
    #[case::right_onto_zero("R50", "1")]
    #[case::full_circle_passes_once("R100", "1")]
    #[case::passes_zero_midway("L60", "1")]
    #[case::never_touches_zero("R10\nL20", "0")]
    fn counts_every_click(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn unknown_letters_turn_left() -> Result<()> {
        // 'X' is not 'R', so it turns left: 70 - 40 stays clear of 0,
        // where a right turn would have wrapped past it.
        assert_eq!("0", process("R20\nX40")?);
        Ok(())
    }

    #[test]
    fn reruns_agree() -> Result<()> {
        let input = "R10\nL20\nL40";
        assert_eq!(process(input)?, process(input)?);
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "L68
L30
R48
L5
R60
L55
L1
L99
R14
L82";
        assert_eq!("6", process(input)?);
        Ok(())
    }
}
