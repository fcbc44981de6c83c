use chumsky::prelude::*;
use miette::*;

/// Positions on the dial, 0 through 99.
const DIAL_POSITIONS: i64 = 100;

/// Every dial starts out pointing at 50.
const START_POSITION: i64 = 50;

/// One rotation of the dial: a direction letter and a number of clicks.
///
/// The letter is kept as parsed rather than decoded into a direction,
/// because the two password methods read it differently: here anything
/// that is not 'L' turns right, while part two treats anything that is
/// not 'R' as a left turn.
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
    let mut landings = 0u32;

    for rotation in rotations {
        // Only 'L' turns left; any other letter is read as a right turn.
        let delta = match rotation.letter {
            'L' => -i64::from(rotation.clicks),
            _ => i64::from(rotation.clicks),
        };

        // Only the resting position counts here, so the whole rotation
        // collapses into a single wrapping move.
        position = (position + delta).rem_euclid(DIAL_POSITIONS);

        if position == 0 {
            landings += 1;
        }
    }

    Ok(landings.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::no_rotations("", "0")]
    #[case::left_onto_zero("L50", "1")]
    #[case::right_onto_zero("R50", "1")]
    #[case::full_circle_misses("R100", "0")]
    #[case::passes_without_resting("L60", "0")]
    #[case::stops_short("R10\nL20", "0")]
    fn counts_resting_positions(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn unknown_letters_turn_right() -> Result<()> {
        // 'X' is not 'L', so it turns right: 30 + 70 wraps onto 0.
        assert_eq!("1", process("L20\nX70")?);
        Ok(())
    }

    #[test]
    fn spaced_click_counts_parse() -> Result<()> {
        assert_eq!("1", process("L 50")?);
        Ok(())
    }

    #[test]
    fn clickless_rotation_is_an_error() {
        assert!(process("L").is_err());
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
        assert_eq!("3", process(input)?);
        Ok(())
    }
}
