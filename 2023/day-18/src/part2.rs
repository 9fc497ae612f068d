use chumsky::prelude::*;
use miette::*;

use crate::lagoon::{parser, Trench};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let plan = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    // The real instructions hide in the colour codes.
    let steps = plan
        .iter()
        .map(|instruction| instruction.color_step())
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let trench = Trench::dig(steps)?;
    Ok(trench.lagoon_volume().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)";
        assert_eq!("952408144115", process(input)?);
        Ok(())
    }

    #[test]
    fn rejects_bad_colour_directions() {
        assert!(process("R 6 (#70c715)").is_err());
    }
}
