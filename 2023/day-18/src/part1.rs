use chumsky::prelude::*;
use miette::*;

use crate::lagoon::{parser, Trench};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let plan = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let trench = Trench::dig(plan.iter().map(|instruction| instruction.step))?;
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
U 2 (#7a21e3)
";
        assert_eq!("62", process(input)?);
        Ok(())
    }

    #[test]
    fn rejects_garbled_lines() {
        assert!(process("R six (#70c710)").is_err());
    }

    #[test]
    fn rejects_distances_that_do_not_fit() {
        assert!(process("R 99999999999999999999 (#70c710)").is_err());
        assert!(process("R 9223372036854775807 (#70c710)\nR 1 (#70c710)").is_err());
    }

    #[test]
    fn there_and_back_digs_each_block_once() -> Result<()> {
        assert_eq!("4", process("R 3 (#000000)\nL 3 (#000000)")?);
        Ok(())
    }
}
