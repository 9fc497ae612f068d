use miette::*;

use crate::pipes;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = pipes::parse(input)?;
    let tiles = pipes::main_loop(&grid)?;

    Ok(pipes::enclosed_tiles(&tiles).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";
        assert_eq!("4", process(input)?);
        Ok(())
    }

    #[test]
    fn squeezing_between_pipes_stays_outside() -> Result<()> {
        let input = "..........
.S------7.
.|F----7|.
.||....||.
.||....||.
.|L-7F-J|.
.|..||..|.
.L--JL--J.
..........";
        assert_eq!("4", process(input)?);
        Ok(())
    }
}
