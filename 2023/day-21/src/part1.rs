use miette::*;

use crate::garden;

const STEPS: usize = 64;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    plots_after(input, STEPS)
}

fn plots_after(input: &str, steps: usize) -> Result<String> {
    let grid = garden::parse(input)?;
    let start = garden::find_start(&grid)?;
    let distances = garden::distances(&grid, start);

    Ok(garden::reachable(&distances, steps).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "...........
.....###.#.
.###.##..#.
..#.#...#..
....#.#....
.##..S####.
.##..#...#.
.......##..
.##.#.####.
.##..##.##.
...........
";
        assert_eq!("16", plots_after(input, 6)?);
        Ok(())
    }

    #[test]
    fn map_without_start_is_an_error() {
        assert!(process("...\n.#.\n...").is_err());
    }
}
