use miette::*;

use crate::beam;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = beam::parse(input)?;
    let best = beam::best_energize(&grid);
    Ok(best.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....";
        assert_eq!("51", process(input)?);
        Ok(())
    }
}
