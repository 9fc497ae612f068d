use miette::*;

use crate::pipes;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = pipes::parse(input)?;
    let tiles = pipes::main_loop(&grid)?;

    // The farthest tile sits halfway round the loop.
    Ok((tiles.len() / 2).to_string())
}
