use miette::*;

use crate::garden;

const STEPS: usize = 26_501_365;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = garden::parse(input)?;
    let start = garden::find_start(&grid)?;

    Ok(garden::reachable_far(&grid, start, STEPS)?.to_string())
}
