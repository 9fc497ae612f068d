use aoc2023_common::Direction;
use miette::*;

use crate::platform::Platform;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let platform = Platform::parse(input)?;
    let load = platform.tilt(Direction::North).north_load();
    Ok(load.to_string())
}
