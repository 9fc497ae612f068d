use aoc2023_common::Position;
use miette::*;

use crate::crucible::{self, RunLimits};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = crucible::parse(input)?;
    if grid.nrows() == 0 {
        return Err(miette!("The city map is empty"));
    }

    let start = Position::new(0, 0);
    let end = Position::new(grid.nrows() - 1, grid.ncols() - 1);
    let route = crucible::least_heat_loss(&grid, start, end, RunLimits::CRUCIBLE)?;

    Ok(route.heat_loss.to_string())
}
