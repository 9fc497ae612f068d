use aoc2023_common::{Direction, Position};
use miette::*;

use crate::beam::{self, Beam, Discipline};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut grid = beam::parse(input)?;
    let start = Beam::new(Position::new(0, 0), Direction::East);
    let energized = beam::energize(&mut grid, [start], Discipline::default());

    Ok(energized.to_string())
}
