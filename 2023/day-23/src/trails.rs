//! The longest scenic hike through the island's forest trails.
//!
//! Trails are mostly one tile wide, so the map collapses into a small graph of
//! junctions joined by corridors. The longest path is then an exhaustive
//! search over that graph, never visiting a junction twice.

use std::collections::HashMap;

use aoc2023_common::{Direction, Grid, GridError, Position, Symbol};
use bitvec::prelude::*;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trail {
    Path,
    Forest,
    /// Icy slope; a hiker standing on it slides downhill.
    Slope(Direction),
}

impl Symbol for Trail {
    fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Trail::Path),
            '#' => Some(Trail::Forest),
            glyph => Direction::from_glyph(glyph).map(Trail::Slope),
        }
    }

    fn to_char(&self) -> char {
        match self {
            Trail::Path => '.',
            Trail::Forest => '#',
            Trail::Slope(direction) => direction.glyph(),
        }
    }
}

impl Trail {
    pub fn is_open(self) -> bool {
        self != Trail::Forest
    }

    /// Whether a hiker standing here may leave toward `direction`. Dry slopes
    /// behave like paths.
    pub fn allows(self, direction: Direction, slippery: bool) -> bool {
        match self {
            Trail::Path => true,
            Trail::Forest => false,
            Trail::Slope(downhill) => !slippery || downhill == direction,
        }
    }
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum HikeError {
    #[error("no path tile in the top row to start from")]
    #[diagnostic(code(trails::no_trailhead))]
    NoTrailhead,

    #[error("no path tile in the bottom row to finish on")]
    #[diagnostic(code(trails::no_exit))]
    NoExit,

    #[error("no hike leads from {start} to {end}")]
    #[diagnostic(code(trails::no_hike))]
    NoHike { start: Position, end: Position },
}

pub fn parse(input: &str) -> Result<Grid<Trail>, GridError> {
    Grid::parse(input)
}

const START: usize = 0;
const END: usize = 1;

/// Junctions of the trail map and the corridors between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailGraph {
    /// The trailhead first, the exit second, then every fork.
    pub junctions: Vec<Position>,
    /// Outgoing `(junction, length)` corridors per junction.
    pub corridors: Vec<Vec<(usize, usize)>>,
}

impl TrailGraph {
    #[tracing::instrument(skip(grid))]
    pub fn build(grid: &Grid<Trail>, slippery: bool) -> Result<Self, HikeError> {
        let row_path = |row: usize| {
            (0..grid.ncols())
                .map(move |col| Position::new(row, col))
                .find(|&p| grid.get(p) == Some(&Trail::Path))
        };
        let start = row_path(0).ok_or(HikeError::NoTrailhead)?;
        let end = grid
            .nrows()
            .checked_sub(1)
            .and_then(row_path)
            .filter(|&end| end != start)
            .ok_or(HikeError::NoExit)?;

        let forks = grid.positions().filter(|&p| {
            p != start
                && p != end
                && grid.get(p).is_some_and(|t| t.is_open())
                && grid
                    .neighbours(p, Direction::ALL)
                    .filter(|(_, t)| t.is_open())
                    .count()
                    >= 3
        });
        let junctions = [start, end].into_iter().chain(forks).collect::<Vec<_>>();
        let index = junctions
            .iter()
            .enumerate()
            .map(|(i, &p)| (p, i))
            .collect::<HashMap<_, _>>();

        let corridors = junctions
            .iter()
            .enumerate()
            .map(|(i, &from)| {
                Direction::ALL
                    .into_iter()
                    .filter_map(|heading| follow(grid, &index, from, heading, slippery))
                    .filter(|&(to, _)| to != i)
                    .collect()
            })
            .collect();

        tracing::debug!(junctions = junctions.len(), "trail graph built");
        Ok(Self {
            junctions,
            corridors,
        })
    }

    /// Length in steps of the longest hike from the trailhead to the exit.
    pub fn longest_hike(&self) -> Result<usize, HikeError> {
        let mut visited = bitvec![0; self.junctions.len()];
        self.longest_from(START, &mut visited)
            .ok_or(HikeError::NoHike {
                start: self.junctions[START],
                end: self.junctions[END],
            })
    }

    fn longest_from(&self, junction: usize, visited: &mut BitVec) -> Option<usize> {
        if junction == END {
            return Some(0);
        }

        visited.set(junction, true);
        let mut best = None;
        for &(next, len) in &self.corridors[junction] {
            if visited[next] {
                continue;
            }
            if let Some(rest) = self.longest_from(next, visited) {
                best = best.max(Some(rest + len));
            }
        }
        visited.set(junction, false);

        best
    }
}

/// Walks the corridor leaving `from` toward `heading` up to the next
/// junction. `None` for dead ends and corridors the slopes forbid.
fn follow(
    grid: &Grid<Trail>,
    index: &HashMap<Position, usize>,
    from: Position,
    heading: Direction,
    slippery: bool,
) -> Option<(usize, usize)> {
    let (mut position, mut heading, mut len) = (from, heading, 0);
    let mut tile = *grid.get(from)?;

    loop {
        if !tile.allows(heading, slippery) {
            return None;
        }
        position = grid.step(position, heading)?;
        tile = *grid.get(position)?;
        if !tile.is_open() {
            return None;
        }
        len += 1;

        if let Some(&junction) = index.get(&position) {
            return Some((junction, len));
        }

        let back = heading.reverse();
        heading = Direction::ALL.into_iter().filter(|&d| d != back).find(|&d| {
            grid.step(position, d)
                .and_then(|p| grid.get(p))
                .is_some_and(|t| t.is_open())
        })?;
    }
}
