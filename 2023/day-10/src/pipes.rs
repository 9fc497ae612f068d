//! The pipe maze: one closed loop of pipes running through the start tile.

use aoc2023_common::{Direction, Grid, GridError, Position, Symbol};
use itertools::Itertools;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipe {
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
    /// `L`
    NorthEast,
    /// `J`
    NorthWest,
    /// `7`
    SouthWest,
    /// `F`
    SouthEast,
    Ground,
    /// `S`, a pipe of unknown shape.
    Start,
}

impl Symbol for Pipe {
    fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '|' => Some(Pipe::Vertical),
            '-' => Some(Pipe::Horizontal),
            'L' => Some(Pipe::NorthEast),
            'J' => Some(Pipe::NorthWest),
            '7' => Some(Pipe::SouthWest),
            'F' => Some(Pipe::SouthEast),
            '.' => Some(Pipe::Ground),
            'S' => Some(Pipe::Start),
            _ => None,
        }
    }

    fn to_char(&self) -> char {
        match self {
            Pipe::Vertical => '|',
            Pipe::Horizontal => '-',
            Pipe::NorthEast => 'L',
            Pipe::NorthWest => 'J',
            Pipe::SouthWest => '7',
            Pipe::SouthEast => 'F',
            Pipe::Ground => '.',
            Pipe::Start => 'S',
        }
    }
}

impl Pipe {
    /// Directions this tile opens toward. The start radiates in all four.
    pub fn exits(self) -> &'static [Direction] {
        use Direction::*;

        match self {
            Pipe::Vertical => &[North, South],
            Pipe::Horizontal => &[East, West],
            Pipe::NorthEast => &[North, East],
            Pipe::NorthWest => &[North, West],
            Pipe::SouthWest => &[South, West],
            Pipe::SouthEast => &[East, South],
            Pipe::Ground => &[],
            Pipe::Start => &Direction::ALL,
        }
    }

    pub fn opens(self, direction: Direction) -> bool {
        self.exits().contains(&direction)
    }
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum MazeError {
    #[error("the maze has no start tile")]
    #[diagnostic(code(pipes::missing_start))]
    MissingStart,

    #[error("no pipe connects to the start tile at {0}")]
    #[diagnostic(code(pipes::isolated_start))]
    IsolatedStart(Position),

    #[error("the loop breaks at {0}")]
    #[diagnostic(
        code(pipes::broken_loop),
        help("every pipe on the loop must connect to the next one")
    )]
    Broken(Position),
}

pub fn parse(input: &str) -> Result<Grid<Pipe>, GridError> {
    Grid::parse(input)
}

pub fn find_start(grid: &Grid<Pipe>) -> Result<Position, MazeError> {
    grid.positions()
        .find(|&p| grid.get(p) == Some(&Pipe::Start))
        .ok_or(MazeError::MissingStart)
}

/// Tiles of the loop through the start, in walking order and starting with
/// the start itself.
#[tracing::instrument(skip(grid))]
pub fn main_loop(grid: &Grid<Pipe>) -> Result<Vec<Position>, MazeError> {
    let start = find_start(grid)?;
    let mut heading = Direction::ALL
        .into_iter()
        .find(|&direction| {
            grid.step(start, direction)
                .and_then(|p| grid.get(p))
                .is_some_and(|pipe| pipe.opens(direction.reverse()))
        })
        .ok_or(MazeError::IsolatedStart(start))?;

    let mut tiles = vec![start];
    let mut position = start;
    loop {
        position = grid
            .step(position, heading)
            .ok_or(MazeError::Broken(position))?;
        if position == start {
            break;
        }

        let pipe = grid.get(position).copied().unwrap_or(Pipe::Ground);
        if !pipe.opens(heading.reverse()) || tiles.len() >= grid.cells().len() {
            return Err(MazeError::Broken(position));
        }
        heading = pipe
            .exits()
            .iter()
            .copied()
            .find(|&exit| exit != heading.reverse())
            .ok_or(MazeError::Broken(position))?;
        tiles.push(position);
    }

    tracing::debug!(len = tiles.len(), "loop closed");
    Ok(tiles)
}

/// Tiles strictly inside the loop, from the shoelace area and Pick's theorem.
pub fn enclosed_tiles(tiles: &[Position]) -> usize {
    if tiles.len() < 3 {
        return 0;
    }
    let twice_area: i64 = tiles
        .iter()
        .circular_tuple_windows()
        .map(|(a, b)| {
            let (ar, ac) = (a.row as i64, a.col as i64);
            let (br, bc) = (b.row as i64, b.col as i64);
            ar * bc - br * ac
        })
        .sum();
    let boundary = tiles.len() as i64;

    usize::try_from((twice_area.abs() - boundary + 2) / 2).unwrap_or(0)
}
