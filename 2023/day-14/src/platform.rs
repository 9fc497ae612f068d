use std::fmt;

use aoc2023_common::{Direction, Grid, GridError, Position, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rock {
    Round,
    Cube,
    Empty,
}

impl Symbol for Rock {
    fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            'O' => Some(Rock::Round),
            '#' => Some(Rock::Cube),
            '.' => Some(Rock::Empty),
            _ => None,
        }
    }

    fn to_char(&self) -> char {
        match self {
            Rock::Round => 'O',
            Rock::Cube => '#',
            Rock::Empty => '.',
        }
    }
}

/// The order in which one spin cycle tilts the platform.
const SPIN: [Direction; 4] = [
    Direction::North,
    Direction::West,
    Direction::South,
    Direction::East,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    grid: Grid<Rock>,
}

impl Platform {
    pub fn parse(input: &str) -> Result<Self, GridError> {
        Grid::parse(input).map(|grid| Self { grid })
    }

    /// Number of lanes rocks roll along when tilting toward `direction`, and
    /// the length of each lane.
    fn lanes(&self, direction: Direction) -> (usize, usize) {
        let (nrows, ncols) = (self.grid.nrows(), self.grid.ncols());
        if direction.is_vertical() {
            (ncols, nrows)
        } else {
            (nrows, ncols)
        }
    }

    /// The `i`-th cell of a lane, counted from the edge rocks roll toward.
    fn lane_position(&self, direction: Direction, lane: usize, i: usize) -> Position {
        let (nrows, ncols) = (self.grid.nrows(), self.grid.ncols());
        match direction {
            Direction::North => Position::new(i, lane),
            Direction::South => Position::new(nrows - 1 - i, lane),
            Direction::West => Position::new(lane, i),
            Direction::East => Position::new(lane, ncols - 1 - i),
        }
    }

    /// Rolls every round rock toward `direction` until it hits the edge, a
    /// cube rock or another settled round rock.
    pub fn tilt(&self, direction: Direction) -> Self {
        let ncols = self.grid.ncols();
        let mut settled = self.grid.cells().to_vec();
        let (lanes, len) = self.lanes(direction);

        for lane in 0..lanes {
            let mut free = 0;
            for i in 0..len {
                let position = self.lane_position(direction, lane, i);
                match self.grid.get(position) {
                    Some(Rock::Cube) => free = i + 1,
                    Some(Rock::Round) => {
                        let target = self.lane_position(direction, lane, free);
                        settled[position.row * ncols + position.col] = Rock::Empty;
                        settled[target.row * ncols + target.col] = Rock::Round;
                        free += 1;
                    }
                    _ => {}
                }
            }
        }

        Self {
            grid: self
                .grid
                .map(|position, _| settled[position.row * ncols + position.col]),
        }
    }

    /// Tilts north, west, south and then east.
    pub fn spin_cycle(&self) -> Self {
        SPIN.iter()
            .fold(self.clone(), |platform, &direction| platform.tilt(direction))
    }

    /// Each round rock weighs as many rows as separate it from the south edge,
    /// its own row included.
    pub fn north_load(&self) -> usize {
        let nrows = self.grid.nrows();
        self.grid
            .positions()
            .filter(|&p| self.grid.get(p) == Some(&Rock::Round))
            .map(|p| nrows - p.row)
            .sum()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
