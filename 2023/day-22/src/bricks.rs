//! Sand bricks falling onto each other.
//!
//! Seen from above, the pile is a height map: each column remembers how tall
//! it is and which brick is on top. A falling brick stops one level above the
//! tallest column under its footprint.

use aoc2023_common::{parsing, Grid, GridError, Position};
use bitvec::prelude::*;
use glam::I64Vec3;
use miette::Diagnostic;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum BrickError {
    #[error("expected two corners of three coordinates, found {found} numbers in {line:?}")]
    #[diagnostic(code(bricks::malformed), help("bricks look like `1,0,1~1,2,1`"))]
    Malformed { line: String, found: usize },

    #[error("brick {line:?} reaches below the first level or to negative x/y")]
    #[diagnostic(code(bricks::out_of_bounds))]
    OutOfBounds { line: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Grid(#[from] GridError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brick {
    pub min: I64Vec3,
    pub max: I64Vec3,
}

impl Brick {
    pub fn parse(line: &str) -> Result<Self, BrickError> {
        let coordinates = parsing::integers(line);
        let [x1, y1, z1, x2, y2, z2] = coordinates[..] else {
            return Err(BrickError::Malformed {
                line: line.to_string(),
                found: coordinates.len(),
            });
        };

        let (a, b) = (I64Vec3::new(x1, y1, z1), I64Vec3::new(x2, y2, z2));
        let (min, max) = (a.min(b), a.max(b));
        if min.x < 0 || min.y < 0 || min.z < 1 {
            return Err(BrickError::OutOfBounds {
                line: line.to_string(),
            });
        }
        Ok(Self { min, max })
    }

    /// Top-down cells under the brick; `x` is the column and `y` the row.
    fn footprint(&self) -> impl Iterator<Item = Position> {
        let (min, max) = (self.min, self.max);
        (min.y..=max.y)
            .flat_map(move |y| (min.x..=max.x).map(move |x| Position::new(y as usize, x as usize)))
    }
}

pub fn parse(input: &str) -> Result<Vec<Brick>, BrickError> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Brick::parse)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Column {
    top: i64,
    brick: Option<usize>,
}

/// Bricks after they have all come to rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    /// Settled bricks in the order they landed.
    pub bricks: Vec<Brick>,
    /// For each brick, the bricks resting directly on top of it.
    pub supports: Vec<Vec<usize>>,
    /// For each brick, the bricks it rests directly on. Empty on the ground.
    pub supported_by: Vec<Vec<usize>>,
}

impl Pile {
    #[tracing::instrument(skip(bricks))]
    pub fn settle(mut bricks: Vec<Brick>) -> Result<Self, BrickError> {
        bricks.sort_by_key(|brick| brick.min.z);

        let nrows = bricks.iter().map(|b| b.max.y + 1).max().unwrap_or(0) as usize;
        let ncols = bricks.iter().map(|b| b.max.x + 1).max().unwrap_or(0) as usize;
        let ground = Column {
            top: 0,
            brick: None,
        };
        let mut heights = Grid::from_cells(nrows, ncols, vec![ground; nrows * ncols])?;

        let mut supports = vec![Vec::new(); bricks.len()];
        let mut supported_by = vec![Vec::new(); bricks.len()];

        for (i, brick) in bricks.iter_mut().enumerate() {
            let under = brick
                .footprint()
                .filter_map(|p| heights.get(p).copied())
                .collect::<Vec<_>>();
            let floor = under.iter().map(|column| column.top).max().unwrap_or(0);

            let mut below = under
                .iter()
                .filter(|column| column.top == floor)
                .filter_map(|column| column.brick)
                .collect::<Vec<_>>();
            below.sort_unstable();
            below.dedup();

            let fall = brick.min.z - (floor + 1);
            brick.min.z -= fall;
            brick.max.z -= fall;

            for p in brick.footprint() {
                if let Some(column) = heights.get_mut(p) {
                    *column = Column {
                        top: brick.max.z,
                        brick: Some(i),
                    };
                }
            }
            for &j in &below {
                supports[j].push(i);
            }
            supported_by[i] = below;
        }

        Ok(Self {
            bricks,
            supports,
            supported_by,
        })
    }

    /// Bricks whose removal leaves every other brick in place.
    pub fn removable(&self) -> usize {
        self.supports
            .iter()
            .filter(|above| above.iter().all(|&j| self.supported_by[j].len() > 1))
            .count()
    }

    /// How many other bricks fall once `removed` is taken out.
    pub fn chain_reaction(&self, removed: usize) -> usize {
        let mut falling = bitvec![0; self.bricks.len()];
        falling.set(removed, true);

        // supporters always landed earlier, so one pass in landing order
        // settles the whole reaction
        let mut count = 0;
        for j in removed + 1..self.bricks.len() {
            let below = &self.supported_by[j];
            if !below.is_empty() && below.iter().all(|&k| falling[k]) {
                falling.set(j, true);
                count += 1;
            }
        }
        count
    }

    pub fn total_chain_reaction(&self) -> usize {
        (0..self.bricks.len())
            .into_par_iter()
            .map(|i| self.chain_reaction(i))
            .sum()
    }
}
