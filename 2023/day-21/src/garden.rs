//! Garden plots an elf can end on after walking an exact number of steps.
//!
//! A walk may bounce back and forth, which wastes two steps at a time. A plot
//! is therefore reachable in exactly `steps` steps when its shortest distance
//! is at most `steps` and has the same parity.

use std::collections::{HashMap, HashSet, VecDeque};

use aoc2023_common::{Direction, Grid, GridError, Position, Symbol};
use glam::I64Vec2;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plot {
    Garden,
    Rock,
    Start,
}

impl Symbol for Plot {
    fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Plot::Garden),
            '#' => Some(Plot::Rock),
            'S' => Some(Plot::Start),
            _ => None,
        }
    }

    fn to_char(&self) -> char {
        match self {
            Plot::Garden => '.',
            Plot::Rock => '#',
            Plot::Start => 'S',
        }
    }
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum GardenError {
    #[error("the map has no starting plot")]
    #[diagnostic(code(garden::missing_start))]
    MissingStart,

    #[error("a {nrows}x{ncols} map does not tile into a square pattern")]
    #[diagnostic(
        code(garden::not_square),
        help("far walks are extrapolated over whole map widths")
    )]
    NotSquare { nrows: usize, ncols: usize },
}

pub fn parse(input: &str) -> Result<Grid<Plot>, GridError> {
    Grid::parse(input)
}

pub fn find_start(grid: &Grid<Plot>) -> Result<Position, GardenError> {
    grid.positions()
        .find(|&p| grid.get(p) == Some(&Plot::Start))
        .ok_or(GardenError::MissingStart)
}

/// Fewest steps from `start` to every garden plot it can reach.
#[tracing::instrument(skip(grid))]
pub fn distances(grid: &Grid<Plot>, start: Position) -> HashMap<Position, usize> {
    let mut distances = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);

    while let Some(position) = queue.pop_front() {
        let next = distances[&position] + 1;
        for (neighbour, &plot) in grid.neighbours(position, Direction::ALL) {
            if plot == Plot::Rock || distances.contains_key(&neighbour) {
                continue;
            }
            distances.insert(neighbour, next);
            queue.push_back(neighbour);
        }
    }

    distances
}

pub fn reachable(distances: &HashMap<Position, usize>, steps: usize) -> usize {
    distances
        .values()
        .filter(|&&distance| distance <= steps && distance % 2 == steps % 2)
        .count()
}

/// Like [`reachable`], with the map repeated endlessly in every direction.
#[tracing::instrument(skip(grid))]
pub fn reachable_tiled(grid: &Grid<Plot>, start: Position, steps: usize) -> usize {
    let (nrows, ncols) = (grid.nrows() as i64, grid.ncols() as i64);
    let is_open = |p: I64Vec2| {
        let wrapped = Position::new(p.y.rem_euclid(nrows) as usize, p.x.rem_euclid(ncols) as usize);
        grid.get(wrapped).is_some_and(|&plot| plot != Plot::Rock)
    };

    let origin = I64Vec2::new(start.col as i64, start.row as i64);
    let mut seen = HashSet::from([origin]);
    let mut frontier = vec![origin];
    let mut count = usize::from(steps % 2 == 0);

    for step in 1..=steps {
        let mut next = Vec::new();
        for p in frontier {
            for direction in Direction::ALL {
                let (dr, dc) = direction.delta();
                let q = p + I64Vec2::new(dc as i64, dr as i64);
                if is_open(q) && seen.insert(q) {
                    next.push(q);
                }
            }
        }
        if step % 2 == steps % 2 {
            count += next.len();
        }
        frontier = next;
    }

    count
}

/// The quadratic through `(0, y0)`, `(1, y1)` and `(2, y2)`, evaluated at `x`.
pub fn extrapolate_quadratic([y0, y1, y2]: [i64; 3], x: i64) -> i64 {
    let first = y1 - y0;
    let second = y2 - 2 * y1 + y0;
    y0 + first * x + second * (x * (x - 1) / 2)
}

/// Plots reachable in `steps` on the endlessly tiled map, for step counts far
/// too large to walk.
///
/// Once the walk has crossed a few map widths, the count grows quadratically
/// in the number of widths crossed, so three samples one width apart fix it.
pub fn reachable_far(grid: &Grid<Plot>, start: Position, steps: usize) -> Result<i64, GardenError> {
    let (nrows, ncols) = (grid.nrows(), grid.ncols());
    if nrows != ncols {
        return Err(GardenError::NotSquare { nrows, ncols });
    }

    let width = ncols;
    let (widths, offset) = (steps / width, steps % width);
    if widths < 3 {
        return Ok(reachable_tiled(grid, start, steps) as i64);
    }

    let samples = [0, 1, 2].map(|k| reachable_tiled(grid, start, offset + k * width) as i64);
    tracing::debug!(?samples, widths, "extrapolating");
    Ok(extrapolate_quadratic(samples, widths as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    const EXAMPLE: &str = "...........
.....###.#.
.###.##..#.
..#.#...#..
....#.#....
.##..S####.
.##..#...#.
.......##..
.##.#.####.
.##..##.##.
...........";

    const OPEN: &str = ".....
.....
..S..
.....
.....";

    #[test]
    fn finds_the_start() {
        let grid = parse(EXAMPLE).unwrap();
        assert_eq!(Ok(Position::new(5, 5)), find_start(&grid));
        assert_eq!(
            Err(GardenError::MissingStart),
            find_start(&parse("...").unwrap())
        );
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(2, 4)]
    #[case(3, 6)]
    #[case(6, 16)]
    fn reachable_in_the_example(#[case] steps: usize, #[case] expected: usize) {
        let grid = parse(EXAMPLE).unwrap();
        let start = find_start(&grid).unwrap();
        assert_eq!(expected, reachable(&distances(&grid, start), steps));
    }

    #[test]
    fn rocks_and_enclosed_plots_are_never_reached() {
        let grid = parse("S.#.\n..#.").unwrap();
        let distances = distances(&grid, Position::new(0, 0));
        assert_eq!(4, distances.len());
        assert_eq!(Some(&2), distances.get(&Position::new(1, 1)));
        assert_eq!(None, distances.get(&Position::new(0, 3)));
    }

    #[rstest]
    #[case(6, 16)]
    #[case(10, 50)]
    #[case(50, 1594)]
    #[case(100, 6536)]
    fn reachable_on_the_tiled_example(#[case] steps: usize, #[case] expected: usize) {
        let grid = parse(EXAMPLE).unwrap();
        let start = find_start(&grid).unwrap();
        assert_eq!(expected, reachable_tiled(&grid, start, steps));
    }

    #[test]
    fn open_ground_fills_a_diamond() {
        let grid = parse(OPEN).unwrap();
        let start = find_start(&grid).unwrap();
        for steps in 0..=12 {
            assert_eq!((steps + 1) * (steps + 1), reachable_tiled(&grid, start, steps));
        }
    }

    #[test]
    fn extrapolates_quadratics() {
        assert_eq!(16, extrapolate_quadratic([1, 4, 9], 3));
        assert_eq!(7, extrapolate_quadratic([7, 7, 7], 1000));
        assert_eq!(-3, extrapolate_quadratic([0, -1, -2], 3));
    }

    #[test]
    fn far_walks_match_the_direct_count() {
        let grid = parse(OPEN).unwrap();
        let start = find_start(&grid).unwrap();
        for steps in [2, 17, 23, 40] {
            assert_eq!(
                reachable_tiled(&grid, start, steps) as i64,
                reachable_far(&grid, start, steps).unwrap()
            );
        }
    }

    #[test]
    fn far_walks_need_a_square_map() {
        let grid = parse("S..\n...").unwrap();
        assert_eq!(
            Err(GardenError::NotSquare { nrows: 2, ncols: 3 }),
            reachable_far(&grid, Position::new(0, 0), 100)
        );
    }
}
