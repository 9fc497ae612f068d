//! Light beams bouncing through a contraption of mirrors and splitters.

use std::collections::{HashSet, VecDeque};

use aoc2023_common::{Direction, Grid, GridError, Position, Symbol};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    /// `/`
    MirrorForward,
    /// `\`
    MirrorBackward,
    /// `|`
    SplitterVertical,
    /// `-`
    SplitterHorizontal,
}

impl Symbol for Tile {
    fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Tile::Empty),
            '/' => Some(Tile::MirrorForward),
            '\\' => Some(Tile::MirrorBackward),
            '|' => Some(Tile::SplitterVertical),
            '-' => Some(Tile::SplitterHorizontal),
            _ => None,
        }
    }

    fn to_char(&self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::MirrorForward => '/',
            Tile::MirrorBackward => '\\',
            Tile::SplitterVertical => '|',
            Tile::SplitterHorizontal => '-',
        }
    }
}

impl Tile {
    /// Headings of the beams leaving this tile when one enters heading `heading`.
    pub fn deflect(self, heading: Direction) -> [Option<Direction>; 2] {
        use Direction::*;

        match (self, heading) {
            (Tile::Empty, _) => [Some(heading), None],
            (Tile::MirrorForward, North) => [Some(East), None],
            (Tile::MirrorForward, East) => [Some(North), None],
            (Tile::MirrorForward, South) => [Some(West), None],
            (Tile::MirrorForward, West) => [Some(South), None],
            (Tile::MirrorBackward, North) => [Some(West), None],
            (Tile::MirrorBackward, East) => [Some(South), None],
            (Tile::MirrorBackward, South) => [Some(East), None],
            (Tile::MirrorBackward, West) => [Some(North), None],
            // broadside hits split, edge-on hits pass through
            (Tile::SplitterVertical, East | West) => [Some(North), Some(South)],
            (Tile::SplitterHorizontal, North | South) => [Some(East), Some(West)],
            (Tile::SplitterVertical | Tile::SplitterHorizontal, _) => [Some(heading), None],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Beam {
    pub position: Position,
    pub heading: Direction,
}

impl Beam {
    pub const fn new(position: Position, heading: Direction) -> Self {
        Self { position, heading }
    }
}

/// Order in which pending beams are taken from the work list.
///
/// The energized count does not depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Discipline {
    #[default]
    Stack,
    Queue,
}

pub fn parse(input: &str) -> Result<Grid<Tile>, GridError> {
    Grid::parse(input)
}

/// Traces every beam from `starts` and returns the number of energized tiles.
///
/// Energized tiles are left marked on `grid`; marks from earlier runs are
/// cleared first.
#[tracing::instrument(skip(grid, starts))]
pub fn energize<I>(grid: &mut Grid<Tile>, starts: I, discipline: Discipline) -> usize
where
    I: IntoIterator<Item = Beam>,
{
    grid.clear_marks();

    let mut pending: VecDeque<Beam> = starts.into_iter().collect();
    let mut seen = HashSet::new();

    loop {
        let next = match discipline {
            Discipline::Stack => pending.pop_back(),
            Discipline::Queue => pending.pop_front(),
        };
        let Some(beam) = next else { break };

        // a repeated (position, heading) can only retrace known light
        if !seen.insert(beam) {
            continue;
        }
        let Some(&tile) = grid.get(beam.position) else {
            continue;
        };
        grid.mark(beam.position);

        for heading in tile.deflect(beam.heading).into_iter().flatten() {
            if let Some(position) = grid.step(beam.position, heading) {
                pending.push_back(Beam::new(position, heading));
            }
        }
    }

    tracing::debug!(states = seen.len(), "beams settled");
    grid.marked_count()
}

/// Every beam that can enter the grid from its edge, pointing inward.
pub fn edge_beams(grid: &Grid<Tile>) -> Vec<Beam> {
    let (nrows, ncols) = (grid.nrows(), grid.ncols());
    if nrows == 0 || ncols == 0 {
        return Vec::new();
    }

    let top = (0..ncols).map(|col| Beam::new(Position::new(0, col), Direction::South));
    let bottom = (0..ncols).map(|col| Beam::new(Position::new(nrows - 1, col), Direction::North));
    let left = (0..nrows).map(|row| Beam::new(Position::new(row, 0), Direction::East));
    let right = (0..nrows).map(|row| Beam::new(Position::new(row, ncols - 1), Direction::West));

    top.chain(bottom).chain(left).chain(right).collect()
}

/// The largest energized count over all edge beams, each traced on its own
/// copy of the grid.
#[tracing::instrument(skip(grid))]
pub fn best_energize(grid: &Grid<Tile>) -> usize {
    edge_beams(grid)
        .par_iter()
        .map(|&start| {
            let mut grid = grid.clone();
            energize(&mut grid, [start], Discipline::default())
        })
        .max()
        .unwrap_or(0)
}

/// `#` for energized tiles, `.` for the rest.
pub fn render_energized(grid: &Grid<Tile>) -> String {
    grid.map(|position, _| if grid.is_marked(position) { '#' } else { '.' })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    const EXAMPLE: &str = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....";

    const TOP_LEFT: Beam = Beam::new(Position::new(0, 0), Direction::East);

    #[test]
    fn energizes_the_example() {
        let mut grid = parse(EXAMPLE).unwrap();
        assert_eq!(46, energize(&mut grid, [TOP_LEFT], Discipline::Stack));
        assert_eq!(
            "######....
.#...#....
.#...#####
.#...##...
.#...##...
.#...##...
.#..####..
########..
.#######..
.#...#.#..",
            render_energized(&grid)
        );
    }

    #[rstest]
    #[case::example(EXAMPLE)]
    #[case::mirror_loop("/\\\n\\/")]
    #[case::adjacent_splitters("-|-\n|-|\n-|-")]
    #[case::splitter_loop(".|..\\\n.-../\n.\\-|.\n../..")]
    #[case::single_cell("|")]
    #[case::open_floor("...\n...")]
    fn discipline_does_not_change_the_count(#[case] input: &str) {
        let grid = parse(input).unwrap();
        for start in edge_beams(&grid) {
            let mut stack = grid.clone();
            let mut queue = grid.clone();
            assert_eq!(
                energize(&mut stack, [start], Discipline::Stack),
                energize(&mut queue, [start], Discipline::Queue),
                "{start:?}"
            );
            assert_eq!(render_energized(&stack), render_energized(&queue));
        }
    }

    #[test]
    fn edge_beams_cover_the_border() {
        let grid = parse(EXAMPLE).unwrap();
        let beams = edge_beams(&grid);
        assert_eq!(40, beams.len());
        assert!(beams.iter().all(|b| grid.get(b.position).is_some()));
        assert!(beams.contains(&Beam::new(Position::new(0, 3), Direction::South)));
    }

    #[test]
    fn best_start_of_the_example() {
        let grid = parse(EXAMPLE).unwrap();
        assert_eq!(51, best_energize(&grid));
    }

    #[test]
    fn mirror_loops_terminate() {
        let mut grid = parse("/\\\n\\/").unwrap();
        let start = Beam::new(Position::new(0, 1), Direction::East);
        assert_eq!(4, energize(&mut grid, [start], Discipline::Queue));
    }

    #[test]
    fn several_starts_share_one_run() {
        let mut grid = parse("...\n...\n...").unwrap();
        let starts = [
            Beam::new(Position::new(0, 0), Direction::East),
            Beam::new(Position::new(2, 2), Direction::West),
        ];
        assert_eq!(6, energize(&mut grid, starts, Discipline::Stack));
        // a second run starts from clean marks
        assert_eq!(3, energize(&mut grid, [starts[0]], Discipline::Stack));
    }

    #[rstest]
    #[case::empty(Tile::Empty, Direction::West, [Some(Direction::West), None])]
    #[case::forward(Tile::MirrorForward, Direction::East, [Some(Direction::North), None])]
    #[case::backward(Tile::MirrorBackward, Direction::East, [Some(Direction::South), None])]
    #[case::vertical_edge_on(Tile::SplitterVertical, Direction::South, [Some(Direction::South), None])]
    #[case::vertical_broadside(Tile::SplitterVertical, Direction::West, [Some(Direction::North), Some(Direction::South)])]
    #[case::horizontal_edge_on(Tile::SplitterHorizontal, Direction::East, [Some(Direction::East), None])]
    #[case::horizontal_broadside(Tile::SplitterHorizontal, Direction::North, [Some(Direction::East), Some(Direction::West)])]
    fn deflects(
        #[case] tile: Tile,
        #[case] heading: Direction,
        #[case] expected: [Option<Direction>; 2],
    ) {
        assert_eq!(expected, tile.deflect(heading));
    }

    #[test]
    fn mirrors_are_reversible() {
        // a beam sent back along its outgoing path leaves along the incoming one
        for tile in [Tile::MirrorForward, Tile::MirrorBackward] {
            for heading in Direction::ALL {
                let [Some(out), None] = tile.deflect(heading) else {
                    panic!("mirrors reflect into exactly one beam");
                };
                assert_eq!([Some(heading.reverse()), None], tile.deflect(out.reverse()));
            }
        }
    }

    #[test]
    fn symbols_round_trip() {
        assert_eq!(EXAMPLE, parse(EXAMPLE).unwrap().to_string());
    }
}
