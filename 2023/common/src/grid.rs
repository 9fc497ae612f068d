use std::fmt;

use bitvec::prelude::*;
use miette::Diagnostic;
use thiserror::Error;

use crate::Direction;

/// A cell type that can be read from and written back to a single character.
pub trait Symbol: Sized {
    fn from_char(symbol: char) -> Option<Self>;
    fn to_char(&self) -> char;
}

impl Symbol for char {
    fn from_char(symbol: char) -> Option<Self> {
        Some(symbol)
    }

    fn to_char(&self) -> char {
        *self
    }
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum GridError {
    #[error("row {row} has {found} cells, expected {expected}")]
    #[diagnostic(
        code(grid::ragged),
        help("every row of the grid must have the same length")
    )]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    #[diagnostic(code(grid::unknown_symbol))]
    UnknownSymbol { row: usize, col: usize, symbol: char },

    #[error("{len} cells cannot fill a {nrows}x{ncols} grid")]
    #[diagnostic(code(grid::size))]
    Size {
        nrows: usize,
        ncols: usize,
        len: usize,
    },
}

/// A zero-based `(row, col)` coordinate; rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring coordinate in `direction`, or `None` when it would
    /// leave the non-negative quadrant.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A dense, rectangular grid stored row-major, with one mark flag per cell.
///
/// The line ending and any trailing terminators of the parsed text are kept
/// so that `Display` writes the input back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    nrows: usize,
    ncols: usize,
    cells: Vec<T>,
    marks: BitVec,
    line_ending: &'static str,
    trailer: String,
}

impl<T: Symbol> Grid<T> {
    /// Parses one cell per character, one row per line.
    ///
    /// Trailing line terminators belong to no row; an empty input is an empty
    /// grid.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let mut cells = Vec::with_capacity(input.len());
        let mut ncols = None;
        let mut nrows = 0;

        let body = input.trim_end_matches(['\n', '\r']);
        for (row, line) in body.lines().enumerate() {
            let width = line.chars().count();
            match ncols {
                Some(expected) if expected != width => {
                    return Err(GridError::Ragged {
                        row,
                        expected,
                        found: width,
                    });
                }
                Some(_) => {}
                None => ncols = Some(width),
            }

            for (col, symbol) in line.chars().enumerate() {
                let cell =
                    T::from_char(symbol).ok_or(GridError::UnknownSymbol { row, col, symbol })?;
                cells.push(cell);
            }
            nrows += 1;
        }

        let mut grid = Self::from_cells(nrows, ncols.unwrap_or(0), cells)?;
        if input.contains("\r\n") {
            grid.line_ending = "\r\n";
        }
        grid.trailer = input[body.len()..].to_string();
        Ok(grid)
    }
}

impl<T> Grid<T> {
    /// Builds a grid from row-major cells.
    pub fn from_cells(nrows: usize, ncols: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if nrows * ncols != cells.len() {
            return Err(GridError::Size {
                nrows,
                ncols,
                len: cells.len(),
            });
        }
        Ok(Self {
            nrows,
            ncols,
            marks: bitvec![0; cells.len()],
            cells,
            line_ending: "\n",
            trailer: String::new(),
        })
    }

    /// A grid of the same shape with every cell transformed.
    pub fn map<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(Position, &T) -> U,
    {
        let cells = self
            .positions()
            .zip(&self.cells)
            .map(|(position, cell)| f(position, cell))
            .collect();
        Grid {
            nrows: self.nrows,
            ncols: self.ncols,
            cells,
            marks: self.marks.clone(),
            line_ending: self.line_ending,
            trailer: self.trailer.clone(),
        }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    fn index(&self, position: Position) -> Option<usize> {
        (position.row < self.nrows && position.col < self.ncols)
            .then(|| position.row * self.ncols + position.col)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.index(position).is_some()
    }

    #[inline]
    pub fn get(&self, position: Position) -> Option<&T> {
        self.index(position).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        self.index(position).map(|i| &mut self.cells[i])
    }

    /// The in-bounds neighbour of `position` in `direction`.
    pub fn step(&self, position: Position, direction: Direction) -> Option<Position> {
        position.step(direction).filter(|&p| self.contains(p))
    }

    /// In-bounds neighbours of `position`, in the order of `directions`.
    pub fn neighbours<'a, I>(
        &'a self,
        position: Position,
        directions: I,
    ) -> impl Iterator<Item = (Position, &'a T)> + 'a
    where
        I: IntoIterator<Item = Direction>,
        I::IntoIter: 'a,
    {
        directions.into_iter().filter_map(move |direction| {
            let next = self.step(position, direction)?;
            self.get(next).map(|cell| (next, cell))
        })
    }

    /// Every coordinate, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.nrows).flat_map(move |row| (0..self.ncols).map(move |col| Position::new(row, col)))
    }

    /// Sets the mark flag of a cell. Returns `true` if it was not set before;
    /// out-of-bounds positions are ignored.
    pub fn mark(&mut self, position: Position) -> bool {
        match self.index(position) {
            Some(i) => !self.marks.replace(i, true),
            None => false,
        }
    }

    pub fn is_marked(&self, position: Position) -> bool {
        self.index(position).is_some_and(|i| self.marks[i])
    }

    pub fn marked_count(&self) -> usize {
        self.marks.count_ones()
    }

    pub fn clear_marks(&mut self) {
        self.marks.fill(false);
    }
}

impl<T: Symbol> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ncols > 0 {
            for (row, cells) in self.cells.chunks(self.ncols).enumerate() {
                if row > 0 {
                    f.write_str(self.line_ending)?;
                }
                for cell in cells {
                    write!(f, "{}", cell.to_char())?;
                }
            }
        }
        f.write_str(&self.trailer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Cell {
        Open,
        Wall,
    }

    impl Symbol for Cell {
        fn from_char(symbol: char) -> Option<Self> {
            match symbol {
                '.' => Some(Cell::Open),
                '#' => Some(Cell::Wall),
                _ => None,
            }
        }

        fn to_char(&self) -> char {
            match self {
                Cell::Open => '.',
                Cell::Wall => '#',
            }
        }
    }

    const MAZE: &str = "..#\n#..\n.#.";

    #[rstest]
    #[case::maze(MAZE)]
    #[case::single_cell("#")]
    #[case::single_row("..##..")]
    #[case::single_column(".\n#\n.")]
    fn round_trips(#[case] input: &str) {
        let grid = Grid::<Cell>::parse(input).unwrap();
        assert_eq!(input, grid.to_string());
    }

    #[rstest]
    #[case::newline("..#\n#..\n.#.\n")]
    #[case::crlf("..#\r\n#..\r\n.#.\r\n")]
    #[case::blank_lines("..#\n#..\n.#.\n\n")]
    fn trailing_terminators_round_trip(#[case] input: &str) {
        let grid = Grid::<Cell>::parse(input).unwrap();
        assert_eq!((3, 3), (grid.nrows(), grid.ncols()));
        assert_eq!(input, grid.to_string());
        assert_eq!(Grid::<Cell>::parse(MAZE).unwrap().cells(), grid.cells());
    }

    #[test]
    fn mapped_grids_keep_the_layout() {
        let grid = Grid::<Cell>::parse("..#\r\n#..\r\n").unwrap();
        assert_eq!("..#\r\n#..\r\n", grid.map(|_, &cell| cell).to_string());
    }

    #[test]
    fn empty_input_is_an_empty_grid() {
        let grid = Grid::<Cell>::parse("").unwrap();
        assert_eq!((0, 0), (grid.nrows(), grid.ncols()));
        assert_eq!("", grid.to_string());
        assert_eq!(None, grid.get(Position::new(0, 0)));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert_eq!(
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }),
            Grid::<Cell>::parse("...\n..\n...")
        );
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        assert_eq!(
            Err(GridError::UnknownSymbol {
                row: 2,
                col: 1,
                symbol: 'x'
            }),
            Grid::<Cell>::parse("...\n...\n.x.")
        );
    }

    #[test]
    fn from_cells_checks_the_size() {
        assert!(Grid::from_cells(2, 2, vec!['a'; 4]).is_ok());
        assert_eq!(
            Err(GridError::Size {
                nrows: 2,
                ncols: 3,
                len: 4
            }),
            Grid::from_cells(2, 3, vec!['a'; 4])
        );
    }

    #[test]
    fn out_of_bounds_lookups_are_absent() {
        let grid = Grid::<Cell>::parse(MAZE).unwrap();
        assert_eq!(Some(&Cell::Wall), grid.get(Position::new(0, 2)));
        assert_eq!(None, grid.get(Position::new(0, 3)));
        assert_eq!(None, grid.get(Position::new(3, 0)));
        assert_eq!(None, grid.clone().get_mut(Position::new(3, 3)));
        assert_eq!(None, grid.step(Position::new(0, 0), Direction::North));
        assert_eq!(None, grid.step(Position::new(2, 2), Direction::East));
        assert_eq!(
            Some(Position::new(1, 2)),
            grid.step(Position::new(2, 2), Direction::North)
        );
    }

    #[test]
    fn neighbours_keep_order_and_drop_outside() {
        let grid = Grid::<Cell>::parse(MAZE).unwrap();
        let corner = grid
            .neighbours(Position::new(0, 0), Direction::ALL)
            .collect::<Vec<_>>();
        assert_eq!(
            vec![
                (Position::new(0, 1), &Cell::Open),
                (Position::new(1, 0), &Cell::Wall)
            ],
            corner
        );

        let reversed = grid
            .neighbours(Position::new(1, 1), Direction::ALL.into_iter().rev())
            .map(|(p, _)| p)
            .collect::<Vec<_>>();
        assert_eq!(
            vec![
                Position::new(1, 0),
                Position::new(2, 1),
                Position::new(1, 2),
                Position::new(0, 1)
            ],
            reversed
        );
    }

    #[test]
    fn marks_are_idempotent() {
        let mut grid = Grid::<Cell>::parse(MAZE).unwrap();
        assert!(grid.mark(Position::new(1, 1)));
        assert!(!grid.mark(Position::new(1, 1)));
        assert!(!grid.mark(Position::new(5, 5)));
        assert!(grid.is_marked(Position::new(1, 1)));
        assert!(!grid.is_marked(Position::new(0, 0)));
        assert_eq!(1, grid.marked_count());

        grid.clear_marks();
        assert_eq!(0, grid.marked_count());
    }

    #[test]
    fn positions_are_row_major() {
        let grid = Grid::from_cells(2, 2, vec!['a', 'b', 'c', 'd']).unwrap();
        let symbols = grid
            .positions()
            .filter_map(|p| grid.get(p).copied())
            .collect::<String>();
        assert_eq!("abcd", symbols);
        assert_eq!(grid.cells(), &['a', 'b', 'c', 'd']);
    }

    #[test]
    fn map_keeps_shape_and_marks() {
        let mut grid = Grid::<Cell>::parse(MAZE).unwrap();
        grid.mark(Position::new(2, 0));
        let flipped = grid.map(|_, cell| match cell {
            Cell::Open => Cell::Wall,
            Cell::Wall => Cell::Open,
        });
        assert_eq!("##.\n.##\n#.#", flipped.to_string());
        assert!(flipped.is_marked(Position::new(2, 0)));
    }
}
