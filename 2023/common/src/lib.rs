//! Helpers shared by the 2023 daily crates: a typed character grid, the four
//! cardinal directions, number extraction and cycle projection.

pub mod cycle;
pub mod direction;
pub mod grid;
pub mod parsing;

pub use cycle::CycleDetector;
pub use direction::Direction;
pub use grid::{Grid, GridError, Position, Symbol};
