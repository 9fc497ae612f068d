pub mod bricks;
pub mod part1;
pub mod part2;
