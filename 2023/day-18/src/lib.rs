pub mod lagoon;
pub mod part1;
pub mod part2;
