pub mod beam;
pub mod part1;
pub mod part2;
