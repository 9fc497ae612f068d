use aoc2023_day_21::{part1, part2};

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

fn main() {
    divan::main();
}

#[divan::bench]
fn bench_part1() {
    part1::process(divan::black_box(EXAMPLE)).unwrap();
}

#[divan::bench]
fn bench_part2() {
    part2::process(divan::black_box(EXAMPLE)).unwrap();
}
