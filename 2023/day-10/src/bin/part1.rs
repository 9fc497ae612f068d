use miette::*;

use aoc2023_day_10::part1;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/input1.txt");
    let input = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read puzzle input at {path}"))?;
    let result = part1::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}
