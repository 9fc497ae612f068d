use aoc2023_common::CycleDetector;
use miette::*;

use crate::platform::Platform;

const SPIN_CYCLES: usize = 1_000_000_000;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let platform = Platform::parse(input)?;

    // Spinning a billion times is only feasible by folding the repeats away.
    let mut detector = CycleDetector::new(platform);
    let load = detector
        .state_after(SPIN_CYCLES, Platform::spin_cycle)
        .north_load();
    tracing::debug!(simulated = detector.simulated(), cycle = ?detector.cycle());

    Ok(load.to_string())
}
