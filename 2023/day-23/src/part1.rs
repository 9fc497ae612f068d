use miette::*;

use crate::trails::{self, TrailGraph};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = trails::parse(input)?;
    let graph = TrailGraph::build(&grid, true)?;

    Ok(graph.longest_hike()?.to_string())
}
