use miette::*;

use crate::bricks::{self, Pile};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let pile = Pile::settle(bricks::parse(input)?)?;
    Ok(pile.total_chain_reaction().to_string())
}
