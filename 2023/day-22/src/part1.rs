use miette::*;

use crate::bricks::{self, Pile};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let pile = Pile::settle(bricks::parse(input)?)?;
    Ok(pile.removable().to_string())
}
