//! Least heat loss routes for crucibles that cannot steer freely.
//!
//! A crucible never reverses, must turn after `max` straight blocks, and may
//! only turn or stop after `min` straight blocks. Because the allowed moves
//! depend on the run so far, the search runs over `(position, heading, run)`
//! states instead of plain positions.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use aoc2023_common::{Direction, Grid, GridError, Position, Symbol};
use miette::Diagnostic;
use thiserror::Error;

/// Heat lost when a crucible enters a city block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatLoss(pub u8);

impl Symbol for HeatLoss {
    fn from_char(symbol: char) -> Option<Self> {
        symbol
            .to_digit(10)
            .and_then(|digit| u8::try_from(digit).ok())
            .map(HeatLoss)
    }

    fn to_char(&self) -> char {
        char::from_digit(u32::from(self.0), 10).unwrap_or('?')
    }
}

/// Bounds on how many blocks a crucible moves in a straight line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunLimits {
    pub min: u8,
    pub max: u8,
}

impl RunLimits {
    pub const CRUCIBLE: Self = Self { min: 1, max: 3 };
    pub const ULTRA_CRUCIBLE: Self = Self { min: 4, max: 10 };
}

#[derive(Debug, Error, Diagnostic)]
#[error("no route from {start} to {end} with straight runs of {min} to {max} blocks")]
#[diagnostic(code(crucible::unreachable))]
pub struct UnreachableError {
    pub start: Position,
    pub end: Position,
    pub min: u8,
    pub max: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Node {
    position: Position,
    /// `None` only before the first move.
    heading: Option<Direction>,
    run: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub heat_loss: u32,
    /// Every block visited from start to end, with the heading it was
    /// entered with.
    pub steps: Vec<(Position, Option<Direction>)>,
}

pub fn parse(input: &str) -> Result<Grid<HeatLoss>, GridError> {
    Grid::parse(input)
}

/// Dijkstra over the extended state space. The start block's own heat loss
/// is not counted.
#[tracing::instrument(skip(grid))]
pub fn least_heat_loss(
    grid: &Grid<HeatLoss>,
    start: Position,
    end: Position,
    limits: RunLimits,
) -> Result<Route, UnreachableError> {
    let unreachable = || UnreachableError {
        start,
        end,
        min: limits.min,
        max: limits.max,
    };
    if !grid.contains(start) || !grid.contains(end) {
        return Err(unreachable());
    }

    let origin = Node {
        position: start,
        heading: None,
        run: 0,
    };
    let mut best = HashMap::from([(origin, 0u32)]);
    let mut previous: HashMap<Node, Node> = HashMap::new();
    let mut queue = BinaryHeap::from([Reverse((0u32, origin))]);

    while let Some(Reverse((heat_loss, node))) = queue.pop() {
        if best.get(&node).is_some_and(|&known| heat_loss > known) {
            continue;
        }

        if node.position == end && (node.heading.is_none() || node.run >= limits.min) {
            let steps = trace(&previous, node);
            tracing::debug!(heat_loss, blocks = steps.len(), "route found");
            return Ok(Route { heat_loss, steps });
        }

        for heading in Direction::ALL {
            let run = match node.heading {
                None => 1,
                Some(current) if heading == current.reverse() => continue,
                Some(current) if heading == current => match node.run.checked_add(1) {
                    Some(run) => run,
                    None => continue,
                },
                Some(_) if node.run < limits.min => continue,
                Some(_) => 1,
            };
            if run > limits.max {
                continue;
            }

            let Some(position) = grid.step(node.position, heading) else {
                continue;
            };
            let Some(&HeatLoss(cost)) = grid.get(position) else {
                continue;
            };

            let next = Node {
                position,
                heading: Some(heading),
                run,
            };
            let total = heat_loss + u32::from(cost);
            if best.get(&next).map_or(true, |&known| total < known) {
                best.insert(next, total);
                previous.insert(next, node);
                queue.push(Reverse((total, next)));
            }
        }
    }

    Err(unreachable())
}

/// Walks predecessor links back from `last` and returns them start first.
fn trace(previous: &HashMap<Node, Node>, last: Node) -> Vec<(Position, Option<Direction>)> {
    let mut steps = vec![(last.position, last.heading)];
    let mut node = last;
    while let Some(&prior) = previous.get(&node) {
        steps.push((prior.position, prior.heading));
        node = prior;
    }
    steps.reverse();
    steps
}

/// Draws the route's headings over an otherwise empty map.
pub fn render_route(grid: &Grid<HeatLoss>, route: &Route) -> String {
    let glyphs = route
        .steps
        .iter()
        .filter_map(|&(position, heading)| heading.map(|h| (position, h.glyph())))
        .collect::<HashMap<_, _>>();

    grid.map(|position, _| glyphs.get(&position).copied().unwrap_or('.'))
        .to_string()
}
