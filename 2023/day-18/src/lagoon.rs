//! Lagoon volume from a dig plan, via the shoelace formula and Pick's theorem.

use aoc2023_common::Direction;
use chumsky::prelude::*;
use glam::I64Vec2;
use itertools::Itertools;
use miette::Diagnostic;
use num_integer::Integer;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigStep {
    pub direction: Direction,
    pub distance: i64,
}

/// One line of the dig plan: `R 6 (#70c710)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction<'a> {
    pub step: DigStep,
    /// The six hex digits of the colour, without `#`.
    pub color: &'a str,
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum DigPlanError {
    #[error("colour {0:?} does not encode a dig step")]
    #[diagnostic(
        code(lagoon::color),
        help("five hex digits of distance followed by a direction digit 0-3")
    )]
    InvalidColor(String),

    #[error("the trench leaves the representable range after {dug} steps")]
    #[diagnostic(code(lagoon::overflow))]
    Overflow { dug: usize },
}

impl Instruction<'_> {
    /// Reads the step hidden in the colour: five hex digits of distance and
    /// one digit for the direction (`0` R, `1` D, `2` L, `3` U).
    pub fn color_step(&self) -> Result<DigStep, DigPlanError> {
        let invalid = || DigPlanError::InvalidColor(self.color.to_string());
        let (Some(distance), Some(direction)) = (self.color.get(..5), self.color.get(5..)) else {
            return Err(invalid());
        };

        let distance = i64::from_str_radix(distance, 16).map_err(|_| invalid())?;
        let direction = match direction {
            "0" => Direction::East,
            "1" => Direction::South,
            "2" => Direction::West,
            "3" => Direction::North,
            _ => return Err(invalid()),
        };

        Ok(DigStep {
            direction,
            distance,
        })
    }
}

pub fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Instruction<'a>>, extra::Err<Rich<'a, char>>> {
    let direction = choice((
        just('U').to(Direction::North),
        just('D').to(Direction::South),
        just('L').to(Direction::West),
        just('R').to(Direction::East),
    ));
    let distance = text::int(10).try_map(|digits: &str, span| {
        digits
            .parse::<i64>()
            .map_err(|e| Rich::custom(span, format!("distance {digits}: {e}")))
    });
    let color = text::digits(16)
        .exactly(6)
        .to_slice()
        .delimited_by(just("(#"), just(')'));

    direction
        .then_ignore(just(' '))
        .then(distance)
        .then_ignore(just(' '))
        .then(color)
        .map(|((direction, distance), color)| Instruction {
            step: DigStep {
                direction,
                distance,
            },
            color,
        })
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .padded()
}

/// A closed trench dug from the origin; `x` is the column, `y` the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trench {
    pub vertices: Vec<I64Vec2>,
    /// Number of unit steps dug.
    pub length: i64,
}

impl Trench {
    pub fn dig<I>(steps: I) -> Result<Self, DigPlanError>
    where
        I: IntoIterator<Item = DigStep>,
    {
        let mut position = I64Vec2::ZERO;
        let mut vertices = Vec::new();
        let mut length = 0i64;

        for (dug, step) in steps.into_iter().enumerate() {
            let overflow = || DigPlanError::Overflow { dug };
            let (dr, dc) = step.direction.delta();
            let x = (dc as i64)
                .checked_mul(step.distance)
                .and_then(|dx| position.x.checked_add(dx))
                .ok_or_else(overflow)?;
            let y = (dr as i64)
                .checked_mul(step.distance)
                .and_then(|dy| position.y.checked_add(dy))
                .ok_or_else(overflow)?;
            length = step
                .distance
                .checked_abs()
                .and_then(|distance| length.checked_add(distance))
                .ok_or_else(overflow)?;

            position = I64Vec2::new(x, y);
            vertices.push(position);
        }

        Ok(Self { vertices, length })
    }

    /// Cubic metres of lava the lagoon holds: every block on or inside the
    /// trench.
    pub fn lagoon_volume(&self) -> i128 {
        lattice_points(&self.vertices)
    }
}

fn cross(a: I64Vec2, b: I64Vec2) -> i128 {
    i128::from(a.x) * i128::from(b.y) - i128::from(a.y) * i128::from(b.x)
}

/// Twice the signed shoelace area; positive for counter-clockwise vertices
/// in a y-up frame. Accumulates in `i128` so any `i64` polygon of practical
/// size fits.
pub fn twice_area(vertices: &[I64Vec2]) -> i128 {
    if vertices.len() < 3 {
        return 0;
    }
    vertices
        .iter()
        .circular_tuple_windows()
        .map(|(a, b)| cross(*a, *b))
        .sum()
}

/// Unsigned shoelace area, halved once at the end.
pub fn shoelace_area(vertices: &[I64Vec2]) -> i128 {
    twice_area(vertices).abs() / 2
}

/// Lattice points on the closed boundary through `vertices`.
pub fn boundary_points(vertices: &[I64Vec2]) -> i128 {
    if vertices.len() < 2 {
        return 0;
    }
    vertices
        .iter()
        .circular_tuple_windows()
        .map(|(a, b)| {
            let dx = i128::from(b.x) - i128::from(a.x);
            let dy = i128::from(b.y) - i128::from(a.y);
            dx.abs().gcd(&dy.abs())
        })
        .sum()
}

/// Pick's theorem, `A = i + b/2 - 1`, solved for `i` without fractions.
/// Degenerate polygons enclose nothing.
pub fn pick_interior(twice_area: i128, boundary: i128) -> i128 {
    if twice_area == 0 {
        return 0;
    }
    (twice_area - boundary + 2) / 2
}

pub fn interior_points(vertices: &[I64Vec2]) -> i128 {
    pick_interior(twice_area(vertices).abs(), boundary_points(vertices))
}

/// Lattice points on or inside the polygon. A zero-area closed path still
/// counts its distinct boundary points.
pub fn lattice_points(vertices: &[I64Vec2]) -> i128 {
    if vertices.is_empty() {
        return 0;
    }
    (twice_area(vertices).abs() + boundary_points(vertices) + 2) / 2
}
