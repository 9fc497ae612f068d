//! Projection of a deterministic state transition to a far-away iteration.
//!
//! States are keyed by their [`Display`] form. Once a serialised state recurs,
//! the remaining iterations are folded into the detected cycle instead of
//! being simulated.

use std::collections::HashMap;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    /// Iteration at which the repeating part begins.
    pub start: usize,
    pub len: usize,
}

/// A caller-owned cache of every state reached from one initial state.
///
/// The cache can be queried repeatedly for different iteration counts; work
/// done by earlier queries is reused.
#[derive(Debug, Clone)]
pub struct CycleDetector<S> {
    history: Vec<S>,
    seen: HashMap<String, usize>,
    cycle: Option<Cycle>,
}

impl<S: Display> CycleDetector<S> {
    pub fn new(initial: S) -> Self {
        let mut seen = HashMap::new();
        seen.insert(initial.to_string(), 0);
        Self {
            history: vec![initial],
            seen,
            cycle: None,
        }
    }

    pub fn cycle(&self) -> Option<Cycle> {
        self.cycle
    }

    /// Number of distinct states simulated so far, the initial one included.
    pub fn simulated(&self) -> usize {
        self.history.len()
    }

    /// The state after `iterations` applications of `step`.
    ///
    /// `step` must be the same transition on every call for a given detector.
    pub fn state_after<F>(&mut self, iterations: usize, mut step: F) -> &S
    where
        F: FnMut(&S) -> S,
    {
        while self.cycle.is_none() && self.history.len() <= iterations {
            let current = &self.history[self.history.len() - 1];
            let next = step(current);
            let key = next.to_string();

            if let Some(&start) = self.seen.get(&key) {
                let cycle = Cycle {
                    start,
                    len: self.history.len() - start,
                };
                tracing::debug!(start = cycle.start, len = cycle.len, "state recurred");
                self.cycle = Some(cycle);
            } else {
                self.seen.insert(key, self.history.len());
                self.history.push(next);
            }
        }

        &self.history[self.index_of(iterations)]
    }

    fn index_of(&self, iterations: usize) -> usize {
        match self.cycle {
            Some(Cycle { start, len }) if iterations >= self.history.len() => {
                start + (iterations - start) % len
            }
            _ => iterations,
        }
    }
}
