//! Result type shared by the three runners.

use crate::bounds::Point;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Hill Climbing: the best neighbor improved by less than epsilon.
    Converged,
    /// Random Local Search: a sampled neighbor changed the value by less
    /// than epsilon.
    Stagnated,
    /// Simulated Annealing: temperature fell to or below epsilon.
    Frozen {
        /// Temperature at the moment the search stopped.
        temperature: f64,
    },
    /// The iteration budget ran out.
    BudgetExhausted,
}

/// Final state of one search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// The point the search ended on.
    pub point: Point,

    /// Objective value at `point`.
    pub value: f64,

    /// Loop iterations executed.
    pub iterations: usize,

    /// Objective evaluations, including the initial point.
    pub evaluations: usize,

    /// Number of accepted transitions.
    pub accepted_moves: usize,

    /// Why the search stopped.
    pub termination: Termination,

    /// Value of the initial state followed by the value after every
    /// accepted transition.
    pub value_history: Vec<f64>,
}

impl SearchOutcome {
    /// Whether the search stopped before spending its whole budget.
    pub fn stopped_early(&self) -> bool {
        self.termination != Termination::BudgetExhausted
    }
}
