// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

pub mod err;
pub mod highs;

use crate::model::milp::MilpModel;
use shift_alloc_model::prelude::SolveStatus;

/// Primal values of one solved model, indexed by variable creation order.
#[derive(Debug, Clone, PartialEq)]
pub struct MilpSolution {
    status: SolveStatus,
    values: Vec<f64>,
}

impl MilpSolution {
    #[inline]
    pub fn new(status: SolveStatus, values: Vec<f64>) -> Self {
        debug_assert!(status.is_success());
        Self { status, values }
    }

    #[inline]
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// In-band solve outcomes the search loops recover from. Unknown backend
/// failures are out-of-band ([`err::BackendError`]) and propagate to the
/// caller instead of being swallowed.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// `Optimal`, or `Feasible` when the backend stopped early with a valid
    /// incumbent.
    Solved(MilpSolution),
    /// Proven infeasible (or unbounded, which our models can only be
    /// through contradiction).
    Infeasible,
    /// A known-flaky backend failure signature; treated like `Infeasible`
    /// by the search loops but logged distinctly.
    Transient(String),
}

/// The one interface abstraction in the solver: the MILP backend is
/// swappable behind this trait.
pub trait MilpBackend {
    fn solve(&self, model: &MilpModel) -> Result<SolveOutcome, err::BackendError>;
}
