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

use crate::{
    context::SolverContext,
    engine::err::EngineError,
    eval::assemble_roster,
    model::builder::{ModelBuilder, ModelKind},
    solve::{MilpBackend, SolveOutcome},
};
use shift_alloc_model::prelude::{Roster, SolveStatus};
use std::time::Instant;

/// Satisfaction weights live in `[0, 5]`, so the achievable per-volunteer
/// average does too.
const TARGET_HIGH: f64 = 5.0;
const TOLERANCE: f64 = 0.1;

/// Best assignment found by the maximin search, with the target it was
/// proven feasible at.
#[derive(Debug, Clone)]
pub struct EgalitarianOutcome {
    roster: Roster,
    status: SolveStatus,
    target_avg: f64,
}

impl EgalitarianOutcome {
    #[inline]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[inline]
    pub fn into_roster(self) -> Roster {
        self.roster
    }

    #[inline]
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    #[inline]
    pub fn target_avg(&self) -> f64 {
        self.target_avg
    }
}

/// Binary search over the egalitarian target: the constraint set tightens
/// monotonically with the target, so feasibility is a threshold function
/// and log2(5 / 0.1) ≈ 6 solver calls pin it down.
#[derive(Debug, Clone)]
pub struct EgalitarianSearch;

impl EgalitarianSearch {
    /// Runs the search. Returns `None` when no target in `[0, 5]` admits a
    /// feasible assignment. An expired deadline stops the search early with
    /// whatever incumbent exists.
    pub fn run(
        ctx: &SolverContext<'_>,
        backend: &dyn MilpBackend,
        deadline: Option<Instant>,
    ) -> Result<Option<EgalitarianOutcome>, EngineError> {
        let mut low = 0.0f64;
        let mut high = TARGET_HIGH;
        let mut best: Option<EgalitarianOutcome> = None;

        while high - low > TOLERANCE {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                tracing::info!(low, high, "deadline reached, stopping egalitarian search");
                break;
            }

            let target_avg = (low + high) / 2.0;
            let (model, map) = ModelBuilder::build(ctx, ModelKind::Egalitarian { target_avg });

            match backend.solve(&model)? {
                SolveOutcome::Solved(solution) => {
                    let roster = assemble_roster(ctx.problem(), &map, solution.values())?;
                    tracing::debug!(target_avg, assignments = roster.len(), "target feasible");
                    best = Some(EgalitarianOutcome {
                        roster,
                        status: solution.status(),
                        target_avg,
                    });
                    low = target_avg;
                }
                SolveOutcome::Infeasible => {
                    tracing::debug!(target_avg, "target infeasible");
                    high = target_avg;
                }
                SolveOutcome::Transient(message) => {
                    tracing::warn!(target_avg, error = %message, "transient solver failure");
                    high = target_avg;
                }
            }
        }

        Ok(best)
    }
}
