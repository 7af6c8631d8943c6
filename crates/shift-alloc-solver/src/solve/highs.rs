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
    model::milp::{ConstraintOp, MilpModel},
    solve::{MilpBackend, MilpSolution, SolveOutcome, err::BackendError},
};
use good_lp::{Expression, Solution, SolverModel, default_solver, variable, variables};
use shift_alloc_model::prelude::SolveStatus;

/// Failure signatures of the backing solver that are known to be flaky
/// rather than structural. Matched case-insensitively against the error
/// text; anything else propagates as a [`BackendError`].
const FLAKY_SIGNATURES: [&str; 4] = [
    "index out of bounds",
    "abort",
    "signature mismatch",
    "time limit",
];

/// The default backend: `good_lp` over HiGHS. Single-threaded so repeated
/// runs with the same model branch identically.
#[derive(Debug, Clone, Default)]
pub struct HighsBackend;

impl HighsBackend {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    fn is_flaky_signature(message: &str) -> bool {
        let lower = message.to_lowercase();
        FLAKY_SIGNATURES.iter().any(|sig| lower.contains(sig))
    }
}

impl MilpBackend for HighsBackend {
    fn solve(&self, model: &MilpModel) -> Result<SolveOutcome, BackendError> {
        let mut vars = variables!();
        let xs: Vec<_> = (0..model.var_count())
            .map(|i| {
                vars.add(
                    variable()
                        .binary()
                        .name(model.var_name(crate::model::milp::VarId::from_index(i))),
                )
            })
            .collect();

        let objective = model
            .objective()
            .iter()
            .fold(Expression::from(0.0), |acc, &(var, coefficient)| {
                acc + coefficient * xs[var.index()]
            });

        let mut prob = vars
            .minimise(objective)
            .using(default_solver)
            .set_option("threads", 1);

        for constraint in model.constraints() {
            let lhs = constraint
                .terms()
                .iter()
                .fold(Expression::from(0.0), |acc, &(var, coefficient)| {
                    acc + coefficient * xs[var.index()]
                });
            let c = match constraint.op() {
                ConstraintOp::LessOrEqual => lhs.leq(constraint.rhs()),
                ConstraintOp::GreaterOrEqual => lhs.geq(constraint.rhs()),
                ConstraintOp::Equal => lhs.eq(constraint.rhs()),
            };
            prob.add_constraint(c);
        }

        match prob.solve() {
            Ok(solution) => {
                let values: Vec<f64> = xs.iter().map(|x| solution.value(*x)).collect();
                Ok(SolveOutcome::Solved(MilpSolution::new(
                    SolveStatus::Optimal,
                    values,
                )))
            }
            Err(good_lp::ResolutionError::Infeasible)
            | Err(good_lp::ResolutionError::Unbounded) => Ok(SolveOutcome::Infeasible),
            Err(other) => {
                let message = other.to_string();
                if Self::is_flaky_signature(&message) {
                    Ok(SolveOutcome::Transient(message))
                } else {
                    Err(BackendError::new(message))
                }
            }
        }
    }
}
