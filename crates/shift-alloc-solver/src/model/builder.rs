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
    model::milp::{ConstraintOp, MilpModel, VarId},
};
use shift_alloc_core::prelude::{Lcg, Points};
use shift_alloc_model::{
    prefs::{SEQUENTIAL_PENALTY, satisfaction_weight, stepped_reward},
    prelude::RelaxationLevel,
};
use std::collections::BTreeMap;

/// Which MILP variant to emit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelKind {
    /// One iteration of the maximin binary search: capacities are upper
    /// bounds and every volunteer's average satisfaction must reach
    /// `target_avg`.
    Egalitarian { target_avg: f64 },
    /// Exact-capacity fill at one relaxation level; objective is total
    /// (jittered) stepped preference reward.
    HardFill { level: RelaxationLevel },
}

/// Maps (volunteer index, shift index) to the assignment variable, for
/// projecting solver output back onto the problem.
#[derive(Debug, Clone, Default)]
pub struct VarMap {
    assignment: BTreeMap<(usize, usize), VarId>,
}

impl VarMap {
    #[inline]
    pub fn var_of(&self, volunteer: usize, shift: usize) -> Option<VarId> {
        self.assignment.get(&(volunteer, shift)).copied()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), VarId)> + '_ {
        self.assignment.iter().map(|(&k, &v)| (k, v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.assignment.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }
}

/// Translates a solver context plus a phase descriptor into a MILP.
///
/// Variables are created volunteers-outer, shifts-inner, in input order;
/// this ordering is observable through solver tie-breaking and must not
/// change.
#[derive(Debug, Clone)]
pub struct ModelBuilder;

impl ModelBuilder {
    pub fn build(ctx: &SolverContext<'_>, kind: ModelKind) -> (MilpModel, VarMap) {
        let vol_count = ctx.volunteer_count();
        let shift_count = ctx.shift_count();
        let settings = ctx.settings();

        let mut model = MilpModel::new();
        let mut assignment = BTreeMap::new();

        for v in 0..vol_count {
            for s in 0..shift_count {
                let var = model.add_binary(format!("x_{v}_{s}"));
                assignment.insert((v, s), var);
            }
        }
        let map = VarMap { assignment };

        // Objective: negated rewards, because the backend minimizes. The
        // hard-fill jitter is one LCG draw per pair, in variable order.
        match kind {
            ModelKind::Egalitarian { .. } => {
                for v in 0..vol_count {
                    for s in 0..shift_count {
                        let weight = ctx.rank_of(v, s).map_or(0, satisfaction_weight);
                        if let Some(var) = map.var_of(v, s) {
                            model.add_objective_term(var, -(weight as f64));
                        }
                    }
                }
            }
            ModelKind::HardFill { .. } => {
                let mut rng = Lcg::new(settings.seed);
                for v in 0..vol_count {
                    for s in 0..shift_count {
                        let reward = ctx.rank_of(v, s).map_or(1, stepped_reward);
                        let jitter = rng.next_below(10) as i64;
                        if let Some(var) = map.var_of(v, s) {
                            model.add_objective_term(var, -((reward + jitter) as f64));
                        }
                    }
                }
            }
        }

        // Soft sequential penalties: one indicator per (volunteer, pair),
        // forced to 1 exactly when both shifts are assigned.
        if !settings.forbid_back_to_back {
            for v in 0..vol_count {
                for &(a, b) in ctx.conflicts().sequential_pairs() {
                    let y = model.add_binary(format!("y_{v}_{a}_{b}"));
                    model.add_objective_term(y, SEQUENTIAL_PENALTY as f64);
                    if let (Some(xa), Some(xb)) = (map.var_of(v, a), map.var_of(v, b)) {
                        model.add_constraint(
                            vec![(xa, 1.0), (xb, 1.0), (y, -1.0)],
                            ConstraintOp::LessOrEqual,
                            1.0,
                        );
                    }
                }
            }
        }

        // Shift capacities: upper bounds while searching, equalities when
        // hard-filling.
        let capacity_op = match kind {
            ModelKind::Egalitarian { .. } => ConstraintOp::LessOrEqual,
            ModelKind::HardFill { .. } => ConstraintOp::Equal,
        };
        for s in 0..shift_count {
            let capacity = ctx
                .problem()
                .shifts()
                .get(s)
                .map(|shift| shift.capacity())
                .unwrap_or(0);
            let terms: Vec<(VarId, f64)> = (0..vol_count)
                .filter_map(|v| map.var_of(v, s))
                .map(|var| (var, 1.0))
                .collect();
            model.add_constraint(terms, capacity_op, capacity as f64);
        }

        let shift_points_deci: Vec<i64> = (0..shift_count)
            .map(|s| {
                ctx.problem()
                    .shifts()
                    .get(s)
                    .map(|shift| shift.points().deci())
                    .unwrap_or(0)
            })
            .collect();

        for v in 0..vol_count {
            let (floor, ceiling, shift_limit) = Self::volunteer_bounds(ctx, v, kind);

            let point_terms: Vec<(VarId, f64)> = (0..shift_count)
                .filter_map(|s| map.var_of(v, s).map(|var| (var, shift_points_deci[s] as f64)))
                .collect();
            if !floor.is_zero() {
                model.add_constraint(
                    point_terms.clone(),
                    ConstraintOp::GreaterOrEqual,
                    floor.deci() as f64,
                );
            }
            model.add_constraint(
                point_terms,
                ConstraintOp::LessOrEqual,
                ceiling.deci() as f64,
            );

            let count_terms: Vec<(VarId, f64)> = (0..shift_count)
                .filter_map(|s| map.var_of(v, s))
                .map(|var| (var, 1.0))
                .collect();
            model.add_constraint(
                count_terms.clone(),
                ConstraintOp::LessOrEqual,
                shift_limit as f64,
            );
            model.add_constraint(count_terms, ConstraintOp::GreaterOrEqual, 1.0);

            Self::add_guarantee_constraint(ctx, &map, &mut model, v);

            if let ModelKind::Egalitarian { target_avg } = kind {
                let terms: Vec<(VarId, f64)> = (0..shift_count)
                    .filter_map(|s| {
                        let weight = ctx.rank_of(v, s).map_or(0, satisfaction_weight);
                        map.var_of(v, s).map(|var| (var, weight as f64 - target_avg))
                    })
                    .collect();
                model.add_constraint(terms, ConstraintOp::GreaterOrEqual, 0.0);
            }
        }

        // No volunteer may work two overlapping shifts.
        for &(a, b) in ctx.conflicts().overlap_pairs() {
            for v in 0..vol_count {
                if let (Some(xa), Some(xb)) = (map.var_of(v, a), map.var_of(v, b)) {
                    model.add_constraint(
                        vec![(xa, 1.0), (xb, 1.0)],
                        ConstraintOp::LessOrEqual,
                        1.0,
                    );
                }
            }
        }

        if settings.forbid_back_to_back {
            for &(a, b) in ctx.conflicts().sequential_pairs() {
                for v in 0..vol_count {
                    if let (Some(xa), Some(xb)) = (map.var_of(v, a), map.var_of(v, b)) {
                        model.add_constraint(
                            vec![(xa, 1.0), (xb, 1.0)],
                            ConstraintOp::LessOrEqual,
                            1.0,
                        );
                    }
                }
            }
        }

        (model, map)
    }

    /// Workload floor/ceiling (deci-points) and shift-count limit for one
    /// volunteer, after applying the hard-fill relaxation if any.
    fn volunteer_bounds(
        ctx: &SolverContext<'_>,
        v: usize,
        kind: ModelKind,
    ) -> (Points, Points, u32) {
        let floor = ctx.effective_min(v);
        let ceiling = ctx.effective_max(v);
        let limit = ctx.settings().max_shifts;
        match kind {
            ModelKind::Egalitarian { .. } => (floor, ceiling, limit),
            ModelKind::HardFill { level } => (
                level.relaxed_floor(floor),
                level.relaxed_ceiling(ceiling),
                level.relaxed_shift_count(limit),
            ),
        }
    }

    /// At least one shift ranked within the guarantee level. A volunteer
    /// with no such shift falls through to the at-least-one constraint.
    fn add_guarantee_constraint(
        ctx: &SolverContext<'_>,
        map: &VarMap,
        model: &mut MilpModel,
        v: usize,
    ) {
        let level = ctx.settings().guarantee_level;
        if level == 0 {
            return;
        }
        let terms: Vec<(VarId, f64)> = (0..ctx.shift_count())
            .filter(|&s| ctx.rank_of(v, s).is_some_and(|r| r <= level))
            .filter_map(|s| map.var_of(v, s))
            .map(|var| (var, 1.0))
            .collect();
        if !terms.is_empty() {
            model.add_constraint(terms, ConstraintOp::GreaterOrEqual, 1.0);
        }
    }
}
