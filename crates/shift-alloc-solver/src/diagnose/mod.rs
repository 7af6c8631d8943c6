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

use crate::context::SolverContext;
use shift_alloc_core::prelude::{Points, TimePoint};
use shift_alloc_model::prelude::{Diagnosis, DiagnosisKind};

/// Structural feasibility checks run after both phases have failed.
///
/// Sound but not complete: every emitted cause really holds on the input,
/// but an empty list does not prove the instance feasible.
#[derive(Debug, Clone)]
pub struct Diagnoser;

impl Diagnoser {
    pub fn diagnose(ctx: &SolverContext<'_>) -> Vec<Diagnosis> {
        [
            Self::check_capacity_excess(ctx),
            Self::check_points_shortage(ctx),
            Self::check_points_excess(ctx),
            Self::check_concurrent_overlap(ctx),
            Self::check_back_to_back_tight(ctx),
            Self::check_guarantee_impossible(ctx),
            Self::check_guarantee_bottleneck(ctx),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// More slots than the volunteers may legally work.
    fn check_capacity_excess(ctx: &SolverContext<'_>) -> Option<Diagnosis> {
        let slots = ctx.problem().shifts().total_capacity();
        let workable = ctx.volunteer_count() as u64 * ctx.settings().max_shifts as u64;
        if slots > workable {
            return Some(Diagnosis::new(
                DiagnosisKind::CapacityExcess,
                format!(
                    "Shifts offer {slots} slots but {} volunteers may work at most {workable}",
                    ctx.volunteer_count()
                ),
                "Add volunteers, raise the shift limit, or lower shift capacities",
            ));
        }
        None
    }

    /// Less workload on offer than the floors demand.
    fn check_points_shortage(ctx: &SolverContext<'_>) -> Option<Diagnosis> {
        let available = ctx.problem().shifts().total_capacity_points();
        let required: Points = (0..ctx.volunteer_count())
            .map(|v| ctx.effective_min(v))
            .sum();
        if available < required {
            let shortfall = required.saturating_sub(available);
            return Some(Diagnosis::new(
                DiagnosisKind::PointsShortage,
                format!(
                    "Shifts provide {available} points but the workload floors require \
                     {required}, a shortfall of {shortfall}"
                ),
                "Lower the minimum points, or raise shift points or capacities",
            ));
        }
        None
    }

    /// Far more workload on offer than the ceilings can absorb.
    fn check_points_excess(ctx: &SolverContext<'_>) -> Option<Diagnosis> {
        let available = ctx.problem().shifts().total_capacity_points();
        let absorbable: Points = (0..ctx.volunteer_count())
            .map(|v| ctx.effective_max(v))
            .sum();
        if available.deci() as f64 > 1.5 * absorbable.deci() as f64 {
            return Some(Diagnosis::new(
                DiagnosisKind::PointsExcess,
                format!(
                    "Shifts provide {available} points but the workload ceilings absorb \
                     only {absorbable}"
                ),
                "Raise the allowed points above minimum, add volunteers, or lower shift \
                 points",
            ));
        }
        None
    }

    /// More capacity demanded at one instant than there are volunteers.
    fn check_concurrent_overlap(ctx: &SolverContext<'_>) -> Option<Diagnosis> {
        let peak = Self::peak_concurrent_capacity(ctx);
        let volunteers = ctx.volunteer_count() as u64;
        if peak > volunteers {
            return Some(Diagnosis::new(
                DiagnosisKind::ConcurrentOverlap,
                format!(
                    "Up to {peak} volunteers are needed at the same moment but only \
                     {volunteers} exist"
                ),
                "Stagger shift times or add volunteers",
            ));
        }
        None
    }

    /// Forbidden back-to-back pairs dense enough to choke assignment.
    fn check_back_to_back_tight(ctx: &SolverContext<'_>) -> Option<Diagnosis> {
        if !ctx.settings().forbid_back_to_back {
            return None;
        }
        let pairs = ctx.conflicts().sequential_pairs().len();
        let shifts = ctx.shift_count();
        if shifts > 0 && 2.0 * pairs as f64 / shifts as f64 > 2.0 {
            return Some(Diagnosis::new(
                DiagnosisKind::BackToBackTight,
                format!(
                    "{pairs} sequential shift pairs across {shifts} shifts leave little \
                     room when back-to-back work is forbidden"
                ),
                "Switch back-to-back handling from forbid to minimize",
            ));
        }
        None
    }

    /// Some volunteer has no shift at all within the guarantee level.
    fn check_guarantee_impossible(ctx: &SolverContext<'_>) -> Option<Diagnosis> {
        let level = ctx.settings().guarantee_level;
        if level == 0 {
            return None;
        }
        for volunteer in ctx.problem().volunteers().iter() {
            let has_eligible = volunteer
                .iter_ranked_within(level)
                .any(|(id, _)| ctx.problem().shifts().contains_id(id));
            if !has_eligible {
                return Some(Diagnosis::new(
                    DiagnosisKind::GuaranteeImpossible,
                    format!(
                        "Volunteer {} has no shift ranked within the guarantee level \
                         {level}",
                        volunteer.name().as_str()
                    ),
                    "Lower the guarantee level",
                ));
            }
        }
        None
    }

    /// Many volunteers funnel through tiny top-preference capacity.
    fn check_guarantee_bottleneck(ctx: &SolverContext<'_>) -> Option<Diagnosis> {
        let level = ctx.settings().guarantee_level;
        if level == 0 {
            return None;
        }
        let bottlenecked = ctx
            .problem()
            .volunteers()
            .iter()
            .filter(|v| {
                let capacity: u64 = v
                    .iter_ranked_within(level)
                    .filter_map(|(id, _)| ctx.problem().shifts().get_by_id(id))
                    .map(|s| s.capacity() as u64)
                    .sum();
                capacity <= 2
            })
            .count();
        if bottlenecked > 5 {
            return Some(Diagnosis::new(
                DiagnosisKind::GuaranteeBottleneck,
                format!(
                    "{bottlenecked} volunteers have two or fewer slots among their \
                     top-{level} preferences"
                ),
                "Encourage more diverse preferences or lower the guarantee level",
            ));
        }
        None
    }

    /// Peak interval-overlap depth of capacity demand: sweep the shift
    /// start/end events in timestamp order with releases before claims at
    /// equal instants.
    pub fn peak_concurrent_capacity(ctx: &SolverContext<'_>) -> u64 {
        let mut events: Vec<(TimePoint<i64>, i64)> = Vec::new();
        for shift in ctx.problem().shifts().iter() {
            events.push((shift.start_time(), shift.capacity() as i64));
            events.push((shift.end_time(), -(shift.capacity() as i64)));
        }
        events.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

        let mut running = 0i64;
        let mut peak = 0i64;
        for (_, delta) in events {
            running += delta;
            peak = peak.max(running);
        }
        peak.max(0) as u64
    }
}
