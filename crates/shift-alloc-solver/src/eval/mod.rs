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

use crate::model::builder::VarMap;
use shift_alloc_core::prelude::Points;
use shift_alloc_model::{
    prefs::{PREFERRED_RANK_MAX, satisfaction_weight},
    prelude::{Problem, Roster, Settings, VolunteerIdentifier},
    solution::err::RosterError,
};

/// Projects primal variable values back onto the problem: every assignment
/// variable at or above 0.5 becomes an assignment pair.
pub fn assemble_roster(
    problem: &Problem,
    map: &VarMap,
    values: &[f64],
) -> Result<Roster, RosterError> {
    let pairs = map
        .iter()
        .filter(|&(_, var)| values.get(var.index()).copied().unwrap_or(0.0) >= 0.5)
        .map(|(pair, _)| pair);
    Roster::from_pairs(problem, pairs)
}

/// Per-volunteer satisfaction summary.
#[derive(Debug, Clone, PartialEq)]
pub struct VolunteerMetrics {
    pub name: VolunteerIdentifier,
    /// Sum of satisfaction weights over assigned shifts.
    pub satisfaction: i64,
    /// Satisfaction divided by assigned-shift count; zero when unassigned.
    pub avg_satisfaction: f64,
    /// Assigned shifts at each preferred rank, index 0 = rank 1.
    pub rank_hits: [u32; PREFERRED_RANK_MAX as usize],
    pub points: Points,
    pub assigned_shifts: usize,
    pub reached_min: bool,
}

/// The fairness numbers the reporting layer quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsReport {
    pub per_volunteer: Vec<VolunteerMetrics>,
    pub min_avg_satisfaction: f64,
    pub max_avg_satisfaction: f64,
    pub mean_avg_satisfaction: f64,
    pub stddev_avg_satisfaction: f64,
    /// `max(0, 1 - stddev / max_avg_satisfaction)`; 1.0 when everyone sits
    /// at the same level, even a level of zero.
    pub fairness_index: f64,
    /// Share of assignments that land on a preferred (rank 1-5) shift.
    pub preferred_share: f64,
    /// Share of volunteers reaching their effective minimum workload.
    pub reached_min_share: f64,
}

/// Computes the metric block for a roster. Volunteers appear in input
/// order.
pub fn compute_metrics(problem: &Problem, settings: &Settings, roster: &Roster) -> MetricsReport {
    let mut per_volunteer = Vec::with_capacity(problem.volunteers().len());
    let mut preferred_assignments = 0usize;
    let mut reached_min_count = 0usize;

    for (v, volunteer) in problem.volunteers().iter().enumerate() {
        let shifts = roster.shifts_of(v);
        let mut satisfaction = 0i64;
        let mut rank_hits = [0u32; PREFERRED_RANK_MAX as usize];

        for &s in shifts {
            let rank = problem
                .shifts()
                .get(s)
                .and_then(|shift| volunteer.rank_of(shift.id()));
            if let Some(rank) = rank {
                satisfaction += satisfaction_weight(rank);
                if (1..=PREFERRED_RANK_MAX).contains(&rank) {
                    rank_hits[(rank - 1) as usize] += 1;
                    preferred_assignments += 1;
                }
            }
        }

        let assigned_shifts = shifts.len();
        let avg_satisfaction = if assigned_shifts == 0 {
            0.0
        } else {
            satisfaction as f64 / assigned_shifts as f64
        };

        let points = roster.points_of(problem, v);
        let reached_min = points >= settings.effective_min(volunteer);
        if reached_min {
            reached_min_count += 1;
        }

        per_volunteer.push(VolunteerMetrics {
            name: volunteer.name().clone(),
            satisfaction,
            avg_satisfaction,
            rank_hits,
            points,
            assigned_shifts,
            reached_min,
        });
    }

    let averages: Vec<f64> = per_volunteer.iter().map(|m| m.avg_satisfaction).collect();
    let count = averages.len() as f64;
    let min = averages.iter().copied().fold(f64::INFINITY, f64::min);
    let max = averages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = averages.iter().sum::<f64>() / count;
    let variance = averages.iter().map(|a| (a - mean).powi(2)).sum::<f64>() / count;
    let stddev = variance.sqrt();

    let fairness_index = if max > 0.0 {
        (1.0 - stddev / max).max(0.0)
    } else if stddev == 0.0 {
        1.0
    } else {
        0.0
    };

    let preferred_share = if roster.len() == 0 {
        0.0
    } else {
        preferred_assignments as f64 / roster.len() as f64
    };

    MetricsReport {
        per_volunteer,
        min_avg_satisfaction: min,
        max_avg_satisfaction: max,
        mean_avg_satisfaction: mean,
        stddev_avg_satisfaction: stddev,
        fairness_index,
        preferred_share,
        reached_min_share: reached_min_count as f64 / count,
    }
}
