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
use shift_alloc_model::prelude::{RelaxationLevel, Roster, SolveStatus};
use std::time::Instant;

/// Result of the exact-capacity-fill sweep.
#[derive(Debug, Clone)]
pub enum HardFillOutcome {
    /// Some level produced a full fill.
    Solved {
        roster: Roster,
        status: SolveStatus,
        level: RelaxationLevel,
    },
    /// Every attempted level was infeasible.
    Exhausted,
    /// The deadline expired before any level succeeded.
    DeadlineExpired,
}

/// Tries each relaxation level in order until the exact-fill MILP becomes
/// feasible. Without permission to relax, only the strict level is tried.
#[derive(Debug, Clone)]
pub struct HardFill;

impl HardFill {
    pub fn run(
        ctx: &SolverContext<'_>,
        backend: &dyn MilpBackend,
        deadline: Option<Instant>,
    ) -> Result<HardFillOutcome, EngineError> {
        let levels: &[RelaxationLevel] = if ctx.settings().allow_relaxation {
            &RelaxationLevel::ALL
        } else {
            &[RelaxationLevel::Full]
        };

        for &level in levels {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                tracing::info!(relaxation = %level, "deadline reached, stopping hard-fill sweep");
                return Ok(HardFillOutcome::DeadlineExpired);
            }

            let (model, map) = ModelBuilder::build(ctx, ModelKind::HardFill { level });
            match backend.solve(&model)? {
                SolveOutcome::Solved(solution) => {
                    let roster = assemble_roster(ctx.problem(), &map, solution.values())?;
                    tracing::info!(
                        relaxation = %level,
                        assignments = roster.len(),
                        "hard fill succeeded"
                    );
                    return Ok(HardFillOutcome::Solved {
                        roster,
                        status: solution.status(),
                        level,
                    });
                }
                SolveOutcome::Infeasible => {
                    tracing::debug!(relaxation = %level, "hard fill infeasible at this level");
                }
                SolveOutcome::Transient(message) => {
                    tracing::warn!(relaxation = %level, error = %message, "transient solver failure");
                }
            }
        }

        Ok(HardFillOutcome::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve::highs::HighsBackend;
    use shift_alloc_core::prelude::{Points, TimePoint};
    use shift_alloc_model::common::DayKey;
    use shift_alloc_model::prelude::{
        Problem, Settings, Shift, ShiftContainer, ShiftIdentifier, Volunteer,
        VolunteerContainer, VolunteerIdentifier,
    };
    use std::collections::BTreeMap;

    fn shift(id: &str, start: i64, deci: u32) -> Shift {
        Shift::new(
            ShiftIdentifier::new(id),
            DayKey::new("d1"),
            "gate",
            TimePoint::new(start),
            TimePoint::new(start + 60),
            1,
            Points::from_deci(deci),
        )
        .unwrap()
    }

    fn vol(name: &str, entries: &[(&str, u32)]) -> Volunteer {
        let prefs: BTreeMap<ShiftIdentifier, u32> = entries
            .iter()
            .map(|(id, r)| (ShiftIdentifier::new(*id), *r))
            .collect();
        Volunteer::new(VolunteerIdentifier::new(name), Points::ZERO, prefs).unwrap()
    }

    #[test]
    fn test_full_level_fills_unranked_shift() {
        // Shift c is unranked; exact fill hands it to whoever's ceiling
        // allows it without any relaxation.
        let shifts = ShiftContainer::try_from_iter([
            shift("a", 0, 20),
            shift("b", 600, 20),
            shift("c", 1200, 20),
        ])
        .unwrap();
        let vols = VolunteerContainer::try_from_iter([
            vol("x", &[("a", 1)]),
            vol("y", &[("b", 1)]),
        ])
        .unwrap();
        let problem = Problem::new(shifts, vols).unwrap();
        let settings = Settings {
            min_points: Points::from_deci(20),
            max_over: Points::from_deci(20),
            max_shifts: 2,
            ..Settings::default()
        };
        let conflicts = problem.conflicts(settings.back_to_back_gap);
        let ctx = SolverContext::new(&problem, &settings, &conflicts);

        match HardFill::run(&ctx, &HighsBackend::new(), None).unwrap() {
            HardFillOutcome::Solved {
                roster,
                status,
                level,
            } => {
                assert!(status.is_success());
                assert_eq!(level, RelaxationLevel::Full);
                assert_eq!(roster.len(), 3);
                assert_eq!(roster.assigned_count(2), 1);
            }
            other => panic!("expected Solved, got {other:?}"),
        }
    }

    #[test]
    fn test_relaxation_sweep_reaches_relaxed_points() {
        // Two volunteers, one 2-point shift each is impossible against a
        // 3-point floor; halving the floor (relaxed-points) fixes it.
        let shifts =
            ShiftContainer::try_from_iter([shift("a", 0, 20), shift("b", 600, 20)]).unwrap();
        let vols = VolunteerContainer::try_from_iter([
            vol("x", &[("a", 1)]),
            vol("y", &[("b", 1)]),
        ])
        .unwrap();
        let problem = Problem::new(shifts, vols).unwrap();
        let settings = Settings {
            min_points: Points::from_deci(30),
            max_over: Points::from_deci(10),
            max_shifts: 1,
            ..Settings::default()
        };
        let conflicts = problem.conflicts(settings.back_to_back_gap);
        let ctx = SolverContext::new(&problem, &settings, &conflicts);

        match HardFill::run(&ctx, &HighsBackend::new(), None).unwrap() {
            HardFillOutcome::Solved { level, roster, .. } => {
                assert_eq!(level, RelaxationLevel::RelaxedPoints);
                assert_eq!(roster.len(), 2);
            }
            other => panic!("expected Solved, got {other:?}"),
        }
    }

    #[test]
    fn test_without_relaxation_permission_sweep_exhausts() {
        let shifts =
            ShiftContainer::try_from_iter([shift("a", 0, 20), shift("b", 600, 20)]).unwrap();
        let vols = VolunteerContainer::try_from_iter([
            vol("x", &[("a", 1)]),
            vol("y", &[("b", 1)]),
        ])
        .unwrap();
        let problem = Problem::new(shifts, vols).unwrap();
        let settings = Settings {
            min_points: Points::from_deci(30),
            max_over: Points::from_deci(10),
            max_shifts: 1,
            allow_relaxation: false,
            ..Settings::default()
        };
        let conflicts = problem.conflicts(settings.back_to_back_gap);
        let ctx = SolverContext::new(&problem, &settings, &conflicts);

        assert!(matches!(
            HardFill::run(&ctx, &HighsBackend::new(), None).unwrap(),
            HardFillOutcome::Exhausted
        ));
    }
}
