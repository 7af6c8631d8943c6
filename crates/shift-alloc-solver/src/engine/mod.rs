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

use crate::{
    context::SolverContext,
    diagnose::Diagnoser,
    engine::err::EngineError,
    search::{
        egalitarian::EgalitarianSearch,
        hardfill::{HardFill, HardFillOutcome},
    },
    solve::{MilpBackend, highs::HighsBackend},
};
use shift_alloc_model::prelude::{
    Phase, Problem, Relaxation, RelaxationLevel, Roster, Settings, SolveReport, SolveStatus,
};
use std::time::Instant;

/// Top-level orchestrator: egalitarian search first, hard-fill when
/// coverage is short, diagnosis when everything fails.
///
/// Runs sequentially on the calling thread. The optional deadline is
/// honored between solver calls only; a call into the backing solver always
/// runs to completion.
pub struct Engine<'b> {
    backend: &'b dyn MilpBackend,
    deadline: Option<Instant>,
}

impl<'b> Engine<'b> {
    #[inline]
    pub fn new(backend: &'b dyn MilpBackend) -> Self {
        Self {
            backend,
            deadline: None,
        }
    }

    /// Wall-clock cutoff checked at the next suspension point.
    #[inline]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    #[tracing::instrument(level = "info", skip_all)]
    pub fn solve(
        &self,
        problem: &Problem,
        settings: &Settings,
    ) -> Result<SolveReport, EngineError> {
        let conflicts = problem.conflicts(settings.back_to_back_gap);
        let ctx = SolverContext::new(problem, settings, &conflicts);

        let phase1 = EgalitarianSearch::run(&ctx, self.backend, self.deadline)?;

        if let Some(outcome) = &phase1 {
            if Self::fully_filled(problem, outcome.roster()) {
                tracing::info!(
                    target_avg = outcome.target_avg(),
                    "egalitarian phase filled every shift"
                );
                let message = Self::success_message(outcome.roster(), Phase::Egalitarian, None);
                return Ok(SolveReport::new(
                    outcome.status(),
                    outcome.roster().clone(),
                    Phase::Egalitarian,
                    None,
                    Vec::new(),
                    message,
                ));
            }
            tracing::info!("egalitarian result leaves shifts underfilled, hard-filling");
        } else {
            tracing::info!("egalitarian phase found nothing, hard-filling from scratch");
        }

        match HardFill::run(&ctx, self.backend, self.deadline)? {
            HardFillOutcome::Solved {
                roster,
                status,
                level,
            } => {
                let relaxation =
                    (level != RelaxationLevel::Full).then(|| Relaxation::from_level(level));
                let message =
                    Self::success_message(&roster, Phase::HardFill, relaxation.as_ref());
                Ok(SolveReport::new(
                    status,
                    roster,
                    Phase::HardFill,
                    relaxation,
                    Vec::new(),
                    message,
                ))
            }
            HardFillOutcome::DeadlineExpired => match phase1 {
                Some(outcome) => {
                    let message = format!(
                        "Deadline reached; returning the egalitarian assignment with {} \
                         slots filled",
                        outcome.roster().len()
                    );
                    Ok(SolveReport::new(
                        outcome.status(),
                        outcome.into_roster(),
                        Phase::Egalitarian,
                        None,
                        Vec::new(),
                        message,
                    ))
                }
                None => Ok(SolveReport::new(
                    SolveStatus::Transient,
                    Roster::empty(problem),
                    Phase::Egalitarian,
                    None,
                    Vec::new(),
                    "Deadline reached before any feasible assignment was found",
                )),
            },
            HardFillOutcome::Exhausted => {
                let diagnoses = Diagnoser::diagnose(&ctx);
                tracing::info!(causes = diagnoses.len(), "both phases failed");
                let message = format!(
                    "No feasible assignment exists under the current settings ({} \
                     structural causes identified)",
                    diagnoses.len()
                );
                Ok(SolveReport::new(
                    SolveStatus::Infeasible,
                    Roster::empty(problem),
                    Phase::HardFill,
                    None,
                    diagnoses,
                    message,
                ))
            }
        }
    }

    fn fully_filled(problem: &Problem, roster: &Roster) -> bool {
        problem
            .shifts()
            .iter()
            .enumerate()
            .all(|(s, shift)| roster.assigned_count(s) == shift.capacity() as usize)
    }

    fn success_message(roster: &Roster, phase: Phase, relaxation: Option<&Relaxation>) -> String {
        match relaxation {
            Some(r) => format!(
                "Assigned {} shift slots (phase {}, relaxation: {})",
                roster.len(),
                phase,
                r.level()
            ),
            None => format!("Assigned {} shift slots (phase {})", roster.len(), phase),
        }
    }
}

/// Solves with the default HiGHS backend.
pub fn solve(problem: &Problem, settings: &Settings) -> Result<SolveReport, EngineError> {
    let backend = HighsBackend::new();
    Engine::new(&backend).solve(problem, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shift_alloc_core::prelude::{Points, TimePoint};
    use shift_alloc_model::common::DayKey;
    use shift_alloc_model::prelude::{
        Shift, ShiftContainer, ShiftIdentifier, Volunteer, VolunteerContainer,
        VolunteerIdentifier,
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
    fn test_phase_one_suffices_when_everything_is_ranked() {
        let shifts =
            ShiftContainer::try_from_iter([shift("a", 0, 20), shift("b", 600, 20)]).unwrap();
        let vols = VolunteerContainer::try_from_iter([
            vol("x", &[("a", 1), ("b", 2)]),
            vol("y", &[("b", 1), ("a", 2)]),
        ])
        .unwrap();
        let problem = Problem::new(shifts, vols).unwrap();
        let settings = Settings {
            min_points: Points::from_deci(20),
            max_over: Points::ZERO,
            max_shifts: 1,
            guarantee_level: 1,
            ..Settings::default()
        };

        let report = solve(&problem, &settings).unwrap();
        assert_eq!(report.status(), SolveStatus::Optimal);
        assert_eq!(report.phase(), Phase::Egalitarian);
        assert!(report.relaxation().is_none());
        assert!(report.diagnoses().is_empty());
        assert!(report.roster().contains(0, 0));
        assert!(report.roster().contains(1, 1));
    }

    #[test]
    fn test_unranked_shift_pushes_into_hard_fill() {
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

        let report = solve(&problem, &settings).unwrap();
        assert_eq!(report.status(), SolveStatus::Optimal);
        assert_eq!(report.phase(), Phase::HardFill);
        assert!(report.relaxation().is_none());
        // Every shift is now exactly filled.
        for s in 0..3 {
            assert_eq!(report.roster().assigned_count(s), 1);
        }
    }

    #[test]
    fn test_total_failure_carries_diagnosis() {
        let shifts = ShiftContainer::try_from_iter([shift("a", 0, 50)]).unwrap();
        let vols = VolunteerContainer::try_from_iter([
            vol("x", &[("a", 1)]),
            vol("y", &[]),
        ])
        .unwrap();
        let problem = Problem::new(shifts, vols).unwrap();
        // Two volunteers, one slot: the at-least-one constraint can never
        // hold, at any relaxation level.
        let settings = Settings {
            min_points: Points::from_deci(30),
            ..Settings::default()
        };

        let report = solve(&problem, &settings).unwrap();
        assert_eq!(report.status(), SolveStatus::Infeasible);
        assert!(!report.diagnoses().is_empty());
        assert!(report.roster().is_empty());
    }

    #[test]
    fn test_expired_deadline_without_result_is_transient() {
        let shifts = ShiftContainer::try_from_iter([shift("a", 0, 20)]).unwrap();
        let vols = VolunteerContainer::try_from_iter([vol("x", &[("a", 1)])]).unwrap();
        let problem = Problem::new(shifts, vols).unwrap();
        let settings = Settings::default();

        let backend = HighsBackend::new();
        let report = Engine::new(&backend)
            .with_deadline(Instant::now())
            .solve(&problem, &settings)
            .unwrap();
        assert_eq!(report.status(), SolveStatus::Transient);
        assert!(report.roster().is_empty());
    }
}
