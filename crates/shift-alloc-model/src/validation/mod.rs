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
    problem::{conflict::ConflictGraph, prob::Problem, settings::Relaxation, settings::Settings},
    solution::sol::Roster,
    validation::err::{
        BackToBackViolationError, CapacityViolationError, GuaranteeViolationError,
        OverlapViolationError, RosterValidationError, ShiftCountViolationError,
        UnassignedVolunteerError, WorkloadViolationError,
    },
};

/// Checks a roster against the output invariants. Used by the test suite
/// and available to callers that want to re-verify solver output.
#[derive(Debug, Clone)]
pub struct RosterValidator;

impl RosterValidator {
    /// Runs every invariant check. `exact_fill` asserts capacities are met
    /// exactly (hard-fill results) rather than merely respected.
    pub fn validate(
        problem: &Problem,
        settings: &Settings,
        conflicts: &ConflictGraph,
        roster: &Roster,
        relaxation: Option<&Relaxation>,
        exact_fill: bool,
    ) -> Result<(), RosterValidationError> {
        Self::validate_capacity(problem, roster, exact_fill)?;
        Self::validate_no_overlap(conflicts, roster)?;
        Self::validate_workload(problem, settings, roster, relaxation)?;
        Self::validate_shift_count(problem, settings, roster, relaxation)?;
        Self::validate_all_assigned(problem, roster)?;
        Self::validate_guarantee(problem, settings, roster)?;
        Self::validate_back_to_back(settings, conflicts, roster)?;
        Ok(())
    }

    pub fn validate_capacity(
        problem: &Problem,
        roster: &Roster,
        exact_fill: bool,
    ) -> Result<(), CapacityViolationError> {
        for (s, shift) in problem.shifts().iter().enumerate() {
            let assigned = roster.assigned_count(s);
            let capacity = shift.capacity();
            let violated = if exact_fill {
                assigned != capacity as usize
            } else {
                assigned > capacity as usize
            };
            if violated {
                return Err(CapacityViolationError::new(s, assigned, capacity, exact_fill));
            }
        }
        Ok(())
    }

    pub fn validate_no_overlap(
        conflicts: &ConflictGraph,
        roster: &Roster,
    ) -> Result<(), OverlapViolationError> {
        for &(a, b) in conflicts.overlap_pairs() {
            for &v in roster.volunteers_of(a) {
                if roster.contains(v, b) {
                    return Err(OverlapViolationError::new(v, a, b));
                }
            }
        }
        Ok(())
    }

    pub fn validate_workload(
        problem: &Problem,
        settings: &Settings,
        roster: &Roster,
        relaxation: Option<&Relaxation>,
    ) -> Result<(), WorkloadViolationError> {
        for (v, volunteer) in problem.volunteers().iter().enumerate() {
            let mut floor = settings.effective_min(volunteer);
            let mut ceiling = settings.effective_max(volunteer);
            if let Some(r) = relaxation {
                floor = r.level().relaxed_floor(floor);
                ceiling = r.level().relaxed_ceiling(ceiling);
            }
            let total = roster.points_of(problem, v);
            if total < floor || total > ceiling {
                return Err(WorkloadViolationError::new(v, total, floor, ceiling));
            }
        }
        Ok(())
    }

    pub fn validate_shift_count(
        problem: &Problem,
        settings: &Settings,
        roster: &Roster,
        relaxation: Option<&Relaxation>,
    ) -> Result<(), ShiftCountViolationError> {
        let limit = match relaxation {
            Some(r) => r.level().relaxed_shift_count(settings.max_shifts),
            None => settings.max_shifts,
        };
        for v in 0..problem.volunteers().len() {
            let assigned = roster.shifts_of(v).len();
            if assigned > limit as usize {
                return Err(ShiftCountViolationError::new(v, assigned, limit));
            }
        }
        Ok(())
    }

    pub fn validate_all_assigned(
        problem: &Problem,
        roster: &Roster,
    ) -> Result<(), UnassignedVolunteerError> {
        for v in 0..problem.volunteers().len() {
            if roster.shifts_of(v).is_empty() {
                return Err(UnassignedVolunteerError::new(v));
            }
        }
        Ok(())
    }

    /// The guarantee binds only for volunteers that rank at least one shift
    /// within the level.
    pub fn validate_guarantee(
        problem: &Problem,
        settings: &Settings,
        roster: &Roster,
    ) -> Result<(), GuaranteeViolationError> {
        let level = settings.guarantee_level;
        if level == 0 {
            return Ok(());
        }
        for (v, volunteer) in problem.volunteers().iter().enumerate() {
            let mut has_eligible = false;
            let mut satisfied = false;
            for (shift_id, _) in volunteer.iter_ranked_within(level) {
                if let Some(s) = problem.shifts().index_of(shift_id) {
                    has_eligible = true;
                    if roster.contains(v, s) {
                        satisfied = true;
                        break;
                    }
                }
            }
            if has_eligible && !satisfied {
                return Err(GuaranteeViolationError::new(v, level));
            }
        }
        Ok(())
    }

    pub fn validate_back_to_back(
        settings: &Settings,
        conflicts: &ConflictGraph,
        roster: &Roster,
    ) -> Result<(), BackToBackViolationError> {
        if !settings.forbid_back_to_back {
            return Ok(());
        }
        for &(a, b) in conflicts.sequential_pairs() {
            for &v in roster.volunteers_of(a) {
                if roster.contains(v, b) {
                    return Err(BackToBackViolationError::new(v, a, b));
                }
            }
        }
        Ok(())
    }
}
