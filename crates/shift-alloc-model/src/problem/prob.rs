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

use crate::problem::{
    conflict::ConflictGraph,
    err::{EmptyProblemError, ProblemError, UnknownPreferenceError},
    shift::ShiftContainer,
    volunteer::VolunteerContainer,
};
use shift_alloc_core::prelude::TimeDelta;

/// The validated, immutable input bundle the solver operates on.
#[derive(Debug, Clone)]
pub struct Problem {
    shifts: ShiftContainer,
    volunteers: VolunteerContainer,
}

impl Problem {
    pub fn new(
        shifts: ShiftContainer,
        volunteers: VolunteerContainer,
    ) -> Result<Self, ProblemError> {
        if shifts.is_empty() || volunteers.is_empty() {
            return Err(ProblemError::from(EmptyProblemError));
        }

        // Every ranked shift must exist.
        for v in volunteers.iter() {
            for shift_id in v.preferences().keys() {
                if !shifts.contains_id(shift_id) {
                    return Err(ProblemError::from(UnknownPreferenceError::new(
                        v.name().clone(),
                        shift_id.clone(),
                    )));
                }
            }
        }

        Ok(Self { shifts, volunteers })
    }

    #[inline]
    pub fn shifts(&self) -> &ShiftContainer {
        &self.shifts
    }

    #[inline]
    pub fn volunteers(&self) -> &VolunteerContainer {
        &self.volunteers
    }

    /// Builds the timing-conflict pairs for the given back-to-back gap.
    #[inline]
    pub fn conflicts(&self, gap: TimeDelta<i64>) -> ConflictGraph {
        ConflictGraph::build(&self.shifts, gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::DayKey;
    use crate::problem::shift::{Shift, ShiftIdentifier};
    use crate::problem::volunteer::{Volunteer, VolunteerIdentifier};
    use shift_alloc_core::prelude::{Points, TimePoint};
    use std::collections::BTreeMap;

    fn shift(id: &str) -> Shift {
        Shift::new(
            ShiftIdentifier::new(id),
            DayKey::new("2026-06-06"),
            "gate",
            TimePoint::new(0),
            TimePoint::new(60),
            1,
            Points::from_deci(10),
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
    fn test_valid_problem() {
        let shifts = ShiftContainer::try_from_iter([shift("a")]).unwrap();
        let vols = VolunteerContainer::try_from_iter([vol("alice", &[("a", 1)])]).unwrap();
        let p = Problem::new(shifts, vols).unwrap();
        assert_eq!(p.shifts().len(), 1);
        assert_eq!(p.volunteers().len(), 1);
    }

    #[test]
    fn test_empty_inputs_rejected() {
        let shifts = ShiftContainer::try_from_iter([shift("a")]).unwrap();
        let err = Problem::new(shifts, VolunteerContainer::new()).unwrap_err();
        assert!(matches!(err, ProblemError::Empty(_)));

        let vols = VolunteerContainer::try_from_iter([vol("alice", &[])]).unwrap();
        let err = Problem::new(ShiftContainer::new(), vols).unwrap_err();
        assert!(matches!(err, ProblemError::Empty(_)));
    }

    #[test]
    fn test_unknown_preference_rejected() {
        let shifts = ShiftContainer::try_from_iter([shift("a")]).unwrap();
        let vols =
            VolunteerContainer::try_from_iter([vol("alice", &[("missing", 1)])]).unwrap();
        let err = Problem::new(shifts, vols).unwrap_err();
        match err {
            ProblemError::UnknownPreference(e) => {
                assert_eq!(e.volunteer().as_str(), "alice");
                assert_eq!(e.shift().as_str(), "missing");
            }
            other => panic!("expected UnknownPreference, got {other:?}"),
        }
    }
}
