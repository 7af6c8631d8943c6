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
    problem::{prob::Problem, shift::ShiftIdentifier, volunteer::VolunteerIdentifier},
    solution::err::{AssignmentOutOfBoundsError, DuplicateAssignmentError, RosterError},
};
use shift_alloc_core::prelude::Points;

/// A set of (volunteer, shift) assignments over a specific problem, indexed
/// by input position on both axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    by_volunteer: Vec<Vec<usize>>,
    by_shift: Vec<Vec<usize>>,
    len: usize,
}

impl Roster {
    #[inline]
    pub fn empty(problem: &Problem) -> Self {
        Self {
            by_volunteer: vec![Vec::new(); problem.volunteers().len()],
            by_shift: vec![Vec::new(); problem.shifts().len()],
            len: 0,
        }
    }

    /// Builds a roster from assignment pairs, rejecting out-of-range
    /// indices and duplicates. The per-axis lists end up sorted ascending,
    /// so equal assignment sets compare equal regardless of pair order.
    pub fn from_pairs<I>(problem: &Problem, pairs: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut roster = Self::empty(problem);
        let vol_count = problem.volunteers().len();
        let shift_count = problem.shifts().len();

        for (v, s) in pairs {
            if v >= vol_count || s >= shift_count {
                return Err(RosterError::from(AssignmentOutOfBoundsError::new(
                    v,
                    s,
                    vol_count,
                    shift_count,
                )));
            }
            if roster.by_volunteer[v].contains(&s) {
                return Err(RosterError::from(DuplicateAssignmentError::new(v, s)));
            }
            roster.by_volunteer[v].push(s);
            roster.by_shift[s].push(v);
            roster.len += 1;
        }

        for list in &mut roster.by_volunteer {
            list.sort_unstable();
        }
        for list in &mut roster.by_shift {
            list.sort_unstable();
        }

        Ok(roster)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Shift indices assigned to a volunteer, ascending.
    #[inline]
    pub fn shifts_of(&self, volunteer: usize) -> &[usize] {
        &self.by_volunteer[volunteer]
    }

    /// Volunteer indices assigned to a shift, ascending.
    #[inline]
    pub fn volunteers_of(&self, shift: usize) -> &[usize] {
        &self.by_shift[shift]
    }

    #[inline]
    pub fn assigned_count(&self, shift: usize) -> usize {
        self.by_shift[shift].len()
    }

    #[inline]
    pub fn contains(&self, volunteer: usize, shift: usize) -> bool {
        self.by_volunteer[volunteer].binary_search(&shift).is_ok()
    }

    /// All assignment pairs, volunteer-major, ascending on both axes.
    #[inline]
    pub fn iter_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.by_volunteer
            .iter()
            .enumerate()
            .flat_map(|(v, shifts)| shifts.iter().map(move |&s| (v, s)))
    }

    /// Total points a volunteer works under this roster.
    pub fn points_of(&self, problem: &Problem, volunteer: usize) -> Points {
        self.by_volunteer[volunteer]
            .iter()
            .filter_map(|&s| problem.shifts().get(s))
            .map(|s| s.points())
            .sum()
    }

    /// The assignment pairs by id, for callers that outlive the index view.
    pub fn pairs_by_name(
        &self,
        problem: &Problem,
    ) -> Vec<(VolunteerIdentifier, ShiftIdentifier)> {
        self.iter_pairs()
            .filter_map(|(v, s)| {
                let vol = problem.volunteers().get(v)?;
                let shift = problem.shifts().get(s)?;
                Some((vol.name().clone(), shift.id().clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::DayKey;
    use crate::problem::shift::{Shift, ShiftContainer};
    use crate::problem::volunteer::{Volunteer, VolunteerContainer};
    use shift_alloc_core::prelude::TimePoint;
    use std::collections::BTreeMap;

    fn problem(vols: usize, shifts: usize) -> Problem {
        let shifts = ShiftContainer::try_from_iter((0..shifts).map(|i| {
            Shift::new(
                ShiftIdentifier::new(format!("s{i}")),
                DayKey::new("d"),
                "gate",
                TimePoint::new(i as i64 * 100),
                TimePoint::new(i as i64 * 100 + 60),
                1,
                Points::from_deci(10 + i as u32 * 5),
            )
            .unwrap()
        }))
        .unwrap();
        let vols = VolunteerContainer::try_from_iter((0..vols).map(|i| {
            Volunteer::new(
                VolunteerIdentifier::new(format!("v{i}")),
                Points::ZERO,
                BTreeMap::new(),
            )
            .unwrap()
        }))
        .unwrap();
        Problem::new(shifts, vols).unwrap()
    }

    #[test]
    fn test_from_pairs_builds_both_views() {
        let p = problem(2, 3);
        let r = Roster::from_pairs(&p, [(0, 2), (0, 0), (1, 1)]).unwrap();
        assert_eq!(r.len(), 3);
        assert_eq!(r.shifts_of(0), &[0, 2]);
        assert_eq!(r.shifts_of(1), &[1]);
        assert_eq!(r.volunteers_of(1), &[1]);
        assert_eq!(r.assigned_count(2), 1);
        assert!(r.contains(0, 2));
        assert!(!r.contains(1, 2));
    }

    #[test]
    fn test_pair_order_does_not_matter_for_equality() {
        let p = problem(2, 3);
        let a = Roster::from_pairs(&p, [(0, 2), (1, 1), (0, 0)]).unwrap();
        let b = Roster::from_pairs(&p, [(0, 0), (0, 2), (1, 1)]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let p = problem(2, 3);
        let err = Roster::from_pairs(&p, [(2, 0)]).unwrap_err();
        assert!(matches!(err, RosterError::OutOfBounds(_)));
        let err = Roster::from_pairs(&p, [(0, 3)]).unwrap_err();
        assert!(matches!(err, RosterError::OutOfBounds(_)));
    }

    #[test]
    fn test_rejects_duplicate_pair() {
        let p = problem(2, 3);
        let err = Roster::from_pairs(&p, [(0, 1), (0, 1)]).unwrap_err();
        match err {
            RosterError::Duplicate(e) => {
                assert_eq!((e.volunteer_index(), e.shift_index()), (0, 1));
            }
            other => panic!("expected Duplicate, got {other:?}"),
        }
    }

    #[test]
    fn test_points_of_sums_assigned_shifts() {
        let p = problem(1, 3);
        // shift points: 1.0, 1.5, 2.0
        let r = Roster::from_pairs(&p, [(0, 0), (0, 2)]).unwrap();
        assert_eq!(r.points_of(&p, 0), Points::from_deci(30));
    }

    #[test]
    fn test_pairs_by_name() {
        let p = problem(2, 2);
        let r = Roster::from_pairs(&p, [(1, 0)]).unwrap();
        let named = r.pairs_by_name(&p);
        assert_eq!(named.len(), 1);
        assert_eq!(named[0].0.as_str(), "v1");
        assert_eq!(named[0].1.as_str(), "s0");
    }
}
