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

use crate::problem::volunteer::Volunteer;
use shift_alloc_core::prelude::{Points, Rounding, TimeDelta};

/// Problem-wide solve parameters. Set once per invocation; the solver never
/// mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Workload floor for every volunteer, before subtracting pre-assigned
    /// credit.
    pub min_points: Points,
    /// Additional workload allowed above the floor.
    pub max_over: Points,
    /// Maximum number of shifts any volunteer may work.
    pub max_shifts: u32,
    /// When true, both shifts of a sequential pair may never go to the same
    /// volunteer; when false, doing so costs a large soft penalty instead.
    pub forbid_back_to_back: bool,
    /// Gap threshold (minutes) defining the sequential relation between two
    /// same-day shifts.
    pub back_to_back_gap: TimeDelta<i64>,
    /// Every volunteer must receive at least one shift ranked at or better
    /// than this; 0 disables the guarantee.
    pub guarantee_level: u32,
    /// Whether hard-fill may relax workload bounds to reach full coverage.
    pub allow_relaxation: bool,
    /// Deterministic tie-breaking seed.
    pub seed: u64,
}

impl Settings {
    /// `max(0, min_points - pre_assigned_points)`.
    #[inline]
    pub fn effective_min(&self, volunteer: &Volunteer) -> Points {
        self.min_points
            .saturating_sub(volunteer.pre_assigned_points())
    }

    /// `effective_min + max_over`.
    #[inline]
    pub fn effective_max(&self, volunteer: &Volunteer) -> Points {
        self.effective_min(volunteer) + self.max_over
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_points: Points::ZERO,
            max_over: Points::from_deci(15),
            max_shifts: 5,
            forbid_back_to_back: false,
            back_to_back_gap: TimeDelta::new(120),
            guarantee_level: 0,
            allow_relaxation: true,
            seed: 0,
        }
    }
}

/// Multipliers applied to the per-volunteer bounds at one relaxation level,
/// in the order (workload floor, shift count, workload ceiling).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelaxationFactors {
    pub workload_floor: f64,
    pub shift_count: f64,
    pub workload_ceiling: f64,
}

/// Hard-fill relaxation schedule. The labels and multipliers are disclosed
/// in user-facing reports and are a compatibility contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelaxationLevel {
    Full,
    RelaxedPoints,
    Minimal,
}

impl RelaxationLevel {
    /// Attempt order of the hard-fill sweep.
    pub const ALL: [RelaxationLevel; 3] = [
        RelaxationLevel::Full,
        RelaxationLevel::RelaxedPoints,
        RelaxationLevel::Minimal,
    ];

    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            RelaxationLevel::Full => "full",
            RelaxationLevel::RelaxedPoints => "relaxed-points",
            RelaxationLevel::Minimal => "minimal",
        }
    }

    #[inline]
    pub const fn factors(self) -> RelaxationFactors {
        match self {
            RelaxationLevel::Full => RelaxationFactors {
                workload_floor: 1.0,
                shift_count: 1.0,
                workload_ceiling: 1.0,
            },
            RelaxationLevel::RelaxedPoints => RelaxationFactors {
                workload_floor: 0.5,
                shift_count: 1.5,
                workload_ceiling: 1.5,
            },
            RelaxationLevel::Minimal => RelaxationFactors {
                workload_floor: 0.0,
                shift_count: 2.0,
                workload_ceiling: 2.0,
            },
        }
    }

    /// Relaxed workload floor; lower bounds round down.
    #[inline]
    pub fn relaxed_floor(self, effective_min: Points) -> Points {
        effective_min.scaled(self.factors().workload_floor, Rounding::Floor)
    }

    /// Relaxed workload ceiling; upper bounds round up.
    #[inline]
    pub fn relaxed_ceiling(self, effective_max: Points) -> Points {
        effective_max.scaled(self.factors().workload_ceiling, Rounding::Ceil)
    }

    /// Relaxed shift-count bound; upper bounds round up.
    #[inline]
    pub fn relaxed_shift_count(self, max_shifts: u32) -> u32 {
        (max_shifts as f64 * self.factors().shift_count).ceil() as u32
    }
}

impl std::fmt::Display for RelaxationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The relaxation a result was produced under, reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relaxation {
    level: RelaxationLevel,
    factors: RelaxationFactors,
}

impl Relaxation {
    #[inline]
    pub fn from_level(level: RelaxationLevel) -> Self {
        Self {
            level,
            factors: level.factors(),
        }
    }

    #[inline]
    pub fn level(&self) -> RelaxationLevel {
        self.level
    }

    #[inline]
    pub fn factors(&self) -> RelaxationFactors {
        self.factors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::volunteer::{Volunteer, VolunteerIdentifier};
    use std::collections::BTreeMap;

    fn vol(deci_credit: u32) -> Volunteer {
        Volunteer::new(
            VolunteerIdentifier::new("alice"),
            Points::from_deci(deci_credit),
            BTreeMap::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_effective_bounds_subtract_credit() {
        let settings = Settings {
            min_points: Points::from_deci(60),
            max_over: Points::from_deci(15),
            ..Settings::default()
        };
        let v = vol(25);
        assert_eq!(settings.effective_min(&v), Points::from_deci(35));
        assert_eq!(settings.effective_max(&v), Points::from_deci(50));
    }

    #[test]
    fn test_effective_min_clamps_at_zero() {
        let settings = Settings {
            min_points: Points::from_deci(20),
            max_over: Points::from_deci(10),
            ..Settings::default()
        };
        let v = vol(35);
        assert_eq!(settings.effective_min(&v), Points::ZERO);
        assert_eq!(settings.effective_max(&v), Points::from_deci(10));
    }

    #[test]
    fn test_relaxation_labels_are_contract() {
        assert_eq!(RelaxationLevel::Full.label(), "full");
        assert_eq!(RelaxationLevel::RelaxedPoints.label(), "relaxed-points");
        assert_eq!(RelaxationLevel::Minimal.label(), "minimal");
    }

    #[test]
    fn test_relaxation_factors_are_contract() {
        let f = RelaxationLevel::RelaxedPoints.factors();
        assert_eq!(
            (f.workload_floor, f.shift_count, f.workload_ceiling),
            (0.5, 1.5, 1.5)
        );
        let m = RelaxationLevel::Minimal.factors();
        assert_eq!(
            (m.workload_floor, m.shift_count, m.workload_ceiling),
            (0.0, 2.0, 2.0)
        );
    }

    #[test]
    fn test_relaxed_bounds_round_outward() {
        // floor 2.5 * 0.5 = 1.25 -> 1.2; ceiling 4.5 * 1.5 = 6.75 -> 6.8
        let level = RelaxationLevel::RelaxedPoints;
        assert_eq!(
            level.relaxed_floor(Points::from_deci(25)),
            Points::from_deci(12)
        );
        assert_eq!(
            level.relaxed_ceiling(Points::from_deci(45)),
            Points::from_deci(68)
        );
        assert_eq!(level.relaxed_shift_count(3), 5);
        assert_eq!(RelaxationLevel::Full.relaxed_shift_count(3), 3);
    }

    #[test]
    fn test_sweep_order() {
        assert_eq!(
            RelaxationLevel::ALL,
            [
                RelaxationLevel::Full,
                RelaxationLevel::RelaxedPoints,
                RelaxationLevel::Minimal
            ]
        );
    }
}
