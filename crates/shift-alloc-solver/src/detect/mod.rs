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

use crate::matching::MatchingOracle;
use shift_alloc_core::prelude::Points;
use shift_alloc_model::prelude::{Problem, Settings};

/// Per-field ranges a settings editor may offer without leaving feasible
/// territory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingBounds {
    pub min_points: (Points, Points),
    pub max_over: (Points, Points),
    pub max_shifts: (u32, u32),
    pub guarantee_level: (u32, u32),
}

/// Recommended settings plus the ranges they were picked from.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    recommended: Settings,
    bounds: SettingBounds,
}

impl Detection {
    #[inline]
    pub fn recommended(&self) -> &Settings {
        &self.recommended
    }

    #[inline]
    pub fn bounds(&self) -> &SettingBounds {
        &self.bounds
    }
}

/// Derives workload, shift-count, and guarantee settings that are feasible
/// and egalitarian for a concrete input.
#[derive(Debug, Clone)]
pub struct SettingDetector;

impl SettingDetector {
    pub fn detect(problem: &Problem) -> Detection {
        let shifts = problem.shifts();
        let volunteers = problem.volunteers();
        let vol_count = volunteers.len() as f64;

        let total_points = shifts.total_capacity_points();
        let fair_share_deci = total_points.deci() as f64 / vol_count;

        // 85% of the fair share leaves headroom under the workload ceiling.
        let min_points =
            Points::from_deci((0.85 * fair_share_deci).floor().max(0.0) as u32).floor_to_half();
        let max_over = Points::from_deci(15);

        let max_shifts = Self::recommend_max_shifts(problem, min_points, max_over);
        let guarantee_level = Self::recommend_guarantee_level(problem);

        let fair_share = Points::from_deci(fair_share_deci.floor().max(0.0) as u32);
        let scan_upper = volunteers.max_rank().unwrap_or(0).max(10);

        let bounds = SettingBounds {
            min_points: (Points::ZERO, fair_share.floor_to_half()),
            max_over: (Points::ZERO, fair_share.floor_to_half()),
            max_shifts: (1, (shifts.len() as u32).max(max_shifts)),
            guarantee_level: (0, scan_upper),
        };

        let recommended = Settings {
            min_points,
            max_over,
            max_shifts,
            guarantee_level,
            ..Settings::default()
        };

        Detection {
            recommended,
            bounds,
        }
    }

    /// A generous buffer over the average shifts per person, bounded below
    /// by what the workload ceiling could require in shift count.
    fn recommend_max_shifts(problem: &Problem, min_points: Points, max_over: Points) -> u32 {
        let shifts = problem.shifts();
        let vol_count = problem.volunteers().len() as f64;

        let avg_shifts = shifts.total_capacity() as f64 / vol_count;
        let mut recommended = (avg_shifts.ceil() as u32) + 3;

        let max_pts_per_person = min_points + max_over;
        let min_shift_points = shifts
            .iter()
            .map(|s| s.points())
            .filter(|p| !p.is_zero())
            .min();
        if let Some(min_pts) = min_shift_points {
            let by_points = (max_pts_per_person.deci() as f64 / min_pts.deci() as f64).ceil()
                as u32
                + 2;
            recommended = recommended.max(by_points);
        }

        let by_count = ((shifts.len() as f64 / vol_count).ceil() as u32) + 3;
        recommended.max(by_count)
    }

    /// The strongest achievable level, widened to 5 so the guarantee never
    /// binds tighter than the preferred-rank window; zero when no level is
    /// achievable at all.
    fn recommend_guarantee_level(problem: &Problem) -> u32 {
        let scan = MatchingOracle::detect_strongest_guarantee(problem);
        match scan.level() {
            0 => 0,
            level => level.max(5),
        }
    }
}
