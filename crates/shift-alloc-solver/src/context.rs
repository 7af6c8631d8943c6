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

use shift_alloc_core::prelude::Points;
use shift_alloc_model::prelude::{ConflictGraph, Problem, Settings};

/// Immutable bundle threaded through the solver phases. Everything is
/// borrowed; the context itself is cheap to copy around.
#[derive(Debug, Clone, Copy)]
pub struct SolverContext<'a> {
    problem: &'a Problem,
    settings: &'a Settings,
    conflicts: &'a ConflictGraph,
}

impl<'a> SolverContext<'a> {
    #[inline]
    pub fn new(
        problem: &'a Problem,
        settings: &'a Settings,
        conflicts: &'a ConflictGraph,
    ) -> Self {
        Self {
            problem,
            settings,
            conflicts,
        }
    }

    #[inline]
    pub fn problem(&self) -> &'a Problem {
        self.problem
    }

    #[inline]
    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    #[inline]
    pub fn conflicts(&self) -> &'a ConflictGraph {
        self.conflicts
    }

    #[inline]
    pub fn volunteer_count(&self) -> usize {
        self.problem.volunteers().len()
    }

    #[inline]
    pub fn shift_count(&self) -> usize {
        self.problem.shifts().len()
    }

    /// Rank volunteer `v` gives shift `s`, both by input index.
    #[inline]
    pub fn rank_of(&self, v: usize, s: usize) -> Option<u32> {
        let volunteer = self.problem.volunteers().get(v)?;
        let shift = self.problem.shifts().get(s)?;
        volunteer.rank_of(shift.id())
    }

    #[inline]
    pub fn effective_min(&self, v: usize) -> Points {
        self.problem
            .volunteers()
            .get(v)
            .map(|vol| self.settings.effective_min(vol))
            .unwrap_or(Points::ZERO)
    }

    #[inline]
    pub fn effective_max(&self, v: usize) -> Points {
        self.problem
            .volunteers()
            .get(v)
            .map(|vol| self.settings.effective_max(vol))
            .unwrap_or(Points::ZERO)
    }
}
