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

use crate::problem::shift::ShiftContainer;
use shift_alloc_core::prelude::TimeDelta;

/// Timing conflicts between shifts, by input index.
///
/// Overlap pairs are unordered and stored once with the smaller index
/// first. Sequential pairs are directed: `(a, b)` means shift `b` starts
/// within the gap threshold after shift `a` ends, on the same day. The
/// back-to-back constraint built from a sequential pair is symmetric; the
/// direction only matters for counting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictGraph {
    overlap_pairs: Vec<(usize, usize)>,
    sequential_pairs: Vec<(usize, usize)>,
}

impl ConflictGraph {
    /// Quadratic pair enumeration; fine at the targeted problem sizes.
    pub fn build(shifts: &ShiftContainer, gap: TimeDelta<i64>) -> Self {
        let n = shifts.len();
        let mut overlap_pairs = Vec::new();
        let mut sequential_pairs = Vec::new();

        for i in 0..n {
            let a = match shifts.get(i) {
                Some(s) => s,
                None => continue,
            };
            for j in 0..n {
                if i == j {
                    continue;
                }
                let b = match shifts.get(j) {
                    Some(s) => s,
                    None => continue,
                };
                if a.date() != b.date() {
                    continue;
                }
                if i < j && a.window().intersects(&b.window()) {
                    overlap_pairs.push((i, j));
                }
                let lead = b.start_time() - a.end_time();
                if !lead.is_negative() && lead <= gap {
                    sequential_pairs.push((i, j));
                }
            }
        }

        Self {
            overlap_pairs,
            sequential_pairs,
        }
    }

    #[inline]
    pub fn overlap_pairs(&self) -> &[(usize, usize)] {
        &self.overlap_pairs
    }

    #[inline]
    pub fn sequential_pairs(&self) -> &[(usize, usize)] {
        &self.sequential_pairs
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.overlap_pairs.is_empty() && self.sequential_pairs.is_empty()
    }
}
