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

//! Preference weight tables. The numbers here are quoted verbatim by
//! downstream reports and exports, so they are a compatibility contract,
//! not tuning knobs.

/// Ranks above this value carry no satisfaction weight; they stay in the
/// data for display but are invisible to the optimizer.
pub const PREFERRED_RANK_MAX: u32 = 5;

/// Objective penalty for a volunteer working both shifts of a sequential
/// pair when back-to-back assignments are discouraged rather than
/// forbidden. Large enough to dominate any achievable preference sum.
pub const SEQUENTIAL_PENALTY: i64 = 100_000;

/// Satisfaction weight of an assigned shift: `{1→5, 2→4, 3→3, 4→2, 5→1}`,
/// zero otherwise.
#[inline]
pub const fn satisfaction_weight(rank: u32) -> i64 {
    match rank {
        1..=5 => 6 - rank as i64,
        _ => 0,
    }
}

/// Stepped preference reward used by the hard-fill objective. Unranked (or
/// rank > 5) assignments still earn 1 so filling a shift always beats
/// leaving it short.
#[inline]
pub const fn stepped_reward(rank: u32) -> i64 {
    match rank {
        1 => 500,
        2 => 300,
        3 => 200,
        4 => 100,
        5 => 50,
        _ => 1,
    }
}
