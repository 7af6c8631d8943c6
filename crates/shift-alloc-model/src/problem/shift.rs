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
    common::{DayKey, Identifier, IdentifierMarkerName},
    problem::err::{
        DuplicateShiftIdError, EmptyShiftWindowError, ShiftError, ZeroCapacityError,
    },
};
use shift_alloc_core::prelude::{Points, TimeInterval, TimePoint};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShiftIdentifierMarker;

impl IdentifierMarkerName for ShiftIdentifierMarker {
    const NAME: &'static str = "ShiftId";
}

pub type ShiftIdentifier = Identifier<String, ShiftIdentifierMarker>;

/// One event shift. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    id: ShiftIdentifier,
    date: DayKey,
    role: String,
    window: TimeInterval<i64>,
    capacity: u32,
    points: Points,
}

impl Shift {
    pub fn new(
        id: ShiftIdentifier,
        date: DayKey,
        role: impl Into<String>,
        start: TimePoint<i64>,
        end: TimePoint<i64>,
        capacity: u32,
        points: Points,
    ) -> Result<Self, ShiftError> {
        if end <= start {
            return Err(ShiftError::from(EmptyShiftWindowError::new(id, start, end)));
        }
        if capacity == 0 {
            return Err(ShiftError::from(ZeroCapacityError::new(id)));
        }
        Ok(Self {
            id,
            date,
            role: role.into(),
            window: TimeInterval::new(start, end),
            capacity,
            points,
        })
    }

    #[inline]
    pub fn id(&self) -> &ShiftIdentifier {
        &self.id
    }

    #[inline]
    pub fn date(&self) -> &DayKey {
        &self.date
    }

    #[inline]
    pub fn role(&self) -> &str {
        &self.role
    }

    #[inline]
    pub fn window(&self) -> TimeInterval<i64> {
        self.window
    }

    #[inline]
    pub fn start_time(&self) -> TimePoint<i64> {
        self.window.start()
    }

    #[inline]
    pub fn end_time(&self) -> TimePoint<i64> {
        self.window.end()
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn points(&self) -> Points {
        self.points
    }

    /// Points contributed if the shift is filled to capacity.
    #[inline]
    pub fn capacity_points(&self) -> Points {
        self.points.times(self.capacity)
    }
}

/// Shifts in input order. Iteration order is part of the public contract:
/// it drives variable ordering in the solver model and hence tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct ShiftContainer {
    shifts: Vec<Shift>,
    index: HashMap<ShiftIdentifier, usize>,
}

impl ShiftContainer {
    #[inline]
    pub fn new() -> Self {
        Self {
            shifts: Vec::new(),
            index: HashMap::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, shift: Shift) -> Result<(), DuplicateShiftIdError> {
        if self.index.contains_key(shift.id()) {
            return Err(DuplicateShiftIdError::new(shift.id().clone()));
        }
        self.index.insert(shift.id().clone(), self.shifts.len());
        self.shifts.push(shift);
        Ok(())
    }

    #[inline]
    pub fn try_from_iter<I>(iter: I) -> Result<Self, DuplicateShiftIdError>
    where
        I: IntoIterator<Item = Shift>,
    {
        let mut c = Self::new();
        for s in iter {
            c.push(s)?;
        }
        Ok(c)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Shift> {
        self.shifts.iter()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Shift> {
        self.shifts.get(index)
    }

    #[inline]
    pub fn get_by_id(&self, id: &ShiftIdentifier) -> Option<&Shift> {
        self.index.get(id).map(|&i| &self.shifts[i])
    }

    #[inline]
    pub fn index_of(&self, id: &ShiftIdentifier) -> Option<usize> {
        self.index.get(id).copied()
    }

    #[inline]
    pub fn contains_id(&self, id: &ShiftIdentifier) -> bool {
        self.index.contains_key(id)
    }

    /// Total assignment slots across all shifts.
    #[inline]
    pub fn total_capacity(&self) -> u64 {
        self.shifts.iter().map(|s| s.capacity() as u64).sum()
    }

    /// Points available if every shift is filled to capacity.
    #[inline]
    pub fn total_capacity_points(&self) -> Points {
        self.shifts.iter().map(|s| s.capacity_points()).sum()
    }
}
