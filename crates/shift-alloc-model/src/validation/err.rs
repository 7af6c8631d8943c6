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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityViolationError {
    shift_index: usize,
    assigned: usize,
    capacity: u32,
    exact_fill: bool,
}

impl CapacityViolationError {
    #[inline]
    pub fn new(shift_index: usize, assigned: usize, capacity: u32, exact_fill: bool) -> Self {
        Self {
            shift_index,
            assigned,
            capacity,
            exact_fill,
        }
    }

    #[inline]
    pub fn shift_index(&self) -> usize {
        self.shift_index
    }

    #[inline]
    pub fn assigned(&self) -> usize {
        self.assigned
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

impl std::fmt::Display for CapacityViolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let relation = if self.exact_fill { "exactly" } else { "at most" };
        write!(
            f,
            "Shift {} has {} assignees but needs {} {}",
            self.shift_index, self.assigned, relation, self.capacity
        )
    }
}

impl std::error::Error for CapacityViolationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlapViolationError {
    volunteer_index: usize,
    first_shift: usize,
    second_shift: usize,
}

impl OverlapViolationError {
    #[inline]
    pub fn new(volunteer_index: usize, first_shift: usize, second_shift: usize) -> Self {
        Self {
            volunteer_index,
            first_shift,
            second_shift,
        }
    }

    #[inline]
    pub fn volunteer_index(&self) -> usize {
        self.volunteer_index
    }

    #[inline]
    pub fn shifts(&self) -> (usize, usize) {
        (self.first_shift, self.second_shift)
    }
}

impl std::fmt::Display for OverlapViolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Volunteer {} works overlapping shifts {} and {}",
            self.volunteer_index, self.first_shift, self.second_shift
        )
    }
}

impl std::error::Error for OverlapViolationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkloadViolationError {
    volunteer_index: usize,
    total: Points,
    floor: Points,
    ceiling: Points,
}

impl WorkloadViolationError {
    #[inline]
    pub fn new(volunteer_index: usize, total: Points, floor: Points, ceiling: Points) -> Self {
        Self {
            volunteer_index,
            total,
            floor,
            ceiling,
        }
    }

    #[inline]
    pub fn volunteer_index(&self) -> usize {
        self.volunteer_index
    }

    #[inline]
    pub fn total(&self) -> Points {
        self.total
    }

    #[inline]
    pub fn bounds(&self) -> (Points, Points) {
        (self.floor, self.ceiling)
    }
}

impl std::fmt::Display for WorkloadViolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Volunteer {} works {} points, outside [{}, {}]",
            self.volunteer_index, self.total, self.floor, self.ceiling
        )
    }
}

impl std::error::Error for WorkloadViolationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftCountViolationError {
    volunteer_index: usize,
    assigned: usize,
    limit: u32,
}

impl ShiftCountViolationError {
    #[inline]
    pub fn new(volunteer_index: usize, assigned: usize, limit: u32) -> Self {
        Self {
            volunteer_index,
            assigned,
            limit,
        }
    }

    #[inline]
    pub fn volunteer_index(&self) -> usize {
        self.volunteer_index
    }

    #[inline]
    pub fn assigned(&self) -> usize {
        self.assigned
    }

    #[inline]
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl std::fmt::Display for ShiftCountViolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Volunteer {} works {} shifts, above the limit of {}",
            self.volunteer_index, self.assigned, self.limit
        )
    }
}

impl std::error::Error for ShiftCountViolationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnassignedVolunteerError {
    volunteer_index: usize,
}

impl UnassignedVolunteerError {
    #[inline]
    pub fn new(volunteer_index: usize) -> Self {
        Self { volunteer_index }
    }

    #[inline]
    pub fn volunteer_index(&self) -> usize {
        self.volunteer_index
    }
}

impl std::fmt::Display for UnassignedVolunteerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Volunteer {} received no shift", self.volunteer_index)
    }
}

impl std::error::Error for UnassignedVolunteerError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuaranteeViolationError {
    volunteer_index: usize,
    guarantee_level: u32,
}

impl GuaranteeViolationError {
    #[inline]
    pub fn new(volunteer_index: usize, guarantee_level: u32) -> Self {
        Self {
            volunteer_index,
            guarantee_level,
        }
    }

    #[inline]
    pub fn volunteer_index(&self) -> usize {
        self.volunteer_index
    }

    #[inline]
    pub fn guarantee_level(&self) -> u32 {
        self.guarantee_level
    }
}

impl std::fmt::Display for GuaranteeViolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Volunteer {} received no shift ranked within {}",
            self.volunteer_index, self.guarantee_level
        )
    }
}

impl std::error::Error for GuaranteeViolationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackToBackViolationError {
    volunteer_index: usize,
    first_shift: usize,
    second_shift: usize,
}

impl BackToBackViolationError {
    #[inline]
    pub fn new(volunteer_index: usize, first_shift: usize, second_shift: usize) -> Self {
        Self {
            volunteer_index,
            first_shift,
            second_shift,
        }
    }

    #[inline]
    pub fn volunteer_index(&self) -> usize {
        self.volunteer_index
    }

    #[inline]
    pub fn shifts(&self) -> (usize, usize) {
        (self.first_shift, self.second_shift)
    }
}

impl std::fmt::Display for BackToBackViolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Volunteer {} works back-to-back shifts {} and {}",
            self.volunteer_index, self.first_shift, self.second_shift
        )
    }
}

impl std::error::Error for BackToBackViolationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RosterValidationError {
    Capacity(CapacityViolationError),
    Overlap(OverlapViolationError),
    Workload(WorkloadViolationError),
    ShiftCount(ShiftCountViolationError),
    Unassigned(UnassignedVolunteerError),
    Guarantee(GuaranteeViolationError),
    BackToBack(BackToBackViolationError),
}

impl std::fmt::Display for RosterValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterValidationError::Capacity(e) => write!(f, "{}", e),
            RosterValidationError::Overlap(e) => write!(f, "{}", e),
            RosterValidationError::Workload(e) => write!(f, "{}", e),
            RosterValidationError::ShiftCount(e) => write!(f, "{}", e),
            RosterValidationError::Unassigned(e) => write!(f, "{}", e),
            RosterValidationError::Guarantee(e) => write!(f, "{}", e),
            RosterValidationError::BackToBack(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RosterValidationError {}

impl From<CapacityViolationError> for RosterValidationError {
    fn from(err: CapacityViolationError) -> Self {
        RosterValidationError::Capacity(err)
    }
}

impl From<OverlapViolationError> for RosterValidationError {
    fn from(err: OverlapViolationError) -> Self {
        RosterValidationError::Overlap(err)
    }
}

impl From<WorkloadViolationError> for RosterValidationError {
    fn from(err: WorkloadViolationError) -> Self {
        RosterValidationError::Workload(err)
    }
}

impl From<ShiftCountViolationError> for RosterValidationError {
    fn from(err: ShiftCountViolationError) -> Self {
        RosterValidationError::ShiftCount(err)
    }
}

impl From<UnassignedVolunteerError> for RosterValidationError {
    fn from(err: UnassignedVolunteerError) -> Self {
        RosterValidationError::Unassigned(err)
    }
}

impl From<GuaranteeViolationError> for RosterValidationError {
    fn from(err: GuaranteeViolationError) -> Self {
        RosterValidationError::Guarantee(err)
    }
}

impl From<BackToBackViolationError> for RosterValidationError {
    fn from(err: BackToBackViolationError) -> Self {
        RosterValidationError::BackToBack(err)
    }
}
