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

use crate::problem::{shift::ShiftIdentifier, volunteer::VolunteerIdentifier};
use shift_alloc_core::prelude::TimePoint;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmptyShiftWindowError {
    id: ShiftIdentifier,
    start: TimePoint<i64>,
    end: TimePoint<i64>,
}

impl EmptyShiftWindowError {
    #[inline]
    pub fn new(id: ShiftIdentifier, start: TimePoint<i64>, end: TimePoint<i64>) -> Self {
        Self { id, start, end }
    }

    #[inline]
    pub fn id(&self) -> &ShiftIdentifier {
        &self.id
    }

    #[inline]
    pub fn start(&self) -> TimePoint<i64> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> TimePoint<i64> {
        self.end
    }
}

impl std::fmt::Display for EmptyShiftWindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Shift {} has an empty window ({} .. {})",
            self.id, self.start, self.end
        )
    }
}

impl std::error::Error for EmptyShiftWindowError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZeroCapacityError {
    id: ShiftIdentifier,
}

impl ZeroCapacityError {
    #[inline]
    pub fn new(id: ShiftIdentifier) -> Self {
        Self { id }
    }

    #[inline]
    pub fn id(&self) -> &ShiftIdentifier {
        &self.id
    }
}

impl std::fmt::Display for ZeroCapacityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Shift {} has zero capacity", self.id)
    }
}

impl std::error::Error for ZeroCapacityError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShiftError {
    EmptyWindow(EmptyShiftWindowError),
    ZeroCapacity(ZeroCapacityError),
}

impl std::fmt::Display for ShiftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftError::EmptyWindow(e) => write!(f, "{}", e),
            ShiftError::ZeroCapacity(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ShiftError {}

impl From<EmptyShiftWindowError> for ShiftError {
    fn from(err: EmptyShiftWindowError) -> Self {
        ShiftError::EmptyWindow(err)
    }
}

impl From<ZeroCapacityError> for ShiftError {
    fn from(err: ZeroCapacityError) -> Self {
        ShiftError::ZeroCapacity(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateShiftIdError {
    id: ShiftIdentifier,
}

impl DuplicateShiftIdError {
    #[inline]
    pub fn new(id: ShiftIdentifier) -> Self {
        Self { id }
    }

    #[inline]
    pub fn id(&self) -> &ShiftIdentifier {
        &self.id
    }
}

impl std::fmt::Display for DuplicateShiftIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Duplicate shift id {}", self.id)
    }
}

impl std::error::Error for DuplicateShiftIdError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateVolunteerNameError {
    name: VolunteerIdentifier,
}

impl DuplicateVolunteerNameError {
    #[inline]
    pub fn new(name: VolunteerIdentifier) -> Self {
        Self { name }
    }

    #[inline]
    pub fn name(&self) -> &VolunteerIdentifier {
        &self.name
    }
}

impl std::fmt::Display for DuplicateVolunteerNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Duplicate volunteer name {}", self.name)
    }
}

impl std::error::Error for DuplicateVolunteerNameError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvalidRankError {
    volunteer: VolunteerIdentifier,
    shift: ShiftIdentifier,
    rank: u32,
}

impl InvalidRankError {
    #[inline]
    pub fn new(volunteer: VolunteerIdentifier, shift: ShiftIdentifier, rank: u32) -> Self {
        Self {
            volunteer,
            shift,
            rank,
        }
    }

    #[inline]
    pub fn volunteer(&self) -> &VolunteerIdentifier {
        &self.volunteer
    }

    #[inline]
    pub fn shift(&self) -> &ShiftIdentifier {
        &self.shift
    }

    #[inline]
    pub fn rank(&self) -> u32 {
        self.rank
    }
}

impl std::fmt::Display for InvalidRankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Volunteer {} ranks shift {} with invalid rank {} (ranks start at 1)",
            self.volunteer, self.shift, self.rank
        )
    }
}

impl std::error::Error for InvalidRankError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownPreferenceError {
    volunteer: VolunteerIdentifier,
    shift: ShiftIdentifier,
}

impl UnknownPreferenceError {
    #[inline]
    pub fn new(volunteer: VolunteerIdentifier, shift: ShiftIdentifier) -> Self {
        Self { volunteer, shift }
    }

    #[inline]
    pub fn volunteer(&self) -> &VolunteerIdentifier {
        &self.volunteer
    }

    #[inline]
    pub fn shift(&self) -> &ShiftIdentifier {
        &self.shift
    }
}

impl std::fmt::Display for UnknownPreferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Volunteer {} ranks unknown shift {}",
            self.volunteer, self.shift
        )
    }
}

impl std::error::Error for UnknownPreferenceError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyProblemError;

impl std::fmt::Display for EmptyProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A problem needs at least one shift and one volunteer")
    }
}

impl std::error::Error for EmptyProblemError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProblemError {
    Shift(ShiftError),
    DuplicateShiftId(DuplicateShiftIdError),
    DuplicateVolunteerName(DuplicateVolunteerNameError),
    InvalidRank(InvalidRankError),
    UnknownPreference(UnknownPreferenceError),
    Empty(EmptyProblemError),
}

impl std::fmt::Display for ProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemError::Shift(e) => write!(f, "{}", e),
            ProblemError::DuplicateShiftId(e) => write!(f, "{}", e),
            ProblemError::DuplicateVolunteerName(e) => write!(f, "{}", e),
            ProblemError::InvalidRank(e) => write!(f, "{}", e),
            ProblemError::UnknownPreference(e) => write!(f, "{}", e),
            ProblemError::Empty(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProblemError {}

impl From<ShiftError> for ProblemError {
    fn from(err: ShiftError) -> Self {
        ProblemError::Shift(err)
    }
}

impl From<DuplicateShiftIdError> for ProblemError {
    fn from(err: DuplicateShiftIdError) -> Self {
        ProblemError::DuplicateShiftId(err)
    }
}

impl From<DuplicateVolunteerNameError> for ProblemError {
    fn from(err: DuplicateVolunteerNameError) -> Self {
        ProblemError::DuplicateVolunteerName(err)
    }
}

impl From<InvalidRankError> for ProblemError {
    fn from(err: InvalidRankError) -> Self {
        ProblemError::InvalidRank(err)
    }
}

impl From<UnknownPreferenceError> for ProblemError {
    fn from(err: UnknownPreferenceError) -> Self {
        ProblemError::UnknownPreference(err)
    }
}

impl From<EmptyProblemError> for ProblemError {
    fn from(err: EmptyProblemError) -> Self {
        ProblemError::Empty(err)
    }
}
