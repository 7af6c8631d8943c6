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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssignmentOutOfBoundsError {
    volunteer_index: usize,
    shift_index: usize,
    volunteer_count: usize,
    shift_count: usize,
}

impl AssignmentOutOfBoundsError {
    #[inline]
    pub fn new(
        volunteer_index: usize,
        shift_index: usize,
        volunteer_count: usize,
        shift_count: usize,
    ) -> Self {
        Self {
            volunteer_index,
            shift_index,
            volunteer_count,
            shift_count,
        }
    }

    #[inline]
    pub fn volunteer_index(&self) -> usize {
        self.volunteer_index
    }

    #[inline]
    pub fn shift_index(&self) -> usize {
        self.shift_index
    }
}

impl std::fmt::Display for AssignmentOutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Assignment ({}, {}) is outside the problem ({} volunteers, {} shifts)",
            self.volunteer_index, self.shift_index, self.volunteer_count, self.shift_count
        )
    }
}

impl std::error::Error for AssignmentOutOfBoundsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicateAssignmentError {
    volunteer_index: usize,
    shift_index: usize,
}

impl DuplicateAssignmentError {
    #[inline]
    pub fn new(volunteer_index: usize, shift_index: usize) -> Self {
        Self {
            volunteer_index,
            shift_index,
        }
    }

    #[inline]
    pub fn volunteer_index(&self) -> usize {
        self.volunteer_index
    }

    #[inline]
    pub fn shift_index(&self) -> usize {
        self.shift_index
    }
}

impl std::fmt::Display for DuplicateAssignmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Volunteer {} is assigned to shift {} twice",
            self.volunteer_index, self.shift_index
        )
    }
}

impl std::error::Error for DuplicateAssignmentError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RosterError {
    OutOfBounds(AssignmentOutOfBoundsError),
    Duplicate(DuplicateAssignmentError),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::OutOfBounds(e) => write!(f, "{}", e),
            RosterError::Duplicate(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RosterError {}

impl From<AssignmentOutOfBoundsError> for RosterError {
    fn from(err: AssignmentOutOfBoundsError) -> Self {
        RosterError::OutOfBounds(err)
    }
}

impl From<DuplicateAssignmentError> for RosterError {
    fn from(err: DuplicateAssignmentError) -> Self {
        RosterError::Duplicate(err)
    }
}
