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

use crate::solve::err::BackendError;
use shift_alloc_model::solution::err::RosterError;

/// Failures the engine cannot recover from by parameter adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The backend failed with an unrecognized error; deliberately not
    /// swallowed.
    Backend(BackendError),
    /// Solver output could not be projected back onto the problem. This
    /// indicates a variable-mapping bug, not bad input.
    Roster(RosterError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Backend(e) => write!(f, "{}", e),
            EngineError::Roster(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<BackendError> for EngineError {
    fn from(err: BackendError) -> Self {
        EngineError::Backend(err)
    }
}

impl From<RosterError> for EngineError {
    fn from(err: RosterError) -> Self {
        EngineError::Roster(err)
    }
}
