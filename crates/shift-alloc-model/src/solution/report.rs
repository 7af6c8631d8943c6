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

use crate::{problem::settings::Relaxation, solution::sol::Roster};

/// Outcome taxonomy shared by individual solver calls and the final report.
///
/// `Feasible` is a valid incumbent from an early-terminated solve;
/// `Transient` is a known-flaky backend failure, handled like `Infeasible`
/// by the search loops but kept distinguishable for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    Optimal,
    Feasible,
    Infeasible,
    Transient,
}

impl SolveStatus {
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SolveStatus::Optimal => "optimal",
            SolveStatus::Feasible => "feasible",
            SolveStatus::Infeasible => "infeasible",
            SolveStatus::Transient => "transient",
        };
        write!(f, "{}", s)
    }
}

/// Which phase produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Egalitarian,
    HardFill,
}

impl Phase {
    /// The numeric phase indicator used by downstream reports.
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Phase::Egalitarian => 1,
            Phase::HardFill => 2,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Structural causes of infeasibility. The snake_case names are quoted by
/// downstream reports and are a compatibility contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosisKind {
    CapacityExcess,
    PointsShortage,
    PointsExcess,
    ConcurrentOverlap,
    BackToBackTight,
    GuaranteeImpossible,
    GuaranteeBottleneck,
}

impl DiagnosisKind {
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            DiagnosisKind::CapacityExcess => "capacity_excess",
            DiagnosisKind::PointsShortage => "points_shortage",
            DiagnosisKind::PointsExcess => "points_excess",
            DiagnosisKind::ConcurrentOverlap => "concurrent_overlap",
            DiagnosisKind::BackToBackTight => "back_to_back_tight",
            DiagnosisKind::GuaranteeImpossible => "guarantee_impossible",
            DiagnosisKind::GuaranteeBottleneck => "guarantee_bottleneck",
        }
    }
}

impl std::fmt::Display for DiagnosisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One structural cause with a mitigation hint. The engine never formats
/// these for display beyond the stored strings; rendering is the UI
/// layer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosis {
    kind: DiagnosisKind,
    description: String,
    suggestion: String,
}

impl Diagnosis {
    #[inline]
    pub fn new(
        kind: DiagnosisKind,
        description: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            suggestion: suggestion.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> DiagnosisKind {
        self.kind
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }
}

/// The core's complete output.
#[derive(Debug, Clone)]
pub struct SolveReport {
    status: SolveStatus,
    roster: Roster,
    phase: Phase,
    relaxation: Option<Relaxation>,
    diagnoses: Vec<Diagnosis>,
    message: String,
}

impl SolveReport {
    #[inline]
    pub fn new(
        status: SolveStatus,
        roster: Roster,
        phase: Phase,
        relaxation: Option<Relaxation>,
        diagnoses: Vec<Diagnosis>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            roster,
            phase,
            relaxation,
            diagnoses,
            message: message.into(),
        }
    }

    #[inline]
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    #[inline]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn relaxation(&self) -> Option<&Relaxation> {
        self.relaxation.as_ref()
    }

    #[inline]
    pub fn diagnoses(&self) -> &[Diagnosis] {
        &self.diagnoses
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}
