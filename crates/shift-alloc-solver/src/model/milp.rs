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

//! Backend-agnostic MILP description. The builder emits this; a
//! [`crate::solve::MilpBackend`] translates it into whatever its solver
//! expects. All variables are binary.

/// Index of a variable within one model. Creation order is the variable
/// order handed to the backend, which affects branching and therefore
/// tie-breaking; it must stay deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(usize);

impl VarId {
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        VarId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintOp {
    LessOrEqual,
    GreaterOrEqual,
    Equal,
}

/// `sum(coefficient * variable) op rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    terms: Vec<(VarId, f64)>,
    op: ConstraintOp,
    rhs: f64,
}

impl LinearConstraint {
    #[inline]
    pub fn new(terms: Vec<(VarId, f64)>, op: ConstraintOp, rhs: f64) -> Self {
        Self { terms, op, rhs }
    }

    #[inline]
    pub fn terms(&self) -> &[(VarId, f64)] {
        &self.terms
    }

    #[inline]
    pub fn op(&self) -> ConstraintOp {
        self.op
    }

    #[inline]
    pub fn rhs(&self) -> f64 {
        self.rhs
    }
}

/// A minimization MILP over binary variables.
#[derive(Debug, Clone, Default)]
pub struct MilpModel {
    var_names: Vec<String>,
    objective: Vec<(VarId, f64)>,
    constraints: Vec<LinearConstraint>,
}

impl MilpModel {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add_binary(&mut self, name: impl Into<String>) -> VarId {
        let id = VarId(self.var_names.len());
        self.var_names.push(name.into());
        id
    }

    /// Adds `coefficient * var` to the minimized objective.
    #[inline]
    pub fn add_objective_term(&mut self, var: VarId, coefficient: f64) {
        if coefficient != 0.0 {
            self.objective.push((var, coefficient));
        }
    }

    #[inline]
    pub fn add_constraint(
        &mut self,
        terms: Vec<(VarId, f64)>,
        op: ConstraintOp,
        rhs: f64,
    ) {
        self.constraints.push(LinearConstraint::new(terms, op, rhs));
    }

    #[inline]
    pub fn var_count(&self) -> usize {
        self.var_names.len()
    }

    #[inline]
    pub fn var_name(&self, var: VarId) -> &str {
        &self.var_names[var.index()]
    }

    #[inline]
    pub fn objective(&self) -> &[(VarId, f64)] {
        &self.objective
    }

    #[inline]
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }
}
