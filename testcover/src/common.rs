// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

/// The tolerance used whenever a floating point value coming out of the
/// relaxation must be compared against an integer (integrality checks,
/// positivity of a relaxed coordinate, pruning against the incumbent).
pub const EPSILON: f64 = 1e-6;

// ----------------------------------------------------------------------------
// --- VARIABLE ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes a decision variable `x_i` of the covering program. There
/// is exactly one such variable per diagnostic test; and each variable is
/// identified with an integer ranging from 0 until `instance.nb_tests()`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Variable(pub usize);
impl Variable {
    #[inline]
    /// This function returns the id (numeric value) of the variable.
    ///
    /// # Examples:
    /// ```
    /// # use testcover::Variable;
    /// assert_eq!(0, Variable(0).id());
    /// assert_eq!(1, Variable(1).id());
    /// assert_eq!(2, Variable(2).id());
    /// ```
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- DECISION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This denotes a decision that was made during the search. It fixes the given
/// `variable` to the specified `value` (which is either 0 or 1). Any given
/// `Decision` should be understood as ```[[ variable = value ]]```.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Decision {
    pub variable : Variable,
    pub value    : isize
}
impl Decision {
    /// Fixes the given variable to one (the test is selected)
    pub fn select(variable: Variable) -> Self {
        Decision { variable, value: 1 }
    }
    /// Fixes the given variable to zero (the test is discarded)
    pub fn discard(variable: Variable) -> Self {
        Decision { variable, value: 0 }
    }
}

/// A solution is a sequence of decisions covering all the tests of the 
/// instance, sorted by variable id.
pub type Solution = Vec<Decision>;

/// Turns a (0/1 valued) vector of variable values into a solution.
pub fn to_solution(values: &[f64]) -> Solution {
    values.iter().enumerate()
        .map(|(i, x)| Decision { variable: Variable(i), value: x.round() as isize })
        .collect()
}

/// Returns true iff the given value is integral (up to `EPSILON`).
#[inline]
pub fn is_integral(x: f64) -> bool {
    (x - x.round()).abs() <= EPSILON
}

// ----------------------------------------------------------------------------
// --- NODE -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A node is an element of the branch-and-bound search tree. It stands for the
/// residual problem where all the fixings along the path from the root have
/// been enforced.
///
/// # Note:
/// A node is always created *after* the relaxation has been solved under its
/// fixings. Hence, the relaxed solution and bound are always available.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// The decisions that were taken on the path from the root to this node.
    /// A given variable is fixed at most once.
    pub fixings: Vec<Decision>,
    /// The optimal solution of the relaxation under the node's fixings
    /// (one value in [0, 1] per test).
    pub relaxed: Vec<f64>,
    /// The objective of the relaxation under the node's fixings. This is a
    /// lower bound on the cost of any integer solution beneath this node.
    pub bound: f64,
    /// The depth of the node with respect to the root (number of fixings)
    pub depth: usize,
}
impl Node {
    /// Creates the root node of the search tree out of the root relaxation.
    pub fn root(bound: f64, relaxed: Vec<f64>) -> Self {
        Node { fixings: vec![], relaxed, bound, depth: 0 }
    }
    /// Returns the fixings of the child obtained by appending `decision` to
    /// the fixings of this node.
    pub fn child_fixings(&self, decision: Decision) -> Vec<Decision> {
        let mut fixings = Vec::with_capacity(self.fixings.len() + 1);
        fixings.extend_from_slice(&self.fixings);
        fixings.push(decision);
        fixings
    }
    /// Returns a mask telling which variables are fixed at this node.
    pub fn fixed_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; self.relaxed.len()];
        for d in self.fixings.iter() {
            mask[d.variable.id()] = true;
        }
        mask
    }
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A reason explaining why the search stopped before proving optimality
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Reason {
    /// It stopped because the configured cutoff criterion was met
    CutoffOccurred
}

/// The outcome of a minimization
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// is the given solution exact (proved optimal) ? or is it merely the 
    /// best incumbent known when the search was interrupted ?
    pub is_exact: bool,
    /// if present the value of the best solution that was found
    pub best_value: Option<f64>,
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################
