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

//! This module defines the `RelaxationOracle` trait: the (external) linear
//! programming engine which solves the continuous relaxation of the covering
//! program under a given set of fixings.

use crate::{Decision, Error};

/// The optimal solution of the relaxation
#[derive(Debug, Clone, PartialEq)]
pub struct Relaxed {
    /// The optimal value of the relaxation: Σ cost_i x_i
    pub objective: f64,
    /// The optimal value of each x_i (one per test, in [0, 1])
    pub values: Vec<f64>,
}

/// The outcome of solving the relaxation under some fixings
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The relaxation has been solved to optimality
    Solved(Relaxed),
    /// No assignment satisfies the covering constraints and the fixings
    Infeasible,
}

/// This trait abstracts away the linear programming engine used to solve the
/// continuous relaxation of the problem:
///
/// ```plain
/// minimize   Σ_i cost_i x_i
/// subject to Σ_i x_i d[i][c] >= 1    for each pair of diseases c
///            0 <= x_i <= 1
/// ```
///
/// An oracle owns a single engine session that it mutates in place. This is
/// why all its methods take `&mut self`: at most one relaxation can be solved
/// at a time against a given oracle.
pub trait RelaxationOracle {
    /// Builds the base model (variables, objective and covering constraints)
    /// and solves it once. Calling this method a second time simply returns
    /// the relaxation of the root without rebuilding anything.
    ///
    /// # Errors
    /// The infeasibility of the root relaxation is fatal: the instance has no
    /// solution whatsoever. Hence it is reported as an `Err`.
    fn solve_root(&mut self) -> Result<Relaxed, Error>;
    /// Temporarily fixes each variable of `fixings` to the associated value,
    /// solves the relaxation and removes exactly those fixings again before
    /// returning. Upon return, the base model is the same as it was before 
    /// the call.
    ///
    /// # Note:
    /// The root relaxation must have been solved before this method is called.
    /// Each variable should occur at most once in `fixings`.
    fn solve_under_fixings(&mut self, fixings: &[Decision]) -> Result<Outcome, Error>;
}
