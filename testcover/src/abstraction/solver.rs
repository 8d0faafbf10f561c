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

//! This module defines the `Solver` trait.

use crate::{Completion, Error, Solution};

/// This is the solver abstraction. It is implemented by the structures that
/// implement one of the branch-and-bound strategies to find the cheapest
/// set of tests discriminating all pairs of diseases.
pub trait Solver {
    /// This method orders the solver to search for the optimal solution among
    /// all possibilities. It returns a structure standing for the outcome of
    /// the attempted minimization. Such a `Completion` may either be marked 
    /// **exact** if the minimization has been carried out until optimality was 
    /// proved. Or it can be inexact, in which case it means that the 
    /// minimization process was stopped because of the satisfaction of some 
    /// cutoff criterion.
    ///
    /// Along with the `is_exact` exact flag, the completion provides an 
    /// optional `best_value` of the minimization problem:
    ///
    /// * When the `is_exact` flag is true, the `best_value` is the minimum
    ///   cost of a discriminating set of tests.
    /// * When the `is_exact` flag is false and a `best_value` is present, it
    ///   is the best value of the objective function that was known at the time
    ///   of cutoff.
    /// * When the `is_exact` flag is false and no `best_value` is present: it
    ///   simply means that no feasible solution has been found before the 
    ///   cutoff occurred.
    ///
    /// # Errors
    /// Fails when the instance admits no solution at all (some pair of 
    /// diseases cannot be distinguished) or when the relaxation oracle fails.
    fn minimize(&mut self) -> Result<Completion, Error>;
    /// This method returns the value of the objective function for the best
    /// solution that has been found. It returns `None` when no solution has
    /// been found (yet).
    fn best_value(&self) -> Option<f64>;
    /// This method returns the best solution to the optimization problem.
    /// That is, it returns the vector of decisions (one per test) which 
    /// minimizes the total cost of the selected tests.
    fn best_solution(&self) -> Option<Solution>;

    /// Returns the best lower bound that has been proved so far.
    fn best_lower_bound(&self) -> f64;
    /// Returns the best upper bound known so far (that is the value of the
    /// incumbent or +inf when there is none).
    fn best_upper_bound(&self) -> f64;
    /// Returns the number of nodes that have been explored by the search
    fn explored(&self) -> usize;

    /// Sets a primal (best known value and solution) of the problem. It is
    /// kept as the incumbent when `minimize` is called afterwards and prunes
    /// every node whose bound cannot improve on it.
    fn set_primal(&mut self, value: f64, solution: Solution);

    /// Computes the optimality gap
    fn gap(&self) -> f64 {
        let ub = self.best_upper_bound();
        let lb = self.best_lower_bound();
        if ub.is_infinite() || lb.is_infinite() {
            1.0
        } else if ub <= lb || ub == 0.0 {
            0.0
        } else {
            (ub - lb) / ub.abs()
        }
    }    
}
