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

//! This module provides the search session: the state which is shared by all
//! nodes of one branch-and-bound search (the incumbent and the bounds).

use crate::{Completion, Reason, Solution, EPSILON};

/// The state of one search. All strategies keep their incumbent in such a 
/// session. The upper bound it tracks is guaranteed to never increase during
/// the lifetime of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    /// This is the value of the best known upper bound (+inf until the first
    /// integer solution is found).
    best_ub: f64,
    /// This is the value of the best known lower bound.
    best_lb: f64,
    /// If set, this keeps the info about the best solution so far.
    best_sol: Option<Solution>,
    /// This is a counter that tracks the number of nodes that have effectively
    /// been explored.
    explored: usize,
    /// If we decide not to go through a complete proof of optimality, this is
    /// the reason why we took that decision.
    abort_proof: Option<Reason>,
}

impl Default for SearchSession {
    fn default() -> Self {
        SearchSession {
            best_ub: f64::INFINITY,
            best_lb: f64::NEG_INFINITY,
            best_sol: None,
            explored: 0,
            abort_proof: None,
        }
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }
    /// Prepares the session for a new search. The incumbent (typically a 
    /// primal solution provided by the user) is kept so that it can prune the
    /// search right from the start. All the other bookkeeping is reset.
    pub fn restart(&mut self) {
        self.best_lb     = f64::NEG_INFINITY;
        self.explored    = 0;
        self.abort_proof = None;
    }

    /// Replaces the incumbent iff `value` is strictly better than the current
    /// upper bound. Returns true iff the incumbent has been replaced.
    pub fn improve(&mut self, value: f64, solution: Solution) -> bool {
        if value < self.best_ub {
            self.best_ub  = value;
            self.best_sol = Some(solution);
            true
        } else {
            false
        }
    }
    /// Returns true iff a node having the given relaxation bound cannot lead
    /// to a solution strictly better than the incumbent. The comparison 
    /// tolerates a relative error of `EPSILON` on the incumbent value, hence
    /// it does not depend on the scale of the costs.
    pub fn must_prune(&self, bound: f64) -> bool {
        if self.best_ub.is_infinite() {
            return false;
        }
        bound >= self.best_ub - EPSILON * self.best_ub.abs()
    }
    /// Records a lower bound which has been proved on the optimal value
    pub fn set_lower_bound(&mut self, bound: f64) {
        self.best_lb = self.best_lb.max(bound);
    }
    /// Counts one more explored node
    pub fn node_explored(&mut self) {
        self.explored += 1;
    }
    /// Stops the proof of optimality for the given reason
    pub fn abort(&mut self, reason: Reason) {
        self.abort_proof = Some(reason);
    }
    /// Returns true iff the search was aborted
    pub fn is_aborted(&self) -> bool {
        self.abort_proof.is_some()
    }
    /// Marks the end of the search. Unless it was aborted, the search has 
    /// proved the incumbent optimal (when there is one).
    pub fn complete(&mut self) -> Completion {
        if !self.is_aborted() {
            if self.best_sol.is_some() {
                self.best_lb = self.best_ub;
            } else {
                self.best_lb = f64::INFINITY;
            }
        }
        Completion { is_exact: !self.is_aborted(), best_value: self.best_value() }
    }

    pub fn upper_bound(&self) -> f64 {
        self.best_ub
    }
    pub fn lower_bound(&self) -> f64 {
        self.best_lb
    }
    pub fn explored(&self) -> usize {
        self.explored
    }
    pub fn best_value(&self) -> Option<f64> {
        self.best_sol.as_ref().map(|_| self.best_ub)
    }
    pub fn best_solution(&self) -> Option<Solution> {
        self.best_sol.clone()
    }
}
