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

//! This module defines the traits used to encapsulate solver heuristics.
//!
//! Namely, it defines :
//!
//!  - the `BranchingHeuristic` which chooses the variable to branch on,
//!  - the `PrimalHeuristic` which derives cheap incumbents from relaxations,
//!  - the `NodeRanking` which orders the nodes of a best first fringe,
//!  - the `Cutoff` which may interrupt the search.

use std::cmp::Ordering;

use crate::{Instance, Node, Solution, Variable};

/// This trait encapsulates the rule used to decide which variable is going to
/// be branched on when a node is expanded. 
pub trait BranchingHeuristic {
    /// Returns the variable (not yet fixed at `node`) that must be branched
    /// on. When every unfixed coordinate of the relaxed solution is integral,
    /// the node is terminal and this method returns `None`.
    fn select(&self, node: &Node) -> Option<Variable>;
}

/// A primal heuristic derives a feasible integer solution out of the solution
/// of a relaxation. It is used to tighten the upper bound early on, without
/// having to wait for the search to reach an integral node.
pub trait PrimalHeuristic {
    /// Returns the cost and the solution of an integer solution derived from
    /// the `relaxed` values (if any can be found).
    fn improve(&self, instance: &Instance, relaxed: &[f64]) -> Option<(f64, Solution)>;
}

/// A node ranking is an heuristic that imposes a partial order on the nodes
/// of the solver fringe. This order is used by best first fringes to decide
/// which node must be popped first.
pub trait NodeRanking {
    /// This method compares two nodes and determines which is the one that
    /// needs to be popped off the fringe first. In this ordering, greater
    /// means more likely to be popped first.
    fn compare(&self, a: &Node, b: &Node) -> Ordering;
}

/// This trait encapsulates a criterion (external to the solver) which imposes
/// to stop searching for a better solution. Typically, this is done to grant
/// a given time budget to the search.
pub trait Cutoff {
    /// Returns true iff the criterion is met and the search must stop.
    fn must_stop(&self) -> bool;
}
