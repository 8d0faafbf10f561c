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

//! This module provides the solver implementations: one for each of the
//! branch-and-bound strategies.
mod session;
mod utils;
mod sequential;
mod depth_first;

pub use session::*;
pub use sequential::*;
pub use depth_first::*;

use crate::{BranchingHeuristic, Cutoff, Instance, RelaxationOracle, Solver};

/// The strategy used to explore the branch-and-bound tree. All strategies
/// find the same optimal value; they only differ in the order in which the 
/// nodes are explored (hence in the number of nodes and in memory usage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Explicit last-in first-out stack of open nodes
    Stack,
    /// Recursive depth first search
    DepthFirst,
    /// Priority queue on the relaxation bound, with a round-up heuristic
    BestFirst,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::BestFirst
    }
}

impl Strategy {
    /// All the strategies, in the order they are listed by the command line
    pub const ALL: [Strategy; 3] = [Strategy::Stack, Strategy::DepthFirst, Strategy::BestFirst];

    /// Creates a solver which explores the tree of the given instance 
    /// according to this strategy.
    pub fn solver<'a>(
        self,
        instance: &'a Instance,
        oracle: &'a mut dyn RelaxationOracle,
        branching: &'a dyn BranchingHeuristic,
        cutoff: &'a dyn Cutoff,
    ) -> Box<dyn Solver + 'a> {
        match self {
            Strategy::Stack      => Box::new(StackSolver::stack(instance, oracle, branching, cutoff)),
            Strategy::DepthFirst => Box::new(DepthFirstSolver::new(instance, oracle, branching, cutoff)),
            Strategy::BestFirst  => Box::new(BestFirstSolver::best_first(instance, oracle, branching, cutoff)),
        }
    }
}
