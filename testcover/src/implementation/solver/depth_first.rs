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

//! This module provides the implementation of a recursive depth first solver.
//! Unlike the fringe based solvers, this one never materializes the set of
//! open nodes: the search tree is explored by the call stack itself. The 
//! relaxation of a child is only solved right before the search descends 
//! into it, which keeps the memory footprint proportional to the depth of 
//! the tree.
use log::{debug, info, trace};

use crate::{BranchingHeuristic, Completion, Cutoff, Decision, Error, Instance, Node, Reason, RelaxationOracle, SearchSession, Solution, Solver};

use super::utils::{evaluate_child, integer_solution};

pub struct DepthFirstSolver<'a> {
    /// A reference to the instance being solved
    instance: &'a Instance,
    /// The engine used to solve the continuous relaxation of each node
    oracle: &'a mut dyn RelaxationOracle,
    /// The heuristic used to pick the variable to branch on
    branching: &'a dyn BranchingHeuristic,
    /// A cutoff heuristic meant to decide when to stop the resolution of 
    /// a given problem.
    cutoff: &'a dyn Cutoff,
    /// The incumbent and bounds of the search
    session: SearchSession,
}

impl<'a> DepthFirstSolver<'a> {
    pub fn new(
        instance: &'a Instance,
        oracle: &'a mut dyn RelaxationOracle,
        branching: &'a dyn BranchingHeuristic,
        cutoff: &'a dyn Cutoff,
    ) -> Self {
        DepthFirstSolver { instance, oracle, branching, cutoff, session: SearchSession::new() }
    }

    /// Explores the subtree rooted in `node`: the x=1 child of each node is
    /// completely explored before the relaxation of its x=0 sibling is even 
    /// solved. Once the cutoff has occurred, this method returns without
    /// doing anything.
    fn explore(&mut self, node: Node) -> Result<(), Error> {
        if self.session.is_aborted() {
            return Ok(());
        }
        if self.cutoff.must_stop() {
            self.session.abort(Reason::CutoffOccurred);
            return Ok(());
        }

        if self.session.must_prune(node.bound) {
            debug!("pruned node at depth {} (bound {})", node.depth, node.bound);
            return Ok(());
        }
        self.session.node_explored();
        trace!("entered node at depth {} (bound {})", node.depth, node.bound);

        match self.branching.select(&node) {
            None => {
                let (value, solution) = integer_solution(self.instance, &node);
                if self.session.improve(value, solution) {
                    debug!("new incumbent {} at depth {}", value, node.depth);
                }
            }
            Some(var) => {
                for decision in [Decision::select(var), Decision::discard(var)] {
                    match evaluate_child(&mut *self.oracle, &node, decision)? {
                        None        => debug!("infeasible child {:?}", decision),
                        Some(child) => self.explore(child)?,
                    }
                }
            }
        }
        Ok(())
    }
}

impl<'a> Solver for DepthFirstSolver<'a> {
    fn minimize(&mut self) -> Result<Completion, Error> {
        self.session.restart();

        let root = self.oracle.solve_root()?;
        debug!("root bound {}", root.objective);
        self.session.set_lower_bound(root.objective);
        self.explore(Node::root(root.objective, root.values))?;

        let completion = self.session.complete();
        info!("search over after {} nodes: {:?}", self.session.explored(), completion);
        Ok(completion)
    }

    fn best_value(&self) -> Option<f64> {
        self.session.best_value()
    }
    fn best_solution(&self) -> Option<Solution> {
        self.session.best_solution()
    }
    fn best_lower_bound(&self) -> f64 {
        self.session.lower_bound()
    }
    fn best_upper_bound(&self) -> f64 {
        self.session.upper_bound()
    }
    fn explored(&self) -> usize {
        self.session.explored()
    }
    fn set_primal(&mut self, value: f64, solution: Solution) {
        self.session.improve(value, solution);
    }
}
