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

//! This module provides the implementation of the fringe based branch-and-bound
//! solver. That is a solver which stores the open nodes of the search tree 
//! onto an explicit fringe and processes them one at a time until the fringe
//! is exhausted.
//!
//! Depending on the fringe it is given, this very same solver either explores
//! the tree in depth first order (with a `StackFringe`) or in best first order
//! (with a `SimpleFringe<MinBound>`).
use log::{debug, info, trace};

use crate::{BranchingHeuristic, Completion, Cutoff, Decision, Error, Fringe, Instance, MinBound, Node, NoPrimal, PrimalHeuristic, Reason, RelaxationOracle, RoundUp, SearchSession, SimpleFringe, Solution, Solver, StackFringe};

use super::utils::{evaluate_child, integer_solution};

/// The workload the solver can get from its fringe
enum WorkLoad {
    /// There is no work left to be done: you can safely terminate
    Complete,
    /// The work must stop because of an external cutoff
    Aborted,
    /// The item to process
    WorkItem { node: Node },
}

/// Explores the nodes in last-in first-out order. Because the x=1 child of a
/// node is pushed before its x=0 child, the latter is explored first.
pub type StackSolver<'a>     = SequentialSolver<'a, StackFringe>;
/// Always explores the node having the smallest relaxation bound first. This
/// solver also rounds up every relaxed solution it obtains to find good
/// incumbents early on.
pub type BestFirstSolver<'a> = SequentialSolver<'a, SimpleFringe<MinBound>>;

pub struct SequentialSolver<'a, F: Fringe> {
    /// A reference to the instance being solved
    instance: &'a Instance,
    /// The engine used to solve the continuous relaxation of each node
    oracle: &'a mut dyn RelaxationOracle,
    /// The heuristic used to pick the variable to branch on
    branching: &'a dyn BranchingHeuristic,
    /// The heuristic used to derive integer solutions from relaxed ones
    primal: &'a dyn PrimalHeuristic,
    /// A cutoff heuristic meant to decide when to stop the resolution of 
    /// a given problem.
    cutoff: &'a dyn Cutoff,

    /// This is the fringe: the set of nodes that must still be explored before
    /// the problem can be considered 'solved'.
    fringe: F,
    /// The incumbent and bounds of the search
    session: SearchSession,
}

impl<'a> StackSolver<'a> {
    pub fn stack(
        instance: &'a Instance,
        oracle: &'a mut dyn RelaxationOracle,
        branching: &'a dyn BranchingHeuristic,
        cutoff: &'a dyn Cutoff,
    ) -> Self {
        Self::custom(instance, oracle, branching, &NoPrimal, cutoff, StackFringe::new())
    }
}
impl<'a> BestFirstSolver<'a> {
    pub fn best_first(
        instance: &'a Instance,
        oracle: &'a mut dyn RelaxationOracle,
        branching: &'a dyn BranchingHeuristic,
        cutoff: &'a dyn Cutoff,
    ) -> Self {
        Self::custom(instance, oracle, branching, &RoundUp, cutoff, SimpleFringe::new(MinBound))
    }
}

impl<'a, F: Fringe> SequentialSolver<'a, F> {
    pub fn custom(
        instance: &'a Instance,
        oracle: &'a mut dyn RelaxationOracle,
        branching: &'a dyn BranchingHeuristic,
        primal: &'a dyn PrimalHeuristic,
        cutoff: &'a dyn Cutoff,
        fringe: F,
    ) -> Self {
        SequentialSolver {
            instance,
            oracle,
            branching,
            primal,
            cutoff,
            //
            fringe,
            session: SearchSession::new(),
        }
    }

    /// This method initializes the problem resolution. Put more simply, this
    /// method solves the root relaxation and posts the root node onto the 
    /// fringe so that the processing can be bootstrapped.
    fn initialize(&mut self) -> Result<(), Error> {
        self.fringe.clear();
        self.session.restart();

        let root = self.oracle.solve_root()?;
        debug!("root bound {}", root.objective);
        self.session.set_lower_bound(root.objective);
        self.try_primal(&root.values);
        self.fringe.push(Node::root(root.objective, root.values));
        Ok(())
    }

    /// This method processes the given `node`. Nodes which cannot improve on
    /// the incumbent are dropped. When all values of the relaxed solution are
    /// integral, the node yields a candidate incumbent. Otherwise, the node is
    /// split on the variable selected by the branching heuristic and those of
    /// its children which might still improve on the incumbent are pushed
    /// onto the fringe.
    fn process_one_node(&mut self, node: Node) -> Result<(), Error> {
        if self.session.must_prune(node.bound) {
            debug!("pruned node at depth {} (bound {})", node.depth, node.bound);
            return Ok(());
        }
        self.session.node_explored();

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
                        None => debug!("infeasible child {:?}", decision),
                        Some(child) => {
                            self.try_primal(&child.relaxed);
                            if self.session.must_prune(child.bound) {
                                debug!("pruned child {:?} (bound {})", decision, child.bound);
                            } else {
                                self.fringe.push(child);
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Offers the given relaxed solution to the primal heuristic and keeps
    /// the solution it derives if that one improves on the incumbent.
    fn try_primal(&mut self, relaxed: &[f64]) {
        if let Some((value, solution)) = self.primal.improve(self.instance, relaxed) {
            if self.session.improve(value, solution) {
                debug!("new incumbent {} found by the primal heuristic", value);
            }
        }
    }

    fn abort_search(&mut self, reason: Reason) {
        self.session.abort(reason);
        self.fringe.clear();
    }

    /// Consults the fringe to fetch a workload. Depending on the current
    /// state, the workload can either be:
    ///
    ///   + Complete, when the fringe is exhausted
    ///   + Aborted, when the cutoff criterion is met
    ///   + WorkItem, when a node was successfully obtained from the fringe
    fn get_workload(&mut self) -> WorkLoad {
        if self.session.is_aborted() {
            return WorkLoad::Aborted;
        }
        if self.cutoff.must_stop() {
            self.abort_search(Reason::CutoffOccurred);
            return WorkLoad::Aborted;
        }

        match self.fringe.pop() {
            None => WorkLoad::Complete,
            Some(node) => {
                trace!("popped node at depth {} (bound {})", node.depth, node.bound);
                WorkLoad::WorkItem { node }
            }
        }
    }
}

impl<'a, F: Fringe> Solver for SequentialSolver<'a, F> {
    /// Solves the root relaxation, then repeatedly gets a workload and 
    /// processes it until the fringe is exhausted or the cutoff occurs.
    fn minimize(&mut self) -> Result<Completion, Error> {
        self.initialize()?;

        loop {
            match self.get_workload() {
                WorkLoad::Complete => break,
                WorkLoad::Aborted => break,
                WorkLoad::WorkItem { node } => self.process_one_node(node)?,
            }
        }

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

#[cfg(test)]
mod test_solver {
    use crate::*;

    /// Tests {0,1,2}, diseases {0,1}: any test alone discriminates the only pair
    fn trivial() -> Instance {
        "3\n2\n1 1 1\n1 0\n0 1\n1 1\n".parse::<Instance>().unwrap()
    }
    /// The identity matrix: any two tests discriminate all pairs.
    fn identity() -> Instance {
        "3\n3\n1 2 4\n1 0 0\n0 1 0\n0 0 1\n".parse::<Instance>().unwrap()
    }

    fn values(solution: &Solution) -> Vec<f64> {
        solution.iter().map(|d| d.value as f64).collect()
    }

    #[test]
    fn by_default_best_value_is_none() {
        let instance   = trivial();
        let mut oracle = MicroLpOracle::new(&instance);
        let solver     = StackSolver::stack(&instance, &mut oracle, &MostFractional, &NoCutoff);
        assert!(solver.best_value().is_none());
        assert!(solver.best_solution().is_none());
        assert_eq!(f64::INFINITY, solver.best_upper_bound());
    }
    #[test]
    fn stack_solves_the_trivial_instance() {
        let instance   = trivial();
        let mut oracle = MicroLpOracle::new(&instance);
        let mut solver = StackSolver::stack(&instance, &mut oracle, &MostFractional, &NoCutoff);
        let outcome    = solver.minimize().unwrap();
        assert!(outcome.is_exact);
        assert_eq!(Some(1.0), outcome.best_value);
        assert_eq!(1.0, instance.objective_value(&values(&solver.best_solution().unwrap())));
    }
    #[test]
    fn best_first_solves_the_trivial_instance() {
        let instance   = trivial();
        let mut oracle = MicroLpOracle::new(&instance);
        let mut solver = BestFirstSolver::best_first(&instance, &mut oracle, &MostFractional, &NoCutoff);
        let outcome    = solver.minimize().unwrap();
        assert!(outcome.is_exact);
        assert_eq!(Some(1.0), outcome.best_value);
    }
    #[test]
    fn the_most_expensive_test_is_left_out() {
        let instance   = identity();
        let mut oracle = MicroLpOracle::new(&instance);
        let mut solver = BestFirstSolver::best_first(&instance, &mut oracle, &FirstFractional, &NoCutoff);
        let outcome    = solver.minimize().unwrap();
        assert_eq!(Some(3.0), outcome.best_value);
        assert_eq!(vec![1.0, 1.0, 0.0], values(&solver.best_solution().unwrap()));
        assert_eq!(0.0, solver.gap());
    }
    #[test]
    fn exact_completion_closes_the_gap() {
        let instance   = identity();
        let mut oracle = MicroLpOracle::new(&instance);
        let mut solver = StackSolver::stack(&instance, &mut oracle, &LargestValue, &NoCutoff);
        solver.minimize().unwrap();
        assert_eq!(solver.best_lower_bound(), solver.best_upper_bound());
        assert!(solver.explored() >= 1);
    }
    #[test]
    fn a_primal_solution_prunes_the_search() {
        // the optimum selects tests 1 and 2, the root relaxation is 4.5
        let instance = "3\n3\n4 3 2\n1 0 0\n0 1 0\n0 0 1\n".parse::<Instance>().unwrap();

        let mut oracle = MicroLpOracle::new(&instance);
        let mut solver = StackSolver::stack(&instance, &mut oracle, &MostFractional, &NoCutoff);
        solver.minimize().unwrap();
        let without_primal = solver.explored();
        drop(solver);

        let mut oracle = MicroLpOracle::new(&instance);
        let mut solver = StackSolver::stack(&instance, &mut oracle, &MostFractional, &NoCutoff);
        solver.set_primal(5.0, to_solution(&[0.0, 1.0, 1.0]));
        let outcome    = solver.minimize().unwrap();
        assert!(outcome.is_exact);
        assert_eq!(Some(5.0), outcome.best_value);
        assert_eq!(Some(to_solution(&[0.0, 1.0, 1.0])), solver.best_solution());
        // both children of the root are pruned against the primal
        assert_eq!(1, solver.explored());
        assert!(without_primal > 1);
    }
    #[test]
    fn a_primal_solution_survives_the_search_when_it_is_optimal() {
        let instance   = identity();
        let mut oracle = MicroLpOracle::new(&instance);
        let mut solver = BestFirstSolver::best_first(&instance, &mut oracle, &MostFractional, &NoCutoff);
        solver.set_primal(3.0, to_solution(&[1.0, 1.0, 0.0]));
        let outcome    = solver.minimize().unwrap();
        assert_eq!(Some(3.0), outcome.best_value);
        assert_eq!(Some(to_solution(&[1.0, 1.0, 0.0])), solver.best_solution());
        assert_eq!(solver.best_lower_bound(), solver.best_upper_bound());
    }
    #[test]
    fn when_the_cutoff_is_met_the_search_is_inexact() {
        struct Always;
        impl Cutoff for Always {
            fn must_stop(&self) -> bool { true }
        }
        let instance   = identity();
        let mut oracle = MicroLpOracle::new(&instance);
        let mut solver = BestFirstSolver::best_first(&instance, &mut oracle, &MostFractional, &Always);
        let outcome    = solver.minimize().unwrap();
        assert!(!outcome.is_exact);
        assert_eq!(0, solver.explored());
        // the round-up of the root relaxation is already an incumbent
        assert!(outcome.best_value.is_some());
    }
    #[test]
    fn an_indistinguishable_pair_is_an_error() {
        let instance   = "2\n3\n1 1\n1 1 0\n0 0 1\n".parse::<Instance>().unwrap();
        let mut oracle = MicroLpOracle::new(&instance);
        let mut solver = StackSolver::stack(&instance, &mut oracle, &MostFractional, &NoCutoff);
        assert!(matches!(solver.minimize(), Err(Error::Indistinguishable(0, 1))));
    }
}
