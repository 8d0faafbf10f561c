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

//! This module provides a relaxation oracle backed by the `microlp` linear
//! programming engine.

use log::{info, trace};
use microlp::{ComparisonOp, OptimizationDirection, Problem};

use crate::{Decision, Error, Instance, Outcome, Relaxed, RelaxationOracle};

/// The state of the engine once the root relaxation has been solved
#[derive(Debug, Clone)]
struct Root {
    /// The relaxation of the root node
    relaxed: Relaxed,
    /// The engine state right after the root relaxation was solved. It is
    /// never mutated and serves to restore the session when a fixing turns
    /// out to be infeasible (microlp consumes its session in that case).
    pristine: microlp::Solution,
}

/// A relaxation oracle which keeps one single `microlp` session alive for the
/// whole search. The covering constraints are installed once when solving the
/// root; afterwards, the fixings of a node are installed (as variable bounds)
/// right before the node is solved and they are removed right after.
///
/// # Example
/// ```
/// # use testcover::*;
/// let instance = "3\n2\n1 1 1\n1 0\n0 1\n1 1\n".parse::<Instance>().unwrap();
/// let mut oracle = MicroLpOracle::new(&instance);
///
/// let root = oracle.solve_root().unwrap();
/// assert!((root.objective - 1.0).abs() < 1e-6);
///
/// // fixing both distinguishing tests to zero leaves the pair uncovered
/// let fixings = [Decision::discard(Variable(0)), Decision::discard(Variable(1))];
/// assert_eq!(Outcome::Infeasible, oracle.solve_under_fixings(&fixings).unwrap());
/// ```
#[derive(Debug)]
pub struct MicroLpOracle<'a> {
    /// The instance whose relaxation is being solved
    instance: &'a Instance,
    /// The engine variable associated with each test
    vars: Vec<microlp::Variable>,
    /// Set once the root relaxation has been solved
    root: Option<Root>,
    /// The engine session. It is taken out while a node is being solved.
    session: Option<microlp::Solution>,
}

impl <'a> MicroLpOracle<'a> {
    /// Creates a new oracle for the given instance. No model is built until
    /// `solve_root()` gets called.
    pub fn new(instance: &'a Instance) -> Self {
        MicroLpOracle { instance, vars: vec![], root: None, session: None }
    }

    fn extract(&self, solution: &microlp::Solution) -> Relaxed {
        let values = self.vars.iter()
            .map(|v| solution[*v].clamp(0.0, 1.0))
            .collect();
        Relaxed { objective: solution.objective(), values }
    }

    fn restore(&mut self) {
        self.session = self.root.as_ref().map(|r| r.pristine.clone());
    }
}

impl RelaxationOracle for MicroLpOracle<'_> {
    fn solve_root(&mut self) -> Result<Relaxed, Error> {
        if let Some(root) = self.root.as_ref() {
            return Ok(root.relaxed.clone());
        }
        if let Some((j, k)) = self.instance.indistinguishable_pair() {
            return Err(Error::Indistinguishable(j, k));
        }

        let instance    = self.instance;
        let mut problem = Problem::new(OptimizationDirection::Minimize);
        let vars = (0..instance.nb_tests())
            .map(|i| problem.add_var(instance.cost(i), (0.0, 1.0)))
            .collect::<Vec<_>>();

        for c in 0..instance.nb_pairs() {
            let lhs = instance.distinguishing_tests(c)
                .map(|i| (vars[i], 1.0))
                .collect::<Vec<_>>();
            problem.add_constraint(lhs, ComparisonOp::Ge, 1.0);
        }
        // a single disease yields no covering constraint: the engine still 
        // needs one (trivially satisfied) row to work with.
        if instance.nb_pairs() == 0 {
            let lhs = vars.iter().map(|v| (*v, 1.0)).collect::<Vec<_>>();
            problem.add_constraint(lhs, ComparisonOp::Ge, 0.0);
        }

        let solution = problem.solve().map_err(|e| match e {
            microlp::Error::Infeasible => Error::InfeasibleRelaxation,
            other => Error::Oracle(other.to_string()),
        })?;

        self.vars    = vars;
        let relaxed  = self.extract(&solution);
        info!("root relaxation solved: {} variables, {} covering constraints, bound {}",
            instance.nb_tests(), instance.nb_pairs(), relaxed.objective);

        self.session = Some(solution.clone());
        self.root    = Some(Root { relaxed: relaxed.clone(), pristine: solution });
        Ok(relaxed)
    }

    fn solve_under_fixings(&mut self, fixings: &[Decision]) -> Result<Outcome, Error> {
        let mut current = self.session.take()
            .ok_or_else(|| Error::Oracle("the root relaxation has not been solved".to_string()))?;

        for decision in fixings.iter() {
            debug_assert!(decision.value == 0 || decision.value == 1);
            let var = self.vars[decision.variable.id()];
            match current.fix_var(var, decision.value as f64) {
                Ok(next) => current = next,
                Err(microlp::Error::Infeasible) => {
                    trace!("relaxation infeasible under {:?}", fixings);
                    self.restore();
                    return Ok(Outcome::Infeasible);
                },
                Err(other) => {
                    self.restore();
                    return Err(Error::Oracle(other.to_string()));
                }
            }
        }

        let relaxed = self.extract(&current);
        trace!("relaxation solved under {} fixings, bound {}", fixings.len(), relaxed.objective);

        for decision in fixings.iter().rev() {
            let (next, was_fixed) = current.unfix_var(self.vars[decision.variable.id()]);
            debug_assert!(was_fixed);
            current = next;
        }
        self.session = Some(current);

        Ok(Outcome::Solved(relaxed))
    }
}
