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

//! This module provides the bits of node processing which are common to all
//! the branch-and-bound strategies.

use crate::{Decision, Error, Instance, Node, Outcome, Relaxed, RelaxationOracle, Solution, to_solution};

/// Solves the relaxation of the child of `parent` which is obtained by taking
/// the given `decision`. It returns `None` when that child is infeasible.
pub(crate) fn evaluate_child<O>(oracle: &mut O, parent: &Node, decision: Decision) -> Result<Option<Node>, Error>
where O: RelaxationOracle + ?Sized
{
    let fixings = parent.child_fixings(decision);
    match oracle.solve_under_fixings(&fixings)? {
        Outcome::Infeasible => Ok(None),
        Outcome::Solved(Relaxed { objective, values }) => Ok(Some(Node {
            fixings,
            relaxed: values,
            bound: objective,
            depth: parent.depth + 1,
        })),
    }
}

/// Turns the relaxed solution of a node whose values are all integral into an
/// actual solution. The value which is returned is the cost of that solution.
pub(crate) fn integer_solution(instance: &Instance, node: &Node) -> (f64, Solution) {
    let rounded = node.relaxed.iter().map(|x| x.round()).collect::<Vec<_>>();
    (instance.objective_value(&rounded), to_solution(&rounded))
}
