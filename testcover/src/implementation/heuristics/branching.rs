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

//! This module provides the implementation of the branching rules. Each of 
//! them only ever considers the variables which are not fixed yet, and the
//! coordinates of the relaxed solution that are integral up to `EPSILON` are
//! never candidates for branching.

use crate::{BranchingHeuristic, Node, Variable, is_integral};

/// Iterates over the unfixed fractional coordinates of the node's relaxation
fn fractional(node: &Node) -> impl Iterator<Item = (usize, f64)> + '_ {
    let fixed = node.fixed_mask();
    node.relaxed.iter().copied()
        .enumerate()
        .filter(move |(i, x)| !fixed[*i] && !is_integral(*x))
}

/// _This is the default branching rule._ It branches on the most fractional
/// variable: the one maximizing `|x - round(x)|` (equivalently, the one 
/// closest to 0.5). Ties are broken in favor of the lowest index.
///
/// # Example
/// ```
/// # use testcover::*;
/// let node = Node { fixings: vec![], relaxed: vec![0.0, 0.2, 0.9, 0.6, 1.0], bound: 1.7, depth: 0 };
/// assert_eq!(Some(Variable(3)), MostFractional.select(&node));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MostFractional;
impl BranchingHeuristic for MostFractional {
    fn select(&self, node: &Node) -> Option<Variable> {
        let mut best: Option<(usize, f64)> = None;
        for (i, x) in fractional(node) {
            let score = (x - x.round()).abs();
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((i, score));
            }
        }
        best.map(|(i, _)| Variable(i))
    }
}

/// This rule simply branches on the first fractional variable it encounters.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstFractional;
impl BranchingHeuristic for FirstFractional {
    fn select(&self, node: &Node) -> Option<Variable> {
        fractional(node).next().map(|(i, _)| Variable(i))
    }
}

/// This rule branches on the fractional variable having the largest value.
/// That is, the test which the relaxation is the most inclined to select. Ties
/// are broken in favor of the lowest index.
#[derive(Debug, Default, Clone, Copy)]
pub struct LargestValue;
impl BranchingHeuristic for LargestValue {
    fn select(&self, node: &Node) -> Option<Variable> {
        let mut best: Option<(usize, f64)> = None;
        for (i, x) in fractional(node) {
            if best.map_or(true, |(_, v)| x > v) {
                best = Some((i, x));
            }
        }
        best.map(|(i, _)| Variable(i))
    }
}
