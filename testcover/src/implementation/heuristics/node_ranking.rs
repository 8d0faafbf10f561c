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

//! This module provides the implementation of the node rankings that are used 
//! to set the ordering of a best first fringe.

use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{NodeRanking, Node};

/// The MinBound (minimum lower bound) strategy is one that always selects the
/// node having the smallest relaxation bound in the fringe. In case of 
/// equalities, the ties are broken in favor of the deepest node (which has 
/// more fixings and is thus more likely to be close to an integer solution).
///
/// # Example
/// ```
/// # use testcover::*;
/// let a = Node {fixings: vec![], relaxed: vec![], bound: 3.0, depth: 1};
/// let b = Node {fixings: vec![], relaxed: vec![], bound: 1.0, depth: 1};
/// let c = Node {fixings: vec![], relaxed: vec![], bound: 2.0, depth: 1};
/// let d = Node {fixings: vec![], relaxed: vec![], bound: 2.0, depth: 4};
///
/// let mut priority_q = SimpleFringe::new(MinBound);
/// priority_q.push(a);
/// priority_q.push(b);
/// priority_q.push(c);
/// priority_q.push(d);
///
/// assert_eq!(1.0, priority_q.pop().unwrap().bound); // because 1.0 is the lowest bound
/// assert_eq!(4,   priority_q.pop().unwrap().depth); // bound 2.0 but deeper
/// assert_eq!(1,   priority_q.pop().unwrap().depth); // bound 2.0
/// assert_eq!(3.0, priority_q.pop().unwrap().bound); // because 3.0 is the worst
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MinBound;
impl NodeRanking for MinBound {
    fn compare(&self, l: &Node, r: &Node) -> Ordering {
        OrderedFloat(r.bound).cmp(&OrderedFloat(l.bound))
            .then_with(|| l.depth.cmp(&r.depth))
    }
}
