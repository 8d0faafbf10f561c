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

//! This module provides the implementation of a last-in first-out fringe.

use crate::{Fringe, Node};

/// A fringe which pops the most recently pushed node first. Using it, the 
/// solver explores the tree in a depth first fashion, without recursion.
#[derive(Debug, Default, Clone)]
pub struct StackFringe {
    stack: Vec<Node>
}
impl StackFringe {
    pub fn new() -> Self {
        Self::default()
    }
}
impl Fringe for StackFringe {
    fn push(&mut self, node: Node) {
        self.stack.push(node)
    }

    fn pop(&mut self) -> Option<Node> {
        self.stack.pop()
    }

    fn clear(&mut self) {
        self.stack.clear()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod test_stack_fringe {
    use crate::*;

    fn node(bound: f64) -> Node {
        Node { fixings: vec![], relaxed: vec![], bound, depth: 0 }
    }

    #[test]
    fn by_default_it_is_empty() {
        let fringe = StackFringe::new();
        assert!(fringe.is_empty());
        assert_eq!(0, fringe.len());
    }
    #[test]
    fn nodes_are_popped_in_reverse_push_order() {
        let mut fringe = StackFringe::new();
        fringe.push(node(1.0));
        fringe.push(node(3.0));
        fringe.push(node(2.0));
        assert_eq!(3, fringe.len());
        assert_eq!(Some(2.0), fringe.pop().map(|n| n.bound));
        assert_eq!(Some(3.0), fringe.pop().map(|n| n.bound));
        assert_eq!(Some(1.0), fringe.pop().map(|n| n.bound));
        assert!(fringe.pop().is_none());
    }
    #[test]
    fn when_i_clear_a_non_empty_fringe_it_becomes_empty() {
        let mut fringe = StackFringe::new();
        fringe.push(node(1.0));
        fringe.clear();
        assert!(fringe.is_empty());
    }
}
