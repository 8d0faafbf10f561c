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

//! # Testcover
//! Testcover finds the cheapest set of diagnostic tests which is able to tell
//! every pair of diseases apart. Each test has a cost and reacts (or not) on
//! each disease; a set of tests discriminates two diseases as soon as one of
//! its tests reacts on exactly one of them.
//!
//! The problem is solved as a 0/1 covering program: 
//! ```plain
//! minimize    Σ_i cost_i x_i
//! subject to  Σ_i x_i * [test i distinguishes j from k] >= 1   for all j < k
//!             x_i in {0, 1}
//! ```
//! with a branch-and-bound whose nodes are bounded by the continuous relaxation
//! of that program (solved by a `RelaxationOracle`). Three exploration 
//! strategies are provided (see `Strategy`):
//!
//! * `Stack` keeps the open nodes on an explicit last-in first-out stack,
//! * `DepthFirst` explores the tree recursively,
//! * `BestFirst` always expands the node with the smallest bound and rounds
//!   up every relaxed solution to find good incumbents early.
//!
//! ## Quick Example
//! The following solves an instance with three tests (of costs 1, 2 and 2)
//! and three diseases. The first test is the only one telling disease 0 from
//! disease 2, and either of the other two tells disease 1 from disease 2.
//! ```
//! # use testcover::*;
//! // 1. Parse (or build) an instance: nb tests, nb diseases, the costs and
//! //    then one row per test telling on which disease it reacts.
//! let instance = "3\n3\n1 2 2\n1 0 0\n1 0 1\n0 1 0\n".parse::<Instance>().unwrap();
//! // 2. Create the oracle which solves the continuous relaxations
//! let mut oracle = MicroLpOracle::new(&instance);
//! // 3. Pick the strategy and spin the solver
//! let mut solver = Strategy::BestFirst.solver(&instance, &mut oracle, &MostFractional, &NoCutoff);
//! let outcome    = solver.minimize().unwrap();
//!
//! // 4. Do whatever you like with the optimal solution.
//! assert!(outcome.is_exact);
//! assert_eq!(Some(3.0), outcome.best_value);
//! for decision in solver.best_solution().unwrap().iter() {
//!     if decision.value == 1 {
//!         println!("{}", decision.variable.id());
//!     }
//! }
//! ```

mod common;
mod error;
mod instance;
mod io_utils;
mod abstraction;
mod implementation;

pub use common::*;
pub use error::*;
pub use instance::*;
pub use io_utils::*;
pub use abstraction::*;
pub use implementation::*;
