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

//! This module provides the implementation of various cutoff heuristics that can 
//! be used to tune the behavior of a solver.

use std::time::{Duration, Instant};

use crate::Cutoff;

/// _This is the default cutoff heuristic._ It never interrupts the search,
/// which only stops once optimality has been proved.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCutoff;
impl Cutoff for NoCutoff {
    fn must_stop(&self) -> bool {false}
}
/// This cutoff grants a maximum wall-clock time budget to the search. The
/// budget starts running when the cutoff is created. Once it is elapsed, the
/// solver stops before processing its next node and returns the incumbent it
/// has found so far (if any).
///
/// # Example
/// ```
/// # use testcover::*;
/// use std::time::Duration;
///
/// let instance   = "3\n2\n1 1 1\n1 0\n0 1\n1 1\n".parse::<Instance>().unwrap();
/// let mut oracle = MicroLpOracle::new(&instance);
/// let cutoff     = TimeBudget::new(Duration::from_secs(10));
/// let mut solver = Strategy::BestFirst.solver(&instance, &mut oracle, &MostFractional, &cutoff);
/// let outcome    = solver.minimize().unwrap(); // will run for maximum 10 seconds
/// assert_eq!(Some(1.0), outcome.best_value);
/// ```
#[derive(Debug, Clone)]
pub struct TimeBudget {
    /// The instant past which the search must stop. `None` when the budget
    /// is too large to be represented (in which case it never elapses).
    deadline: Option<Instant>,
}
impl TimeBudget {
    pub fn new(budget: Duration) -> Self {
        TimeBudget { deadline: Instant::now().checked_add(budget) }
    }
}
impl Cutoff for TimeBudget {
    fn must_stop(&self) -> bool {
        self.deadline.map_or(false, |deadline| Instant::now() >= deadline)
    }
}

#[cfg(test)]
mod test_cutoff {
    use std::time::Duration;

    use crate::*;

    #[test]
    fn no_cutoff_never_stops() {
        assert!(!NoCutoff.must_stop());
    }
    #[test]
    fn an_empty_time_budget_stops_immediately() {
        assert!(TimeBudget::new(Duration::ZERO).must_stop());
    }
    #[test]
    fn a_huge_time_budget_never_stops() {
        assert!(!TimeBudget::new(Duration::MAX).must_stop());
    }
    #[test]
    fn time_budget_stops_once_the_budget_is_elapsed() {
        let cutoff = TimeBudget::new(Duration::from_millis(50));
        assert!(!cutoff.must_stop());
        std::thread::sleep(Duration::from_millis(500));
        assert!(cutoff.must_stop());
    }
}
