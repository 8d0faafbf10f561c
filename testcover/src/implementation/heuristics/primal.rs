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

//! This module provides the implementation of the primal heuristics.

use crate::{Instance, PrimalHeuristic, Solution, to_solution};

/// _This is the default primal heuristic of depth first strategies._ It 
/// never proposes any solution.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoPrimal;
impl PrimalHeuristic for NoPrimal {
    fn improve(&self, _: &Instance, _: &[f64]) -> Option<(f64, Solution)> {
        None
    }
}

/// This heuristic selects every test having a positive value in the relaxed
/// solution. Because the left hand side of each covering constraint only has
/// non negative coefficients, rounding a feasible relaxed solution up can only
/// add coverage: the result is always a valid set of tests.
///
/// # Example
/// ```
/// # use testcover::*;
/// let instance = "3\n3\n1 2 4\n1 0 0\n0 1 0\n0 0 1\n".parse::<Instance>().unwrap();
/// let (value, solution) = RoundUp.improve(&instance, &[0.5, 0.5, 0.0]).unwrap();
/// assert_eq!(3.0, value);
/// assert_eq!(vec![1, 1, 0], solution.iter().map(|d| d.value).collect::<Vec<_>>());
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct RoundUp;
impl PrimalHeuristic for RoundUp {
    fn improve(&self, instance: &Instance, relaxed: &[f64]) -> Option<(f64, Solution)> {
        let rounded = instance.round_up(relaxed);
        let value   = instance.objective_value(&rounded);
        Some((value, to_solution(&rounded)))
    }
}

#[cfg(test)]
mod test_primal {
    use crate::*;

    #[test]
    fn no_primal_never_proposes_anything() {
        let instance = "2\n2\n1 1\n1 0\n0 1\n".parse::<Instance>().unwrap();
        assert!(NoPrimal.improve(&instance, &[0.5, 0.5]).is_none());
    }
    #[test]
    fn round_up_costs_the_same_as_round_up_objective() {
        let instance = "3\n3\n1 2 4\n1 0 0\n0 1 0\n0 0 1\n".parse::<Instance>().unwrap();
        let relaxed  = [0.5, 0.5, 0.5];
        let (value, _) = RoundUp.improve(&instance, &relaxed).unwrap();
        assert_eq!(instance.round_up_objective(&relaxed), value);
        assert_eq!(7.0, value);
    }
    #[test]
    fn round_up_of_a_feasible_relaxation_is_a_cover() {
        let instance = "3\n3\n1 2 4\n1 0 0\n0 1 0\n0 0 1\n".parse::<Instance>().unwrap();
        let (_, solution) = RoundUp.improve(&instance, &[0.5, 0.5, 0.5]).unwrap();
        let values = solution.iter().map(|d| d.value as f64).collect::<Vec<_>>();
        assert!(instance.is_cover(&values));
    }
}
