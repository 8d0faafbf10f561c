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

//! This module defines the test cover instance: the costs of the diagnostic
//! tests, the reaction matrix telling which test reacts to which disease and
//! the derived difference matrix telling which test distinguishes which pair
//! of diseases.

use std::fmt::{self, Display};

use bit_vec::BitVec;

use crate::{Error, EPSILON};

/// A test cover instance. It is built once (typically when the instance file
/// is parsed) and remains immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// The number of tests (n)
    nb_tests: usize,
    /// The number of diseases (m)
    nb_diseases: usize,
    /// The cost of each test
    cost: Vec<f64>,
    /// One row per test, one bit per disease: `reactions[i][j]` is set iff
    /// test i reacts to disease j.
    reactions: Vec<BitVec>,
    /// One column per pair of diseases, one bit per test: `difference[c][i]`
    /// is set iff test i distinguishes the two diseases of pair `c`.
    difference: Vec<BitVec>,
    /// The disease pair associated with each column of the difference matrix
    pairs: Vec<(usize, usize)>,
}

impl Instance {
    /// Creates a new instance and derives its difference matrix.
    ///
    /// # Errors
    /// This fails with a `MalformedInstance` error when either dimension is 
    /// zero, when the data does not match the announced dimensions, or when
    /// some cost is negative (or not a number).
    pub fn new(nb_tests: usize, nb_diseases: usize, cost: Vec<f64>, reactions: Vec<Vec<bool>>) -> Result<Self, Error> {
        if nb_tests == 0 {
            return Err(Error::MalformedInstance("the number of tests must be positive".to_string()));
        }
        if nb_diseases == 0 {
            return Err(Error::MalformedInstance("the number of diseases must be positive".to_string()));
        }
        if cost.len() != nb_tests {
            return Err(Error::MalformedInstance(
                format!("expected {} costs but got {}", nb_tests, cost.len())));
        }
        if let Some(i) = cost.iter().position(|c| !c.is_finite() || *c < 0.0) {
            return Err(Error::MalformedInstance(
                format!("the cost of test {} must be a non negative number", i)));
        }
        if reactions.len() != nb_tests {
            return Err(Error::MalformedInstance(
                format!("expected {} rows but got {}", nb_tests, reactions.len())));
        }
        if let Some(i) = reactions.iter().position(|row| row.len() != nb_diseases) {
            return Err(Error::MalformedInstance(
                format!("row {} does not have {} entries", i, nb_diseases)));
        }

        let reactions = reactions.iter()
            .map(|row| BitVec::from_fn(nb_diseases, |j| row[j]))
            .collect::<Vec<_>>();

        let mut difference = Vec::with_capacity(nb_diseases * (nb_diseases - 1) / 2);
        let mut pairs      = Vec::with_capacity(nb_diseases * (nb_diseases - 1) / 2);
        for j in 0..nb_diseases {
            for k in j + 1..nb_diseases {
                difference.push(BitVec::from_fn(nb_tests, |i| reactions[i][j] ^ reactions[i][k]));
                pairs.push((j, k));
            }
        }

        Ok(Instance { nb_tests, nb_diseases, cost, reactions, difference, pairs })
    }

    /// The number of tests (and hence of decision variables)
    pub fn nb_tests(&self) -> usize {
        self.nb_tests
    }
    /// The number of diseases
    pub fn nb_diseases(&self) -> usize {
        self.nb_diseases
    }
    /// The number of disease pairs, that is the number of columns of the
    /// difference matrix (and of covering constraints).
    pub fn nb_pairs(&self) -> usize {
        self.pairs.len()
    }
    /// The cost of the given test
    pub fn cost(&self, test: usize) -> f64 {
        self.cost[test]
    }
    /// The costs of all tests
    pub fn costs(&self) -> &[f64] {
        &self.cost
    }
    /// Returns true iff `test` reacts to `disease`
    pub fn reacts(&self, test: usize, disease: usize) -> bool {
        self.reactions[test][disease]
    }
    /// Returns the pair of diseases (j, k) with j < k associated with the
    /// given column of the difference matrix.
    pub fn pair(&self, column: usize) -> (usize, usize) {
        self.pairs[column]
    }
    /// Returns true iff `test` distinguishes the two diseases of `column`
    pub fn distinguishes(&self, test: usize, column: usize) -> bool {
        self.difference[column][test]
    }
    /// Iterates over the tests distinguishing the diseases of `column`
    pub fn distinguishing_tests(&self, column: usize) -> impl Iterator<Item = usize> + '_ {
        self.difference[column].iter()
            .enumerate()
            .filter_map(|(i, set)| if set { Some(i) } else { None })
    }
    /// Returns the first pair of diseases which no test can distinguish (an
    /// all zero column in the difference matrix). When such a pair exists, the
    /// instance admits no solution at all.
    pub fn indistinguishable_pair(&self) -> Option<(usize, usize)> {
        self.difference.iter()
            .position(|column| column.none())
            .map(|c| self.pairs[c])
    }

    /// Computes the cost of a (possibly fractional) assignment: Σ cost_i x_i
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.cost.iter().zip(values.iter())
            .map(|(c, x)| c * x)
            .sum()
    }
    /// Rounds a (possibly fractional) assignment up: any test having a 
    /// positive value gets selected. Because all coefficients of the covering
    /// constraints are non negative, this never breaks a covering constraint.
    pub fn round_up(&self, values: &[f64]) -> Vec<f64> {
        values.iter()
            .map(|x| if *x > EPSILON { 1.0 } else { 0.0 })
            .collect()
    }
    /// Computes the cost of the assignment obtained by rounding `values` up.
    /// When `values` is feasible for the relaxation, this is an upper bound on
    /// the optimal cost.
    pub fn round_up_objective(&self, values: &[f64]) -> f64 {
        self.cost.iter().zip(values.iter())
            .filter(|(_, x)| **x > EPSILON)
            .map(|(c, _)| c)
            .sum()
    }
    /// Returns true iff the tests selected in `values` (value 1) distinguish
    /// every pair of diseases.
    pub fn is_cover(&self, values: &[f64]) -> bool {
        (0..self.nb_pairs()).all(|c| 
            self.distinguishing_tests(c).any(|i| values[i] >= 1.0 - EPSILON))
    }
}

impl Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of tests: {}", self.nb_tests)?;
        writeln!(f, "Number of diseases: {}", self.nb_diseases)?;
        let cost = self.cost.iter().map(|c| format!("{:?}", c)).collect::<Vec<_>>();
        writeln!(f, "Cost of tests: {}", cost.join(" "))?;
        writeln!(f, "A:")?;
        for row in self.reactions.iter() {
            let row = row.iter().map(|b| if b { "1" } else { "0" }).collect::<Vec<_>>();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}
