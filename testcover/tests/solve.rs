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

//! This module is meant to test the correctness of the three search strategies
//! on complete instances: the ones stored under `resources/` and small random
//! ones whose optimum is known by enumeration.

use std::path::PathBuf;

use rand::{rngs::StdRng, Rng, SeedableRng};

use testcover::*;

fn locate(id: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources/")
        .join(id)
}

const RULES: [&dyn BranchingHeuristic; 3] = [&MostFractional, &FirstFractional, &LargestValue];

/// The values (0 or 1) of the given solution, indexed by test
fn values(solution: &Solution) -> Vec<f64> {
    let mut decisions = solution.clone();
    decisions.sort_unstable_by_key(|d| d.variable.id());
    decisions.iter().map(|d| d.value as f64).collect()
}

/// Two objective values are the same when they agree up to a relative error
/// of `EPSILON`.
fn same_value(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON * a.abs().max(b.abs())
}

/// Solves the instance and checks that the solution which is returned is 
/// consistent with the value that is reported.
fn solve(instance: &Instance, strategy: Strategy, branching: &dyn BranchingHeuristic) -> Result<f64, Error> {
    let mut oracle = MicroLpOracle::new(instance);
    let mut solver = strategy.solver(instance, &mut oracle, branching, &NoCutoff);
    let Completion { is_exact, best_value } = solver.minimize()?;
    assert!(is_exact);

    let value    = best_value.expect("a feasible instance has a solution");
    let solution = values(&solver.best_solution().expect("the solution goes along with the value"));
    assert_eq!(instance.nb_tests(), solution.len());
    assert!(instance.is_cover(&solution));
    assert!(same_value(instance.objective_value(&solution), value));
    assert_eq!(solver.best_lower_bound(), solver.best_upper_bound());
    Ok(value)
}

/// Solves the instance with all combinations of strategy and branching rule.
/// All of them must agree on the optimal value.
fn solve_all(instance: &Instance) -> Result<f64, Error> {
    let mut optimum = None;
    for strategy in Strategy::ALL {
        for branching in RULES {
            let value = solve(instance, strategy, branching)?;
            if let Some(expected) = optimum {
                assert!(same_value(value, expected), "{:?} found {} instead of {}", strategy, value, expected);
            } else {
                optimum = Some(value);
            }
        }
    }
    Ok(optimum.expect("there is at least one strategy"))
}

pub fn solve_id(id: &str) -> f64 {
    let instance = read_instance(locate(id)).unwrap();
    solve_all(&instance).unwrap()
}

/// Finds the cheapest cover compatible with the given fixings by enumerating
/// all subsets of tests.
fn brute_force(instance: &Instance, fixings: &[Decision]) -> Option<f64> {
    let n = instance.nb_tests();
    let mut best: Option<f64> = None;
    for mask in 0_u32..(1 << n) {
        let x = (0..n).map(|i| if mask & (1 << i) != 0 { 1.0 } else { 0.0 }).collect::<Vec<_>>();
        if fixings.iter().any(|d| x[d.variable.id()] != d.value as f64) {
            continue;
        }
        if instance.is_cover(&x) {
            let value = instance.objective_value(&x);
            best = Some(best.map_or(value, |b| b.min(value)));
        }
    }
    best
}

fn random_instance(rng: &mut StdRng) -> Instance {
    let n = rng.gen_range(1..=8);
    let m = rng.gen_range(2..=5);
    let cost = (0..n).map(|_| rng.gen_range(0..10) as f64 + if rng.gen_bool(0.3) { 0.5 } else { 0.0 }).collect();
    let reactions = (0..n).map(|_| (0..m).map(|_| rng.gen_bool(0.5)).collect()).collect();
    Instance::new(n, m, cost, reactions).unwrap()
}

/// An oracle which remembers the outcome of every relaxation it has solved.
struct RecordingOracle<'a> {
    inner: MicroLpOracle<'a>,
    calls: Vec<(Vec<Decision>, Outcome)>,
}
impl RelaxationOracle for RecordingOracle<'_> {
    fn solve_root(&mut self) -> Result<Relaxed, Error> {
        self.inner.solve_root()
    }
    fn solve_under_fixings(&mut self, fixings: &[Decision]) -> Result<Outcome, Error> {
        let outcome = self.inner.solve_under_fixings(fixings)?;
        self.calls.push((fixings.to_vec(), outcome.clone()));
        Ok(outcome)
    }
}

#[test]
fn scenario1() {
    assert_eq!(solve_id("scenario1.txt"), 1.0);
}
#[test]
fn chain() {
    assert_eq!(solve_id("chain.txt"), 5.0);
}
#[test]
fn redundant_test() {
    assert_eq!(solve_id("redundant_test.txt"), 5.0);
}
#[test]
fn random_12x7() {
    assert_eq!(solve_id("random_12x7.txt"), 14.0);
}
#[test]
fn random_14x9() {
    assert_eq!(solve_id("random_14x9.txt"), 33.0);
}

#[test]
fn tiny_costs_are_solved_to_optimality() {
    // the root relaxation is fractional (4.5e-7), the optimum selects tests 1 and 2
    let instance = "3\n3\n4e-7 3e-7 2e-7\n1 0 0\n0 1 0\n0 0 1\n".parse::<Instance>().unwrap();
    let optimum  = brute_force(&instance, &[]).unwrap();
    assert!(same_value(5e-7, optimum));
    assert!(same_value(optimum, solve_all(&instance).unwrap()));
}
#[test]
fn huge_costs_are_solved_to_optimality() {
    let instance = "3\n3\n4e7 3e7 2e7\n1 0 0\n0 1 0\n0 0 1\n".parse::<Instance>().unwrap();
    assert!(same_value(5e7, solve_all(&instance).unwrap()));
}
#[test]
fn scaling_the_costs_scales_the_optimum() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut checked = 0;
    while checked < 10 {
        let instance = random_instance(&mut rng);
        let Some(optimum) = brute_force(&instance, &[]) else { continue };
        checked += 1;
        let cost   = instance.costs().iter().map(|c| c * 1e-7).collect();
        let rows   = (0..instance.nb_tests())
            .map(|i| (0..instance.nb_diseases()).map(|j| instance.reacts(i, j)).collect())
            .collect();
        let scaled = Instance::new(instance.nb_tests(), instance.nb_diseases(), cost, rows).unwrap();
        let value  = solve_all(&scaled).unwrap();
        assert!((value - optimum * 1e-7).abs() <= 1e-12, "found {} instead of {} on\n{}", value, optimum * 1e-7, scaled);
    }
}

#[test]
fn identical_diseases_cannot_be_told_apart() {
    let instance = read_instance(locate("identical_diseases.txt")).unwrap();
    for strategy in Strategy::ALL {
        let outcome = solve(&instance, strategy, &MostFractional);
        assert!(matches!(outcome, Err(Error::Indistinguishable(0, 1))));
    }
}
#[test]
fn a_malformed_file_is_rejected() {
    let outcome = read_instance(locate("malformed.txt"));
    assert!(matches!(outcome, Err(Error::MalformedInstance(_))));
}
#[test]
fn a_missing_file_is_an_io_error() {
    let outcome = read_instance(locate("no_such_file.txt"));
    assert!(matches!(outcome, Err(Error::Io(_))));
}

#[test]
fn all_strategies_find_the_optimum_of_random_instances() {
    let mut rng = StdRng::seed_from_u64(20201);
    for _ in 0..60 {
        let instance = random_instance(&mut rng);
        match brute_force(&instance, &[]) {
            None => {
                for strategy in Strategy::ALL {
                    assert!(matches!(solve(&instance, strategy, &MostFractional), Err(Error::Indistinguishable(_, _))));
                }
            }
            Some(optimum) => {
                let value = solve_all(&instance).unwrap();
                assert!(same_value(value, optimum), "found {} instead of {} on\n{}", value, optimum, instance);
            }
        }
    }
}

#[test]
fn every_relaxation_bound_is_valid() {
    let mut rng = StdRng::seed_from_u64(424242);
    let mut checked = 0;
    while checked < 25 {
        let instance = random_instance(&mut rng);
        if instance.indistinguishable_pair().is_some() {
            continue;
        }
        checked += 1;
        for strategy in Strategy::ALL {
            let mut oracle = RecordingOracle { inner: MicroLpOracle::new(&instance), calls: vec![] };
            {
                let mut solver = strategy.solver(&instance, &mut oracle, &MostFractional, &NoCutoff);
                solver.minimize().unwrap();
            }
            for (fixings, outcome) in oracle.calls.iter() {
                match (outcome, brute_force(&instance, fixings)) {
                    (Outcome::Infeasible, None) => {}
                    (Outcome::Solved(relaxed), Some(best)) => assert!(relaxed.objective <= best + EPSILON),
                    (outcome, best) => panic!("relaxation {:?} vs. enumeration {:?} under {:?}", outcome, best, fixings),
                }
            }
        }
    }
}

#[test]
fn a_cutoff_keeps_the_incumbent_found_so_far() {
    struct Immediately;
    impl Cutoff for Immediately {
        fn must_stop(&self) -> bool { true }
    }
    let instance   = read_instance(locate("random_14x9.txt")).unwrap();
    let mut oracle = MicroLpOracle::new(&instance);
    let mut solver = Strategy::BestFirst.solver(&instance, &mut oracle, &MostFractional, &Immediately);
    let Completion { is_exact, best_value } = solver.minimize().unwrap();
    assert!(!is_exact);
    // the round-up of the root relaxation is a valid (if not optimal) cover
    let value = best_value.unwrap();
    assert!(value >= 33.0 - EPSILON);
    assert!(instance.is_cover(&values(&solver.best_solution().unwrap())));
}
