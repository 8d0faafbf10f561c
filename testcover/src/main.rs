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

//! This is the command line front end of the testcover solver. It loads an 
//! instance from file, solves it with the chosen strategy and prints a one
//! line json summary of the outcome.

use std::{path::PathBuf, time::{Duration, Instant}};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use env_logger::Builder;
use log::info;
use serde_json::json;

use testcover::*;

/// The exploration strategies that can be selected from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Explicit stack of open nodes (last-in first-out)
    Stack,
    /// Recursive depth first search
    Dfs,
    /// Priority queue on the relaxation bound with round-up heuristic
    BestFirst,
}
impl From<StrategyArg> for Strategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Stack     => Strategy::Stack,
            StrategyArg::Dfs       => Strategy::DepthFirst,
            StrategyArg::BestFirst => Strategy::BestFirst,
        }
    }
}

/// The branching rules that can be selected from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BranchingArg {
    /// The variable whose value is closest to 0.5
    MostFractional,
    /// The fractional variable having the lowest index
    FirstFractional,
    /// The fractional variable having the largest value
    LargestValue,
}

/// This structure uses `clap-derive` annotations and define the arguments that can
/// be passed on to the executable solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the instance file
    fname: PathBuf,
    /// The strategy used to explore the branch-and-bound tree
    #[arg(short, long, value_enum, default_value_t = StrategyArg::BestFirst)]
    strategy: StrategyArg,
    /// The rule used to pick the variable to branch on
    #[arg(short, long, value_enum, default_value_t = BranchingArg::MostFractional)]
    branching: BranchingArg,
    /// The maximum amount of time (in seconds) you would like this solver to run
    #[arg(short, long)]
    duration: Option<u64>,
    /// Only print the json summary (not the parsed instance)
    #[arg(short, long)]
    json_only: bool,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

/// An utility function to return the branching heuristic matching the 
/// command line argument.
fn branching(b: BranchingArg) -> Box<dyn BranchingHeuristic> {
    match b {
        BranchingArg::MostFractional  => Box::new(MostFractional),
        BranchingArg::FirstFractional => Box::new(FirstFractional),
        BranchingArg::LargestValue    => Box::new(LargestValue),
    }
}

/// An utility function to return a cutoff heuristic that can either be a 
/// time budget (if a duration is given) or no cutoff at all.
fn cutoff(duration: Option<u64>) -> Box<dyn Cutoff> {
    if let Some(seconds) = duration {
        Box::new(TimeBudget::new(Duration::from_secs(seconds)))
    } else {
        Box::new(NoCutoff)
    }
}

/// The status tag of the summary: whether optimality was proved.
fn status(completion: &Completion) -> &'static str {
    match (completion.is_exact, completion.best_value) {
        (true,  Some(_)) => "OPT",
        (false, Some(_)) => "FEAS",
        (_,     None)    => "ERR",
    }
}

/// The one line json summary of a run. `elapsed` covers both the loading of
/// the instance and its resolution.
fn summary(name: &str, elapsed: Duration, completion: &Completion) -> serde_json::Value {
    json!({
        "Instance": name,
        "Time":     format!("{:.2}", elapsed.as_secs_f64()),
        "Result":   completion.best_value.map(|v| v.round() as i64),
        "Solution": status(completion),
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    Builder::new().filter_level(args.verbose.log_level_filter()).init();

    let start    = Instant::now();
    let instance = read_instance(&args.fname)
        .with_context(|| format!("cannot load instance {}", args.fname.display()))?;
    if !args.json_only {
        println!("{}", instance);
    }

    let name = args.fname.file_name().unwrap_or(args.fname.as_os_str()).to_string_lossy();
    let heuristic = branching(args.branching);
    let cutoff = cutoff(args.duration);
    let mut oracle = MicroLpOracle::new(&instance);
    let mut solver = Strategy::from(args.strategy)
        .solver(&instance, &mut oracle, heuristic.as_ref(), cutoff.as_ref());

    let completion = solver.minimize()
        .with_context(|| format!("cannot solve instance {}", name))?;
    let duration   = start.elapsed();

    if let Some(solution) = solver.best_solution() {
        let selected = solution.iter()
            .filter(|d| d.value == 1)
            .map(|d| d.variable.id())
            .collect::<Vec<_>>();
        info!("selected tests: {:?}", selected);
    }
    info!("explored {} nodes, gap {:.3}", solver.explored(), solver.gap());

    println!("{}", summary(&name, duration, &completion));
    Ok(())
}
