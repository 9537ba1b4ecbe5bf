mod bench;
mod dpll;
mod dpll_tests;
mod preprocess;
mod unit_propagate;

use std::time::Instant;

use log::info;

use crate::data_structures::{Config, DPLLFormula, Formula, Statistics};
use crate::dimacs::{pretty_print_solution, read_dimacs, write_solution};
use crate::dpll::bench::run_bench_group;
use crate::dpll::dpll::{dpll, extract_solution};
use crate::dpll::preprocess::preprocess;

pub use self::dpll::Result;

/*
A function to decide a parsed formula with DPLL under the given
configuration, running the simplification pass first when enabled.

Returns (the result, the model when satisfiable, the search statistics).
*/
pub fn solve_formula(formula: Formula, config: &Config) -> (Result, Option<Vec<(i32, bool)>>, Statistics) {
    let timer = Instant::now();
    let state = &mut DPLLFormula::new(formula);
    let mut statistics = Statistics::new();
    let preprocessed = if config.pre_process_enabled() {
        preprocess(state, config, &mut statistics)
    } else {
        None
    };
    let result = match preprocessed {
        Some(result) => result,
        None => dpll(state, config, &mut statistics, timer),
    };
    let solution = if result == Result::SAT { Some(extract_solution(state)) } else { None };
    return (result, solution, statistics);
}

/*
A function to run a single instance end to end: read the DIMACS input, solve
it, report the verdict on stdout and write the assignment file.

Returns the process exit code: 0 for a decided instance, 1 for a parse or
write failure, 2 when the budget ran out.
*/
pub fn run_instance(input: &str, output: &str, config: &Config) -> i32 {
    info!("Reading {}", input);
    let formula = match read_dimacs(input) {
        Ok(formula) => formula,
        Err(error) => {
            eprintln!("{}", error);
            return 1;
        }
    };
    info!("Solving...");
    let (result, solution, statistics) = solve_formula(formula, config);
    info!(
        "{} propagations, {} decisions, {} backtracks",
        statistics.propagation_count, statistics.decision_count, statistics.backtrack_count
    );
    match &result {
        Result::SAT => {
            let solution = solution.expect("a satisfiable result carries an assignment");
            info!("Assignment:\n{}", pretty_print_solution(&solution));
            println!("Satisfiable");
            match write_solution(output, &Some(solution)) {
                Ok(()) => 0,
                Err(error) => {
                    eprintln!("{}", error);
                    1
                }
            }
        }
        Result::UNSAT => {
            println!("Unsatisfiable");
            match write_solution(output, &None) {
                Ok(()) => 0,
                Err(error) => {
                    eprintln!("{}", error);
                    1
                }
            }
        }
        Result::Unknown => {
            println!("Unknown");
            2
        }
    }
}

/*
A function to run every instance in a directory of CNF files.
*/
pub fn run_bench_directory(path: &str, config: &Config, filename_to_write: &str) {
    run_bench_group(path, config, filename_to_write);
}
