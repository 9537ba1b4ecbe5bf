mod bench;
mod cdcl;
mod cdcl_tests;
mod conflict_analysis;
mod preprocess;
mod unit_propagate;

use std::time::Instant;

use log::info;

use crate::cdcl::bench::run_bench_group;
use crate::cdcl::cdcl::{cdcl, extract_solution};
use crate::cdcl::preprocess::preprocess;
use crate::data_structures::{CDCLFormula, Config, Formula, Statistics};
use crate::dimacs::{pretty_print_solution, read_dimacs, write_solution};

pub use self::cdcl::Result;

/*
A function to decide a parsed formula with CDCL under the given
configuration, running level-zero preprocessing first when enabled.

Returns (the result, the model when satisfiable, the search statistics).
*/
pub fn solve_formula(formula: Formula, config: &Config) -> (Result, Option<Vec<(i32, bool)>>, Statistics) {
    let timer = Instant::now();
    let state = &mut CDCLFormula::new(formula);
    let mut statistics = Statistics::new();
    let preprocessed = if config.pre_process_enabled() {
        preprocess(state, config, &mut statistics)
    } else {
        None
    };
    let result = match preprocessed {
        Some(result) => result,
        None => cdcl(state, config, &mut statistics, timer),
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
        "{} propagations, {} decisions, {} backjumps, {} learned clauses",
        statistics.propagation_count, statistics.decision_count, statistics.backtrack_count, statistics.learned_clause_count
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
