use std::env;
use std::process;

use crate::data_structures::SolverType;
use crate::parse_config::read_config_json;

mod cdcl;
mod data_structures;
mod dimacs;
mod dpll;
mod implication_graph;
mod literal_selection;
mod parse_config;
mod pure_literal;
mod util;

/*
The entry point for the CNF SAT solvers.

    solver <input.cnf> <output.txt>          decide one instance
    solver --bench <directory> <report>      run a directory of instances

The engine and its options come from ./config.json (defaults apply when the
file is absent). Exit code 0 means the instance was decided either way, 1
means invalid arguments or a parse failure, 2 means the search budget ran out.
*/
fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let config = read_config_json();

    if args.len() == 4 && args[1] == "--bench" {
        if config.solver_type == SolverType::DPLL {
            dpll::run_bench_directory(&args[2], &config, &args[3]);
        } else {
            cdcl::run_bench_directory(&args[2], &config, &args[3]);
        }
        process::exit(0);
    }
    if args.len() != 3 {
        eprintln!("Usage: {} <input.cnf> <output.txt>", args[0]);
        eprintln!("       {} --bench <directory> <report-name>", args[0]);
        process::exit(1);
    }
    let exit_code = if config.solver_type == SolverType::DPLL {
        dpll::run_instance(&args[1], &args[2], &config)
    } else {
        cdcl::run_instance(&args[1], &args[2], &config)
    };
    process::exit(exit_code);
}
