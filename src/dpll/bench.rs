use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::time::Instant;

use log::{error, info, warn};

use crate::data_structures::Config;
use crate::dimacs::{check_assignment, read_dimacs};
use crate::dpll::solve_formula;
use crate::dpll::Result;
use crate::util::read_instance_name;

/*
A function to run a directory of files in DIMACS CNF format under the
configured budget. Satisfiable verdicts are checked clause by clause against
a fresh parse of the instance.

Stores detailed results in a file named "output-<filename_to_write>".
*/
pub fn run_bench_group(group: &str, config: &Config, filename_to_write: &str) {
    let mut file_paths: Vec<String> = match fs::read_dir(group) {
        Ok(paths) => paths
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path().display().to_string())
            .collect(),
        Err(error) => {
            error!("could not read benchmark directory {}: {}", group, error);
            return;
        }
    };
    file_paths.retain(|path| path.ends_with(".cnf"));
    file_paths.sort();

    let mut test_times = BTreeMap::new();
    let mut statistic_database: HashMap<String, (i32, i32, i32, Result)> = HashMap::new();
    let (mut total, mut satisfiable, mut unsatisfiable, mut unknown) = (0, 0, 0, 0);
    let bench_timer = Instant::now();
    for file_path in &file_paths {
        let instance_timer = Instant::now();
        let formula = match read_dimacs(file_path) {
            Ok(formula) => formula,
            Err(error) => {
                warn!("skipping {}: {}", file_path, error);
                continue;
            }
        };
        let (result, solution, statistics) = solve_formula(formula, config);
        if result == Result::SAT {
            let fresh = read_dimacs(file_path).expect("instance parsed once already");
            let solution = solution.expect("a satisfiable result carries an assignment");
            if !check_assignment(&fresh, &solution) {
                error!("model check failed for {}", file_path);
            }
        }
        let instance_name = read_instance_name(file_path);
        test_times.insert(instance_name.clone(), instance_timer.elapsed());
        statistic_database.insert(
            instance_name,
            (statistics.propagation_count, statistics.decision_count, statistics.backtrack_count, result.clone()),
        );
        total += 1;
        match &result {
            Result::UNSAT => unsatisfiable += 1,
            Result::SAT => satisfiable += 1,
            Result::Unknown => unknown += 1,
        }
    }
    // Formatting to store overall results
    let mut output_string = format!(
        "--- DPLL ---\nCONFIG: [Literal Selection: {:?}, Preprocess: {}, Pure Literal Deletion: {}]",
        config.literal_selection, config.pre_process, config.pure_literal_deletion
    );
    output_string += &format!(
        "\n--------------------------------------------------------------\nTotal: {}, Sat: {}, Unsat: {}, Unknown: {}\nComplete time: {:?}",
        total,
        satisfiable,
        unsatisfiable,
        unknown,
        bench_timer.elapsed()
    );
    for (key, val) in test_times {
        let stats = statistic_database.get(&key).expect("statistics recorded for every instance");
        output_string += &format!(
            "\nInstance: {} -- Runtime: {:?} -- Result: {:?} -- Propagations: {}, Decisions: {}, Backtracks: {}",
            key, val, stats.3, stats.0, stats.1, stats.2
        );
    }
    let pathname = format!("output-{}", filename_to_write);
    match fs::write(&pathname, output_string) {
        Ok(()) => info!("benchmark report written to {}", pathname),
        Err(error) => error!("unable to write {}: {}", pathname, error),
    }
}
