use std::time::Instant;

use regex::Regex;

use crate::data_structures::{Config, Statistics};

/*
A function to get the instance name from a file path.

Example: file_path = ./benchmarks/random/unif-k3-r4.2-v60.cnf
            => instance_name = unif-k3-r4.2-v60.cnf

Returns the instance name.
*/
pub fn read_instance_name(file_path: &str) -> String {
    let re_get_instance = Regex::new(r"[^/\\]+$").expect("instance name pattern should compile");
    let instance_name = re_get_instance.find(file_path).map(|m| m.as_str()).unwrap_or(file_path);
    return instance_name.to_string();
}

/*
A function to check whether the configured search budget is spent. The budget
is a wall-clock deadline and a cap on decisions, both optional; it is checked
between decisions and between propagation rounds so the solver state stays
consistent when the search stops early.
*/
pub fn budget_exhausted(config: &Config, statistics: &Statistics, timer: Instant) -> bool {
    if (statistics.decision_count as usize) >= config.decision_limit {
        return true;
    }
    if config.timeout_seconds != u64::MAX && timer.elapsed().as_secs() >= config.timeout_seconds {
        return true;
    }
    return false;
}

/*
Test support: a random 3-SAT instance in DIMACS text form. Each clause samples
three distinct variables and negates each with probability one half.
*/
#[cfg(test)]
pub fn random_three_sat(rng: &mut impl rand::Rng, num_of_vars: i32, num_of_clauses: usize) -> String {
    let mut contents = format!("c randomly generated formula in CNF\np cnf {} {}\n", num_of_vars, num_of_clauses);
    for _ in 0..num_of_clauses {
        let mut variables: Vec<i32> = Vec::new();
        while variables.len() < 3 {
            let candidate = rng.gen_range(1..=num_of_vars);
            if !variables.contains(&candidate) {
                variables.push(candidate);
            }
        }
        let clause: Vec<String> = variables
            .iter()
            .map(|variable| if rng.gen_bool(0.5) { (-variable).to_string() } else { variable.to_string() })
            .collect();
        contents += &format!("{} 0\n", clause.join(" "));
    }
    contents
}

/*
Test support: decides satisfiability by enumerating every assignment. Only
sensible for small variable counts; the solvers are checked against it.
*/
#[cfg(test)]
pub fn exhaustive_satisfiable(formula: &crate::data_structures::Formula) -> bool {
    for bits in 0u64..(1u64 << formula.num_of_vars) {
        let satisfied = formula.clause_list.iter().all(|clause| {
            clause.literals.iter().any(|literal| {
                let value = bits & (1u64 << (literal.number - 1)) != 0;
                literal.eval(value)
            })
        });
        if satisfied {
            return true;
        }
    }
    return false;
}
