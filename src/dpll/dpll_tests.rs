#[cfg(test)]
mod test {
    use std::time::Instant;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use crate::data_structures::{Config, DPLLFormula, LiteralSelection, SolverType, Statistics};
    use crate::dimacs::{check_assignment, parse_dimacs, read_dimacs};
    use crate::dpll::dpll::dpll;
    use crate::dpll::{solve_formula, Result};
    use crate::util::{exhaustive_satisfiable, random_three_sat};

    fn config() -> Config {
        Config {
            solver_type: SolverType::DPLL,
            literal_selection: LiteralSelection::Ordered,
            pre_process: true,
            pure_literal_deletion: true,
            timeout_seconds: u64::MAX,
            decision_limit: usize::MAX,
        }
    }

    fn run_instance(filename: &str) -> (Result, Option<Vec<(i32, bool)>>) {
        let formula = read_dimacs(filename).expect("test instance should parse");
        let (result, solution, _statistics) = solve_formula(formula, &config());
        (result, solution)
    }

    fn assert_model(filename: &str, solution: &[(i32, bool)]) {
        let formula = read_dimacs(filename).expect("test instance should parse");
        assert!(check_assignment(&formula, solution), "returned assignment does not satisfy {}", filename);
    }

    /* START OF GENERAL INSTANCE TESTS */
    #[test]
    fn single_unit_instance() {
        let filename = "./test_files/unit.cnf";
        let (result, solution) = run_instance(filename);
        assert_eq!(Result::SAT, result);
        let solution = solution.expect("model expected");
        assert!(solution.contains(&(1, true)));
        assert_model(filename, &solution);
    }

    #[test]
    fn contradiction_instance() {
        let (result, solution) = run_instance("./test_files/contradiction.cnf");
        assert_eq!(Result::UNSAT, result);
        assert!(solution.is_none());
    }

    #[test]
    fn simple_sat_instance() {
        let filename = "./test_files/simple_sat.cnf";
        let (result, solution) = run_instance(filename);
        assert_eq!(Result::SAT, result);
        assert_model(filename, &solution.expect("model expected"));
    }

    #[test]
    fn pigeon_hole_instance() {
        let (result, _solution) = run_instance("./test_files/pigeon_hole.cnf");
        assert_eq!(Result::UNSAT, result);
    }

    #[test]
    fn larger_pigeon_hole_instance() {
        let (result, _solution) = run_instance("./test_files/pigeon_hole_4_3.cnf");
        assert_eq!(Result::UNSAT, result);
    }

    #[test]
    fn cycle_instance() {
        let filename = "./test_files/cycle.cnf";
        let (result, solution) = run_instance(filename);
        assert_eq!(Result::SAT, result);
        assert_model(filename, &solution.expect("model expected"));
    }

    #[test]
    fn chain_instance_forces_every_variable() {
        let filename = "./test_files/chain.cnf";
        let (result, solution) = run_instance(filename);
        assert_eq!(Result::SAT, result);
        let solution = solution.expect("model expected");
        for variable in 1..=4 {
            assert!(solution.contains(&(variable, true)));
        }
        assert_model(filename, &solution);
    }
    /* END OF GENERAL INSTANCE TESTS */

    /* START OF BACKTRACKING TESTS */

    /*
    Tests that a failed search leaves the clause database exactly as it found
    it: the recursion rewinds every assignment it made.
    */
    #[test]
    fn failed_search_unwinds_the_trail() {
        let formula = read_dimacs("./test_files/pigeon_hole.cnf").expect("test instance should parse");
        let state = &mut DPLLFormula::new(formula);
        let baseline = state.formula.clone();
        let statistics = &mut Statistics::new();
        let mut plain = config();
        plain.pure_literal_deletion = false;
        let result = dpll(state, &plain, statistics, Instant::now());
        assert_eq!(Result::UNSAT, result);
        assert!(state.trail.is_empty());
        assert_eq!(baseline.clause_list, state.formula.clause_list);
        assert_eq!(baseline.positive_count, state.formula.positive_count);
        assert_eq!(baseline.negative_count, state.formula.negative_count);
        assert_eq!(baseline.unsolved_clause_count, state.formula.unsolved_clause_count);
        assert!(statistics.backtrack_count > 0);
    }

    /*
    Tests that an exhausted decision budget reports Unknown instead of a
    verdict.
    */
    #[test]
    fn decision_budget_reports_unknown() {
        let mut limited = config();
        limited.pre_process = false;
        limited.pure_literal_deletion = false;
        limited.decision_limit = 0;
        let formula = read_dimacs("./test_files/simple_sat.cnf").expect("test instance should parse");
        let (result, solution, _statistics) = solve_formula(formula, &limited);
        assert_eq!(Result::Unknown, result);
        assert!(solution.is_none());
    }
    /* END OF BACKTRACKING TESTS */

    /* START OF RANDOMISED TESTS */

    /*
    Tests the engine against exhaustive enumeration on random 3-SAT instances
    near the hard clause/variable ratio, checking every returned model.
    */
    #[test]
    fn random_three_sat_agrees_with_truth_table() {
        let mut rng = SmallRng::seed_from_u64(660);
        for round in 0..30 {
            let num_of_vars = 6 + (round % 5);
            let num_of_clauses = ((num_of_vars as f32) * 4.2).round() as usize;
            let contents = random_three_sat(&mut rng, num_of_vars, num_of_clauses);
            let reference = parse_dimacs(&contents).expect("generated instance should parse");
            let expected = exhaustive_satisfiable(&reference);
            let (result, solution, _statistics) = solve_formula(parse_dimacs(&contents).expect("generated instance should parse"), &config());
            if expected {
                assert_eq!(Result::SAT, result, "disagreement on:\n{}", contents);
                assert!(check_assignment(&reference, &solution.expect("model expected")), "bad model for:\n{}", contents);
            } else {
                assert_eq!(Result::UNSAT, result, "disagreement on:\n{}", contents);
            }
        }
    }
    /* END OF RANDOMISED TESTS */
}
