#[cfg(test)]
mod test {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use crate::cdcl::cdcl::erase;
    use crate::cdcl::conflict_analysis::analyse_conflict;
    use crate::cdcl::unit_propagate::unit_propagate;
    use crate::cdcl::{solve_formula, Result};
    use crate::data_structures::{CDCLFormula, Config, Literal, LiteralSelection, SolverType, Statistics};
    use crate::dimacs::{check_assignment, parse_dimacs, read_dimacs};
    use crate::implication_graph::NodeLabel;
    use crate::util::{exhaustive_satisfiable, random_three_sat};

    fn config() -> Config {
        Config {
            solver_type: SolverType::CDCL,
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

    /* START OF PROPAGATION AND ANALYSIS TESTS */

    /*
    Tests that a propagation chain records its implications: the unit clause
    assigns the first variable, every later variable is implied by a clause
    and has predecessors in the implication graph.
    */
    #[test]
    fn implication_chain_records_causes() {
        let formula = parse_dimacs("p cnf 4 4\n1 0\n-1 2 0\n-2 3 0\n-3 4 0\n").expect("formula should parse");
        let state = &mut CDCLFormula::new(formula);
        let statistics = &mut Statistics::new();
        assert!(unit_propagate(state, statistics).is_none());
        assert_eq!(4, state.trail.len());
        assert_eq!(1, state.trail[0].value);
        assert_eq!(Some(0), state.trail[0].clause_responsible);
        for variable in 2..=4 {
            let assignment = state.assignments.get(&variable).expect("propagated variable is on the trail");
            assert!(!assignment.is_decision());
            let predecessors = state.implication_graph.predecessors(&NodeLabel::Assignment(assignment.event()));
            assert!(!predecessors.is_empty());
        }
        assert_eq!(4, statistics.propagation_count);
    }

    /*
    Tests conflict analysis on a hand-built conflict. Deciding 1 forces 2 and
    falsifies the last clause; the cut through the graph is the decision
    alone, so the learned clause asserts its negation back at the root.
    */
    #[test]
    fn analysis_produces_an_asserting_clause() {
        let formula = parse_dimacs("p cnf 2 3\n1 2 0\n-1 2 0\n-1 -2 0\n").expect("formula should parse");
        let state = &mut CDCLFormula::new(formula);
        let statistics = &mut Statistics::new();
        state.decision_level = 1;
        state.assign(1, None);
        let conflict = unit_propagate(state, statistics).expect("deciding 1 is contradictory");
        assert_eq!(2, conflict.len());
        let (learned_literals, backjump_level) = analyse_conflict(state, conflict, statistics);
        assert_eq!(vec![Literal { number: 1, is_negated: true }], learned_literals);
        assert_eq!(0, backjump_level);
        // unwinding to the backjump level empties trail and graph again
        erase(state, 0);
        assert!(state.trail.is_empty());
        assert_eq!(0, state.implication_graph.node_count());
        state.formula.check_counters();
    }

    /*
    Tests the same conflict through the full driver: the learned unit clause
    flips the decision and the search ends satisfiable.
    */
    #[test]
    fn conflict_learning_flips_a_bad_decision() {
        let formula = parse_dimacs("p cnf 2 3\n1 2 0\n-1 2 0\n-1 -2 0\n").expect("formula should parse");
        let (result, solution, statistics) = solve_formula(formula, &config());
        assert_eq!(Result::SAT, result);
        let solution = solution.expect("model expected");
        assert!(solution.contains(&(1, false)));
        assert!(solution.contains(&(2, true)));
        assert_eq!(1, statistics.learned_clause_count);
        assert_eq!(1, statistics.backtrack_count);
    }
    /* END OF PROPAGATION AND ANALYSIS TESTS */

    /* START OF BUDGET TESTS */

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
    /* END OF BUDGET TESTS */

    /* START OF RANDOMISED TESTS */

    /*
    Tests the solver against exhaustive enumeration on random 3-SAT instances
    near the hard clause/variable ratio, checking every returned model.
    */
    #[test]
    fn random_three_sat_agrees_with_truth_table() {
        let mut rng = SmallRng::seed_from_u64(2477);
        for round in 0..40 {
            let num_of_vars = 6 + (round % 6);
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

    /*
    Tests the variable state sum heuristic end to end on the same kind of
    instances.
    */
    #[test]
    fn vss_selection_agrees_with_truth_table() {
        let mut vss = config();
        vss.literal_selection = LiteralSelection::VariableStateSum;
        vss.pure_literal_deletion = false;
        let mut rng = SmallRng::seed_from_u64(901);
        for round in 0..20 {
            let num_of_vars = 7 + (round % 4);
            let num_of_clauses = ((num_of_vars as f32) * 4.2).round() as usize;
            let contents = random_three_sat(&mut rng, num_of_vars, num_of_clauses);
            let reference = parse_dimacs(&contents).expect("generated instance should parse");
            let expected = exhaustive_satisfiable(&reference);
            let (result, solution, _statistics) = solve_formula(parse_dimacs(&contents).expect("generated instance should parse"), &vss);
            if expected {
                assert_eq!(Result::SAT, result, "disagreement on:\n{}", contents);
                assert!(check_assignment(&reference, &solution.expect("model expected")), "bad model for:\n{}", contents);
            } else {
                assert_eq!(Result::UNSAT, result, "disagreement on:\n{}", contents);
            }
        }
    }

    /*
    Tests that both engines reach the same verdict on random instances.
    */
    #[test]
    fn cdcl_and_dpll_agree_on_random_instances() {
        let mut rng = SmallRng::seed_from_u64(3170);
        for round in 0..25 {
            let num_of_vars = 6 + (round % 5);
            let num_of_clauses = ((num_of_vars as f32) * 4.2).round() as usize;
            let contents = random_three_sat(&mut rng, num_of_vars, num_of_clauses);
            let (cdcl_result, _solution, _statistics) =
                solve_formula(parse_dimacs(&contents).expect("generated instance should parse"), &config());
            let (dpll_result, _solution, _statistics) =
                crate::dpll::solve_formula(parse_dimacs(&contents).expect("generated instance should parse"), &config());
            let cdcl_satisfiable = cdcl_result == Result::SAT;
            let dpll_satisfiable = dpll_result == crate::dpll::Result::SAT;
            assert_eq!(cdcl_satisfiable, dpll_satisfiable, "engines disagree on:\n{}", contents);
        }
    }
    /* END OF RANDOMISED TESTS */
}
