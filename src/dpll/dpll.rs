use std::time::Instant;

use crate::data_structures::{Config, DPLLFormula, Statistics};
use crate::dpll::unit_propagate::unit_propagate;
use crate::literal_selection::select_decision_literal;
use crate::pure_literal::eliminate_pure_literals;
use crate::util::budget_exhausted;

/*
A struct to store the result of the DPLL procedure.

SAT => Satisfiable at the current decision branch.
UNSAT => Unsatisfiable at the current decision branch.
Unknown => The search budget ran out before a verdict.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Result {
    SAT,
    UNSAT,
    Unknown,
}

/*
A function that will perform the Davis-Putnam-Logemann-Loveland (DPLL)
algorithm: propagate unit clauses, assign pure literals, then branch on a
decision literal and try both polarities. Every assignment goes through the
shared clause database and is undone through the trail when a branch fails;
the formula is never copied. Recursion depth is bounded by the number of
variables since each call assigns at least the decision variable.

Returns SAT (satisfiable), UNSAT (unsatisfiable), or Unknown.
*/
pub fn dpll(state: &mut DPLLFormula, config: &Config, statistics: &mut Statistics, timer: Instant) -> Result {
    if budget_exhausted(config, statistics, timer) {
        return Result::Unknown;
    }
    let frame = state.trail.len();
    if unit_propagate(state, statistics) {
        state.rewind(frame);
        return Result::UNSAT;
    }
    if config.pure_literal_deletion_enabled() {
        eliminate_pure_literals(state);
    }
    if state.formula.is_satisfied() {
        return Result::SAT; // assignments stay on the trail for extraction
    }
    let (variable, value) = select_decision_literal(&state.formula, config.literal_selection)
        .expect("an unsolved clause must still have an unassigned literal");
    statistics.increment_decision_count();
    let decision_frame = state.trail.len();
    state.assign(if value { variable } else { -variable });
    let first_branch = dpll(state, config, statistics, timer);
    if first_branch != Result::UNSAT {
        return first_branch;
    }
    statistics.increment_backtrack_count();
    state.rewind(decision_frame);
    state.assign(if value { -variable } else { variable });
    let second_branch = dpll(state, config, statistics, timer);
    if second_branch != Result::UNSAT {
        return second_branch;
    }
    state.rewind(frame);
    return Result::UNSAT;
}

/*
A function to project the trail to a total assignment over variables 1..=N.
Variables left unassigned at the end are unconstrained and default to true.
*/
pub fn extract_solution(state: &DPLLFormula) -> Vec<(i32, bool)> {
    let mut solution = Vec::new();
    for variable in 1..=state.formula.num_of_vars {
        let assigned = state.trail.iter().find(|literal| literal.abs() == variable);
        match assigned {
            Some(literal) => solution.push((variable, *literal > 0)),
            None => solution.push((variable, true)),
        }
    }
    return solution;
}
