use crate::data_structures::{Config, DPLLFormula, Statistics};
use crate::dpll::dpll::Result;
use crate::dpll::unit_propagate::unit_propagate;
use crate::pure_literal::eliminate_pure_literals;

/*
A function to simplify the instance before the search starts: unit clauses are
propagated to fixpoint and pure literals assigned. The resulting assignments
sit at the bottom of the trail and are never backtracked over.

Returns a verdict when the simplification already decides the instance, None
otherwise.
*/
pub fn preprocess(state: &mut DPLLFormula, config: &Config, statistics: &mut Statistics) -> Option<Result> {
    if unit_propagate(state, statistics) {
        return Some(Result::UNSAT);
    }
    if config.pure_literal_deletion_enabled() {
        eliminate_pure_literals(state);
    }
    if state.formula.is_satisfied() {
        return Some(Result::SAT);
    }
    return None;
}
