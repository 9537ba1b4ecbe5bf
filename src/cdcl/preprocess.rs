use crate::cdcl::cdcl::Result;
use crate::cdcl::unit_propagate::unit_propagate;
use crate::data_structures::{CDCLFormula, Config, Statistics};
use crate::pure_literal::assign_pure_literals;

/*
A function to settle the instance at decision level zero before the search
starts: unit clauses are propagated to fixpoint and pure literals assigned.
Pure literal assignments only satisfy clauses, so they cannot create new unit
or empty clauses and a single pass after propagation suffices.

Returns a verdict when level-zero simplification already decides the instance,
None otherwise.
*/
pub fn preprocess(state: &mut CDCLFormula, config: &Config, statistics: &mut Statistics) -> Option<Result> {
    if unit_propagate(state, statistics).is_some() {
        return Some(Result::UNSAT);
    }
    if config.pure_literal_deletion_enabled() {
        assign_pure_literals(state);
    }
    if state.formula.is_satisfied() {
        return Some(Result::SAT);
    }
    return None;
}
