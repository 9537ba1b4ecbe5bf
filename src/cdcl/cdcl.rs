use std::time::Instant;

use log::debug;

use crate::cdcl::conflict_analysis::analyse_conflict;
use crate::cdcl::unit_propagate::unit_propagate;
use crate::data_structures::{CDCLFormula, Config, Statistics};
use crate::implication_graph::NodeLabel;
use crate::literal_selection::select_decision_literal;
use crate::pure_literal::assign_pure_literals;
use crate::util::budget_exhausted;

/*
A struct to store the result of the CDCL procedure.

SAT => A satisfying assignment was found.
UNSAT => The clause set is unsatisfiable.
Unknown => The search budget ran out before a verdict.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Result {
    SAT,
    UNSAT,
    Unknown,
}

/*
A function that will perform the Conflict Driven Clause Learning (CDCL)
algorithm, written as an explicit loop so pathological instances cannot grow
the call stack.

Unit and empty clauses already present in the input are settled at level zero
first. Each round then opens a new decision level, optionally assigns pure
literals, decides a literal and propagates. A conflict is analysed into a
learned clause and a backjump level; the trail, the clause database and the
implication graph are unwound to that level, the learned clause is added (at
which point it is unit or falsified) and propagation resumes there. A conflict
that analysis cannot move past means unsatisfiability; a round in which no
decision is left means the assignment on the trail is a model.
*/
pub fn cdcl(state: &mut CDCLFormula, config: &Config, statistics: &mut Statistics, timer: Instant) -> Result {
    if unit_propagate(state, statistics).is_some() {
        return Result::UNSAT; // conflict before any decision
    }
    loop {
        if budget_exhausted(config, statistics, timer) {
            return Result::Unknown;
        }
        state.decision_level += 1;
        if config.pure_literal_deletion_enabled() {
            assign_pure_literals(state);
        }
        if !decide(state, config, statistics) {
            return Result::SAT;
        }
        loop {
            let conflict = match unit_propagate(state, statistics) {
                Some(conflict) => conflict,
                None => break,
            };
            let (learned_literals, backjump_level) = analyse_conflict(state, conflict, statistics);
            if backjump_level < 0 {
                return Result::UNSAT;
            }
            debug!(
                "conflict at level {}: learned a clause of {} literals, backjumping to level {}",
                state.decision_level,
                learned_literals.len(),
                backjump_level
            );
            statistics.increment_backtrack_count();
            erase(state, backjump_level);
            state.add_learned_clause(learned_literals);
            state.decision_level = backjump_level;
            if budget_exhausted(config, statistics, timer) {
                return Result::Unknown;
            }
        }
    }
}

/*
A function to pick and apply the next decision. Returns false when every
clause is already satisfied, i.e. the trail holds a model.
*/
pub fn decide(state: &mut CDCLFormula, config: &Config, statistics: &mut Statistics) -> bool {
    if state.formula.is_satisfied() {
        return false;
    }
    let (variable, value) = select_decision_literal(&state.formula, config.literal_selection)
        .expect("an unsolved clause must still have an unassigned literal");
    statistics.increment_decision_count();
    state.assign(if value { variable } else { -variable }, None);
    return true;
}

/*
A function to pop every trail event above the backjump level, most recent
first. Each popped event is undone in the clause database, its node leaves
the implication graph, and the variable becomes unassigned. Afterwards the
trail and the graph mention only levels at or below the target.
*/
pub fn erase(state: &mut CDCLFormula, backjump_level: i32) {
    while let Some(last) = state.trail.last() {
        if last.decision_level <= backjump_level {
            break;
        }
        let assignment = state.trail.pop().expect("Trail missing assignment literal");
        let variable = assignment.value.abs();
        state.formula.undo(variable);
        let label = NodeLabel::Assignment(assignment.event());
        // later trail events are deleted first, so nothing points out of this node any more
        debug_assert!(state.implication_graph.successors(&label).is_empty());
        state.implication_graph.delete_node(&label);
        state.assignments.remove(&variable);
    }
}

/*
A function to project the trail to a total assignment over variables 1..=N.
Variables left unassigned once every clause is satisfied are unconstrained and
default to true.
*/
pub fn extract_solution(state: &CDCLFormula) -> Vec<(i32, bool)> {
    let mut solution = Vec::new();
    for variable in 1..=state.formula.num_of_vars {
        match state.assignments.get(&variable) {
            Some(assignment) => solution.push((variable, assignment.value > 0)),
            None => solution.push((variable, true)),
        }
    }
    return solution;
}
