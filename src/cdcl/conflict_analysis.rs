use std::cmp;
use std::collections::HashSet;

use crate::data_structures::{CDCLFormula, Literal, Statistics};
use crate::implication_graph::{AssignmentEvent, NodeLabel};

/*
A function to compute the cause set of an assignment event by walking the
implication graph backwards. A node without predecessors was decided (or is a
pure literal) and is its own cause. Predecessors from lower decision levels
are kept as boundary causes; predecessors on the same level are expanded
recursively, so the walk always bottoms out at the level's decision. Recursion
depth is bounded by the length of the implication chain, at most the number of
variables.
*/
pub fn causes_of(state: &CDCLFormula, event: AssignmentEvent) -> Vec<AssignmentEvent> {
    let predecessors = state.implication_graph.predecessors(&NodeLabel::Assignment(event));
    if predecessors.is_empty() {
        return vec![event];
    }
    let mut causes = Vec::new();
    for predecessor in predecessors {
        match predecessor {
            NodeLabel::Assignment(previous) => {
                if previous.decision_level < event.decision_level {
                    causes.push(previous);
                } else {
                    causes.extend(causes_of(state, previous));
                }
            }
            NodeLabel::Conflict => {} // the conflict node has no outgoing edges
        }
    }
    causes
}

/*
A function to compute the cut of assignments that together force the conflict.
Conflict causes below the current decision level are boundary causes
themselves; causes on the current level are expanded through the graph. The
result is de-duplicated and ordered by trail position so the derivation is
deterministic.
*/
pub fn causes_of_conflict(state: &CDCLFormula, conflict: &[AssignmentEvent]) -> Vec<AssignmentEvent> {
    let mut collected = Vec::new();
    for event in conflict {
        if event.decision_level < state.decision_level {
            collected.push(*event);
        } else {
            collected.extend(causes_of(state, *event));
        }
    }
    let unique: HashSet<AssignmentEvent> = collected.into_iter().collect();
    let mut ordered = Vec::new();
    for assignment in &state.trail {
        let event = assignment.event();
        if unique.contains(&event) {
            ordered.push(event);
        }
    }
    ordered
}

/*
A function to calculate the level to backjump to. This is the deepest level
below the current one that contributed a cause: there the learned clause has
exactly one unassigned literal and fuels further implications. When every
cause sits on the current level the search retreats a single level, and a unit
learned clause always sends the search back to the root where its assertion
holds permanently.
*/
pub fn calculate_backjump_level(state: &CDCLFormula, cut: &[AssignmentEvent]) -> i32 {
    let mut backjump_level = -1;
    for event in cut {
        if event.decision_level < state.decision_level {
            backjump_level = cmp::max(backjump_level, event.decision_level);
        }
    }
    if backjump_level < 0 {
        backjump_level = state.decision_level - 1;
    }
    if cut.len() == 1 {
        backjump_level = 0;
    }
    return backjump_level;
}

/*
A function to analyse a conflict. The transient conflict node is dropped from
the graph, the cut through the implication graph is computed, and the learned
clause is built from the negations of the cut assignments: each one is false
exactly while the assignment that caused the conflict stands.

A conflict at decision level zero only involves assignments the formula
forces, so nothing can be undone and the instance is unsatisfiable, signalled
by a backjump level of -1.

Returns (the learned literals, the backjump level).
*/
pub fn analyse_conflict(
    state: &mut CDCLFormula,
    conflict: Vec<AssignmentEvent>,
    statistics: &mut Statistics,
) -> (Vec<Literal>, i32) {
    state.implication_graph.delete_node(&NodeLabel::Conflict);
    if state.decision_level == 0 {
        return (Vec::new(), -1);
    }
    let cut = causes_of_conflict(state, &conflict);
    if cut.is_empty() {
        return (Vec::new(), -1);
    }
    statistics.increment_learned_clause_count();
    let learned_literals: Vec<Literal> = cut
        .iter()
        .map(|event| Literal { number: event.variable, is_negated: event.value })
        .collect();
    let backjump_level = calculate_backjump_level(state, &cut);
    return (learned_literals, backjump_level);
}
