use crate::data_structures::{CDCLFormula, Statistics};
use crate::implication_graph::{AssignmentEvent, NodeLabel};

/*
A function to perform unit propagation (Boolean Constraint Propagation) on the
clause database until fixpoint, at the current decision level.

Falsified clauses are checked for first; a unit clause is then taken in
clause-index order so propagation is reproducible. Each implied assignment is
recorded on the trail with the responsible clause and gets an implication
graph node with one incoming edge per falsified literal of that clause. Those
literals always correspond to existing trail events: a literal only becomes
used once its variable is assigned.

Returns the assignment events that falsified a clause when a conflict is
found, and None once no unit clause remains.
*/
pub fn unit_propagate(state: &mut CDCLFormula, statistics: &mut Statistics) -> Option<Vec<AssignmentEvent>> {
    loop {
        if let Some(clause_index) = state.formula.find_empty_clause() {
            return Some(record_conflict(state, clause_index));
        }
        let (clause_index, literal) = match state.formula.find_unit_clause() {
            Some(unit) => unit,
            None => return None,
        };
        statistics.increment_propagation_count();
        let causes = state.formula.clause_list[clause_index as usize].used_literals();
        state.assign(literal.to_signed(), Some(clause_index));
        let implied = NodeLabel::Assignment(AssignmentEvent {
            variable: literal.number,
            value: !literal.is_negated,
            decision_level: state.decision_level,
        });
        for cause in causes {
            let source = state
                .assignments
                .get(&cause.number)
                .expect("Assignment store missing literal")
                .event();
            state.implication_graph.connect(&NodeLabel::Assignment(source), &implied);
        }
    }
}

/*
A function to record a conflict: the transient conflict node enters the
implication graph with an incoming edge from every assignment that falsified
a literal of the empty clause. Returns those falsifying events.
*/
fn record_conflict(state: &mut CDCLFormula, clause_index: i32) -> Vec<AssignmentEvent> {
    let mut causes = Vec::new();
    state.implication_graph.add_node(NodeLabel::Conflict);
    for literal in state.formula.clause_list[clause_index as usize].used_literals() {
        let event = state
            .assignments
            .get(&literal.number)
            .expect("Assignment store missing literal")
            .event();
        state.implication_graph.connect(&NodeLabel::Assignment(event), &NodeLabel::Conflict);
        causes.push(event);
    }
    causes
}
