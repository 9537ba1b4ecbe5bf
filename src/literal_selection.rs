use crate::data_structures::{Formula, LiteralSelection};

/*
A function to pick the next decision literal with the configured scheme.
Returns (variable, value) or None when no unsolved clause remains.
*/
pub fn select_decision_literal(formula: &Formula, scheme: LiteralSelection) -> Option<(i32, bool)> {
    match scheme {
        LiteralSelection::Ordered => select_literal(formula),
        LiteralSelection::VariableStateSum => select_literal_vss(formula),
    }
}

/*
In-order selection: the first unassigned literal of the first unsolved clause,
taken with the polarity that satisfies it. Deterministic by construction.
*/
pub fn select_literal(formula: &Formula) -> Option<(i32, bool)> {
    for clause in &formula.clause_list {
        if clause.is_solved {
            continue;
        }
        if let Some(literal) = clause.first_unused_literal() {
            return Some((literal.number, !literal.is_negated));
        }
    }
    None
}

/*
Variable State Sum selection: picks the unassigned variable with the most live
occurrences across unsolved clauses, read straight off the polarity counters.
If the variable appears more often negatively it is decided negatively,
otherwise positively. Ties keep the lowest variable.
*/
pub fn select_literal_vss(formula: &Formula) -> Option<(i32, bool)> {
    let mut best_variable = 0;
    let mut best_appearances = 0;
    let mut choose_positive = true;
    for variable in 1..=formula.num_of_vars {
        let pos_appearances = formula.positive_count[variable as usize];
        let neg_appearances = formula.negative_count[variable as usize];
        let appearances = pos_appearances + neg_appearances;
        if appearances > best_appearances {
            best_appearances = appearances;
            best_variable = variable;
            choose_positive = if neg_appearances >= pos_appearances { false } else { true };
        }
    }
    if best_variable == 0 {
        return None;
    }
    return Some((best_variable, choose_positive));
}
