use crate::data_structures::{CDCLFormula, DPLLFormula};

/*
A function to assign every pure literal before the next decision. A variable
whose live occurrences all share one polarity can be given that polarity: it
only satisfies clauses and never falsifies a literal. Each assignment can
expose further pure variables, so this runs to fixpoint. The assignments are
recorded without a responsible clause since nothing forces them, which keeps
the implication graph free of spurious edges.
*/
pub fn assign_pure_literals(state: &mut CDCLFormula) {
    loop {
        match state.formula.find_pure_literal() {
            Some((variable, value)) => {
                state.assign(if value { variable } else { -variable }, None);
            }
            None => return,
        }
    }
}

/*
The DPLL flavour of the rule: identical reasoning, recorded on the plain
backtracking trail.
*/
pub fn eliminate_pure_literals(state: &mut DPLLFormula) {
    loop {
        match state.formula.find_pure_literal() {
            Some((variable, value)) => {
                state.assign(if value { variable } else { -variable });
            }
            None => return,
        }
    }
}
