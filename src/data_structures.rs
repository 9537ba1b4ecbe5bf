use std::collections::HashMap;
use multimap::MultiMap;

use crate::dimacs::ParseError;
use crate::implication_graph::{AssignmentEvent, Graph, NodeLabel};

/*
An enum to store the type of solver algorithm to run.
*/
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SolverType {
    DPLL,
    CDCL,
}

/*
An enum to store the type of literal selection.
*/
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LiteralSelection {
    Ordered, // First unassigned literal of the first unsolved clause
    VariableStateSum, // Most live occurrences wins, polarity by majority
}

/*
A struct to store the solver configuration.

The timeout and decision limit form the search budget. Both default to
"infinity"; exceeding either makes the solvers report Unknown.
*/
#[derive(Clone)]
pub struct Config {
    pub solver_type: SolverType,
    pub literal_selection: LiteralSelection,
    pub pre_process: bool,
    pub pure_literal_deletion: bool,
    pub timeout_seconds: u64,
    pub decision_limit: usize,
}

impl Config {
    /*
    Creates the default configuration, used whenever config.json is absent.
    */
    pub fn new() -> Self {
        Config {
            solver_type: SolverType::CDCL,
            literal_selection: LiteralSelection::Ordered,
            pre_process: true,
            pure_literal_deletion: true,
            timeout_seconds: u64::MAX,
            decision_limit: usize::MAX,
        }
    }

    pub fn pure_literal_deletion_enabled(&self) -> bool {
        return self.pure_literal_deletion;
    }

    pub fn pre_process_enabled(&self) -> bool {
        return self.pre_process;
    }
}

/*
A struct to store statistics relating to the number of unit propagations,
decisions, backtrack/backjump counts, and learned clause counts where appropriate.
*/
#[derive(Clone)]
pub struct Statistics {
    pub propagation_count: i32,
    pub decision_count: i32,
    pub backtrack_count: i32,
    pub learned_clause_count: i32,
}

impl Statistics {
    /*
    Create an empty statistics struct.
    */
    pub fn new() -> Self {
        Statistics { propagation_count: 0, decision_count: 0, backtrack_count: 0, learned_clause_count: 0 }
    }

    pub fn increment_propagation_count(&mut self) {
        self.propagation_count += 1;
    }

    pub fn increment_decision_count(&mut self) {
        self.decision_count += 1;
    }

    pub fn increment_backtrack_count(&mut self) {
        self.backtrack_count += 1;
    }

    pub fn increment_learned_clause_count(&mut self) {
        self.learned_clause_count += 1;
    }
}

/*
A struct for storing a single literal: a variable together with its polarity.

Literals are totally ordered (by variable, negated last) and compare equal only
when both the variable and the polarity match.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    pub number: i32,
    pub is_negated: bool,
}

impl Literal {
    /*
    Builds a literal from its signed DIMACS representation, e.g. -3 means "variable 3 negated".
    */
    pub fn from_signed(value: i32) -> Self {
        Literal { number: value.abs(), is_negated: value < 0 }
    }

    pub fn to_signed(&self) -> i32 {
        if self.is_negated { -self.number } else { self.number }
    }

    /*
    Evaluates the literal under an assignment of its variable.
    */
    pub fn eval(&self, value: bool) -> bool {
        return value != self.is_negated;
    }
}

/*
An enum marking where a clause came from. Learned clauses behave exactly like
original ones during search; the tag matters to the model checker, which only
evaluates the input clauses.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOrigin {
    Original,
    Learned,
}

/*
A struct for storing a single clause.

The literal body is immutable after construction. The `used` flags partition
the body: a literal is used when its variable is assigned (it went false, or
the clause was already solved when the assignment arrived) and unused while the
variable is free. `is_solved` is set exactly when some body literal is true
under the current assignment, and `solving_var` remembers which variable did it
so the clause knows whom to forget when that variable is unassigned again.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    pub literals: Vec<Literal>,
    pub used: Vec<bool>,
    pub unused_count: usize,
    pub is_solved: bool,
    pub solving_var: Option<i32>,
    pub origin: ClauseOrigin,
}

impl Clause {
    /*
    A function to create a clause with every literal unused.
    */
    pub fn new(literals: Vec<Literal>, origin: ClauseOrigin) -> Self {
        let used = vec![false; literals.len()];
        let unused_count = literals.len();
        Clause { literals, used, unused_count, is_solved: false, solving_var: None, origin }
    }

    /*
    A function that checks for a unit clause and returns the unit literal if there is one.
    */
    pub fn is_unit_clause(&self) -> Option<Literal> {
        if !self.is_solved && self.unused_count == 1 {
            return self.first_unused_literal();
        }
        None
    }

    /*
    A function to check whether the clause has no unused literals left while
    still being unsolved. Such a clause is falsified outright.
    */
    pub fn is_empty(&self) -> bool {
        return !self.is_solved && self.unused_count == 0;
    }

    pub fn first_unused_literal(&self) -> Option<Literal> {
        for (index, literal) in self.literals.iter().enumerate() {
            if !self.used[index] {
                return Some(*literal);
            }
        }
        None
    }

    /*
    A function to collect the literals whose variables are currently unassigned.
    */
    pub fn unused_literals(&self) -> Vec<Literal> {
        let mut literals = Vec::new();
        for (index, literal) in self.literals.iter().enumerate() {
            if !self.used[index] {
                literals.push(*literal);
            }
        }
        literals
    }

    /*
    A function to collect the literals falsified by the current assignment.
    */
    pub fn used_literals(&self) -> Vec<Literal> {
        let mut literals = Vec::new();
        for (index, literal) in self.literals.iter().enumerate() {
            if self.used[index] {
                literals.push(*literal);
            }
        }
        literals
    }
}

/*
Adjusts the live-occurrence counter matching the literal's polarity.
*/
fn update_polarity_counts(positive_count: &mut [i32], negative_count: &mut [i32], literal: &Literal, delta: i32) {
    let counter = if literal.is_negated {
        &mut negative_count[literal.number as usize]
    } else {
        &mut positive_count[literal.number as usize]
    };
    *counter += delta;
    debug_assert!(*counter >= 0, "polarity counter underflow for variable {}", literal.number);
}

/*
A struct for storing the clause database.

- clause_list holds every clause, originals first and learned clauses appended.
- clause_references maps each signed literal to the indices of the clauses
  whose body contains it - in a multimap for O(1) access. The map describes
  bodies and is append-only; liveness is tracked by the counters below.
- positive_count/negative_count hold, per variable, the number of unused
  occurrences of that polarity across unsolved clauses. They drive pure
  literal detection without scanning clauses.
- unsolved_clause_count is the number of clauses not yet satisfied; zero means
  the current assignment is a model.
*/
#[derive(Clone, Debug)]
pub struct Formula {
    pub clause_list: Vec<Clause>,
    pub clause_references: MultiMap<i32, i32>,
    pub positive_count: Vec<i32>,
    pub negative_count: Vec<i32>,
    pub unsolved_clause_count: i32,
    pub num_of_vars: i32,
}

impl Formula {
    /*
    Creates an empty clause database over variables 1..=num_of_vars.
    */
    pub fn new(num_of_vars: i32) -> Self {
        Formula {
            clause_list: Vec::new(),
            clause_references: MultiMap::new(),
            positive_count: vec![0; (num_of_vars + 1) as usize],
            negative_count: vec![0; (num_of_vars + 1) as usize],
            unsolved_clause_count: 0,
            num_of_vars,
        }
    }

    /*
    A function to append an input clause. Repeated literals within the clause
    are dropped so that later simplify/undo calls touch at most one occurrence
    per polarity. Fails when a literal references a variable outside 1..=N.
    */
    pub fn add_original(&mut self, literals: Vec<Literal>) -> Result<(), ParseError> {
        let mut body: Vec<Literal> = Vec::new();
        for literal in literals {
            if literal.number < 1 || literal.number > self.num_of_vars {
                return Err(ParseError::VariableOutOfRange { variable: literal.number, num_of_vars: self.num_of_vars });
            }
            if !body.contains(&literal) {
                body.push(literal);
            }
        }
        let clause_index = self.clause_list.len() as i32;
        for literal in &body {
            self.clause_references.insert(literal.to_signed(), clause_index);
            update_polarity_counts(&mut self.positive_count, &mut self.negative_count, literal, 1);
        }
        self.clause_list.push(Clause::new(body, ClauseOrigin::Original));
        self.unsolved_clause_count += 1;
        Ok(())
    }

    /*
    The indices of every clause whose body mentions the variable, in ascending
    order. Both polarities are merged since a clause may contain either.
    */
    fn affected_clauses(&self, number: i32) -> Vec<i32> {
        let mut affected = Vec::new();
        if let Some(references) = self.clause_references.get_vec(&number) {
            affected.extend_from_slice(references);
        }
        if let Some(references) = self.clause_references.get_vec(&-number) {
            affected.extend_from_slice(references);
        }
        affected.sort_unstable();
        affected.dedup();
        affected
    }

    /*
    A function to apply the assignment `number := value` to every unsolved clause.

    A clause containing a now-true literal is marked solved and stops
    contributing to the polarity counters entirely. In clauses that stay
    unsolved, the falsified occurrences of the variable move from unused to
    used. Returns the indices of the clauses that became solved by this call.
    */
    pub fn simplify(&mut self, number: i32, value: bool) -> Vec<i32> {
        let mut newly_solved = Vec::new();
        for clause_index in self.affected_clauses(number) {
            let clause = &mut self.clause_list[clause_index as usize];
            if clause.is_solved {
                continue;
            }
            let mut solves = false;
            for (index, literal) in clause.literals.iter().enumerate() {
                if !clause.used[index] && literal.number == number && literal.eval(value) {
                    solves = true;
                }
            }
            if solves {
                clause.is_solved = true;
                clause.solving_var = Some(number);
                for index in 0..clause.literals.len() {
                    if !clause.used[index] {
                        update_polarity_counts(&mut self.positive_count, &mut self.negative_count, &clause.literals[index], -1);
                    }
                }
                self.unsolved_clause_count -= 1;
                newly_solved.push(clause_index);
            } else {
                for index in 0..clause.literals.len() {
                    if !clause.used[index] && clause.literals[index].number == number {
                        clause.used[index] = true;
                        clause.unused_count -= 1;
                        update_polarity_counts(&mut self.positive_count, &mut self.negative_count, &clause.literals[index], -1);
                    }
                }
            }
        }
        newly_solved
    }

    /*
    A function to reverse the most recent simplify of the variable on every
    clause. Clauses solved by the variable become unsolved again and their
    unused literals re-enter the counters; elsewhere the variable's used
    occurrences move back to unused. Undoing a variable twice without an
    intervening simplify is a no-op. Undos must follow the reverse of the
    assignment order, which the trail guarantees.
    */
    pub fn undo(&mut self, number: i32) {
        for clause_index in self.affected_clauses(number) {
            let clause = &mut self.clause_list[clause_index as usize];
            if clause.is_solved {
                if clause.solving_var == Some(number) {
                    clause.is_solved = false;
                    clause.solving_var = None;
                    for index in 0..clause.literals.len() {
                        if !clause.used[index] {
                            update_polarity_counts(&mut self.positive_count, &mut self.negative_count, &clause.literals[index], 1);
                        }
                    }
                    self.unsolved_clause_count += 1;
                }
            } else {
                for index in 0..clause.literals.len() {
                    if clause.used[index] && clause.literals[index].number == number {
                        clause.used[index] = false;
                        clause.unused_count += 1;
                        update_polarity_counts(&mut self.positive_count, &mut self.negative_count, &clause.literals[index], 1);
                    }
                }
            }
        }
        #[cfg(debug_assertions)]
        self.check_counters();
    }

    /*
    A function that will return true when every clause is satisfied by the
    current assignment.
    */
    pub fn is_satisfied(&self) -> bool {
        return self.unsolved_clause_count == 0;
    }

    /*
    A function to find the lowest-indexed unit clause. Returns the clause index
    together with its single unassigned literal.
    */
    pub fn find_unit_clause(&self) -> Option<(i32, Literal)> {
        for (index, clause) in self.clause_list.iter().enumerate() {
            if let Some(literal) = clause.is_unit_clause() {
                return Some((index as i32, literal));
            }
        }
        None
    }

    /*
    A function to find the lowest-indexed falsified clause, if any.
    */
    pub fn find_empty_clause(&self) -> Option<i32> {
        for (index, clause) in self.clause_list.iter().enumerate() {
            if clause.is_empty() {
                return Some(index as i32);
            }
        }
        None
    }

    pub fn has_empty_clause(&self) -> bool {
        return self.find_empty_clause().is_some();
    }

    /*
    A function to find a variable occurring with a single polarity among the
    unused literals of unsolved clauses. Occurrences inside solved clauses do
    not count: the counters are decremented when a clause is solved, so a
    variable kept alive only by satisfied clauses is reported pure. Assigned
    variables have no live occurrences and are never reported.
    */
    pub fn find_pure_literal(&self) -> Option<(i32, bool)> {
        for variable in 1..=self.num_of_vars {
            let positive = self.positive_count[variable as usize];
            let negative = self.negative_count[variable as usize];
            if negative == 0 && positive > 0 {
                return Some((variable, true));
            }
            if positive == 0 && negative > 0 {
                return Some((variable, false));
            }
        }
        None
    }

    /*
    Recomputes the polarity counters and the unsolved-clause count from a full
    scan and panics on any divergence. Runs after every undo in debug builds.
    */
    pub fn check_counters(&self) {
        let mut positive = vec![0; (self.num_of_vars + 1) as usize];
        let mut negative = vec![0; (self.num_of_vars + 1) as usize];
        let mut unsolved = 0;
        for clause in &self.clause_list {
            let unused = clause.used.iter().filter(|used| !**used).count();
            assert_eq!(unused, clause.unused_count, "clause unused count diverged from its partition flags");
            if clause.is_solved {
                continue;
            }
            unsolved += 1;
            for literal in clause.unused_literals() {
                if literal.is_negated {
                    negative[literal.number as usize] += 1;
                } else {
                    positive[literal.number as usize] += 1;
                }
            }
        }
        assert_eq!(positive, self.positive_count, "positive polarity counters diverged from a full rescan");
        assert_eq!(negative, self.negative_count, "negative polarity counters diverged from a full rescan");
        assert_eq!(unsolved, self.unsolved_clause_count, "unsolved clause count diverged from a full rescan");
    }
}

/*
A struct for storing a single assignment of a variable. It stores the signed
literal that was made true, the decision level it was assigned at, and if
applicable the index of the clause that forced the assignment. A missing
clause index marks a decision (or a pure literal, which nothing forces either).
*/
#[derive(Clone, Debug)]
pub struct Assignment {
    pub value: i32,
    pub decision_level: i32,
    pub clause_responsible: Option<i32>,
}

impl Assignment {
    /*
    A function to return whether the given assignment was the result of a
    decision or an implication. Returns true for a decision.
    */
    pub fn is_decision(&self) -> bool {
        return self.clause_responsible.is_none();
    }

    /*
    The implication graph node identity of this assignment.
    */
    pub fn event(&self) -> AssignmentEvent {
        AssignmentEvent {
            variable: self.value.abs(),
            value: self.value > 0,
            decision_level: self.decision_level,
        }
    }
}

/*
A struct for storing the core data structures required for the CDCL procedure.

- formula stores the clause database.
- decision_level stores the current depth in the search tree.
- trail stores every assignment, decisions and implications, in chronological
  order; it dictates the order in which assignments are undone.
- assignments stores the same events keyed by variable for O(1) access.
- implication_graph records which assignments forced which others.
*/
#[derive(Clone, Debug)]
pub struct CDCLFormula {
    pub formula: Formula,
    pub decision_level: i32,
    pub trail: Vec<Assignment>,
    pub assignments: HashMap<i32, Assignment>,
    pub implication_graph: Graph,
}

impl CDCLFormula {
    pub fn new(formula: Formula) -> Self {
        CDCLFormula {
            formula,
            decision_level: 0,
            trail: Vec::new(),
            assignments: HashMap::new(),
            implication_graph: Graph::new(),
        }
    }

    /*
    A function to make the given signed literal true at the current decision
    level. Records the trail event and the implication graph node, then
    applies the assignment to the clause database. Edges into the new node,
    when the assignment was implied, are added by the caller who knows the
    causes. Returns the indices of the clauses the assignment satisfied.
    */
    pub fn assign(&mut self, literal: i32, clause_responsible: Option<i32>) -> Vec<i32> {
        let assignment = Assignment {
            value: literal,
            decision_level: self.decision_level,
            clause_responsible,
        };
        self.implication_graph.add_node(NodeLabel::Assignment(assignment.event()));
        self.assignments.insert(literal.abs(), assignment.clone());
        self.trail.push(assignment);
        self.formula.simplify(literal.abs(), literal > 0)
    }

    /*
    A function to append a learned clause. Literals over variables that are
    still assigned start out used (the surviving assignment falsifies them,
    never satisfies them); the rest are unused and enter the polarity
    counters. Depending on how far the search backjumped first, the clause is
    unit, falsified, or an ordinary constraint.
    */
    pub fn add_learned_clause(&mut self, literals: Vec<Literal>) {
        let clause_index = self.formula.clause_list.len() as i32;
        let mut clause = Clause::new(literals, ClauseOrigin::Learned);
        for index in 0..clause.literals.len() {
            let literal = clause.literals[index];
            self.formula.clause_references.insert(literal.to_signed(), clause_index);
            if self.assignments.contains_key(&literal.number) {
                clause.used[index] = true;
                clause.unused_count -= 1;
            } else {
                update_polarity_counts(&mut self.formula.positive_count, &mut self.formula.negative_count, &literal, 1);
            }
        }
        self.formula.clause_list.push(clause);
        self.formula.unsolved_clause_count += 1;
    }
}

/*
A struct for storing the state of the DPLL procedure: the clause database plus
the trail of signed literals assigned so far. Backtracking rewinds the trail
instead of ever copying the formula.
*/
#[derive(Clone, Debug)]
pub struct DPLLFormula {
    pub formula: Formula,
    pub trail: Vec<i32>,
}

impl DPLLFormula {
    pub fn new(formula: Formula) -> Self {
        DPLLFormula { formula, trail: Vec::new() }
    }

    /*
    Makes the given signed literal true and records it on the trail.
    */
    pub fn assign(&mut self, literal: i32) {
        self.trail.push(literal);
        self.formula.simplify(literal.abs(), literal > 0);
    }

    /*
    A function to undo every assignment made after the given trail position,
    most recent first.
    */
    pub fn rewind(&mut self, mark: usize) {
        while self.trail.len() > mark {
            let literal = self.trail.pop().expect("Trail missing assignment literal");
            self.formula.undo(literal.abs());
        }
    }
}
