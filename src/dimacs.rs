use std::collections::HashMap;
use std::fs;
use std::io;

use log::warn;
use thiserror::Error;

use crate::data_structures::{ClauseOrigin, Formula, Literal};

/*
Possible errors while reading a CNF instance in DIMACS format.
*/
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("missing 'p cnf <variables> <clauses>' header")]
    MissingHeader,
    #[error("invalid header line: {0}")]
    InvalidHeader(String),
    #[error("invalid literal token: {0}")]
    InvalidLiteral(String),
    #[error("variable {variable} outside the declared range 1..={num_of_vars}")]
    VariableOutOfRange { variable: i32, num_of_vars: i32 },
    #[error("unterminated clause at end of input")]
    UnterminatedClause,
}

/*
A function to read a DIMACS CNF file into a clause database.
*/
pub fn read_dimacs(path: &str) -> Result<Formula, ParseError> {
    let contents = fs::read_to_string(path).map_err(|source| ParseError::Io { path: path.to_string(), source })?;
    parse_dimacs(&contents)
}

/*
A function to parse DIMACS CNF text. Lines starting with 'c' are comments. A
single 'p cnf N M' header declares the variable range; each clause is a run of
signed integer tokens terminated by 0 and may span lines. A clause count that
disagrees with the header is tolerated with a warning.
*/
pub fn parse_dimacs(contents: &str) -> Result<Formula, ParseError> {
    let mut formula: Option<Formula> = None;
    let mut pending: Vec<Literal> = Vec::new();
    let mut declared_clauses: usize = 0;
    let mut parsed_clauses: usize = 0;
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if line.starts_with('p') {
            if formula.is_some() {
                return Err(ParseError::InvalidHeader(line.to_string()));
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 4 || tokens[1] != "cnf" {
                return Err(ParseError::InvalidHeader(line.to_string()));
            }
            let num_of_vars: i32 = tokens[2].parse().map_err(|_| ParseError::InvalidHeader(line.to_string()))?;
            declared_clauses = tokens[3].parse().map_err(|_| ParseError::InvalidHeader(line.to_string()))?;
            if num_of_vars < 0 {
                return Err(ParseError::InvalidHeader(line.to_string()));
            }
            formula = Some(Formula::new(num_of_vars));
            continue;
        }
        let database = formula.as_mut().ok_or(ParseError::MissingHeader)?;
        for token in line.split_whitespace() {
            let value: i32 = token.parse().map_err(|_| ParseError::InvalidLiteral(token.to_string()))?;
            if value == 0 {
                database.add_original(std::mem::take(&mut pending))?;
                parsed_clauses += 1;
            } else {
                pending.push(Literal::from_signed(value));
            }
        }
    }
    if !pending.is_empty() {
        return Err(ParseError::UnterminatedClause);
    }
    let formula = formula.ok_or(ParseError::MissingHeader)?;
    if parsed_clauses != declared_clauses {
        warn!("header declares {} clauses but {} were parsed", declared_clauses, parsed_clauses);
    }
    Ok(formula)
}

/*
A function to write the solver verdict. A model is written as space-separated
signed integers, positive for true; unsatisfiable instances get the single
character 0.
*/
pub fn write_solution(path: &str, solution: &Option<Vec<(i32, bool)>>) -> io::Result<()> {
    match solution {
        None => fs::write(path, "0"),
        Some(assignment) => {
            let rendered: Vec<String> = assignment
                .iter()
                .map(|(variable, value)| if *value { variable.to_string() } else { format!("-{}", variable) })
                .collect();
            fs::write(path, rendered.join(" "))
        }
    }
}

/*
A function to read a written solution back into (variable, value) pairs.
*/
#[allow(dead_code)]
pub fn read_solution(path: &str) -> io::Result<Vec<(i32, bool)>> {
    let contents = fs::read_to_string(path)?;
    let solution = contents
        .split_whitespace()
        .filter_map(|token| token.parse::<i32>().ok())
        .filter(|value| *value != 0)
        .map(|value| (value.abs(), value > 0))
        .collect();
    Ok(solution)
}

/*
A function to render an assignment as rows of "variable: value" pairs, six to
a row, sorted by variable.
*/
pub fn pretty_print_solution(solution: &[(i32, bool)]) -> String {
    let mut sorted: Vec<(i32, bool)> = solution.to_vec();
    sorted.sort_by_key(|entry| entry.0);
    let mut lines = Vec::new();
    for chunk in sorted.chunks(6) {
        let rendered: Vec<String> = chunk.iter().map(|(variable, value)| format!("{}: {}", variable, value)).collect();
        lines.push(rendered.join(",\t"));
    }
    lines.join("\n")
}

/*
A function to check an assignment against the input clauses: every original
clause must contain at least one literal made true. Learned clauses are
implied by the originals and are not consulted.
*/
pub fn check_assignment(formula: &Formula, solution: &[(i32, bool)]) -> bool {
    let values: HashMap<i32, bool> = solution.iter().cloned().collect();
    for clause in &formula.clause_list {
        if clause.origin == ClauseOrigin::Learned {
            continue;
        }
        let satisfied = clause
            .literals
            .iter()
            .any(|literal| values.get(&literal.number).map_or(false, |value| literal.eval(*value)));
        if !satisfied {
            return false;
        }
    }
    true
}
