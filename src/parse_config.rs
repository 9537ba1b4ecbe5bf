use std::fs::File;

use log::warn;
use serde_json::Value;

use crate::data_structures::{Config, LiteralSelection, SolverType};

/*
A function to read the solver configuration from ./config.json. Every key is
optional and a missing or unreadable file simply yields the defaults, so the
command line stays `solver <input.cnf> <output.txt>`.

Recognised keys, all under "SolverOptions":
- SolverType: "cdcl" or "dpll"
- LiteralSelection: "ordered" or "vss"
- Preprocess: Boolean
- PureLiteralDeletion: Boolean
- TimeoutSeconds: number or "infinity"
- DecisionLimit: number or "infinity"
*/
pub fn read_config_json() -> Config {
    let mut config = Config::new();
    let file = match File::open("./config.json") {
        Ok(file) => file,
        Err(_) => return config,
    };
    let json: Value = match serde_json::from_reader(file) {
        Ok(json) => json,
        Err(error) => {
            warn!("config.json is not valid JSON, using defaults: {}", error);
            return config;
        }
    };
    let solver_options = match json.get("SolverOptions") {
        Some(options) => options,
        None => return config,
    };
    if let Some(value) = solver_options.get("SolverType") {
        match read_solver_type_json(value) {
            Some(solver_type) => config.solver_type = solver_type,
            None => warn!("SolverType should be a valid solver: CDCL or DPLL"),
        }
    }
    if let Some(value) = solver_options.get("LiteralSelection") {
        match read_literal_selection_json(value) {
            Some(literal_selection) => config.literal_selection = literal_selection,
            None => warn!("LiteralSelection should be a valid type: VSS or Ordered"),
        }
    }
    if let Some(value) = solver_options.get("Preprocess") {
        match read_boolean_json(value) {
            Some(pre_process) => config.pre_process = pre_process,
            None => warn!("Preprocess should be a Boolean value"),
        }
    }
    if let Some(value) = solver_options.get("PureLiteralDeletion") {
        match read_boolean_json(value) {
            Some(pure_literal_deletion) => config.pure_literal_deletion = pure_literal_deletion,
            None => warn!("PureLiteralDeletion should be a Boolean value"),
        }
    }
    if let Some(value) = solver_options.get("TimeoutSeconds") {
        match read_number_json_u64(value) {
            Some(timeout_seconds) => config.timeout_seconds = timeout_seconds,
            None => warn!("TimeoutSeconds should be a valid number or 'infinity'"),
        }
    }
    if let Some(value) = solver_options.get("DecisionLimit") {
        match read_number_json_usize(value) {
            Some(decision_limit) => config.decision_limit = decision_limit,
            None => warn!("DecisionLimit should be a valid number or 'infinity'"),
        }
    }
    return config;
}

/*
A function to read u64 numbers from json. The string "infinity" maps to
u64::MAX. Returns None if invalid.
*/
pub fn read_number_json_u64(value: &Value) -> Option<u64> {
    if value.is_number() && value.is_u64() {
        return value.as_u64();
    } else if value.is_string() {
        if value.as_str().unwrap().to_lowercase().eq("infinity") {
            return Some(u64::MAX);
        }
    }
    return None;
}

/*
A function to read usize numbers from json. The string "infinity" maps to
usize::MAX. Returns None if invalid.
*/
pub fn read_number_json_usize(value: &Value) -> Option<usize> {
    if value.is_number() && value.is_u64() {
        return Some(value.as_u64().unwrap() as usize);
    } else if value.is_string() {
        if value.as_str().unwrap().to_lowercase().eq("infinity") {
            return Some(usize::MAX);
        }
    }
    return None;
}

/*
A function to read SolverType objects from json. Returns the SolverType or
None if invalid.
*/
pub fn read_solver_type_json(value: &Value) -> Option<SolverType> {
    if value.is_string() {
        if value.as_str().unwrap().to_lowercase().eq("cdcl") {
            return Some(SolverType::CDCL);
        } else if value.as_str().unwrap().to_lowercase().eq("dpll") {
            return Some(SolverType::DPLL);
        }
    }
    return None;
}

/*
A function to read LiteralSelection objects from json. Returns the
LiteralSelection or None if invalid.
*/
pub fn read_literal_selection_json(value: &Value) -> Option<LiteralSelection> {
    if value.is_string() {
        if value.as_str().unwrap().to_lowercase().eq("vss") {
            return Some(LiteralSelection::VariableStateSum);
        } else if value.as_str().unwrap().to_lowercase().eq("ordered") {
            return Some(LiteralSelection::Ordered);
        }
    }
    return None;
}

/*
A function to read Boolean values from json. Returns the Boolean value or None
if invalid.
*/
pub fn read_boolean_json(value: &Value) -> Option<bool> {
    if value.is_boolean() {
        return value.as_bool();
    } else {
        return None;
    }
}
