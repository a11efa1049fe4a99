use std::collections::{HashSet, VecDeque};

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Location,
};

use super::{lexer::LexerDefinition, rules::Rule, states::ROOT};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// States reachable from root through includes and pushes, in discovery order.
    pub reachable: Vec<String>,
    /// Defined but never entered. Not an error, the engine just never uses them.
    pub unreachable: Vec<String>,
}

/// Checks a definition before it is handed to the emitter.
///
/// Fails on the first duplicate state name, empty pattern, push or include
/// of an undefined state, include cycle, or by-groups rule whose token count
/// differs from its pattern's capture groups. Pops are not paired with pushes
/// here, the consuming engine owns the state stack.
pub fn validate(definition: &LexerDefinition) -> Result<ValidationReport, Error> {
    let mut seen = HashSet::new();
    for state in &definition.states {
        if !seen.insert(state.name.as_str()) {
            return Err(Error::new(
                ErrorImpl::DuplicateState {
                    state: state.name.clone(),
                },
                Location::state(&state.name),
            ));
        }
    }

    if !seen.contains(ROOT) {
        return Err(Error::new(ErrorImpl::MissingRootState, Location::null()));
    }

    for state in &definition.states {
        for (index, rule) in state.rules.iter().enumerate() {
            validate_rule(rule, &seen, Location::rule(&state.name, index), &state.name)?;
        }
    }

    for state in &definition.states {
        definition.resolve_rules(&state.name)?;
    }

    Ok(reachability(definition))
}

fn validate_rule(
    rule: &Rule,
    defined: &HashSet<&str>,
    location: Location,
    state: &str,
) -> Result<(), Error> {
    if let Some(target) = rule.referenced_state() {
        if !defined.contains(target) {
            return Err(Error::new(
                ErrorImpl::UndefinedState {
                    state: target.to_string(),
                    referenced_from: state.to_string(),
                },
                location,
            ));
        }
    }

    if let Some("") = rule.pattern() {
        return Err(Error::new(ErrorImpl::EmptyPattern, location));
    }

    if let Rule::MatchGroups { pattern, tokens, .. } = rule {
        let expected = capture_count(pattern).map_err(|message| {
            Error::new(
                ErrorImpl::InvalidPattern {
                    pattern: pattern.clone(),
                    message,
                },
                location.clone(),
            )
        })?;

        if expected != tokens.len() {
            return Err(Error::new(
                ErrorImpl::CaptureCountMismatch {
                    pattern: pattern.clone(),
                    expected,
                    received: tokens.len(),
                },
                location,
            ));
        }
    }

    Ok(())
}

/// Number of capture groups in `pattern`, not counting the implicit whole match.
pub fn capture_count(pattern: &str) -> Result<usize, String> {
    let regex = Regex::new(pattern).map_err(|err| err.to_string())?;
    Ok(regex.captures_len() - 1)
}

fn reachability(definition: &LexerDefinition) -> ValidationReport {
    let mut reachable = vec![ROOT.to_string()];
    let mut queue = VecDeque::from([ROOT]);

    while let Some(name) = queue.pop_front() {
        let Some(state) = definition.state(name) else {
            continue;
        };

        for target in state.rules.iter().filter_map(Rule::referenced_state) {
            if !reachable.iter().any(|entered| entered == target) {
                reachable.push(target.to_string());
                queue.push_back(target);
            }
        }
    }

    let unreachable = definition
        .state_names()
        .into_iter()
        .filter(|name| !reachable.iter().any(|entered| entered == name))
        .map(String::from)
        .collect();

    ValidationReport {
        reachable,
        unreachable,
    }
}
