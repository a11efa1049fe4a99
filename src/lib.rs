#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::{
        lexer::{generate_lexer, LexerConfig, LexerDefinition},
        tokens::WordLists,
        validate::validate,
    },
};

pub mod emitter;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Where in the lexer definition a problem was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub state: Option<String>,
    pub rule: Option<usize>,
}

impl Location {
    pub fn null() -> Self {
        Location::default()
    }

    pub fn state(state: &str) -> Self {
        Location {
            state: Some(state.to_string()),
            rule: None,
        }
    }

    pub fn rule(state: &str, rule: usize) -> Self {
        Location {
            state: Some(state.to_string()),
            rule: Some(rule),
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.state, self.rule) {
            (Some(state), Some(rule)) => write!(f, "state `{}`, rule #{}", state, rule),
            (Some(state), None) => write!(f, "state `{}`", state),
            _ => write!(f, "<lexer>"),
        }
    }
}

/// Builds the lexer definition for `words` and runs the validation pass over it.
///
/// This is the whole generation pipeline short of emission: nothing is
/// returned unless every push/include target resolves and every by-groups
/// rule has one token per capture group.
pub fn generate(config: LexerConfig, words: &WordLists) -> Result<LexerDefinition, Error> {
    let definition = generate_lexer(config, words);
    let report = validate(&definition)?;

    log::info!(
        "Generated {} lexer: {} states, {} rules",
        definition.config.name,
        definition.states.len(),
        definition.rule_count()
    );
    for state in &report.unreachable {
        log::warn!("State `{}` is not reachable from root", state);
    }

    Ok(definition)
}

pub fn display_error(error: &Error) {
    /*
        error: UndefinedState (State `x` is referenced from `data` but never defined)
        -> state `data`, rule #3
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", error.get_location());
}
