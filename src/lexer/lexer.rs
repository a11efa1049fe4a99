use serde::Serialize;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Location,
};

use super::{
    rules::Rule,
    states::{assemble_states, State},
    tokens::WordLists,
};

/// Display metadata of the generated lexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexerConfig {
    pub name: String,
    pub alias: String,
    pub filename: String,
    pub mime_type: String,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            name: String::from("Nu"),
            alias: String::from("nu"),
            filename: String::from("*.nu"),
            mime_type: String::from("text/plain"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexerDefinition {
    pub config: LexerConfig,
    pub states: Vec<State>,
}

impl LexerDefinition {
    pub fn new(config: LexerConfig, states: Vec<State>) -> Self {
        LexerDefinition { config, states }
    }

    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|state| state.name == name)
    }

    pub fn state_names(&self) -> Vec<&str> {
        self.states.iter().map(|state| state.name.as_str()).collect()
    }

    pub fn rule_count(&self) -> usize {
        self.states.iter().map(|state| state.rules.len()).sum()
    }

    /// Returns the effective rule list of `name`, with every include replaced
    /// by the rules of the included state, in order.
    ///
    /// Pushes are not followed; only an include chain that loops back onto
    /// itself is an error.
    pub fn resolve_rules(&self, name: &str) -> Result<Vec<&Rule>, Error> {
        let mut resolved = vec![];
        let mut chain = vec![];
        self.resolve_into(name, &mut chain, &mut resolved, Location::null())?;
        Ok(resolved)
    }

    fn resolve_into<'a>(
        &'a self,
        name: &str,
        chain: &mut Vec<String>,
        resolved: &mut Vec<&'a Rule>,
        location: Location,
    ) -> Result<(), Error> {
        if chain.iter().any(|entered| entered == name) {
            let mut cycle = chain.clone();
            cycle.push(name.to_string());
            return Err(Error::new(ErrorImpl::IncludeCycle { cycle }, location));
        }

        let state = self.state(name).ok_or_else(|| {
            Error::new(
                ErrorImpl::UndefinedState {
                    state: name.to_string(),
                    referenced_from: chain.last().cloned().unwrap_or_default(),
                },
                location.clone(),
            )
        })?;

        chain.push(name.to_string());
        for (index, rule) in state.rules.iter().enumerate() {
            match rule.include_target() {
                Some(target) => {
                    self.resolve_into(target, chain, resolved, Location::rule(name, index))?
                }
                None => resolved.push(rule),
            }
        }
        chain.pop();

        Ok(())
    }
}

/// Composes the metadata and the five Nu states, in the fixed order
/// root, basic, data, interpolated_string, interpolation.
pub fn generate_lexer(config: LexerConfig, words: &WordLists) -> LexerDefinition {
    LexerDefinition::new(config, assemble_states(words))
}
