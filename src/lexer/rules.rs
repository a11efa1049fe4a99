use serde::Serialize;

use super::tokens::TokenType;

/// State change performed after a rule matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    None,
    Push(String),
    Pop(u32),
}

impl Transition {
    /// Decodes the transition hint used by the rule builder: no hint means
    /// no transition, an empty name pops one state, anything else is pushed.
    pub fn from_hint(state: Option<&str>) -> Self {
        match state {
            None => Transition::None,
            Some("") => Transition::Pop(1),
            Some(name) => Transition::Push(name.to_string()),
        }
    }

    pub fn push_target(&self) -> Option<&str> {
        match self {
            Transition::Push(state) => Some(state),
            _ => None,
        }
    }

    pub fn pop_count(&self) -> u32 {
        match self {
            Transition::Pop(count) => *count,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// The whole match gets one token type.
    Match {
        pattern: String,
        token: TokenType,
        transition: Transition,
    },
    /// Capture group `i` gets `tokens[i]`.
    MatchGroups {
        pattern: String,
        tokens: Vec<TokenType>,
        transition: Transition,
    },
    /// Inline the rules of another state at this position.
    Include { state: String },
}

impl Rule {
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Rule::Match { pattern, .. } | Rule::MatchGroups { pattern, .. } => Some(pattern),
            Rule::Include { .. } => None,
        }
    }

    pub fn transition(&self) -> Option<&Transition> {
        match self {
            Rule::Match { transition, .. } | Rule::MatchGroups { transition, .. } => {
                Some(transition)
            }
            Rule::Include { .. } => None,
        }
    }

    pub fn include_target(&self) -> Option<&str> {
        match self {
            Rule::Include { state } => Some(state),
            _ => None,
        }
    }

    /// Every state name this rule refers to, through a push or an include.
    pub fn referenced_state(&self) -> Option<&str> {
        self.include_target()
            .or_else(|| self.transition().and_then(Transition::push_target))
    }
}

/// Creates a single-token rule. See [`Transition::from_hint`] for `state`.
pub fn create_rule(pattern: &str, token: TokenType, state: Option<&str>) -> Rule {
    Rule::Match {
        pattern: pattern.to_string(),
        token,
        transition: Transition::from_hint(state),
    }
}

/// Creates a rule assigning one token type per capture group, left to right.
///
/// `tokens.len()` must equal the number of capture groups in `pattern`; this
/// is not checked here, the validation pass rejects a mismatch.
pub fn create_by_groups_rule(pattern: &str, tokens: &[TokenType]) -> Rule {
    Rule::MatchGroups {
        pattern: pattern.to_string(),
        tokens: tokens.to_vec(),
        transition: Transition::None,
    }
}

pub fn create_include(state: &str) -> Rule {
    Rule::Include {
        state: state.to_string(),
    }
}
