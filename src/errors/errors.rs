use std::fmt::Display;

use thiserror::Error;

use crate::Location;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    location: Location,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, location: Location) -> Self {
        Error {
            internal_error: error_impl,
            location,
        }
    }

    pub fn get_location(&self) -> &Location {
        &self.location
    }

    pub fn get_internal(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UndefinedState { .. } => "UndefinedState",
            ErrorImpl::CaptureCountMismatch { .. } => "CaptureCountMismatch",
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
            ErrorImpl::EmptyPattern => "EmptyPattern",
            ErrorImpl::DuplicateState { .. } => "DuplicateState",
            ErrorImpl::IncludeCycle { .. } => "IncludeCycle",
            ErrorImpl::MissingRootState => "MissingRootState",
            ErrorImpl::WriteFailed { .. } => "WriteFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UndefinedState {
                state,
                referenced_from,
            } => ErrorTip::Suggestion(format!(
                "State `{}` is referenced from `{}` but never defined",
                state, referenced_from
            )),
            ErrorImpl::CaptureCountMismatch {
                pattern,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Pattern `{}` has {} capture groups, but {} tokens were given",
                pattern, expected, received
            )),
            ErrorImpl::InvalidPattern { pattern, message } => {
                ErrorTip::Suggestion(format!("Pattern `{}` does not compile: {}", pattern, message))
            }
            ErrorImpl::EmptyPattern => ErrorTip::Suggestion(String::from(
                "Empty patterns match everywhere, was the word list empty?",
            )),
            ErrorImpl::DuplicateState { state } => {
                ErrorTip::Suggestion(format!("State `{}` is defined more than once", state))
            }
            ErrorImpl::IncludeCycle { cycle } => ErrorTip::Suggestion(format!(
                "Include chain `{}` never consumes input, use a push instead",
                cycle.join(" -> ")
            )),
            ErrorImpl::MissingRootState => ErrorTip::None,
            ErrorImpl::WriteFailed { path, message } => {
                ErrorTip::Suggestion(format!("Could not write `{}`: {}", path, message))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.internal_error, self.location)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("state {state:?} referenced from {referenced_from:?} is not defined")]
    UndefinedState {
        state: String,
        referenced_from: String,
    },
    #[error("capture count mismatch in {pattern:?}: expected {expected:?}, received {received:?}")]
    CaptureCountMismatch {
        pattern: String,
        expected: usize,
        received: usize,
    },
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("empty pattern")]
    EmptyPattern,
    #[error("state {state:?} defined more than once")]
    DuplicateState { state: String },
    #[error("include cycle: {cycle:?}")]
    IncludeCycle { cycle: Vec<String> },
    #[error("no root state defined")]
    MissingRootState,
    #[error("failed to write {path:?}: {message}")]
    WriteFailed { path: String, message: String },
}
