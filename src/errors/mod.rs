//! Error types and error handling for the generator.
//!
//! This module defines the errors raised while assembling and emitting a
//! lexer definition. It includes:
//!
//! - Error structures carrying the state/rule location of the failure
//! - Specific error variants for validation and emission
//! - Human readable tips for each failure

pub mod errors;
