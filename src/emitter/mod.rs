//! Serialization of finished lexer definitions.
//!
//! The core never touches output syntax; this module writes a validated
//! `LexerDefinition` either as the engine's XML lexer format or as JSON.

pub mod emitter;
pub mod xml;

#[cfg(test)]
mod tests;
