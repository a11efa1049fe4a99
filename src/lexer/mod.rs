//! Lexer definition generation.
//!
//! This module turns curated word lists and a fixed rule catalogue into a
//! state-machine lexer definition for the highlighting engine. It handles:
//!
//! - Escaping literal words and building longest-first alternations
//! - Building match, by-groups and include rules with push/pop transitions
//! - Assembling the five Nu states and the lexer metadata
//! - Validating the state graph before emission

pub mod lexer;
pub mod patterns;
pub mod rules;
pub mod states;
pub mod tokens;
pub mod validate;
