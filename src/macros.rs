//! Utility macros for the generator.
//!
//! This module defines helper macros used by the state catalogues:
//!
//! - `MK_RULE!` - Creates a single-token Rule, optionally with a transition
//! - `MK_BYGROUPS!` - Creates a Rule with one token per capture group
//!
//! These macros keep the rule tables readable.

/// Creates a single-token Rule.
///
/// # Arguments
///
/// * `$pattern` - The regex pattern
/// * `$token` - The TokenType for the whole match
/// * `$state` - Optional transition hint: `""` pops, any other name is pushed
///
/// # Example
///
/// ```ignore
/// let rule = MK_RULE!(r"\$\w+", TokenType::NameVariable);
/// let push = MK_RULE!(r"\(", TokenType::LiteralStringInterpol, "interpolation");
/// let pop = MK_RULE!(r"\)", TokenType::LiteralStringInterpol, "");
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:expr, $token:expr) => {
        $crate::lexer::rules::create_rule(&$pattern, $token, None)
    };
    ($pattern:expr, $token:expr, $state:expr) => {
        $crate::lexer::rules::create_rule(&$pattern, $token, Some($state))
    };
}

/// Creates a Rule assigning one TokenType per capture group.
///
/// # Arguments
///
/// * `$pattern` - The regex pattern
/// * `$token` - One TokenType per capture group, left to right
///
/// # Example
///
/// ```ignore
/// let rule = MK_BYGROUPS!(r"(def|alias)(\s+)(\w+)", TokenType::Keyword, TokenType::TextWhitespace, TokenType::NameFunction);
/// ```
#[macro_export]
macro_rules! MK_BYGROUPS {
    ($pattern:expr, $($token:expr),+ $(,)?) => {
        $crate::lexer::rules::create_by_groups_rule(&$pattern, &[$($token),+])
    };
}
