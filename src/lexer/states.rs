use serde::Serialize;

use crate::{MK_BYGROUPS, MK_RULE};

use super::{
    patterns::word_boundary_pattern,
    rules::{create_include, Rule},
    tokens::{TokenType, WordLists},
};

pub const ROOT: &str = "root";
pub const BASIC: &str = "basic";
pub const DATA: &str = "data";
pub const INTERPOLATED_STRING: &str = "interpolated_string";
pub const INTERPOLATION: &str = "interpolation";

/// A named, ordered rule list. Rules are tried top to bottom and the first
/// match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct State {
    pub name: String,
    pub rules: Vec<Rule>,
}

impl State {
    pub fn new(name: &str, rules: Vec<Rule>) -> Self {
        log::debug!("Assembled state `{}` with {} rules", name, rules.len());

        State {
            name: name.to_string(),
            rules,
        }
    }
}

/// `basic` is tried before `data`, so keywords win over the catch-all text rule.
pub fn root_rules() -> Vec<Rule> {
    vec![create_include(BASIC), create_include(DATA)]
}

pub fn basic_rules(words: &WordLists) -> Vec<Rule> {
    let mut rules = vec![
        MK_RULE!(r"\A#!.+\n", TokenType::CommentHashbang),
        MK_RULE!(r"#.*\n", TokenType::CommentSingle),
    ];

    // An empty list would produce an empty pattern matching everywhere.
    let word_classes = [
        (&words.keywords, TokenType::Keyword),
        (&words.builtins, TokenType::NameBuiltin),
        (&words.constants, TokenType::KeywordConstant),
    ];
    for (list, token) in word_classes {
        if list.is_empty() {
            continue;
        }
        let pattern = format!(r"{}(\s*)", word_boundary_pattern(list));
        rules.push(MK_BYGROUPS!(pattern, token, TokenType::TextWhitespace));
    }

    rules.extend([
        // External commands
        MK_BYGROUPS!(r"(\^)(\w+)", TokenType::Operator, TokenType::NameFunction),

        MK_BYGROUPS!(
            r"(def|alias)(\s+)(\w+)",
            TokenType::Keyword,
            TokenType::TextWhitespace,
            TokenType::NameFunction
        ),
        MK_BYGROUPS!(
            r"(\$?\w+)(\s*)(=|\+=|-=|\*=|/=|\+\+=)",
            TokenType::NameVariable,
            TokenType::TextWhitespace,
            TokenType::Operator
        ),
        MK_RULE!(r"\$\w+", TokenType::NameVariable),

        // Flags must come before the arithmetic operators claim the dash
        MK_RULE!(r"--\w+(-\w+)*", TokenType::NameAttribute),
        MK_RULE!(r"-\w", TokenType::NameAttribute),

        MK_RULE!(r"==|!=|<=|>=|<|>", TokenType::Operator),
        MK_RULE!(r"\+|-|\*|/|%|\*\*", TokenType::Operator),
        MK_RULE!(r"and|or|not|in", TokenType::Operator),
        MK_RULE!(r"=~|!~|like|not-like", TokenType::Operator),
        MK_RULE!(r"&&|\|\|", TokenType::Operator),

        // Redirection: plain, append, pipe
        MK_RULE!(r"o>|out>|e>|err>|e\+o>|err\+out>|o\+e>|out\+err>", TokenType::Operator),
        MK_RULE!(r"o>>|out>>|e>>|err>>|e\+o>>|err\+out>>|o\+e>>|out\+err>>", TokenType::Operator),
        MK_RULE!(r"e>\||err>\||e\+o>\||err\+out>\||o\+e>\||out\+err>\|", TokenType::Operator),

        MK_RULE!(r"\.\.=?|\.\.<?", TokenType::Operator),
        MK_RULE!(r"\|", TokenType::Operator),
        MK_RULE!(r"=>", TokenType::Operator),

        MK_RULE!(r"[\[\]{}()]", TokenType::Punctuation),
        MK_RULE!(r"[,;]", TokenType::PunctuationSpecial),
        MK_RULE!(r"\.\.\.", TokenType::PunctuationSpecial),
        MK_RULE!(r"[@:]", TokenType::PunctuationSpecial),
        MK_RULE!(r"->", TokenType::PunctuationSpecial),
    ]);

    rules
}

pub fn data_rules() -> Vec<Rule> {
    vec![
        MK_RULE!(r"0x[0-9a-fA-F]+", TokenType::LiteralNumber),
        MK_RULE!(r"0b[01]+", TokenType::LiteralNumber),
        MK_RULE!(r"0o[0-7]+", TokenType::LiteralNumber),
        MK_RULE!(r"\d+(\.\d+)?([eE][+-]?\d+)?", TokenType::LiteralNumber),

        // Durations and file sizes
        MK_RULE!(r"\d+(\.\d+)?(ns|us|ms|sec|min|hr|day|wk)", TokenType::LiteralNumber),
        MK_RULE!(
            r"\d+(\.\d+)?(B|KB|MB|GB|TB|PB|EB|ZB|YB|KiB|MiB|GiB|TiB|PiB|EiB|ZiB|YiB)",
            TokenType::LiteralNumber
        ),

        MK_RULE!(
            r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:\d{2})",
            TokenType::LiteralNumber
        ),
        MK_RULE!(r"\d{4}-\d{2}-\d{2}", TokenType::LiteralNumber),

        MK_RULE!(r##"r#"[^"]*"#"##, TokenType::LiteralString),
        MK_RULE!(r"r'[^']*'", TokenType::LiteralString),

        MK_RULE!(r#"\$""#, TokenType::LiteralStringDouble, INTERPOLATED_STRING),
        MK_RULE!(r#""([^"\\]|\\.)*""#, TokenType::LiteralStringDouble),
        MK_RULE!(r"'([^'\\]|\\.)*'", TokenType::LiteralStringSingle),

        MK_RULE!(r#"\\[\\'"nrt0$]"#, TokenType::LiteralStringEscape),
        MK_RULE!(r"\\x[0-9a-fA-F]{2}", TokenType::LiteralStringEscape),
        MK_RULE!(r"\\u\{[0-9a-fA-F]+\}", TokenType::LiteralStringEscape),

        MK_RULE!(r"\s+", TokenType::TextWhitespace),

        // Catch-all, keep last
        MK_RULE!(r#"[^\s\[\]{}()$"'`\\<>&|;#]+"#, TokenType::Text),
    ]
}

pub fn interpolated_string_rules() -> Vec<Rule> {
    vec![
        MK_RULE!(r#"""#, TokenType::LiteralStringDouble, ""),
        MK_RULE!(r"\(", TokenType::LiteralStringInterpol, INTERPOLATION),
        MK_RULE!(r#"([^"\\(]|\\.)+"#, TokenType::LiteralStringDouble),
    ]
}

/// Re-enters `root` so expressions inside `$"...(expr)..."` get the full grammar.
pub fn interpolation_rules() -> Vec<Rule> {
    vec![
        MK_RULE!(r"\)", TokenType::LiteralStringInterpol, ""),
        create_include(ROOT),
    ]
}

/// The five states in emission order.
pub fn assemble_states(words: &WordLists) -> Vec<State> {
    vec![
        State::new(ROOT, root_rules()),
        State::new(BASIC, basic_rules(words)),
        State::new(DATA, data_rules()),
        State::new(INTERPOLATED_STRING, interpolated_string_rules()),
        State::new(INTERPOLATION, interpolation_rules()),
    ]
}
