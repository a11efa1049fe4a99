use lazy_static::lazy_static;
use serde::Serialize;
use std::fmt::Display;

lazy_static! {
    /// Word lists for Nushell, taken from the tree-sitter-nu highlight queries.
    pub static ref NU_WORDS: WordLists = WordLists {
        keywords: word_list(&[
            "def", "alias", "export-env", "export", "extern", "module",
            "let", "let-env", "mut", "const", "hide-env", "source", "source-env",
            "overlay", "loop", "while", "error", "do", "if", "else", "try", "catch", "match",
            "break", "continue", "return", "hide", "use", "for", "in", "list", "new", "as", "make",
        ]),
        builtins: word_list(&[
            "all", "ansi", "any", "append", "ast", "bits", "bytes", "cal", "cd", "char", "clear",
            "collect", "columns", "compact", "complete", "config", "cp", "date", "debug",
            "decode", "default", "detect", "dfr", "drop", "du", "each", "encode", "enumerate",
            "every", "exec", "exit", "explain", "explore", "export-env", "fill", "filter",
            "find", "first", "flatten", "fmt", "format", "from", "generate", "get", "glob",
            "grid", "group", "group-by", "hash", "headers", "histogram", "history", "http",
            "input", "insert", "inspect", "interleave", "into", "is-empty", "is-not-empty",
            "is-terminal", "items", "join", "keybindings", "kill", "last", "length",
            "let-env", "lines", "load-env", "ls", "math", "merge", "metadata", "mkdir",
            "mktemp", "move", "mv", "nu-check", "nu-highlight", "open", "panic", "par-each",
            "parse", "path", "plugin", "port", "prepend", "print", "ps", "query", "random",
            "range", "reduce", "reject", "rename", "reverse", "rm", "roll", "rotate",
            "run-external", "save", "schema", "select", "seq", "shuffle", "skip", "sleep",
            "sort", "sort-by", "split", "split-by", "start", "stor", "str", "sys", "table",
            "take", "tee", "term", "timeit", "to", "touch", "transpose", "tutor", "ulimit",
            "uname", "uniq", "uniq-by", "update", "upsert", "url", "values", "view", "watch",
            "where", "which", "whoami", "window", "with-env", "wrap", "zip",
        ]),
        constants: word_list(&["true", "false", "null", "nothing"]),
    };
}

fn word_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

/// The curated word lists a lexer is generated from.
///
/// Order inside a list does not matter, the alternation builder reorders
/// words longest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordLists {
    pub keywords: Vec<String>,
    pub builtins: Vec<String>,
    pub constants: Vec<String>,
}

/// Token classifications understood by the highlighting engine.
///
/// The variant names are the engine's token type names verbatim.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum TokenType {
    Keyword,
    KeywordConstant,
    KeywordNamespace,
    KeywordType,

    NameFunction,
    NameBuiltin,
    NameVariable,
    NameAttribute,
    NameConstant,

    LiteralNumber,
    LiteralString,
    LiteralStringDouble,
    LiteralStringSingle,
    LiteralStringEscape,
    LiteralStringInterpol,

    CommentSingle,
    CommentHashbang,

    Operator,
    Punctuation,
    PunctuationSpecial,

    Text,
    TextWhitespace,
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
