const METACHARACTERS: &[char] = &[
    '\\', '.', '*', '+', '?', '[', ']', '(', ')', '{', '}', '^', '$', '|',
];

/// Escapes every regex metacharacter in `literal` with a backslash.
///
/// Works in a single pass, so a backslash introduced by escaping is never
/// escaped again.
pub fn escape_regex(literal: &str) -> String {
    let mut escaped = String::with_capacity(literal.len());

    for ch in literal.chars() {
        if METACHARACTERS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }

    escaped
}

/// Builds `\b(w1|w2|...)\b` matching any of `words`, longest words first.
///
/// A greedy engine tries alternatives left to right, so `let-env` has to come
/// before `let` or it would stop at the shorter prefix. The sort is stable,
/// words of equal length keep their input order. Returns an empty string for
/// an empty list.
pub fn word_boundary_pattern<S: AsRef<str>>(words: &[S]) -> String {
    if words.is_empty() {
        return String::new();
    }

    let mut sorted = words.iter().map(|word| word.as_ref()).collect::<Vec<&str>>();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));

    let escaped = sorted
        .into_iter()
        .map(escape_regex)
        .collect::<Vec<String>>();

    format!("\\b({})\\b", escaped.join("|"))
}
