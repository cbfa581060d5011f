//! Text normalization for heuristic matching and for displayed excerpts

/// Minus-like characters folded to ASCII `-`
const MINUS_VARIANTS: [char; 2] = ['\u{2212}', '\u{FF0D}'];

/// LaTeX commands rewritten in excerpts. Longer commands come before
/// their prefixes (`\leq` before `\le`).
const EXCERPT_OPERATORS: [(&str, &str); 7] = [
    ("leq", "<="),
    ("le", "<"),
    ("times", "×"),
    ("neq", "!="),
    ("eq", "="),
    ("geq", ">="),
    ("ge", ">"),
];

/// Normalize a sentence for pattern matching.
///
/// Drops math markup vestiges and separators, folds `10^9+7`, and lowercases.
pub fn normalize_sentence(sentence: &str) -> String {
    let stripped: String = sentence
        .chars()
        .filter(|c| !matches!(c, '\\' | '{' | '}' | ',' | ' ' | '\u{a0}'))
        .map(|c| if MINUS_VARIANTS.contains(&c) { '-' } else { c })
        .collect();

    stripped
        .replace("10^9+7", "1000000007")
        .to_lowercase()
        .trim()
        .to_string()
}

/// Normalize an excerpt shown to downstream consumers
pub fn normalize_excerpt(text: &str) -> String {
    let mut s = text.trim().to_string();
    while s.contains("\r\n") {
        s = s.replace("\r\n", "");
    }
    replace_latex_operators(&s).trim().to_string()
}

fn replace_latex_operators(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let hit = EXCERPT_OPERATORS.iter().find(|(command, _)| {
            after.starts_with(command)
                && !after[command.len()..]
                    .chars()
                    .next()
                    .map_or(false, |c| c.is_ascii_alphabetic())
        });

        match hit {
            Some((command, symbol)) => {
                out.push_str(symbol);
                rest = &after[command.len()..];
            }
            None => {
                out.push('\\');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
