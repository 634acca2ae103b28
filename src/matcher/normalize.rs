/// Quote-like characters removed before comparison
const STRIPPED_QUOTES: [char; 7] = [
    '"', '\'', '`', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}',
];

/// Canonicalize a string for containment comparison.
///
/// Lower-cases, drops quote-like characters, collapses whitespace runs to a
/// single space and trims both ends. Quotes are dropped before whitespace is
/// collapsed so that `normalize(normalize(s)) == normalize(s)` always holds.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;

    for c in s.chars().flat_map(char::to_lowercase) {
        if STRIPPED_QUOTES.contains(&c) {
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }

    out
}

/// Like [`normalize`], for optional input; `None` yields an empty string
pub fn normalize_opt(s: Option<&str>) -> String {
    s.map(normalize).unwrap_or_default()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod normalize_tests;
