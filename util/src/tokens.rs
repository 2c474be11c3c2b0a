//! Whitespace tokenization with quote awareness.

/// Scans `s` and returns its tokens.
///
/// Tokens are separated by whitespace, unless they are within single or
/// double quotes, in which case the whitespace is preserved inside the
/// token. The other quote kind appearing inside a quoted token is kept
/// verbatim.
pub fn scan_tokens(s: &str) -> Vec<String> {
    let s = s.trim();
    if s.is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes: Option<char> = None;

    for c in s.chars() {
        if c.is_whitespace() {
            if in_quotes.is_some() {
                current.push(c);
            } else if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else if c == '"' || c == '\'' {
            match in_quotes {
                None => in_quotes = Some(c),
                Some(open) if open == c => in_quotes = None,
                Some(_) => current.push(c),
            }
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
