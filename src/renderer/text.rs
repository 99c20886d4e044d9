//! Escaping of user text in library lines
//!
//! `DEF` and `X` lines are split on whitespace, so names there must be a
//! single non-empty token. Field text is quoted.

/// Make `s` a single whitespace-free token; empty becomes `~`
pub fn token(s: &str) -> String {
    if s.is_empty() {
        return "~".to_string();
    }
    s.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Escape text placed between double quotes
pub fn quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
