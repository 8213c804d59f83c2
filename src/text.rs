/// String helpers that count and cut in UTF-16 code units, the unit the
/// browser uses for string length
use regex::Regex;
use std::sync::OnceLock;

/// Length in UTF-16 code units
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Cut `s` to at most `max` UTF-16 code units. No word-boundary handling;
/// a character whose surrogate pair would straddle the limit is dropped.
pub fn truncate_utf16(s: &str, max: usize) -> &str {
    let mut units = 0;
    for (idx, ch) in s.char_indices() {
        units += ch.len_utf16();
        if units > max {
            return &s[..idx];
        }
    }
    s
}

/// Replace every whitespace run with a single space, then trim
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn sentence_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"))
}

/// Split on runs of `.`, `!`, `?`, keeping pieces whose trimmed length
/// exceeds `min_len` code units. Kept pieces are returned untrimmed.
pub fn sentences_longer_than(text: &str, min_len: usize) -> Vec<&str> {
    sentence_break()
        .split(text)
        .filter(|piece| utf16_len(piece.trim()) > min_len)
        .collect()
}

/// Number of pieces `text.split(' ')` yields (an empty string is one piece)
pub fn space_token_count(text: &str) -> usize {
    text.split(' ').count()
}
