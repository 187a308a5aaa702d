/// Whitespace as browsers' `trim` and `\s` see it: Unicode white space
/// plus the byte-order mark U+FEFF.
pub fn is_text_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// True when `text` has nothing but whitespace (BOM included).
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_text_whitespace)
}

/// Number of maximal non-whitespace runs in `text`.
pub fn word_count(text: &str) -> usize {
    text.split(is_text_whitespace)
        .filter(|word| !word.is_empty())
        .count()
}
