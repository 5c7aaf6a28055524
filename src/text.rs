//! Text normalization and word extraction.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: strip diacritics, lowercase, and collapse
/// whitespace.
///
/// This folds accented and plain spellings together, which matters for
/// Romanian catalog text typed on ASCII keyboards:
/// - "Țeavă" → "teava"
/// - "Flanșă" → "flansa"
/// - "REDUCŢIE" → "reductie"
///
/// Decomposition runs first (NFD), so every diacritic becomes a separate
/// combining mark that can be dropped before lowercasing. Interior
/// whitespace runs collapse to single spaces and the ends are trimmed.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(value: &str) -> String {
    let stripped: String = value.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let lowered = stripped.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    for word in lowered.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Extract indexable words from normalized text.
///
/// Words are maximal alphanumeric runs. Mixed digit/letter tokens also yield
/// their embedded digit runs, so a product described as "20mm" is findable
/// by a bare "20".
pub fn extract_words(normalized: &str) -> Vec<String> {
    let mut words = Vec::new();
    for token in normalized.split(|c: char| !c.is_alphanumeric()) {
        if token.is_empty() {
            continue;
        }
        words.push(token.to_string());
        let has_digit = token.bytes().any(|b| b.is_ascii_digit());
        if has_digit && !is_all_digits(token) {
            for run in token.split(|c: char| !c.is_ascii_digit()) {
                if !run.is_empty() {
                    words.push(run.to_string());
                }
            }
        }
    }
    words
}

/// True when the string is non-empty and consists solely of ASCII digits.
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// True when the string begins with an ASCII digit (code-shaped query).
pub fn starts_with_digit(s: &str) -> bool {
    s.as_bytes().first().is_some_and(|b| b.is_ascii_digit())
}

/// Check whether `word` occurs in `text` delimited by non-alphanumeric
/// characters (or the string edges).
///
/// This is the word-boundary containment probe used by the scorer. `word`
/// may itself contain spaces or punctuation ("filet interior", "1/2"); only
/// its outer edges are boundary-checked.
pub fn contains_word(text: &str, word: &str) -> bool {
    if word.is_empty() || word.len() > text.len() {
        return false;
    }
    let mut search_from = 0;
    while let Some(offset) = text[search_from..].find(word) {
        let at = search_from + offset;
        let end = at + word.len();
        let left_open = at == 0
            || !text[..at]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric);
        let right_open = end == text.len()
            || !text[end..].chars().next().is_some_and(char::is_alphanumeric);
        if left_open && right_open {
            return true;
        }
        // Step one char forward; occurrences may overlap when the word
        // contains punctuation.
        search_from = at + text[at..].chars().next().map_or(1, char::len_utf8);
    }
    false
}
