use crate::constants::MAX_SHORT_TOKEN_CHARS;

use super::stopwords::is_stop_word;

/// Lowercases `text` and removes every character that is neither a word
/// character (alphanumeric or `_`) nor whitespace.
///
/// Punctuation is deleted, not replaced, so `"don't"` becomes `"dont"`.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Splits `text` into scoring tokens.
///
/// Tokens are normalized, split on whitespace runs, and filtered: tokens of
/// [`MAX_SHORT_TOKEN_CHARS`] characters or fewer and stop words are dropped.
/// Order and duplicates are preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|word| word.chars().count() > MAX_SHORT_TOKEN_CHARS && !is_stop_word(word))
        .map(str::to_string)
        .collect()
}
