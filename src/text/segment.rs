use serde::Serialize;

/// A checkable unit of the input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Position among the retained sentences (0-based, document order).
    pub index: usize,
    /// Trimmed sentence text, without its terminal punctuation.
    pub text: String,
}

impl Sentence {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Splits `text` on runs of `.`, `!` and `?`.
///
/// Pieces are trimmed; pieces of `min_chars` characters or fewer are dropped
/// and at most `max_sentences` are kept. Indices are assigned after filtering,
/// so they are dense and follow document order.
pub fn segment_sentences(text: &str, min_chars: usize, max_sentences: usize) -> Vec<Sentence> {
    text.split(TERMINATORS)
        .map(str::trim)
        .filter(|piece| piece.chars().count() > min_chars)
        .take(max_sentences)
        .enumerate()
        .map(|(index, piece)| Sentence::new(index, piece))
        .collect()
}
