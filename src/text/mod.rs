//! Text normalization, tokenization and sentence segmentation.
//!
//! Everything here is pure: no I/O, no shared mutable state. The stop-word
//! set is built once on first use and only read afterwards, so it is safe to
//! call from any number of concurrent sentence pipelines.

pub mod segment;
pub mod stopwords;
pub mod tokenize;


pub use segment::{Sentence, segment_sentences};
pub use stopwords::{is_stop_word, stop_word_count};
pub use tokenize::{normalize, tokenize};
