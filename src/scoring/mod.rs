//! Textual resemblance between a sentence and a candidate document.
//!
//! Two complementary signals are computed over the same token stream
//! (see [`crate::text::tokenize`]):
//!
//! - **Cosine** over term-frequency vectors catches paraphrase: reordered or
//!   lightly reworded text that keeps the same vocabulary.
//! - **N-gram overlap** over contiguous token windows catches near-verbatim
//!   phrase copying even when the surrounding document is much larger.
//!
//! The [`SimilarityScore::combined`] value is the larger of the two, so a
//! conclusive signal is never diluted by a weak one.
//!
//! All functions are pure and cheap relative to network latency; they never
//! suspend.

pub mod similarity;
pub mod types;


pub use similarity::{cosine_similarity, ngram_similarity};
pub use types::{SimilarityScore, to_percent};
