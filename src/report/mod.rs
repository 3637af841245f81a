//! Report types and the document-level fold.

pub mod aggregate;
pub mod types;


pub use aggregate::aggregate;
pub use types::{PlagiarismReport, SentenceResult, SourceMatch};
