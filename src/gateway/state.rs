use crate::evidence::EvidenceSource;
use crate::fetch::PageFetcher;
use crate::pipeline::PlagiarismChecker;

pub struct HandlerState<E, F> {
    pub checker: PlagiarismChecker<E, F>,

    /// Minimum trimmed length of accepted text.
    pub min_text_chars: usize,
}

impl<E, F> Clone for HandlerState<E, F> {
    fn clone(&self) -> Self {
        Self {
            checker: self.checker.clone(),
            min_text_chars: self.min_text_chars,
        }
    }
}

impl<E, F> HandlerState<E, F>
where
    E: EvidenceSource + 'static,
    F: PageFetcher + 'static,
{
    pub fn new(checker: PlagiarismChecker<E, F>, min_text_chars: usize) -> Self {
        Self {
            checker,
            min_text_chars,
        }
    }
}
