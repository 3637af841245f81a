use super::types::{PlagiarismReport, SentenceResult};

/// Folds ordered sentence results into a report.
///
/// An empty input yields zero scores.
pub fn aggregate(results: Vec<SentenceResult>) -> PlagiarismReport {
    let total = results.len();
    if total == 0 {
        return PlagiarismReport::empty();
    }

    let percent_sum: u64 = results.iter().map(|r| u64::from(r.similarity_percent)).sum();
    let plagiarized = results.iter().filter(|r| r.is_plagiarized).count();

    let overall_score = (percent_sum as f64 / total as f64).round() as u8;
    let plagiarism_percentage = (plagiarized as f64 * 100.0 / total as f64).round() as u8;

    PlagiarismReport {
        overall_score,
        plagiarism_percentage,
        total_sentences: total,
        plagiarized_sentences: plagiarized,
        results,
    }
}
