use std::collections::{HashMap, HashSet};

use crate::text::tokenize;

/// Cosine similarity between the term-frequency vectors of two texts.
///
/// Returns `0.0` when either text has no tokens after filtering.
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    cosine_from_tokens(&tokenize(a), &tokenize(b))
}

/// Phrase-overlap similarity over contiguous `n`-token windows.
///
/// `|shared windows| / max(|windows(a)|, |windows(b)|)`. Returns `0.0` when
/// either side has fewer than `n` tokens.
pub fn ngram_similarity(a: &str, b: &str, n: usize) -> f64 {
    ngram_from_tokens(&tokenize(a), &tokenize(b), n)
}

pub(crate) fn cosine_from_tokens(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let freq_a = term_frequencies(a);
    let freq_b = term_frequencies(b);

    // Terms missing from either side contribute zero to the dot product.
    let dot: f64 = freq_a
        .iter()
        .filter_map(|(term, &count_a)| freq_b.get(term).map(|&count_b| count_a * count_b))
        .sum();

    let norm_a = euclidean_norm(&freq_a);
    let norm_b = euclidean_norm(&freq_b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

pub(crate) fn ngram_from_tokens(a: &[String], b: &[String], n: usize) -> f64 {
    let grams_a = ngrams(a, n);
    let grams_b = ngrams(b, n);
    if grams_a.is_empty() || grams_b.is_empty() {
        return 0.0;
    }

    let shared = grams_a.intersection(&grams_b).count();
    shared as f64 / grams_a.len().max(grams_b.len()) as f64
}

fn term_frequencies(tokens: &[String]) -> HashMap<&str, f64> {
    let mut freq = HashMap::with_capacity(tokens.len());
    for token in tokens {
        *freq.entry(token.as_str()).or_insert(0.0) += 1.0;
    }
    freq
}

fn euclidean_norm(freq: &HashMap<&str, f64>) -> f64 {
    freq.values().map(|v| v * v).sum::<f64>().sqrt()
}

fn ngrams(tokens: &[String], n: usize) -> HashSet<String> {
    if n == 0 || tokens.len() < n {
        return HashSet::new();
    }
    tokens.windows(n).map(|window| window.join(" ")).collect()
}
