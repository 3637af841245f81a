use super::*;
use crate::evidence::MockEvidenceSource;
use crate::fetch::{FetcherConfig, HttpFetcher, MockPageFetcher};
use crate::test_support::{spawn_stub, stub_url};
use axum::Router;
use axum::routing::get;
use std::time::{Duration, Instant};

const SENTENCE: &str =
    "Photosynthesis converts sunlight chemical energy chloroplast membranes plants";
const OTHER_SENTENCE: &str = "Medieval castles guarded trade routes along northern coastlines";

fn copied_page() -> String {
    format!("{SENTENCE}. {SENTENCE}. {SENTENCE}.")
}

/// Shares four of the sentence's eight terms, out of nine distinct terms.
fn half_page() -> String {
    "photosynthesis converts sunlight chemical glacier volcano harbor tectonic basalt ".repeat(2)
}

/// Shares two of the sentence's eight terms.
fn low_page() -> String {
    "photosynthesis converts glacier volcano harbor tectonic mountain river ".repeat(2)
}

fn unrelated_page() -> String {
    "glacier volcano harbor tectonic mountain river ocean granite basalt ".repeat(2)
}

fn fast_config() -> PipelineConfig {
    PipelineConfig::default().with_batch_pause(Duration::ZERO)
}

fn sentence(index: usize, text: &str) -> Sentence {
    Sentence::new(index, text)
}

#[test]
fn test_select_matches_sorts_best_first() {
    let docs = vec![
        FetchedDocument::new("https://low.example/", low_page()),
        FetchedDocument::new("https://copy.example/", copied_page()),
        FetchedDocument::new("https://half.example/", half_page()),
        FetchedDocument::new("https://unrelated.example/", unrelated_page()),
    ];

    let result = select_matches(&sentence(0, SENTENCE), &docs, &PipelineConfig::default());

    let urls: Vec<&str> = result.sources.iter().map(|s| s.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://copy.example/",
            "https://half.example/",
            "https://low.example/"
        ]
    );
    let percents: Vec<u8> = result.sources.iter().map(|s| s.similarity).collect();
    assert_eq!(percents, vec![100, 47, 25]);
    assert_eq!(result.similarity_percent, 100);
    assert!(result.is_plagiarized);
}

#[test]
fn test_select_matches_partial_overlap_is_not_plagiarized() {
    let docs = vec![FetchedDocument::new("https://half.example/", half_page())];

    let result = select_matches(&sentence(0, SENTENCE), &docs, &PipelineConfig::default());

    assert_eq!(result.similarity_percent, 47);
    assert_eq!(result.sources.len(), 1);
    assert!(!result.is_plagiarized);
}

#[test]
fn test_select_matches_ignores_short_documents() {
    let short = FetchedDocument::new("https://short.example/", SENTENCE);
    assert!(short.length <= 100);

    let result = select_matches(&sentence(0, SENTENCE), &[short], &PipelineConfig::default());

    assert_eq!(result, SentenceResult::zero_evidence(0, SENTENCE));
}

#[test]
fn test_select_matches_below_relevance_reports_zero() {
    let docs = vec![
        FetchedDocument::new("https://unrelated.example/", unrelated_page()),
        FetchedDocument::empty("https://down.example/"),
    ];

    let result = select_matches(&sentence(3, SENTENCE), &docs, &PipelineConfig::default());

    assert_eq!(result.index, 3);
    assert_eq!(result.similarity_percent, 0);
    assert!(result.sources.is_empty());
    assert!(!result.is_plagiarized);
}

#[test]
fn test_select_matches_respects_configured_threshold() {
    let docs = vec![FetchedDocument::new("https://low.example/", low_page())];
    let strict = PipelineConfig {
        relevance_threshold: 0.3,
        ..PipelineConfig::default()
    };

    let result = select_matches(&sentence(0, SENTENCE), &docs, &strict);
    assert!(result.sources.is_empty());
}

#[tokio::test]
async fn test_check_sentence_scores_fetched_candidates() {
    let evidence = MockEvidenceSource::new().with_sentence(
        SENTENCE,
        ["https://copy.example/", "https://down.example/"],
    );
    let fetcher = MockPageFetcher::new().with_page("https://copy.example/", copied_page());
    let checker = PlagiarismChecker::new(evidence, fetcher.clone(), fast_config());

    let result = checker.check_sentence(sentence(0, SENTENCE)).await.unwrap();

    assert!(result.is_plagiarized);
    assert_eq!(result.sources.len(), 1);
    assert_eq!(result.sources[0].url, "https://copy.example/");
    assert_eq!(fetcher.fetches(), 2);
}

#[tokio::test]
async fn test_check_sentence_with_only_a_timed_out_page_reports_zero() {
    let router = Router::new().route(
        "/slow",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            copied_page()
        }),
    );
    let addr = spawn_stub(router).await;
    let slow_url = stub_url(addr, "/slow").to_string();
    let evidence = MockEvidenceSource::new().with_sentence(SENTENCE, [slow_url]);
    let fetcher =
        HttpFetcher::new(&FetcherConfig::default().with_timeout(Duration::from_millis(150)))
            .unwrap();
    let checker = PlagiarismChecker::new(evidence, fetcher, fast_config());

    let started = Instant::now();
    let result = checker.check_sentence(sentence(4, SENTENCE)).await.unwrap();

    assert_eq!(result, SentenceResult::zero_evidence(4, SENTENCE));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_check_sentence_propagates_evidence_error() {
    let evidence = MockEvidenceSource::new().fail_on(SENTENCE);
    let checker = PlagiarismChecker::new(evidence, MockPageFetcher::new(), fast_config());

    let err = checker.check_sentence(sentence(0, SENTENCE)).await.unwrap_err();
    assert!(matches!(err, PipelineError::Evidence(_)));
}

#[tokio::test]
async fn test_check_sentence_bounds_fetch_concurrency() {
    let urls: Vec<String> = (0..10).map(|i| format!("https://site{i}.example/")).collect();
    let evidence = MockEvidenceSource::with_fallback(urls.clone());
    let fetcher = urls
        .iter()
        .fold(MockPageFetcher::new(), |f, url| f.with_page(url, unrelated_page()))
        .with_delay(Duration::from_millis(40));
    let checker = PlagiarismChecker::new(evidence, fetcher.clone(), fast_config());

    checker.check_sentence(sentence(0, SENTENCE)).await.unwrap();

    assert_eq!(fetcher.fetches(), 10);
    assert!(fetcher.max_in_flight() <= 5, "got {}", fetcher.max_in_flight());
    assert!(fetcher.max_in_flight() > 1);
}

#[tokio::test]
async fn test_check_text_preserves_order_and_aggregates() {
    let text = format!(
        "{SENTENCE}. Too short. {OTHER_SENTENCE}! Rivers deposit fertile sediment across wide deltas?"
    );
    let evidence = MockEvidenceSource::new()
        .with_sentence(SENTENCE, ["https://copy.example/"])
        .with_sentence(OTHER_SENTENCE, ["https://unrelated.example/"]);
    let fetcher = MockPageFetcher::new()
        .with_page("https://copy.example/", copied_page())
        .with_page("https://unrelated.example/", unrelated_page());
    let checker = PlagiarismChecker::new(evidence, fetcher, fast_config());

    let report = checker.check_text(&text).await;

    assert_eq!(report.total_sentences, 3);
    assert_eq!(report.results.len(), 3);
    assert_eq!(report.results[0].sentence, SENTENCE);
    assert_eq!(report.results[1].sentence, OTHER_SENTENCE);
    assert_eq!(
        report.results[2].sentence,
        "Rivers deposit fertile sediment across wide deltas"
    );
    let indices: Vec<usize> = report.results.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);

    assert_eq!(report.plagiarized_sentences, 1);
    assert_eq!(report.plagiarism_percentage, 33);
    assert_eq!(report.overall_score, 33);
}

#[tokio::test]
async fn test_check_text_without_sentences() {
    let checker = PlagiarismChecker::new(
        MockEvidenceSource::new(),
        MockPageFetcher::new(),
        fast_config(),
    );

    let report = checker.check_text("Short. Also short! Tiny?").await;

    assert_eq!(report, PlagiarismReport::empty());
}

#[tokio::test]
async fn test_failing_and_panicking_sentences_degrade_to_zero() {
    let text = format!("{SENTENCE}. {OTHER_SENTENCE}. Rivers deposit fertile sediment across wide deltas.");
    let evidence = MockEvidenceSource::with_fallback(["https://copy.example/"])
        .fail_on(OTHER_SENTENCE)
        .panic_on("Rivers deposit fertile sediment across wide deltas");
    let fetcher = MockPageFetcher::new().with_page("https://copy.example/", copied_page());
    let checker = PlagiarismChecker::new(evidence, fetcher, fast_config());

    let report = checker.check_text(&text).await;

    assert_eq!(report.total_sentences, 3);
    assert!(report.results[0].is_plagiarized);
    assert_eq!(
        report.results[1],
        SentenceResult::zero_evidence(1, OTHER_SENTENCE)
    );
    assert_eq!(
        report.results[2],
        SentenceResult::zero_evidence(2, "Rivers deposit fertile sediment across wide deltas")
    );
}

#[tokio::test]
async fn test_sentences_are_capped() {
    let text = (0..30)
        .map(|i| format!("Sentence number {i} talks about volcanic harbor geology"))
        .collect::<Vec<_>>()
        .join(". ");
    let evidence = MockEvidenceSource::new();
    let checker = PlagiarismChecker::new(evidence.clone(), MockPageFetcher::new(), fast_config());

    let report = checker.check_text(&text).await;

    assert_eq!(report.total_sentences, 20);
    assert_eq!(evidence.calls(), 20);
}

#[tokio::test]
async fn test_batches_are_separated_by_pause() {
    let sentences: Vec<Sentence> = (0..4)
        .map(|i| sentence(i, &format!("Sentence number {i} about harbor geology")))
        .collect();
    let config = PipelineConfig::default().with_batch_pause(Duration::from_millis(150));
    let checker = PlagiarismChecker::new(MockEvidenceSource::new(), MockPageFetcher::new(), config);

    let started = Instant::now();
    let results = checker.check_sentences(sentences.clone()).await;
    let two_batches = started.elapsed();

    assert_eq!(results.len(), 4);
    assert!(two_batches >= Duration::from_millis(150));

    let started = Instant::now();
    checker.check_sentences(sentences[..3].to_vec()).await;
    assert!(started.elapsed() < Duration::from_millis(150));
}

#[tokio::test]
async fn test_sentences_within_a_batch_run_concurrently() {
    let sentences: Vec<Sentence> = (0..3)
        .map(|i| sentence(i, &format!("Sentence number {i} about harbor geology")))
        .collect();
    let evidence = MockEvidenceSource::with_fallback(["https://slow.example/"]);
    let fetcher = MockPageFetcher::new()
        .with_page("https://slow.example/", unrelated_page())
        .with_delay(Duration::from_millis(150));
    let checker = PlagiarismChecker::new(evidence, fetcher.clone(), fast_config());

    let started = Instant::now();
    checker.check_sentences(sentences).await;

    assert!(started.elapsed() < Duration::from_millis(400));
    assert_eq!(fetcher.max_in_flight(), 3);
}

#[test]
fn test_pipeline_config_validate() {
    assert!(PipelineConfig::default().validate().is_ok());
    assert!(PipelineConfig::default().with_batch_size(0).validate().is_err());
    assert!(PipelineConfig::default().with_fetch_concurrency(0).validate().is_err());

    let bad = PipelineConfig {
        plagiarism_threshold: 1.5,
        ..PipelineConfig::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn test_pipeline_config_defaults() {
    let config = PipelineConfig::default();
    assert_eq!(config.min_sentence_chars, 20);
    assert_eq!(config.max_sentences, 20);
    assert_eq!(config.batch_size, 3);
    assert_eq!(config.batch_pause, Duration::from_millis(500));
    assert_eq!(config.fetch_concurrency, 5);
    assert_eq!(config.min_document_chars, 100);
    assert_eq!(config.relevance_threshold, 0.15);
    assert_eq!(config.plagiarism_threshold, 0.5);
    assert_eq!(config.ngram_size, 5);
}
