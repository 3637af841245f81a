use std::collections::HashSet;
use std::sync::OnceLock;

/// Indonesian and English function words excluded from scoring.
const STOP_WORDS: &[&str] = &[
    // Indonesian
    "yang", "di", "dan", "itu", "dengan", "untuk", "tidak", "ini", "dari", "dalam", "akan",
    "pada", "juga", "saya", "ke", "karena", "ia", "ada", "mereka", "kita", "kamu", "dia",
    "atau", "saat", "oleh", "sudah", "bisa", "kami", "adalah", "sebagai", "jika", "namun",
    "maka", "tentang", "seperti", "serta", "bagi", "hal", "pun", "agar", "setelah", "belum",
    "bukan",
    // English
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when",
    "make", "can", "like", "time", "no", "just", "him", "know", "take", "people", "into",
    "year", "your", "good", "some", "could", "them", "see", "other", "than", "then", "now",
    "look", "only", "come", "its", "over", "think", "also",
];

fn stop_word_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

/// Returns `true` if `word` (already lowercased) is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    stop_word_set().contains(word)
}

/// Number of distinct stop words.
pub fn stop_word_count() -> usize {
    stop_word_set().len()
}
