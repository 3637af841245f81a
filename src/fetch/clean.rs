//! Regex-based HTML to text reduction.
//!
//! Not a parser: nested or unbalanced boilerplate blocks are removed
//! lazily, first opening tag to first matching close.

use regex::Regex;
use std::sync::OnceLock;

const BOILERPLATE_TAGS: [&str; 6] = ["script", "style", "nav", "header", "footer", "aside"];

fn boilerplate_res() -> &'static [Regex] {
    static RES: OnceLock<Vec<Regex>> = OnceLock::new();
    RES.get_or_init(|| {
        BOILERPLATE_TAGS
            .iter()
            .map(|tag| {
                Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>"))
                    .expect("boilerplate regex must compile")
            })
            .collect()
    })
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("tag regex must compile"))
}

fn entity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)&(?:[a-z]+|#[0-9]+|#x[0-9a-f]+);").expect("entity regex must compile")
    })
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex must compile"))
}

/// Reduces an HTML page to its visible prose.
///
/// Drops script/style/nav/header/footer/aside blocks with their content,
/// replaces remaining tags and character entities with spaces, collapses
/// whitespace, trims, and keeps at most `max_chars` characters.
pub fn clean_html(html: &str, max_chars: usize) -> String {
    let mut text = html.to_string();
    for re in boilerplate_res() {
        text = re.replace_all(&text, "").into_owned();
    }

    let text = tag_re().replace_all(&text, " ");
    let text = entity_re().replace_all(&text, " ");
    let text = whitespace_re().replace_all(&text, " ");

    text.trim().chars().take(max_chars).collect()
}
