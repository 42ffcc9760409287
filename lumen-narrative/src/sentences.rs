//! Markdown stripping and sentence tokenizing.
//!
//! Deliberately naive: strip emphasis and heading markers, split on
//! sentence terminators. The upstream text is prose, not code, and the
//! consumers only need first/last/contains-a-digit scans.

use std::sync::OnceLock;

use regex::Regex;

fn heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*#{1,6}\s*").expect("valid heading regex"))
}

fn emphasis_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[*_]{1,3}").expect("valid emphasis regex"))
}

/// Remove markdown heading and emphasis markers.
pub fn strip_markdown(text: &str) -> String {
    let without_headings = heading_re().replace_all(text, "");
    emphasis_re()
        .replace_all(&without_headings, "")
        .trim()
        .to_string()
}

/// Split text into sentences, terminators removed.
///
/// Markdown is stripped first. Segments that contain no letter or digit
/// (stray punctuation, empty lines) are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let clean = strip_markdown(text);
    let mut sentences = Vec::new();
    let mut current = String::new();
    for ch in clean.chars() {
        if matches!(ch, '.' | '!' | '?') {
            push_sentence(&mut sentences, &current);
            current.clear();
        } else {
            current.push(ch);
        }
    }
    push_sentence(&mut sentences, &current);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if trimmed.chars().any(|c| c.is_alphanumeric()) {
        sentences.push(trimmed.to_string());
    }
}

/// First sentence containing a digit; quantitative claims make the best
/// answers.
pub fn first_with_digit(sentences: &[String]) -> Option<&String> {
    sentences.iter().find(|s| s.chars().any(|c| c.is_ascii_digit()))
}
