//! Sentence-level normalization.
use itertools::Itertools;

/// Non ASCII letters that survive normalization.
const EXTRA_LETTERS: &[char] = &['á', 'é', 'í', 'ó', 'ú', 'ü', 'ñ'];

fn is_kept(c: char) -> bool {
    c.is_ascii_lowercase() || EXTRA_LETTERS.contains(&c) || c.is_whitespace()
}

/// Lowercase `text`, remove unwanted characters and collapse whitespace.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept: String = lowered.chars().filter(|c| is_kept(*c)).collect();
    kept.split_whitespace().join(" ")
}

/// Whitespace tokenizer.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}

pub fn normalize_and_tokenize(text: &str) -> Vec<String> {
    tokenize(&normalize_text(text))
}
