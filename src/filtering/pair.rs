//! Pair-level filtering.
use log::info;

use super::{Filter, Patterns, WordCount};
use crate::error::Error;

/// Keeps a pair if both sides have enough words and none of them matches a bad pattern.
#[derive(Default)]
pub struct PairFilter {
    word_count: WordCount,
    patterns: Patterns,
}

impl PairFilter {
    pub fn new(word_count: WordCount, patterns: Patterns) -> Self {
        Self {
            word_count,
            patterns,
        }
    }

    pub fn with_min_words(min_words: usize) -> Self {
        Self {
            word_count: WordCount::with_min_words(min_words),
            ..Default::default()
        }
    }
}

impl Filter<(&str, &str)> for PairFilter {
    fn detect(&self, (source, target): (&str, &str)) -> bool {
        self.word_count.detect(source)
            && self.word_count.detect(target)
            && self.patterns.detect(source)
            && self.patterns.detect(target)
    }
}

/// Filter two line-aligned sentence lists, returning the kept (trimmed) pairs.
///
/// Lists of different lengths cannot be aligned and are rejected.
pub fn filter_aligned_lines<S: AsRef<str>>(
    sources: &[S],
    targets: &[S],
    filter: &PairFilter,
) -> Result<Vec<(String, String)>, Error> {
    if sources.len() != targets.len() {
        return Err(Error::InputMismatch(format!(
            "line counts do not match: {} source lines, {} target lines",
            sources.len(),
            targets.len()
        )));
    }
    info!("processing {} line pairs", sources.len());

    let kept: Vec<(String, String)> = sources
        .iter()
        .zip(targets)
        .map(|(s, t)| (s.as_ref().trim(), t.as_ref().trim()))
        .filter(|pair| filter.detect(*pair))
        .map(|(s, t)| (s.to_string(), t.to_string()))
        .collect();

    info!("found {} meaningful sentence pairs", kept.len());
    Ok(kept)
}
