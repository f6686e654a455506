//! sentence-level filtering
use lazy_static::lazy_static;
use regex::Regex;

use super::Filter;
use crate::error::Error;

lazy_static! {
    /// UI strings, placeholders and markup that leak from localization corpora.
    static ref BAD_PATTERNS: Vec<Regex> = [
        r"\$\d",                        // $1, $2
        r"''+",                         // wiki italics/bold
        r"<[a-zA-Z/].*?>",              // html tags
        r"\[\[|\]\]",                   // wiki links
        r"\[\w+://",                    // external links
        r"\[\$\d",                      // placeholders in links
        r"%\(.*\).",                    // %(name)s
        r"https?://",
        r"^\(.*\)$",                    // lone parenthetical
        r"Problema sa (ekspresyon|Lua)",
        r"scan failed",
        r"\{\{.*\}\}",                  // {{PLURAL...}}
        r"user_n",
        r"^[A-Z][a-z]+$",               // single capitalized word
        r"^[a-z]+$",                    // single lowercase word
        r"^[A-Z]{2,3}$",                // acronyms
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();
}

/// Word count filter.
/// Returns `false` if provided sentence has less than [WordCount::min_words] whitespace separated words.
///
/// [WordCount::min_words] is 4 by default.
pub struct WordCount {
    min_words: usize,
}

impl WordCount {
    /// specify a minimum word count
    pub fn with_min_words(min_words: usize) -> Self {
        Self { min_words }
    }

    pub fn min_words(&self) -> usize {
        self.min_words
    }
}

impl Filter<&str> for WordCount {
    fn detect(&self, sentence: &str) -> bool {
        sentence.split_whitespace().count() >= self.min_words
    }
}

impl Default for WordCount {
    fn default() -> Self {
        WordCount { min_words: 4 }
    }
}

/// Pattern filter: returns `false` if any of the patterns matches the sentence.
#[derive(Clone)]
pub struct Patterns {
    patterns: Vec<Regex>,
}

impl Patterns {
    /// Use custom patterns instead of the default rule set.
    pub fn new(patterns: &[&str]) -> Result<Self, Error> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| {
                    Error::Configuration(format!("invalid pattern {:?}: {}", p, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Filter<&str> for Patterns {
    fn detect(&self, sentence: &str) -> bool {
        !self.patterns.iter().any(|p| p.is_match(sentence))
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self {
            patterns: BAD_PATTERNS.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, Patterns, WordCount};

    #[test]
    fn word_count_default() {
        let f = WordCount::default();
        assert!(f.detect("ang bata ay naglalaro"));
        assert!(!f.detect("ang bata ay"));
        assert!(!f.detect(""));
    }

    #[test]
    fn word_count_custom() {
        let f = WordCount::with_min_words(1);
        assert_eq!(f.min_words(), 1);
        assert!(f.detect("word"));
    }

    #[test]
    fn default_patterns() {
        let f = Patterns::default();
        let rejected = [
            "Gi-edit ni $1 ang panid",
            "Kini '''bold''' nga teksto",
            "Tan-awa ang <strong>panid</strong>",
            "Tan-awa ang [[Panid]] karon",
            "Bisitaha ang [https://example.org dinhi]",
            "Adunay %(count)s ka butang",
            "Bisitaha ang http://example.org",
            "(walay sulod)",
            "Problema sa Lua: error",
            "{{PLURAL:$1|usa|daghan}}",
            "Lunes",
            "lunes",
            "DOM",
        ];
        for s in rejected {
            assert!(!f.detect(s), "{:?} should be rejected", s);
        }
        assert!(f.detect("Ang bata ay naglalaro sa gawas."));
        assert!(f.detect("Kini usa ka (gamay) nga balay"));
    }

    #[test]
    fn custom_patterns() {
        let f = Patterns::new(&["foo"]).unwrap();
        assert_eq!(f.len(), 1);
        assert!(!f.detect("a foo b"));
        assert!(f.detect("a bar b"));
        assert!(Patterns::new(&["("]).is_err());
    }
}
