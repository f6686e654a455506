//! Borrowed view over an aligned row.

/// A (source, target) pair borrowed from a [super::Dataset] row.
///
/// Both sides describe the same sentence, so augmentation only ever rewrites `source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelExample<'a> {
    pub source: &'a str,
    pub target: &'a str,
}

impl<'a> ParallelExample<'a> {
    pub fn new(source: &'a str, target: &'a str) -> Self {
        Self { source, target }
    }

    /// Whitespace tokens of the source side.
    pub fn source_tokens(&self) -> Vec<&'a str> {
        self.source.split_whitespace().collect()
    }
}
