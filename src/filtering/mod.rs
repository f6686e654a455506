/*! Filtering utilities

Filters operate on sentences or on aligned sentence pairs, and implement [filter::Filter].

- [sentence::WordCount] keeps sentences with enough words,
- [sentence::Patterns] rejects sentences matching markup/placeholder rules,
- [pair::PairFilter] combines both on each side of a pair.
! */
mod filter;
mod pair;
mod sentence;

pub use filter::Filter;
pub use pair::{filter_aligned_lines, PairFilter};
pub use sentence::{Patterns, WordCount};
