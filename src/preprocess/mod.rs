/*! Text normalization and corpus cleaning

Lowercases text, strips everything that is not a letter (accents and `ñ` are kept)
and drops rows whose source or target is missing or a placeholder.
!*/
mod corpus;
mod text;

pub use corpus::{preprocess_corpus, INVALID_VALUES};
pub use text::{normalize_and_tokenize, normalize_text, tokenize};
