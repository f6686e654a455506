//! Corpus readers.
mod csv;
mod lines;

pub use self::csv::read_csv;
pub use self::lines::{read_lines, read_parallel_files};
