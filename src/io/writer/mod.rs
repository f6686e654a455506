//! Corpus writers.
mod csv;
mod parallel;

pub use self::csv::write_csv;
pub use self::parallel::{write_parallel_files, ParallelWriter};
