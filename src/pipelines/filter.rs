//! Parallel corpus filtering pipeline
//!
//! Reads two line-aligned files, keeps meaningful pairs (see [crate::filtering::PairFilter])
//! and writes them both as `meaningful.src` / `meaningful.tgt` and as `meaningful_pairs.csv`.
use std::path::PathBuf;

use crate::dataset::Dataset;
use crate::error::Error;
use crate::filtering::{filter_aligned_lines, PairFilter};
use crate::io::{read_lines, write_csv, write_parallel_files};
use crate::pipelines::pipeline::Pipeline;

const OUTPUT_NAME: &str = "meaningful";

pub struct FilterCorpus {
    src: PathBuf,
    tgt: PathBuf,
    dst: PathBuf,
    min_words: usize,
    columns: (String, String),
}

impl FilterCorpus {
    pub fn new(src: PathBuf, tgt: PathBuf, dst: PathBuf, min_words: usize) -> Self {
        Self {
            src,
            tgt,
            dst,
            min_words,
            columns: (
                crate::config::SOURCE_COL.to_string(),
                crate::config::TARGET_COL.to_string(),
            ),
        }
    }

    /// Column names used in the CSV output.
    pub fn columns(mut self, source_column: &str, target_column: &str) -> Self {
        self.columns = (source_column.to_string(), target_column.to_string());
        self
    }
}

impl Pipeline<usize> for FilterCorpus {
    fn version() -> &'static str {
        "0.1.0"
    }

    /// Returns the number of kept pairs.
    fn run(&self) -> Result<usize, Error> {
        let sources = read_lines(&self.src)?;
        let targets = read_lines(&self.tgt)?;
        let filter = PairFilter::with_min_words(self.min_words);
        let kept = filter_aligned_lines(&sources, &targets, &filter)?;

        let (src_col, tgt_col) = (&self.columns.0, &self.columns.1);
        let dataset = Dataset::from_pairs(src_col, tgt_col, kept);
        write_parallel_files(&dataset, OUTPUT_NAME, &self.dst, src_col, tgt_col)?;
        write_csv(
            &dataset,
            &self.dst.join(format!("{}_pairs.csv", OUTPUT_NAME)),
        )?;
        Ok(dataset.len())
    }
}
