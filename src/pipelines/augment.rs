//! Augmentation pipeline
//!
//! Builds a training split from a CSV corpus:
//!
//! 1. The base corpus is read, and optionally cleaned/normalized,
//! 1. Each pair is expanded with `n_copies` noisy source variants,
//! 1. A sample of an auxiliary corpus is optionally appended (its size is relative to the augmented corpus),
//! 1. Pairs are exported to `<split>.src` / `<split>.tgt`.
//!
//! The random generator is seeded once, before step 2, and shared by steps 2 and 3.
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::augment::{mix_datasets, Augmenter};
use crate::config::AugmentConfig;
use crate::dataset::Dataset;
use crate::error::Error;
use crate::io::{read_csv, write_parallel_files};
use crate::pipelines::pipeline::Pipeline;
use crate::preprocess::preprocess_corpus;

pub struct Augment {
    src: PathBuf,
    dst: PathBuf,
    split_name: String,
    auxiliary: Option<PathBuf>,
    normalize: bool,
    config: AugmentConfig,
}

impl Augment {
    pub fn new(src: PathBuf, dst: PathBuf, config: AugmentConfig) -> Self {
        Self {
            src,
            dst,
            split_name: "train".to_string(),
            auxiliary: None,
            normalize: false,
            config,
        }
    }

    pub fn split_name(mut self, split_name: &str) -> Self {
        self.split_name = split_name.to_string();
        self
    }

    /// Auxiliary corpus to mix in, using the configured mix ratio.
    pub fn auxiliary(mut self, auxiliary: Option<PathBuf>) -> Self {
        self.auxiliary = auxiliary;
        self
    }

    /// Clean and normalize corpora before augmentation.
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    fn load(&self, path: &Path) -> Result<Dataset, Error> {
        let dataset = read_csv(path)?;
        if self.normalize {
            preprocess_corpus(
                &dataset,
                &self.config.source_column,
                &self.config.target_column,
            )
        } else {
            Ok(dataset)
        }
    }
}

impl Pipeline<usize> for Augment {
    fn version() -> &'static str {
        "0.1.0"
    }

    /// Run the pipeline, returning the number of exported pairs.
    fn run(&self) -> Result<usize, Error> {
        self.config.validate()?;
        debug!("running augmentation with {:?}", self.config);
        let (src_col, tgt_col) = (&self.config.source_column, &self.config.target_column);

        let base = self.load(&self.src)?;
        let mut rng = self.config.rng();

        let augmenter = Augmenter::new(self.config.injector()?, self.config.n_copies);
        let augmented = augmenter.augment(base, src_col, tgt_col, &mut rng)?;

        let dataset = match &self.auxiliary {
            Some(aux_path) => {
                info!("mixing in auxiliary corpus {:?}", aux_path);
                let auxiliary = self.load(aux_path)?;
                mix_datasets(
                    &augmented,
                    &auxiliary,
                    self.config.mix_ratio,
                    src_col,
                    tgt_col,
                    &mut rng,
                )?
            }
            None => augmented,
        };

        write_parallel_files(&dataset, &self.split_name, &self.dst, src_col, tgt_col)
    }
}
