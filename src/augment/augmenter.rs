//! Dataset expansion with noisy source variants.
use log::{debug, info};
use rand::Rng;

use crate::dataset::{Dataset, DatasetBuilder};
use crate::error::Error;

use super::NoiseInjector;

/// Expands each example into itself followed by `n_copies` noisy variants.
///
/// Variants only differ on the source side: the target is copied as is,
/// so that every emitted row stays aligned with the row it derives from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Augmenter {
    injector: NoiseInjector,
    n_copies: usize,
}

impl Augmenter {
    pub fn new(injector: NoiseInjector, n_copies: usize) -> Self {
        Self { injector, n_copies }
    }

    /// Augment `dataset`, reading pairs from `source_column` and `target_column`.
    ///
    /// With `n_copies == 0` the dataset is handed back untouched, columns included.
    /// Otherwise the output holds `len * (1 + n_copies)` rows over the two named columns,
    /// each original row immediately followed by its variants.
    ///
    /// A null source or target aborts the whole pass.
    pub fn augment<R: Rng + ?Sized>(
        &self,
        dataset: Dataset,
        source_column: &str,
        target_column: &str,
        rng: &mut R,
    ) -> Result<Dataset, Error> {
        if self.n_copies == 0 {
            info!("no augmentation requested (n_copies=0), returning dataset as is");
            return Ok(dataset);
        }

        info!(
            "augmenting dataset: {} rows with {} copies each",
            dataset.len(),
            self.n_copies
        );

        let capacity = self
            .n_copies
            .checked_add(1)
            .and_then(|per_row| dataset.len().checked_mul(per_row));
        let capacity = match capacity {
            Some(capacity) => capacity,
            None if dataset.is_empty() => 0,
            None => {
                return Err(Error::Configuration(format!(
                    "{} rows with {} copies each overflows the dataset size",
                    dataset.len(),
                    self.n_copies
                )))
            }
        };
        let mut builder =
            DatasetBuilder::pairs(source_column, target_column).with_capacity(capacity);

        for example in dataset.pairs(source_column, target_column)? {
            let example = example?;
            builder.push_pair(example.source, example.target);

            let tokens = example.source_tokens();
            for _ in 0..self.n_copies {
                let noisy = self.injector.inject(&tokens, rng).join(" ");
                debug!("{:?} -> {:?}", example.source, noisy);
                builder.push_pair(noisy, example.target);
            }
        }

        let out = builder.build();
        info!(
            "augmentation complete, total rows: {} ({:.1}x increase)",
            out.len(),
            out.len() as f64 / dataset.len().max(1) as f64
        );
        Ok(out)
    }
}

impl Default for Augmenter {
    fn default() -> Self {
        Self {
            injector: NoiseInjector::default(),
            n_copies: crate::config::N_COPIES,
        }
    }
}

/// Augment `dataset` with `n_copies` variants per row, using the default noise probabilities.
///
/// See [Augmenter::augment].
pub fn augment_dataset<R: Rng + ?Sized>(
    dataset: Dataset,
    source_column: &str,
    target_column: &str,
    n_copies: usize,
    rng: &mut R,
) -> Result<Dataset, Error> {
    Augmenter::new(NoiseInjector::default(), n_copies).augment(
        dataset,
        source_column,
        target_column,
        rng,
    )
}
