/*! Augmentation settings.

Holds default noise probabilities, copy count, seed and mixing ratio.
Settings can be loaded from a JSON file, where every missing field falls back to its default:

```json
{ "swap_prob": 0.1, "n_copies": 2, "seed": 7 }
```

The random generator used by a whole run is created once from [AugmentConfig::rng].
!*/
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::augment::NoiseInjector;
use crate::error::Error;

pub const SWAP_PROB: f64 = 0.05;
pub const DROP_PROB: f64 = 0.03;
pub const DUP_PROB: f64 = 0.01;
pub const N_COPIES: usize = 1;
pub const RANDOM_SEED: u64 = 26;

pub const SOURCE_COL: &str = "language1";
pub const TARGET_COL: &str = "language2";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentConfig {
    pub swap_prob: f64,
    pub drop_prob: f64,
    pub dup_prob: f64,
    pub n_copies: usize,
    pub seed: u64,
    pub mix_ratio: f64,
    pub source_column: String,
    pub target_column: String,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            swap_prob: SWAP_PROB,
            drop_prob: DROP_PROB,
            dup_prob: DUP_PROB,
            n_copies: N_COPIES,
            seed: RANDOM_SEED,
            mix_ratio: 0.0,
            source_column: SOURCE_COL.to_string(),
            target_column: TARGET_COL.to_string(),
        }
    }
}

impl AugmentConfig {
    /// Load settings from a JSON file and validate them.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        debug!("loaded config from {:?}: {:?}", path, config);
        config.validate()?;
        Ok(config)
    }

    /// Checks probabilities and mixing ratio.
    pub fn validate(&self) -> Result<(), Error> {
        self.injector()?;
        if self.mix_ratio.is_nan() || self.mix_ratio < 0.0 {
            return Err(Error::Configuration(format!(
                "mix ratio must be >= 0, got {}",
                self.mix_ratio
            )));
        }
        Ok(())
    }

    /// Build the [NoiseInjector] holding the configured probabilities.
    pub fn injector(&self) -> Result<NoiseInjector, Error> {
        NoiseInjector::new(self.swap_prob, self.drop_prob, self.dup_prob)
    }

    /// Seeded generator. Call once per run and thread it through every stochastic step.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}
