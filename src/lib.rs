//! # paraug
//!
//! Data augmentation for parallel machine translation corpora:
//!
//! - noisy source variants (adjacent swaps, drops, duplications) that keep the target untouched,
//! - mixing of a sample of an auxiliary corpus into a base corpus, for cross-lingual transfer.
//!
//! Everything stochastic takes an explicit, seeded generator so that runs are reproducible:
//!
//! ```
//! use paraug::augment::Augmenter;
//! use paraug::config::AugmentConfig;
//! use paraug::dataset::Dataset;
//!
//! let config = AugmentConfig::default();
//! let mut rng = config.rng();
//! let corpus = Dataset::from_pairs("src", "tgt", vec![("ang bata", "the child")]);
//! let augmented = Augmenter::new(config.injector().unwrap(), 2)
//!     .augment(corpus, "src", "tgt", &mut rng)
//!     .unwrap();
//! assert_eq!(augmented.len(), 3);
//! ```
pub mod augment;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod preprocess;
