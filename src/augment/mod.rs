/*! Augmentation engine

- [NoiseInjector] turns a token sequence into a noisy one,
- [Augmenter] expands a dataset with noisy source variants,
- [mix_datasets] blends a sample of an auxiliary corpus into a base one.

Stochastic operations take the generator explicitly. Create it once per run
(see [crate::config::AugmentConfig::rng]) and pass it along in a fixed order to get reproducible output.
!*/
mod augmenter;
mod mixer;
mod noise;

pub use augmenter::{augment_dataset, Augmenter};
pub use mixer::{mix_datasets, sample_size};
pub use noise::{inject_noise, NoiseInjector};
