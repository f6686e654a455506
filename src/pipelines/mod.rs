//! Pipelines.
//!
//! Pipelines chain reading, processing and writing of corpora,
//! and implement the light [pipeline::Pipeline] trait.
mod augment;
mod filter;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use augment::Augment;
pub use filter::FilterCorpus;
pub use pipeline::Pipeline;
