/*! In-memory tabular dataset

Rows of nullable text fields under named columns.
Datasets are never mutated once built: operations accumulate rows in a [DatasetBuilder] and freeze it.
!*/
#[allow(clippy::module_inception)]
mod dataset;
mod example;

pub use dataset::{Dataset, DatasetBuilder, Field};
pub use example::ParallelExample;
