//! Corpus-level cleaning.
use log::info;

use crate::dataset::{Dataset, DatasetBuilder};
use crate::error::Error;

use super::normalize_text;

/// Cell values treated as a missing translation.
pub const INVALID_VALUES: [&str; 4] = ["N/A", "n/a", "na", ""];

fn is_valid(field: Option<&str>) -> bool {
    match field {
        Some(value) => !INVALID_VALUES.contains(&value),
        None => false,
    }
}

/// Drop rows with a missing or placeholder source/target, then normalize both sides.
///
/// Other columns are carried over untouched.
pub fn preprocess_corpus(
    dataset: &Dataset,
    source_column: &str,
    target_column: &str,
) -> Result<Dataset, Error> {
    info!(
        "cleaning and normalizing columns: {}, {}",
        source_column, target_column
    );
    let (src_idx, tgt_idx) = dataset.pair_indices(source_column, target_column)?;

    let mut builder = DatasetBuilder::new(dataset.columns().to_vec())?;
    for row in dataset.rows() {
        if !(is_valid(row[src_idx].as_deref()) && is_valid(row[tgt_idx].as_deref())) {
            continue;
        }
        let mut row = row.to_vec();
        for idx in [src_idx, tgt_idx] {
            row[idx] = row[idx].as_deref().map(normalize_text);
        }
        builder.push_row(row)?;
    }

    let out = builder.build();
    info!(
        "{} sentence pairs remaining ({} dropped)",
        out.len(),
        dataset.len() - out.len()
    );
    Ok(out)
}
