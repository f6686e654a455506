//! CSV writer.
use std::path::Path;

use log::info;

use crate::dataset::Dataset;
use crate::error::Error;

/// Write `dataset` as a CSV file with a header row. Missing values are written as empty cells.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<(), Error> {
    let mut writer = ::csv::Writer::from_path(path)?;
    writer.write_record(dataset.columns())?;
    for row in dataset.rows() {
        writer.write_record(row.iter().map(|field| field.as_deref().unwrap_or("")))?;
    }
    writer.flush()?;
    info!("wrote {} rows to {:?}", dataset.len(), path);
    Ok(())
}
