//! CSV reader.
use std::path::Path;

use log::{debug, info};

use crate::dataset::{Dataset, DatasetBuilder, Field};
use crate::error::Error;

/// Read a CSV file with a header row into a [Dataset].
///
/// Empty cells are read as missing values.
pub fn read_csv(path: &Path) -> Result<Dataset, Error> {
    let mut reader = ::csv::Reader::from_path(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    debug!("{:?}: columns {:?}", path, columns);

    let mut builder = DatasetBuilder::new(columns)?;
    for record in reader.records() {
        let record = record?;
        let row: Vec<Field> = record
            .iter()
            .map(|field| match field {
                "" => None,
                f => Some(f.to_string()),
            })
            .collect();
        builder.push_row(row)?;
    }

    let dataset = builder.build();
    info!("read {} rows from {:?}", dataset.len(), path);
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::read_csv;

    #[test]
    fn read() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            "book,language1,language2\nGEN,\"sa sinugdan, gibuhat\",en el principio\nEXO,,algo\n"
        )
        .unwrap();

        let d = read_csv(f.path()).unwrap();
        assert_eq!(d.len(), 2);
        assert_eq!(d.columns().len(), 3);
        assert_eq!(d.get(0, "language1").unwrap(), Some("sa sinugdan, gibuhat"));
        assert_eq!(d.get(1, "language1").unwrap(), None);
    }

    #[test]
    fn not_found() {
        assert!(read_csv(std::path::Path::new("does/not/exist.csv")).is_err());
    }
}
