//! Line-aligned parallel files.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::dataset::Dataset;
use crate::error::Error;

/// Read every line of `path`, without line terminators.
pub fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    let reader = BufReader::new(File::open(path)?);
    Ok(reader.lines().collect::<Result<Vec<_>, _>>()?)
}

/// Read two line-aligned files into a two-column [Dataset].
///
/// Files must have the same number of lines.
pub fn read_parallel_files(
    source_path: &Path,
    target_path: &Path,
    source_column: &str,
    target_column: &str,
) -> Result<Dataset, Error> {
    let sources = read_lines(source_path)?;
    let targets = read_lines(target_path)?;
    if sources.len() != targets.len() {
        return Err(Error::InputMismatch(format!(
            "{:?} has {} lines but {:?} has {}",
            source_path,
            sources.len(),
            target_path,
            targets.len()
        )));
    }
    Ok(Dataset::from_pairs(
        source_column,
        target_column,
        sources.into_iter().zip(targets),
    ))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::read_parallel_files;
    use crate::error::Error;

    #[test]
    fn aligned() {
        let dir = tempfile::tempdir().unwrap();
        let (s, t) = (dir.path().join("train.src"), dir.path().join("train.tgt"));
        fs::write(&s, "a b\nc d\n").unwrap();
        fs::write(&t, "x y\nz w\n").unwrap();

        let d = read_parallel_files(&s, &t, "src", "tgt").unwrap();
        assert_eq!(d.len(), 2);
        assert_eq!(d.get(1, "tgt").unwrap(), Some("z w"));
    }

    #[test]
    fn misaligned() {
        let dir = tempfile::tempdir().unwrap();
        let (s, t) = (dir.path().join("a"), dir.path().join("b"));
        fs::write(&s, "a\nb\n").unwrap();
        fs::write(&t, "x\n").unwrap();

        assert!(matches!(
            read_parallel_files(&s, &t, "src", "tgt"),
            Err(Error::InputMismatch(_))
        ));
    }
}
