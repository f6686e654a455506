/*! Line-aligned parallel files

Writes `<split>.src` and `<split>.tgt`, one sentence per line, line `n` of both files being a translation pair.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::dataset::Dataset;
use crate::error::Error;

/// Holds both sides of a split.
pub struct ParallelWriter {
    source: BufWriter<File>,
    target: BufWriter<File>,
    source_path: PathBuf,
    target_path: PathBuf,
    nb_pairs: usize,
}

impl ParallelWriter {
    /// Create (or truncate) `<dst>/<split_name>.src` and `<dst>/<split_name>.tgt`.
    ///
    /// `dst` is created if it does not exist.
    pub fn new(dst: &Path, split_name: &str) -> Result<Self, Error> {
        std::fs::create_dir_all(dst)?;
        let source_path = dst.join(format!("{}.src", split_name));
        let target_path = dst.join(format!("{}.tgt", split_name));
        Ok(Self {
            source: BufWriter::new(File::create(&source_path)?),
            target: BufWriter::new(File::create(&target_path)?),
            source_path,
            target_path,
            nb_pairs: 0,
        })
    }

    /// Write a pair.
    ///
    /// A sentence holding a line break would shift every following line, so it is rejected.
    pub fn write_pair(&mut self, source: &str, target: &str) -> Result<(), Error> {
        check_single_line(self.nb_pairs, source, target)?;
        writeln!(self.source, "{}", source)?;
        writeln!(self.target, "{}", target)?;
        self.nb_pairs += 1;
        Ok(())
    }

    /// Flush both files and return the number of written pairs.
    pub fn finish(mut self) -> Result<usize, Error> {
        self.source.flush()?;
        self.target.flush()?;
        info!(
            "saved {} pairs to {:?} and {:?}",
            self.nb_pairs, self.source_path, self.target_path
        );
        Ok(self.nb_pairs)
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }
}

fn check_single_line(pair: usize, source: &str, target: &str) -> Result<(), Error> {
    for sentence in [source, target] {
        if sentence.contains(['\n', '\r']) {
            return Err(Error::InputMismatch(format!(
                "pair {}: line break in {:?}",
                pair, sentence
            )));
        }
    }
    Ok(())
}

/// Export the `source_column`/`target_column` pairs of `dataset` to a `split_name` split in `dst`.
///
/// Every pair is checked before any file is created, so a failed export leaves nothing behind.
/// Returns the number of written pairs.
pub fn write_parallel_files(
    dataset: &Dataset,
    split_name: &str,
    dst: &Path,
    source_column: &str,
    target_column: &str,
) -> Result<usize, Error> {
    let pairs = dataset
        .pairs(source_column, target_column)?
        .collect::<Result<Vec<_>, _>>()?;
    for (idx, example) in pairs.iter().enumerate() {
        check_single_line(idx, example.source, example.target)?;
    }

    let mut writer = ParallelWriter::new(dst, split_name)?;
    info!("writing to {:?} and {:?}", writer.source_path(), writer.target_path());
    for example in pairs {
        writer.write_pair(example.source, example.target)?;
    }
    writer.finish()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{write_parallel_files, ParallelWriter};
    use crate::dataset::Dataset;
    use crate::error::Error;

    #[test]
    fn write() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("processed");
        let d = Dataset::from_pairs("src", "tgt", vec![("a b", "x y"), ("c", "z")]);

        let n = write_parallel_files(&d, "train", &dst, "src", "tgt").unwrap();
        assert_eq!(n, 2);
        assert_eq!(fs::read_to_string(dst.join("train.src")).unwrap(), "a b\nc\n");
        assert_eq!(fs::read_to_string(dst.join("train.tgt")).unwrap(), "x y\nz\n");
    }

    #[test]
    fn line_break_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = ParallelWriter::new(dir.path(), "dev").unwrap();
        w.write_pair("ok", "ok").unwrap();
        assert!(matches!(
            w.write_pair("two\nlines", "one line"),
            Err(Error::InputMismatch(_))
        ));
        assert_eq!(w.finish().unwrap(), 1);
    }

    #[test]
    fn null_field_leaves_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("processed");
        let d = Dataset::new(
            vec!["src".into(), "tgt".into()],
            vec![
                vec![Some("a".into()), Some("x".into())],
                vec![Some("b".into()), None],
            ],
        )
        .unwrap();

        let r = write_parallel_files(&d, "train", &dst, "src", "tgt");
        assert!(matches!(r, Err(Error::InputMismatch(_))));
        assert!(!dst.join("train.src").exists());
        assert!(!dst.join("train.tgt").exists());
    }

    #[test]
    fn line_break_leaves_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let d = Dataset::from_pairs("src", "tgt", vec![("a", "x"), ("b", "y\nz")]);

        let r = write_parallel_files(&d, "train", dir.path(), "src", "tgt");
        assert!(matches!(r, Err(Error::InputMismatch(_))));
        assert!(!dir.path().join("train.src").exists());
        assert!(!dir.path().join("train.tgt").exists());
    }

    #[test]
    fn missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let d = Dataset::from_pairs("src", "tgt", vec![("a", "b")]);
        assert!(write_parallel_files(&d, "train", dir.path(), "src", "nope").is_err());
        assert!(!dir.path().join("train.src").exists());
    }
}
