//! Dataset and its builder.
use std::collections::HashSet;

use crate::error::Error;

use super::ParallelExample;

/// A cell. `None` stands for a missing value (empty CSV cell, dropped field...).
pub type Field = Option<String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Field>>,
}

impl Dataset {
    /// Create a dataset from raw rows.
    ///
    /// Fails if column names are duplicated or if a row width differs from the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Field>>) -> Result<Self, Error> {
        let mut builder = DatasetBuilder::new(columns)?;
        for row in rows {
            builder.push_row(row)?;
        }
        Ok(builder.build())
    }

    /// Build a two-column dataset from (source, target) pairs.
    pub fn from_pairs<S, T, I>(source_column: &str, target_column: &str, pairs: I) -> Self
    where
        S: Into<String>,
        T: Into<String>,
        I: IntoIterator<Item = (S, T)>,
    {
        let mut builder = DatasetBuilder::pairs(source_column, target_column);
        for (source, target) in pairs {
            builder.push_pair(source, target);
        }
        builder.build()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `name` in the column list.
    pub fn column_index(&self, name: &str) -> Result<usize, Error> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| Error::missing_column(name))
    }

    /// Rows in stable order.
    pub fn rows(&self) -> impl Iterator<Item = &[Field]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Get a single cell by row number and column name.
    ///
    /// Returns `Ok(None)` for a null cell and an error for an unknown column or out of bounds row.
    pub fn get(&self, row: usize, column: &str) -> Result<Option<&str>, Error> {
        let col = self.column_index(column)?;
        let row = self.rows.get(row).ok_or_else(|| {
            Error::Custom(format!("row {} out of bounds (len {})", row, self.len()))
        })?;
        Ok(row[col].as_deref())
    }

    /// Checks that both columns exist and are distinct, and returns their indices.
    pub(crate) fn pair_indices(
        &self,
        source_column: &str,
        target_column: &str,
    ) -> Result<(usize, usize), Error> {
        if source_column == target_column {
            return Err(Error::Configuration(format!(
                "source and target columns are both {:?}",
                source_column
            )));
        }
        Ok((
            self.column_index(source_column)?,
            self.column_index(target_column)?,
        ))
    }

    /// Reads row `row` as an aligned pair, failing on null fields.
    pub(crate) fn example_at(
        &self,
        row: usize,
        (src_idx, tgt_idx): (usize, usize),
    ) -> Result<ParallelExample<'_>, Error> {
        let fields = &self.rows[row];
        let source = fields[src_idx].as_deref().ok_or_else(|| {
            Error::InputMismatch(format!(
                "row {}: null value in column {:?}",
                row, self.columns[src_idx]
            ))
        })?;
        let target = fields[tgt_idx].as_deref().ok_or_else(|| {
            Error::InputMismatch(format!(
                "row {}: null value in column {:?}",
                row, self.columns[tgt_idx]
            ))
        })?;
        Ok(ParallelExample::new(source, target))
    }

    /// Iterate over rows as aligned pairs.
    ///
    /// Column lookup happens once, up front. A row holding a null source or target
    /// yields an [Error::InputMismatch] at its position.
    pub fn pairs<'a>(
        &'a self,
        source_column: &str,
        target_column: &str,
    ) -> Result<impl Iterator<Item = Result<ParallelExample<'a>, Error>> + 'a, Error> {
        let indices = self.pair_indices(source_column, target_column)?;
        Ok((0..self.len()).map(move |row| self.example_at(row, indices)))
    }
}

/// Append-only row accumulator, frozen into a [Dataset] with [DatasetBuilder::build].
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    columns: Vec<String>,
    rows: Vec<Vec<Field>>,
}

impl DatasetBuilder {
    /// Builder over arbitrary columns. Column names must be unique.
    pub fn new(columns: Vec<String>) -> Result<Self, Error> {
        let mut seen = HashSet::new();
        if let Some(dup) = columns.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(Error::Configuration(format!(
                "duplicate column name: {:?}",
                dup
            )));
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Builder over a (source, target) column pair.
    pub fn pairs(source_column: &str, target_column: &str) -> Self {
        let columns = vec![source_column.to_string(), target_column.to_string()];
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.rows.reserve(capacity);
        self
    }

    pub fn push_row(&mut self, row: Vec<Field>) -> Result<(), Error> {
        if row.len() != self.columns.len() {
            return Err(Error::InputMismatch(format!(
                "row {} has {} fields, expected {}",
                self.rows.len(),
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Push an aligned pair. Only meaningful on a builder made with [DatasetBuilder::pairs].
    pub fn push_pair<S: Into<String>, T: Into<String>>(&mut self, source: S, target: T) {
        debug_assert_eq!(self.columns.len(), 2);
        self.rows.push(vec![Some(source.into()), Some(target.into())]);
    }

    pub fn build(self) -> Dataset {
        Dataset {
            columns: self.columns,
            rows: self.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Dataset, DatasetBuilder};
    use crate::error::Error;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn from_pairs() {
        let d = Dataset::from_pairs("src", "tgt", vec![("a b", "x y"), ("c", "z")]);
        assert_eq!(d.len(), 2);
        assert_eq!(d.columns(), &["src".to_string(), "tgt".to_string()]);
        assert_eq!(d.get(1, "tgt").unwrap(), Some("z"));
    }

    #[test]
    fn unknown_column() {
        let d = Dataset::from_pairs("src", "tgt", vec![("a", "b")]);
        match d.get(0, "nope") {
            Err(Error::Configuration(msg)) => assert!(msg.contains("nope")),
            other => panic!("unexpected {:?}", other),
        }
        assert!(d.pairs("src", "nope").is_err());
    }

    #[test]
    fn same_source_and_target() {
        let d = Dataset::from_pairs("src", "tgt", vec![("a", "b")]);
        assert!(matches!(
            d.pairs("src", "src").map(|_| ()),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn duplicate_columns() {
        assert!(DatasetBuilder::new(cols(&["a", "a"])).is_err());
    }

    #[test]
    fn wrong_width() {
        let r = Dataset::new(cols(&["a", "b"]), vec![vec![Some("x".to_string())]]);
        assert!(matches!(r, Err(Error::InputMismatch(_))));
    }

    #[test]
    fn pairs_null_field() {
        let d = Dataset::new(
            cols(&["id", "src", "tgt"]),
            vec![
                vec![None, Some("a".into()), Some("b".into())],
                vec![Some("2".into()), Some("c".into()), None],
            ],
        )
        .unwrap();

        let pairs: Vec<_> = d.pairs("src", "tgt").unwrap().collect();
        assert_eq!(pairs.len(), 2);
        let first = pairs[0].as_ref().unwrap();
        assert_eq!((first.source, first.target), ("a", "b"));
        match &pairs[1] {
            Err(Error::InputMismatch(msg)) => {
                assert!(msg.contains("row 1"));
                assert!(msg.contains("tgt"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rows_keep_order() {
        let d = Dataset::from_pairs("s", "t", (0..5).map(|i| (i.to_string(), "t")));
        let firsts: Vec<_> = d.rows().map(|r| r[0].clone().unwrap()).collect();
        assert_eq!(firsts, vec!["0", "1", "2", "3", "4"]);
    }
}
