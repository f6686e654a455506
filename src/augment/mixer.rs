/*! Corpus mixing

Appends a random sample of an auxiliary corpus to a base corpus,
e.g. a related language pair used for cross-lingual transfer.

The sample holds `floor(len(base) * mix_ratio)` rows, clamped to the size of the auxiliary corpus.
Rows are drawn uniformly without replacement and appended in the order they were drawn.
!*/
use log::{info, warn};
use rand::seq::index;
use rand::Rng;

use crate::dataset::{Dataset, DatasetBuilder};
use crate::error::Error;

/// Number of auxiliary rows to sample for a given base size.
pub fn sample_size(base_len: usize, auxiliary_len: usize, mix_ratio: f64) -> usize {
    let requested = (base_len as f64 * mix_ratio).floor() as usize;
    requested.min(auxiliary_len)
}

/// Mix `auxiliary` into `base`.
///
/// The result holds the base rows in their original order, followed by the sampled auxiliary rows.
/// Only `source_column` and `target_column` are kept.
///
/// Fails on a negative ratio, a missing column in either dataset, or a null field in an emitted row.
pub fn mix_datasets<R: Rng + ?Sized>(
    base: &Dataset,
    auxiliary: &Dataset,
    mix_ratio: f64,
    source_column: &str,
    target_column: &str,
    rng: &mut R,
) -> Result<Dataset, Error> {
    if mix_ratio.is_nan() || mix_ratio < 0.0 {
        return Err(Error::Configuration(format!(
            "mix ratio must be >= 0, got {}",
            mix_ratio
        )));
    }

    let base_indices = base.pair_indices(source_column, target_column)?;
    let aux_indices = auxiliary.pair_indices(source_column, target_column)?;

    let requested = (base.len() as f64 * mix_ratio).floor() as usize;
    let n_samples = sample_size(base.len(), auxiliary.len(), mix_ratio);
    if n_samples < requested {
        warn!(
            "requested {} auxiliary rows but only {} are available",
            requested,
            auxiliary.len()
        );
    }
    info!(
        "mixing {} base rows with {} sampled auxiliary rows (ratio {})",
        base.len(),
        n_samples,
        mix_ratio
    );

    let mut builder =
        DatasetBuilder::pairs(source_column, target_column).with_capacity(base.len() + n_samples);

    for row in 0..base.len() {
        let example = base.example_at(row, base_indices)?;
        builder.push_pair(example.source, example.target);
    }

    for row in index::sample(rng, auxiliary.len(), n_samples) {
        let example = auxiliary.example_at(row, aux_indices)?;
        builder.push_pair(example.source, example.target);
    }

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{mix_datasets, sample_size};
    use crate::dataset::Dataset;
    use crate::error::Error;

    fn numbered(prefix: &str, n: usize) -> Dataset {
        Dataset::from_pairs(
            "src",
            "tgt",
            (0..n).map(|i| (format!("{} src {}", prefix, i), format!("{} tgt {}", prefix, i))),
        )
    }

    #[test]
    fn clamped_to_auxiliary() {
        let mut rng = StdRng::seed_from_u64(26);
        let out = mix_datasets(&numbered("b", 100), &numbered("a", 5), 0.5, "src", "tgt", &mut rng)
            .unwrap();
        assert_eq!(out.len(), 105);
    }

    #[test]
    fn size_law() {
        for (b, a, r) in [(10, 100, 0.25), (7, 3, 1.0), (0, 10, 2.0), (10, 10, 0.0), (9, 50, 0.33)] {
            let mut rng = StdRng::seed_from_u64(1);
            let out = mix_datasets(&numbered("b", b), &numbered("a", a), r, "src", "tgt", &mut rng)
                .unwrap();
            let expected = b + ((b as f64 * r).floor() as usize).min(a);
            assert_eq!(out.len(), expected);
            assert_eq!(sample_size(b, a, r), expected - b);
        }
    }

    #[test]
    fn base_first_then_unique_samples() {
        let mut rng = StdRng::seed_from_u64(4);
        let base = numbered("b", 20);
        let aux = numbered("a", 30);
        let out = mix_datasets(&base, &aux, 1.0, "src", "tgt", &mut rng).unwrap();

        let rows: Vec<_> = out.pairs("src", "tgt").unwrap().map(Result::unwrap).collect();
        let base_rows: Vec<_> = base.pairs("src", "tgt").unwrap().map(Result::unwrap).collect();
        assert_eq!(&rows[..20], &base_rows[..]);

        let sampled: HashSet<&str> = rows[20..].iter().map(|e| e.source).collect();
        assert_eq!(sampled.len(), 20);
        assert!(rows[20..].iter().all(|e| e.source.starts_with("a src")));
        // alignment is kept for sampled rows
        assert!(rows[20..]
            .iter()
            .all(|e| e.source.replace("src", "tgt") == e.target));
    }

    #[test]
    fn deterministic() {
        let base = numbered("b", 40);
        let aux = numbered("a", 100);
        let a = mix_datasets(&base, &aux, 0.5, "src", "tgt", &mut StdRng::seed_from_u64(26));
        let b = mix_datasets(&base, &aux, 0.5, "src", "tgt", &mut StdRng::seed_from_u64(26));
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn drops_other_columns() {
        let mut rng = StdRng::seed_from_u64(0);
        let base = Dataset::new(
            vec!["book".into(), "src".into(), "tgt".into()],
            vec![vec![Some("gen".into()), Some("a".into()), Some("x".into())]],
        )
        .unwrap();
        let out = mix_datasets(&base, &numbered("a", 3), 2.0, "src", "tgt", &mut rng).unwrap();
        assert_eq!(out.columns(), &["src".to_string(), "tgt".to_string()]);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn negative_ratio() {
        let mut rng = StdRng::seed_from_u64(0);
        let r = mix_datasets(&numbered("b", 2), &numbered("a", 2), -0.5, "src", "tgt", &mut rng);
        assert!(matches!(r, Err(Error::Configuration(_))));
    }

    #[test]
    fn missing_column_in_auxiliary() {
        let mut rng = StdRng::seed_from_u64(0);
        let aux = Dataset::from_pairs("src", "other", vec![("a", "b")]);
        let r = mix_datasets(&numbered("b", 2), &aux, 0.5, "src", "tgt", &mut rng);
        assert!(matches!(r, Err(Error::Configuration(_))));
    }
}
