//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use crate::config::AugmentConfig;
use crate::error::Error;

#[derive(Debug, StructOpt)]
#[structopt(name = "paraug", about = "parallel corpus augmentation tool.")]
/// Holds every command that is callable by the `paraug` command.
pub enum Paraug {
    #[structopt(about = "Augment a parallel corpus with noisy source variants, optionally mixing in an auxiliary corpus")]
    Augment(Augment),
    #[structopt(about = "Keep meaningful pairs of two line-aligned files")]
    Filter(Filter),
}

#[derive(Debug, StructOpt)]
/// Augment command and parameters.
///
/// Values not given on the command line come from the config file, if any, or from defaults.
///
/// ```sh
/// paraug augment data/processed/ceb_es.csv data/augmented -n 2 --aux data/processed/ceb_tsg.csv --ratio 0.3
/// ```
pub struct Augment {
    #[structopt(parse(from_os_str), help = "source corpus (csv file with a header row)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(long = "split", help = "split name", default_value = "train")]
    pub split: String,
    #[structopt(
        parse(from_os_str),
        short = "c",
        long = "config",
        help = "json config file"
    )]
    pub config: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "aux",
        help = "auxiliary corpus (csv) to mix in"
    )]
    pub auxiliary: Option<PathBuf>,
    #[structopt(long = "ratio", help = "auxiliary rows to add, relative to the augmented corpus size")]
    pub mix_ratio: Option<f64>,
    #[structopt(short = "n", long = "copies", help = "noisy copies per sentence")]
    pub n_copies: Option<usize>,
    #[structopt(long = "seed", help = "random seed")]
    pub seed: Option<u64>,
    #[structopt(long = "swap-prob")]
    pub swap_prob: Option<f64>,
    #[structopt(long = "drop-prob")]
    pub drop_prob: Option<f64>,
    #[structopt(long = "dup-prob")]
    pub dup_prob: Option<f64>,
    #[structopt(long = "source-column")]
    pub source_column: Option<String>,
    #[structopt(long = "target-column")]
    pub target_column: Option<String>,
    #[structopt(long = "normalize", help = "clean and normalize sentences first")]
    pub normalize: bool,
}

impl Augment {
    /// Build the run settings: config file (or defaults), then command line overrides.
    pub fn config(&self) -> Result<AugmentConfig, Error> {
        let mut config = match &self.config {
            Some(path) => AugmentConfig::from_path(path)?,
            None => AugmentConfig::default(),
        };

        if let Some(v) = self.mix_ratio {
            config.mix_ratio = v;
        }
        if let Some(v) = self.n_copies {
            config.n_copies = v;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }
        if let Some(v) = self.swap_prob {
            config.swap_prob = v;
        }
        if let Some(v) = self.drop_prob {
            config.drop_prob = v;
        }
        if let Some(v) = self.dup_prob {
            config.dup_prob = v;
        }
        if let Some(v) = &self.source_column {
            config.source_column = v.clone();
        }
        if let Some(v) = &self.target_column {
            config.target_column = v.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, StructOpt)]
/// Filter command and parameters.
pub struct Filter {
    #[structopt(parse(from_os_str), help = "source language file (one sentence per line)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "target language file (one sentence per line)")]
    pub tgt: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(long = "min-words", default_value = "4")]
    pub min_words: usize,
    #[structopt(long = "source-column", default_value = "language1")]
    pub source_column: String,
    #[structopt(long = "target-column", default_value = "language2")]
    pub target_column: String,
}

#[cfg(test)]
mod tests {
    use structopt::StructOpt;

    use super::Paraug;
    use crate::error::Error;

    #[test]
    fn augment_overrides() {
        let opt = Paraug::from_iter(&[
            "paraug", "augment", "in.csv", "out", "-n", "3", "--seed", "7", "--swap-prob", "0.2",
        ]);
        match opt {
            Paraug::Augment(a) => {
                assert_eq!(a.split, "train");
                let c = a.config().unwrap();
                assert_eq!(c.n_copies, 3);
                assert_eq!(c.seed, 7);
                assert_eq!(c.swap_prob, 0.2);
                assert_eq!(c.drop_prob, 0.03);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn augment_invalid_override() {
        let opt = Paraug::from_iter(&["paraug", "augment", "in.csv", "out", "--ratio=-1"]);
        match opt {
            Paraug::Augment(a) => assert!(matches!(a.config(), Err(Error::Configuration(_)))),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn filter_defaults() {
        let opt = Paraug::from_iter(&["paraug", "filter", "a.ceb", "a.es", "out"]);
        match opt {
            Paraug::Filter(f) => {
                assert_eq!(f.min_words, 4);
                assert_eq!(f.source_column, "language1");
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
