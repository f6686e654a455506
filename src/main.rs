//! # paraug
//!
//! Augmentation and filtering of parallel corpora for machine translation.
//!
//! ```sh
//! paraug 0.1.0
//! parallel corpus augmentation tool.
//!
//! USAGE:
//!     paraug <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     augment    Augment a parallel corpus with noisy source variants, optionally mixing in an auxiliary corpus
//!     filter     Keep meaningful pairs of two line-aligned files
//!     help       Prints this message or the help of the given subcommand(s)
//! ```
use paraug::cli;
use paraug::error::Error;
use paraug::pipelines::{Augment, FilterCorpus, Pipeline};
use structopt::StructOpt;

#[macro_use]
extern crate log;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Paraug::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Paraug::Augment(a) => {
            let config = a.config()?;
            let p = Augment::new(a.src, a.dst, config)
                .split_name(&a.split)
                .auxiliary(a.auxiliary)
                .normalize(a.normalize);
            let n = p.run()?;
            info!("done, {} pairs written", n);
        }

        cli::Paraug::Filter(f) => {
            let p = FilterCorpus::new(f.src, f.tgt, f.dst, f.min_words)
                .columns(&f.source_column, &f.target_column);
            let n = p.run()?;
            info!("done, {} pairs kept", n);
        }
    };
    Ok(())
}
