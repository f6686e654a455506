/*! Reading and writing corpora.

- CSV tables with a header row ([reader::read_csv], [writer::write_csv]),
- line-aligned parallel files, one sentence per line ([reader::read_parallel_files], [writer::write_parallel_files]).
!*/
pub mod reader;
pub mod writer;

pub use reader::{read_csv, read_lines, read_parallel_files};
pub use writer::{write_csv, write_parallel_files, ParallelWriter};
