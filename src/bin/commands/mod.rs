// bin/commands/mod.rs

pub mod bin;
pub mod get;
pub mod merge;
pub mod query;
#[cfg(feature = "dev")]
pub mod random_bed;
pub mod sort;
pub mod stats;

use bedcontainer::io::OutputStream;
use bedcontainer::{BedContainer, BedError, Interval};
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

/// Column layout of the input records.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    Bed3,
    Bed6,
    Bed12,
}

#[derive(Args)]
pub struct InputArgs {
    /// Input BED file (plain or gzipped)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Column layout of the input
    #[arg(short = 'F', long, value_enum, default_value_t = Format::Bed3)]
    pub format: Format,

    /// Keep columns past the fixed ones and write them back out
    #[arg(short = 'x', long)]
    pub keep_extras: bool,
}

impl InputArgs {
    pub fn load<T: Interval>(&self) -> Result<BedContainer<T>, BedError> {
        let mut container = BedContainer::new(self.keep_extras);
        container.load(&self.input)?;
        Ok(container)
    }
}

/// Output to a file (gzipped if it ends in .gz), or stdout.
pub fn output_writer(output: Option<PathBuf>) -> Result<Box<dyn Write>, BedError> {
    let writer = OutputStream::builder()
        .filepath(output)
        .buffer_size(256 * 1024)
        .build()
        .writer()?;
    Ok(writer)
}
