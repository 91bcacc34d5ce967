// bin/commands/sort.rs

use super::{output_writer, Format, InputArgs};
use bedcontainer::{Bed12, Bed3, Bed6, BedError, Interval};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Args)]
pub struct SortArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file. Defaults to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: SortArgs) -> Result<(), BedError> {
    match args.input.format {
        Format::Bed3 => run_typed::<Bed3>(args),
        Format::Bed6 => run_typed::<Bed6>(args),
        Format::Bed12 => run_typed::<Bed12>(args),
    }
}

fn run_typed<T: Interval>(args: SortArgs) -> Result<(), BedError> {
    let start = Instant::now();
    let mut container = args.input.load::<T>()?;
    container.sort();
    container.write_to(output_writer(args.output)?)?;
    info!("sorted {} records in {:?}", container.len(), start.elapsed());
    Ok(())
}
