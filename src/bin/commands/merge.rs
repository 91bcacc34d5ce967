// bin/commands/merge.rs

use super::{output_writer, Format};
use bedcontainer::{Bed12, Bed3, Bed6, BedContainer, BedError, Interval};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct MergeArgs {
    /// First input file; its records come first
    #[arg(value_name = "FILE_A")]
    pub first: PathBuf,

    /// Second input file
    #[arg(value_name = "FILE_B")]
    pub second: PathBuf,

    /// Column layout of both inputs
    #[arg(short = 'F', long, value_enum, default_value_t = Format::Bed3)]
    pub format: Format,

    /// Keep extra columns of the first input
    #[arg(long)]
    pub keep_extras_a: bool,

    /// Keep extra columns of the second input
    #[arg(long)]
    pub keep_extras_b: bool,

    /// Sort the merged records
    #[arg(short, long)]
    pub sort: bool,

    /// Output file. Defaults to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: MergeArgs) -> Result<(), BedError> {
    match args.format {
        Format::Bed3 => run_typed::<Bed3>(args),
        Format::Bed6 => run_typed::<Bed6>(args),
        Format::Bed12 => run_typed::<Bed12>(args),
    }
}

fn run_typed<T: Interval>(args: MergeArgs) -> Result<(), BedError> {
    let mut a = BedContainer::<T>::new(args.keep_extras_a);
    a.load(&args.first)?;
    let mut b = BedContainer::<T>::new(args.keep_extras_b);
    b.load(&args.second)?;

    let mut merged = BedContainer::merge(&a, &b);
    if args.sort {
        merged.sort();
    }
    info!(
        "merged {} + {} records over {} chromosomes",
        a.len(),
        b.len(),
        merged.n_chroms()
    );
    merged.write_to(output_writer(args.output)?)
}
