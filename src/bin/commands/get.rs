// bin/commands/get.rs

use super::{Format, InputArgs};
use bedcontainer::{Bed12, Bed3, Bed6, BedError, Interval};
use clap::Args;

#[derive(Args)]
pub struct GetArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// 0-based position across all chromosomes, in file order (or sorted order with --sort)
    #[arg(allow_negative_numbers = true)]
    pub index: i64,

    /// Sort before indexing
    #[arg(short, long)]
    pub sort: bool,
}

pub fn run(args: GetArgs) -> Result<(), BedError> {
    match args.input.format {
        Format::Bed3 => run_typed::<Bed3>(args),
        Format::Bed6 => run_typed::<Bed6>(args),
        Format::Bed12 => run_typed::<Bed12>(args),
    }
}

fn run_typed<T: Interval>(args: GetArgs) -> Result<(), BedError> {
    let mut container = args.input.load::<T>()?;
    if args.sort {
        container.sort();
    }
    let entry = container.at(args.index)?;
    container.write_entry(std::io::stdout().lock(), entry)
}
