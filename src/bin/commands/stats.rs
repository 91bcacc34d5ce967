// bin/commands/stats.rs

use super::{Format, InputArgs};
use bedcontainer::{Bed12, Bed3, Bed6, BedError, ContainerStats, Interval};
use clap::Args;
use std::time::Instant;
use tracing::info;

#[derive(Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Sort before summarizing, so chromosomes are listed by name
    #[arg(short, long)]
    pub sort: bool,
}

pub fn run(args: StatsArgs) -> Result<(), BedError> {
    match args.input.format {
        Format::Bed3 => run_typed::<Bed3>(args),
        Format::Bed6 => run_typed::<Bed6>(args),
        Format::Bed12 => run_typed::<Bed12>(args),
    }
}

fn run_typed<T: Interval>(args: StatsArgs) -> Result<(), BedError> {
    let start = Instant::now();
    let mut container = args.input.load::<T>()?;
    if args.sort {
        container.sort();
    }
    let stats = ContainerStats::analyze(&container);
    print!("{}", stats.summary());
    info!("analysis completed in {:?}", start.elapsed());
    Ok(())
}
