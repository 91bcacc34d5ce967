// bin/commands/query.rs

use super::{output_writer, Format, InputArgs};
use bedcontainer::{Bed12, Bed3, Bed6, BedError, Filter, Interval};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct QueryArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only records on this chromosome
    #[arg(short, long)]
    pub chrom: Option<String>,

    /// Only records starting exactly here
    #[arg(short, long)]
    pub start: Option<u32>,

    /// Only records ending exactly here
    #[arg(short, long)]
    pub end: Option<u32>,

    /// Output file. Defaults to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: QueryArgs) -> Result<(), BedError> {
    match args.input.format {
        Format::Bed3 => run_typed::<Bed3>(args),
        Format::Bed6 => run_typed::<Bed6>(args),
        Format::Bed12 => run_typed::<Bed12>(args),
    }
}

fn run_typed<T: Interval>(args: QueryArgs) -> Result<(), BedError> {
    let container = args.input.load::<T>()?;

    let mut filter = Filter::new();
    if let Some(chrom) = args.chrom.as_deref() {
        filter = filter.chrom(chrom);
    }
    if let Some(start) = args.start {
        filter = filter.start(start);
    }
    if let Some(end) = args.end {
        filter = filter.end(end);
    }

    let hits = container.query(&filter)?;
    let mut writer = output_writer(args.output)?;
    for hit in &hits {
        container.write_entry(&mut writer, hit)?;
    }
    writer.flush()?;
    info!("{} of {} records matched", hits.len(), container.len());
    Ok(())
}
