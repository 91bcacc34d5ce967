// bin/commands/bin.rs

use super::{output_writer, Format, InputArgs};
use bedcontainer::{Bed12, Bed3, Bed6, BedError, Interval};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Args)]
pub struct BinArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of bins per record
    #[arg(short = 'n', long)]
    pub n_bins: u32,

    /// Skip records shorter than the number of bins instead of failing
    #[arg(long)]
    pub skip_short: bool,

    /// Output file. Defaults to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: BinArgs) -> Result<(), BedError> {
    match args.input.format {
        Format::Bed3 => run_typed::<Bed3>(args),
        Format::Bed6 => run_typed::<Bed6>(args),
        Format::Bed12 => run_typed::<Bed12>(args),
    }
}

fn run_typed<T: Interval>(args: BinArgs) -> Result<(), BedError> {
    if args.n_bins == 0 {
        return Err("--n-bins must be at least 1".into());
    }

    let start = Instant::now();
    let container = args.input.load::<T>()?;
    let mut writer = output_writer(args.output)?;

    let pb = ProgressBar::new(container.len() as u64).with_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({percent}%) [{eta_precise}]")?
            .progress_chars("=> "),
    );

    let mut n_skipped = 0;
    for entry in &container {
        match entry.bin(args.n_bins) {
            Ok(bins) => bins.write_to(&mut writer)?,
            Err(BedError::InvalidBinCount { .. }) if args.skip_short => n_skipped += 1,
            Err(e) => return Err(e),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();
    writer.flush()?;

    if n_skipped > 0 {
        warn!("skipped {} records shorter than {} bases", n_skipped, args.n_bins);
    }
    info!("binned {} records in {:?}", container.len() - n_skipped, start.elapsed());
    Ok(())
}
