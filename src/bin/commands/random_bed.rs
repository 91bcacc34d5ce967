// bin/commands/random_bed.rs

use super::output_writer;
use bedcontainer::{Bed6, BedContainer, BedError, Interval, Score, Strand};
use clap::Args;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use std::path::PathBuf;
use tracing::info;

const CHROMS: &[&str] = &["chr1", "chr2", "chr3", "chr4", "chr5", "chrX", "chrY"];
const FEATURE_TYPES: &[&str] = &[
    "gene", "exon", "promoter", "enhancer", "UTR", "intron", "repeat", "peak",
];

#[derive(Args)]
pub struct RandomBedArgs {
    /// Output file path (.bed or .bed.gz)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of records to generate
    #[arg(short = 'n', long, default_value = "1000000")]
    pub num_records: usize,

    /// Maximum number of extra columns per record
    #[arg(long, default_value = "3")]
    pub max_extras: usize,

    /// Optional seed for random number generation
    #[arg(short, long)]
    pub seed: Option<u64>,
}

pub fn run(args: RandomBedArgs) -> Result<(), BedError> {
    info!(
        "generating {} random BED6 records to {}",
        args.num_records,
        args.output
            .as_ref()
            .map_or("<stdout>".to_string(), |v| v.to_string_lossy().to_string())
    );

    let container = generate_random_records(args.num_records, args.max_extras, args.seed)?;
    container.write_to(output_writer(args.output)?)
}

/// Records come out in generation order, unsorted.
fn generate_random_records(
    num_records: usize,
    max_extras: usize,
    seed: Option<u64>,
) -> Result<BedContainer<Bed6>, BedError> {
    let mut rng = match seed {
        Some(s) => rand::rngs::StdRng::seed_from_u64(s),
        None => rand::rngs::StdRng::from_entropy(),
    };

    let mut container = BedContainer::new(max_extras > 0);
    for i in 0..num_records {
        container.add(generate_single_record(&mut rng, i, max_extras)?);
    }
    Ok(container)
}

fn generate_single_record<R: Rng>(
    rng: &mut R,
    id: usize,
    max_extras: usize,
) -> Result<Bed6, BedError> {
    let chrom = CHROMS.choose(rng).copied().unwrap_or("chr1");
    let start = rng.gen_range(0..1_000_000);
    let length = rng.gen_range(100..10_000);
    let score = if rng.gen_bool(0.1) {
        Score::Unknown
    } else {
        Score::Value(rng.gen_range(0..1000))
    };
    let strand = if rng.gen_bool(0.5) {
        Strand::Forward
    } else {
        Strand::Reverse
    };

    let mut record = Bed6::new(chrom, start, start + length, format!("feature{}", id), score, strand)?;
    for _ in 0..rng.gen_range(0..=max_extras) {
        let key = FEATURE_TYPES.choose(rng).copied().unwrap_or("peak");
        record.add_extra(format!("{}={}", key, rng.gen_range(0..100)));
    }
    Ok(record)
}
