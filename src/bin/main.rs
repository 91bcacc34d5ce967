#[cfg(feature = "cli")]
mod commands;

#[cfg(feature = "cli")]
mod cli {
    #[cfg(feature = "dev")]
    use crate::commands::random_bed;
    use crate::commands::{bin, get, merge, query, sort, stats};
    use bedcontainer::BedError;
    use clap::Parser;
    use tracing::Level;

    #[derive(Parser)]
    #[command(author, version, about, long_about = None)]
    pub struct Cli {
        /// Increase logging verbosity (-v debug, -vv trace)
        #[arg(short, long, action = clap::ArgAction::Count, global = true)]
        verbose: u8,

        #[command(subcommand)]
        command: Commands,
    }

    #[derive(clap::Subcommand)]
    enum Commands {
        /// Sort records by chromosome name, then start.
        Sort(sort::SortArgs),
        /// Concatenate the records of two files.
        Merge(merge::MergeArgs),
        /// Print records matching exact chromosome/start/end filters.
        Query(query::QueryArgs),
        /// Print the record at a flat index.
        Get(get::GetArgs),
        /// Split every record into equal-width bins.
        Bin(bin::BinArgs),
        /// Summarize a file's records.
        Stats(stats::StatsArgs),
        #[cfg(feature = "dev")]
        /// Generate a random BED file for benchmarking (only with dev feature)
        RandomBed(random_bed::RandomBedArgs),
    }

    fn init_logging(verbose: u8) {
        let level = match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn run() -> Result<(), BedError> {
        let cli = Cli::parse();
        init_logging(cli.verbose);
        match cli.command {
            Commands::Sort(args) => sort::run(args),
            Commands::Merge(args) => merge::run(args),
            Commands::Query(args) => query::run(args),
            Commands::Get(args) => get::run(args),
            Commands::Bin(args) => bin::run(args),
            Commands::Stats(args) => stats::run(args),
            #[cfg(feature = "dev")]
            Commands::RandomBed(args) => random_bed::run(args),
        }
    }
}

fn main() {
    #[cfg(feature = "cli")]
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("CLI feature not enabled. Please rebuild with --features cli");
        std::process::exit(1);
    }
}
