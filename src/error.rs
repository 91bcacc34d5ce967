// error.rs

#[cfg(feature = "cli")]
use indicatif::style::TemplateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BedError {
    #[error("Invalid chromosome: name must be a non-empty string")]
    EmptyChromosome,

    #[error("Invalid coordinate '{0}': not an integer")]
    InvalidCoordinate(String),

    #[error("Invalid coordinate {0}: coordinates must be non-negative")]
    NegativeCoordinate(i64),

    #[error("Invalid interval: end ({end}) must be greater than start ({start})")]
    InvalidInterval { start: u32, end: u32 },

    #[error("Invalid strand '{0}': must be '+' or '-'")]
    InvalidStrand(String),

    #[error("Invalid name: name must be a non-empty string")]
    EmptyName,

    #[error("Invalid record: expected at least {expected} fields, found {found}")]
    MissingFields { expected: usize, found: usize },

    #[error("Chromosome '{0}' is not present in the container")]
    UnknownChromosome(String),

    #[error("Negative index {0} is not accepted")]
    NegativeIndex(i64),

    #[error("Index {index} out of bounds for container of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("No entry equal to '{0}' found in the container")]
    EntryNotFound(String),

    #[error("Cannot split interval of length {length} into {n_bins} bins")]
    InvalidBinCount { n_bins: u32, length: u32 },

    #[error("Line {line}: {source}")]
    Record {
        line: u64,
        #[source]
        source: Box<BedError>,
    },

    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("TSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("{0}")]
    StringError(String),

    #[cfg(feature = "cli")]
    #[error("Template error: {0}")]
    TemplateError(#[from] TemplateError),
}

impl BedError {
    /// Attach the 1-based line number of the record that failed.
    pub fn at_line(self, line: u64) -> Self {
        BedError::Record {
            line,
            source: Box::new(self),
        }
    }
}

// Add a convenience implementation for &str errors
impl From<&str> for BedError {
    fn from(error: &str) -> Self {
        BedError::StringError(error.to_string())
    }
}
