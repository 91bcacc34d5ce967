// alignment.rs

use crate::error::BedError;

/// A source of aligned reads, e.g. an indexed BAM reader.
///
/// Implement this over whatever alignment access layer is at hand; intervals
/// only forward their coordinates to it (see
/// [`Interval::overlapping_reads`](crate::Interval::overlapping_reads)).
pub trait AlignmentSource {
    type Record;

    /// Fetch all reads overlapping [start, end) on `chrom`.
    fn fetch(&self, chrom: &str, start: u32, end: u32) -> Result<Vec<Self::Record>, BedError>;
}
