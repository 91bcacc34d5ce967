// records/mod.rs
//
// The interval hierarchy: a plain 3-column region, a 6-column annotated region
// with name/score/strand, and a 12-column block region. The richer variants
// compose the plain one and expose it through `Interval::region()`.

mod bed12;
mod bed3;
mod bed6;
pub mod binning;

pub use bed12::Bed12;
pub use bed3::Bed3;
pub use bed6::{Bed6, Score, Strand};

use std::cmp::Ordering;
use std::fmt;

use crate::alignment::AlignmentSource;
use crate::container::BedContainer;
use crate::error::BedError;

/// A genomic interval record that can live in a [`BedContainer`].
///
/// Coordinates are 0-based, half-open, and `start < end` holds after every
/// successful call. Mutators validate first and leave the record untouched on
/// error.
pub trait Interval: Clone + fmt::Debug + fmt::Display + PartialEq + Send + Sync {
    /// Number of fixed leading columns in the text representation.
    const N_FIELDS: usize;

    /// Build a record from split text columns. Columns past `N_FIELDS` are
    /// kept as extras only when `keep_extras` is set.
    fn from_fields(fields: &[&str], keep_extras: bool) -> Result<Self, BedError>;

    fn region(&self) -> &Bed3;

    fn region_mut(&mut self) -> &mut Bed3;

    /// The strand, for variants that carry one.
    fn strand(&self) -> Option<Strand> {
        None
    }

    fn chrom(&self) -> &str {
        self.region().chrom()
    }

    fn start(&self) -> u32 {
        self.region().start()
    }

    fn end(&self) -> u32 {
        self.region().end()
    }

    fn width(&self) -> u32 {
        self.end() - self.start()
    }

    fn extras(&self) -> &[String] {
        self.region().extras()
    }

    fn has_extras(&self) -> bool {
        !self.extras().is_empty()
    }

    fn add_extra(&mut self, value: impl Into<String>) {
        self.region_mut().add_extra(value)
    }

    fn set_chrom(&mut self, chrom: impl Into<String>) -> Result<(), BedError> {
        self.region_mut().set_chrom(chrom)
    }

    fn set_start(&mut self, start: u32) -> Result<(), BedError> {
        self.region_mut().set_start(start)
    }

    fn set_end(&mut self, end: u32) -> Result<(), BedError> {
        self.region_mut().set_end(end)
    }

    /// Closed-range overlap test on the same chromosome. In strand-aware mode
    /// records on different strands never overlap.
    fn overlaps(&self, other: &Self, strand_aware: bool) -> bool {
        if strand_aware && self.strand() != other.strand() {
            return false;
        }
        self.chrom() == other.chrom() && self.start() <= other.end() && other.start() <= self.end()
    }

    /// Order by start coordinate. Records on different chromosomes are
    /// incomparable and yield `None`.
    fn cmp_position(&self, other: &Self) -> Option<Ordering> {
        if self.chrom() != other.chrom() {
            return None;
        }
        Some(self.start().cmp(&other.start()))
    }

    /// Extend the left bound by `n` (negative `n` shrinks). Strand-aware on a
    /// reverse-strand record this acts on the 5' end, which is the right bound.
    fn clip_left(&mut self, n: i64, strand_aware: bool) -> Result<(), BedError> {
        let region = self.region();
        let (start, end) = if is_reverse(self, strand_aware) {
            (region.start(), offset(region.end(), n)?)
        } else {
            (offset(region.start(), negate(n)?)?, region.end())
        };
        self.region_mut().set_bounds(start, end)
    }

    /// Extend the right bound by `n` (negative `n` shrinks). Strand-aware on a
    /// reverse-strand record this acts on the 3' end, which is the left bound.
    fn clip_right(&mut self, n: i64, strand_aware: bool) -> Result<(), BedError> {
        let region = self.region();
        let (start, end) = if is_reverse(self, strand_aware) {
            (offset(region.start(), negate(n)?)?, region.end())
        } else {
            (region.start(), offset(region.end(), n)?)
        };
        self.region_mut().set_bounds(start, end)
    }

    /// Extend both bounds by `n` in one step.
    fn clip_both(&mut self, n: i64) -> Result<(), BedError> {
        let start = offset(self.start(), negate(n)?)?;
        let end = offset(self.end(), n)?;
        self.region_mut().set_bounds(start, end)
    }

    /// Move the whole record by `n`. Positive `n` moves right, or downstream
    /// when strand-aware.
    fn shift(&mut self, n: i64, strand_aware: bool) -> Result<(), BedError> {
        let n = if is_reverse(self, strand_aware) {
            negate(n)?
        } else {
            n
        };
        let start = offset(self.start(), n)?;
        let end = offset(self.end(), n)?;
        self.region_mut().set_bounds(start, end)
    }

    /// Collapse to the leftmost base. Strand-aware, this keeps the
    /// transcription start site instead.
    fn collapse_left(&mut self, strand_aware: bool) -> Result<(), BedError> {
        let (start, end) = if is_reverse(self, strand_aware) {
            (self.end() - 1, self.end())
        } else {
            (self.start(), self.start() + 1)
        };
        self.region_mut().set_bounds(start, end)
    }

    /// Collapse to the rightmost base. Strand-aware, this keeps the
    /// transcription end site instead.
    fn collapse_right(&mut self, strand_aware: bool) -> Result<(), BedError> {
        let (start, end) = if is_reverse(self, strand_aware) {
            (self.start(), self.start() + 1)
        } else {
            (self.end() - 1, self.end())
        };
        self.region_mut().set_bounds(start, end)
    }

    /// Split into `n_bins` contiguous pieces covering the record exactly; see
    /// [`binning::split_region`]. Each piece keeps this record's annotations.
    fn bin(&self, n_bins: u32) -> Result<BedContainer<Self>, BedError> {
        let bounds = binning::split_region(self.start(), self.end(), n_bins)?;
        let mut bins = BedContainer::new(self.has_extras());
        for (start, end) in bounds {
            let mut piece = self.clone();
            piece.region_mut().set_bounds(start, end)?;
            bins.add(piece);
        }
        Ok(bins)
    }

    /// All aligned reads overlapping this record, straight from `source`.
    fn overlapping_reads<S: AlignmentSource>(
        &self,
        source: &S,
    ) -> Result<Vec<S::Record>, BedError> {
        source.fetch(self.chrom(), self.start(), self.end())
    }
}

fn is_reverse<T: Interval>(interval: &T, strand_aware: bool) -> bool {
    strand_aware && interval.strand() == Some(Strand::Reverse)
}

fn negate(n: i64) -> Result<i64, BedError> {
    n.checked_neg()
        .ok_or_else(|| BedError::InvalidCoordinate(format!("-({})", n)))
}

/// Apply a signed offset to a coordinate, rejecting results below zero.
pub(crate) fn offset(position: u32, delta: i64) -> Result<u32, BedError> {
    let moved = (position as i64)
        .checked_add(delta)
        .ok_or_else(|| BedError::InvalidCoordinate(format!("{} + {}", position, delta)))?;
    if moved < 0 {
        return Err(BedError::NegativeCoordinate(moved));
    }
    u32::try_from(moved).map_err(|_| BedError::InvalidCoordinate(moved.to_string()))
}

/// Parse a non-negative integer column.
pub(crate) fn parse_coordinate(field: &str) -> Result<u32, BedError> {
    let value: i64 = field
        .trim()
        .parse()
        .map_err(|_| BedError::InvalidCoordinate(field.to_string()))?;
    if value < 0 {
        return Err(BedError::NegativeCoordinate(value));
    }
    u32::try_from(value).map_err(|_| BedError::InvalidCoordinate(field.to_string()))
}

pub(crate) fn check_fields(fields: &[&str], expected: usize) -> Result<(), BedError> {
    if fields.len() < expected {
        return Err(BedError::MissingFields {
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

/// Trailing columns as owned extras, or none when they are not retained.
pub(crate) fn collect_extras(fields: &[&str], n_fixed: usize, keep_extras: bool) -> Vec<String> {
    if !keep_extras {
        return Vec::new();
    }
    fields
        .iter()
        .skip(n_fixed)
        .map(|field| field.to_string())
        .collect()
}
