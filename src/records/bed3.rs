// records/bed3.rs
use std::fmt;

use super::{check_fields, collect_extras, parse_coordinate, Interval};
use crate::error::BedError;

/// A plain 3-column region: chromosome, start, end, plus any opaque
/// trailing columns.
#[derive(Debug, Clone)]
pub struct Bed3 {
    chrom: String,
    start: u32,
    end: u32,
    extras: Vec<String>,
}

fn validate_chrom(chrom: &str) -> Result<(), BedError> {
    if chrom.is_empty() {
        return Err(BedError::EmptyChromosome);
    }
    Ok(())
}

fn validate_bounds(start: u32, end: u32) -> Result<(), BedError> {
    if start >= end {
        return Err(BedError::InvalidInterval { start, end });
    }
    Ok(())
}

impl Bed3 {
    pub fn new(chrom: impl Into<String>, start: u32, end: u32) -> Result<Self, BedError> {
        Self::with_extras(chrom, start, end, Vec::new())
    }

    pub fn with_extras(
        chrom: impl Into<String>,
        start: u32,
        end: u32,
        extras: Vec<String>,
    ) -> Result<Self, BedError> {
        let chrom = chrom.into();
        validate_chrom(&chrom)?;
        validate_bounds(start, end)?;
        Ok(Self {
            chrom,
            start,
            end,
            extras,
        })
    }

    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn extras(&self) -> &[String] {
        &self.extras
    }

    pub fn set_chrom(&mut self, chrom: impl Into<String>) -> Result<(), BedError> {
        let chrom = chrom.into();
        validate_chrom(&chrom)?;
        self.chrom = chrom;
        Ok(())
    }

    /// Checked against the currently stored end.
    pub fn set_start(&mut self, start: u32) -> Result<(), BedError> {
        validate_bounds(start, self.end)?;
        self.start = start;
        Ok(())
    }

    /// Checked against the currently stored start.
    pub fn set_end(&mut self, end: u32) -> Result<(), BedError> {
        validate_bounds(self.start, end)?;
        self.end = end;
        Ok(())
    }

    /// Replace both bounds at once.
    pub fn set_bounds(&mut self, start: u32, end: u32) -> Result<(), BedError> {
        validate_bounds(start, end)?;
        self.start = start;
        self.end = end;
        Ok(())
    }

    /// Append an extra column after the existing ones.
    pub fn add_extra(&mut self, value: impl Into<String>) {
        self.extras.push(value.into());
    }
}

impl Interval for Bed3 {
    const N_FIELDS: usize = 3;

    fn from_fields(fields: &[&str], keep_extras: bool) -> Result<Self, BedError> {
        check_fields(fields, Self::N_FIELDS)?;
        let start = parse_coordinate(fields[1])?;
        let end = parse_coordinate(fields[2])?;
        let extras = collect_extras(fields, Self::N_FIELDS, keep_extras);
        Self::with_extras(fields[0], start, end, extras)
    }

    fn region(&self) -> &Bed3 {
        self
    }

    fn region_mut(&mut self) -> &mut Bed3 {
        self
    }
}

// Extras do not take part in equality.
impl PartialEq for Bed3 {
    fn eq(&self, other: &Self) -> bool {
        self.chrom == other.chrom && self.start == other.start && self.end == other.end
    }
}

impl Eq for Bed3 {}

impl fmt::Display for Bed3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.chrom, self.start, self.end)
    }
}
