// records/bed6.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{check_fields, collect_extras, parse_coordinate, Bed3, Interval};
use crate::error::BedError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    Forward,
    Reverse,
}

impl FromStr for Strand {
    type Err = BedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            other => Err(BedError::InvalidStrand(other.to_string())),
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

/// The score column. Anything that is not an integer reads as `Unknown`,
/// written back as `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Score {
    Value(i64),
    Unknown,
}

impl Score {
    pub fn parse(field: &str) -> Self {
        field.trim().parse().map_or(Score::Unknown, Score::Value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Value(value) => write!(f, "{}", value),
            Score::Unknown => write!(f, "."),
        }
    }
}

/// A 6-column annotated region.
#[derive(Debug, Clone)]
pub struct Bed6 {
    region: Bed3,
    name: String,
    score: Score,
    strand: Strand,
}

fn validate_name(name: &str) -> Result<(), BedError> {
    if name.is_empty() {
        return Err(BedError::EmptyName);
    }
    Ok(())
}

impl Bed6 {
    pub fn new(
        chrom: impl Into<String>,
        start: u32,
        end: u32,
        name: impl Into<String>,
        score: Score,
        strand: Strand,
    ) -> Result<Self, BedError> {
        Self::from_region(Bed3::new(chrom, start, end)?, name, score, strand)
    }

    pub fn from_region(
        region: Bed3,
        name: impl Into<String>,
        score: Score,
        strand: Strand,
    ) -> Result<Self, BedError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            region,
            name,
            score,
            strand,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), BedError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_score(&mut self, score: Score) {
        self.score = score;
    }

    pub fn set_strand(&mut self, strand: Strand) {
        self.strand = strand;
    }
}

impl Interval for Bed6 {
    const N_FIELDS: usize = 6;

    fn from_fields(fields: &[&str], keep_extras: bool) -> Result<Self, BedError> {
        check_fields(fields, Self::N_FIELDS)?;
        let start = parse_coordinate(fields[1])?;
        let end = parse_coordinate(fields[2])?;
        let strand: Strand = fields[5].parse()?;
        let extras = collect_extras(fields, Self::N_FIELDS, keep_extras);
        let region = Bed3::with_extras(fields[0], start, end, extras)?;
        Self::from_region(region, fields[3], Score::parse(fields[4]), strand)
    }

    fn region(&self) -> &Bed3 {
        &self.region
    }

    fn region_mut(&mut self) -> &mut Bed3 {
        &mut self.region
    }

    fn strand(&self) -> Option<Strand> {
        Some(self.strand)
    }
}

impl PartialEq for Bed6 {
    fn eq(&self, other: &Self) -> bool {
        self.region == other.region
            && self.name == other.name
            && self.score == other.score
            && self.strand == other.strand
    }
}

impl Eq for Bed6 {}

impl fmt::Display for Bed6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.region, self.name, self.score, self.strand
        )
    }
}
