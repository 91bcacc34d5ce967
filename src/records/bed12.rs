// records/bed12.rs
use std::fmt;

use super::{check_fields, collect_extras, parse_coordinate, Bed3, Bed6, Interval, Score, Strand};
use crate::error::BedError;

/// A 12-column block region. Thick bounds, color and block layout are carried
/// through parsing and serialization but not yet checked against the region.
// TODO: validate that blocks lie within [start, end) and block_count matches
// the size/start lists, and clamp thick bounds when bin/clip/shift move the
// region (a binned piece currently keeps the parent's thick bounds).
#[derive(Debug, Clone, PartialEq)]
pub struct Bed12 {
    base: Bed6,
    thick_start: u32,
    thick_end: u32,
    item_rgb: String,
    block_count: u32,
    block_sizes: Vec<u32>,
    block_starts: Vec<u32>,
}

fn parse_list(field: &str) -> Result<Vec<u32>, BedError> {
    field
        .split(',')
        .filter(|value| !value.is_empty())
        .map(parse_coordinate)
        .collect()
}

fn join_list(values: &[u32]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl Bed12 {
    pub fn new(base: Bed6) -> Self {
        let (thick_start, thick_end) = (base.start(), base.end());
        Self {
            base,
            thick_start,
            thick_end,
            item_rgb: "0".to_string(),
            block_count: 0,
            block_sizes: Vec::new(),
            block_starts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn score(&self) -> Score {
        self.base.score()
    }

    pub fn thick_start(&self) -> u32 {
        self.thick_start
    }

    pub fn thick_end(&self) -> u32 {
        self.thick_end
    }

    pub fn item_rgb(&self) -> &str {
        &self.item_rgb
    }

    pub fn block_count(&self) -> u32 {
        self.block_count
    }

    pub fn block_sizes(&self) -> &[u32] {
        &self.block_sizes
    }

    pub fn block_starts(&self) -> &[u32] {
        &self.block_starts
    }
}

impl Interval for Bed12 {
    const N_FIELDS: usize = 12;

    fn from_fields(fields: &[&str], keep_extras: bool) -> Result<Self, BedError> {
        check_fields(fields, Self::N_FIELDS)?;
        let start = parse_coordinate(fields[1])?;
        let end = parse_coordinate(fields[2])?;
        let strand: Strand = fields[5].parse()?;
        let extras = collect_extras(fields, Self::N_FIELDS, keep_extras);
        let region = Bed3::with_extras(fields[0], start, end, extras)?;
        let base = Bed6::from_region(region, fields[3], Score::parse(fields[4]), strand)?;
        Ok(Self {
            base,
            thick_start: parse_coordinate(fields[6])?,
            thick_end: parse_coordinate(fields[7])?,
            item_rgb: fields[8].to_string(),
            block_count: parse_coordinate(fields[9])?,
            block_sizes: parse_list(fields[10])?,
            block_starts: parse_list(fields[11])?,
        })
    }

    fn region(&self) -> &Bed3 {
        self.base.region()
    }

    fn region_mut(&mut self) -> &mut Bed3 {
        self.base.region_mut()
    }

    fn strand(&self) -> Option<Strand> {
        self.base.strand()
    }
}

impl fmt::Display for Bed12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.base,
            self.thick_start,
            self.thick_end,
            self.item_rgb,
            self.block_count,
            join_list(&self.block_sizes),
            join_list(&self.block_starts)
        )
    }
}
