// src/stats.rs

use serde::{Deserialize, Serialize};

use crate::{BedContainer, Interval};

/// Summary statistics over a container's entries.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContainerStats {
    pub n_entries: usize,
    pub n_chroms: usize,
    pub is_sorted: bool,
    pub keep_extras: bool,

    // Per-chromosome breakdown, in registry order
    pub chroms: Vec<ChromStats>,

    pub width_dist: SizeDistribution,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChromStats {
    pub chrom: String,
    pub n_entries: usize,
    /// Leftmost start on this chromosome.
    pub min_start: u32,
    /// Rightmost end on this chromosome.
    pub max_end: u32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SizeDistribution {
    pub min_size: u32,
    pub max_size: u32,
    pub mean_size: f64,
    pub median_size: f64,
}

impl SizeDistribution {
    fn from_widths(mut widths: Vec<u32>) -> Self {
        if widths.is_empty() {
            return Self::default();
        }
        widths.sort_unstable();
        let n = widths.len();
        let total: u64 = widths.iter().map(|&w| w as u64).sum();
        let median_size = if n % 2 == 0 {
            (widths[n / 2 - 1] as f64 + widths[n / 2] as f64) / 2.0
        } else {
            widths[n / 2] as f64
        };
        Self {
            min_size: widths[0],
            max_size: widths[n - 1],
            mean_size: total as f64 / n as f64,
            median_size,
        }
    }
}

impl ContainerStats {
    pub fn analyze<T: Interval>(container: &BedContainer<T>) -> Self {
        let chroms = container
            .chroms()
            .filter_map(|chrom| {
                let entries = container.entries_in(chrom).ok()?;
                Some(ChromStats {
                    chrom: chrom.to_string(),
                    n_entries: entries.len(),
                    min_start: entries.iter().map(|e| e.start()).min()?,
                    max_end: entries.iter().map(|e| e.end()).max()?,
                })
            })
            .collect();

        let widths = container.iter().map(|entry| entry.width()).collect();

        ContainerStats {
            n_entries: container.len(),
            n_chroms: container.n_chroms(),
            is_sorted: container.is_sorted(),
            keep_extras: container.keep_extras(),
            chroms,
            width_dist: SizeDistribution::from_widths(widths),
        }
    }

    pub fn summary(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("Entries: {}\n", self.n_entries));
        report.push_str(&format!("Chromosomes: {}\n", self.n_chroms));
        report.push_str(&format!("Sorted: {}\n", self.is_sorted));
        report.push_str(&format!("Extra fields kept: {}\n", self.keep_extras));
        report.push_str(&format!(
            "Widths: min {} / max {} / mean {:.2} / median {:.1}\n",
            self.width_dist.min_size,
            self.width_dist.max_size,
            self.width_dist.mean_size,
            self.width_dist.median_size
        ));
        for chrom in &self.chroms {
            report.push_str(&format!(
                "  {}\t{} entries\t[{}, {})\n",
                chrom.chrom, chrom.n_entries, chrom.min_start, chrom.max_end
            ));
        }
        report
    }
}
