//! records/binning.rs
//!
//! # Region Binning
//!
//! A region [start, end) of length L is split into n contiguous, non-overlapping bins that
//! cover it exactly. Integer division leaves a remainder r = L mod n; the first r bins absorb
//! one extra base each, so bin sizes are
//!
//!   ceil(L / n)   for the first r bins
//!   floor(L / n)  for the remaining n - r bins
//!
//! and no two bins differ in size by more than one. For example, [100, 110) into 3 bins:
//!
//!   L = 10, q = 3, r = 1  ->  sizes [4, 3, 3]  ->  [100, 104), [104, 107), [107, 110)
//!
//! Bins are produced left to right by successively appending each bin's right boundary.
//! Zero-length bins are never produced, so n must be in 1..=L.

use crate::error::BedError;

/// Split [start, end) into `n_bins` (start, end) pairs, left to right.
pub fn split_region(start: u32, end: u32, n_bins: u32) -> Result<Vec<(u32, u32)>, BedError> {
    let length = end.saturating_sub(start);
    if n_bins == 0 || n_bins > length {
        return Err(BedError::InvalidBinCount { n_bins, length });
    }

    let base_size = length / n_bins;
    let remainder = length % n_bins;

    let mut bins = Vec::with_capacity(n_bins as usize);
    let mut left = start;
    for i in 0..n_bins {
        let size = if i < remainder { base_size + 1 } else { base_size };
        let right = left + size;
        bins.push((left, right));
        left = right;
    }
    debug_assert_eq!(left, end);
    Ok(bins)
}
