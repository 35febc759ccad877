//! Linear min-max rescaling of word frequencies into font sizes
//!
//! The largest frequency maps to the maximum size and the frequency of the
//! last displayed word maps to 1, with everything in between linearly
//! interpolated and rounded to whole pixels.

use log::debug;

/// Rescale the frequencies of the top `threshold` words into `[1, max_size]`
///
/// Returns one size per word in `frequencies[..min(threshold, len)]`. When
/// fewer than `threshold` words exist the raw frequencies are returned
/// unchanged, so small corpora are drawn at their counts.
///
/// `frequencies` must be sorted in non-increasing order. If every displayed
/// frequency is equal, all words get the mid-range size `(max_size + 1) / 2`.
pub fn normalize_sizes(frequencies: &[u32], threshold: usize, max_size: u32) -> Vec<u32> {
    let displayed = frequencies.get(..threshold).unwrap_or(frequencies);

    if threshold == 0 || threshold > frequencies.len() {
        return displayed.to_vec();
    }

    let (Some(&max_count), Some(&min_count)) = (displayed.first(), displayed.last()) else {
        return Vec::new();
    };

    if max_count == min_count {
        debug!("All {threshold} displayed words share frequency {max_count}, using mid-range size");
        return vec![mid_range_size(max_size); displayed.len()];
    }

    let range = f64::from(max_count) - f64::from(min_count);
    let scale = f64::from(max_size.saturating_sub(1));
    displayed
        .iter()
        .map(|&count| {
            let fraction = (f64::from(count) - f64::from(min_count)) / range;
            (fraction * scale + 1.0).round().clamp(1.0, f64::from(max_size.max(1))) as u32
        })
        .collect()
}

/// Size used when normalization has no spread to work with
pub const fn mid_range_size(max_size: u32) -> u32 {
    max_size.saturating_add(1) / 2
}
