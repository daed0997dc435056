//! Byte-value histogram: one 64-bit counter per possible byte.

use serde::{Serialize, Serializer};
use std::ops::Index;

/// Number of buckets: one per byte value 0..=255.
pub const BUCKETS: usize = 256;

/// Occurrence counts indexed by byte value.
///
/// Owned by a single worker while it is being filled; after it is emitted it is only
/// read or merged. Serializes as a plain 256-element array.
#[derive(Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; BUCKETS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    /// All-zero histogram.
    pub const fn new() -> Self {
        Self {
            counts: [0; BUCKETS],
        }
    }

    /// Count one occurrence of `byte`.
    #[inline]
    pub fn increment(&mut self, byte: u8) {
        self.counts[byte as usize] += 1;
    }

    /// Count every byte of `bytes`.
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.counts[b as usize] += 1;
        }
    }

    /// Element-wise `self[i] += partial[i]`. Order of merges does not affect the result.
    pub fn merge_into(&mut self, partial: &Histogram) {
        for (total, n) in self.counts.iter_mut().zip(partial.counts.iter()) {
            *total += n;
        }
    }

    pub fn get(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// The 256 counters, index = byte value.
    pub fn counts(&self) -> &[u64; BUCKETS] {
        &self.counts
    }

    /// Sum of all counters, i.e. bytes counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// True when no byte has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    /// Largest counter in `range` (used by renderers to scale bars).
    pub fn max_in(&self, range: std::ops::RangeInclusive<u8>) -> u64 {
        range.map(|b| self.get(b)).max().unwrap_or(0)
    }
}

impl Index<u8> for Histogram {
    type Output = u64;

    fn index(&self, byte: u8) -> &u64 {
        &self.counts[byte as usize]
    }
}

impl std::iter::Sum for Histogram {
    fn sum<I: Iterator<Item = Histogram>>(iter: I) -> Self {
        iter.fold(Histogram::new(), |mut acc, h| {
            acc.merge_into(&h);
            acc
        })
    }
}

impl FromIterator<Histogram> for Histogram {
    fn from_iter<I: IntoIterator<Item = Histogram>>(iter: I) -> Self {
        iter.into_iter().sum()
    }
}

impl std::fmt::Debug for Histogram {
    // Only non-zero buckets; 256 zeros are noise in debug logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.counts
                    .iter()
                    .enumerate()
                    .filter(|(_, n)| **n > 0)
                    .map(|(b, n)| (b, n)),
            )
            .finish()
    }
}

impl Serialize for Histogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.counts.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(bytes: &[u8]) -> Histogram {
        let mut h = Histogram::new();
        h.add_bytes(bytes);
        h
    }

    #[test]
    fn increment_and_add_bytes_agree() {
        let mut a = Histogram::new();
        for &b in b"hello" {
            a.increment(b);
        }
        assert_eq!(a, sample(b"hello"));
        assert_eq!(a[b'l'], 2);
        assert_eq!(a.total(), 5);
    }

    #[test]
    fn merge_order_does_not_matter() {
        let parts = [sample(b"abc"), sample(&[0, 0, 255]), sample(b"zzz\n")];

        let mut forward = Histogram::new();
        for p in &parts {
            forward.merge_into(p);
        }
        let mut backward = Histogram::new();
        for p in parts.iter().rev() {
            backward.merge_into(p);
        }
        // (a + b) + c == a + (b + c)
        let mut bc = parts[1].clone();
        bc.merge_into(&parts[2]);
        let mut grouped = parts[0].clone();
        grouped.merge_into(&bc);

        assert_eq!(forward, backward);
        assert_eq!(forward, grouped);
        assert_eq!(forward.total(), 10);
        assert_eq!(forward.get(0), 2);
        assert_eq!(forward.get(255), 1);
    }

    #[test]
    fn sum_folds_by_merge() {
        let total: Histogram = vec![sample(b"a"), Histogram::new(), sample(b"aa")]
            .into_iter()
            .sum();
        assert_eq!(total.get(b'a'), 3);
        assert!(Histogram::new().is_empty());
        assert!(!total.is_empty());
    }

    #[test]
    fn serializes_as_full_array() {
        let json = serde_json::to_value(sample(&[1])).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), BUCKETS);
        assert_eq!(arr[1], 1);
        assert_eq!(arr[0], 0);
    }

    #[test]
    fn max_in_range() {
        let h = sample(b"aab\x90\x90\x90");
        assert_eq!(h.max_in(0..=127), 2);
        assert_eq!(h.max_in(128..=255), 3);
        assert_eq!(Histogram::new().max_in(0..=63), 0);
    }
}
