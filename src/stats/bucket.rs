use alloc::vec;
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::stats::corrcoef;

/// Distribution of values into a fixed number of equal-width, half-open
/// buckets over `[min, max]`. Values at or below `min` land in bucket 0;
/// values at or above `max` land in the last bucket (clamped).
///
/// Two distributions are only meaningfully comparable (via [`corrcoef`])
/// when they share the same `min`, `max`, `bucket_step` and bucket count.
#[derive(Clone, Debug)]
pub struct BucketDistribution {
    min: i64,
    max: i64,
    bucket_step: i64,
    buckets: Vec<i64>,
}

impl BucketDistribution {
    /// Builds a distribution with `bucket_count` buckets spanning `[min,
    /// max]`, counting each of `values` into its bucket.
    pub fn new(min: i64, max: i64, bucket_count: usize, values: &[i64]) -> Self {
        let bucket_step = (max - min) / bucket_count as i64;
        let mut dist = Self {
            min,
            max,
            bucket_step,
            buckets: vec![0; bucket_count],
        };
        for &v in values {
            let i = dist.bucket_index(v);
            dist.buckets[i] += 1;
        }
        dist
    }

    /// Index of the bucket `v` falls into, clamped to `[0, bucket_count)`.
    pub fn bucket_index(&self, v: i64) -> usize {
        let raw = (v - self.min) / self.bucket_step;
        raw.clamp(0, self.buckets.len() as i64 - 1) as usize
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn bucket_step(&self) -> i64 {
        self.bucket_step
    }

    pub fn buckets(&self) -> &[i64] {
        &self.buckets
    }

    fn same_shape(&self, other: &Self) -> bool {
        self.min == other.min
            && self.max == other.max
            && self.bucket_step == other.bucket_step
            && self.buckets.len() == other.buckets.len()
    }

    /// Pearson correlation between this distribution's bucket counts and
    /// `other`'s. Fails with [`Error::IncompatibleDistribution`] unless both
    /// distributions share the same shape (`min`, `max`, `bucket_step`,
    /// bucket count).
    pub fn corrcoef(&self, other: &Self) -> Result<f64> {
        if !self.same_shape(other) {
            return Err(Error::IncompatibleDistribution);
        }

        let a: Vec<u128> = self.buckets.iter().map(|&x| x as u128).collect();
        let b: Vec<u128> = other.buckets.iter().map(|&x| x as u128).collect();
        corrcoef(&a, &b)
    }
}
