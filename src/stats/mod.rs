//! Timing-based oracle disambiguation helpers.
//!
//! These are caller-side tools, not part of the algorithmic core: a noisy or
//! constant-time-defended oracle can be probed by timing instead of a direct
//! boolean verdict, and these functions summarize and compare the resulting
//! samples. Require `std` for `Instant` and floating point `sqrt`.

pub mod bucket;

use alloc::vec::Vec;
use std::time::Instant;

use crate::error::{Error, Result};

/// Calls `f` with `arg` exactly `n` times, recording the wall-clock elapsed
/// time of each call in nanoseconds, in call order.
pub fn time_ns<T, R>(mut f: impl FnMut(&T) -> R, arg: &T, n: usize) -> Vec<u128> {
    let mut samples = Vec::with_capacity(n);
    for _ in 0..n {
        let start = Instant::now();
        f(arg);
        samples.push(start.elapsed().as_nanos());
    }
    samples
}

/// Arithmetic mean of `v`. Fails on an empty sample.
pub fn mean(v: &[u128]) -> Result<f64> {
    if v.is_empty() {
        return Err(Error::EmptySample);
    }
    let sum: u128 = v.iter().sum();
    Ok(sum as f64 / v.len() as f64)
}

/// Upper median of `v` (the element at index `n / 2` of the sorted sample).
/// Fails on an empty sample.
pub fn median(v: &[u128]) -> Result<u128> {
    if v.is_empty() {
        return Err(Error::EmptySample);
    }
    let mut sorted = v.to_vec();
    sorted.sort_unstable();
    Ok(sorted[sorted.len() / 2])
}

/// Sample covariance of `a` and `b`. Requires `a.len() == b.len() > 0`.
pub fn covariance(a: &[u128], b: &[u128]) -> Result<f64> {
    if a.is_empty() || a.len() != b.len() {
        return Err(Error::EmptySample);
    }
    let ma = mean(a)?;
    let mb = mean(b)?;
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x as f64 - ma) * (y as f64 - mb))
        .sum();
    Ok(sum / a.len() as f64)
}

/// Population standard deviation of `a`. Requires non-empty input.
pub fn standard_deviation(a: &[u128]) -> Result<f64> {
    if a.is_empty() {
        return Err(Error::EmptySample);
    }
    let ma = mean(a)?;
    let sum: f64 = a.iter().map(|&x| (x as f64 - ma).powi(2)).sum();
    Ok((sum / a.len() as f64).sqrt())
}

/// RMS deviation between paired samples `a` and `b`. Requires `a.len() ==
/// b.len() > 0`.
pub fn standard_deviation_paired(a: &[u128], b: &[u128]) -> Result<f64> {
    if a.is_empty() || a.len() != b.len() {
        return Err(Error::EmptySample);
    }
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x as f64 - y as f64).powi(2))
        .sum();
    Ok((sum / a.len() as f64).sqrt())
}

/// Pearson correlation coefficient of `a` and `b`. Not defined (NaN) when
/// either sample is constant.
pub fn corrcoef(a: &[u128], b: &[u128]) -> Result<f64> {
    let cov = covariance(a, b)?;
    let sda = standard_deviation(a)?;
    let sdb = standard_deviation(b)?;
    Ok(cov / (sda * sdb))
}
