//! Equal-width discretization of continuous values into intervals.

use std::ops::Deref;

use crate::error::ProbabilityError;

/// Default number of intervals produced by [`discretize`].
pub const DEFAULT_INTERVAL_COUNT: usize = 10;

/// One bucket of a discretized value range.
///
/// Covers `[lower, upper)`, or `[lower, upper]` when `includes_upper` is
/// set. The upper bound is stored rather than recomputed from `size`, so
/// adjacent intervals share their boundary exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Inclusive lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
    /// Width of the interval (`upper - lower`).
    pub size: f64,
    /// Whether the upper bound belongs to the interval.
    pub includes_upper: bool,
}

impl Interval {
    /// Returns the upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns `true` if `value` lies inside this interval.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower
            && (value < self.upper || (self.includes_upper && value <= self.upper))
    }
}

/// Ordered, gap-free partition of an observed value range.
///
/// All intervals are half-open except the last, which includes its upper
/// bound. The last upper bound equals the observed maximum exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Intervals(Vec<Interval>);

impl Intervals {
    /// Returns the index of the interval containing `value`.
    ///
    /// Returns `None` for NaN and for values outside `[min, max]`.
    pub fn interval_for_value(&self, value: f64) -> Option<usize> {
        let first = self.0.first()?;
        let last = self.0.last()?;
        if value.is_nan() || value < first.lower || value > last.upper() {
            return None;
        }
        let idx = self
            .0
            .windows(2)
            .position(|pair| value < pair[1].lower)
            .unwrap_or(self.0.len() - 1);
        Some(idx)
    }

    /// Like [`interval_for_value`](Self::interval_for_value), but clamps
    /// out-of-range values to the first or last interval.
    ///
    /// NaN maps to the first interval.
    pub fn nearest_interval(&self, value: f64) -> usize {
        if let Some(idx) = self.interval_for_value(value) {
            return idx;
        }
        match self.0.last() {
            Some(last) if value > last.upper() => self.0.len() - 1,
            _ => 0,
        }
    }

    /// Returns the lower bound of the whole range.
    pub fn min(&self) -> Option<f64> {
        self.0.first().map(|i| i.lower)
    }

    /// Returns the upper bound of the whole range.
    pub fn max(&self) -> Option<f64> {
        self.0.last().map(Interval::upper)
    }

    /// Consumes the partition and returns the intervals.
    pub fn into_inner(self) -> Vec<Interval> {
        self.0
    }
}

impl Deref for Intervals {
    type Target = [Interval];

    fn deref(&self) -> &[Interval] {
        &self.0
    }
}

/// Configuration for [`discretize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscretizationConfig {
    intervals: usize,
}

impl DiscretizationConfig {
    /// Creates a configuration producing `intervals` equal-width buckets.
    pub fn new(intervals: usize) -> Self {
        Self { intervals }
    }

    /// Returns the number of intervals.
    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// Returns an error if the interval count is zero.
    pub fn validate(&self) -> Result<(), ProbabilityError> {
        if self.intervals == 0 {
            return Err(ProbabilityError::InvalidIntervalCount {
                intervals: self.intervals,
            });
        }
        Ok(())
    }
}

impl Default for DiscretizationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_COUNT)
    }
}

/// Partitions the observed range of `values` into equal-width intervals.
///
/// Non-finite values are ignored when computing the range. A constant sample
/// yields zero-width intervals, all anchored at the constant; the final,
/// inclusive interval then holds every value. An empty sample is anchored
/// at `0.0`.
///
/// # Errors
///
/// Returns [`ProbabilityError::InvalidIntervalCount`] if the configured count
/// is zero.
pub fn discretize(
    values: &[f64],
    config: &DiscretizationConfig,
) -> Result<Intervals, ProbabilityError> {
    config.validate()?;
    let n = config.intervals();

    let (min, max) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 0.0));

    let width = (max - min) / n as f64;
    let lowers: Vec<f64> = (0..n).map(|i| min + i as f64 * width).collect();

    let intervals = lowers
        .iter()
        .enumerate()
        .map(|(i, &lower)| {
            let last = i == n - 1;
            let next = if last { max } else { lowers[i + 1] };
            Interval {
                lower,
                upper: next,
                size: next - lower,
                includes_upper: last,
            }
        })
        .collect();

    Ok(Intervals(intervals))
}
