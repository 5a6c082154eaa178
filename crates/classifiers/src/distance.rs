//! Distance functions over attribute vectors.
//!
//! Vectors of different lengths are compared over their common prefix:
//! records may legally carry fewer values than their dataset declares.

use serde::Serialize;
use tracing::debug;

/// Euclidean (L2) distance between `a` and `b`.
///
/// ```text
/// d = sqrt(Σⱼ (a[j] − b[j])²)
/// ```
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Manhattan (L1) distance between `a` and `b`.
///
/// ```text
/// d = Σⱼ |a[j] − b[j]|
/// ```
pub fn manhattan(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

/// Distance metric used to rank neighbors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMethod {
    /// L2 norm of the difference.
    #[default]
    Euclidean,
    /// Sum of absolute differences.
    Manhattan,
}

impl DistanceMethod {
    /// Resolves a method name, case-insensitively.
    ///
    /// Unrecognised names fall back to [`DistanceMethod::Euclidean`]; this is
    /// the defined behaviour, not an error.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "euclidean" => Self::Euclidean,
            "manhattan" => Self::Manhattan,
            _ => {
                debug!(name, "unknown distance method, using euclidean");
                Self::Euclidean
            }
        }
    }

    /// Returns the method's canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
        }
    }

    /// Computes the distance between `a` and `b` with this metric.
    #[inline]
    pub fn distance(self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            Self::Euclidean => euclidean(a, b),
            Self::Manhattan => manhattan(a, b),
        }
    }
}
