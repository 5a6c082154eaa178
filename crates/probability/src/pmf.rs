//! Empirical probability mass functions over integer-coded categories.

use std::collections::BTreeMap;

/// Empirical probability mass function over non-negative integer categories.
///
/// Built from a sample with [`mass_discrete`]. Categories never observed in
/// the sample have mass `0.0`; a function built from an empty sample is
/// identically zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MassFunction {
    counts: BTreeMap<usize, usize>,
    total: usize,
}

impl MassFunction {
    /// Returns `count(category) / total`, or `0.0` if the category is absent
    /// or the sample was empty.
    pub fn mass(&self, category: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        match self.counts.get(&category) {
            Some(&count) => count as f64 / self.total as f64,
            None => 0.0,
        }
    }

    /// Returns the number of observations the function was built from.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns how many times `category` was observed.
    pub fn count(&self, category: usize) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Returns the observed categories in ascending order.
    pub fn categories(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts.keys().copied()
    }
}

/// Builds the empirical PMF of a sample of category codes.
///
/// The category alphabet does not need to be declared up front.
///
/// # Example
///
/// ```
/// use basilisk_probability::mass_discrete;
///
/// let pmf = mass_discrete(&[3, 3, 1, 2, 3, 1, 1, 2, 3, 1]);
/// assert_eq!(pmf.mass(1), 0.4);
/// assert_eq!(pmf.mass(7), 0.0);
/// ```
pub fn mass_discrete(values: &[usize]) -> MassFunction {
    let mut counts = BTreeMap::new();
    for &value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    MassFunction {
        counts,
        total: values.len(),
    }
}
