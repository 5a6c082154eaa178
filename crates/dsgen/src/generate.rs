//! Record generation.

use basilisk_dataset::{DataSet, Record};
use rand::Rng;
use tracing::{debug, info};

use crate::config::DatasetConfig;
use crate::error::DsgenError;

/// Number of value-range fifths.
pub const QUINTILES: usize = 5;

/// Splits `count` records across the five quintiles by percentage.
///
/// Each quintile first gets `floor(allocation / 100 * count)` records. Any
/// shortfall is then handed out one record at a time starting at quintile 0
/// and cycling, so allocations below 100% still place every record. Missing
/// allocations count as zero.
///
/// # Errors
///
/// - [`DsgenError::InvalidRecordCount`] if `count < 1`.
/// - [`DsgenError::TooManyQuintiles`] for more than five allocations.
/// - [`DsgenError::InvalidAllocation`] for a negative or non-finite entry.
/// - [`DsgenError::AllocationsExceed`] if the allocations total over 100.
///
/// # Example
///
/// ```
/// use basilisk_dsgen::compute_quintile_distribution;
///
/// let counts = compute_quintile_distribution(10, &[50.0, 25.0]).unwrap();
/// assert_eq!(counts, [6, 3, 1, 0, 0]);
/// ```
pub fn compute_quintile_distribution(
    count: usize,
    allocations: &[f64],
) -> Result<[usize; QUINTILES], DsgenError> {
    if count < 1 {
        return Err(DsgenError::InvalidRecordCount { count });
    }
    if allocations.len() > QUINTILES {
        return Err(DsgenError::TooManyQuintiles {
            given: allocations.len(),
        });
    }
    if let Some(&allocation) = allocations.iter().find(|a| !a.is_finite() || **a < 0.0) {
        return Err(DsgenError::InvalidAllocation { allocation });
    }
    let total: f64 = allocations.iter().sum();
    if total > 100.0 {
        return Err(DsgenError::AllocationsExceed { total });
    }

    let mut counts = [0usize; QUINTILES];
    for (slot, &a) in counts.iter_mut().zip(allocations) {
        *slot = ((a / 100.0) * count as f64).floor() as usize;
    }

    let mut assigned: usize = counts.iter().sum();
    let mut q = 0;
    while assigned < count {
        counts[q % QUINTILES] += 1;
        assigned += 1;
        q += 1;
    }
    // Floors of shares totalling at most 100% cannot overshoot, but trim
    // round-robin anyway so counts always sum to `count`.
    while assigned > count {
        if counts[q % QUINTILES] > 0 {
            counts[q % QUINTILES] -= 1;
            assigned -= 1;
        }
        q += 1;
    }
    Ok(counts)
}

/// Deals `indices` into quintiles holding exactly `counts[q]` entries each.
///
/// Indices are dealt round-robin: each goes to the next quintile after the
/// previous one that still has room. Missing counts are zero.
///
/// # Errors
///
/// - [`DsgenError::TooManyQuintiles`] for more than five counts.
/// - [`DsgenError::QuintileCountMismatch`] if the counts do not sum to
///   `indices.len()`.
pub fn assign_quintiles(
    indices: &[usize],
    counts: &[usize],
) -> Result<[Vec<usize>; QUINTILES], DsgenError> {
    if counts.len() > QUINTILES {
        return Err(DsgenError::TooManyQuintiles {
            given: counts.len(),
        });
    }
    let counted: usize = counts.iter().sum();
    if counted != indices.len() {
        return Err(DsgenError::QuintileCountMismatch {
            counted,
            records: indices.len(),
        });
    }

    let capacity = |q: usize| counts.get(q).copied().unwrap_or(0);
    let mut quintiles: [Vec<usize>; QUINTILES] = Default::default();
    let mut q = 0;
    for &index in indices {
        // Total capacity equals the number of indices, so a slot exists.
        while quintiles[q].len() >= capacity(q) {
            q = (q + 1) % QUINTILES;
        }
        quintiles[q].push(index);
        q = (q + 1) % QUINTILES;
    }
    Ok(quintiles)
}

/// Draws a value from quintile `quintile` of `[lower, upper]`.
///
/// Values sit on a 1% grid of the range: quintile 0 covers 0% to 20%
/// inclusive and quintile `q > 0` covers `20q + 1`% to `20q + 20`%.
pub fn quintile_value(lower: f64, upper: f64, quintile: usize, rng: &mut impl Rng) -> f64 {
    let percent = if quintile == 0 {
        rng.random_range(0..=20)
    } else {
        20 * quintile + rng.random_range(1..=20)
    };
    lower + (upper - lower) * percent as f64 / 100.0
}

/// Generates a dataset from `config`.
///
/// Each record gets a uniformly random class, so class sizes vary from run
/// to run. Within each class, each attribute's values are spread over the
/// quintiles of its range according to its allocations.
///
/// # Errors
///
/// Returns the first validation error of `config`, or any allocation error
/// from [`compute_quintile_distribution`].
#[tracing::instrument(skip_all, fields(records = config.record_count, classes = config.classes.len()))]
pub fn generate_dataset(config: &DatasetConfig, rng: &mut impl Rng) -> Result<DataSet, DsgenError> {
    config.validate()?;
    let class_names = config.class_names();
    let attribute_names = config.attribute_names();
    let n_classes = class_names.len();

    let mut records: Vec<Record> = (0..config.record_count)
        .map(|_| Record::new(rng.random_range(0..n_classes), vec![0.0; attribute_names.len()]))
        .collect();

    for (class, attributes) in config.classes.values().enumerate() {
        let members: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.class == class)
            .map(|(i, _)| i)
            .collect();
        if members.is_empty() {
            debug!(class = %class_names[class], "no records drawn for class");
            continue;
        }

        for (a, spec) in attributes.iter().enumerate() {
            let counts = compute_quintile_distribution(members.len(), &spec.allocations_by_quintile)?;
            let quintiles = assign_quintiles(&members, &counts)?;
            for (q, quintile) in quintiles.iter().enumerate() {
                for &i in quintile {
                    records[i].values[a] = quintile_value(spec.lower, spec.upper, q, rng);
                }
            }
        }
        debug!(class = %class_names[class], records = members.len(), "class generated");
    }

    info!(records = records.len(), "dataset generated");
    Ok(DataSet::new(class_names, attribute_names, records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_distribution_exact() {
        assert_eq!(
            compute_quintile_distribution(100, &[10.0, 20.0, 30.0, 20.0, 20.0]).unwrap(),
            [10, 20, 30, 20, 20]
        );
    }

    #[test]
    fn test_distribution_remainder_round_robin() {
        // Floors: 3, 3, 3 -> 9, one record left for quintile 0.
        assert_eq!(
            compute_quintile_distribution(10, &[30.0, 30.0, 35.0]).unwrap(),
            [4, 3, 3, 0, 0]
        );
        // No allocations: every quintile gets a share in turn.
        assert_eq!(compute_quintile_distribution(7, &[]).unwrap(), [2, 2, 1, 1, 1]);
    }

    #[test]
    fn test_distribution_sums_to_count() {
        for count in 1..60 {
            let counts = compute_quintile_distribution(count, &[12.5, 0.0, 37.5, 49.0]).unwrap();
            assert_eq!(counts.iter().sum::<usize>(), count);
        }
    }

    #[test]
    fn test_distribution_errors() {
        assert!(matches!(
            compute_quintile_distribution(0, &[100.0]),
            Err(DsgenError::InvalidRecordCount { count: 0 })
        ));
        assert!(matches!(
            compute_quintile_distribution(5, &[10.0; 6]),
            Err(DsgenError::TooManyQuintiles { given: 6 })
        ));
        assert!(matches!(
            compute_quintile_distribution(5, &[60.0, 50.0]),
            Err(DsgenError::AllocationsExceed { .. })
        ));
        assert!(matches!(
            compute_quintile_distribution(5, &[-10.0, 50.0]),
            Err(DsgenError::InvalidAllocation { .. })
        ));
    }

    #[test]
    fn test_assign_fills_each_quintile() {
        let indices: Vec<usize> = (100..110).collect();
        let quintiles = assign_quintiles(&indices, &[4, 0, 3, 2, 1]).unwrap();
        let sizes: Vec<usize> = quintiles.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![4, 0, 3, 2, 1]);
        let mut all: Vec<usize> = quintiles.concat();
        all.sort_unstable();
        assert_eq!(all, indices);
        // Round-robin: first pass visits every non-empty quintile.
        assert_eq!(quintiles[0][0], 100);
        assert_eq!(quintiles[2][0], 101);
        assert_eq!(quintiles[3][0], 102);
        assert_eq!(quintiles[4][0], 103);
    }

    #[test]
    fn test_assign_errors() {
        assert!(matches!(
            assign_quintiles(&[1, 2], &[1, 1, 0, 0, 0, 0]),
            Err(DsgenError::TooManyQuintiles { given: 6 })
        ));
        assert!(matches!(
            assign_quintiles(&[1, 2, 3], &[1, 1]),
            Err(DsgenError::QuintileCountMismatch {
                counted: 2,
                records: 3
            })
        ));
    }

    #[test]
    fn test_quintile_value_grid() {
        let mut rng = StdRng::seed_from_u64(12);
        for q in 0..QUINTILES {
            for _ in 0..200 {
                let v = quintile_value(0.0, 100.0, q, &mut rng);
                let lo = if q == 0 { 0.0 } else { (20 * q + 1) as f64 };
                let hi = (20 * q + 20) as f64;
                assert!(v >= lo - 1e-9 && v <= hi + 1e-9, "q{q}: {v}");
                assert_abs_diff_eq!(v, v.round(), epsilon = 1e-9);
            }
        }
    }
}
