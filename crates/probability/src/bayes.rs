//! Bayes' rule.

/// Computes the posterior `P(A | B) = P(B | A) * P(A) / P(B)`.
///
/// A zero (or non-positive) evidence probability yields `0.0` rather than a
/// division by zero: the posterior of an event that never occurs is defined
/// as zero.
pub fn bayes(prior: f64, likelihood: f64, evidence: f64) -> f64 {
    if evidence <= 0.0 {
        return 0.0;
    }
    likelihood * prior / evidence
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hand_computed() {
        // P(A)=0.3, P(B|A)=0.5, P(B)=0.25 -> 0.6
        assert_abs_diff_eq!(bayes(0.3, 0.5, 0.25), 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_evidence() {
        assert_eq!(bayes(0.5, 0.5, 0.0), 0.0);
    }

    #[test]
    fn test_zero_prior() {
        assert_eq!(bayes(0.0, 0.9, 0.4), 0.0);
    }
}
