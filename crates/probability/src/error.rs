//! Error types for the basilisk-probability crate.

/// Error type for all fallible operations in the basilisk-probability crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProbabilityError {
    /// Returned when a discretization is configured with no intervals.
    #[error("interval count must be >= 1, got {intervals}")]
    InvalidIntervalCount {
        /// The invalid interval count.
        intervals: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_interval_count() {
        let e = ProbabilityError::InvalidIntervalCount { intervals: 0 };
        assert_eq!(e.to_string(), "interval count must be >= 1, got 0");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<ProbabilityError>();
    }
}
