//! Comparison configuration.

/// Default nesting-depth guard.
///
/// Real configuration files stay in single digits of nesting; the limit
/// only exists so adversarially deep documents fail with a clean error
/// instead of exhausting memory on the work stack.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options consumed by [`DiffEngine::compare`].
///
/// [`DiffEngine::compare`]: crate::diff::DiffEngine::compare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Treat arrays as multisets instead of ordered sequences.
    ///
    /// In unordered mode a pure reordering produces no changes; elements
    /// without an exact structural match on the other side are reported as
    /// whole-value additions/removals at the array's own path.
    pub ignore_order: bool,

    /// Maximum nesting depth before the comparison fails with
    /// [`DiffError::DepthExceeded`].
    ///
    /// [`DiffError::DepthExceeded`]: crate::diff::DiffError::DepthExceeded
    pub max_depth: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            ignore_order: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DiffOptions {
    /// Options with unordered array comparison enabled.
    #[must_use]
    pub fn unordered() -> Self {
        Self {
            ignore_order: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = DiffOptions::default();
        assert!(!opts.ignore_order);
        assert_eq!(opts.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_unordered_preset() {
        let opts = DiffOptions::unordered();
        assert!(opts.ignore_order);
        assert_eq!(opts.max_depth, DEFAULT_MAX_DEPTH);
    }
}
