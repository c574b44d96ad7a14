//! Optimiser thresholds.

/// Tunable thresholds for [`BudgetOptimizer`](crate::BudgetOptimizer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizerConfig {
    /// Tolls strictly below this amount count as toll-free.
    pub free_threshold_usd: f64,
    /// A budget route costing strictly less than this fraction of the
    /// budget earns an advisory.
    pub economical_fraction: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            free_threshold_usd: 0.50,
            economical_fraction: 0.5,
        }
    }
}
