//! Analysis thresholds.

/// Tunable thresholds for health and recommendations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// A node further behind than this gets an urgent sync recommendation
    /// (default: 10)
    pub critical_lag: i64,
    /// More fork points than this make the network CRITICAL (default: 3)
    pub critical_fork_count: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            critical_lag: 10,
            critical_fork_count: 3,
        }
    }
}
