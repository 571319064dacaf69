//! Configuration for log checking.

/// Which runner evaluates each (constraint, trace) pair.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EvaluationStrategy {
    /// Double traversal over the whole trace. Linear, needs the full trace.
    #[default]
    Offline,
    /// Event-by-event evaluation with future-obligation tokens.
    Incremental,
}

/// Configuration for [`crate::LogChecker`].
///
/// Controls the runner, the output shape, and parallelism.
#[derive(Clone, Debug)]
pub struct CheckerConfig {
    /// Runner used for every constraint.
    pub strategy: EvaluationStrategy,

    /// Keep only the nine-slot counters instead of per-event codes.
    pub lite: bool,

    /// Append the model pseudo-constraint row to every trace.
    pub aggregate_model: bool,

    /// Evaluate traces on the rayon thread pool.
    pub parallel: bool,

    /// Log a progress line every this many traces (0 = never).
    pub progress_interval: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            strategy: EvaluationStrategy::Offline,
            lite: false,
            aggregate_model: true,
            parallel: false,
            progress_interval: 0,
        }
    }
}

impl CheckerConfig {
    /// Creates a configuration for large batch logs: offline and parallel.
    #[must_use]
    pub fn batch() -> Self {
        Self {
            parallel: true,
            progress_interval: 10_000,
            ..Self::default()
        }
    }

    /// Creates a configuration that replays traces event by event.
    #[must_use]
    pub fn streaming() -> Self {
        Self {
            strategy: EvaluationStrategy::Incremental,
            ..Self::default()
        }
    }

    /// Creates a configuration keeping counters only.
    #[must_use]
    pub fn lite() -> Self {
        Self {
            lite: true,
            ..Self::default()
        }
    }

    /// Builder method to set the evaluation strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: EvaluationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder method to enable/disable counters-only output.
    #[must_use]
    pub fn with_lite(mut self, lite: bool) -> Self {
        self.lite = lite;
        self
    }

    /// Builder method to enable/disable the model row.
    #[must_use]
    pub fn with_aggregate_model(mut self, aggregate: bool) -> Self {
        self.aggregate_model = aggregate;
        self
    }

    /// Builder method to enable/disable parallel evaluation.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builder method to set the progress logging interval.
    #[must_use]
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }
}
