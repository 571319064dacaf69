//! Checking every constraint of a bag against every trace of a log.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use reactive_foundation::{EvaluationCode, TraceCounters};
use reactive_templates::{BoundConstraint, ConstraintBag, ConstraintMeasures};

use crate::config::{CheckerConfig, EvaluationStrategy};
use crate::incremental::IncrementalRunner;
use crate::model::aggregate;
use crate::offline::OfflineRunner;

// =============================================================================
// Results
// =============================================================================

/// The result of one constraint (or the model) on one trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstraintEvaluation {
    /// Counts of each code over the trace.
    pub counters: TraceCounters,
    /// Per-event codes, absent in lite mode.
    pub codes: Option<Vec<EvaluationCode>>,
}

impl ConstraintEvaluation {
    fn new(codes: Vec<EvaluationCode>, lite: bool) -> Self {
        Self {
            counters: TraceCounters::from_codes(&codes),
            codes: (!lite).then_some(codes),
        }
    }
}

/// The results of every constraint on one trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEvaluation {
    /// One entry per constraint, in bag order.
    pub constraints: Vec<ConstraintEvaluation>,
    /// The model pseudo-constraint, when enabled.
    pub model: Option<ConstraintEvaluation>,
}

/// The results of a whole log.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogEvaluation {
    /// One entry per trace, in log order.
    pub traces: Vec<TraceEvaluation>,
    constraint_count: usize,
}

impl LogEvaluation {
    /// Number of traces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    /// Returns true if the log had no traces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Number of constraints checked.
    #[must_use]
    pub fn constraint_count(&self) -> usize {
        self.constraint_count
    }

    /// Per-trace counters of one constraint.
    pub fn counters_of(&self, constraint: usize) -> impl Iterator<Item = TraceCounters> + '_ {
        self.traces
            .iter()
            .filter_map(move |t| t.constraints.get(constraint).map(|c| c.counters))
    }

    /// Counters of one constraint summed over the log.
    #[must_use]
    pub fn totals(&self, constraint: usize) -> TraceCounters {
        self.counters_of(constraint)
            .fold(TraceCounters::new(), |acc, c| acc + c)
    }

    /// Support and confidence of every constraint, in bag order.
    #[must_use]
    pub fn measures(&self) -> Vec<ConstraintMeasures> {
        (0..self.constraint_count)
            .map(|c| crate::measures::mining_measures(self.counters_of(c)))
            .collect()
    }
}

// =============================================================================
// Runners
// =============================================================================

enum Runner {
    Offline(OfflineRunner),
    Incremental(IncrementalRunner),
}

impl Runner {
    fn new(bound: &BoundConstraint, strategy: EvaluationStrategy) -> Self {
        let automaton = std::sync::Arc::clone(bound.automaton());
        match strategy {
            EvaluationStrategy::Offline => Self::Offline(OfflineRunner::new(automaton)),
            EvaluationStrategy::Incremental => {
                Self::Incremental(IncrementalRunner::new(automaton))
            }
        }
    }

    fn evaluate(&mut self, bound: &BoundConstraint, trace: &[char]) -> Vec<EvaluationCode> {
        let symbols = bound.translate(trace);
        match self {
            Self::Offline(runner) => runner.evaluate(&symbols),
            Self::Incremental(runner) => {
                runner.reset();
                runner.run(&symbols);
                runner.codes()
            }
        }
    }
}

// =============================================================================
// LogChecker
// =============================================================================

/// Evaluates a constraint bag over logs of encoded traces.
///
/// A trace is a sequence of task characters. Compiled automata are shared by
/// every worker; each worker owns one runner per constraint.
#[derive(Debug)]
pub struct LogChecker {
    bag: ConstraintBag,
    config: CheckerConfig,
}

impl LogChecker {
    /// Creates a checker with the given configuration.
    #[must_use]
    pub fn new(bag: ConstraintBag, config: CheckerConfig) -> Self {
        Self { bag, config }
    }

    /// The constraints being checked.
    #[must_use]
    pub fn bag(&self) -> &ConstraintBag {
        &self.bag
    }

    /// Hands the bag back, e.g. to apply measures to it.
    #[must_use]
    pub fn into_bag(self) -> ConstraintBag {
        self.bag
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    fn runners(&self) -> Vec<Runner> {
        self.bag
            .iter()
            .map(|bound| Runner::new(bound, self.config.strategy))
            .collect()
    }

    fn progress(&self, done: &AtomicUsize, total: usize) {
        let n = done.fetch_add(1, Ordering::Relaxed) + 1;
        let interval = self.config.progress_interval;
        if interval > 0 && n % interval == 0 {
            log::debug!("checked {n}/{total} traces");
        }
    }

    /// Checks one trace with a fresh runner set.
    #[must_use]
    pub fn check_trace(&self, trace: &[char]) -> TraceEvaluation {
        self.evaluate_trace(&mut self.runners(), trace)
    }

    fn evaluate_trace(&self, runners: &mut [Runner], trace: &[char]) -> TraceEvaluation {
        let lite = self.config.lite;
        let rows: Vec<Vec<EvaluationCode>> = self
            .bag
            .iter()
            .zip(runners.iter_mut())
            .map(|(bound, runner)| runner.evaluate(bound, trace))
            .collect();

        let model = self.config.aggregate_model.then(|| {
            let codes = (0..trace.len())
                .map(|event| aggregate(rows.iter().map(|row| row[event])))
                .collect();
            ConstraintEvaluation::new(codes, lite)
        });

        log::trace!(
            "trace of {} event(s) checked against {} constraint(s)",
            trace.len(),
            rows.len()
        );
        TraceEvaluation {
            constraints: rows
                .into_iter()
                .map(|codes| ConstraintEvaluation::new(codes, lite))
                .collect(),
            model,
        }
    }

    /// Checks every trace of `log`.
    pub fn check<T>(&self, log: &[T]) -> LogEvaluation
    where
        T: AsRef<[char]> + Sync,
    {
        log::info!(
            "checking {} trace(s) against {} constraint(s) ({:?}, parallel: {})",
            log.len(),
            self.bag.len(),
            self.config.strategy,
            self.config.parallel
        );
        let done = AtomicUsize::new(0);
        let total = log.len();

        let traces: Vec<TraceEvaluation> = if self.config.parallel {
            log.par_iter()
                .map_init(
                    || self.runners(),
                    |runners, trace| {
                        let result = self.evaluate_trace(runners, trace.as_ref());
                        self.progress(&done, total);
                        result
                    },
                )
                .collect()
        } else {
            let mut runners = self.runners();
            log.iter()
                .map(|trace| {
                    let result = self.evaluate_trace(&mut runners, trace.as_ref());
                    self.progress(&done, total);
                    result
                })
                .collect()
        };

        log::info!("checked {} trace(s)", traces.len());
        LogEvaluation {
            traces,
            constraint_count: self.bag.len(),
        }
    }
}
