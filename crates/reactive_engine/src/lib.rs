//! Evaluation of compiled constraints against traces.
//!
//! This crate provides:
//! - [`IncrementalRunner`] - Event-by-event evaluation with future-obligation tokens
//! - [`OfflineRunner`] - Linear double-traversal evaluation of a whole trace
//! - [`model`] - Folding per-constraint codes into one model code per event
//! - [`LogChecker`] - Checking a constraint bag over a log, optionally in parallel
//! - [`CheckerConfig`] - Strategy, output shape, and parallelism settings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod checker;
pub mod config;
pub mod incremental;
pub mod measures;
pub mod model;
pub mod offline;

pub use checker::{ConstraintEvaluation, LogChecker, LogEvaluation, TraceEvaluation};
pub use config::{CheckerConfig, EvaluationStrategy};
pub use incremental::{AToken, ActivationOutcome, IncrementalRunner};
pub use measures::mining_measures;
pub use model::{aggregate, model_row};
pub use offline::OfflineRunner;
