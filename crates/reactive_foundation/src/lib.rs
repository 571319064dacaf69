//! Core types for the reactive constraint engine.
//!
//! This crate provides:
//! - [`Alphabet`] and [`Symbol`] - Parametric alphabets automata are compiled over
//! - [`EvaluationCode`] - The two-bit per-event result of checking a constraint
//! - [`TraceCounters`] - The nine-slot per-trace summary of evaluation codes
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alphabet;
pub mod error;
pub mod evaluation;

pub use alphabet::{Alphabet, DEFAULT_OTHER, MAX_SYMBOLS, Symbol};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use evaluation::{EvaluationCode, TraceCounters};
