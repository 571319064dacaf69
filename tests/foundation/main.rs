//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Alphabet, EvaluationCode, TraceCounters, and Error.

mod alphabets;
mod counters;
mod errors;
