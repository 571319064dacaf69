//! Integration tests for Layer 3: Engine
//!
//! Tests for the incremental and offline runners, their agreement, and
//! model aggregation.

mod equivalence;
mod incremental;
