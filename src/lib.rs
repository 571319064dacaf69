//! Reactive - Declare constraint checking with separated temporal automata
//!
//! This crate re-exports all layers of the system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: reactive_engine     - Incremental and offline runners, model, log checking
//! Layer 2: reactive_templates  - Constraint kinds, template compilers, bags
//! Layer 1: reactive_automaton  - Complete DFAs, primitives, separated automata
//! Layer 0: reactive_foundation - Alphabets, evaluation codes, counters, Error
//! ```

pub use reactive_automaton as automaton;
pub use reactive_engine as engine;
pub use reactive_foundation as foundation;
pub use reactive_templates as templates;
