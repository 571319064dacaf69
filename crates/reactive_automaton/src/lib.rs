//! Finite automata for the reactive constraint engine.
//!
//! This crate provides:
//! - [`Automaton`] and [`AutomatonBuilder`] - Complete DFAs stored as a state arena
//! - [`primitive`] - Factories for temporal primitives and their mirrors
//! - [`SeparatedAutomaton`] - An activator plus past/present/future disjuncts
//!
//! Every automaton is immutable after [`AutomatonBuilder::complete`], so
//! compiled constraints are `Send + Sync` and can be shared behind an `Arc`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod automaton;
pub mod primitive;
mod reverse;
pub mod separated;

pub use automaton::{Automaton, AutomatonBuilder, StateId};
pub use primitive::Primitive;
pub use separated::{ConjunctAutomata, FutureAutomaton, SeparatedAutomaton};
