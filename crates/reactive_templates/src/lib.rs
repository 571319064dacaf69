//! Constraint templates for the reactive constraint engine.
//!
//! This crate provides:
//! - [`ConstraintKind`] - The closed set of supported templates
//! - [`registry`] - A flat map from template to compiler
//! - [`Constraint`] and [`ParametricMapping`] - Templates bound to concrete tasks
//! - [`ConstraintBag`] - Constraints sharing one compiled automaton per template
//!
//! Subsumption between templates lives in [`hierarchy`] and is never used to
//! build automata.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bag;
pub mod constraint;
pub mod hierarchy;
pub mod kind;
pub mod registry;
mod template;

pub use bag::{BoundConstraint, ConstraintBag, ConstraintMeasures};
pub use constraint::{Constraint, ParametricMapping};
pub use hierarchy::Implied;
pub use kind::{ConstraintKind, Family};
pub use template::TemplateCompiler;
