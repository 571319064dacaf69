//! Constraint bags: constraints bound to shared compiled automata.

use std::collections::HashMap;
use std::sync::Arc;

use reactive_automaton::SeparatedAutomaton;
use reactive_foundation::{Error, Result, Symbol};

use crate::constraint::{Constraint, ParametricMapping};
use crate::kind::ConstraintKind;

/// Mining measures of one constraint over a log.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ConstraintMeasures {
    /// Mean per-trace fulfillment ratio over all traces.
    pub support: f64,
    /// Mean per-trace fulfillment ratio over activated traces.
    pub confidence: f64,
}

/// A constraint with its compiled automaton and task mapping.
#[derive(Clone, Debug)]
pub struct BoundConstraint {
    constraint: Constraint,
    automaton: Arc<SeparatedAutomaton>,
    mapping: ParametricMapping,
}

impl BoundConstraint {
    /// The constraint.
    #[must_use]
    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }

    /// The shared automaton of the constraint's template.
    #[must_use]
    pub fn automaton(&self) -> &Arc<SeparatedAutomaton> {
        &self.automaton
    }

    /// The concrete-to-parametric task mapping.
    #[must_use]
    pub fn mapping(&self) -> &ParametricMapping {
        &self.mapping
    }

    /// Translates a concrete trace into the template's symbols.
    #[must_use]
    pub fn translate(&self, trace: &[char]) -> Vec<Symbol> {
        self.mapping.translate_trace(trace)
    }
}

/// An ordered set of bound constraints.
///
/// Each template is compiled at most once per bag; every constraint of that
/// template shares the same `Arc<SeparatedAutomaton>`.
#[derive(Clone, Debug, Default)]
pub struct ConstraintBag {
    bound: Vec<BoundConstraint>,
    compiled: HashMap<ConstraintKind, Arc<SeparatedAutomaton>>,
}

impl ConstraintBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds every constraint, dropping (with a warning) those that fail.
    #[must_use]
    pub fn from_constraints(constraints: impl IntoIterator<Item = Constraint>) -> Self {
        let mut bag = Self::new();
        for constraint in constraints {
            let label = constraint.to_string();
            if let Err(e) = bag.add(constraint) {
                log::warn!("dropping {label}: {e}");
            }
        }
        log::debug!(
            "bound {} constraint(s) over {} template(s)",
            bag.len(),
            bag.compiled.len()
        );
        bag
    }

    /// Binds one constraint.
    ///
    /// # Errors
    /// Returns an error if the template fails to compile or the constraint's
    /// tasks cannot be mapped onto its alphabet.
    pub fn add(&mut self, constraint: Constraint) -> Result<()> {
        let automaton = self.automaton(constraint.kind())?;
        let mapping = constraint.mapping(automaton.alphabet())?;
        self.bound.push(BoundConstraint {
            constraint,
            automaton,
            mapping,
        });
        Ok(())
    }

    /// The compiled automaton of `kind`, compiling it on first use.
    ///
    /// # Errors
    /// Returns the template's construction error.
    pub fn automaton(&mut self, kind: ConstraintKind) -> Result<Arc<SeparatedAutomaton>> {
        if let Some(automaton) = self.compiled.get(&kind) {
            return Ok(Arc::clone(automaton));
        }
        let automaton = Arc::new(kind.compile()?);
        self.compiled.insert(kind, Arc::clone(&automaton));
        Ok(automaton)
    }

    /// Number of bound constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    /// Returns true if the bag holds no constraint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Iterates over the bound constraints in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, BoundConstraint> {
        self.bound.iter()
    }

    /// The bound constraint at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BoundConstraint> {
        self.bound.get(index)
    }

    /// Iterates over the constraints.
    pub fn constraints(&self) -> impl Iterator<Item = &Constraint> {
        self.bound.iter().map(BoundConstraint::constraint)
    }

    /// Writes measures back into the constraints, in bag order.
    ///
    /// # Errors
    /// Returns an error if `measures` does not hold one entry per constraint.
    pub fn apply_measures(&mut self, measures: &[ConstraintMeasures]) -> Result<()> {
        if measures.len() != self.bound.len() {
            return Err(Error::invalid_parameter(format!(
                "{} measure(s) for {} constraint(s)",
                measures.len(),
                self.bound.len()
            )));
        }
        for (bound, m) in self.bound.iter_mut().zip(measures) {
            bound.constraint.support = Some(m.support);
            bound.constraint.confidence = Some(m.confidence);
        }
        Ok(())
    }

    /// Keeps only constraints whose support and confidence reach the given
    /// thresholds. Constraints never measured are removed. Returns the
    /// removed constraints.
    pub fn prune(&mut self, min_support: f64, min_confidence: f64) -> Vec<Constraint> {
        let (kept, removed): (Vec<_>, Vec<_>) = self.bound.drain(..).partition(|b| {
            let c = &b.constraint;
            c.support.is_some_and(|s| s >= min_support)
                && c.confidence.is_some_and(|v| v >= min_confidence)
        });
        self.bound = kept;
        log::debug!(
            "pruned {} constraint(s), {} kept",
            removed.len(),
            self.bound.len()
        );
        removed.into_iter().map(|b| b.constraint).collect()
    }
}

impl<'a> IntoIterator for &'a ConstraintBag {
    type Item = &'a BoundConstraint;
    type IntoIter = std::slice::Iter<'a, BoundConstraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Constraint> for ConstraintBag {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        Self::from_constraints(iter)
    }
}
