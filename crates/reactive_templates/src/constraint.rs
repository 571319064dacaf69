//! Constraints: templates bound to concrete tasks.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use reactive_foundation::{Alphabet, Error, ErrorContext, Result, Symbol};

use crate::kind::ConstraintKind;

// =============================================================================
// Constraint
// =============================================================================

/// A template applied to concrete task identifiers.
///
/// Tasks are the characters of an encoded trace. `support` and `confidence`
/// are bookkeeping filled in by mining; the automata never read them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Constraint {
    kind: ConstraintKind,
    parameters: Vec<char>,
    /// Fraction of traces in which the constraint holds.
    pub support: Option<f64>,
    /// Support restricted to traces that activate the constraint.
    pub confidence: Option<f64>,
}

impl Constraint {
    /// Binds `kind` to `parameters`.
    ///
    /// # Errors
    /// Returns [`reactive_foundation::ErrorKind::ArityMismatch`] on a wrong
    /// parameter count and [`reactive_foundation::ErrorKind::RoleConflict`]
    /// when one task fills two roles.
    pub fn new(kind: ConstraintKind, parameters: impl Into<Vec<char>>) -> Result<Self> {
        let parameters = parameters.into();
        if parameters.len() != kind.arity() {
            return Err(Error::arity_mismatch(
                kind.name(),
                kind.arity(),
                parameters.len(),
            ));
        }
        for (i, &task) in parameters.iter().enumerate() {
            if parameters[..i].contains(&task) {
                return Err(Error::role_conflict(format!("parameter {i}"), task)
                    .with_context(ErrorContext::new().with_source(kind.name())));
            }
        }
        Ok(Self {
            kind,
            parameters,
            support: None,
            confidence: None,
        })
    }

    /// Sets the support value.
    #[must_use]
    pub fn with_support(mut self, support: f64) -> Self {
        self.support = Some(support);
        self
    }

    /// Sets the confidence value.
    #[must_use]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// The template.
    #[must_use]
    pub const fn kind(&self) -> ConstraintKind {
        self.kind
    }

    /// The bound tasks, in template order.
    #[must_use]
    pub fn parameters(&self) -> &[char] {
        &self.parameters
    }

    fn derived(&self, kind: ConstraintKind, swapped: bool) -> Self {
        let mut parameters = self.parameters.clone();
        if swapped {
            parameters.swap(0, 1);
        }
        Self {
            kind,
            parameters,
            support: None,
            confidence: None,
        }
    }

    /// The directly implied weaker constraint, over the right parameters.
    #[must_use]
    pub fn suggested_weaker(&self) -> Option<Self> {
        self.kind
            .weaker()
            .map(|implied| self.derived(implied.kind, implied.swapped))
    }

    /// The forward and backward halves of a mutual relation.
    #[must_use]
    pub fn components(&self) -> Option<[Self; 2]> {
        self.kind.components().map(|[forward, backward]| {
            [
                self.derived(forward.kind, forward.swapped),
                self.derived(backward.kind, backward.swapped),
            ]
        })
    }

    /// The contradicting constraint over the same tasks.
    #[must_use]
    pub fn opponent(&self) -> Option<Self> {
        self.kind.opponent().map(|kind| self.derived(kind, false))
    }

    /// The task-to-symbol mapping for `alphabet`.
    ///
    /// # Errors
    /// See [`ParametricMapping::new`].
    pub fn mapping(&self, alphabet: &Alphabet) -> Result<ParametricMapping> {
        ParametricMapping::new(alphabet, &self.parameters)
            .map_err(|e| e.in_frame(self.to_string()))
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind)?;
        for (i, task) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{task}")?;
        }
        write!(f, ")")
    }
}

// =============================================================================
// ParametricMapping
// =============================================================================

/// Translates concrete tasks to the parametric symbols of one alphabet.
///
/// Tasks bind positionally to the parametric symbols; every other task maps
/// to the catch-all symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParametricMapping {
    bindings: Vec<(char, Symbol)>,
    other: Symbol,
}

impl ParametricMapping {
    /// Binds `tasks[i]` to the `i`-th parametric symbol of `alphabet`.
    ///
    /// # Errors
    /// Returns an error if there are more tasks than parametric symbols or a
    /// task repeats.
    pub fn new(alphabet: &Alphabet, tasks: &[char]) -> Result<Self> {
        let parametric: Vec<Symbol> = alphabet.parametric().collect();
        if tasks.len() > parametric.len() {
            return Err(Error::arity_mismatch(
                alphabet.to_string(),
                parametric.len(),
                tasks.len(),
            ));
        }
        let mut bindings = Vec::with_capacity(tasks.len());
        for (&task, symbol) in tasks.iter().zip(parametric) {
            if bindings.iter().any(|&(t, _)| t == task) {
                return Err(Error::role_conflict(
                    format!("symbol {}", alphabet.char_of(symbol)),
                    task,
                ));
            }
            bindings.push((task, symbol));
        }
        Ok(Self {
            bindings,
            other: alphabet.other(),
        })
    }

    /// The symbol a task reads as. Unbound tasks read as the catch-all.
    #[must_use]
    pub fn translate(&self, task: char) -> Symbol {
        self.bindings
            .iter()
            .find_map(|&(t, s)| (t == task).then_some(s))
            .unwrap_or(self.other)
    }

    /// Translates a whole trace.
    #[must_use]
    pub fn translate_trace(&self, trace: &[char]) -> Vec<Symbol> {
        trace.iter().map(|&task| self.translate(task)).collect()
    }

    /// The bound tasks and their symbols.
    #[must_use]
    pub fn bindings(&self) -> &[(char, Symbol)] {
        &self.bindings
    }
}
