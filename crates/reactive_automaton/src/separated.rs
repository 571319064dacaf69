//! Separated automata: an activator plus a disjunction of past/present/future
//! conjuncts.
//!
//! A [`SeparatedAutomaton`] states `activator(event) ⇒ ∨ᵢ (pastᵢ ∧ presentᵢ ∧
//! futureᵢ)`. Each component is an independent complete automaton over the
//! same parametric alphabet; an absent component is vacuously true.

use std::fmt;

use reactive_foundation::{Alphabet, Error, Result};

use crate::automaton::Automaton;
use crate::primitive::Primitive;

fn check_alphabet(expected: &Alphabet, automaton: &Automaton) -> Result<()> {
    if automaton.alphabet() == expected {
        Ok(())
    } else {
        Err(Error::alphabet_mismatch(
            expected.to_string(),
            automaton.alphabet().to_string(),
        ))
    }
}

// =============================================================================
// FutureAutomaton
// =============================================================================

/// A future component with its reversed twin.
///
/// The forward automaton reads the suffix starting at the current event and
/// serves the incremental runner. The reversed automaton reads the same
/// suffix backwards and serves the offline runner. Both are built once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FutureAutomaton {
    forward: Automaton,
    reversed: Automaton,
}

impl FutureAutomaton {
    /// Wraps `forward`, deriving the reversed twin by subset construction.
    #[must_use]
    pub fn new(forward: Automaton) -> Self {
        let reversed = forward.reversed();
        Self { forward, reversed }
    }

    /// Builds both directions of a primitive from its hand-derived mirror.
    ///
    /// # Errors
    /// Returns an error if the primitive cannot be built over `alphabet`.
    pub fn from_primitive(primitive: Primitive, alphabet: Alphabet) -> Result<Self> {
        Ok(Self {
            forward: primitive.build(alphabet)?,
            reversed: primitive.build_mirror(alphabet)?,
        })
    }

    /// Pairs a forward automaton with an explicitly supplied reversal.
    ///
    /// # Errors
    /// Returns [`reactive_foundation::ErrorKind::AlphabetMismatch`] if the two
    /// automata read different alphabets.
    pub fn with_reversed(forward: Automaton, reversed: Automaton) -> Result<Self> {
        check_alphabet(forward.alphabet(), &reversed)?;
        Ok(Self { forward, reversed })
    }

    /// The automaton stepped forward by the incremental runner.
    #[must_use]
    pub fn forward(&self) -> &Automaton {
        &self.forward
    }

    /// The automaton stepped backward by the offline runner.
    #[must_use]
    pub fn reversed(&self) -> &Automaton {
        &self.reversed
    }

    /// The alphabet both directions read.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        self.forward.alphabet()
    }
}

// =============================================================================
// ConjunctAutomata
// =============================================================================

/// One disjunct: optional past, present and future components.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConjunctAutomata {
    past: Option<Automaton>,
    present: Option<Automaton>,
    future: Option<FutureAutomaton>,
}

impl ConjunctAutomata {
    /// Creates a conjunct with every component absent (always true).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the past component.
    #[must_use]
    pub fn with_past(mut self, past: Automaton) -> Self {
        self.past = Some(past);
        self
    }

    /// Sets the present component.
    #[must_use]
    pub fn with_present(mut self, present: Automaton) -> Self {
        self.present = Some(present);
        self
    }

    /// Sets the future component.
    #[must_use]
    pub fn with_future(mut self, future: FutureAutomaton) -> Self {
        self.future = Some(future);
        self
    }

    /// The past component, if any.
    #[must_use]
    pub fn past(&self) -> Option<&Automaton> {
        self.past.as_ref()
    }

    /// The present component, if any.
    #[must_use]
    pub fn present(&self) -> Option<&Automaton> {
        self.present.as_ref()
    }

    /// The future component, if any.
    #[must_use]
    pub fn future(&self) -> Option<&FutureAutomaton> {
        self.future.as_ref()
    }

    /// Returns true if the conjunct has a future component.
    #[must_use]
    pub fn has_future(&self) -> bool {
        self.future.is_some()
    }

    fn check(&self, alphabet: &Alphabet) -> Result<()> {
        if let Some(past) = &self.past {
            check_alphabet(alphabet, past).map_err(|e| e.in_frame("past component"))?;
        }
        if let Some(present) = &self.present {
            check_alphabet(alphabet, present).map_err(|e| e.in_frame("present component"))?;
        }
        if let Some(future) = &self.future {
            check_alphabet(alphabet, future.forward())
                .and_then(|()| check_alphabet(alphabet, future.reversed()))
                .map_err(|e| e.in_frame("future component"))?;
        }
        Ok(())
    }
}

impl fmt::Display for ConjunctAutomata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [
            self.past.as_ref().map(|_| "past"),
            self.present.as_ref().map(|_| "present"),
            self.future.as_ref().map(|_| "future"),
        ]
        .into_iter()
        .flatten()
        .collect();
        if parts.is_empty() {
            write!(f, "true")
        } else {
            write!(f, "({})", parts.join(" ∧ "))
        }
    }
}

// =============================================================================
// SeparatedAutomaton
// =============================================================================

/// A compiled constraint: activator plus disjunction of conjuncts.
///
/// Immutable once built and shared read-only by any number of runners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeparatedAutomaton {
    name: Option<String>,
    alphabet: Alphabet,
    activator: Automaton,
    disjuncts: Vec<ConjunctAutomata>,
}

impl SeparatedAutomaton {
    /// Assembles a separated automaton.
    ///
    /// # Errors
    /// Returns an error if `disjuncts` is empty or any component is built
    /// over an alphabet other than `alphabet`.
    pub fn new(
        alphabet: Alphabet,
        activator: Automaton,
        disjuncts: Vec<ConjunctAutomata>,
    ) -> Result<Self> {
        check_alphabet(&alphabet, &activator).map_err(|e| e.in_frame("activator"))?;
        if disjuncts.is_empty() {
            return Err(Error::invalid_parameter(
                "separated automaton needs at least one disjunct",
            ));
        }
        for (i, conjunct) in disjuncts.iter().enumerate() {
            conjunct
                .check(&alphabet)
                .map_err(|e| e.in_frame(format!("disjunct {i}")))?;
        }
        Ok(Self {
            name: None,
            alphabet,
            activator,
            disjuncts,
        })
    }

    /// Attaches a display label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The display label, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The parametric alphabet of every component.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The activator automaton.
    #[must_use]
    pub fn activator(&self) -> &Automaton {
        &self.activator
    }

    /// The disjuncts.
    #[must_use]
    pub fn disjuncts(&self) -> &[ConjunctAutomata] {
        &self.disjuncts
    }

    /// Returns true if some disjunct has a future component.
    #[must_use]
    pub fn has_future(&self) -> bool {
        self.disjuncts.iter().any(ConjunctAutomata::has_future)
    }
}

impl fmt::Display for SeparatedAutomaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} over {}: activator ⇒ ",
            self.name.as_deref().unwrap_or("<anonymous>"),
            self.alphabet
        )?;
        for (i, conjunct) in self.disjuncts.iter().enumerate() {
            if i > 0 {
                write!(f, " ∨ ")?;
            }
            write!(f, "{conjunct}")?;
        }
        Ok(())
    }
}
