//! Factory functions for the temporal primitives.
//!
//! Each factory returns the minimal complete automaton recognizing one modal
//! pattern over a parametric alphabet. "Future" patterns read a trace suffix
//! starting at the current event, "past" patterns read the prefix ending at
//! it. Dead states are never written out: missing transitions fall into the
//! sink added by [`AutomatonBuilder::complete`].
//!
//! [`Primitive`] names a pattern and knows its exact mirror, the pattern
//! whose language is the reverse of the original. Mirrors are what the
//! offline runner walks backward.

use reactive_foundation::{Alphabet, Error, Result, Symbol};

use crate::automaton::{Automaton, AutomatonBuilder};

// =============================================================================
// Validation
// =============================================================================

fn check_symbol(alphabet: &Alphabet, symbol: Symbol) -> Result<()> {
    if alphabet.contains(symbol) {
        Ok(())
    } else {
        Err(Error::invalid_parameter(format!(
            "{symbol:?} is outside alphabet {alphabet}"
        )))
    }
}

fn check_distinct(alphabet: &Alphabet, hold: Symbol, halt: Symbol) -> Result<()> {
    check_symbol(alphabet, hold)?;
    check_symbol(alphabet, halt)?;
    if hold == halt {
        return Err(Error::role_conflict("halt", alphabet.char_of(halt)));
    }
    Ok(())
}

// =============================================================================
// Present-tense and activator primitives
// =============================================================================

/// Accepts when the last symbol read is `desired`.
///
/// # Errors
/// Returns an error if `desired` is not in `alphabet`.
pub fn present(alphabet: Alphabet, desired: Symbol) -> Result<Automaton> {
    multi_activator(alphabet, &[desired])
}

/// Accepts when the trace ends with `desired`. Same graph as [`present`].
///
/// # Errors
/// Returns an error if `desired` is not in `alphabet`.
pub fn last(alphabet: Alphabet, desired: Symbol) -> Result<Automaton> {
    present(alphabet, desired)
}

/// Accepts when the trace starts with `desired`.
///
/// # Errors
/// Returns an error if `desired` is not in `alphabet`.
pub fn first(alphabet: Alphabet, desired: Symbol) -> Result<Automaton> {
    check_symbol(&alphabet, desired)?;
    let mut b = AutomatonBuilder::new(alphabet);
    let init = b.state(false);
    let hit = b.state(true);
    b.transition(init, desired, hit).transitions_all(hit, hit);
    b.complete(init)
}

/// Activator firing on events equal to `activator`.
///
/// # Errors
/// Returns an error if `activator` is not in `alphabet`.
pub fn single_activator(alphabet: Alphabet, activator: Symbol) -> Result<Automaton> {
    multi_activator(alphabet, &[activator])
}

/// Activator firing on events equal to any of `activators`.
///
/// # Errors
/// Returns an error if `activators` is empty or holds a foreign symbol.
pub fn multi_activator(alphabet: Alphabet, activators: &[Symbol]) -> Result<Automaton> {
    if activators.is_empty() {
        return Err(Error::invalid_parameter("activator set is empty"));
    }
    for &symbol in activators {
        check_symbol(&alphabet, symbol)?;
    }
    let others = alphabet.others(activators);
    let mut b = AutomatonBuilder::new(alphabet);
    let idle = b.state(false);
    let fired = b.state(true);
    for state in [idle, fired] {
        b.transitions(state, activators, fired)
            .transitions(state, &others, idle);
    }
    b.complete(idle)
}

/// Activator firing on the first event of the trace only.
///
/// # Errors
/// Infallible in practice; kept fallible for symmetry with the other builders.
pub fn existential_activator(alphabet: Alphabet) -> Result<Automaton> {
    let mut b = AutomatonBuilder::new(alphabet);
    let init = b.state(false);
    let fired = b.state(true);
    b.transitions_all(init, fired);
    b.complete(init)
}

// =============================================================================
// Eventually / never
// =============================================================================

/// ◇d: accepts when `desired` occurs somewhere.
///
/// # Errors
/// Returns an error if `desired` is not in `alphabet`.
pub fn eventually(alphabet: Alphabet, desired: Symbol) -> Result<Automaton> {
    check_symbol(&alphabet, desired)?;
    let others = alphabet.others(&[desired]);
    let mut b = AutomatonBuilder::new(alphabet);
    let waiting = b.state(false);
    let seen = b.state(true);
    b.transition(waiting, desired, seen)
        .transitions(waiting, &others, waiting)
        .transitions_all(seen, seen);
    b.complete(waiting)
}

/// ¬◇d: accepts when `desired` never occurs.
///
/// # Errors
/// Returns an error if `desired` is not in `alphabet`.
pub fn never_eventually(alphabet: Alphabet, desired: Symbol) -> Result<Automaton> {
    check_symbol(&alphabet, desired)?;
    let others = alphabet.others(&[desired]);
    let mut b = AutomatonBuilder::new(alphabet);
    let clean = b.state(true);
    b.transitions(clean, &others, clean);
    b.complete(clean)
}

/// ○¬◇d: at least one event, and `desired` never occurs after the first.
///
/// # Errors
/// Returns an error if `desired` is not in `alphabet`.
pub fn next_never_eventually(alphabet: Alphabet, desired: Symbol) -> Result<Automaton> {
    check_symbol(&alphabet, desired)?;
    let others = alphabet.others(&[desired]);
    let mut b = AutomatonBuilder::new(alphabet);
    let init = b.state(false);
    let clean = b.state(true);
    b.transitions_all(init, clean)
        .transitions(clean, &others, clean);
    b.complete(init)
}

/// Mirror of [`next_never_eventually`]: at least one event, and `desired`
/// occurs nowhere except possibly at the last one.
///
/// # Errors
/// Returns an error if `desired` is not in `alphabet`.
pub fn never_eventually_before(alphabet: Alphabet, desired: Symbol) -> Result<Automaton> {
    check_symbol(&alphabet, desired)?;
    let others = alphabet.others(&[desired]);
    let mut b = AutomatonBuilder::new(alphabet);
    let init = b.state(false);
    let clean = b.state(true);
    let closing = b.state(true);
    for state in [init, clean] {
        b.transition(state, desired, closing)
            .transitions(state, &others, clean);
    }
    b.complete(init)
}

/// Exactly `count` occurrences of `desired`.
///
/// # Errors
/// Returns an error if `count` is zero (use [`never_eventually`]) or if
/// `desired` is not in `alphabet`.
pub fn exactly(alphabet: Alphabet, desired: Symbol, count: usize) -> Result<Automaton> {
    check_symbol(&alphabet, desired)?;
    if count == 0 {
        return Err(Error::invalid_parameter(
            "exactly(0) is never_eventually; count must be positive",
        ));
    }
    let others = alphabet.others(&[desired]);
    let mut b = AutomatonBuilder::new(alphabet);
    let seen: Vec<_> = (0..=count).map(|i| b.state(i == count)).collect();
    for (i, &state) in seen.iter().enumerate() {
        b.transitions(state, &others, state);
        if let Some(&more) = seen.get(i + 1) {
            b.transition(state, desired, more);
        }
    }
    b.complete(seen[0])
}

// =============================================================================
// Next / previous
// =============================================================================

/// ○d: the second symbol is `desired`.
///
/// # Errors
/// Returns an error if `desired` is not in `alphabet`.
pub fn next(alphabet: Alphabet, desired: Symbol) -> Result<Automaton> {
    check_symbol(&alphabet, desired)?;
    let mut b = AutomatonBuilder::new(alphabet);
    let init = b.state(false);
    let armed = b.state(false);
    let hit = b.state(true);
    b.transitions_all(init, armed)
        .transition(armed, desired, hit)
        .transitions_all(hit, hit);
    b.complete(init)
}

/// Weak ¬○d: there is no second symbol, or it is not `desired`.
///
/// # Errors
/// Returns an error if `desired` is not in `alphabet`.
pub fn not_next(alphabet: Alphabet, desired: Symbol) -> Result<Automaton> {
    check_symbol(&alphabet, desired)?;
    let others = alphabet.others(&[desired]);
    let mut b = AutomatonBuilder::new(alphabet);
    let init = b.state(true);
    let armed = b.state(true);
    let clear = b.state(true);
    b.transitions_all(init, armed)
        .transitions(armed, &others, clear)
        .transitions_all(clear, clear);
    b.complete(init)
}

/// Builds the two-symbol window shared by [`previous`] and [`not_previous`].
///
/// States track whether the last and second-to-last symbols were `desired`;
/// acceptance depends on the second-to-last only.
fn previous_window(alphabet: Alphabet, desired: Symbol, negated: bool) -> Result<Automaton> {
    check_symbol(&alphabet, desired)?;
    let others = alphabet.others(&[desired]);
    let mut b = AutomatonBuilder::new(alphabet);
    let neither = b.state(negated);
    let last_only = b.state(negated);
    let both = b.state(!negated);
    let before_only = b.state(!negated);
    for state in [neither, before_only] {
        b.transition(state, desired, last_only)
            .transitions(state, &others, neither);
    }
    for state in [last_only, both] {
        b.transition(state, desired, both)
            .transitions(state, &others, before_only);
    }
    b.complete(neither)
}

/// ⊖d: the second-to-last symbol is `desired`. Mirror of [`next`].
///
/// # Errors
/// Returns an error if `desired` is not in `alphabet`.
pub fn previous(alphabet: Alphabet, desired: Symbol) -> Result<Automaton> {
    previous_window(alphabet, desired, false)
}

/// Weak ¬⊖d. Mirror of [`not_next`].
///
/// # Errors
/// Returns an error if `desired` is not in `alphabet`.
pub fn not_previous(alphabet: Alphabet, desired: Symbol) -> Result<Automaton> {
    previous_window(alphabet, desired, true)
}

// =============================================================================
// Until / since
// =============================================================================

/// ○(¬hold U halt): after the first symbol, `halt` occurs before any `hold`.
///
/// # Errors
/// Returns an error if the symbols coincide or are not in `alphabet`.
pub fn next_not_until(alphabet: Alphabet, hold: Symbol, halt: Symbol) -> Result<Automaton> {
    check_distinct(&alphabet, hold, halt)?;
    let others = alphabet.others(&[hold, halt]);
    let mut b = AutomatonBuilder::new(alphabet);
    let init = b.state(false);
    let open = b.state(false);
    let closed = b.state(true);
    b.transitions_all(init, open)
        .transition(open, halt, closed)
        .transitions(open, &others, open)
        .transitions_all(closed, closed);
    b.complete(init)
}

/// Mirror of [`next_not_until`]: ignoring the last symbol, the most recent
/// of `hold`/`halt` is `halt`.
///
/// # Errors
/// Returns an error if the symbols coincide or are not in `alphabet`.
pub fn not_since_previous(alphabet: Alphabet, hold: Symbol, halt: Symbol) -> Result<Automaton> {
    check_distinct(&alphabet, hold, halt)?;
    let others = alphabet.others(&[hold, halt]);
    let mut b = AutomatonBuilder::new(alphabet);
    // Named by (status before the last symbol, status including it).
    let off_off = b.state(false);
    let off_on = b.state(false);
    let on_on = b.state(true);
    let on_off = b.state(true);
    for (state, including) in [(off_off, false), (on_off, false), (off_on, true), (on_on, true)] {
        let (on, off) = if including {
            (on_on, on_off)
        } else {
            (off_on, off_off)
        };
        let keep = if including { on_on } else { off_off };
        b.transition(state, halt, on)
            .transition(state, hold, off)
            .transitions(state, &others, keep);
    }
    b.complete(off_off)
}

// =============================================================================
// Primitive descriptors
// =============================================================================

/// A named temporal pattern over parametric symbols.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// The current event is the symbol.
    Present(Symbol),
    /// The trace starts with the symbol.
    First(Symbol),
    /// The trace ends with the symbol.
    Last(Symbol),
    /// The symbol occurs.
    Eventually(Symbol),
    /// The symbol never occurs.
    NeverEventually(Symbol),
    /// The symbol occurs exactly `count` times.
    Exactly {
        /// The counted symbol.
        symbol: Symbol,
        /// Required number of occurrences.
        count: usize,
    },
    /// The second event is the symbol.
    Next(Symbol),
    /// The second-to-last event is the symbol.
    Previous(Symbol),
    /// Weak negation of [`Primitive::Next`].
    NotNext(Symbol),
    /// Weak negation of [`Primitive::Previous`].
    NotPrevious(Symbol),
    /// The symbol never occurs after the first event.
    NextNeverEventually(Symbol),
    /// The symbol never occurs before the last event.
    NeverEventuallyBefore(Symbol),
    /// After the first event, `halt` occurs before `hold`.
    NextNotUntil {
        /// Symbol that must not occur first.
        hold: Symbol,
        /// Symbol that discharges the obligation.
        halt: Symbol,
    },
    /// Before the last event, the latest of `hold`/`halt` is `halt`.
    NotSincePrevious {
        /// Symbol that must not be the latest.
        hold: Symbol,
        /// Symbol that must be the latest.
        halt: Symbol,
    },
}

impl Primitive {
    /// Builds the forward automaton of this pattern.
    ///
    /// # Errors
    /// Returns an error if a symbol is outside `alphabet` or the parameters
    /// are otherwise invalid.
    pub fn build(self, alphabet: Alphabet) -> Result<Automaton> {
        match self {
            Self::Present(d) => present(alphabet, d),
            Self::First(d) => first(alphabet, d),
            Self::Last(d) => last(alphabet, d),
            Self::Eventually(d) => eventually(alphabet, d),
            Self::NeverEventually(d) => never_eventually(alphabet, d),
            Self::Exactly { symbol, count } => exactly(alphabet, symbol, count),
            Self::Next(d) => next(alphabet, d),
            Self::Previous(d) => previous(alphabet, d),
            Self::NotNext(d) => not_next(alphabet, d),
            Self::NotPrevious(d) => not_previous(alphabet, d),
            Self::NextNeverEventually(d) => next_never_eventually(alphabet, d),
            Self::NeverEventuallyBefore(d) => never_eventually_before(alphabet, d),
            Self::NextNotUntil { hold, halt } => next_not_until(alphabet, hold, halt),
            Self::NotSincePrevious { hold, halt } => not_since_previous(alphabet, hold, halt),
        }
    }

    /// The pattern recognizing the reverse language.
    #[must_use]
    pub const fn mirror(self) -> Self {
        match self {
            Self::Present(d) | Self::Last(d) => Self::First(d),
            Self::First(d) => Self::Last(d),
            Self::Eventually(_) | Self::NeverEventually(_) | Self::Exactly { .. } => self,
            Self::Next(d) => Self::Previous(d),
            Self::Previous(d) => Self::Next(d),
            Self::NotNext(d) => Self::NotPrevious(d),
            Self::NotPrevious(d) => Self::NotNext(d),
            Self::NextNeverEventually(d) => Self::NeverEventuallyBefore(d),
            Self::NeverEventuallyBefore(d) => Self::NextNeverEventually(d),
            Self::NextNotUntil { hold, halt } => Self::NotSincePrevious { hold, halt },
            Self::NotSincePrevious { hold, halt } => Self::NextNotUntil { hold, halt },
        }
    }

    /// Builds the automaton of [`Primitive::mirror`].
    ///
    /// # Errors
    /// See [`Primitive::build`].
    pub fn build_mirror(self, alphabet: Alphabet) -> Result<Automaton> {
        self.mirror().build(alphabet)
    }
}
