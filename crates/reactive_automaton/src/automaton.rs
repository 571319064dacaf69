//! Deterministic finite automata over a parametric alphabet.
//!
//! Automata are stored as an arena of states indexed by [`StateId`], each
//! with a fixed-width transition row indexed by [`Symbol`]. A built
//! [`Automaton`] is always complete and immutable: stepping returns a new
//! state index instead of mutating shared structure, so one automaton can be
//! walked by any number of runners on any number of threads.

use std::fmt;

use reactive_foundation::{Alphabet, Error, ErrorKind, MAX_SYMBOLS, Result, Symbol};

// =============================================================================
// State Identifiers
// =============================================================================

/// Index of a state within one automaton.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) u32);

impl StateId {
    /// Returns the raw index of this state.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

impl fmt::Debug for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

// =============================================================================
// Automaton
// =============================================================================

/// One state of a complete automaton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct State {
    pub(crate) accepting: bool,
    /// Successor per symbol. Slots past the alphabet width loop back to the
    /// state itself and are never read.
    pub(crate) next: [StateId; MAX_SYMBOLS],
}

/// A complete deterministic automaton.
///
/// Every state has exactly one outgoing transition per symbol of
/// [`Automaton::alphabet`]. Acceptance is read *after* consuming a symbol:
/// `accepts(w)` is true when the state reached by reading all of `w` from the
/// initial state is accepting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton {
    alphabet: Alphabet,
    states: Vec<State>,
    initial: StateId,
}

impl Automaton {
    pub(crate) fn from_parts(alphabet: Alphabet, states: Vec<State>, initial: StateId) -> Self {
        debug_assert!(initial.index() < states.len());
        Self {
            alphabet,
            states,
            initial,
        }
    }

    /// The alphabet this automaton reads.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The initial state.
    #[must_use]
    pub const fn initial(&self) -> StateId {
        self.initial
    }

    /// Number of states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if the automaton has no states (never true once built).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterates over all state identifiers.
    pub fn states(&self) -> impl Iterator<Item = StateId> + use<> {
        (0..self.states.len()).map(StateId::from_index)
    }

    /// Returns true if `state` is accepting.
    #[must_use]
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.states[state.index()].accepting
    }

    /// Follows the transition from `state` on `symbol`.
    #[must_use]
    pub fn step(&self, state: StateId, symbol: Symbol) -> StateId {
        debug_assert!(self.alphabet.contains(symbol));
        self.states[state.index()].next[symbol.index()]
    }

    /// Follows a whole word from `state`.
    #[must_use]
    pub fn run<I>(&self, state: StateId, word: I) -> StateId
    where
        I: IntoIterator<Item = Symbol>,
    {
        word.into_iter().fold(state, |s, symbol| self.step(s, symbol))
    }

    /// Returns true if the automaton accepts `word`.
    #[must_use]
    pub fn accepts(&self, word: &[Symbol]) -> bool {
        self.is_accepting(self.run(self.initial, word.iter().copied()))
    }

    /// Iterates over the outgoing transitions of `state`.
    pub fn transitions(&self, state: StateId) -> impl Iterator<Item = (Symbol, StateId)> + '_ {
        let next = &self.states[state.index()].next;
        self.alphabet.symbols().map(move |s| (s, next[s.index()]))
    }

    /// Returns true if `state` is a non-accepting state that loops to itself
    /// on every symbol.
    #[must_use]
    pub fn is_sink(&self, state: StateId) -> bool {
        !self.is_accepting(state) && self.transitions(state).all(|(_, to)| to == state)
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "automaton over {} (initial {:?})", self.alphabet, self.initial)?;
        for state in self.states() {
            let marker = if self.is_accepting(state) { "*" } else { " " };
            write!(f, "  {marker}{state:?}:")?;
            for (symbol, to) in self.transitions(state) {
                write!(f, " {}->{to:?}", self.alphabet.char_of(symbol))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// =============================================================================
// Builder
// =============================================================================

#[derive(Clone, Debug)]
struct PartialState {
    accepting: bool,
    next: [Option<StateId>; MAX_SYMBOLS],
}

/// Incrementally assembles a possibly partial automaton.
///
/// Transitions may be left undefined; [`AutomatonBuilder::complete`] routes
/// every missing `(state, symbol)` pair to a fresh absorbing sink. The first
/// malformed call (unknown state, symbol outside the alphabet, or a second
/// target for the same pair) is remembered and reported by `complete`.
#[derive(Debug)]
pub struct AutomatonBuilder {
    alphabet: Alphabet,
    states: Vec<PartialState>,
    error: Option<Error>,
}

impl AutomatonBuilder {
    /// Creates an empty builder over `alphabet`.
    #[must_use]
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            states: Vec::new(),
            error: None,
        }
    }

    /// The alphabet being built over.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Adds a state and returns its identifier.
    pub fn state(&mut self, accepting: bool) -> StateId {
        let id = StateId::from_index(self.states.len());
        self.states.push(PartialState {
            accepting,
            next: [None; MAX_SYMBOLS],
        });
        id
    }

    /// Adds the transition `from --symbol--> to`.
    pub fn transition(&mut self, from: StateId, symbol: Symbol, to: StateId) -> &mut Self {
        if let Err(e) = self.try_transition(from, symbol, to) {
            self.error.get_or_insert(e);
        }
        self
    }

    /// Adds `from --s--> to` for every `s` in `symbols`.
    pub fn transitions(&mut self, from: StateId, symbols: &[Symbol], to: StateId) -> &mut Self {
        for &symbol in symbols {
            self.transition(from, symbol, to);
        }
        self
    }

    /// Adds `from --s--> to` for every symbol of the alphabet.
    pub fn transitions_all(&mut self, from: StateId, to: StateId) -> &mut Self {
        for symbol in self.alphabet.symbols() {
            self.transition(from, symbol, to);
        }
        self
    }

    fn try_transition(&mut self, from: StateId, symbol: Symbol, to: StateId) -> Result<()> {
        if to.index() >= self.states.len() {
            return Err(Error::new(ErrorKind::InvalidState(to.index())));
        }
        if !self.alphabet.contains(symbol) {
            return Err(Error::invalid_parameter(format!(
                "{symbol:?} is outside alphabet {}",
                self.alphabet
            )));
        }
        let state = self
            .states
            .get_mut(from.index())
            .ok_or_else(|| Error::new(ErrorKind::InvalidState(from.index())))?;
        match state.next[symbol.index()] {
            Some(existing) if existing != to => Err(Error::new(ErrorKind::Nondeterministic {
                state: from.index(),
                symbol: self.alphabet.char_of(symbol),
            })),
            _ => {
                state.next[symbol.index()] = Some(to);
                Ok(())
            }
        }
    }

    /// Returns true if every state already has a transition for every symbol.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let width = self.alphabet.len();
        self.states
            .iter()
            .all(|s| s.next[..width].iter().all(Option::is_some))
    }

    /// Completes the automaton and freezes it with `initial` as start state.
    ///
    /// A single absorbing, non-accepting sink is added when (and only when)
    /// some `(state, symbol)` pair has no transition; every such pair is
    /// routed to it.
    ///
    /// # Errors
    /// Returns the first error recorded while adding transitions, or
    /// [`ErrorKind::InvalidState`] if `initial` is not a state of this builder.
    pub fn complete(mut self, initial: StateId) -> Result<Automaton> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        if initial.index() >= self.states.len() {
            return Err(Error::new(ErrorKind::InvalidState(initial.index())));
        }

        let sink = if self.is_complete() {
            None
        } else {
            Some(StateId::from_index(self.states.len()))
        };

        let mut states: Vec<State> = self
            .states
            .into_iter()
            .enumerate()
            .map(|(i, partial)| {
                let own = StateId::from_index(i);
                let mut next = [own; MAX_SYMBOLS];
                for (slot, target) in next.iter_mut().zip(partial.next) {
                    if let Some(to) = target {
                        *slot = to;
                    }
                }
                for symbol in self.alphabet.symbols() {
                    if partial.next[symbol.index()].is_none() {
                        if let Some(sink) = sink {
                            next[symbol.index()] = sink;
                        }
                    }
                }
                State {
                    accepting: partial.accepting,
                    next,
                }
            })
            .collect();

        if let Some(sink) = sink {
            states.push(State {
                accepting: false,
                next: [sink; MAX_SYMBOLS],
            });
        }

        Ok(Automaton::from_parts(self.alphabet, states, initial))
    }
}
