//! Generic reversal by subset construction.
//!
//! Hand-derived mirrors in [`crate::primitive`] cover every primitive used in
//! future position; this module is the fallback for arbitrary automata.

use std::collections::HashMap;

use crate::automaton::{Automaton, State, StateId};
use reactive_foundation::MAX_SYMBOLS;

/// A set of original states, one flag per state.
type Subset = Vec<bool>;

impl Automaton {
    /// Builds a complete deterministic automaton for the reverse language.
    ///
    /// The reversed automaton accepts `w` exactly when `self` accepts `w`
    /// read backwards. Its states are sets of original states: the start set
    /// holds every accepting state, a set is accepting when it contains the
    /// original initial state, and the empty set is the absorbing sink that
    /// completes the result.
    #[must_use]
    pub fn reversed(&self) -> Automaton {
        let alphabet = *self.alphabet();
        let width = self.len();

        let start: Subset = self.states().map(|s| self.is_accepting(s)).collect();

        let mut index: HashMap<Subset, StateId> = HashMap::new();
        let mut subsets: Vec<Subset> = Vec::new();
        let mut states: Vec<State> = Vec::new();

        index.insert(start.clone(), StateId::from_index(0));
        subsets.push(start);

        let mut cursor = 0;
        while cursor < subsets.len() {
            let current = subsets[cursor].clone();
            let own = StateId::from_index(cursor);
            let mut next = [own; MAX_SYMBOLS];

            for symbol in alphabet.symbols() {
                // Predecessors of `current` on `symbol`.
                let mut pre = vec![false; width];
                for state in self.states() {
                    if current[self.step(state, symbol).index()] {
                        pre[state.index()] = true;
                    }
                }
                let target = match index.get(&pre) {
                    Some(&id) => id,
                    None => {
                        let id = StateId::from_index(subsets.len());
                        index.insert(pre.clone(), id);
                        subsets.push(pre);
                        id
                    }
                };
                next[symbol.index()] = target;
            }

            states.push(State {
                accepting: current[self.initial().index()],
                next,
            });
            cursor += 1;
        }

        Automaton::from_parts(alphabet, states, StateId::from_index(0))
    }
}
