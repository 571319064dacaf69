//! Existence templates over `{a,z}`.
//!
//! All but [`at_most_one`] are checked once per trace: the existential
//! activator fires on the first event and the future component reads the
//! whole trace from there.

use reactive_automaton::primitive::{existential_activator, single_activator};
use reactive_automaton::{ConjunctAutomata, Primitive, SeparatedAutomaton};
use reactive_foundation::{Result, Symbol};

use super::{future, unary};

fn whole_trace(pattern: fn(Symbol) -> Primitive) -> Result<SeparatedAutomaton> {
    let (alphabet, a) = unary()?;
    SeparatedAutomaton::new(
        alphabet,
        existential_activator(alphabet)?,
        vec![ConjunctAutomata::new().with_future(future(pattern(a), alphabet)?)],
    )
}

/// ◇a
pub(crate) fn participation() -> Result<SeparatedAutomaton> {
    whole_trace(Primitive::Eventually)
}

/// ¬◇a
pub(crate) fn absence() -> Result<SeparatedAutomaton> {
    whole_trace(Primitive::NeverEventually)
}

/// a ⇒ (no earlier a) ∧ (no later a)
pub(crate) fn at_most_one() -> Result<SeparatedAutomaton> {
    let (alphabet, a) = unary()?;
    let past = Primitive::NeverEventuallyBefore(a).build(alphabet)?;
    SeparatedAutomaton::new(
        alphabet,
        single_activator(alphabet, a)?,
        vec![
            ConjunctAutomata::new()
                .with_past(past)
                .with_future(future(Primitive::NextNeverEventually(a), alphabet)?),
        ],
    )
}

pub(crate) fn exactly_one() -> Result<SeparatedAutomaton> {
    whole_trace(|a| Primitive::Exactly { symbol: a, count: 1 })
}

pub(crate) fn init() -> Result<SeparatedAutomaton> {
    whole_trace(Primitive::First)
}

pub(crate) fn end() -> Result<SeparatedAutomaton> {
    whole_trace(Primitive::Last)
}
