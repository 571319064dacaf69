//! Negative binary relations over `{a,b,z}`, activated by either task.

use reactive_automaton::primitive::{multi_activator, present};
use reactive_automaton::{ConjunctAutomata, Primitive, SeparatedAutomaton};
use reactive_foundation::Result;

use super::{binary, future};

/// a ⇒ ¬◇⁻b ∧ ¬◇b, and symmetrically for b.
pub(crate) fn not_co_existence() -> Result<SeparatedAutomaton> {
    let (alphabet, a, b) = binary()?;
    let mut disjuncts = Vec::with_capacity(2);
    for (now, other) in [(a, b), (b, a)] {
        disjuncts.push(
            ConjunctAutomata::new()
                .with_past(Primitive::NeverEventually(other).build(alphabet)?)
                .with_present(present(alphabet, now)?)
                .with_future(future(Primitive::NeverEventually(other), alphabet)?),
        );
    }
    SeparatedAutomaton::new(alphabet, multi_activator(alphabet, &[a, b])?, disjuncts)
}

/// (a ⇒ ¬◇b) ∧ (b ⇒ ¬◇⁻a)
pub(crate) fn not_succession() -> Result<SeparatedAutomaton> {
    let (alphabet, a, b) = binary()?;
    SeparatedAutomaton::new(
        alphabet,
        multi_activator(alphabet, &[a, b])?,
        vec![
            ConjunctAutomata::new()
                .with_present(present(alphabet, a)?)
                .with_future(future(Primitive::NeverEventually(b), alphabet)?),
            ConjunctAutomata::new()
                .with_past(Primitive::NeverEventually(a).build(alphabet)?)
                .with_present(present(alphabet, b)?),
        ],
    )
}

/// (a ⇒ ¬○b) ∧ (b ⇒ ¬⊖a)
pub(crate) fn not_chain_succession() -> Result<SeparatedAutomaton> {
    let (alphabet, a, b) = binary()?;
    SeparatedAutomaton::new(
        alphabet,
        multi_activator(alphabet, &[a, b])?,
        vec![
            ConjunctAutomata::new()
                .with_present(present(alphabet, a)?)
                .with_future(future(Primitive::NotNext(b), alphabet)?),
            ConjunctAutomata::new()
                .with_past(Primitive::NotPrevious(a).build(alphabet)?)
                .with_present(present(alphabet, b)?),
        ],
    )
}
