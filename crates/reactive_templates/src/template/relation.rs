//! Positive binary relations over `{a,b,z}`.
//!
//! Response-family templates are activated by `a`, precedence-family ones by
//! `b`, and the mutual ones (CoExistence and the successions) by either,
//! with the present component telling the two directions apart.

use reactive_automaton::primitive::{multi_activator, present, single_activator};
use reactive_automaton::{ConjunctAutomata, Primitive, SeparatedAutomaton};
use reactive_foundation::{Result, Symbol};

use super::{binary, future};

// =============================================================================
// Response family
// =============================================================================

fn after_a(pattern: Primitive) -> Result<SeparatedAutomaton> {
    let (alphabet, a, _) = binary()?;
    SeparatedAutomaton::new(
        alphabet,
        single_activator(alphabet, a)?,
        vec![ConjunctAutomata::new().with_future(future(pattern, alphabet)?)],
    )
}

/// a ⇒ ◇⁻b ∨ ◇b
pub(crate) fn responded_existence() -> Result<SeparatedAutomaton> {
    let (alphabet, a, b) = binary()?;
    SeparatedAutomaton::new(
        alphabet,
        single_activator(alphabet, a)?,
        vec![
            ConjunctAutomata::new().with_past(Primitive::Eventually(b).build(alphabet)?),
            ConjunctAutomata::new().with_future(future(Primitive::Eventually(b), alphabet)?),
        ],
    )
}

/// a ⇒ ◇b
pub(crate) fn response() -> Result<SeparatedAutomaton> {
    let b = binary()?.2;
    after_a(Primitive::Eventually(b))
}

/// a ⇒ ○(¬a U b)
pub(crate) fn alternate_response() -> Result<SeparatedAutomaton> {
    let (_, a, b) = binary()?;
    after_a(Primitive::NextNotUntil { hold: a, halt: b })
}

/// a ⇒ ○b
pub(crate) fn chain_response() -> Result<SeparatedAutomaton> {
    let b = binary()?.2;
    after_a(Primitive::Next(b))
}

// =============================================================================
// Precedence family
// =============================================================================

fn before_b(pattern: fn(Symbol, Symbol) -> Primitive) -> Result<SeparatedAutomaton> {
    let (alphabet, a, b) = binary()?;
    let past = pattern(a, b).build(alphabet)?;
    SeparatedAutomaton::new(
        alphabet,
        single_activator(alphabet, b)?,
        vec![ConjunctAutomata::new().with_past(past)],
    )
}

/// b ⇒ ◇⁻a
pub(crate) fn precedence() -> Result<SeparatedAutomaton> {
    before_b(|a, _| Primitive::Eventually(a))
}

/// b ⇒ ⊖(¬b S a)
pub(crate) fn alternate_precedence() -> Result<SeparatedAutomaton> {
    before_b(|a, b| Primitive::NotSincePrevious { hold: b, halt: a })
}

/// b ⇒ ⊖a
pub(crate) fn chain_precedence() -> Result<SeparatedAutomaton> {
    before_b(|a, _| Primitive::Previous(a))
}

// =============================================================================
// Mutual relations
// =============================================================================

/// The two directions of a succession: `a` now with a future obligation on
/// `b`, or `b` now with a past obligation on `a`.
fn succession_of(forward: Primitive, backward: Primitive) -> Result<SeparatedAutomaton> {
    let (alphabet, a, b) = binary()?;
    SeparatedAutomaton::new(
        alphabet,
        multi_activator(alphabet, &[a, b])?,
        vec![
            ConjunctAutomata::new()
                .with_present(present(alphabet, a)?)
                .with_future(future(forward, alphabet)?),
            ConjunctAutomata::new()
                .with_past(backward.build(alphabet)?)
                .with_present(present(alphabet, b)?),
        ],
    )
}

/// a ⇒ (◇b ∨ ◇⁻b), and symmetrically for b.
pub(crate) fn co_existence() -> Result<SeparatedAutomaton> {
    let (alphabet, a, b) = binary()?;
    let mut disjuncts = Vec::with_capacity(4);
    for (now, other) in [(a, b), (b, a)] {
        disjuncts.push(
            ConjunctAutomata::new()
                .with_present(present(alphabet, now)?)
                .with_future(future(Primitive::Eventually(other), alphabet)?),
        );
        disjuncts.push(
            ConjunctAutomata::new()
                .with_past(Primitive::Eventually(other).build(alphabet)?)
                .with_present(present(alphabet, now)?),
        );
    }
    SeparatedAutomaton::new(alphabet, multi_activator(alphabet, &[a, b])?, disjuncts)
}

pub(crate) fn succession() -> Result<SeparatedAutomaton> {
    let (_, a, b) = binary()?;
    succession_of(Primitive::Eventually(b), Primitive::Eventually(a))
}

pub(crate) fn alternate_succession() -> Result<SeparatedAutomaton> {
    let (_, a, b) = binary()?;
    succession_of(
        Primitive::NextNotUntil { hold: a, halt: b },
        Primitive::NotSincePrevious { hold: b, halt: a },
    )
}

pub(crate) fn chain_succession() -> Result<SeparatedAutomaton> {
    let (_, a, b) = binary()?;
    succession_of(Primitive::Next(b), Primitive::Previous(a))
}
