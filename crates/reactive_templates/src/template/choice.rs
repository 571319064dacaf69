//! Templates outside the Declare language.

use reactive_automaton::primitive::single_activator;
use reactive_automaton::{ConjunctAutomata, Primitive, SeparatedAutomaton};
use reactive_foundation::Result;

use super::{future, ternary};

/// a ⇒ ◇b ∨ ◇⁻c over `{a,b,c,z}`.
pub(crate) fn before_this_or_later_that() -> Result<SeparatedAutomaton> {
    let (alphabet, a, b, c) = ternary()?;
    SeparatedAutomaton::new(
        alphabet,
        single_activator(alphabet, a)?,
        vec![
            ConjunctAutomata::new().with_future(future(Primitive::Eventually(b), alphabet)?),
            ConjunctAutomata::new().with_past(Primitive::Eventually(c).build(alphabet)?),
        ],
    )
}
