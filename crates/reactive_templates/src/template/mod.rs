//! Per-template compilers.
//!
//! Each compiler is a plain function building one [`SeparatedAutomaton`]
//! over the template's standard alphabet. Parameters bind positionally:
//! the first task to `a`, the second to `b`, the third to `c`.

use reactive_automaton::{FutureAutomaton, Primitive, SeparatedAutomaton};
use reactive_foundation::{Alphabet, Result, Symbol};

pub(crate) mod choice;
pub(crate) mod existence;
pub(crate) mod negative;
pub(crate) mod relation;

/// A compiler for one template.
pub type TemplateCompiler = fn() -> Result<SeparatedAutomaton>;

/// The standard alphabet for `arity` parameters plus its parametric symbols.
fn roles(arity: usize) -> Result<(Alphabet, Vec<Symbol>)> {
    let alphabet = Alphabet::standard(arity)?;
    Ok((alphabet, alphabet.parametric().collect()))
}

fn unary() -> Result<(Alphabet, Symbol)> {
    let (alphabet, s) = roles(1)?;
    Ok((alphabet, s[0]))
}

fn binary() -> Result<(Alphabet, Symbol, Symbol)> {
    let (alphabet, s) = roles(2)?;
    Ok((alphabet, s[0], s[1]))
}

fn ternary() -> Result<(Alphabet, Symbol, Symbol, Symbol)> {
    let (alphabet, s) = roles(3)?;
    Ok((alphabet, s[0], s[1], s[2]))
}

fn future(primitive: Primitive, alphabet: Alphabet) -> Result<FutureAutomaton> {
    FutureAutomaton::from_primitive(primitive, alphabet)
}
