//! Integration tests for separated automata
//!
//! Tests assembly, validation, and display of activator/disjunct bundles.

use reactive_automaton::{ConjunctAutomata, FutureAutomaton, Primitive, SeparatedAutomaton, primitive};
use reactive_foundation::{Alphabet, ErrorKind};

// =============================================================================
// Helper Functions
// =============================================================================

/// Response(a, b) assembled by hand.
fn response() -> SeparatedAutomaton {
    let alphabet = Alphabet::standard(2).unwrap();
    let a = alphabet.resolve('a').unwrap();
    let b = alphabet.resolve('b').unwrap();
    let activator = primitive::single_activator(alphabet, a).unwrap();
    let future = FutureAutomaton::from_primitive(Primitive::Eventually(b), alphabet).unwrap();
    SeparatedAutomaton::new(
        alphabet,
        activator,
        vec![ConjunctAutomata::new().with_future(future)],
    )
    .unwrap()
    .with_name("Response")
}

// =============================================================================
// Assembly
// =============================================================================

#[test]
fn assembled_components_are_reachable() {
    let automaton = response();
    assert_eq!(automaton.name(), Some("Response"));
    assert_eq!(automaton.disjuncts().len(), 1);
    assert!(automaton.has_future());

    let conjunct = &automaton.disjuncts()[0];
    assert!(conjunct.past().is_none());
    assert!(conjunct.present().is_none());
    let future = conjunct.future().unwrap();
    assert_eq!(future.alphabet(), automaton.alphabet());
}

#[test]
fn display_shows_structure() {
    let shown = response().to_string();
    assert!(shown.starts_with("Response over {a,b,z}"));
    assert!(shown.contains("(future)"));
}

#[test]
fn generic_reversal_is_used_without_a_mirror() {
    let alphabet = Alphabet::standard(2).unwrap();
    let b = alphabet.resolve('b').unwrap();
    let forward = primitive::next(alphabet, b).unwrap();
    let future = FutureAutomaton::new(forward.clone());
    let a = alphabet.resolve('a').unwrap();
    assert!(forward.accepts(&[a, b]));
    assert!(future.reversed().accepts(&[b, a]));
    assert!(!future.reversed().accepts(&[a, b]));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn empty_disjunction_is_rejected() {
    let alphabet = Alphabet::standard(1).unwrap();
    let activator = primitive::existential_activator(alphabet).unwrap();
    let err = SeparatedAutomaton::new(alphabet, activator, Vec::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidParameter(_)));
}

#[test]
fn mixed_alphabets_are_rejected() {
    let unary = Alphabet::standard(1).unwrap();
    let binary = Alphabet::standard(2).unwrap();
    let activator = primitive::existential_activator(binary).unwrap();
    let past = primitive::eventually(unary, unary.resolve('a').unwrap()).unwrap();

    let err = SeparatedAutomaton::new(
        binary,
        activator,
        vec![ConjunctAutomata::new(), ConjunctAutomata::new().with_past(past)],
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::AlphabetMismatch { .. }));
    let stack = err.context.unwrap().stack;
    assert_eq!(stack, vec!["past component", "disjunct 1"]);
}

#[test]
fn mismatched_future_pair_is_rejected() {
    let unary = Alphabet::standard(1).unwrap();
    let binary = Alphabet::standard(2).unwrap();
    let forward = primitive::eventually(binary, binary.other()).unwrap();
    let reversed = primitive::eventually(unary, unary.other()).unwrap();
    assert!(FutureAutomaton::with_reversed(forward, reversed).is_err());
}

#[test]
fn trivially_true_conjunct() {
    assert_eq!(ConjunctAutomata::new().to_string(), "true");
    assert!(!ConjunctAutomata::new().has_future());
}
