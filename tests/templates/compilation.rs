//! Integration tests for template compilation
//!
//! Tests that every template compiles to a well-formed separated automaton
//! and that the activator fires on the documented events.

use reactive_automaton::SeparatedAutomaton;
use reactive_foundation::{Alphabet, Symbol};
use reactive_templates::{ConstraintKind, Family, registry};

// =============================================================================
// Helper Functions
// =============================================================================

/// Positions at which the activator accepts after reading `text`.
fn activations(automaton: &SeparatedAutomaton, text: &str) -> Vec<usize> {
    let alphabet = automaton.alphabet();
    let activator = automaton.activator();
    let mut state = activator.initial();
    let mut fired = Vec::new();
    for (i, c) in text.chars().enumerate() {
        state = activator.step(state, alphabet.resolve(c).unwrap());
        if activator.is_accepting(state) {
            fired.push(i);
        }
    }
    fired
}

// =============================================================================
// Shape
// =============================================================================

#[test]
fn every_kind_compiles_over_its_standard_alphabet() {
    for kind in ConstraintKind::ALL {
        let automaton = kind.compile().unwrap();
        assert_eq!(automaton.alphabet(), &Alphabet::standard(kind.arity()).unwrap());
        assert_eq!(automaton.name(), Some(kind.name()));
        assert!(!automaton.disjuncts().is_empty(), "{kind}");
    }
}

#[test]
fn registry_and_method_agree() {
    for kind in ConstraintKind::ALL {
        assert_eq!(registry::compile(kind).unwrap(), kind.compile().unwrap());
        assert_eq!(
            registry::compiler(kind)().unwrap().disjuncts().len(),
            kind.compile().unwrap().disjuncts().len()
        );
    }
}

#[test]
fn compilation_is_deterministic() {
    for kind in ConstraintKind::ALL {
        assert_eq!(kind.compile().unwrap(), kind.compile().unwrap(), "{kind}");
    }
}

#[test]
fn future_components_carry_a_reversal() {
    for kind in ConstraintKind::ALL {
        let automaton = kind.compile().unwrap();
        for conjunct in automaton.disjuncts() {
            if let Some(future) = conjunct.future() {
                assert_eq!(future.reversed().alphabet(), automaton.alphabet());
            }
        }
    }
}

// =============================================================================
// Activators
// =============================================================================

#[test]
fn existence_templates_activate_on_the_first_event_only() {
    for kind in ConstraintKind::ALL
        .into_iter()
        .filter(|k| k.family() == Family::Existence && *k != ConstraintKind::AtMostOne)
    {
        let automaton = kind.compile().unwrap();
        assert_eq!(activations(&automaton, "zazaz"), vec![0], "{kind}");
        assert!(activations(&automaton, "").is_empty());
    }
}

#[test]
fn at_most_one_activates_on_each_occurrence() {
    let automaton = ConstraintKind::AtMostOne.compile().unwrap();
    assert_eq!(activations(&automaton, "azaaz"), vec![0, 2, 3]);
}

#[test]
fn forward_relations_activate_on_a() {
    for kind in [
        ConstraintKind::Response,
        ConstraintKind::AlternateResponse,
        ConstraintKind::ChainResponse,
        ConstraintKind::RespondedExistence,
    ] {
        let automaton = kind.compile().unwrap();
        assert_eq!(activations(&automaton, "abzab"), vec![0, 3], "{kind}");
    }
}

#[test]
fn backward_relations_activate_on_b() {
    for kind in [
        ConstraintKind::Precedence,
        ConstraintKind::AlternatePrecedence,
        ConstraintKind::ChainPrecedence,
    ] {
        let automaton = kind.compile().unwrap();
        assert_eq!(activations(&automaton, "abzab"), vec![1, 4], "{kind}");
    }
}

#[test]
fn mutual_relations_activate_on_both() {
    for kind in ConstraintKind::ALL.into_iter().filter(|k| k.is_mutual()) {
        let automaton = kind.compile().unwrap();
        assert_eq!(activations(&automaton, "abzab"), vec![0, 1, 3, 4], "{kind}");
    }
}

#[test]
fn choice_activates_on_a() {
    let automaton = ConstraintKind::BeforeThisOrLaterThat.compile().unwrap();
    assert_eq!(activations(&automaton, "cazab"), vec![1, 3]);
}

// =============================================================================
// Targets
// =============================================================================

#[test]
fn response_target_is_eventually_b() {
    let automaton = ConstraintKind::Response.compile().unwrap();
    let alphabet = automaton.alphabet();
    let word = |t: &str| -> Vec<Symbol> { t.chars().map(|c| alphabet.resolve(c).unwrap()).collect() };
    let future = automaton.disjuncts()[0].future().unwrap();
    assert!(future.forward().accepts(&word("azb")));
    assert!(!future.forward().accepts(&word("azz")));
    assert!(future.reversed().accepts(&word("bza")));
}
