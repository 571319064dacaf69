//! Integration tests for the temporal primitives
//!
//! Tests that every primitive is complete and that hand-derived mirrors
//! recognize exactly the reversed language.

use reactive_automaton::Primitive;
use reactive_automaton::primitive;
use reactive_foundation::{Alphabet, ErrorKind, Symbol};

// =============================================================================
// Helper Functions
// =============================================================================

fn alphabet() -> Alphabet {
    Alphabet::standard(2).unwrap()
}

fn sym(c: char) -> Symbol {
    alphabet().resolve(c).unwrap()
}

fn primitives() -> Vec<Primitive> {
    let (a, b) = (sym('a'), sym('b'));
    vec![
        Primitive::Present(a),
        Primitive::First(a),
        Primitive::Last(b),
        Primitive::Eventually(b),
        Primitive::NeverEventually(b),
        Primitive::Exactly { symbol: a, count: 2 },
        Primitive::Next(b),
        Primitive::Previous(a),
        Primitive::NotNext(b),
        Primitive::NotPrevious(a),
        Primitive::NextNeverEventually(a),
        Primitive::NeverEventuallyBefore(a),
        Primitive::NextNotUntil { hold: a, halt: b },
        Primitive::NotSincePrevious { hold: b, halt: a },
    ]
}

/// Every word over the alphabet up to `max_len` symbols.
fn all_words(max_len: usize) -> Vec<Vec<Symbol>> {
    let symbols: Vec<Symbol> = alphabet().symbols().collect();
    let mut words = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|w: &Vec<Symbol>| {
                symbols.iter().map(move |&s| {
                    let mut longer = w.clone();
                    longer.push(s);
                    longer
                })
            })
            .collect();
        words.extend(frontier.iter().cloned());
    }
    words
}

// =============================================================================
// Mirrors
// =============================================================================

#[test]
fn mirror_is_an_involution() {
    for p in primitives() {
        let back = p.mirror().mirror();
        // Present mirrors to First, which mirrors to Last; both read the same.
        if !matches!(p, Primitive::Present(_)) {
            assert_eq!(back, p);
        }
    }
}

#[test]
fn mirrors_recognize_reversed_words() {
    let words = all_words(5);
    for p in primitives() {
        let forward = p.build(alphabet()).unwrap();
        let mirror = p.build_mirror(alphabet()).unwrap();
        for word in &words {
            let reversed: Vec<Symbol> = word.iter().rev().copied().collect();
            assert_eq!(
                mirror.accepts(&reversed),
                forward.accepts(word),
                "{p:?} on {word:?}"
            );
        }
    }
}

#[test]
fn mirrors_agree_with_subset_reversal() {
    let words = all_words(4);
    for p in primitives() {
        let mirror = p.build_mirror(alphabet()).unwrap();
        let generic = p.build(alphabet()).unwrap().reversed();
        for word in &words {
            assert_eq!(mirror.accepts(word), generic.accepts(word), "{p:?}");
        }
    }
}

// =============================================================================
// Shape
// =============================================================================

#[test]
fn primitives_are_complete_over_their_alphabet() {
    for p in primitives() {
        let automaton = p.build(alphabet()).unwrap();
        assert_eq!(automaton.alphabet(), &alphabet());
        for state in automaton.states() {
            assert_eq!(automaton.transitions(state).count(), 3, "{p:?}");
        }
    }
}

#[test]
fn response_future_matches_literature() {
    // ◇b over {a,b,z}: the activating `a` is consumed first.
    let ev = primitive::eventually(alphabet(), sym('b')).unwrap();
    let accepts = |t: &str| {
        let w: Vec<Symbol> = t.chars().map(sym).collect();
        ev.accepts(&w)
    };
    assert!(accepts("ab"));
    assert!(accepts("azzb"));
    assert!(!accepts("azz"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn coinciding_roles_are_rejected() {
    let a = sym('a');
    let err = primitive::next_not_until(alphabet(), a, a).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RoleConflict { .. }));
    let err = primitive::not_since_previous(alphabet(), a, a).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RoleConflict { .. }));
}

#[test]
fn foreign_symbols_are_rejected() {
    let ternary = Alphabet::standard(3).unwrap();
    // `c` has index 2, which is `z` in the binary alphabet.
    let c = ternary.resolve('c').unwrap();
    assert!(primitive::eventually(alphabet(), c).is_err());
    assert!(Primitive::Next(c).build(alphabet()).is_err());
    // Same character, same index, different alphabet.
    let a = ternary.resolve('a').unwrap();
    assert!(primitive::present(alphabet(), a).is_err());
    assert!(primitive::eventually(alphabet(), sym('a')).is_ok());
}

#[test]
fn zero_count_is_rejected() {
    let err = primitive::exactly(alphabet(), sym('a'), 0).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidParameter(_)));
}
