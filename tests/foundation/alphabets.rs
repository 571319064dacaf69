//! Integration tests for parametric alphabets
//!
//! Tests construction rules, symbol lookup, and the catch-all symbol.

use reactive_foundation::{Alphabet, DEFAULT_OTHER, ErrorKind, MAX_SYMBOLS};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn standard_alphabets() {
    assert_eq!(Alphabet::standard(1).unwrap().chars(), &['a', 'z']);
    assert_eq!(Alphabet::standard(2).unwrap().chars(), &['a', 'b', 'z']);
    assert_eq!(Alphabet::standard(3).unwrap().chars(), &['a', 'b', 'c', 'z']);
}

#[test]
fn standard_rejects_unsupported_arity() {
    assert!(matches!(
        Alphabet::standard(0).unwrap_err().kind,
        ErrorKind::EmptyAlphabet
    ));
    assert!(matches!(
        Alphabet::standard(MAX_SYMBOLS).unwrap_err().kind,
        ErrorKind::AlphabetTooLarge { .. }
    ));
}

#[test]
fn catch_all_is_appended_once() {
    let implicit = Alphabet::new(&['a', 'b']).unwrap();
    let explicit = Alphabet::new(&['a', 'b', DEFAULT_OTHER]).unwrap();
    assert_eq!(implicit, explicit);
    assert_eq!(implicit.len(), 3);
}

#[test]
fn custom_catch_all() {
    let alphabet = Alphabet::with_other(&['x', 'y'], '_').unwrap();
    assert_eq!(alphabet.char_of(alphabet.other()), '_');
    assert_eq!(alphabet.to_string(), "{x,y,_}");
}

#[test]
fn duplicates_are_rejected() {
    let err = Alphabet::new(&['a', 'a']).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateSymbol('a')));

    let err = Alphabet::new(&['z', 'a']).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateSymbol('z')));
}

#[test]
fn too_many_symbols() {
    let err = Alphabet::new(&['a', 'b', 'c', 'd']).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::AlphabetTooLarge { size: 5, max: 4 }
    ));
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn resolve_and_char_of_agree() {
    let alphabet = Alphabet::standard(3).unwrap();
    for &c in alphabet.chars() {
        let symbol = alphabet.resolve(c).unwrap();
        assert_eq!(alphabet.char_of(symbol), c);
        assert!(alphabet.contains(symbol));
    }
}

#[test]
fn symbols_remember_their_alphabet_width() {
    let unary = Alphabet::standard(1).unwrap();
    let binary = Alphabet::standard(2).unwrap();
    let a = binary.resolve('a').unwrap();
    assert_eq!(a.width(), 3);
    assert!(binary.contains(a));
    assert!(!unary.contains(a));
    assert!(!unary.contains(binary.other()));
    assert_ne!(unary.resolve('a').unwrap(), a);
}

#[test]
fn unknown_character() {
    let alphabet = Alphabet::standard(1).unwrap();
    assert!(alphabet.symbol('q').is_none());
    let err = alphabet.resolve('q').unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownSymbol('q')));
}

#[test]
fn parametric_excludes_other() {
    let alphabet = Alphabet::standard(2).unwrap();
    let parametric: Vec<_> = alphabet.parametric().collect();
    assert_eq!(parametric.len(), 2);
    assert!(!parametric.contains(&alphabet.other()));
    assert_eq!(alphabet.symbols().count(), 3);
}

#[test]
fn others_is_the_complement() {
    let alphabet = Alphabet::standard(3).unwrap();
    let a = alphabet.resolve('a').unwrap();
    let c = alphabet.resolve('c').unwrap();
    let rest = alphabet.others(&[a, c]);
    assert_eq!(rest, vec![alphabet.resolve('b').unwrap(), alphabet.other()]);
}
