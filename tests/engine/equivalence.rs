//! Property tests: the offline and incremental runners agree
//!
//! On every template and every trace, both runners produce the same code at
//! every event, activated or not.

use std::sync::Arc;

use proptest::prelude::*;

use reactive_engine::{IncrementalRunner, OfflineRunner};
use reactive_foundation::{Symbol, TraceCounters};
use reactive_templates::ConstraintKind;

fn kind() -> impl Strategy<Value = ConstraintKind> {
    prop::sample::select(ConstraintKind::ALL.to_vec())
}

/// A template with a random word over its alphabet.
fn kind_and_word() -> impl Strategy<Value = (ConstraintKind, Vec<Symbol>)> {
    kind().prop_flat_map(|kind| {
        let automaton = kind.compile().unwrap();
        let symbols: Vec<Symbol> = automaton.alphabet().symbols().collect();
        (
            Just(kind),
            prop::collection::vec(prop::sample::select(symbols), 0..14),
        )
    })
}

proptest! {
    #[test]
    fn runners_agree_on_every_event((kind, word) in kind_and_word()) {
        let automaton = Arc::new(kind.compile().unwrap());
        let offline = OfflineRunner::new(Arc::clone(&automaton)).evaluate(&word);

        let mut incremental = IncrementalRunner::new(automaton);
        incremental.run(&word);

        prop_assert_eq!(&offline, &incremental.codes(), "{}", kind);
        prop_assert_eq!(
            TraceCounters::from_codes(&offline),
            TraceCounters::from_codes(&incremental.codes())
        );
    }

    #[test]
    fn degree_of_truth_matches_offline_ratio((kind, word) in kind_and_word()) {
        let automaton = Arc::new(kind.compile().unwrap());
        let counters =
            TraceCounters::from_codes(&OfflineRunner::new(Arc::clone(&automaton)).evaluate(&word));

        let mut incremental = IncrementalRunner::new(automaton);
        incremental.run(&word);

        prop_assert_eq!(incremental.activation_count(), counters.activations());
        prop_assert!((incremental.degree_of_truth() - counters.fulfillment_ratio()).abs() < 1e-12);
    }

    #[test]
    fn offline_codes_have_trace_length((kind, word) in kind_and_word()) {
        let mut runner = OfflineRunner::new(Arc::new(kind.compile().unwrap()));
        prop_assert_eq!(runner.evaluate(&word).len(), word.len());
    }
}
