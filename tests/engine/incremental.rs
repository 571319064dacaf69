//! Integration tests for the incremental runner
//!
//! Tests activation bookkeeping, ATokens, and the running degree of truth.

use std::sync::Arc;

use reactive_engine::{ActivationOutcome, IncrementalRunner};
use reactive_foundation::{EvaluationCode, Symbol};
use reactive_templates::{Constraint, ConstraintKind};

// =============================================================================
// Helper Functions
// =============================================================================

fn runner(kind: ConstraintKind) -> IncrementalRunner {
    IncrementalRunner::new(Arc::new(kind.compile().unwrap()))
}

fn feed(runner: &mut IncrementalRunner, text: &str) {
    let alphabet = *runner.automaton().alphabet();
    let word: Vec<Symbol> = text.chars().map(|c| alphabet.resolve(c).unwrap()).collect();
    runner.run(&word);
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

// =============================================================================
// Future Obligations
// =============================================================================

#[test]
fn response_token_resolves_when_b_arrives() {
    let mut r = runner(ConstraintKind::Response);
    feed(&mut r, "a");
    assert_eq!(r.activation_count(), 1);
    assert_eq!(r.tokens().len(), 1);
    assert!(close(r.degree_of_truth(), 0.0));

    feed(&mut r, "z");
    assert!(close(r.degree_of_truth(), 0.0));

    feed(&mut r, "b");
    assert!(close(r.degree_of_truth(), 1.0));
    assert_eq!(r.accepting_token_count(), 1);
    assert_eq!(r.position(), 3);
}

#[test]
fn partial_degree_of_truth() {
    let mut r = runner(ConstraintKind::Response);
    feed(&mut r, "abaz");
    assert_eq!(r.activation_count(), 2);
    assert!(close(r.degree_of_truth(), 0.5));
    let outcomes: Vec<ActivationOutcome> = r.outcomes().collect();
    assert_eq!(
        outcomes,
        vec![
            ActivationOutcome { index: 0, satisfied: true },
            ActivationOutcome { index: 2, satisfied: false },
        ]
    );
}

#[test]
fn one_b_discharges_every_pending_a() {
    let mut r = runner(ConstraintKind::Response);
    feed(&mut r, "aazab");
    assert_eq!(r.activation_count(), 3);
    assert!(close(r.degree_of_truth(), 1.0));
}

#[test]
fn alternate_response_token_can_die() {
    let mut r = runner(ConstraintKind::AlternateResponse);
    feed(&mut r, "aab");
    let satisfied: Vec<bool> = r.outcomes().map(|o| o.satisfied).collect();
    assert_eq!(satisfied, [false, true]);
}

// =============================================================================
// Past-Only Templates
// =============================================================================

#[test]
fn precedence_resolves_immediately() {
    let mut r = runner(ConstraintKind::Precedence);
    feed(&mut r, "ab");
    assert_eq!(r.activation_count(), 1);
    assert_eq!(r.fulfilled_activation_count(), 1);
    assert!(r.tokens().is_empty());

    let mut r = runner(ConstraintKind::Precedence);
    feed(&mut r, "b");
    assert_eq!(r.fulfilled_activation_count(), 0);
    assert!(close(r.degree_of_truth(), 0.0));
}

#[test]
fn chain_precedence_reads_the_previous_event() {
    let mut r = runner(ConstraintKind::ChainPrecedence);
    feed(&mut r, "abzb");
    let satisfied: Vec<bool> = r.outcomes().map(|o| o.satisfied).collect();
    assert_eq!(satisfied, [true, false]);
}

// =============================================================================
// Mutual and Negative Templates
// =============================================================================

#[test]
fn chain_succession_scenarios() {
    let mut r = runner(ConstraintKind::ChainSuccession);
    feed(&mut r, "azb");
    assert!(r.outcomes().all(|o| !o.satisfied));

    let mut r = runner(ConstraintKind::ChainSuccession);
    feed(&mut r, "ab");
    assert!(close(r.degree_of_truth(), 1.0));
}

#[test]
fn not_chain_succession_empty_token() {
    let mut r = runner(ConstraintKind::NotChainSuccession);
    feed(&mut r, "ab");
    assert_eq!(r.activation_count(), 2);
    // The b activation has no viable disjunct but still awaits the future.
    assert!(r.tokens().iter().any(|t| t.is_empty()));
    assert!(close(r.degree_of_truth(), 0.0));
}

#[test]
fn not_succession_scenarios() {
    let mut r = runner(ConstraintKind::NotSuccession);
    feed(&mut r, "ab");
    assert!(close(r.degree_of_truth(), 0.0));

    let mut r = runner(ConstraintKind::NotSuccession);
    feed(&mut r, "ba");
    assert!(close(r.degree_of_truth(), 1.0));
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn unactivated_trace_has_zero_degree() {
    let mut r = runner(ConstraintKind::Response);
    feed(&mut r, "zbzb");
    assert_eq!(r.activation_count(), 0);
    assert!(close(r.degree_of_truth(), 0.0));
    assert!(r.codes().iter().all(|c| !c.activated()));
    assert_eq!(r.codes(), vec![EvaluationCode::InactiveTarget; 4]);
}

#[test]
fn reset_forgets_everything() {
    let mut r = runner(ConstraintKind::Succession);
    feed(&mut r, "abab");
    r.reset();
    assert_eq!(r.position(), 0);
    assert_eq!(r.activation_count(), 0);
    assert!(r.tokens().is_empty());
    assert!(r.codes().is_empty());
}

#[test]
fn concrete_tasks_through_a_mapping() {
    let automaton = Arc::new(ConstraintKind::Response.compile().unwrap());
    let constraint = Constraint::new(ConstraintKind::Response, ['X', 'Y']).unwrap();
    let mapping = constraint.mapping(automaton.alphabet()).unwrap();
    let mut r = IncrementalRunner::new(automaton);

    for task in ['Q', 'X', 'W', 'Y'] {
        r.step_task(task, &mapping);
    }
    assert_eq!(r.activation_count(), 1);
    assert_eq!(r.outcomes().next().map(|o| o.index), Some(1));
    assert!(close(r.degree_of_truth(), 1.0));
}
