//! Integration tests for evaluation codes and trace counters
//!
//! Tests the two-bit packing and the nine-slot counter layout.

use reactive_foundation::EvaluationCode::{Fulfilled, Inactive, InactiveTarget, Violated};
use reactive_foundation::{EvaluationCode, TraceCounters};

// =============================================================================
// Evaluation Codes
// =============================================================================

#[test]
fn packing_is_activator_times_two_plus_target() {
    for activated in [false, true] {
        for target in [false, true] {
            let code = EvaluationCode::new(activated, target);
            assert_eq!(code.as_u8(), u8::from(activated) * 2 + u8::from(target));
            assert_eq!(code.activated(), activated);
            assert_eq!(code.target(), target);
        }
    }
}

#[test]
fn codes_display_as_bits() {
    let shown: Vec<String> = [Inactive, InactiveTarget, Violated, Fulfilled]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(shown, ["00", "01", "10", "11"]);
}

// =============================================================================
// Counters
// =============================================================================

#[test]
fn slots_partition_the_trace() {
    let codes = [Violated, Fulfilled, Fulfilled, Inactive, InactiveTarget, Inactive];
    let slots = TraceCounters::from_codes(&codes).as_array();

    assert_eq!(slots[0] + slots[2], slots[8]);
    assert_eq!(slots[1] + slots[3], slots[8]);
    assert_eq!(slots[4] + slots[5] + slots[6] + slots[7], slots[8]);
    assert_eq!(slots, [3, 3, 3, 3, 2, 1, 1, 2, 6]);
}

#[test]
fn counters_sum_over_a_log() {
    let traces = [
        vec![Fulfilled, Inactive],
        vec![],
        vec![Violated, InactiveTarget, Fulfilled],
    ];
    let total = traces
        .iter()
        .map(|t| TraceCounters::from_codes(t))
        .fold(TraceCounters::new(), |acc, c| acc + c);

    assert_eq!(total.len(), 5);
    assert_eq!(total.activations(), 3);
    assert_eq!(total.fulfillments(), 2);
    assert_eq!(total.count(InactiveTarget), 1);
}

#[test]
fn ratio_of_unactivated_trace_is_zero() {
    let counters = TraceCounters::from_codes(&[Inactive, InactiveTarget]);
    assert_eq!(counters.activations(), 0);
    assert!(counters.fulfillment_ratio().abs() < f64::EPSILON);
}
