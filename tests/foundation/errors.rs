//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use reactive_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_role_conflict() {
    let err = Error::role_conflict("halt", 'b');
    assert!(matches!(err.kind, ErrorKind::RoleConflict { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("halt"));
    assert!(msg.contains("'b'"));
}

#[test]
fn error_arity_mismatch() {
    let err = Error::arity_mismatch("Response", 2, 3);
    assert!(matches!(
        err.kind,
        ErrorKind::ArityMismatch {
            expected: 2,
            actual: 3,
            ..
        }
    ));
    assert!(format!("{err}").contains("Response"));
}

#[test]
fn error_alphabet_mismatch() {
    let err = Error::alphabet_mismatch("{a,b,z}", "{a,z}");
    let msg = format!("{err}");
    assert!(msg.contains("{a,b,z}"));
    assert!(msg.contains("{a,z}"));
}

#[test]
fn error_invalid_parameter() {
    let err = Error::invalid_parameter("count must be positive");
    assert!(matches!(err.kind, ErrorKind::InvalidParameter(_)));
    assert!(format!("{err}").contains("count must be positive"));
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn frames_accumulate_in_order() {
    let err = Error::unknown_symbol('q')
        .in_frame("future component")
        .in_frame("disjunct 1");
    let ctx = err.context.unwrap();
    assert_eq!(ctx.stack, vec!["future component", "disjunct 1"]);
}

#[test]
fn context_display_names_source_and_frames() {
    let ctx = ErrorContext::new()
        .with_source("AlternateResponse")
        .with_frame("future component");
    let shown = ctx.to_string();
    assert!(shown.starts_with("at AlternateResponse"));
    assert!(shown.contains("in future component"));
}

#[test]
fn errors_are_std_errors() {
    fn takes(_: &dyn std::error::Error) {}
    takes(&Error::duplicate_symbol('a'));
}
