//! Flat registry from constraint kind to compiler.

use reactive_automaton::SeparatedAutomaton;
use reactive_foundation::{ErrorContext, Result};

use crate::kind::ConstraintKind;
use crate::template::{TemplateCompiler, choice, existence, negative, relation};

/// Returns the compiler of `kind`.
#[must_use]
pub fn compiler(kind: ConstraintKind) -> TemplateCompiler {
    use ConstraintKind as K;
    match kind {
        K::Participation => existence::participation,
        K::Absence => existence::absence,
        K::AtMostOne => existence::at_most_one,
        K::ExactlyOne => existence::exactly_one,
        K::Init => existence::init,
        K::End => existence::end,
        K::RespondedExistence => relation::responded_existence,
        K::Response => relation::response,
        K::AlternateResponse => relation::alternate_response,
        K::ChainResponse => relation::chain_response,
        K::Precedence => relation::precedence,
        K::AlternatePrecedence => relation::alternate_precedence,
        K::ChainPrecedence => relation::chain_precedence,
        K::CoExistence => relation::co_existence,
        K::Succession => relation::succession,
        K::AlternateSuccession => relation::alternate_succession,
        K::ChainSuccession => relation::chain_succession,
        K::NotCoExistence => negative::not_co_existence,
        K::NotSuccession => negative::not_succession,
        K::NotChainSuccession => negative::not_chain_succession,
        K::BeforeThisOrLaterThat => choice::before_this_or_later_that,
    }
}

/// Compiles `kind` and labels the result with the template name.
///
/// # Errors
/// Returns the construction error of the template, with the template name
/// attached as context.
pub fn compile(kind: ConstraintKind) -> Result<SeparatedAutomaton> {
    let automaton = compiler(kind)()
        .map_err(|e| e.with_context(ErrorContext::new().with_source(kind.name())))?
        .with_name(kind.name());
    log::debug!(
        "compiled {kind}: {} disjunct(s), activator with {} states",
        automaton.disjuncts().len(),
        automaton.activator().len()
    );
    Ok(automaton)
}

impl ConstraintKind {
    /// Compiles this template. See [`compile`].
    ///
    /// # Errors
    /// See [`compile`].
    pub fn compile(self) -> Result<SeparatedAutomaton> {
        compile(self)
    }
}
