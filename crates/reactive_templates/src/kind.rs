//! Constraint kinds: the closed set of supported templates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use reactive_foundation::{Error, Result};

/// Broad grouping of templates, used for reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Unary templates about the occurrences of a single task.
    Existence,
    /// Binary positive relations.
    Relation,
    /// Binary negative relations.
    Negative,
    /// Templates outside the Declare language.
    Choice,
}

/// Every template the engine can compile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstraintKind {
    /// `a` occurs at least once.
    Participation,
    /// `a` never occurs.
    Absence,
    /// `a` occurs at most once.
    AtMostOne,
    /// `a` occurs exactly once.
    ExactlyOne,
    /// The trace starts with `a`.
    Init,
    /// The trace ends with `a`.
    End,
    /// If `a` occurs, `b` occurs before or after it.
    RespondedExistence,
    /// Every `a` is eventually followed by `b`.
    Response,
    /// Every `a` is followed by `b` before the next `a`.
    AlternateResponse,
    /// Every `a` is immediately followed by `b`.
    ChainResponse,
    /// Every `b` is preceded by `a`.
    Precedence,
    /// Every `b` is preceded by `a` with no `b` in between.
    AlternatePrecedence,
    /// Every `b` is immediately preceded by `a`.
    ChainPrecedence,
    /// `a` and `b` occur together or not at all.
    CoExistence,
    /// Response and Precedence.
    Succession,
    /// AlternateResponse and AlternatePrecedence.
    AlternateSuccession,
    /// ChainResponse and ChainPrecedence.
    ChainSuccession,
    /// `a` and `b` never occur in the same trace.
    NotCoExistence,
    /// No `a` is eventually followed by `b`.
    NotSuccession,
    /// No `a` is immediately followed by `b`.
    NotChainSuccession,
    /// Every `a` is followed by `b` or preceded by `c`.
    BeforeThisOrLaterThat,
}

impl ConstraintKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 21] = [
        Self::Participation,
        Self::Absence,
        Self::AtMostOne,
        Self::ExactlyOne,
        Self::Init,
        Self::End,
        Self::RespondedExistence,
        Self::Response,
        Self::AlternateResponse,
        Self::ChainResponse,
        Self::Precedence,
        Self::AlternatePrecedence,
        Self::ChainPrecedence,
        Self::CoExistence,
        Self::Succession,
        Self::AlternateSuccession,
        Self::ChainSuccession,
        Self::NotCoExistence,
        Self::NotSuccession,
        Self::NotChainSuccession,
        Self::BeforeThisOrLaterThat,
    ];

    /// The template name as written in constraint models.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Participation => "Participation",
            Self::Absence => "Absence",
            Self::AtMostOne => "AtMostOne",
            Self::ExactlyOne => "ExactlyOne",
            Self::Init => "Init",
            Self::End => "End",
            Self::RespondedExistence => "RespondedExistence",
            Self::Response => "Response",
            Self::AlternateResponse => "AlternateResponse",
            Self::ChainResponse => "ChainResponse",
            Self::Precedence => "Precedence",
            Self::AlternatePrecedence => "AlternatePrecedence",
            Self::ChainPrecedence => "ChainPrecedence",
            Self::CoExistence => "CoExistence",
            Self::Succession => "Succession",
            Self::AlternateSuccession => "AlternateSuccession",
            Self::ChainSuccession => "ChainSuccession",
            Self::NotCoExistence => "NotCoExistence",
            Self::NotSuccession => "NotSuccession",
            Self::NotChainSuccession => "NotChainSuccession",
            Self::BeforeThisOrLaterThat => "BeforeThisOrLaterThat",
        }
    }

    /// Number of task parameters.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self.family() {
            Family::Existence => 1,
            Family::Relation | Family::Negative => 2,
            Family::Choice => 3,
        }
    }

    /// The family this template belongs to.
    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::Participation
            | Self::Absence
            | Self::AtMostOne
            | Self::ExactlyOne
            | Self::Init
            | Self::End => Family::Existence,
            Self::NotCoExistence | Self::NotSuccession | Self::NotChainSuccession => {
                Family::Negative
            }
            Self::BeforeThisOrLaterThat => Family::Choice,
            _ => Family::Relation,
        }
    }

    /// Returns true if either task of the relation may activate it.
    #[must_use]
    pub const fn is_mutual(self) -> bool {
        matches!(
            self,
            Self::CoExistence
                | Self::Succession
                | Self::AlternateSuccession
                | Self::ChainSuccession
                | Self::NotCoExistence
                | Self::NotSuccession
                | Self::NotChainSuccession
        )
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConstraintKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid_parameter(format!("unknown template: {s}")))
    }
}
