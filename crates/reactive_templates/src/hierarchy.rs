//! Subsumption and opposition between templates.
//!
//! This table is classification metadata only. Compilers never consult it;
//! it exists so that callers can simplify models and suggest weaker
//! constraints.

use crate::kind::ConstraintKind;

/// An implied template and whether its first two parameters are swapped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Implied {
    /// The implied template.
    pub kind: ConstraintKind,
    /// True when `Kind(A, B)` implies `Implied(B, A)`.
    pub swapped: bool,
}

impl Implied {
    const fn same(kind: ConstraintKind) -> Self {
        Self {
            kind,
            swapped: false,
        }
    }

    const fn swapped(kind: ConstraintKind) -> Self {
        Self {
            kind,
            swapped: true,
        }
    }
}

impl ConstraintKind {
    /// The directly implied weaker template, if any.
    #[must_use]
    pub const fn weaker(self) -> Option<Implied> {
        use ConstraintKind as K;
        Some(match self {
            K::Response => Implied::same(K::RespondedExistence),
            K::AlternateResponse => Implied::same(K::Response),
            K::ChainResponse => Implied::same(K::AlternateResponse),
            K::Precedence => Implied::swapped(K::RespondedExistence),
            K::AlternatePrecedence => Implied::same(K::Precedence),
            K::ChainPrecedence => Implied::same(K::AlternatePrecedence),
            K::Succession => Implied::same(K::CoExistence),
            K::AlternateSuccession => Implied::same(K::Succession),
            K::ChainSuccession => Implied::same(K::AlternateSuccession),
            K::NotCoExistence => Implied::same(K::NotSuccession),
            K::NotSuccession => Implied::same(K::NotChainSuccession),
            K::Init | K::End | K::ExactlyOne => Implied::same(K::Participation),
            K::Absence => Implied::same(K::AtMostOne),
            K::Participation
            | K::AtMostOne
            | K::RespondedExistence
            | K::CoExistence
            | K::NotChainSuccession
            | K::BeforeThisOrLaterThat => return None,
        })
    }

    /// The forward and backward halves of a mutual relation.
    #[must_use]
    pub const fn components(self) -> Option<[Implied; 2]> {
        use ConstraintKind as K;
        Some(match self {
            K::CoExistence => [
                Implied::same(K::RespondedExistence),
                Implied::swapped(K::RespondedExistence),
            ],
            K::Succession => [Implied::same(K::Response), Implied::same(K::Precedence)],
            K::AlternateSuccession => [
                Implied::same(K::AlternateResponse),
                Implied::same(K::AlternatePrecedence),
            ],
            K::ChainSuccession => [
                Implied::same(K::ChainResponse),
                Implied::same(K::ChainPrecedence),
            ],
            _ => return None,
        })
    }

    /// The template that contradicts this one over the same parameters.
    #[must_use]
    pub const fn opponent(self) -> Option<Self> {
        use ConstraintKind as K;
        match self {
            K::Succession => Some(K::NotSuccession),
            K::NotSuccession => Some(K::Succession),
            K::ChainSuccession => Some(K::NotChainSuccession),
            K::NotChainSuccession => Some(K::ChainSuccession),
            K::CoExistence => Some(K::NotCoExistence),
            K::NotCoExistence => Some(K::CoExistence),
            K::Participation => Some(K::Absence),
            K::Absence => Some(K::Participation),
            _ => None,
        }
    }

    /// Depth in the refinement chain; roots have level 0.
    #[must_use]
    pub fn hierarchy_level(self) -> usize {
        std::iter::successors(self.weaker(), |implied| implied.kind.weaker()).count()
    }

    /// Returns true if `self` implies `other` through the refinement chain.
    #[must_use]
    pub fn refines(self, other: Self) -> bool {
        std::iter::successors(self.weaker(), |implied| implied.kind.weaker())
            .any(|implied| implied.kind == other)
    }
}
