//! Per-event evaluation codes and per-trace counters.
//!
//! Each event of a trace is summarized, for one constraint, by two bits:
//! whether the constraint was activated there and whether its target
//! condition held. The packed value `activator * 2 + target` is the unit
//! handed to measure computation downstream.

use std::fmt;
use std::ops::{Add, AddAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two-bit evaluation of one constraint at one event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum EvaluationCode {
    /// `00`: not activated, target false.
    #[default]
    Inactive = 0,
    /// `01`: not activated, target true.
    InactiveTarget = 1,
    /// `10`: activated and violated.
    Violated = 2,
    /// `11`: activated and fulfilled.
    Fulfilled = 3,
}

impl EvaluationCode {
    /// Packs the activation and target bits.
    #[must_use]
    pub const fn new(activated: bool, target: bool) -> Self {
        match (activated, target) {
            (false, false) => Self::Inactive,
            (false, true) => Self::InactiveTarget,
            (true, false) => Self::Violated,
            (true, true) => Self::Fulfilled,
        }
    }

    /// Decodes a raw code, returning `None` outside `0..=3`.
    #[must_use]
    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Inactive),
            1 => Some(Self::InactiveTarget),
            2 => Some(Self::Violated),
            3 => Some(Self::Fulfilled),
            _ => None,
        }
    }

    /// Returns the raw two-bit value.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// The activation (left) bit.
    #[must_use]
    pub const fn activated(self) -> bool {
        self.as_u8() & 0b10 != 0
    }

    /// The target (right) bit.
    #[must_use]
    pub const fn target(self) -> bool {
        self.as_u8() & 0b01 != 0
    }
}

impl From<EvaluationCode> for u8 {
    fn from(code: EvaluationCode) -> Self {
        code.as_u8()
    }
}

impl fmt::Display for EvaluationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02b}", self.as_u8())
    }
}

/// The sufficient statistic of one constraint over one trace.
///
/// Slot layout of [`TraceCounters::as_array`]:
///
/// | slot | meaning |
/// |------|---------|
/// | 0 | events where the activator is true |
/// | 1 | events where the target is true |
/// | 2 | events where the activator is false |
/// | 3 | events where the target is false |
/// | 4 | `00` events |
/// | 5 | `01` events |
/// | 6 | `10` events |
/// | 7 | `11` events |
/// | 8 | trace length |
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceCounters {
    by_code: [usize; 4],
}

impl TraceCounters {
    /// Number of slots in the flattened counter vector.
    pub const SLOTS: usize = 9;

    /// Creates all-zero counters.
    #[must_use]
    pub const fn new() -> Self {
        Self { by_code: [0; 4] }
    }

    /// Counts the codes of one evaluated trace.
    #[must_use]
    pub fn from_codes(codes: &[EvaluationCode]) -> Self {
        let mut counters = Self::new();
        for &code in codes {
            counters.record(code);
        }
        counters
    }

    /// Records one more event.
    pub fn record(&mut self, code: EvaluationCode) {
        self.by_code[code.as_u8() as usize] += 1;
    }

    /// Number of events with the given code.
    #[must_use]
    pub const fn count(&self, code: EvaluationCode) -> usize {
        self.by_code[code as usize]
    }

    /// Number of events counted.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.by_code[0] + self.by_code[1] + self.by_code[2] + self.by_code[3]
    }

    /// Returns true if no event was counted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Events where the constraint was activated.
    #[must_use]
    pub const fn activations(&self) -> usize {
        self.by_code[2] + self.by_code[3]
    }

    /// Activated events whose target held.
    #[must_use]
    pub const fn fulfillments(&self) -> usize {
        self.by_code[3]
    }

    /// Events where the target held.
    #[must_use]
    pub const fn targets(&self) -> usize {
        self.by_code[1] + self.by_code[3]
    }

    /// Fulfilled over activated events, `0.0` when never activated.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fulfillment_ratio(&self) -> f64 {
        match self.activations() {
            0 => 0.0,
            n => self.fulfillments() as f64 / n as f64,
        }
    }

    /// Flattens into the nine-slot vector documented on the type.
    #[must_use]
    pub const fn as_array(&self) -> [usize; Self::SLOTS] {
        let len = self.len();
        [
            self.activations(),
            self.targets(),
            len - self.activations(),
            len - self.targets(),
            self.by_code[0],
            self.by_code[1],
            self.by_code[2],
            self.by_code[3],
            len,
        ]
    }
}

impl AddAssign for TraceCounters {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.by_code.iter_mut().zip(rhs.by_code) {
            *lhs += rhs;
        }
    }
}

impl Add for TraceCounters {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}
