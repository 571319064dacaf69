//! Support and confidence for discovery.
//!
//! Both measures average the per-trace fulfillment ratio
//! `fulfilled / activations`. Support averages over every trace, with
//! unactivated traces contributing zero; confidence averages over activated
//! traces only.

use reactive_foundation::TraceCounters;
use reactive_templates::ConstraintMeasures;

/// Computes support and confidence from the per-trace counters of one
/// constraint. Both are `0.0` when the log is empty or never activates it.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mining_measures<I>(traces: I) -> ConstraintMeasures
where
    I: IntoIterator<Item = TraceCounters>,
{
    let mut ratio_sum = 0.0;
    let mut traces_seen = 0usize;
    let mut activated = 0usize;
    for counters in traces {
        traces_seen += 1;
        if counters.activations() > 0 {
            activated += 1;
            ratio_sum += counters.fulfillment_ratio();
        }
    }
    let mean = |n: usize| if n == 0 { 0.0 } else { ratio_sum / n as f64 };
    ConstraintMeasures {
        support: mean(traces_seen),
        confidence: mean(activated),
    }
}
