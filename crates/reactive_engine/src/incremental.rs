//! Incremental (online) evaluation of a separated automaton.
//!
//! The runner consumes one event at a time. Past components are stepped on
//! every event; an activation whose outcome depends on the future spawns an
//! [`AToken`] holding future-automaton pointers that keep stepping until the
//! trace ends.
//!
//! The target is tracked at non-activating events too, so that per-event codes
//! match the offline runner. Pending targets sharing the same pointers are
//! merged, which keeps their number bounded by the size of the future
//! automata rather than by the trace length.

use std::sync::Arc;

use reactive_automaton::{SeparatedAutomaton, StateId};
use reactive_foundation::{EvaluationCode, Symbol};
use reactive_templates::ParametricMapping;

// =============================================================================
// AToken
// =============================================================================

/// Live future obligations of one activation.
///
/// Holds one future-automaton pointer per disjunct whose past and present
/// held at activation time. An empty token can never be satisfied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AToken {
    pointers: Vec<(usize, StateId)>,
}

impl AToken {
    fn step(&mut self, automaton: &SeparatedAutomaton, symbol: Symbol) {
        for (disjunct, state) in &mut self.pointers {
            if let Some(future) = automaton.disjuncts()[*disjunct].future() {
                *state = future.forward().step(*state, symbol);
            }
        }
    }

    /// Returns true if some pointer is in an accepting state, meaning the
    /// obligation is met by the trace read so far.
    #[must_use]
    pub fn is_accepting(&self, automaton: &SeparatedAutomaton) -> bool {
        self.pointers.iter().any(|&(disjunct, state)| {
            automaton.disjuncts()[disjunct]
                .future()
                .is_some_and(|future| future.forward().is_accepting(state))
        })
    }

    /// Number of live pointers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    /// Returns true if no disjunct was viable at activation time.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }
}

// =============================================================================
// Activation records
// =============================================================================

/// What the target formula says at the current event.
enum Verdict {
    Holds,
    Fails,
    Pending(AToken),
}

/// Evaluates every disjunct at the current event. Pasts must already have
/// read `symbol`.
fn evaluate(
    automaton: &SeparatedAutomaton,
    pasts: &[Option<StateId>],
    symbol: Symbol,
) -> Verdict {
    let mut pointers = Vec::new();
    let mut unclear = false;

    for (i, conjunct) in automaton.disjuncts().iter().enumerate() {
        let past_ok = match (conjunct.past(), pasts[i]) {
            (Some(past), Some(s)) => past.is_accepting(s),
            _ => true,
        };
        let present_ok = conjunct
            .present()
            .is_none_or(|p| p.is_accepting(p.step(p.initial(), symbol)));
        match conjunct.future() {
            None if past_ok && present_ok => return Verdict::Holds,
            None => {}
            Some(future) => {
                unclear = true;
                if past_ok && present_ok {
                    pointers.push((i, future.forward().initial()));
                }
            }
        }
    }

    if unclear {
        Verdict::Pending(AToken { pointers })
    } else {
        Verdict::Fails
    }
}

/// Non-activating events whose target waits on the same future pointers.
#[derive(Clone, Debug)]
struct PendingTargets {
    token: AToken,
    events: Vec<usize>,
}

/// Folds groups whose pointers have converged into one.
fn merge_pending(groups: &mut Vec<PendingTargets>) {
    let mut i = 0;
    while i < groups.len() {
        match groups[..i].iter().position(|g| g.token == groups[i].token) {
            Some(j) => {
                let group = groups.swap_remove(i);
                groups[j].events.extend(group.events);
            }
            None => i += 1,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Resolution {
    Fulfilled,
    Violated,
    Pending(usize),
}

/// How one activation resolved on the trace read so far.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ActivationOutcome {
    /// Index of the activating event.
    pub index: usize,
    /// Whether the constraint held for this activation.
    pub satisfied: bool,
}

// =============================================================================
// IncrementalRunner
// =============================================================================

/// Streaming evaluator for one trace at a time.
///
/// Not shareable between threads while running; give each worker its own
/// runner over the shared automaton.
#[derive(Clone, Debug)]
pub struct IncrementalRunner {
    automaton: Arc<SeparatedAutomaton>,
    activator: StateId,
    pasts: Vec<Option<StateId>>,
    tokens: Vec<AToken>,
    activations: Vec<(usize, Resolution)>,
    fulfilled: usize,
    /// Target bits decided at non-activating events.
    targets: Vec<bool>,
    pending: Vec<PendingTargets>,
    position: usize,
}

impl IncrementalRunner {
    /// Creates a runner positioned before the first event.
    #[must_use]
    pub fn new(automaton: Arc<SeparatedAutomaton>) -> Self {
        let pasts = initial_pasts(&automaton);
        Self {
            activator: automaton.activator().initial(),
            automaton,
            pasts,
            tokens: Vec::new(),
            activations: Vec::new(),
            fulfilled: 0,
            targets: Vec::new(),
            pending: Vec::new(),
            position: 0,
        }
    }

    /// The automaton being run.
    #[must_use]
    pub fn automaton(&self) -> &Arc<SeparatedAutomaton> {
        &self.automaton
    }

    /// Consumes one event.
    ///
    /// Activation is read from the activator state reached *after* the event,
    /// so an activating event is evaluated together with its own symbol.
    pub fn step(&mut self, symbol: Symbol) {
        let Self {
            automaton,
            activator,
            pasts,
            tokens,
            activations,
            fulfilled,
            targets,
            pending,
            position,
        } = self;
        let automaton: &SeparatedAutomaton = automaton;

        *activator = automaton.activator().step(*activator, symbol);
        for (conjunct, state) in automaton.disjuncts().iter().zip(pasts.iter_mut()) {
            if let (Some(past), Some(s)) = (conjunct.past(), state.as_mut()) {
                *s = past.step(*s, symbol);
            }
        }

        let verdict = evaluate(automaton, pasts, symbol);
        if automaton.activator().is_accepting(*activator) {
            let resolution = match verdict {
                Verdict::Holds => {
                    *fulfilled += 1;
                    Resolution::Fulfilled
                }
                Verdict::Pending(token) => {
                    tokens.push(token);
                    Resolution::Pending(tokens.len() - 1)
                }
                Verdict::Fails => Resolution::Violated,
            };
            activations.push((*position, resolution));
            targets.push(false);
        } else {
            targets.push(matches!(verdict, Verdict::Holds));
            if let Verdict::Pending(token) = verdict {
                if !token.is_empty() {
                    pending.push(PendingTargets {
                        token,
                        events: vec![*position],
                    });
                }
            }
        }

        for token in tokens.iter_mut() {
            token.step(automaton, symbol);
        }
        for group in pending.iter_mut() {
            group.token.step(automaton, symbol);
        }
        merge_pending(pending);
        *position += 1;
    }

    /// Consumes a concrete task through `mapping`.
    pub fn step_task(&mut self, task: char, mapping: &ParametricMapping) {
        self.step(mapping.translate(task));
    }

    /// Consumes a whole word.
    pub fn run(&mut self, trace: &[Symbol]) {
        for &symbol in trace {
            self.step(symbol);
        }
    }

    /// Rewinds to the initial state, dropping counters and tokens.
    pub fn reset(&mut self) {
        self.activator = self.automaton.activator().initial();
        self.pasts = initial_pasts(&self.automaton);
        self.tokens.clear();
        self.activations.clear();
        self.fulfilled = 0;
        self.targets.clear();
        self.pending.clear();
        self.position = 0;
    }

    /// Number of events consumed.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of activations so far.
    #[must_use]
    pub fn activation_count(&self) -> usize {
        self.activations.len()
    }

    /// Activations decided at activation time as satisfied.
    #[must_use]
    pub fn fulfilled_activation_count(&self) -> usize {
        self.fulfilled
    }

    /// Live tokens.
    #[must_use]
    pub fn tokens(&self) -> &[AToken] {
        &self.tokens
    }

    /// Number of distinct pending target groups at non-activating events.
    #[must_use]
    pub fn pending_target_groups(&self) -> usize {
        self.pending.len()
    }

    /// Live tokens whose obligation is currently met.
    #[must_use]
    pub fn accepting_token_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.is_accepting(&self.automaton))
            .count()
    }

    /// Share of activations satisfied on the trace read so far, `0.0` if
    /// the constraint was never activated.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn degree_of_truth(&self) -> f64 {
        match self.activation_count() {
            0 => 0.0,
            n => (self.fulfilled + self.accepting_token_count()) as f64 / n as f64,
        }
    }

    /// Resolves every activation against the trace read so far.
    pub fn outcomes(&self) -> impl Iterator<Item = ActivationOutcome> + '_ {
        self.activations.iter().map(|&(index, resolution)| {
            let satisfied = match resolution {
                Resolution::Fulfilled => true,
                Resolution::Violated => false,
                Resolution::Pending(token) => self.tokens[token].is_accepting(&self.automaton),
            };
            ActivationOutcome { index, satisfied }
        })
    }

    /// Per-event codes for the trace read so far.
    ///
    /// Once the whole trace is read these equal the offline runner's codes.
    #[must_use]
    pub fn codes(&self) -> Vec<EvaluationCode> {
        let mut targets = self.targets.clone();
        for group in &self.pending {
            if group.token.is_accepting(&self.automaton) {
                for &event in &group.events {
                    targets[event] = true;
                }
            }
        }
        let mut codes: Vec<EvaluationCode> = targets
            .into_iter()
            .map(|target| EvaluationCode::new(false, target))
            .collect();
        for outcome in self.outcomes() {
            codes[outcome.index] = EvaluationCode::new(true, outcome.satisfied);
        }
        codes
    }
}

fn initial_pasts(automaton: &SeparatedAutomaton) -> Vec<Option<StateId>> {
    automaton
        .disjuncts()
        .iter()
        .map(|c| c.past().map(reactive_automaton::Automaton::initial))
        .collect()
}
