//! Offline (double-traversal) evaluation of a separated automaton.
//!
//! With the whole trace at hand, every conjunct is evaluated in linear time:
//! past and present components are stepped forward once, the future
//! component's reversed twin is stepped backward once, and the activator is
//! stepped forward once more. Cost does not depend on how often the
//! constraint activates.

use std::sync::Arc;

use reactive_automaton::{SeparatedAutomaton, StateId};
use reactive_foundation::{Error, ErrorKind, EvaluationCode, Result, Symbol, TraceCounters};

/// Batch evaluator producing one [`EvaluationCode`] per event.
#[derive(Clone, Debug)]
pub struct OfflineRunner {
    automaton: Arc<SeparatedAutomaton>,
    activator: StateId,
    pasts: Vec<Option<StateId>>,
    presents: Vec<Option<StateId>>,
    /// Per-event scratch for one conjunct, reused across traces.
    conjunct: Vec<bool>,
    target: Vec<bool>,
}

impl OfflineRunner {
    /// Creates a runner over a shared automaton.
    #[must_use]
    pub fn new(automaton: Arc<SeparatedAutomaton>) -> Self {
        let mut runner = Self {
            activator: automaton.activator().initial(),
            pasts: Vec::new(),
            presents: Vec::new(),
            conjunct: Vec::new(),
            target: Vec::new(),
            automaton,
        };
        runner.reset();
        runner
    }

    /// The automaton being run.
    #[must_use]
    pub fn automaton(&self) -> &Arc<SeparatedAutomaton> {
        &self.automaton
    }

    /// Rewinds the forward pointers. The backward walk always starts fresh.
    pub fn reset(&mut self) {
        let automaton = &self.automaton;
        self.activator = automaton.activator().initial();
        self.pasts = automaton
            .disjuncts()
            .iter()
            .map(|c| c.past().map(reactive_automaton::Automaton::initial))
            .collect();
        self.presents = automaton
            .disjuncts()
            .iter()
            .map(|c| c.present().map(reactive_automaton::Automaton::initial))
            .collect();
    }

    /// Evaluates a whole trace from the initial state.
    #[must_use]
    pub fn evaluate(&mut self, trace: &[Symbol]) -> Vec<EvaluationCode> {
        let mut codes = vec![EvaluationCode::Inactive; trace.len()];
        self.fill(trace, &mut codes);
        codes
    }

    /// Evaluates a whole trace into a caller-provided buffer.
    ///
    /// # Errors
    /// Returns [`ErrorKind::TraceLengthMismatch`] if `out` is not exactly as
    /// long as `trace`.
    pub fn evaluate_into(&mut self, trace: &[Symbol], out: &mut [EvaluationCode]) -> Result<()> {
        if out.len() != trace.len() {
            return Err(Error::new(ErrorKind::TraceLengthMismatch {
                expected: trace.len(),
                actual: out.len(),
            }));
        }
        self.fill(trace, out);
        Ok(())
    }

    /// Evaluates a whole trace, keeping only its counters.
    #[must_use]
    pub fn counters(&mut self, trace: &[Symbol]) -> TraceCounters {
        TraceCounters::from_codes(&self.evaluate(trace))
    }

    fn fill(&mut self, trace: &[Symbol], out: &mut [EvaluationCode]) {
        self.reset();
        let len = trace.len();
        self.target.clear();
        self.target.resize(len, false);

        let Self {
            automaton,
            activator,
            pasts,
            presents,
            conjunct,
            target,
        } = self;
        let automaton: &SeparatedAutomaton = automaton;

        for (i, component) in automaton.disjuncts().iter().enumerate() {
            conjunct.clear();
            conjunct.resize(len, true);

            if let (Some(past), Some(state)) = (component.past(), pasts[i].as_mut()) {
                for (ok, &symbol) in conjunct.iter_mut().zip(trace) {
                    *state = past.step(*state, symbol);
                    *ok &= past.is_accepting(*state);
                }
            }
            if let (Some(present), Some(state)) = (component.present(), presents[i].as_mut()) {
                for (ok, &symbol) in conjunct.iter_mut().zip(trace) {
                    *state = present.step(*state, symbol);
                    *ok &= present.is_accepting(*state);
                }
            }
            if let Some(future) = component.future() {
                let reversed = future.reversed();
                let mut state = reversed.initial();
                for (ok, &symbol) in conjunct.iter_mut().zip(trace).rev() {
                    state = reversed.step(state, symbol);
                    *ok &= reversed.is_accepting(state);
                }
            }

            for (t, &ok) in target.iter_mut().zip(conjunct.iter()) {
                *t |= ok;
            }
        }

        let activator_automaton = automaton.activator();
        for ((code, &symbol), &t) in out.iter_mut().zip(trace).zip(target.iter()) {
            *activator = activator_automaton.step(*activator, symbol);
            *code = EvaluationCode::new(activator_automaton.is_accepting(*activator), t);
        }
        log::trace!(
            "offline run of {} over {len} event(s)",
            automaton.name().unwrap_or("<anonymous>")
        );
    }
}
