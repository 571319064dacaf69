//! Error types for the reactive constraint engine.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every variant describes a construction-time failure: once automata are
//! built, evaluating a trace cannot fail.

use std::fmt;

use thiserror::Error;

/// The main error type for reactive engine operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes a frame onto the context stack, creating the context if needed.
    #[must_use]
    pub fn in_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates a duplicate symbol error.
    #[must_use]
    pub fn duplicate_symbol(symbol: char) -> Self {
        Self::new(ErrorKind::DuplicateSymbol(symbol))
    }

    /// Creates an unknown symbol error.
    #[must_use]
    pub fn unknown_symbol(symbol: char) -> Self {
        Self::new(ErrorKind::UnknownSymbol(symbol))
    }

    /// Creates a role conflict error (two roles bound to one symbol).
    #[must_use]
    pub fn role_conflict(role: impl Into<String>, symbol: char) -> Self {
        Self::new(ErrorKind::RoleConflict {
            role: role.into(),
            symbol,
        })
    }

    /// Creates an alphabet mismatch error.
    #[must_use]
    pub fn alphabet_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlphabetMismatch {
            expected: expected.into(),
            actual: actual.into(),
        })
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(kind: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch {
            kind: kind.into(),
            expected,
            actual,
        })
    }

    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidParameter(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A symbol appears twice in one alphabet.
    #[error("duplicate symbol in alphabet: {0:?}")]
    DuplicateSymbol(char),

    /// The alphabet has more symbols than a transition row can hold.
    #[error("alphabet too large: {size} symbols (max {max})")]
    AlphabetTooLarge {
        /// Number of symbols requested.
        size: usize,
        /// Maximum supported width.
        max: usize,
    },

    /// The alphabet has no symbol besides the catch-all.
    #[error("alphabet has no parametric symbols")]
    EmptyAlphabet,

    /// A symbol is not part of the alphabet it was used with.
    #[error("unknown symbol: {0:?}")]
    UnknownSymbol(char),

    /// Two roles (activator, target, halt, ...) were bound to the same symbol.
    #[error("role conflict: {role} is bound to {symbol:?}, which already has a role")]
    RoleConflict {
        /// Description of the role being assigned.
        role: String,
        /// The symbol that is already taken.
        symbol: char,
    },

    /// Components of one automaton were built over different alphabets.
    #[error("alphabet mismatch: expected {expected}, got {actual}")]
    AlphabetMismatch {
        /// The alphabet of the enclosing automaton.
        expected: String,
        /// The alphabet of the offending component.
        actual: String,
    },

    /// A state was given two transitions on the same symbol.
    #[error("nondeterministic transition from state {state} on {symbol:?}")]
    Nondeterministic {
        /// Index of the state.
        state: usize,
        /// The symbol with two targets.
        symbol: char,
    },

    /// A state index does not belong to the automaton being built.
    #[error("invalid state: {0}")]
    InvalidState(usize),

    /// Wrong number of task parameters for a constraint template.
    #[error("arity mismatch for {kind}: expected {expected}, got {actual}")]
    ArityMismatch {
        /// The template name.
        kind: String,
        /// Number of parameters the template takes.
        expected: usize,
        /// Number of parameters supplied.
        actual: usize,
    },

    /// A constraint parameter is out of range or otherwise unusable.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A pre-sized result buffer does not match the trace length.
    #[error("trace length mismatch: expected {expected}, got {actual}")]
    TraceLengthMismatch {
        /// Length of the trace.
        expected: usize,
        /// Length of the buffer.
        actual: usize,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Template or constraint being compiled.
    pub source: Option<String>,
    /// Stack of compilation steps leading to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source (template or constraint name).
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias using the reactive [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
