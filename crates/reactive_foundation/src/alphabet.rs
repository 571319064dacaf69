//! Parametric alphabets and symbols.
//!
//! Constraint automata are compiled once over a tiny *parametric* alphabet
//! (`a`, `b`, ... plus a catch-all such as `z`) and reused for every concrete
//! binding of tasks. A [`Symbol`] is the position of a parametric character in
//! its [`Alphabet`]; transition rows are indexed by it directly. A symbol also
//! remembers the size of the alphabet that issued it, so a symbol taken from
//! a wider alphabet is rejected rather than read as a different character.

use std::fmt;

use crate::error::{Error, ErrorKind, Result};

/// Maximum number of symbols an alphabet may hold (catch-all included).
pub const MAX_SYMBOLS: usize = 4;

/// Catch-all symbol used by the standard alphabets.
pub const DEFAULT_OTHER: char = 'z';

/// Parametric characters handed out by [`Alphabet::standard`], in order.
const STANDARD_SYMBOLS: [char; MAX_SYMBOLS - 1] = ['a', 'b', 'c'];

/// Index of a parametric character within an [`Alphabet`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    width: u8,
    index: u8,
}

impl Symbol {
    pub(crate) const fn new(width: u8, index: u8) -> Self {
        Self { width, index }
    }

    /// Returns the raw index of this symbol.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Size of the alphabet this symbol was issued by.
    #[must_use]
    pub const fn width(self) -> usize {
        self.width as usize
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({}/{})", self.index, self.width)
    }
}

/// An ordered set of 2 to [`MAX_SYMBOLS`] distinct parametric characters.
///
/// The last character is always the catch-all ("other") symbol that every
/// unmapped concrete task translates to.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    chars: [char; MAX_SYMBOLS],
    len: u8,
}

impl Alphabet {
    /// Creates an alphabet from parametric characters, appending the default
    /// catch-all symbol unless it is already last.
    ///
    /// # Errors
    /// Returns an error on duplicates, when no parametric symbol is given, or
    /// when the alphabet would exceed [`MAX_SYMBOLS`].
    pub fn new(symbols: &[char]) -> Result<Self> {
        Self::with_other(symbols, DEFAULT_OTHER)
    }

    /// Creates an alphabet with an explicit catch-all symbol.
    ///
    /// # Errors
    /// See [`Alphabet::new`].
    pub fn with_other(symbols: &[char], other: char) -> Result<Self> {
        let parametric = match symbols.split_last() {
            Some((last, rest)) if *last == other => rest,
            _ => symbols,
        };
        if parametric.is_empty() {
            return Err(Error::new(ErrorKind::EmptyAlphabet));
        }
        let size = parametric.len() + 1;
        if size > MAX_SYMBOLS {
            return Err(Error::new(ErrorKind::AlphabetTooLarge {
                size,
                max: MAX_SYMBOLS,
            }));
        }

        let mut chars = [other; MAX_SYMBOLS];
        for (i, &c) in parametric.iter().enumerate() {
            if c == other || parametric[..i].contains(&c) {
                return Err(Error::duplicate_symbol(c));
            }
            chars[i] = c;
        }
        chars[parametric.len()] = other;

        #[allow(clippy::cast_possible_truncation)]
        Ok(Self {
            chars,
            len: size as u8,
        })
    }

    /// The literature alphabet for a template of the given arity:
    /// `{a,z}`, `{a,b,z}` or `{a,b,c,z}`.
    ///
    /// # Errors
    /// Returns an error if `arity` is zero or too large.
    pub fn standard(arity: usize) -> Result<Self> {
        if arity > STANDARD_SYMBOLS.len() {
            return Err(Error::new(ErrorKind::AlphabetTooLarge {
                size: arity + 1,
                max: MAX_SYMBOLS,
            }));
        }
        Self::new(&STANDARD_SYMBOLS[..arity])
    }

    /// Number of symbols, catch-all included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns true if the alphabet has no symbols (never true once built).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The characters of this alphabet, in symbol order.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars[..self.len()]
    }

    /// The catch-all symbol.
    #[must_use]
    pub const fn other(&self) -> Symbol {
        Symbol::new(self.len, self.len - 1)
    }

    /// Looks up the symbol of a parametric character.
    #[must_use]
    pub fn symbol(&self, c: char) -> Option<Symbol> {
        #[allow(clippy::cast_possible_truncation)]
        self.chars().iter().position(|&x| x == c).map(|i| Symbol::new(self.len, i as u8))
    }

    /// Looks up the symbol of a parametric character, failing if absent.
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnknownSymbol`] if `c` is not in the alphabet.
    pub fn resolve(&self, c: char) -> Result<Symbol> {
        self.symbol(c).ok_or_else(|| Error::unknown_symbol(c))
    }

    /// Returns the character of a symbol.
    ///
    /// # Panics
    /// Panics if the symbol was not produced by this alphabet.
    #[must_use]
    pub fn char_of(&self, symbol: Symbol) -> char {
        self.chars()[symbol.index()]
    }

    /// Returns true if `symbol` was issued by an alphabet of this size and
    /// indexes into it.
    #[must_use]
    pub const fn contains(&self, symbol: Symbol) -> bool {
        symbol.width == self.len && symbol.index < self.len
    }

    /// Iterates over every symbol, catch-all included.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + use<> {
        let width = self.len;
        (0..width).map(move |i| Symbol::new(width, i))
    }

    /// Iterates over the parametric symbols (catch-all excluded).
    pub fn parametric(&self) -> impl Iterator<Item = Symbol> + use<> {
        let width = self.len;
        (0..width - 1).map(move |i| Symbol::new(width, i))
    }

    /// The complement of `excluded` within this alphabet, in symbol order.
    #[must_use]
    pub fn others(&self, excluded: &[Symbol]) -> Vec<Symbol> {
        self.symbols().filter(|s| !excluded.contains(s)).collect()
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet({self})")
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, c) in self.chars().iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "}}")
    }
}
