//! Error types used in the library.
//!
//! - Most errors are from building a formula, e.g. a token which cannot be read as a literal.
//! - Some errors guard the invariants of a search, e.g. evaluating a valuation which does not value every atom of the formula.
//!
//! Failing to find a satisfying valuation within some budget is *not* an error, and is instead noted in the [report](crate::reports::Report) of a search.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Formula(FormulaError),
    IO(std::io::ErrorKind),
    Parse(ParseError),
    State(StateError),
    Valuation(ValuationError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e:?}"),
            Self::Formula(e) => write!(f, "Formula error: {e:?}"),
            Self::IO(e) => write!(f, "IO error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e:?}"),
            Self::State(e) => write!(f, "State error: {e:?}"),
            Self::Valuation(e) => write!(f, "Valuation error: {e:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

impl From<std::io::Error> for ErrorKind {
    fn from(e: std::io::Error) -> Self {
        ErrorKind::IO(e.kind())
    }
}

/// Errors when configuring a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside the bounds of the named option.
    OutOfRange(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors in the structure of a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// Some attempt was made to add an empty clause.
    EmptyClause,

    /// A literal mentions an atom which is not part of the formula.
    AtomOutOfRange(Atom),

    /// An atom without an external name.
    UnknownAtom(Atom),

    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::Formula(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A negation character was read, but no candidate for negation was found.
    Negation,

    /// An empty string, where some non-empty string was required.
    Empty,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors from the state of a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// The formula may not be revised once a search has begun.
    FormulaFixed,

    /// A step was requested, though there is no candidate atom to flip.
    NoCandidates,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

/// Errors with a valuation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValuationError {
    /// The valuation does not value exactly the atoms of the formula.
    Incomplete { expected: usize, found: usize },

    /// A name which is not the name of any atom in the formula.
    UnknownName(String),
}

impl From<ValuationError> for ErrorKind {
    fn from(e: ValuationError) -> Self {
        ErrorKind::Valuation(e)
    }
}
