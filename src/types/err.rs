//! Error types used in the library.
//!
//! - Operand errors are raised when building a sentence, or extending a knowledge base, with something which cannot be part of a sentence.
//! - Evaluation errors are raised when a sentence is evaluated on a model which does not value some symbol of the sentence.
//!   The entailment procedure always evaluates on a total model, and so these are only expected from direct use of [evaluate](crate::structures::sentence::Sentence::evaluate).
//!
//! Names of the error enums --- for the most part --- overlap with the corresponding structures.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Entailment(EntailmentError),
    Evaluation(EvaluationError),
    Operand(OperandError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entailment(e) => write!(f, "entailment error: {e}"),
            Self::Evaluation(e) => write!(f, "evaluation error: {e}"),
            Self::Operand(e) => write!(f, "invalid operand: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors during an entailment check.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntailmentError {
    /// A branch of a parallel check failed to join.
    WorkerPanic,
}

impl std::fmt::Display for EntailmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WorkerPanic => write!(f, "a parallel branch failed to complete"),
        }
    }
}

impl From<EntailmentError> for ErrorKind {
    fn from(e: EntailmentError) -> Self {
        ErrorKind::Entailment(e)
    }
}

/// Noted errors when evaluating a sentence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// The model has no value for the named symbol.
    UnboundVariable(String),
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable(name) => write!(f, "variable {name} not in model"),
        }
    }
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

/// Noted errors when building a sentence.
///
/// Anything which is not a sentence is rejected by the type checker, so these cover the remaining cases.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperandError {
    /// An empty string, where a symbol name was required.
    EmptyName,

    /// A symbol name containing whitespace, a parenthesis, an operator glyph, or '-'.
    ReservedCharacter(char),

    /// An attempt to add a conjunct or disjunct to a sentence which is neither a conjunction nor a disjunction.
    NotExtendable,
}

impl std::fmt::Display for OperandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "symbol names must be non-empty"),
            Self::ReservedCharacter(c) => write!(f, "symbol names may not contain '{c}'"),
            Self::NotExtendable => write!(f, "only conjunctions and disjunctions may be extended"),
        }
    }
}

impl From<OperandError> for ErrorKind {
    fn from(e: OperandError) -> Self {
        ErrorKind::Operand(e)
    }
}
