//! Error types for the prefix evaluator

use thiserror::Error;

/// Classified evaluation failure
///
/// A tag only: no position, no message. The first failure met during the
/// depth-first walk is the one reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A byte in operator position is none of `+ - * /`
    ///
    /// **Example:** `& 1 2`
    #[error("Invalid operator")]
    InvalidOperator,

    /// A literal byte was read but did not match the expected one
    ///
    /// **Triggered by:** anything other than `)` closing a parenthesized expression
    /// **Example:** `(+ 1 2 x`
    #[error("Invalid character")]
    InvalidCharacter,

    /// A byte was required but the input was exhausted
    ///
    /// **Example:** `+ 3`, `(+ 1 2 `
    #[error("Unexpected end of file")]
    UnexpectedEof,
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Fatal error that cannot be recovered from
    Fatal,
    /// Recoverable error; the caller sees a zero result
    Recoverable,
}

impl ErrorKind {
    /// Classify error severity
    pub fn classify(&self) -> ErrorSeverity {
        match self {
            ErrorKind::InvalidOperator
            | ErrorKind::InvalidCharacter
            | ErrorKind::UnexpectedEof => ErrorSeverity::Recoverable,
        }
    }
}

/// Errors raised while reading evaluator configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Strategy name not recognized
    #[error("Unknown strategy: {name} (expected `results` or `unwinding`)")]
    UnknownStrategy {
        /// Name as given
        name: String,
    },
}

/// Result type for grammar rules
pub type Result<T> = std::result::Result<T, ErrorKind>;

/// Raw outcome of evaluating a program: a value or its classification
pub type EvalResult = Result<i64>;
