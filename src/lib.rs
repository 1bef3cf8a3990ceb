//! # prefix-eval - Prefix Arithmetic Evaluator
//!
//! A recursive-descent evaluator for integer arithmetic written in prefix
//! notation: the operator comes first, then its two operands.
//!
//! ```text
//! + 3 4            => 7
//! * (+ 1 2) 5      => 15
//! - 10 (/ 20 4)    => 5
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use prefix_eval::execute;
//!
//! assert_eq!(execute("* (+ 1 2) 5"), 15);
//!
//! // Malformed programs never raise; they evaluate to 0
//! assert_eq!(execute("+ 3"), 0);
//! ```
//!
//! ## Language
//!
//! ```text
//! expression := '(' expression ')'
//!             | digit+
//!             | operator expression expression
//! operator   := '+' | '-' | '*' | '/'
//! ```
//!
//! - Whitespace is skipped before each token
//! - Integers are signed 64-bit; `+ - *` wrap on overflow
//! - `/` truncates toward zero
//! - Anything after the first complete expression is ignored
//!
//! ## Error Handling
//!
//! Internally every failure is classified as one [`ErrorKind`]; the first one
//! met during the left-to-right walk wins. [`evaluate`] exposes it:
//!
//! ```rust
//! use prefix_eval::{evaluate, ErrorKind};
//!
//! assert_eq!(evaluate("& 1 2"), Err(ErrorKind::InvalidOperator));
//! assert_eq!(evaluate("(+ 1 2 x"), Err(ErrorKind::InvalidCharacter));
//! assert_eq!(evaluate("(+ 1 2 "), Err(ErrorKind::UnexpectedEof));
//! ```
//!
//! Division by zero is not a classified failure: it panics, exactly as
//! `i64` division does.
//!
//! ## Strategies
//!
//! The grammar is written once, generic over an [`ErrorChannel`]:
//!
//! - [`Propagate`] threads `Result<_, ErrorKind>` through every rule
//! - [`Unwind`] unwinds from the failing rule straight to the entry point
//!
//! Both produce identical results for every input.
//!
//! ```rust
//! use prefix_eval::{make_parser, Parser, Strategy};
//!
//! let strategy: Strategy = "unwinding".parse().unwrap();
//! let parser = make_parser(strategy);
//! assert_eq!(parser.execute("- 10 (/ 20 4)"), 5);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source → Cursor → Grammar<C> → i64 | ErrorKind → Evaluator<C> → i64
//! ```
//!
//! - [`Cursor`] - Byte-level read position
//! - [`Grammar`] - Recursive-descent rules, evaluating as they parse
//! - [`Evaluator`] - Entry point that recovers failures
//!
//! ## License
//!
//! Licensed under the [MIT License](https://opensource.org/licenses/MIT).

/// Version of the evaluator
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;

// Re-export main types
pub use error::{ConfigError, ErrorKind, ErrorSeverity, EvalResult, Result};
pub use lexer::Cursor;
pub use parser::{Grammar, Operator};
pub use runtime::{
    make_parser, ErrorChannel, Evaluator, Parser, Propagate, ResultParser, Strategy, Unwind,
    UnwindingParser,
};

/// Evaluates `program`, returning 0 on any classified failure.
///
/// # Panics
///
/// Panics on division by zero.
pub fn execute(program: &str) -> i64 {
    ResultParser::new().execute(program)
}

/// Evaluates `program` and returns the value or its failure classification.
///
/// # Panics
///
/// Panics on division by zero.
pub fn evaluate(program: &str) -> EvalResult {
    ResultParser::new().evaluate(program)
}
