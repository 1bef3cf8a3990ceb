//! Error channels: how a classified failure travels from the rule that
//! detects it back to the evaluator entry point.
//!
//! Grammar rules are written once against [`ErrorChannel`] and return
//! `Result<T, C::Error>`. With [`Propagate`] that is an ordinary
//! `Result<T, ErrorKind>` and every `?` checks the tag. With [`Unwind`] the
//! error type is uninhabited, so each `?` compiles away and [`Unwind::raise`]
//! unwinds the stack straight to [`Unwind::catch`].

use crate::error::{ErrorKind, EvalResult};
use std::convert::Infallible;
use std::panic::{self, AssertUnwindSafe};

/// Mechanism used to signal and recover classified failures
pub trait ErrorChannel {
    /// Error type carried by every grammar rule
    type Error;

    /// Short name used in logs
    const NAME: &'static str;

    /// Signals `kind` from the point of detection
    fn raise(kind: ErrorKind) -> Self::Error;

    /// Runs `body` and recovers any failure it raised
    fn catch<F>(body: F) -> EvalResult
    where
        F: FnOnce() -> Result<i64, Self::Error>;
}

/// Explicit result threading: failures are returned through every frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Propagate;

impl ErrorChannel for Propagate {
    type Error = ErrorKind;

    const NAME: &'static str = "results";

    fn raise(kind: ErrorKind) -> ErrorKind {
        kind
    }

    fn catch<F>(body: F) -> EvalResult
    where
        F: FnOnce() -> Result<i64, ErrorKind>,
    {
        body()
    }
}

/// Non-local transfer: failures unwind the stack to the entry point
///
/// Requires `panic = "unwind"`. Panics that are not a raised failure (such as
/// division by zero) pass through `catch` untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unwind;

/// Unwind payload carrying the classification
struct Thrown(ErrorKind);

impl ErrorChannel for Unwind {
    type Error = Infallible;

    const NAME: &'static str = "unwinding";

    fn raise(kind: ErrorKind) -> Infallible {
        // resume_unwind skips the panic hook, so nothing is printed
        panic::resume_unwind(Box::new(Thrown(kind)))
    }

    fn catch<F>(body: F) -> EvalResult
    where
        F: FnOnce() -> Result<i64, Infallible>,
    {
        match panic::catch_unwind(AssertUnwindSafe(body)) {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(never)) => match never {},
            Err(payload) => match payload.downcast::<Thrown>() {
                Ok(thrown) => Err(thrown.0),
                Err(other) => panic::resume_unwind(other),
            },
        }
    }
}
