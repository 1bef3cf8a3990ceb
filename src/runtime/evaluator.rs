use super::channel::{ErrorChannel, Propagate, Unwind};
use crate::error::{ConfigError, EvalResult};
use crate::parser::Grammar;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Anything that runs a program and yields an integer
pub trait Parser {
    /// Evaluates `program`; any classified failure yields 0
    fn execute(&self, program: &str) -> i64;
}

/// Prefix expression evaluator over the error channel `C`
///
/// Stateless: every call scans its own cursor, so one evaluator can be
/// shared across threads.
pub struct Evaluator<C> {
    channel: PhantomData<fn() -> C>,
}

/// Evaluator that threads results through every rule
pub type ResultParser = Evaluator<Propagate>;

/// Evaluator that unwinds to the entry point on failure
pub type UnwindingParser = Evaluator<Unwind>;

impl<C: ErrorChannel> Evaluator<C> {
    /// Creates a new evaluator
    pub fn new() -> Self {
        Evaluator {
            channel: PhantomData,
        }
    }

    /// Evaluates `program` and returns the raw classification.
    ///
    /// Input after the first complete expression is ignored.
    ///
    /// # Panics
    ///
    /// Panics on division by zero.
    pub fn evaluate(&self, program: &str) -> EvalResult {
        let _span =
            tracing::trace_span!("evaluate", strategy = C::NAME, len = program.len()).entered();

        let mut grammar = Grammar::<C>::new(program);
        let result = C::catch(|| grammar.expression());

        if let Err(kind) = result {
            tracing::debug!(?kind, offset = grammar.position(), "evaluation failed");
        }
        result
    }
}

impl<C: ErrorChannel> Parser for Evaluator<C> {
    fn execute(&self, program: &str) -> i64 {
        self.evaluate(program).unwrap_or(0)
    }
}

impl<C: ErrorChannel> Default for Evaluator<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Evaluator<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Evaluator<C> {}

impl<C: ErrorChannel> fmt::Debug for Evaluator<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("strategy", &C::NAME)
            .finish()
    }
}

/// Error-channel selection, readable from a harness configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Explicit result threading
    #[default]
    Results,
    /// Non-local transfer by unwinding
    #[serde(alias = "exceptions")]
    Unwinding,
}

impl Strategy {
    /// Every strategy, in declaration order
    pub const ALL: [Strategy; 2] = [Strategy::Results, Strategy::Unwinding];

    /// Evaluates `program` with this strategy's channel
    pub fn evaluate(self, program: &str) -> EvalResult {
        match self {
            Strategy::Results => ResultParser::new().evaluate(program),
            Strategy::Unwinding => UnwindingParser::new().evaluate(program),
        }
    }

    /// Configuration name of the strategy
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Results => Propagate::NAME,
            Strategy::Unwinding => Unwind::NAME,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "results" => Ok(Strategy::Results),
            "unwinding" | "exceptions" => Ok(Strategy::Unwinding),
            _ => Err(ConfigError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

/// Builds a boxed parser for `strategy`
pub fn make_parser(strategy: Strategy) -> Box<dyn Parser + Send + Sync> {
    match strategy {
        Strategy::Results => Box::new(ResultParser::new()),
        Strategy::Unwinding => Box::new(UnwindingParser::new()),
    }
}
