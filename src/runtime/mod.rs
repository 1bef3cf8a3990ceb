//! Evaluation entry points and error channels

mod channel;
mod evaluator;

pub use channel::{ErrorChannel, Propagate, Unwind};
pub use evaluator::{make_parser, Evaluator, Parser, ResultParser, Strategy, UnwindingParser};
