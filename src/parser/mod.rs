//! Prefix expression parser
//!
//! Parsing and evaluation happen in one pass; no syntax tree is built.

mod grammar;
mod operator;

pub use grammar::Grammar;
pub use operator::Operator;
