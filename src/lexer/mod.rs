//! Lexical scanning for prefix programs
//!
//! There is no token stream: grammar rules read raw bytes through a [`Cursor`].

mod cursor;

pub use cursor::Cursor;
