/*!
# Rust Language Module

This Rust module turns BASIC source text into an indexed token sequence
and provides the cursor the interpreter moves over it.

*/

mod error;
mod lex;
mod marker;
mod scanner;

pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use marker::Marker;
pub use scanner::Scanner;

/// Position of a token in the lexed program.
pub type Address = usize;
pub type LineNumber = Option<usize>;
