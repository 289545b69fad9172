/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

*/

pub type LineNumber = u32;
pub type Column = std::ops::Range<usize>;

pub const MAX_LINE_LEN: usize = 1024;

#[macro_use]
mod error;
mod command;
mod lex;
mod line;
mod parse;

pub mod ast;
pub mod number;
pub mod token;

pub use command::Command;
pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
pub use parse::parse_expression;

