//! # Mini BASIC
//!
//! A small line numbered BASIC with numeric variables, seven statements,
//! and an interactive prompt for editing and running programs.
//!
//! Build with [Rust](https://www.rust-lang.org/tools/install) then run
//! `cargo install mini-basic`. Start the interpreter with `minibasic`,
//! optionally followed by the name of a program file to load.
//!
//! ```text
//! > 10 PRINT "HELLO"
//! > RUN
//! HELLO
//! ```
//!
//! The library can also run programs without a terminal. Anything
//! implementing [`mach::Io`](mach/trait.Io.html) can supply input
//! and collect output.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
