//! # Mini BASIC
//!
//! `minibasic [program.bas]`
//!
//! Log output goes to stderr; set `RUST_LOG=debug` to watch
//! line edits and program runs.

use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() {
    if let Err(error) = SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
    {
        eprintln!("{}", error);
    }
    minibasic::term::main(std::env::args().nth(1));
}
