use super::{Listing, State, Transfer, Var};
use crate::error;
use crate::lang::ast::Statement;
use crate::lang::{Error, Line, LineNumber};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// Everything a running program needs from the outside world.
pub trait Io {
    /// Receives one complete line of PRINT output, newline included.
    fn print(&mut self, s: &str) -> Result<()>;

    /// Blocks until a reply to `prompt` is available.
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Called after each statement in step mode. Returning
    /// `false` stops the run with a break.
    fn step(&mut self, _line: LineNumber) -> Result<bool> {
        Ok(true)
    }

    /// Observes execution. Must not affect it.
    fn trace(&mut self, _event: Event) {}
}

#[derive(Debug, PartialEq)]
pub enum Event<'a> {
    Executing {
        line: LineNumber,
        statement: &'a Statement,
    },
    Executed {
        line: LineNumber,
        statement: &'a Statement,
        transfer: Transfer,
        vars: &'a Var,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Run,
    Step,
}

/// ## Execution engine

#[derive(Debug, Default)]
pub struct Runtime {
    listing: Listing,
    state: State,
    interrupted: Arc<AtomicBool>,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Setting the flag stops a run before its next line.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupted)
    }

    /// Edits the program with a line of source text. A line with only
    /// a number deletes that line.
    pub fn enter(&mut self, s: &str) -> Result<()> {
        let line = Line::new(s)?;
        self.listing.insert(&line)
    }

    pub fn load_str(&mut self, s: &str) -> Result<()> {
        self.listing.load_str(s)?;
        self.state.clear();
        Ok(())
    }

    pub fn clear(&mut self) {
        log::debug!("program cleared");
        self.listing.clear();
        self.state.clear();
    }

    pub fn run(&mut self, io: &mut dyn Io) -> Result<()> {
        self.execute(io, Mode::Run)
    }

    pub fn debug(&mut self, io: &mut dyn Io) -> Result<()> {
        self.execute(io, Mode::Step)
    }

    pub fn execute(&mut self, io: &mut dyn Io, mode: Mode) -> Result<()> {
        self.state.clear();
        self.interrupted.store(false, Ordering::SeqCst);
        log::debug!("run started ({:?})", mode);
        let result = self.execute_lines(io, mode);
        match &result {
            Ok(()) => log::debug!("run finished"),
            Err(e) => log::debug!("run aborted: {}", e),
        }
        result
    }

    fn execute_lines(&mut self, io: &mut dyn Io, mode: Mode) -> Result<()> {
        let mut current = self.listing.first();
        while let Some(line) = current {
            if self.interrupted.swap(false, Ordering::SeqCst) {
                return Err(error!(Break, line));
            }
            let statement = self.listing.statement(line)?;
            log::trace!("{}: {}", line, statement);
            io.trace(Event::Executing { line, statement });
            if let Err(e) = statement.execute(&mut self.state, io) {
                return Err(match e.line_number() {
                    Some(_) => e,
                    None => e.in_line_number(line),
                });
            }
            let transfer = self.state.take_transfer()?;
            io.trace(Event::Executed {
                line,
                statement,
                transfer,
                vars: self.state.vars(),
            });
            if mode == Mode::Step && !io.step(line)? {
                return Err(error!(Break, line));
            }
            current = match transfer {
                Transfer::Fallthrough => self.listing.next(line),
                Transfer::Jump(target) => {
                    if !self.listing.contains(target) {
                        return Err(error!(UndefinedLine, line; target.to_string()));
                    }
                    Some(target)
                }
                Transfer::Halt => None,
            };
        }
        Ok(())
    }
}
