use super::Var;
use crate::error;
use crate::lang::{Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// Where execution continues after a statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transfer {
    Fallthrough,
    Jump(LineNumber),
    Halt,
}

impl std::fmt::Display for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Transfer::Fallthrough => write!(f, "NEXT"),
            Transfer::Jump(line) => write!(f, "GOTO {}", line),
            Transfer::Halt => write!(f, "END"),
        }
    }
}

/// ## Evaluation state
///
/// Variable bindings plus the control transfer register. Every
/// statement sets the register once and the runtime takes it once.

#[derive(Debug, Default)]
pub struct State {
    vars: Var,
    transfer: Option<Transfer>,
}

impl State {
    pub fn new() -> State {
        State::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
        self.transfer = None;
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn set_value(&mut self, var_name: &str, value: f64) {
        self.vars.store(var_name, value)
    }

    pub fn value(&self, var_name: &str) -> Result<f64> {
        self.vars.fetch(var_name)
    }

    pub fn is_defined(&self, var_name: &str) -> bool {
        self.vars.is_defined(var_name)
    }

    pub fn set_transfer(&mut self, transfer: Transfer) {
        debug_assert!(self.transfer.is_none());
        self.transfer = Some(transfer);
    }

    pub fn take_transfer(&mut self) -> Result<Transfer> {
        match self.transfer.take() {
            Some(transfer) => Ok(transfer),
            None => Err(error!(InternalError; "NO CONTROL TRANSFER")),
        }
    }
}
