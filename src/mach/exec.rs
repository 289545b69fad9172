use super::{Io, Operation, State, Transfer};
use crate::error;
use crate::lang::ast::Statement;
use crate::lang::{number, Error};

type Result<T> = std::result::Result<T, Error>;

impl Statement {
    /// Runs one statement. On success the control transfer
    /// register of `state` has been set exactly once.
    pub fn execute(&self, state: &mut State, io: &mut dyn Io) -> Result<()> {
        use Statement::*;
        let transfer = match self {
            Rem(_) => Transfer::Fallthrough,
            Let(var, expr) => {
                let value = expr.eval(state)?;
                state.set_value(var, value);
                Transfer::Fallthrough
            }
            Print(literal, list) => {
                let mut parts: Vec<String> = vec![];
                if let Some(s) = literal {
                    parts.push(s.clone());
                }
                for expr in list {
                    parts.push(number::format(expr.eval(state)?));
                }
                let mut s = parts.join(" ");
                s.push('\n');
                io.print(&s)?;
                Transfer::Fallthrough
            }
            Input(var) => {
                let reply = io.input(&format!("{} ? ", var))?;
                match number::parse(&reply) {
                    Some(value) => state.set_value(var, value),
                    None => return Err(error!(InvalidNumber; reply.trim())),
                }
                Transfer::Fallthrough
            }
            Goto(line) => Transfer::Jump(*line),
            If(lhs, op, rhs, line) => {
                let l = lhs.eval(state)?;
                let r = rhs.eval(state)?;
                if Operation::compare(*op, l, r) {
                    Transfer::Jump(*line)
                } else {
                    Transfer::Fallthrough
                }
            }
            End => Transfer::Halt,
        };
        state.set_transfer(transfer);
        Ok(())
    }
}
