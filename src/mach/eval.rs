use super::{Operation, State};
use crate::error;
use crate::lang::ast::{BinaryOp, Expression};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

impl Expression {
    /// Evaluates left to right. Assignment writes the right hand
    /// value into the named variable and yields that value.
    pub fn eval(&self, state: &mut State) -> Result<f64> {
        use Expression::*;
        match self {
            Constant(n) => Ok(*n),
            Identifier(name) => state.value(name),
            Compound(BinaryOp::Assign, lhs, rhs) => {
                let name = match &**lhs {
                    Identifier(name) => name,
                    _ => return Err(error!(IllegalAssignment; lhs.to_string())),
                };
                let value = rhs.eval(state)?;
                state.set_value(name, value);
                Ok(value)
            }
            Compound(op, lhs, rhs) => {
                let l = lhs.eval(state)?;
                let r = rhs.eval(state)?;
                match Operation::arithmetic(*op, l, r) {
                    Some(value) => Ok(value),
                    None => Err(error!(InternalError; op.to_string())),
                }
            }
        }
    }
}
