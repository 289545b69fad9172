use super::{number, LineNumber};

#[derive(Debug, PartialEq)]
pub enum Statement {
    Rem(String),
    Let(String, Expression),
    Print(Option<String>, Vec<Expression>),
    Input(String),
    Goto(LineNumber),
    If(Expression, Comparison, Expression, LineNumber),
    End,
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Constant(f64),
    Identifier(String),
    Compound(BinaryOp, Box<Expression>, Box<Expression>),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Assign,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Comparison {
    Equal,
    Less,
    Greater,
}

impl Expression {
    pub fn compound(op: BinaryOp, lhs: Expression, rhs: Expression) -> Expression {
        Expression::Compound(op, Box::new(lhs), Box::new(rhs))
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Constant(n) => write!(f, "{}", number::format(*n)),
            Identifier(name) => write!(f, "{}", name),
            Compound(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use BinaryOp::*;
        match self {
            Add => write!(f, "+"),
            Subtract => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Assign => write!(f, "="),
        }
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Comparison::*;
        match self {
            Equal => write!(f, "="),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Rem(text) if text.is_empty() => write!(f, "REM"),
            Rem(text) => write!(f, "REM {}", text),
            Let(var, expr) => write!(f, "LET {} = {}", var, expr),
            Print(literal, list) => {
                write!(f, "PRINT")?;
                let mut sep = " ";
                if let Some(s) = literal {
                    write!(f, " \"{}\"", s)?;
                    sep = ", ";
                }
                for expr in list {
                    write!(f, "{}{}", sep, expr)?;
                    sep = ", ";
                }
                Ok(())
            }
            Input(var) => write!(f, "INPUT {}", var),
            Goto(line) => write!(f, "GOTO {}", line),
            If(lhs, op, rhs, line) => write!(f, "IF {} {} {} THEN {}", lhs, op, rhs, line),
            End => write!(f, "END"),
        }
    }
}
