use super::{ast::*, number, token::*, Column, Error, LineNumber};
use crate::error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

const ASSIGNMENT: usize = 1;
const ADDITIVE: usize = 2;
const MULTIPLICATIVE: usize = 3;

/// Parses the statement portion of a line. `line_number` is only
/// used to decorate errors.
pub fn parse(line_number: Option<LineNumber>, tokens: &[Token]) -> Result<Statement> {
    match Parser::parse(tokens, Statement::for_tokens) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

/// Parses a complete expression; fails if anything follows it.
pub fn parse_expression(tokens: &[Token]) -> Result<Expression> {
    Parser::parse(tokens, |parse| parse.expression())
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    saved: Vec<(Column, &'a Token)>,
    cursor: usize,
    col: Column,
}

impl<'a> Parser<'a> {
    fn parse<T, F>(tokens: &'a [Token], f: F) -> Result<T>
    where
        F: FnOnce(&mut Parser<'a>) -> Result<T>,
    {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            saved: vec![],
            cursor: 0,
            col: 0..0,
        };
        let result = f(&mut parse).and_then(|r| parse.expect_end().map(|_| r));
        match result {
            Err(e) if e.column() == (0..0) => Err(e.in_column(&parse.col)),
            r => r,
        }
    }

    fn next(&mut self) -> Option<&'a Token> {
        if let Some((col, t)) = self.saved.pop() {
            self.col = col;
            return Some(t);
        }
        loop {
            self.col.start = self.cursor;
            let t = self.token_stream.next()?;
            self.cursor += t.to_string().chars().count();
            self.col.end = self.cursor;
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn save(&mut self, token: &'a Token) {
        self.saved.push((self.col.clone(), token));
    }

    fn peek(&mut self) -> Option<&'a Token> {
        let t = self.next()?;
        self.save(t);
        Some(t)
    }

    fn expect_end(&mut self) -> Result<()> {
        match self.next() {
            None => Ok(()),
            Some(t) => Err(error!(ExtraneousToken; t.to_string())),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        self.expression_above(0)
    }

    /// Reads a term followed by every operator that binds tighter than
    /// `threshold`. Operators at or below the threshold are left for the
    /// caller, which gives left-associative grouping. Assignment recurses
    /// one level lower so that `a = b = 1` groups to the right.
    fn expression_above(&mut self, threshold: usize) -> Result<Expression> {
        let mut lhs = self.term(threshold)?;
        loop {
            let (op, precedence) = match self.peek() {
                Some(Token::Operator(op)) => match Expression::binary_op(op) {
                    Some(found) => found,
                    None => break,
                },
                _ => break,
            };
            if precedence <= threshold {
                break;
            }
            self.next();
            let rhs = match op {
                BinaryOp::Assign => self.expression_above(precedence - 1)?,
                _ => self.expression_above(precedence)?,
            };
            lhs = Expression::compound(op, lhs, rhs);
        }
        Ok(lhs)
    }

    /// A leading `-` negates at additive level, or at the level of the
    /// surrounding operator when that binds tighter.
    fn term(&mut self, threshold: usize) -> Result<Expression> {
        match self.next() {
            Some(Token::Number(s)) => Expression::for_literal(s),
            Some(Token::Word(name)) => Ok(Expression::Identifier(name.clone())),
            Some(Token::Operator(Operator::Minus)) => {
                let operand = self.expression_above(threshold.max(ADDITIVE))?;
                Ok(Expression::compound(
                    BinaryOp::Subtract,
                    Expression::Constant(0.0),
                    operand,
                ))
            }
            Some(Token::LParen) => {
                let expr = self.expression()?;
                match self.next() {
                    Some(Token::RParen) => Ok(expr),
                    _ => Err(error!(SyntaxError; "UNBALANCED PARENTHESES")),
                }
            }
            Some(Token::RParen) => Err(error!(SyntaxError; "UNBALANCED PARENTHESES")),
            _ => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        }
    }

    fn ident(&mut self) -> Result<String> {
        match self.next() {
            Some(Token::Word(name)) => Ok(name.clone()),
            _ => Err(error!(SyntaxError; "EXPECTED IDENTIFIER")),
        }
    }

    fn line_number(&mut self) -> Result<LineNumber> {
        match self.next() {
            Some(t) => LineNumber::try_from(t),
            None => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
    }
}

impl Expression {
    fn binary_op(op: &Operator) -> Option<(BinaryOp, usize)> {
        use Operator::*;
        match op {
            Equal => Some((BinaryOp::Assign, ASSIGNMENT)),
            Plus => Some((BinaryOp::Add, ADDITIVE)),
            Minus => Some((BinaryOp::Subtract, ADDITIVE)),
            Multiply => Some((BinaryOp::Multiply, MULTIPLICATIVE)),
            Divide => Some((BinaryOp::Divide, MULTIPLICATIVE)),
            Less | Greater => None,
        }
    }

    fn for_literal(s: &str) -> Result<Expression> {
        match number::parse(s) {
            Some(n) if n.is_finite() => Ok(Expression::Constant(n)),
            Some(_) => Err(error!(Overflow; s)),
            None => Err(error!(SyntaxError; "INVALID NUMBER")),
        }
    }
}

impl Comparison {
    fn for_token(token: Option<&Token>) -> Result<Comparison> {
        match token {
            Some(Token::Operator(Operator::Equal)) => Ok(Comparison::Equal),
            Some(Token::Operator(Operator::Less)) => Ok(Comparison::Less),
            Some(Token::Operator(Operator::Greater)) => Ok(Comparison::Greater),
            Some(t) => Err(error!(IllegalOperator; t.to_string())),
            None => Err(error!(IllegalOperator; "EXPECTED COMPARISON")),
        }
    }
}

impl Statement {
    fn for_tokens(parse: &mut Parser) -> Result<Statement> {
        let token = match parse.next() {
            Some(t) => t,
            None => return Err(error!(InvalidStatement; "EXPECTED STATEMENT")),
        };
        let word = match token {
            Token::Word(word) => word.to_ascii_uppercase(),
            _ => return Err(error!(InvalidStatement; token.to_string())),
        };
        match word.as_str() {
            "REM" => Self::r#rem(parse),
            "LET" => Self::r#let(parse),
            "PRINT" => Self::r#print(parse),
            "INPUT" => Self::r#input(parse),
            "GOTO" => Self::r#goto(parse),
            "IF" => Self::r#if(parse),
            "END" => Ok(Statement::End),
            _ => {
                parse.save(token);
                Self::r#let(parse)
            }
        }
    }

    fn r#rem(parse: &mut Parser) -> Result<Statement> {
        let mut text = String::new();
        while let Some(t) = parse.next() {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&t.to_string());
        }
        Ok(Statement::Rem(text))
    }

    fn r#let(parse: &mut Parser) -> Result<Statement> {
        let var = parse.ident()?;
        match parse.next() {
            Some(Token::Operator(Operator::Equal)) => {}
            Some(t) => return Err(error!(IllegalOperator; t.to_string())),
            None => return Err(error!(IllegalOperator; "EXPECTED =")),
        }
        Ok(Statement::Let(var, parse.expression()?))
    }

    fn r#print(parse: &mut Parser) -> Result<Statement> {
        let mut list: Vec<Expression> = vec![];
        let literal = match parse.peek() {
            Some(Token::String(s)) => {
                parse.next();
                Some(s.clone())
            }
            _ => {
                list.push(parse.expression()?);
                None
            }
        };
        while let Some(Token::Comma) = parse.peek() {
            parse.next();
            list.push(parse.expression()?);
        }
        Ok(Statement::Print(literal, list))
    }

    fn r#input(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Input(parse.ident()?))
    }

    fn r#goto(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Goto(parse.line_number()?))
    }

    fn r#if(parse: &mut Parser) -> Result<Statement> {
        let lhs = parse.expression_above(ASSIGNMENT)?;
        let op = Comparison::for_token(parse.next())?;
        let rhs = parse.expression_above(ASSIGNMENT)?;
        match parse.next() {
            Some(t) if t.is_word("THEN") => {}
            _ => return Err(error!(SyntaxError; "EXPECTED THEN")),
        }
        Ok(Statement::If(lhs, op, rhs, parse.line_number()?))
    }
}
