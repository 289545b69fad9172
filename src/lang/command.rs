use super::{lex, token::*, Error, LineNumber};
use crate::error;
use std::convert::TryFrom;
use std::ops::RangeInclusive;

/// Words understood at the prompt when no line number is given.
#[derive(Debug, PartialEq)]
pub enum Command {
    Run,
    Debug,
    List(RangeInclusive<LineNumber>),
    Clear,
    Save(String),
    Old(String),
    Help,
    Quit,
}

impl Command {
    pub fn parse(s: &str) -> Result<Command, Error> {
        let tokens: Vec<Token> = lex(s)
            .into_iter()
            .filter(|t| !matches!(t, Token::Whitespace(_)))
            .collect();
        let (first, rest) = match tokens.split_first() {
            Some(split) => split,
            None => return Err(error!(IllegalDirect)),
        };
        let word = match first {
            Token::Word(word) => word.to_ascii_uppercase(),
            _ => return Err(error!(IllegalDirect)),
        };
        let command = match word.as_str() {
            "RUN" => Command::Run,
            "DEBUG" => Command::Debug,
            "LIST" => return Ok(Command::List(Command::range(rest)?)),
            "CLEAR" => Command::Clear,
            "SAVE" => return Ok(Command::Save(Command::file_name(rest)?)),
            "OLD" | "LOAD" => return Ok(Command::Old(Command::file_name(rest)?)),
            "HELP" => Command::Help,
            "QUIT" | "EXIT" => Command::Quit,
            _ => return Err(error!(IllegalDirect)),
        };
        match rest.first() {
            None => Ok(command),
            Some(t) => Err(error!(ExtraneousToken; t.to_string())),
        }
    }

    /// `a`, `a-`, `-b`, `a-b`, or nothing for every line.
    fn range(tokens: &[Token]) -> Result<RangeInclusive<LineNumber>, Error> {
        let mut iter = tokens.iter().peekable();
        let mut from = 1;
        let mut to = LineNumber::max_value();
        if let Some(&t) = iter.peek() {
            if let Token::Number(_) = t {
                from = LineNumber::try_from(t)?;
                to = from;
                iter.next();
            }
        }
        if let Some(Token::Operator(Operator::Minus)) = iter.peek() {
            iter.next();
            to = match iter.next() {
                Some(t) => LineNumber::try_from(t)?,
                None => LineNumber::max_value(),
            };
        }
        match iter.next() {
            None => Ok(from..=to),
            Some(t) => Err(error!(ExtraneousToken; t.to_string())),
        }
    }

    fn file_name(tokens: &[Token]) -> Result<String, Error> {
        match tokens {
            [Token::String(s)] if !s.is_empty() => Ok(s.clone()),
            [Token::String(_), t, ..] => Err(error!(ExtraneousToken; t.to_string())),
            _ => Err(error!(SyntaxError; "EXPECTED FILE NAME")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::ErrorCode;
    use super::*;

    #[test]
    fn test_simple_words() {
        assert_eq!(Command::parse("run"), Ok(Command::Run));
        assert_eq!(Command::parse(" DEBUG "), Ok(Command::Debug));
        assert_eq!(Command::parse("Clear"), Ok(Command::Clear));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("QUIT"), Ok(Command::Quit));
        assert!(Command::parse("RUN 10")
            .unwrap_err()
            .is(ErrorCode::ExtraneousToken));
    }

    #[test]
    fn test_list_ranges() {
        let max = LineNumber::max_value();
        assert_eq!(Command::parse("LIST"), Ok(Command::List(1..=max)));
        assert_eq!(Command::parse("LIST 20"), Ok(Command::List(20..=20)));
        assert_eq!(Command::parse("LIST 20-"), Ok(Command::List(20..=max)));
        assert_eq!(Command::parse("LIST -40"), Ok(Command::List(1..=40)));
        assert_eq!(Command::parse("list 20-40"), Ok(Command::List(20..=40)));
        assert!(Command::parse("LIST x").is_err());
    }

    #[test]
    fn test_files() {
        assert_eq!(
            Command::parse("SAVE \"prog.bas\""),
            Ok(Command::Save("prog.bas".to_string()))
        );
        assert_eq!(
            Command::parse("load \"prog.bas"),
            Ok(Command::Old("prog.bas".to_string()))
        );
        assert!(Command::parse("OLD").unwrap_err().is(ErrorCode::SyntaxError));
    }

    #[test]
    fn test_statements_are_not_direct() {
        assert!(Command::parse("PRINT 1")
            .unwrap_err()
            .is(ErrorCode::IllegalDirect));
        assert!(Command::parse("").unwrap_err().is(ErrorCode::IllegalDirect));
    }
}
