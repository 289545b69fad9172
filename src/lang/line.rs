use super::{ast::*, lex, parse, token::*, Error, LineNumber, MAX_LINE_LEN};
use crate::error;
use std::convert::TryFrom;

/// One line of text as typed or loaded from a file.
#[derive(Debug, PartialEq)]
pub struct Line {
    number: Option<LineNumber>,
    tokens: Vec<Token>,
    text: String,
}

impl Line {
    pub fn new(s: &str) -> Result<Line, Error> {
        let text = s.trim_end_matches(|c: char| c == '\n' || c == '\r').trim_end();
        if text.chars().count() > MAX_LINE_LEN {
            return Err(error!(LineBufferOverflow));
        }
        let mut tokens = lex(text);
        let mut number = None;
        let mut skip = tokens
            .iter()
            .take_while(|t| matches!(t, Token::Whitespace(_)))
            .count();
        if let Some(t @ Token::Number(_)) = tokens.get(skip) {
            number = Some(LineNumber::try_from(t)?);
            skip += 1;
            if let Some(Token::Whitespace(_)) = tokens.get(skip) {
                skip += 1;
            }
        }
        tokens.drain(..skip);
        Ok(Line {
            number,
            tokens,
            text: text.to_string(),
        })
    }

    pub fn number(&self) -> Option<LineNumber> {
        self.number
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    /// True when nothing follows the line number.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The source text, trailing whitespace removed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn statement(&self) -> Result<Statement, Error> {
        parse(self.number, &self.tokens)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::super::ErrorCode;
    use super::*;

    #[test]
    fn test_numbered_line() {
        let line = Line::new("10 PRINT x  \r\n").unwrap();
        assert_eq!(line.number(), Some(10));
        assert!(!line.is_empty());
        assert_eq!(line.text(), "10 PRINT x");
        assert_eq!(
            line.statement().unwrap(),
            Statement::Print(None, vec![Expression::Identifier("x".to_string())])
        );
    }

    #[test]
    fn test_number_only() {
        let line = Line::new("  250 ").unwrap();
        assert_eq!(line.number(), Some(250));
        assert!(line.is_empty());
    }

    #[test]
    fn test_direct() {
        let line = Line::new("PRINT 1").unwrap();
        assert!(line.is_direct());
        assert_eq!(line.number(), None);
    }

    #[test]
    fn test_bad_line_numbers() {
        assert!(Line::new("0 END").unwrap_err().is(ErrorCode::SyntaxError));
        assert!(Line::new("1.5 END").unwrap_err().is(ErrorCode::SyntaxError));
        assert!(Line::new("4294967296 END")
            .unwrap_err()
            .is(ErrorCode::Overflow));
    }

    #[test]
    fn test_too_long() {
        let s = format!("10 REM {}", "x".repeat(MAX_LINE_LEN));
        assert!(Line::new(&s).unwrap_err().is(ErrorCode::LineBufferOverflow));
    }

    #[test]
    fn test_statement_error_has_line_number() {
        let e = Line::new("20 GOTO").unwrap().statement().unwrap_err();
        assert_eq!(e.line_number(), Some(20));
    }
}
