use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        loop {
            self.chars().next();
            len += 1;
            if let Some(pk) = self.chars().peek() {
                if is_basic_whitespace(*pk) {
                    continue;
                }
            }
            return Some(Token::Whitespace(len));
        }
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        let mut decimal = false;
        let mut exp = false;
        loop {
            let ch = match self.chars().next() {
                Some(c) => c,
                None => {
                    debug_assert!(false, "Failed to tokenize number.");
                    return None;
                }
            };
            s.push(ch);
            if ch == '.' {
                decimal = true;
            }
            if let Some(pk) = self.chars().peek() {
                if ch == 'e' || ch == 'E' {
                    if *pk == '+' || *pk == '-' {
                        continue;
                    }
                }
                if is_basic_digit(*pk) {
                    continue;
                }
                if !decimal && !exp && *pk == '.' {
                    continue;
                }
                if !exp && (*pk == 'e' || *pk == 'E') && self.exponent_follows() {
                    exp = true;
                    continue;
                }
            }
            break;
        }
        Some(Token::Number(s))
    }

    /// An `E` only belongs to a number when digits follow it,
    /// otherwise `2E` lexes as a number and a word.
    fn exponent_follows(&mut self) -> bool {
        let mut ahead = self.chars().clone();
        ahead.next();
        match ahead.next() {
            Some('+') | Some('-') => matches!(ahead.next(), Some(c) if is_basic_digit(c)),
            Some(c) => is_basic_digit(c),
            None => false,
        }
    }

    fn string(&mut self) -> Option<Token> {
        let mut s = String::new();
        self.chars().next();
        loop {
            if let Some(ch) = self.chars().next() {
                if ch != '"' {
                    s.push(ch);
                    continue;
                }
            }
            return Some(Token::String(s));
        }
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        loop {
            match self.chars().next() {
                Some(ch) => s.push(ch),
                None => {
                    debug_assert!(false, "Failed to tokenize alphabetic.");
                    return None;
                }
            };
            if let Some(pk) = self.chars().peek() {
                if is_basic_alphabetic(*pk) || is_basic_digit(*pk) {
                    continue;
                }
            }
            break;
        }
        Some(Token::Word(s))
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        if let Some(t) = Token::from_char(ch) {
            return Some(t);
        }
        let mut s = ch.to_string();
        while let Some(pk) = self.chars().peek() {
            if is_basic_alphabetic(*pk)
                || is_basic_digit(*pk)
                || is_basic_whitespace(*pk)
                || *pk == '"'
                || Token::from_char(*pk).is_some()
            {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        Some(Token::Unknown(s))
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    statement_start: bool,
    remark: bool,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = *self.chars.peek()?;
        if is_basic_whitespace(pk) {
            return self.whitespace();
        }
        if self.remark {
            return Some(Token::Remark(self.chars.by_ref().collect::<String>()));
        }
        let start = self.statement_start;
        self.statement_start = false;
        if is_basic_digit(pk) || pk == '.' {
            let r = self.number();
            // A leading line number keeps us at the start of the statement.
            if let Some(Token::Number(n)) = &r {
                self.statement_start = start && n.chars().all(|c| is_basic_digit(c));
            }
            return r;
        }
        if is_basic_alphabetic(pk) {
            let r = self.alphabetic();
            if start {
                if let Some(t) = &r {
                    self.remark = t.is_word("REM");
                }
            }
            return r;
        }
        if pk == '"' {
            return self.string();
        }
        self.minutia()
    }
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> Vec<Token> {
        let s = s.trim_end_matches(|c: char| c == '\n' || c == '\r');
        let mut tokens: Vec<Token> = BasicLexer {
            chars: s.chars().peekable(),
            statement_start: true,
            remark: false,
        }
        .collect();
        BasicLexer::trim_end(&mut tokens);
        tokens
    }

    fn trim_end(tokens: &mut Vec<Token>) {
        if let Some(Token::Whitespace(_)) = tokens.last() {
            tokens.pop();
        }
        if let Some(Token::Remark(_)) = tokens.last() {
            if let Some(Token::Remark(s)) = tokens.pop() {
                tokens.push(Token::Remark(s.trim_end().to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<Token> {
        lex(s)
            .into_iter()
            .filter(|t| !matches!(t, Token::Whitespace(_)))
            .collect()
    }

    #[test]
    fn test_line_with_let() {
        assert_eq!(
            words("10 LET x = 1.5"),
            vec![
                Token::Number("10".to_string()),
                Token::Word("LET".to_string()),
                Token::Word("x".to_string()),
                Token::Operator(Operator::Equal),
                Token::Number("1.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_whitespace_needed() {
        assert_eq!(
            words("a1*(b+2)"),
            vec![
                Token::Word("a1".to_string()),
                Token::Operator(Operator::Multiply),
                Token::LParen,
                Token::Word("b".to_string()),
                Token::Operator(Operator::Plus),
                Token::Number("2".to_string()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_exponent() {
        assert_eq!(words("1e5"), vec![Token::Number("1e5".to_string())]);
        assert_eq!(words("2.5E-3"), vec![Token::Number("2.5E-3".to_string())]);
        assert_eq!(
            words("2e"),
            vec![Token::Number("2".to_string()), Token::Word("e".to_string())]
        );
        assert_eq!(words(".5"), vec![Token::Number(".5".to_string())]);
    }

    #[test]
    fn test_remark_is_verbatim() {
        assert_eq!(
            words("20 rem  it's (all) \"fine\"  \r\n"),
            vec![
                Token::Number("20".to_string()),
                Token::Word("rem".to_string()),
                Token::Remark("it's (all) \"fine\"".to_string()),
            ]
        );
    }

    #[test]
    fn test_rem_only_at_statement_start() {
        assert_eq!(
            words("x = rem"),
            vec![
                Token::Word("x".to_string()),
                Token::Operator(Operator::Equal),
                Token::Word("rem".to_string()),
            ]
        );
    }

    #[test]
    fn test_string() {
        assert_eq!(
            words("PRINT \"a, b\", 1"),
            vec![
                Token::Word("PRINT".to_string()),
                Token::String("a, b".to_string()),
                Token::Comma,
                Token::Number("1".to_string()),
            ]
        );
        assert_eq!(
            words("PRINT \"open"),
            vec![
                Token::Word("PRINT".to_string()),
                Token::String("open".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            words("x := 1"),
            vec![
                Token::Word("x".to_string()),
                Token::Unknown(":".to_string()),
                Token::Operator(Operator::Equal),
                Token::Number("1".to_string()),
            ]
        );
    }

    #[test]
    fn test_display_round_trips_source() {
        let s = "10  IF x<3 THEN 40";
        let rebuilt: String = lex(s).iter().map(|t| t.to_string()).collect();
        assert_eq!(rebuilt, s);
    }
}
