use minibasic::lang::{lex, token::*};

fn tokens(s: &str) -> Vec<Token> {
    lex(s)
        .into_iter()
        .filter(|t| !matches!(t, Token::Whitespace(_)))
        .collect()
}

#[test]
fn test_comparison_operators() {
    assert_eq!(
        tokens("10 IF a<b THEN 20"),
        vec![
            Token::Number("10".to_string()),
            Token::Word("IF".to_string()),
            Token::Word("a".to_string()),
            Token::Operator(Operator::Less),
            Token::Word("b".to_string()),
            Token::Word("THEN".to_string()),
            Token::Number("20".to_string()),
        ]
    );
    assert_eq!(
        tokens("x>=1"),
        vec![
            Token::Word("x".to_string()),
            Token::Operator(Operator::Greater),
            Token::Operator(Operator::Equal),
            Token::Number("1".to_string()),
        ]
    );
}

#[test]
fn test_words_keep_case_and_digits() {
    assert_eq!(
        tokens("Total2=total2"),
        vec![
            Token::Word("Total2".to_string()),
            Token::Operator(Operator::Equal),
            Token::Word("total2".to_string()),
        ]
    );
}

#[test]
fn test_remark_after_line_number() {
    assert_eq!(
        tokens("100 REM x=1 : GOTO 10"),
        vec![
            Token::Number("100".to_string()),
            Token::Word("REM".to_string()),
            Token::Remark("x=1 : GOTO 10".to_string()),
        ]
    );
}

#[test]
fn test_remark_word_prefix_is_not_rem() {
    assert_eq!(
        tokens("remark = 1"),
        vec![
            Token::Word("remark".to_string()),
            Token::Operator(Operator::Equal),
            Token::Number("1".to_string()),
        ]
    );
}

#[test]
fn test_whitespace_widths() {
    assert_eq!(
        lex("a \t b"),
        vec![
            Token::Word("a".to_string()),
            Token::Whitespace(3),
            Token::Word("b".to_string()),
        ]
    );
    assert_eq!(lex("a   "), vec![Token::Word("a".to_string())]);
}
