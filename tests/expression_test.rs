mod common;
use common::*;
use minibasic::lang::{lex, parse_expression, ErrorCode};
use minibasic::mach::State;

fn eval(s: &str, state: &mut State) -> Result<f64, minibasic::lang::Error> {
    parse_expression(&lex(s))?.eval(state)
}

#[test]
fn test_precedence() {
    let mut state = State::new();
    assert_eq!(eval("2+3*4", &mut state), Ok(14.0));
    assert_eq!(eval("(2+3)*4", &mut state), Ok(20.0));
    assert_eq!(eval("2*3+4*5", &mut state), Ok(26.0));
}

#[test]
fn test_left_associative() {
    let mut state = State::new();
    assert_eq!(eval("10-3-2", &mut state), Ok(5.0));
    assert_eq!(eval("64/4/2", &mut state), Ok(8.0));
    assert_eq!(eval("10-(3-2)", &mut state), Ok(9.0));
}

#[test]
fn test_unary_minus() {
    let mut state = State::new();
    assert_eq!(eval("-5+3", &mut state), Ok(-2.0));
    assert_eq!(eval("-(2+3)", &mut state), Ok(-5.0));
    assert_eq!(eval("3*-2", &mut state), Ok(-6.0));
    assert_eq!(eval("-2*3-1", &mut state), Ok(-7.0));
    assert_eq!(eval("8/-2*4", &mut state), Ok(-16.0));
    assert_eq!(eval("2--3", &mut state), Ok(5.0));
}

#[test]
fn test_unary_minus_keeps_left_grouping() {
    let mut r = runtime(&["10 PRINT 8/-2*4", "20 PRINT 8/(-2)*4", "30 PRINT 2--3"]);
    assert_eq!(exec(&mut r), "-16\n-16\n5\n");
}

#[test]
fn test_assignment_then_use() {
    let mut state = State::new();
    assert_eq!(eval("x = 5", &mut state), Ok(5.0));
    assert_eq!(eval("x + 1", &mut state), Ok(6.0));
}

#[test]
fn test_undefined_variable() {
    let mut state = State::new();
    let e = eval("y", &mut state).unwrap_err();
    assert!(e.is(ErrorCode::UndefinedVariable));
    assert_eq!(e.to_string(), "UNDEFINED VARIABLE; y");
}

#[test]
fn test_syntax_errors() {
    let mut state = State::new();
    assert!(eval("(1", &mut state).unwrap_err().is(ErrorCode::SyntaxError));
    assert!(eval("1)", &mut state)
        .unwrap_err()
        .is(ErrorCode::ExtraneousToken));
    assert!(eval("1 +", &mut state).unwrap_err().is(ErrorCode::SyntaxError));
    assert!(eval("x < 1", &mut state)
        .unwrap_err()
        .is(ErrorCode::ExtraneousToken));
}

#[test]
fn test_print_number_format() {
    let mut r = runtime(&[
        "10 PRINT 1/4, 2/3, 1e6, 123456, 0.00001",
        "20 PRINT 1/0, -1/0",
    ]);
    assert_eq!(
        exec(&mut r),
        "0.25 0.666667 1e+06 123456 1e-05\ninf -inf\n"
    );
}

#[test]
fn test_assignment_inside_print() {
    let mut r = runtime(&["10 PRINT a = b = 3, a + b"]);
    assert_eq!(exec(&mut r), "3 6\n");
}
