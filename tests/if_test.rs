mod common;
use common::*;

#[test]
fn test_if_taken() {
    let mut r = runtime(&["10 LET x = 5", "20 IF x > 3 THEN 40", "30 PRINT 0", "40 PRINT 1"]);
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_if_not_taken() {
    let mut r = runtime(&["10 LET x = 2", "20 IF x > 3 THEN 40", "30 PRINT 0", "40 PRINT 1"]);
    assert_eq!(exec(&mut r), "0\n1\n");
}

#[test]
fn test_comparisons() {
    let mut r = runtime(&[
        "10 IF 1 = 1 THEN 30",
        "20 PRINT \"BAD EQUAL\"",
        "30 IF 1 < 2 THEN 50",
        "40 PRINT \"BAD LESS\"",
        "50 IF 1 > 2 THEN 70",
        "60 PRINT \"GOOD\"",
        "70 END",
    ]);
    assert_eq!(exec(&mut r), "GOOD\n");
}

#[test]
fn test_expressions_on_both_sides() {
    let mut r = runtime(&["10 a = 3", "20 IF a * 2 = a + 3 THEN 40", "30 PRINT 0", "40 PRINT 1"]);
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_jump_backwards() {
    let mut r = runtime(&[
        "10 n = 3",
        "20 PRINT n",
        "30 n = n - 1",
        "40 IF n > 0 THEN 20",
    ]);
    assert_eq!(exec(&mut r), "3\n2\n1\n");
}

#[test]
fn test_both_sides_always_evaluated() {
    let mut r = runtime(&["10 IF 1 = unset THEN 10", "20 PRINT 1"]);
    assert_eq!(exec(&mut r), "UNDEFINED VARIABLE IN 10; unset\n");
    let mut r = runtime(&["10 IF 1 > (a = 5) THEN 30", "20 PRINT a", "30 END"]);
    assert_eq!(exec(&mut r), "5\n");
}

#[test]
fn test_if_to_missing_line() {
    let mut r = runtime(&["10 IF 1 < 2 THEN 100"]);
    assert_eq!(exec(&mut r), "UNDEFINED LINE IN 10; 100\n");
}
