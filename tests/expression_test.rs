mod common;
use common::*;
use linebasic::mach::{Val, ValType};

#[test]
fn test_literals() {
    assert_eq!(exec("print 42"), "42\n");
    assert_eq!(exec("print 3.25"), "3.25\n");
    assert_eq!(exec("print 007.50"), "7.5\n");
    assert_eq!(exec(r#"print "tab\there""#), "tab\there\n");
    assert_eq!(exec(r#"print "say \"hi\"""#), "say \"hi\"\n");
}

#[test]
fn test_text_dominates() {
    assert_eq!(exec(r#"print "a" + 1"#), "a1\n");
    assert_eq!(exec(r#"print 1 + "a""#), "1a\n");
    assert_eq!(exec(r#"print 1 + "2""#), "12\n");
    assert_eq!(exec(r#"print "1" = 1"#), "1\n");
    assert_eq!(
        exec(r#"print "2" * 3"#),
        "?TYPE MISMATCH IN 1; ONLY + = <> WORK ON STRINGS\n"
    );
}

#[test]
fn test_precedence() {
    assert_eq!(exec("print 1 + 2 * 3"), "7\n");
    assert_eq!(exec("print (1 + 2) * 3"), "9\n");
    assert_eq!(exec("print 2 * 3 ^ 2"), "18\n");
    assert_eq!(exec("print 1 + 1 = 2 and 3 > 2"), "1\n");
    assert_eq!(exec("print 1 < 2 or 1 / 0"), "1\n");
}

#[test]
fn test_equal_precedence_groups_right() {
    assert_eq!(exec("print 10 - 4 - 3"), "9\n");
    assert_eq!(exec("print 2 ^ 3 ^ 2"), "512\n");
    assert_eq!(exec("print (10 - 4) - 3"), "3\n");
}

#[test]
fn test_unary() {
    assert_eq!(exec("print -2 ^ 2"), "4\n");
    assert_eq!(exec("print 5 - -2"), "7\n");
    assert_eq!(exec("print not 1"), "0\n");
    assert_eq!(exec("print not 0 = 1"), "1\n");
}

#[test]
fn test_comparisons() {
    let program = r#"
print 1 < 2
print 2 <= 2
print 3 > 4
print 4 >= 5
print 1 <> 2
print "abc" = "abc"
print "abc" <> "abd"
"#;
    assert_eq!(exec(program), "1\n1\n0\n0\n1\n1\n1\n");
}

#[test]
fn test_divide_by_zero() {
    assert_eq!(exec("print 1 / 0"), "inf\n");
    assert_eq!(exec("print -1 / 0"), "-inf\n");
}

#[test]
fn test_number_text_round_trip() {
    for n in &[0.0, 1.0, -7.0, 123456789.0, 0.1, 1.0 / 3.0, 1e21, 2.5e-8] {
        let text = Val::Number(*n).convert(ValType::String).unwrap();
        assert_eq!(text.convert(ValType::Number).unwrap(), Val::Number(*n));
    }
    assert_eq!(exec("x = 1 / 3\ny = num(str(x))\nassert x = y\nprint y"), "0.3333333333333333\n");
}

#[test]
fn test_malformed_number_text() {
    assert_eq!(
        exec(r#"print "x" - 1"#),
        "?TYPE MISMATCH IN 1; ONLY + = <> WORK ON STRINGS\n"
    );
    assert_eq!(
        exec(r#"print num("1.2.3")"#),
        "?TYPE MISMATCH IN 1; MALFORMED NUMBER \"1.2.3\"\n"
    );
}

#[test]
fn test_expected_expression() {
    assert_eq!(exec("print 1 +"), "?SYNTAX ERROR IN 1; EXPECTED EXPRESSION GOT END OF FILE\n");
    assert_eq!(exec("print (1"), "?SYNTAX ERROR IN 1; EXPECTED ) GOT END OF FILE\n");
}
