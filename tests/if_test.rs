mod common;
use common::*;

#[test]
fn test_single_line() {
    assert_eq!(exec(r#"if 1=1 then print "x" else print "y" endif"#), "x\n");
    assert_eq!(exec(r#"if 1=2 then print "x" else print "y" endif"#), "y\n");
    assert_eq!(exec(r#"if 1 then print "x" endif: print "z""#), "x\nz\n");
    assert_eq!(exec(r#"if 0 then print "x" endif: print "z""#), "z\n");
}

#[test]
fn test_multi_line() {
    let program = r#"
a = 10
if a = 10 then
    print "true"
else
    print "false"
endif
if a <> 10 then
    print "true"
else
    print "false"
endif
print "done"
"#;
    assert_eq!(exec(program), "true\nfalse\ndone\n");
}

#[test]
fn test_without_else() {
    let program = "if 0 then\nprint 1\nendif\nprint 2";
    assert_eq!(exec(program), "2\n");
}

#[test]
fn test_nested() {
    let program = r#"
for a = 0 to 1
    for b = 0 to 1
        if a then
            if b then
                print "both"
            else
                print "a"
            endif
        else
            if b then print "b" else print "none" endif
        endif
    next b
next a
"#;
    assert_eq!(exec(program), "none\nb\na\nboth\n");
}

#[test]
fn test_condition_compares_with_zero() {
    assert_eq!(exec(r#"if "yes" then print 1 else print 0 endif"#), "1\n");
    assert_eq!(exec(r#"if "0" then print 1 else print 0 endif"#), "0\n");
    assert_eq!(exec("if 0.5 then print 1 else print 0 endif"), "1\n");
}

#[test]
fn test_if_without_endif() {
    assert_eq!(exec("print 1\nif 0 then\nprint 2"), "1\n?IF WITHOUT ENDIF IN 2\n");
    assert_eq!(exec("if 1 then\nprint 2"), "2\n");
}

#[test]
fn test_else_without_if() {
    assert_eq!(exec("print 1\nelse\nprint 2"), "1\n?ELSE WITHOUT IF IN 2\n");
}

#[test]
fn test_stray_endif() {
    assert_eq!(exec("endif\nprint 1"), "1\n");
}

#[test]
fn test_missing_then() {
    assert_eq!(exec("if 1 print 1"), "?SYNTAX ERROR IN 1; EXPECTED THEN GOT PRINT\n");
}
