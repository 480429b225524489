mod common;
use common::*;

#[test]
fn test_runs_until_condition_holds() {
    let program = r#"
j = 0
repeat
    let j = j + 1
    print j
until j = 3
print "done"
"#;
    assert_eq!(exec(program), "1\n2\n3\ndone\n");
}

#[test]
fn test_runs_at_least_once() {
    assert_eq!(exec("repeat\nprint 1\nuntil 1"), "1\n");
}

#[test]
fn test_single_line() {
    assert_eq!(exec("n = 0\nrepeat: n = n + 2: until n >= 6\nprint n"), "6\n");
    assert_eq!(exec("n = 0\nrepeat n = n + 1: until n = 4\nprint n"), "4\n");
}

#[test]
fn test_nested() {
    let program = r#"
i = 0
repeat
    i = i + 1
    j = 0
    repeat
        j = j + 1
    until j = i
    print i + ":" + j
until i = 3
"#;
    assert_eq!(exec(program), "1:1\n2:2\n3:3\n");
}

#[test]
fn test_with_if_inside() {
    let program = r#"
j = 0
repeat
    j = j + 1
    if j = 2 then
        print "two"
    else
        print j
    endif
until j = 3
"#;
    assert_eq!(exec(program), "1\ntwo\n3\n");
}

#[test]
fn test_until_without_repeat() {
    assert_eq!(exec("print 1\nuntil 1"), "1\n?UNTIL WITHOUT REPEAT IN 2\n");
}

#[test]
fn test_restart_with_goto() {
    let program = r#"
n = 0
again:
repeat
    n = n + 1
    if n < 70000 then goto again endif
until 1
print n
"#;
    assert_eq!(exec(program), "70000\n");
}

#[test]
fn test_goto_out_of_inner_block() {
    let program = r#"
i = 0
n = 0
repeat
    i = i + 1
    repeat
        n = n + 1
        if n > 50 then end endif
        goto cont
    until 0
cont:
until i >= 3
print i + ":" + n
"#;
    assert_eq!(exec(program), "3:3\n");
}
