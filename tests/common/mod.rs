#![allow(dead_code)]
use linebasic::mach::Runtime;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Runs a program and returns each printed value on its own line,
/// followed by the error, if any, as `?<error>`.
pub fn exec(source: &str) -> String {
    exec_with_input(source, &[])
}

pub fn exec_with_input(source: &str, input: &[&str]) -> String {
    let mut runtime = Runtime::new(source);
    exec_runtime(&mut runtime, input)
}

pub fn exec_runtime(runtime: &mut Runtime, input: &[&str]) -> String {
    let out = Rc::new(RefCell::new(String::new()));
    let sink = out.clone();
    runtime.on_print(move |s: &str| {
        sink.borrow_mut().push_str(&format!("{}\n", s));
        Ok(())
    });
    let mut lines: VecDeque<String> = input.iter().map(|s| s.to_string()).collect();
    runtime.on_input(move || Ok(lines.pop_front().unwrap_or_default()));
    if let Err(error) = runtime.run() {
        out.borrow_mut().push_str(&format!("?{}\n", error));
    }
    let s = out.borrow().clone();
    s
}
