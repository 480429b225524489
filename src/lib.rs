//! # linebasic
//!
//! A small BASIC for scripts and for embedding in other programs.
//!
//! Install with `cargo install linebasic` then run a program from a file.
//! ```text
//! $ linebasic hello.bas
//! Hello World
//! ```
//!
//! Programs have no line numbers. Jumps go to labels, blocks close with
//! `ENDIF`, `NEXT`, and `UNTIL`.
//! ```text
//! for i = 1 to 3
//!     if i = 2 then print "two" else print i endif
//! next i
//! ```
//!
//! Embedding takes a source string and whatever collaborators the host
//! wants to provide. Output is delivered line by line to `on_print`.
//! ```
//! use linebasic::mach::{Runtime, Val};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let out = Rc::new(RefCell::new(String::new()));
//! let sink = out.clone();
//! let mut runtime = Runtime::new("print twice(21)");
//! runtime.add_function("twice", |args: Vec<Val>| match args.as_slice() {
//!     [Val::Number(n)] => Ok(Val::Number(n * 2.0)),
//!     _ => Ok(Val::from("?")),
//! });
//! runtime.on_print(move |s: &str| {
//!     sink.borrow_mut().push_str(s);
//!     Ok(())
//! });
//! runtime.run().unwrap();
//! assert_eq!(*out.borrow(), "42");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
