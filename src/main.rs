//! # linebasic
//!
//! Runs a BASIC program from a file.
//!

mod term;

fn main() {
    term::main()
}
