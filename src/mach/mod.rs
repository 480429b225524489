/*!
## Rust Machine Module

This Rust module executes a lexed BASIC program by moving a cursor over
its tokens. Values, variables, operators, the host function registry and
the jump tables live here.

*/

mod eval;
mod function;
mod link;
mod operation;
mod runtime;
mod stack;
mod val;
mod var;

pub use function::Builtin;
pub use function::Function;
pub use link::Link;
pub use operation::Operation;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use val::ValType;
pub use var::Var;
