use super::{Val, ValType};
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// A host callable. Arguments arrive evaluated, left to right.
pub type Builtin = Box<dyn FnMut(Vec<Val>) -> Result<Val>>;

/// ## Function registry

#[derive(Default)]
pub struct Function {
    builtins: HashMap<String, Builtin>,
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.builtins.keys().collect();
        names.sort();
        write!(f, "Function {:?}", names)
    }
}

impl Function {
    pub fn new() -> Function {
        Function::default()
    }

    /// Registry with `str`, `num`, `abs`, `min`, `max` and `rnd`.
    pub fn with_builtins() -> Function {
        let mut f = Function::new();
        f.insert("str", Box::new(Function::str));
        f.insert("num", Box::new(Function::num));
        f.insert("abs", Box::new(Function::abs));
        f.insert("min", Box::new(Function::min));
        f.insert("max", Box::new(Function::max));
        f.insert("rnd", Box::new(Function::rnd));
        f
    }

    /// Last registration of a name wins.
    pub fn insert(&mut self, name: &str, function: Builtin) {
        self.builtins.insert(name.to_string(), function);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }

    pub fn call(&mut self, name: &str, args: Vec<Val>) -> Result<Val> {
        match self.builtins.get_mut(name) {
            Some(function) => function(args),
            None => Err(error!(UndeclaredVariable; name)),
        }
    }

    fn arity(args: Vec<Val>, n: usize) -> Result<Vec<Val>> {
        if args.len() != n {
            return Err(error!(IllegalFunctionCall; format!(
                "EXPECTED {} ARGUMENTS GOT {}",
                n,
                args.len()
            )));
        }
        Ok(args)
    }

    fn number(val: &Val) -> Result<f64> {
        match val {
            Val::Number(n) => Ok(*n),
            Val::String(_) => Err(error!(TypeMismatch; "NUMBER ARGUMENT REQUIRED")),
        }
    }

    pub fn str(args: Vec<Val>) -> Result<Val> {
        let mut args = Function::arity(args, 1)?;
        args.remove(0).convert(ValType::String)
    }

    pub fn num(args: Vec<Val>) -> Result<Val> {
        let mut args = Function::arity(args, 1)?;
        args.remove(0).convert(ValType::Number)
    }

    pub fn abs(args: Vec<Val>) -> Result<Val> {
        let args = Function::arity(args, 1)?;
        Ok(Val::Number(Function::number(&args[0])?.abs()))
    }

    pub fn min(args: Vec<Val>) -> Result<Val> {
        let args = Function::arity(args, 2)?;
        let (a, b) = (Function::number(&args[0])?, Function::number(&args[1])?);
        Ok(Val::Number(a.min(b)))
    }

    pub fn max(args: Vec<Val>) -> Result<Val> {
        let args = Function::arity(args, 2)?;
        let (a, b) = (Function::number(&args[0])?, Function::number(&args[1])?);
        Ok(Val::Number(a.max(b)))
    }

    pub fn rnd(args: Vec<Val>) -> Result<Val> {
        Function::arity(args, 0)?;
        Ok(Val::Number(rand::random::<f64>()))
    }
}
