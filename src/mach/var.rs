use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// One flat table for the whole program. Names are case-sensitive.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<String, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn get(&self, var_name: &str) -> Option<&Val> {
        self.vars.get(var_name)
    }

    pub fn fetch(&self, var_name: &str) -> Result<Val> {
        match self.vars.get(var_name) {
            Some(val) => Ok(val.clone()),
            None => Err(error!(UndeclaredVariable; var_name)),
        }
    }

    pub fn store(&mut self, var_name: &str, value: Val) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.to_string(), value);
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_case_sensitive() {
        let mut v = Var::new();
        v.store("a", Val::from(1.0));
        v.store("A", Val::from("x"));
        assert_eq!(v.fetch("a").unwrap(), Val::from(1.0));
        assert_eq!(v.fetch("A").unwrap(), Val::from("x"));
        assert_eq!(v.get("b"), None);
    }

    #[test]
    fn test_undeclared() {
        let v = Var::new();
        let e = v.fetch("nope").unwrap_err();
        assert_eq!(e.code(), ErrorCode::UndeclaredVariable);
        assert_eq!(e.text(), "nope");
    }
}
