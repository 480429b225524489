use super::Operation;
use crate::error;
use crate::lang::{token::Literal, token::Operator, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## Run-time value
///
/// Numbers are IEEE doubles. When an operation mixes the two kinds,
/// the number is converted to text, never the other way around.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    String(String),
}

/// Ordered so that the dominant type of a mixed operation is the greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValType {
    Number,
    String,
}

impl Val {
    pub fn val_type(&self) -> ValType {
        match self {
            Val::Number(_) => ValType::Number,
            Val::String(_) => ValType::String,
        }
    }

    pub fn convert(self, to: ValType) -> Result<Val> {
        match (self, to) {
            (Val::Number(n), ValType::String) => Ok(Val::String(n.to_string())),
            (Val::String(s), ValType::Number) => match Val::parse_number(&s) {
                Some(n) => Ok(Val::Number(n)),
                None => Err(error!(TypeMismatch; format!("MALFORMED NUMBER {:?}", s))),
            },
            (val, _) => Ok(val),
        }
    }

    /// Decimal notation only; `inf` and `nan` stay text.
    pub fn parse_number(s: &str) -> Option<f64> {
        let s = s.trim();
        if s.is_empty()
            || !s
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
        {
            return None;
        }
        s.parse::<f64>().ok()
    }

    /// A line typed at an `INPUT` prompt.
    pub fn from_input(s: String) -> Val {
        match Val::parse_number(&s) {
            Some(n) => Val::Number(n),
            None => Val::String(s),
        }
    }

    pub fn unary(self, op: &Operator) -> Result<Val> {
        Operation::unary(op, self)
    }

    pub fn binary(self, rhs: Val, op: &Operator) -> Result<Val> {
        Operation::binary(op, self, rhs)
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Val {
        Val::Number(n)
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Val {
        Val::Number(if b { 1.0 } else { 0.0 })
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Val {
        Val::String(s.to_string())
    }
}

impl From<String> for Val {
    fn from(s: String) -> Val {
        Val::String(s)
    }
}

impl From<&Literal> for Val {
    fn from(lit: &Literal) -> Val {
        match lit {
            Literal::Number(n) => Val::Number(*n),
            Literal::String(s) => Val::String(s.clone()),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Number(n) => write!(f, "{}", n),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}
