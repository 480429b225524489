use super::Val;
use crate::error;
use crate::lang::{token::Operator, Error};

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn unary(op: &Operator, val: Val) -> Result<Val> {
        let n = match val {
            Val::Number(n) => n,
            Val::String(_) => {
                return Err(error!(TypeMismatch; "UNARY OPERATOR NEEDS A NUMBER"));
            }
        };
        match op {
            Operator::Plus => Ok(Val::Number(n)),
            Operator::Minus => Operation::negate(n),
            Operator::Not => Ok(Val::from(n == 0.0)),
            _ => Err(error!(InternalError; format!("{} IS NOT UNARY", op))),
        }
    }

    pub fn binary(op: &Operator, lhs: Val, rhs: Val) -> Result<Val> {
        let (lhs, rhs) = Operation::unify(lhs, rhs)?;
        use Operator::*;
        match op {
            Plus => Operation::sum(lhs, rhs),
            Equal => Operation::equal(lhs, rhs),
            NotEqual => Operation::not_equal(lhs, rhs),
            Minus => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
            Caret => Operation::power(lhs, rhs),
            Less => Operation::less(lhs, rhs),
            Greater => Operation::greater(lhs, rhs),
            LessEqual => Operation::less_equal(lhs, rhs),
            GreaterEqual => Operation::greater_equal(lhs, rhs),
            And => Operation::and(lhs, rhs),
            Or => Operation::or(lhs, rhs),
            Not => Err(error!(InternalError; "NOT IS NOT BINARY")),
        }
    }

    fn unify(lhs: Val, rhs: Val) -> Result<(Val, Val)> {
        let to = std::cmp::max(lhs.val_type(), rhs.val_type());
        Ok((lhs.convert(to)?, rhs.convert(to)?))
    }

    fn numbers(lhs: Val, rhs: Val) -> Result<(f64, f64)> {
        match (lhs, rhs) {
            (Val::Number(l), Val::Number(r)) => Ok((l, r)),
            _ => Err(error!(TypeMismatch; "ONLY + = <> WORK ON STRINGS")),
        }
    }

    pub fn negate(n: f64) -> Result<Val> {
        Ok(Val::Number(-n))
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(Number(l + r)),
            (String(l), String(r)) => Ok(String(l + &r)),
            _ => Err(error!(InternalError; "UNIFY FAILED")),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Val::Number(l - r))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Val::Number(l * r))
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Val::Number(l / r))
    }

    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Val::Number(l.powf(r)))
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from(Operation::equal_bool(lhs, rhs)?))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::from(!Operation::equal_bool(lhs, rhs)?))
    }

    fn equal_bool(lhs: Val, rhs: Val) -> Result<bool> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(l == r),
            (String(l), String(r)) => Ok(l == r),
            _ => Err(error!(InternalError; "UNIFY FAILED")),
        }
    }

    /// Compares with `0` the way `=` does, so the text `"0"` is zero.
    pub fn is_zero(val: Val) -> Result<bool> {
        let (val, zero) = Operation::unify(val, Val::Number(0.0))?;
        Operation::equal_bool(val, zero)
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Val::from(l < r))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Val::from(l > r))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Val::from(l <= r))
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Val::from(l >= r))
    }

    pub fn and(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Val::from(l != 0.0 && r != 0.0))
    }

    pub fn or(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(lhs, rhs)?;
        Ok(Val::from(l != 0.0 || r != 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn bin(op: Operator, l: Val, r: Val) -> Val {
        Operation::binary(&op, l, r).unwrap()
    }

    #[test]
    fn test_text_dominates() {
        assert_eq!(bin(Operator::Plus, "a".into(), 1.0.into()), Val::from("a1"));
        assert_eq!(bin(Operator::Plus, 1.0.into(), "a".into()), Val::from("1a"));
        assert_eq!(bin(Operator::Plus, 1.5.into(), 2.0.into()), Val::from(3.5));
    }

    #[test]
    fn test_equality_after_unify() {
        assert_eq!(bin(Operator::Equal, "1".into(), 1.0.into()), Val::from(1.0));
        assert_eq!(bin(Operator::Equal, "1.0".into(), 1.0.into()), Val::from(0.0));
        assert_eq!(bin(Operator::NotEqual, "x".into(), 0.0.into()), Val::from(1.0));
    }

    #[test]
    fn test_is_zero() {
        assert!(Operation::is_zero(0.0.into()).unwrap());
        assert!(Operation::is_zero("0".into()).unwrap());
        assert!(!Operation::is_zero("".into()).unwrap());
        assert!(!Operation::is_zero("abc".into()).unwrap());
        assert!(!Operation::is_zero(0.5.into()).unwrap());
    }

    #[test]
    fn test_numbers_required() {
        for op in &[Operator::Minus, Operator::Less, Operator::And, Operator::Caret] {
            let e = Operation::binary(op, "2".into(), 1.0.into()).unwrap_err();
            assert_eq!(e.code(), ErrorCode::TypeMismatch);
        }
        let e = Operation::unary(&Operator::Minus, "2".into()).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch);
    }

    #[test]
    fn test_logic() {
        assert_eq!(bin(Operator::And, 2.0.into(), 3.0.into()), Val::from(1.0));
        assert_eq!(bin(Operator::And, 2.0.into(), 0.0.into()), Val::from(0.0));
        assert_eq!(bin(Operator::Or, 0.0.into(), (-1.0).into()), Val::from(1.0));
        let not = Operation::unary(&Operator::Not, 0.0.into()).unwrap();
        assert_eq!(not, Val::from(1.0));
        let not = Operation::unary(&Operator::Not, 5.0.into()).unwrap();
        assert_eq!(not, Val::from(0.0));
    }

    #[test]
    fn test_divide_by_zero_is_infinite() {
        assert_eq!(bin(Operator::Divide, 1.0.into(), 0.0.into()), Val::from(f64::INFINITY));
    }
}
