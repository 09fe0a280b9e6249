use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// The four supported operations. Selection is an exact, case-sensitive
/// match on the trimmed keyword; anything else is `InvalidOp`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Multiply,
    Divide,
}

/// Keyword outside the fixed set. Not a `CalcError`: the caller reports
/// it and exits normally.
#[derive(Debug, PartialEq, Eq)]
pub struct InvalidOp;

impl FromStr for Op {
    type Err = InvalidOp;

    fn from_str(s: &str) -> Result<Self, InvalidOp> {
        match s {
            "add" => Ok(Op::Add),
            "sub" => Ok(Op::Sub),
            "multiply" => Ok(Op::Multiply),
            "divide" => Ok(Op::Divide),
            _ => Err(InvalidOp),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let keyword = match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Multiply => "multiply",
            Op::Divide => "divide",
        };
        write!(f, "{}", keyword)
    }
}

impl Op {
    /// Arithmetic wraps on overflow. Division truncates toward zero and
    /// fails on a zero divisor instead of panicking.
    pub fn apply(self, x: i64, y: i64) -> Result<i64, CalcError> {
        let res = match self {
            Op::Add => x.wrapping_add(y),
            Op::Sub => x.wrapping_sub(y),
            Op::Multiply => x.wrapping_mul(y),
            Op::Divide => {
                if y == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                x.wrapping_div(y)
            }
        };
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_multiply() {
        assert_eq!(Op::Add.apply(3, 4).unwrap(), 7);
        assert_eq!(Op::Sub.apply(3, 4).unwrap(), -1);
        assert_eq!(Op::Multiply.apply(-3, 4).unwrap(), -12);
    }

    #[test]
    fn arithmetic_wraps() {
        assert_eq!(Op::Add.apply(i64::MAX, 1).unwrap(), i64::MIN);
        assert_eq!(Op::Sub.apply(i64::MIN, 1).unwrap(), i64::MAX);
        assert_eq!(Op::Multiply.apply(i64::MAX, 2).unwrap(), -2);
        assert_eq!(Op::Divide.apply(i64::MIN, -1).unwrap(), i64::MIN);
    }

    #[test]
    fn divide_truncates_toward_zero() {
        assert_eq!(Op::Divide.apply(10, 3).unwrap(), 3);
        assert_eq!(Op::Divide.apply(-7, 2).unwrap(), -3);
        assert_eq!(Op::Divide.apply(7, -2).unwrap(), -3);
    }

    #[test]
    fn divide_by_zero_fails() {
        for x in [0, 1, -5, i64::MAX] {
            assert!(matches!(
                Op::Divide.apply(x, 0),
                Err(CalcError::DivisionByZero)
            ));
        }
    }

    #[test]
    fn keyword_dispatch() {
        assert_eq!("add".parse::<Op>(), Ok(Op::Add));
        assert_eq!("sub".parse::<Op>(), Ok(Op::Sub));
        assert_eq!("multiply".parse::<Op>(), Ok(Op::Multiply));
        assert_eq!("divide".parse::<Op>(), Ok(Op::Divide));
    }

    #[test]
    fn keyword_is_exact_match() {
        for bad in ["", "ADD", "  add  ", "addition", "Divide", "square"] {
            assert_eq!(bad.parse::<Op>(), Err(InvalidOp));
        }
    }

    #[test]
    fn keyword_display() {
        assert_eq!(Op::Multiply.to_string(), "multiply");
    }
}
