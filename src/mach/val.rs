use crate::lang::lex::Number;
use std::cmp::Ordering;

pub const HUGE_POSITIVE_INTEGER: i64 = 9_000_000_000_000_000_000;
pub const HUGE_NEGATIVE_INTEGER: i64 = -9_000_000_000_000_000_000;
pub const HUGE_POSITIVE_AS_REAL: f64 = 9e18;
pub const HUGE_NEGATIVE_AS_REAL: f64 = -9e18;

/// ## Numeric value
///
/// `Empty` is an unset slot. It propagates through arithmetic.
/// Integers never wrap: a result past ±9×10¹⁸ becomes the Real
/// sentinel of the same sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Val {
    Empty,
    Integer(i64),
    Real(f64),
}

impl Default for Val {
    fn default() -> Val {
        Val::Empty
    }
}

impl Val {
    /// Integer result with the saturation contract applied.
    pub fn saturate(n: i128) -> Val {
        if n > HUGE_POSITIVE_INTEGER as i128 {
            Val::Real(HUGE_POSITIVE_AS_REAL)
        } else if n < HUGE_NEGATIVE_INTEGER as i128 {
            Val::Real(HUGE_NEGATIVE_AS_REAL)
        } else {
            Val::Integer(n as i64)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Val::Empty)
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Val::Real(_))
    }

    /// Truncates a Real when it fits, otherwise saturates to the
    /// integer sentinel of the same sign. NaN has no integer value.
    pub fn to_integer(self) -> Val {
        match self {
            Val::Real(r) => {
                if r.is_nan() {
                    Val::Empty
                } else if r >= HUGE_POSITIVE_AS_REAL {
                    Val::Integer(HUGE_POSITIVE_INTEGER)
                } else if r <= HUGE_NEGATIVE_AS_REAL {
                    Val::Integer(HUGE_NEGATIVE_INTEGER)
                } else {
                    Val::Integer(r.trunc() as i64)
                }
            }
            v => v,
        }
    }

    pub fn to_real(self) -> Val {
        match self {
            Val::Integer(n) => Val::Real(n as f64),
            v => v,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Val::Empty => None,
            Val::Integer(n) => Some(n as f64),
            Val::Real(r) => Some(r),
        }
    }

    /// Empty sorts below every number.
    pub fn compare(&self, other: &Val) -> Ordering {
        use Val::*;
        match (self, other) {
            (Empty, Empty) => Ordering::Equal,
            (Empty, _) => Ordering::Less,
            (_, Empty) => Ordering::Greater,
            (Integer(l), Integer(r)) => l.cmp(r),
            (l, r) => {
                let (l, r) = (l.as_f64().unwrap_or(0.0), r.as_f64().unwrap_or(0.0));
                l.partial_cmp(&r).unwrap_or(Ordering::Equal)
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        match *self {
            Val::Empty => false,
            Val::Integer(n) => n == 0,
            Val::Real(r) => r == 0.0,
        }
    }
}

impl From<Number> for Val {
    fn from(number: Number) -> Val {
        match number {
            Number::Integer(n) => Val::saturate(n),
            Number::Real(r) => Val::Real(r),
        }
    }
}

impl From<i64> for Val {
    fn from(n: i64) -> Val {
        Val::saturate(n as i128)
    }
}

impl From<f64> for Val {
    fn from(r: f64) -> Val {
        Val::Real(r)
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Val::Empty => Ok(()),
            Val::Integer(n) => write!(f, "{}", n),
            Val::Real(r) => {
                let a = r.abs();
                if a >= 1e15 || (a != 0.0 && a < 1e-9) {
                    write!(f, "{:E}", r)
                } else if r == r.trunc() {
                    write!(f, "{}.", r)
                } else {
                    write!(f, "{}", r)
                }
            }
        }
    }
}
