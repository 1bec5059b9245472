use super::Val;
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleMode {
    Degrees,
    Radians,
    Grads,
}

impl Default for AngleMode {
    fn default() -> AngleMode {
        AngleMode::Degrees
    }
}

impl AngleMode {
    pub fn name(self) -> &'static str {
        match self {
            AngleMode::Degrees => "DEG",
            AngleMode::Radians => "RAD",
            AngleMode::Grads => "GRD",
        }
    }

    fn to_radians(self, a: f64) -> f64 {
        match self {
            AngleMode::Degrees => a.to_radians(),
            AngleMode::Radians => a,
            AngleMode::Grads => a * std::f64::consts::PI / 200.0,
        }
    }

    fn from_radians(self, r: f64) -> f64 {
        match self {
            AngleMode::Degrees => r.to_degrees(),
            AngleMode::Radians => r,
            AngleMode::Grads => r * 200.0 / std::f64::consts::PI,
        }
    }
}

/// Finite reals only; the machine has no infinities.
fn real(r: f64) -> Result<Val> {
    if r.is_nan() {
        Err(error!(IllegalFunctionCall))
    } else if r.is_infinite() {
        Err(error!(Overflow))
    } else {
        Ok(Val::Real(r))
    }
}

fn float(val: Val) -> f64 {
    val.as_f64().unwrap_or(0.0)
}

pub struct Operation {}

impl Operation {
    pub fn negate(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Empty => Ok(Empty),
            Integer(n) => Ok(Val::saturate(-(n as i128))),
            Real(r) => Ok(Real(-r)),
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Empty, _) | (_, Empty) => Ok(Empty),
            (Integer(l), Integer(r)) => Ok(Val::saturate(l as i128 + r as i128)),
            (l, r) => real(float(l) + float(r)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Empty, _) | (_, Empty) => Ok(Empty),
            (Integer(l), Integer(r)) => Ok(Val::saturate(l as i128 - r as i128)),
            (l, r) => real(float(l) - float(r)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Empty, _) | (_, Empty) => Ok(Empty),
            (Integer(l), Integer(r)) => Ok(Val::saturate(l as i128 * r as i128)),
            (l, r) => real(float(l) * float(r)),
        }
    }

    /// Integer division stays Integer only when it is exact.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Empty, _) | (_, Empty) => Ok(Empty),
            (Integer(_), Integer(0)) => Err(error!(DivisionByZero)),
            (Integer(l), Integer(r)) => {
                let (l, r) = (l as i128, r as i128);
                if l % r == 0 {
                    Ok(Val::saturate(l / r))
                } else {
                    real(l as f64 / r as f64)
                }
            }
            (l, r) => {
                if r.is_zero() {
                    Err(error!(DivisionByZero))
                } else {
                    real(float(l) / float(r))
                }
            }
        }
    }

    /// Integer-only Euclidean remainder, never negative.
    pub fn modulo(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Real(_), _) | (_, Real(_)) => Err(error!(TypeMismatch)),
            (Empty, _) | (_, Empty) => Ok(Empty),
            (Integer(_), Integer(0)) => Err(error!(DivisionByZero)),
            (Integer(l), Integer(r)) => Ok(Val::saturate((l as i128).rem_euclid(r as i128))),
        }
    }

    pub fn reciprocal(val: Val) -> Result<Val> {
        Operation::divide(Val::Integer(1), val)
    }

    pub fn square(val: Val) -> Result<Val> {
        Operation::multiply(val, val)
    }

    pub fn power(base: Val, exponent: Val) -> Result<Val> {
        use Val::*;
        match (base, exponent) {
            (Empty, _) | (_, Empty) => Ok(Empty),
            (Integer(b), Integer(e)) if e >= 0 && e <= u32::MAX as i64 => {
                match (b as i128).checked_pow(e as u32) {
                    Some(n) => Ok(Val::saturate(n)),
                    None if b < 0 && e % 2 == 1 => Ok(Val::saturate(i128::MIN)),
                    None => Ok(Val::saturate(i128::MAX)),
                }
            }
            (b, e) => {
                let (b, e) = (float(b), float(e));
                if b == 0.0 && e < 0.0 {
                    return Err(error!(DivisionByZero));
                }
                real(b.powf(e))
            }
        }
    }

    pub fn sqrt(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Empty => Ok(Empty),
            Integer(n) if n < 0 => Err(error!(IllegalFunctionCall)),
            Integer(n) => {
                let root = (n as f64).sqrt().round() as i64;
                if root.checked_mul(root) == Some(n) {
                    Ok(Integer(root))
                } else {
                    real((n as f64).sqrt())
                }
            }
            Real(r) if r < 0.0 => Err(error!(IllegalFunctionCall)),
            Real(r) => real(r.sqrt()),
        }
    }

    pub fn exp10(val: Val) -> Result<Val> {
        match val {
            Val::Integer(n) if (0..=18).contains(&n) => Ok(Val::Integer(10i64.pow(n as u32))),
            Val::Empty => Ok(Val::Empty),
            v => real(10f64.powf(float(v))),
        }
    }

    pub fn exp(val: Val) -> Result<Val> {
        Operation::real_fn(val, f64::exp)
    }

    pub fn lg(val: Val) -> Result<Val> {
        Operation::positive_fn(val, f64::log10)
    }

    pub fn ln(val: Val) -> Result<Val> {
        Operation::positive_fn(val, f64::ln)
    }

    pub fn sin(val: Val, mode: AngleMode) -> Result<Val> {
        Operation::real_fn(val, |a| mode.to_radians(a).sin())
    }

    pub fn cos(val: Val, mode: AngleMode) -> Result<Val> {
        Operation::real_fn(val, |a| mode.to_radians(a).cos())
    }

    pub fn tg(val: Val, mode: AngleMode) -> Result<Val> {
        Operation::real_fn(val, |a| mode.to_radians(a).tan())
    }

    pub fn arcsin(val: Val, mode: AngleMode) -> Result<Val> {
        Operation::unit_fn(val, |a| mode.from_radians(a.asin()))
    }

    pub fn arccos(val: Val, mode: AngleMode) -> Result<Val> {
        Operation::unit_fn(val, |a| mode.from_radians(a.acos()))
    }

    pub fn arctg(val: Val, mode: AngleMode) -> Result<Val> {
        Operation::real_fn(val, |a| mode.from_radians(a.atan()))
    }

    pub fn abs(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Empty => Ok(Empty),
            Integer(n) => Ok(Val::saturate((n as i128).abs())),
            Real(r) => Ok(Real(r.abs())),
        }
    }

    pub fn sign(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Empty => Ok(Empty),
            Integer(n) => Ok(Integer(n.signum())),
            Real(r) if r == 0.0 => Ok(Integer(0)),
            Real(r) => Ok(Integer(r.signum() as i64)),
        }
    }

    pub fn int_part(val: Val) -> Result<Val> {
        Ok(val.to_integer())
    }

    pub fn frac_part(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Empty => Ok(Empty),
            Integer(_) => Ok(Integer(0)),
            Real(r) => real(r - r.trunc()),
        }
    }

    pub fn max(lhs: Val, rhs: Val) -> Result<Val> {
        match lhs.compare(&rhs) {
            Ordering::Less => Ok(rhs),
            _ => Ok(lhs),
        }
    }

    fn real_fn<F: FnOnce(f64) -> f64>(val: Val, f: F) -> Result<Val> {
        match val {
            Val::Empty => Ok(Val::Empty),
            v => real(f(float(v))),
        }
    }

    fn positive_fn<F: FnOnce(f64) -> f64>(val: Val, f: F) -> Result<Val> {
        match val.as_f64() {
            None => Ok(Val::Empty),
            Some(a) if a <= 0.0 => Err(error!(IllegalFunctionCall)),
            Some(a) => real(f(a)),
        }
    }

    fn unit_fn<F: FnOnce(f64) -> f64>(val: Val, f: F) -> Result<Val> {
        match val.as_f64() {
            None => Ok(Val::Empty),
            Some(a) if !(-1.0..=1.0).contains(&a) => Err(error!(IllegalFunctionCall)),
            Some(a) => real(f(a)),
        }
    }
}
