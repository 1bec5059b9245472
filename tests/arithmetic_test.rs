use mk52::lang::Error;
use mk52::mach::{
    Operation, Val, HUGE_NEGATIVE_AS_REAL, HUGE_NEGATIVE_INTEGER, HUGE_POSITIVE_AS_REAL,
    HUGE_POSITIVE_INTEGER,
};
use proptest::prelude::*;

fn integer() -> impl Strategy<Value = i64> {
    prop_oneof![
        HUGE_NEGATIVE_INTEGER..=HUGE_POSITIVE_INTEGER,
        -3_000_000_000i64..=3_000_000_000,
        Just(HUGE_POSITIVE_INTEGER),
        Just(HUGE_NEGATIVE_INTEGER),
    ]
}

fn expected(exact: i128) -> Val {
    if exact > HUGE_POSITIVE_INTEGER as i128 {
        Val::Real(HUGE_POSITIVE_AS_REAL)
    } else if exact < HUGE_NEGATIVE_INTEGER as i128 {
        Val::Real(HUGE_NEGATIVE_AS_REAL)
    } else {
        Val::Integer(exact as i64)
    }
}

fn check(result: Result<Val, Error>, exact: i128) -> Result<(), TestCaseError> {
    let result = result.map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert_eq!(result, expected(exact));
    if exact.abs() > HUGE_POSITIVE_INTEGER as i128 {
        prop_assert!(result.is_real());
        let sign = result.as_f64().map(f64::signum);
        prop_assert_eq!(sign, Some(if exact > 0 { 1.0 } else { -1.0 }));
    }
    Ok(())
}

proptest! {
    #[test]
    fn sum_saturates_never_wraps(a in integer(), b in integer()) {
        let exact = a as i128 + b as i128;
        check(Operation::sum(Val::Integer(a), Val::Integer(b)), exact)?;
    }

    #[test]
    fn subtract_saturates_never_wraps(a in integer(), b in integer()) {
        let exact = a as i128 - b as i128;
        check(Operation::subtract(Val::Integer(a), Val::Integer(b)), exact)?;
    }

    #[test]
    fn multiply_saturates_never_wraps(a in integer(), b in integer()) {
        let exact = a as i128 * b as i128;
        check(Operation::multiply(Val::Integer(a), Val::Integer(b)), exact)?;
    }
}

#[test]
fn test_sum_at_the_threshold() {
    let top = Val::Integer(HUGE_POSITIVE_INTEGER);
    assert_eq!(Operation::sum(top, Val::Integer(0)), Ok(top));
    assert_eq!(
        Operation::sum(top, Val::Integer(1)),
        Ok(Val::Real(HUGE_POSITIVE_AS_REAL))
    );
}
