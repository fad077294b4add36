//! Checked signed 64-bit arithmetic; every out-of-range result is reported
//! instead of wrapping.

use crate::error::{EvalError, Result};

pub fn add(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b).ok_or(EvalError::Overflow)
}

pub fn subtract(a: i64, b: i64) -> Result<i64> {
    a.checked_sub(b).ok_or(EvalError::Overflow)
}

pub fn multiply(a: i64, b: i64) -> Result<i64> {
    a.checked_mul(b).ok_or(EvalError::Overflow)
}

/// Truncating integer division, toward zero.
pub fn divide(a: i64, b: i64) -> Result<i64> {
    match a.checked_div(b) {
        Some(quotient) => Ok(quotient),
        None if b == 0 => Err(EvalError::DivideByZero),
        None => Err(EvalError::Overflow),
    }
}

/// Iterated multiplication; the exponent must be non-negative.
pub fn power(base: i64, exponent: i64) -> Result<i64> {
    if exponent < 0 {
        return Err(EvalError::NegativeExponent);
    }
    let mut result: i64 = 1;
    for _ in 0..exponent {
        result = result.checked_mul(base).ok_or(EvalError::Overflow)?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn add_overflows_exactly_at_the_boundary() {
        assert_eq!(add(i64::MAX - 1, 1), Ok(i64::MAX));
        assert_eq!(add(i64::MAX, 1), Err(EvalError::Overflow));
        assert_eq!(add(i64::MIN + 1, -1), Ok(i64::MIN));
        assert_eq!(add(i64::MIN, -1), Err(EvalError::Overflow));
    }

    #[test]
    fn subtract_overflows_exactly_at_the_boundary() {
        assert_eq!(subtract(i64::MIN + 1, 1), Ok(i64::MIN));
        assert_eq!(subtract(i64::MIN, 1), Err(EvalError::Overflow));
        assert_eq!(subtract(i64::MAX - 1, -1), Ok(i64::MAX));
        assert_eq!(subtract(i64::MAX, -1), Err(EvalError::Overflow));
    }

    #[test]
    fn subtracting_the_minimum_does_not_negate_it_first() {
        assert_eq!(subtract(0, i64::MIN), Err(EvalError::Overflow));
        assert_eq!(subtract(-1, i64::MIN), Ok(i64::MAX));
    }

    #[test]
    fn multiply_covers_the_minimum_value_cases() {
        assert_eq!(multiply(i64::MIN, -1), Err(EvalError::Overflow));
        assert_eq!(multiply(-1, i64::MIN), Err(EvalError::Overflow));
        assert_eq!(multiply(i64::MIN, 0), Ok(0));
        assert_eq!(multiply(0, i64::MIN), Ok(0));
        assert_eq!(multiply(i64::MIN, 1), Ok(i64::MIN));
        assert_eq!(multiply(i64::MAX, 2), Err(EvalError::Overflow));
    }

    #[test]
    fn divide_truncates_toward_zero() {
        assert_eq!(divide(-7, 2), Ok(-3));
        assert_eq!(divide(7, -2), Ok(-3));
        assert_eq!(divide(7, 2), Ok(3));
    }

    #[test]
    fn divide_by_zero_is_reported() {
        assert_eq!(divide(8, 0), Err(EvalError::DivideByZero));
        assert_eq!(divide(0, 0), Err(EvalError::DivideByZero));
    }

    #[test]
    fn dividing_the_minimum_by_negative_one_overflows() {
        assert_eq!(divide(i64::MIN, -1), Err(EvalError::Overflow));
        assert_eq!(divide(i64::MIN, 1), Ok(i64::MIN));
    }

    #[parameterized(base = {5, 0, -5, 1, i64::MAX, i64::MIN})]
    fn power_with_negative_exponent_is_reported_for_any_base(base: i64) {
        assert_eq!(power(base, -1), Err(EvalError::NegativeExponent));
        assert_eq!(power(base, i64::MIN), Err(EvalError::NegativeExponent));
    }

    #[test]
    fn power_of_zero_exponent_is_one() {
        assert_eq!(power(5, 0), Ok(1));
        assert_eq!(power(0, 0), Ok(1));
        assert_eq!(power(-5, 0), Ok(1));
    }

    #[test]
    fn power_multiplies_iteratively() {
        assert_eq!(power(2, 10), Ok(1024));
        assert_eq!(power(-2, 3), Ok(-8));
        assert_eq!(power(0, 5), Ok(0));
        assert_eq!(power(2, 62), Ok(4_611_686_018_427_387_904));
    }

    #[test]
    fn power_overflows_at_the_first_excessive_product() {
        assert_eq!(power(2, 63), Err(EvalError::Overflow));
        assert_eq!(power(3, 40), Err(EvalError::Overflow));
        assert_eq!(power(i64::MAX, 2), Err(EvalError::Overflow));
    }
}
