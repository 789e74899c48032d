//! Dispatching an operation key to its arithmetic.

use super::Operation;
use thiserror::Error;

/// Why a calculation could not produce a value.
///
/// Front ends only ever show the message; they do not branch on the variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
    #[error("cannot divide by zero")]
    DivisionByZero,
}

/// Resolve `key` in the operation registry and apply it to `a` and `b`.
pub fn run_calculation(key: &str, a: f64, b: f64) -> Result<f64, CalcError> {
    let Some(op) = Operation::from_key(key) else {
        return Err(CalcError::UnknownOperation(key.to_string()));
    };
    calculate(op, a, b)
}

/// Apply an already resolved operation, guarding division by zero.
pub fn calculate(op: Operation, a: f64, b: f64) -> Result<f64, CalcError> {
    // -0.0 == 0.0, so both zeroes are rejected
    if op == Operation::Div && b == 0.0 {
        tracing::debug!(a, "rejected division by zero");
        return Err(CalcError::DivisionByZero);
    }

    let value = op.apply(a, b);
    tracing::debug!(op = op.key(), a, b, value, "calculated");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(run_calculation("add", 2.0, 3.0), Ok(5.0));
        assert_eq!(run_calculation("sub", 2.0, 3.0), Ok(-1.0));
        assert_eq!(run_calculation("mul", -4.0, 2.5), Ok(-10.0));
        assert_eq!(run_calculation("div", 1.0, 4.0), Ok(0.25));
    }

    #[test]
    fn test_float_semantics() {
        assert_eq!(run_calculation("add", 0.1, 0.2), Ok(0.1 + 0.2));
        assert_eq!(run_calculation("div", 1.0, 3.0), Ok(1.0 / 3.0));
    }

    #[test]
    fn test_division_by_zero() {
        let err = run_calculation("div", 4.0, 0.0).unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);
        assert!(err.to_string().contains("divide by zero"));

        assert_eq!(
            run_calculation("div", 4.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_zero_dividend_is_fine() {
        assert_eq!(run_calculation("div", 0.0, 5.0), Ok(0.0));
    }

    #[test]
    fn test_unknown_operation() {
        let err = run_calculation("pow", 2.0, 3.0).unwrap_err();
        assert_eq!(err, CalcError::UnknownOperation("pow".to_string()));
        assert_eq!(err.to_string(), "unknown operation: pow");
        assert!(run_calculation("", 1.0, 1.0).is_err());
    }

    #[test]
    fn test_calculate_resolved() {
        assert_eq!(calculate(Operation::Mul, 6.0, 7.0), Ok(42.0));
        assert_eq!(
            calculate(Operation::Div, 1.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }
}
