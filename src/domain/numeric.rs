//! JSON number arithmetic
//!
//! Integers are combined exactly and stay integers while the result fits an `i64` or `u64`;
//! any float operand promotes the operation to `f64`.

use serde_json::{Number, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Int(i128),
    Float(f64),
}

impl Operand {
    /// Reads a JSON number. Booleans, strings and every other non-number yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let Value::Number(number) = value else {
            return None;
        };

        if let Some(int) = number.as_i64() {
            return Some(Self::Int(i128::from(int)));
        }
        if let Some(uint) = number.as_u64() {
            return Some(Self::Int(i128::from(uint)));
        }
        number.as_f64().map(Self::Float)
    }

    pub fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => left
                .checked_add(right)
                .map(Self::Int)
                .unwrap_or_else(|| Self::Float(left as f64 + right as f64)),
            (left, right) => Self::Float(left.as_f64() + right.as_f64()),
        }
    }

    pub fn sub(self, other: Self) -> Self {
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => left
                .checked_sub(right)
                .map(Self::Int)
                .unwrap_or_else(|| Self::Float(left as f64 - right as f64)),
            (left, right) => Self::Float(left.as_f64() - right.as_f64()),
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(int) => int as f64,
            Self::Float(float) => float,
        }
    }

    /// Converts back to a JSON number; `None` when the result is not finite.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Int(int) => {
                if let Ok(small) = i64::try_from(int) {
                    Some(Value::from(small))
                } else if let Ok(large) = u64::try_from(int) {
                    Some(Value::from(large))
                } else {
                    Number::from_f64(int as f64).map(Value::Number)
                }
            }
            Self::Float(float) => Number::from_f64(float).map(Value::Number),
        }
    }
}

/// Reads the first two elements of a sequence as numbers. Extra elements are ignored.
pub fn leading_pair(items: &[Value]) -> Option<(Operand, Operand)> {
    match items {
        [first, second, ..] => Some((Operand::from_value(first)?, Operand::from_value(second)?)),
        _ => None,
    }
}

pub fn total(items: &[Value]) -> Option<Operand> {
    items.iter().try_fold(Operand::Int(0), |acc, item| {
        Operand::from_value(item).map(|operand| acc.add(operand))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_stay_exact() {
        let sum = Operand::Int(2).add(Operand::Int(3));
        assert_eq!(sum.into_value(), Some(json!(5)));
    }

    #[test]
    fn mixed_operands_promote_to_float() {
        let sum = Operand::Int(2).add(Operand::Float(0.5));
        assert_eq!(sum.into_value(), Some(json!(2.5)));
    }

    #[test]
    fn integer_results_beyond_i64_use_u64() {
        let sum = Operand::Int(i128::from(i64::MAX)).add(Operand::Int(1));
        assert_eq!(sum.into_value(), Some(json!(9_223_372_036_854_775_808_u64)));
    }

    #[test]
    fn integer_results_beyond_u64_become_floats() {
        let sum = Operand::Int(i128::from(u64::MAX)).add(Operand::Int(i128::from(u64::MAX)));
        assert_eq!(sum.into_value(), Some(json!(u64::MAX as f64 * 2.0)));
    }

    #[test]
    fn negative_results_below_i64_become_floats() {
        let diff = Operand::Int(i128::from(i64::MIN)).sub(Operand::Int(1));
        assert_eq!(diff.into_value(), Some(json!(i64::MIN as f64 - 1.0)));
    }

    #[test]
    fn non_finite_results_have_no_json_form() {
        let sum = Operand::Float(f64::MAX).add(Operand::Float(f64::MAX));
        assert_eq!(sum.into_value(), None);
    }

    #[test]
    fn booleans_and_strings_are_not_numbers() {
        assert_eq!(Operand::from_value(&json!(true)), None);
        assert_eq!(Operand::from_value(&json!("1")), None);
        assert_eq!(Operand::from_value(&json!(null)), None);
    }

    #[test]
    fn leading_pair_needs_two_numbers() {
        assert!(leading_pair(&[json!(1)]).is_none());
        assert!(leading_pair(&[json!(1), json!("2")]).is_none());
        assert_eq!(
            leading_pair(&[json!(1), json!(2), json!("ignored")]),
            Some((Operand::Int(1), Operand::Int(2)))
        );
    }

    #[test]
    fn total_of_empty_sequence_is_integer_zero() {
        assert_eq!(total(&[]).and_then(Operand::into_value), Some(json!(0)));
    }

    #[test]
    fn total_rejects_non_numeric_elements() {
        assert!(total(&[json!(1), json!([2])]).is_none());
    }
}
