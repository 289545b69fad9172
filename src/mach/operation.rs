use crate::lang::ast::{BinaryOp, Comparison};

/// Arithmetic follows IEEE 754: dividing by zero yields an
/// infinity or NaN instead of an error.
pub struct Operation {}

impl Operation {
    pub fn sum(lhs: f64, rhs: f64) -> f64 {
        lhs + rhs
    }

    pub fn subtract(lhs: f64, rhs: f64) -> f64 {
        lhs - rhs
    }

    pub fn multiply(lhs: f64, rhs: f64) -> f64 {
        lhs * rhs
    }

    pub fn divide(lhs: f64, rhs: f64) -> f64 {
        lhs / rhs
    }

    /// Arithmetic operators only; assignment is handled by the evaluator.
    pub fn arithmetic(op: BinaryOp, lhs: f64, rhs: f64) -> Option<f64> {
        use BinaryOp::*;
        match op {
            Add => Some(Operation::sum(lhs, rhs)),
            Subtract => Some(Operation::subtract(lhs, rhs)),
            Multiply => Some(Operation::multiply(lhs, rhs)),
            Divide => Some(Operation::divide(lhs, rhs)),
            Assign => None,
        }
    }

    pub fn compare(op: Comparison, lhs: f64, rhs: f64) -> bool {
        use Comparison::*;
        match op {
            Equal => lhs == rhs,
            Less => lhs < rhs,
            Greater => lhs > rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(Operation::arithmetic(BinaryOp::Add, 2.0, 3.0), Some(5.0));
        assert_eq!(Operation::arithmetic(BinaryOp::Subtract, 2.0, 3.0), Some(-1.0));
        assert_eq!(Operation::arithmetic(BinaryOp::Multiply, 2.0, 3.0), Some(6.0));
        assert_eq!(Operation::arithmetic(BinaryOp::Divide, 3.0, 2.0), Some(1.5));
        assert_eq!(Operation::arithmetic(BinaryOp::Assign, 3.0, 2.0), None);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Operation::divide(1.0, 0.0), f64::INFINITY);
        assert_eq!(Operation::divide(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(Operation::divide(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_compare() {
        assert!(Operation::compare(Comparison::Equal, 2.0, 2.0));
        assert!(Operation::compare(Comparison::Less, 1.0, 2.0));
        assert!(!Operation::compare(Comparison::Greater, 1.0, 2.0));
        assert!(!Operation::compare(Comparison::Equal, f64::NAN, f64::NAN));
    }
}
