use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
};

/// Evaluates a binary operation between two integers.
///
/// Both operands are already evaluated; this function only applies the
/// operator. Arithmetic wraps on overflow (two's complement, including
/// `i64::MIN / -1`) and division truncates toward zero. Shift counts are masked to the low six bits, so
/// shifting behaves like Java's `<<`/`>>` on a 64-bit integer, and `>>` is
/// an arithmetic (sign-propagating) shift. Relational and logical
/// operators yield exactly `1` or `0`, with any nonzero operand counting
/// as true on the logical tier.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<i64>` containing the computed value.
///
/// # Errors
/// `EvalError::DivisionByZero` if `op` is `Div` and `right` is zero.
///
/// # Example
/// ```
/// use exprim::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Div, 7, 2, 1), Ok(3));
/// assert_eq!(eval_binary(BinaryOperator::Greater, 3, 2, 1), Ok(1));
/// assert!(eval_binary(BinaryOperator::Div, 1, 0, 1).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: i64, right: i64, line: usize) -> EvalResult<i64> {
    use BinaryOperator::{
        Add, And, BitAnd, BitOr, Div, Equal, Greater, Less, Mul, Or, ShiftLeft, ShiftRight, Sub,
    };

    match op {
        Add => Ok(left.wrapping_add(right)),
        Sub => Ok(left.wrapping_sub(right)),
        Mul => Ok(left.wrapping_mul(right)),
        Div => {
            if right == 0 {
                Err(EvalError::DivisionByZero { line })
            } else {
                // Wraps in the one overflowing case, i64::MIN / -1.
                Ok(left.wrapping_div(right))
            }
        },

        BitAnd => Ok(left & right),
        BitOr => Ok(left | right),

        ShiftLeft => Ok(left << (right & 63)),
        ShiftRight => Ok(left >> (right & 63)),

        Less => Ok(i64::from(left < right)),
        Greater => Ok(i64::from(left > right)),
        Equal => Ok(i64::from(left == right)),

        And => Ok(i64::from(left != 0 && right != 0)),
        Or => Ok(i64::from(left != 0 || right != 0)),
    }
}
