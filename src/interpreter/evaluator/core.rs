use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{evaluator::binary::eval_binary, symbol::SymbolTable},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression and returns the resulting integer.
///
/// This is the main entry point for expression evaluation. The evaluator
/// dispatches based on expression variant: literals yield their value,
/// variables are resolved through the symbol table, groupings evaluate
/// their inner expression, binary operations evaluate the left operand
/// before the right and then apply the operator, and conditionals evaluate
/// only the branch selected by the condition.
///
/// Evaluation never mutates the tree or the symbol table, so the same
/// expression can be evaluated repeatedly, including against different
/// tables.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
/// - `symbols`: Variable bindings consulted for `Expr::Variable` nodes.
///
/// # Returns
/// The computed `i64` value.
///
/// # Errors
/// - `EvalError::DivisionByZero` when a division has a zero divisor.
/// - `EvalError::UnknownVariable` when a variable is not in the table.
///
/// # Example
/// ```
/// use exprim::interpreter::{evaluator::core::eval_expr, symbol::SymbolTable};
///
/// let expr = exprim::parse("x * 2 + 1").unwrap();
///
/// let mut symbols = SymbolTable::new();
/// symbols.define("x", 3);
///
/// assert_eq!(eval_expr(&expr, &symbols), Ok(7));
/// ```
pub fn eval_expr(expr: &Expr, symbols: &SymbolTable) -> EvalResult<i64> {
    match expr {
        Expr::IntegerLiteral { value, .. } => Ok(*value),
        Expr::Variable { name, line } => {
            symbols.get_symbol(name)
                   .ok_or_else(|| EvalError::UnknownVariable { name: name.clone(),
                                                               line: *line, })
        },
        Expr::Grouping { inner, .. } => eval_expr(inner, symbols),
        Expr::BinaryOp { left,
                         op,
                         right,
                         line, } => {
            let left = eval_expr(left, symbols)?;
            let right = eval_expr(right, symbols)?;
            eval_binary(*op, left, right, *line)
        },
        Expr::Conditional { condition,
                            if_true,
                            if_false,
                            .. } => {
            // The untaken branch is never evaluated.
            if eval_expr(condition, symbols)? != 0 {
                eval_expr(if_true, symbols)
            } else {
                eval_expr(if_false, symbols)
            }
        },
    }
}
