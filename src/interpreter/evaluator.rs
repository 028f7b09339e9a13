/// Core evaluation logic for expressions.
///
/// Contains the `EvalResult` alias and the recursive fold over AST nodes,
/// including the short-circuiting conditional.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the application of every binary operator to two already
/// evaluated `i64` operands.
pub mod binary;
