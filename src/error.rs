/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// source code. Parse errors include unexpected tokens, premature end of
/// input, invalid characters and oversized integer literals.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression: division by zero and references to unknown variables.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
