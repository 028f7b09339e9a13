//! # exprim
//!
//! exprim is a small integer expression language written in Rust.
//! It parses and evaluates arithmetic, bitwise, relational and logical
//! expressions over 64-bit integers, with variables resolved through a
//! caller-supplied symbol table.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    error::{EvalError, ParseError},
    interpreter::{
        evaluator::core::eval_expr,
        lexer::{LexerExtras, Token},
        parser::core::parse_expression,
        symbol::SymbolTable,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent
/// the syntactic structure of an expression as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Defines the binary operator set shared by parser and evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing,
/// parsing, or evaluating an expression. It standardizes error reporting
/// and carries detailed information about failures, including expected
/// versus actual tokens and source line numbers.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation and the symbol
/// table to provide a complete pipeline from source text to an integer
/// result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and symbol
///   table.
/// - Provides the phase modules used by the crate-level entry points.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses one expression from source text into an AST.
///
/// The input is tokenized, parsed with the full precedence grammar, and
/// checked for leftover tokens: a valid input contains exactly one
/// expression. The returned tree is immutable and can be evaluated any
/// number of times with [`evaluate`].
///
/// # Errors
/// Returns a [`ParseError`] if the input contains an invalid token, an
/// oversized integer literal, a syntax error, or trailing tokens after the
/// expression.
///
/// # Examples
/// ```
/// use exprim::parse;
///
/// assert!(parse("2 + 3 * 4").is_ok());
///
/// // A missing closing parenthesis is a syntax error naming ')'.
/// let err = parse("(1 + 2").unwrap_err();
/// assert!(err.to_string().contains("')'"));
/// ```
pub fn parse(source: &str) -> Result<ast::Expr, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            // Digit-only slices only fail to lex when the literal overflows.
            if slice.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::LiteralTooLarge { line: lexer.extras.line });
            }
            return Err(ParseError::InvalidToken { slice: slice.to_string(),
                                                  line:  lexer.extras.line, });
        }
    }

    let last_line = lexer.extras.line;

    let mut iter = tokens.iter().peekable();
    // The parser cannot see past the last token, so end-of-input errors
    // raised without a position get the final source line here.
    let expr = match parse_expression(&mut iter) {
        Ok(expr) => expr,
        Err(ParseError::UnexpectedEndOfInput { expected, line: 0 }) => {
            return Err(ParseError::UnexpectedEndOfInput { expected,
                                                          line: last_line, });
        },
        Err(other) => return Err(other),
    };

    if let Some((tok, line)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                          line:  *line, });
    }

    Ok(expr)
}

/// Evaluates a parsed expression against a symbol table.
///
/// Evaluation is a pure function of the tree and the bindings: neither is
/// mutated, and re-evaluating the same tree with the same table always
/// yields the same result.
///
/// # Errors
/// Returns an [`EvalError`] on division by zero or when the expression
/// references a variable absent from `symbols`.
///
/// # Examples
/// ```
/// use exprim::{evaluate, interpreter::symbol::SymbolTable, parse};
///
/// let expr = parse("a + b - c").unwrap();
///
/// let symbols: SymbolTable = [("a", 4), ("b", 5), ("c", 2)].into_iter().collect();
/// assert_eq!(evaluate(&expr, &symbols), Ok(7));
///
/// // The same tree, different bindings.
/// let symbols: SymbolTable = [("a", 1), ("b", 1), ("c", 1)].into_iter().collect();
/// assert_eq!(evaluate(&expr, &symbols), Ok(1));
/// ```
pub fn evaluate(expr: &ast::Expr, symbols: &SymbolTable) -> Result<i64, EvalError> {
    eval_expr(expr, symbols)
}

/// Parses and evaluates one expression in a single call.
///
/// This is the convenience entry point for callers that do not need to
/// keep the AST around.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use exprim::{eval_source, interpreter::symbol::SymbolTable};
///
/// let symbols = SymbolTable::new();
///
/// let result = eval_source("4+ 5 -22 - 10", &symbols).unwrap();
/// assert_eq!(result, -23);
/// ```
pub fn eval_source(source: &str, symbols: &SymbolTable) -> Result<i64, Box<dyn std::error::Error>> {
    let expr = parse(source)?;
    let value = evaluate(&expr, symbols)?;
    Ok(value)
}
