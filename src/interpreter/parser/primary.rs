use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer literals
/// - variable references
/// - parenthesized expressions
///
/// This function dispatches on the leading token; anything else is a syntax
/// error naming the expected alternatives.
///
/// Grammar:
/// ```text
///     primary := INTEGER
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or_else(|| ParseError::UnexpectedEndOfInput { expected: "'(' or an integer literal".to_string(),
                                                                         line:     0, })?;

    match peeked {
        (Token::Integer(value), line) => {
            let (value, line) = (*value, *line);
            tokens.next();
            Ok(Expr::IntegerLiteral { value, line })
        },
        (Token::Identifier(name), line) => {
            let (name, line) = (name.clone(), *line);
            tokens.next();
            Ok(Expr::Variable { name, line })
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (tok, line) => {
            Err(ParseError::UnexpectedToken { expected: "'(' or an integer literal".to_string(),
                                              found:    format!("{tok:?}"),
                                              line:     *line, })
        },
    }
}

/// Parses a parenthesized expression: `( expression )`.
///
/// The inner expression is parsed at the expression root, so a conditional
/// may appear inside parentheses at any grammar position. The result is
/// wrapped in an [`Expr::Grouping`] node.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// An `Expr::Grouping` containing the inner expression.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the inner expression fails to parse,
/// - the closing `)` is missing.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::LParen, line)) => *line,
        _ => unreachable!("parse_grouping called on a non-'(' token"),
    };

    let inner = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(Expr::Grouping { inner: Box::new(inner),
                                                        line }),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { expected: "')'".to_string(),
                                              found:    format!("{tok:?}"),
                                              line:     *line, })
        },
        None => {
            Err(ParseError::UnexpectedEndOfInput { expected: "')'".to_string(),
                                                   line })
        },
    }
}
