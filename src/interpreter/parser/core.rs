use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_logical},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. The expression root is a
/// logical-tier expression with one optional conditional suffix:
///
/// Grammar: `expression := logical ("?" logical ":" logical)?`
///
/// The suffix is optional but not right-recursive: both branches parse at
/// the logical tier, one level below the conditional itself. Chaining a
/// second conditional into a branch therefore requires explicit
/// parentheses, e.g. `a ? b : (c ? d : e)`.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedToken` if the `:` separating the branches is missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_logical(tokens)?;

    if let Some((Token::Question, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let if_true = parse_logical(tokens)?;

        match tokens.next() {
            Some((Token::Colon, _)) => {},
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { expected: "':'".to_string(),
                                                         found:    format!("{tok:?}"),
                                                         line:     *line, });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: "':'".to_string(),
                                                              line });
            },
        }

        let if_false = parse_logical(tokens)?;

        Ok(Expr::Conditional { condition: Box::new(condition),
                               if_true: Box::new(if_true),
                               if_false: Box::new(if_false),
                               line })
    } else {
        Ok(condition)
    }
}
