#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer hit a character sequence that is not a valid token.
    InvalidToken {
        /// The offending input slice.
        slice: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal was too large to be represented as an `i64`.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// Description of the token kind(s) the parser expected.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input while more tokens were required.
    UnexpectedEndOfInput {
        /// Description of the token kind(s) the parser expected.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { slice, line } => {
                write!(f, "Error on line {line}: Invalid token: {slice}.")
            },

            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Integer literal is too large.")
            },

            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },

            Self::UnexpectedEndOfInput { expected, line } => write!(f,
                                                                    "Error on line {line}: Expected {expected}, but the input ended."),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
