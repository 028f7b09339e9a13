/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every construct of the expression language: integer
/// literals, variable references, parenthesized groupings, binary operations
/// and the conditional (`? :`) expression. Each variant carries the source
/// line it was parsed from for error reporting.
///
/// Trees are immutable once built. Children are owned exclusively by their
/// parent via `Box`, so a parsed expression can be evaluated any number of
/// times against different symbol bindings.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal integer such as `42`.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name, resolved at evaluation time.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A parenthesized sub-expression.
    ///
    /// Semantically transparent; kept as its own node so grouping remains
    /// inspectable in the tree.
    Grouping {
        /// The expression inside the parentheses.
        inner: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A binary operation such as `a + b`.
    ///
    /// The parser only ever builds nodes whose operator belongs to the
    /// precedence tier being parsed, so the two operands of a `BinaryOp`
    /// never mix tiers with its operator.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A conditional expression: `condition ? if_true : if_false`.
    Conditional {
        /// The condition; nonzero selects `if_true`.
        condition: Box<Self>,
        /// Expression evaluated when the condition is nonzero.
        if_true:   Box<Self>,
        /// Expression evaluated when the condition is zero.
        if_false:  Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use exprim::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::IntegerLiteral { line, .. }
            | Self::Variable { line, .. }
            | Self::Grouping { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Conditional { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Operators are grouped into precedence tiers by the parser; every operator
/// belongs to exactly one tier (multiplicative, additive, bitwise, shift,
/// relational, logical).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Arithmetic right shift (`>>`)
    ShiftRight,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, Div, Equal, Greater, Less, Mul, Or, ShiftLeft, ShiftRight,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            BitAnd => "&",
            BitOr => "|",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            Less => "<",
            Greater => ">",
            Equal => "==",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}
