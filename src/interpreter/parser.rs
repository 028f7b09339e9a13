/// Core parsing logic and the expression entry point.
///
/// Contains the shared `ParseResult` alias, the top-level expression rule
/// and the optional conditional (`? :`) suffix.
pub mod core;

/// Binary operator parsing.
///
/// Implements one function per precedence tier, each building a
/// left-associative chain of `BinaryOp` nodes and delegating to the
/// next-higher tier for its operands.
pub mod binary;

/// Primary expression parsing.
///
/// Handles the atoms of the grammar: integer literals, variable references
/// and parenthesized sub-expressions.
pub mod primary;
