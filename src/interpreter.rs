/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a meaningful element of the expression
/// language: integer literals, identifiers, operators, parentheses and
/// keywords. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source line info.
/// - Handles integer literals, identifiers and all operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of the
/// expression. Operator precedence is encoded structurally: one parsing
/// function per precedence tier, each delegating to the next-higher tier.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Enforces precedence, associativity and bracket matching, reporting
///   errors with the expected and actual token.
/// - Builds left-associative operator chains for every binary tier.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST and folds it into a single `i64`,
/// consulting the symbol table for variable references. It is the core
/// execution engine of the crate.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves variables through an injected symbol table.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The symbol module provides variable bindings for evaluation.
///
/// A symbol table maps variable names to integer values. It is passed to
/// the evaluator by reference, so evaluation stays a pure function of the
/// AST and the bindings it is given.
pub mod symbol;
