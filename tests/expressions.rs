use exprim::{
    error::{EvalError, ParseError},
    eval_source,
    evaluate,
    interpreter::symbol::SymbolTable,
    parse,
};

fn eval(src: &str) -> i64 {
    eval_source(src, &SymbolTable::new()).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
}

fn eval_with(src: &str, symbols: &SymbolTable) -> Result<i64, EvalError> {
    let expr = parse(src).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"));
    evaluate(&expr, symbols)
}

fn parse_failure(src: &str) -> ParseError {
    match parse(src) {
        Ok(_) => panic!("'{src}' parsed but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn additive_operators_are_left_associative() {
    assert_eq!(eval("4+5-22-10"), -23);
    assert_eq!(eval("4+ 5 -22 - 10"), -23);
    assert_eq!(eval("100-10-5"), 85);
    assert_eq!(eval("20/2/5"), 2);
}

#[test]
fn multiplicative_binds_tighter_than_additive() {
    assert_eq!(eval("2+3*4"), 14);
    assert_eq!(eval("2*3+4"), 10);
    assert_eq!(eval("10-6/2"), 7);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(eval("(2+3)*4"), 20);
    assert_eq!(eval("2*(3+4)"), 14);
    assert_eq!(eval("((7))"), 7);
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(eval("7/2"), 3);
    assert_eq!(eval("(0-7)/2"), -3);
    assert_eq!(eval("6/3"), 2);
}

#[test]
fn division_by_zero_fails() {
    let symbols = SymbolTable::new();
    assert_eq!(eval_with("1/0", &symbols),
               Err(EvalError::DivisionByZero { line: 1 }));
    assert!(eval_with("5/(3-3)", &symbols).is_err());
}

#[test]
fn division_wraps_at_the_integer_minimum() {
    // i64::MIN / -1 has no representable result; it wraps to i64::MIN
    // like the original's two's-complement division instead of panicking.
    assert_eq!(eval("(0 - 9223372036854775807 - 1) / (0 - 1)"), i64::MIN);
}

#[test]
fn arithmetic_wraps_on_overflow() {
    assert_eq!(eval("9223372036854775807 + 1"), i64::MIN);
    assert_eq!(eval("(0 - 9223372036854775807 - 1) - 1"), i64::MAX);
    assert_eq!(eval("9223372036854775807 * 2"), -2);
}

#[test]
fn bitwise_binds_tighter_than_shift() {
    // The grammar puts the bitwise tier above shifts, so the `&` folds
    // first.
    assert_eq!(eval("1&3<<1"), 2);
    assert_eq!(eval("1|2+4"), 7);
    assert_eq!(eval("12&10"), 8);
    assert_eq!(eval("12|3"), 15);
}

#[test]
fn shift_binds_tighter_than_relational() {
    assert_eq!(eval("1<<2<5"), 1);
    assert_eq!(eval("1<<3"), 8);
    assert_eq!(eval("16>>2"), 4);
    // Arithmetic right shift propagates the sign bit.
    assert_eq!(eval("(0-8)>>1"), -4);
    // Shift counts are masked to the low six bits, Java style.
    assert_eq!(eval("1<<64"), 1);
}

#[test]
fn relational_operators_yield_zero_or_one() {
    assert_eq!(eval("3>2"), 1);
    assert_eq!(eval("2>3"), 0);
    assert_eq!(eval("1<2"), 1);
    assert_eq!(eval("2==2"), 1);
    assert_eq!(eval("2==3"), 0);
}

#[test]
fn logical_operators_use_truthiness() {
    assert_eq!(eval("5&&3"), 1);
    assert_eq!(eval("0&&9"), 0);
    assert_eq!(eval("0||5"), 1);
    assert_eq!(eval("0||0"), 0);
    assert_eq!(eval("1<2 && 3>2"), 1);
    assert_eq!(eval("1>2 || 2>1"), 1);
}

#[test]
fn conditional_selects_a_branch() {
    assert_eq!(eval("0?1:2"), 2);
    assert_eq!(eval("2>1 ? 10 : 20"), 10);
    assert_eq!(eval("0 ? 2 : (1 ? 4 : 5)"), 4);
}

#[test]
fn conditional_short_circuits() {
    // The untaken branch must not be evaluated, so the division by zero
    // never happens.
    assert_eq!(eval("1 ? 5 : (1/0)"), 5);
    assert_eq!(eval("0 ? (1/0) : 5"), 5);
}

#[test]
fn conditional_does_not_nest_without_parentheses() {
    assert!(matches!(parse_failure("1 ? 2 : 3 ? 4 : 5"),
                     ParseError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn variables_resolve_through_the_symbol_table() {
    let symbols: SymbolTable = [("x", 3), ("y", 4)].into_iter().collect();

    assert_eq!(eval_with("x*y+1", &symbols), Ok(13));
    assert_eq!(eval_with("x ? y : 0", &symbols), Ok(4));
}

#[test]
fn unknown_variables_fail() {
    let symbols = SymbolTable::new();

    assert_eq!(eval_with("flags+1", &symbols),
               Err(EvalError::UnknownVariable { name: "flags".to_string(),
                                                line: 1, }));
}

#[test]
fn missing_closing_parenthesis_names_the_expected_token() {
    let err = parse_failure("(1+2");
    assert!(matches!(err, ParseError::UnexpectedEndOfInput { .. }));
    assert!(err.to_string().contains("')'"));

    let err = parse_failure("(1+2 3");
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
    assert!(err.to_string().contains("')'"));
}

#[test]
fn malformed_input_fails_with_a_syntax_error() {
    assert!(matches!(parse_failure(""),
                     ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_failure("1+"),
                     ParseError::UnexpectedEndOfInput { .. }));
    assert!(parse_failure("*3").to_string().contains("integer"));
    assert!(parse_failure("1 ? 2 3").to_string().contains("':'"));
    assert!(matches!(parse_failure("1 2"),
                     ParseError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn end_of_input_errors_carry_the_final_line() {
    assert!(matches!(parse_failure(""),
                     ParseError::UnexpectedEndOfInput { line: 1, .. }));
    assert!(matches!(parse_failure("1+"),
                     ParseError::UnexpectedEndOfInput { line: 1, .. }));
    assert!(matches!(parse_failure("1 +\n"),
                     ParseError::UnexpectedEndOfInput { line: 2, .. }));
}

#[test]
fn statement_keywords_are_rejected_in_expressions() {
    assert!(matches!(parse_failure("declare x"),
                     ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_failure("print 1"),
                     ParseError::UnexpectedToken { .. }));
}

#[test]
fn lexical_errors_are_reported() {
    assert!(matches!(parse_failure("1 $ 2"), ParseError::InvalidToken { .. }));
    assert!(matches!(parse_failure("99999999999999999999"),
                     ParseError::LiteralTooLarge { .. }));
}

#[test]
fn reevaluating_the_same_tree_is_idempotent() {
    let expr = parse("(2+3)*4 ? 6/2 : 9").unwrap();
    let symbols = SymbolTable::new();
    let snapshot = expr.clone();

    let first = evaluate(&expr, &symbols);
    let second = evaluate(&expr, &symbols);

    assert_eq!(first, Ok(3));
    assert_eq!(first, second);
    assert_eq!(expr, snapshot);
}

#[test]
fn the_same_tree_evaluates_against_different_bindings() {
    let expr = parse("a+b-c").unwrap();

    let symbols: SymbolTable = [("a", 4), ("b", 5), ("c", 2)].into_iter().collect();
    assert_eq!(evaluate(&expr, &symbols), Ok(7));

    let symbols: SymbolTable = [("a", 1), ("b", 1), ("c", 1)].into_iter().collect();
    assert_eq!(evaluate(&expr, &symbols), Ok(1));
}

#[test]
fn comments_and_newlines_are_skipped() {
    assert_eq!(eval("1 + // one\n2"), 3);
    assert_eq!(eval("1 +\n2"), 3);
}
