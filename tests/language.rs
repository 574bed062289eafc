use std::fs;

use mate::{EvalError, check_nesting, compute, compute_or_zero, compute_with_limit};

fn assert_value(src: &str, expected: f64) {
    match compute(src) {
        Ok(value) => assert_eq!(value, expected, "wrong result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = compute(src) {
        panic!("Expression {src:?} evaluated to {value} but was expected to fail")
    }
}

#[test]
fn example_file_works() {
    let contents = fs::read_to_string("tests/example.math").expect("missing file");
    let mut count = 0;

    for line in contents.lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty() && !line.starts_with("//"))
    {
        let (expr, expected) =
            line.rsplit_once('=').unwrap_or_else(|| panic!("Malformed example line: {line}"));
        let expected: f64 = expected.trim()
                                    .parse()
                                    .unwrap_or_else(|e| panic!("Bad expected value in {line}: {e}"));
        assert_value(expr, expected);
        count += 1;
    }

    assert!(count > 0, "No examples found in tests/example.math");
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("42", 42.0);
}

#[test]
fn operators_fold_left_to_right() {
    assert_value("2 + 3 * 4", 20.0);
    assert_value("2 - 3 * 4", -4.0);
    assert_value("6 * 7 - 2 + 0.5 * 4", 162.0);
    assert_value("2 + (3 * 4)", 14.0);
}

#[test]
fn signed_numbers() {
    assert_value("-4", -4.0);
    assert_value("+4", 4.0);
    assert_value("2 - -4", 6.0);
    assert_value("2 -4", -2.0);
    assert_value("-2 * -5", 10.0);
    assert_value("(-2) * (+5)", -10.0);
}

#[test]
fn decimal_points() {
    assert_value("4.5 + 0.5", 5.0);
    assert_value("4,5 + 0,5", 5.0);
    assert_value(".5 + 5.", 5.5);
}

#[test]
fn whitespace_is_ignored() {
    assert_value("  2\t+\r\n3  ", 5.0);
    assert_value("2+3", 5.0);
}

#[test]
fn division_by_zero_follows_floating_point() {
    assert_value("1 / 0", f64::INFINITY);
    assert_value("-1 / 0", f64::NEG_INFINITY);
    assert!(compute("0 / 0").expect("0 / 0 should not fail").is_nan());
}

#[test]
fn illegal_characters_are_errors() {
    assert_eq!(compute("&!@"),
               Err(EvalError::IllegalToken { index:   0,
                                             literal: "&".to_string(), }));
    assert_failure("(42/5) * 1 / .5 & # %");
    assert_failure("2 + x");
}

#[test]
fn unknown_operators_are_missing_operations() {
    assert_eq!(compute("2 ^ 3"),
               Err(EvalError::MissingOperator { left:  2.0,
                                                right: 3.0, }));
    assert_eq!(compute("2 & 3"),
               Err(EvalError::MissingOperator { left:  2.0,
                                                right: 3.0, }));
    assert_eq!(compute("1 + 4 % (2 * 3)"),
               Err(EvalError::MissingOperator { left:  4.0,
                                                right: 6.0, }));
    assert_eq!(compute("2 + 3)"), Err(EvalError::MissingOperand { index: 4 }));
}

#[test]
fn missing_operator_is_error() {
    assert_eq!(compute("2 2"),
               Err(EvalError::MissingOperator { left:  2.0,
                                                right: 2.0, }));
    assert_failure("2(3)");
    assert_failure("1.2.3");
}

#[test]
fn missing_operand_is_error() {
    assert_eq!(compute("2 +"), Err(EvalError::MissingOperand { index: 2 }));
    assert_eq!(compute("* 3"), Err(EvalError::MissingOperand { index: 0 }));
    assert_failure("2 * * 3");
    assert_failure("-(3)");
}

#[test]
fn empty_groups_and_input_are_errors() {
    assert_eq!(compute("()"), Err(EvalError::EmptyExpression));
    assert_eq!(compute("2 + ()"), Err(EvalError::EmptyExpression));
    assert_eq!(compute(""), Err(EvalError::EmptyExpression));
    assert_eq!(compute(" \t "), Err(EvalError::EmptyExpression));
}

#[test]
fn unbalanced_parentheses_are_errors() {
    assert_failure("(2 + 3");
    assert_failure("2 + 3)");
    assert_failure(")(");
    assert_failure("((1)");
}

#[test]
fn failures_report_zero() {
    let (value, error) = compute_or_zero("&!@$!@$");
    assert_eq!(value, 0.0);
    assert!(matches!(error, Some(EvalError::IllegalToken { index: 0, .. })));

    assert_eq!(compute_or_zero("(24 / 4) + 2 - (-2 * -5)"), (-2.0, None));
}

#[test]
fn error_messages_name_the_problem() {
    let message = compute("2 + #").unwrap_err().to_string();
    assert!(message.contains('#'), "{message}");
    assert!(message.contains("index 2"), "{message}");

    let message = compute("2 3").unwrap_err().to_string();
    assert!(message.contains("2 and 3"), "{message}");
}

#[test]
fn nesting_limit_is_checked_before_tokenizing() {
    let deep = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
    assert_eq!(compute_with_limit(&deep, 64),
               Err(EvalError::NestingTooDeep { depth: 200_000,
                                               limit: 64, }));

    let unclosed = "(".repeat(500_000);
    assert_eq!(check_nesting(&unclosed, 64),
               Err(EvalError::NestingTooDeep { depth: 500_000,
                                               limit: 64, }));
}

#[test]
fn nesting_within_the_limit_evaluates() {
    assert_eq!(compute_with_limit("((((((((((12 * 0.5) : 2)))))))))", 10), Ok(3.0));
    assert_eq!(compute_with_limit("2 + 3 * 4", 0), Ok(20.0));
    assert_eq!(compute_with_limit("(1)", 0),
               Err(EvalError::NestingTooDeep { depth: 1,
                                               limit: 0, }));
    assert_eq!(check_nesting(")))(1)", 1), Ok(()));

    let message = compute_with_limit("((1))", 1).unwrap_err().to_string();
    assert!(message.contains("2 deep"), "{message}");
}
