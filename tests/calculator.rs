use reckon::{
    calculator::{
        evaluator::evaluate,
        history::{History, HistoryItem},
        lexer::tokenize,
        operation::Operation,
    },
    error::RuntimeError,
    get_result,
};

fn assert_result(src: &str, expected: f64) {
    match get_result(src) {
        Ok(result) => {
            assert_eq!(result, expected, "'{src}' evaluated to {result}, expected {expected}");
        },
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if get_result(src).is_ok() {
        panic!("'{src}' succeeded but was expected to fail")
    }
}

#[test]
fn single_pair_applies_the_operation() {
    let operations = [(Operation::Add, 11.0),
                      (Operation::Subtract, 5.0),
                      (Operation::Multiply, 24.0),
                      (Operation::Divide, 8.0 / 3.0)];

    for (operation, expected) in operations {
        let history = [HistoryItem::Number(8.0),
                       HistoryItem::Operation(operation),
                       HistoryItem::Number(3.0)];
        let result = evaluate(&history).unwrap();
        assert_eq!(result, operation.apply(8.0, 3.0).unwrap());
        assert_eq!(result, expected);
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_result("2 + 3 x 4", 14.0);
    assert_result("2 x 3 + 4", 10.0);
}

#[test]
fn equal_precedence_applies_left_to_right() {
    // (8 - 3) + 2, not 8 - (3 + 2).
    assert_result("8 - 3 + 2", 7.0);
    // (10 / 2) x 3.
    assert_result("10 / 2 x 3", 15.0);
}

#[test]
fn longer_mixed_chains() {
    assert_result("1 + 2 x 3 - 4 / 2", 5.0);
    assert_result("100 / 10 / 5", 2.0);
    assert_result("2 x 3 x 4 + 1", 25.0);
}

#[test]
fn single_number_evaluates_to_itself() {
    assert_result("7", 7.0);
    assert_result("3,5", 3.5);
}

#[test]
fn empty_history_evaluates_to_zero() {
    assert_eq!(evaluate(&[]).unwrap(), 0.0);
    assert_result("", 0.0);
}

#[test]
fn division_by_zero_aborts_the_whole_chain() {
    let history = [HistoryItem::Number(5.0),
                   HistoryItem::Operation(Operation::Divide),
                   HistoryItem::Number(0.0),
                   HistoryItem::Operation(Operation::Add),
                   HistoryItem::Number(1.0)];
    let err = evaluate(&history).unwrap_err();
    assert!(matches!(err, RuntimeError::DivisionByZero));

    assert_failure("5 / 0 + 1");
    assert_failure("1 / 0");
}

#[test]
fn evaluation_is_deterministic() {
    let history = [HistoryItem::Number(9.0),
                   HistoryItem::Operation(Operation::Divide),
                   HistoryItem::Number(4.0),
                   HistoryItem::Operation(Operation::Multiply),
                   HistoryItem::Number(8.0)];

    let first = evaluate(&history).unwrap();
    let second = evaluate(&history).unwrap();
    assert_eq!(first, second);
}

#[test]
fn leading_operation_is_malformed() {
    let history = [HistoryItem::Operation(Operation::Add), HistoryItem::Number(3.0)];
    let err = evaluate(&history).unwrap_err();
    assert!(matches!(err, RuntimeError::MalformedHistory { .. }));
}

#[test]
fn consecutive_operations_are_malformed() {
    let history = [HistoryItem::Number(2.0),
                   HistoryItem::Operation(Operation::Add),
                   HistoryItem::Operation(Operation::Add),
                   HistoryItem::Number(3.0)];
    let err = evaluate(&history).unwrap_err();
    assert!(matches!(err, RuntimeError::MalformedHistory { .. }));

    assert_failure("2 + + 3");
    assert_failure("+ 3");
}

#[test]
fn session_history_push_and_clear() {
    let mut history = History::new();
    assert!(history.is_empty());

    history.push_number(2.0);
    history.push_operation(Operation::Add);
    history.push_number(3.0);
    assert_eq!(history.len(), 3);
    assert_eq!(evaluate(history.items()).unwrap(), 5.0);

    // Evaluating does not consume the history; the owner resets it.
    assert_eq!(evaluate(history.items()).unwrap(), 5.0);
    history.clear();
    assert!(history.is_empty());
    assert_eq!(evaluate(history.items()).unwrap(), 0.0);
}

#[test]
fn lexer_accepts_both_multiplication_symbols() {
    assert_result("2 x 3", 6.0);
    assert_result("2 * 3", 6.0);
}

#[test]
fn lexer_accepts_decimal_commas_and_points() {
    assert_result("3,5 + 1,5", 5.0);
    assert_result("3.5 + 1.5", 5.0);
    assert_result("2,5 x 4", 10.0);
}

#[test]
fn lexer_accepts_scientific_notation() {
    assert_result("1e3 + 1", 1001.0);
    assert_result("2.5e2 / 5", 50.0);
}

#[test]
fn lexer_rejects_unknown_characters() {
    let err = tokenize("2 $ 3").unwrap_err();
    let reckon::error::ParseError::UnexpectedToken { token, column } = err;
    assert_eq!(token, "$");
    assert_eq!(column, 2);

    assert_failure("2 + (3 x 4)");
}
