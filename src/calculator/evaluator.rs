use crate::{
    calculator::{history::HistoryItem, operation::Operation},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a calculation history down to a single number.
///
/// The history is walked once. Numbers are pushed onto an operand stack. An
/// incoming operation first applies every pending operation of equal or
/// higher priority (lower or equal precedence tier), then waits on the
/// operator stack itself; applying means popping one operation and two
/// operands (the right-hand one was pushed last) and pushing the computed
/// value back. Comparing tiers with `>=` rather than `>` is what keeps
/// operations of equal priority applying left to right: in `8 - 3 + 2` the
/// subtraction fires before the addition is stacked, giving `(8 - 3) + 2`.
/// After the last entry, the remaining operations are applied in stack order.
///
/// An empty history evaluates to `0.0`. A blank session displays zero, and
/// evaluating it is defined to succeed with that value rather than fail.
///
/// The evaluator holds no state between calls; both stacks are local to one
/// invocation.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] if any division divides by zero. The
///   whole evaluation aborts immediately; partial stack state is discarded.
/// - [`RuntimeError::MalformedHistory`] if applying an operation finds too
///   few operands, which happens when the entries do not alternate numbers
///   and operations (for example a leading operation or two operations in a
///   row).
///
/// # Example
/// ```
/// use reckon::calculator::{
///     evaluator::evaluate,
///     history::HistoryItem,
///     operation::Operation,
/// };
///
/// let history = [HistoryItem::Number(2.0),
///                HistoryItem::Operation(Operation::Add),
///                HistoryItem::Number(3.0),
///                HistoryItem::Operation(Operation::Multiply),
///                HistoryItem::Number(4.0)];
///
/// assert_eq!(evaluate(&history).unwrap(), 14.0);
/// assert_eq!(evaluate(&[]).unwrap(), 0.0);
/// ```
pub fn evaluate(history: &[HistoryItem]) -> EvalResult<f64> {
    let mut numbers: Vec<f64> = Vec::new();
    let mut operators: Vec<Operation> = Vec::new();

    for item in history {
        match item {
            HistoryItem::Number(value) => numbers.push(*value),
            HistoryItem::Operation(operation) => {
                while operators.last()
                               .is_some_and(|pending| operation.precedence() >= pending.precedence())
                {
                    if let Some(pending) = operators.pop() {
                        apply_pending(pending, &mut numbers)?;
                    }
                }
                operators.push(*operation);
            },
        }
    }

    while let Some(pending) = operators.pop() {
        apply_pending(pending, &mut numbers)?;
    }

    Ok(numbers.pop().unwrap_or(0.0))
}

/// Applies one pending operation to the two topmost operands and pushes the
/// result back onto the operand stack.
///
/// The right-hand operand is on top of the stack because it was pushed last.
fn apply_pending(operation: Operation, numbers: &mut Vec<f64>) -> EvalResult<()> {
    let right = pop_operand(operation, numbers)?;
    let left = pop_operand(operation, numbers)?;
    let result = operation.apply(left, right)?;
    numbers.push(result);

    Ok(())
}

/// Pops one operand, reporting a malformed history if none is left.
fn pop_operand(operation: Operation, numbers: &mut Vec<f64>) -> EvalResult<f64> {
    numbers.pop()
           .ok_or_else(|| RuntimeError::MalformedHistory { details: format!("operation '{operation}' is missing an operand"), })
}
