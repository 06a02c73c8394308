/// The evaluator module computes the result of a calculation history.
///
/// The evaluator walks the history once, maintaining an operand stack and an
/// operator stack, and applies pending operations as precedence allows. It is
/// the core execution engine of the calculator.
///
/// # Responsibilities
/// - Evaluates a history of numbers and operations to a single number.
/// - Enforces precedence and left-to-right order within a precedence tier.
/// - Reports runtime errors such as division by zero or a malformed history.
pub mod evaluator;
/// The history module records the entries of one calculation session.
///
/// A history is the ordered sequence of operands and operations the session
/// owner accumulates as they are entered. The evaluator only ever receives a
/// read-only view of it.
///
/// # Responsibilities
/// - Defines the `HistoryItem` entry type (number or operation).
/// - Provides append, clear, and read-only access for session owners.
pub mod history;
/// The lexer module tokenizes one input line into a history.
///
/// The lexer (tokenizer) reads the raw input text and produces the stream of
/// entries a session owner would otherwise record one key press at a time:
/// numeric literals and operator symbols.
///
/// # Responsibilities
/// - Converts the input character stream into numbers and operations.
/// - Handles decimal-point, decimal-comma, and scientific notation literals.
/// - Reports lexical errors for unrecognized input.
pub mod lexer;
/// The operation module defines the four arithmetic operations.
///
/// Each operation carries a fixed precedence tier and a compute rule over
/// IEEE-754 double-precision operands.
///
/// # Responsibilities
/// - Defines the `Operation` enum and its precedence tiers.
/// - Applies an operation to two operands, checking division by zero.
/// - Maps input symbols to operations.
pub mod operation;
