/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an input line.
/// Parse errors cover any character sequence that is neither a number nor an
/// operator symbol, detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include division by zero and calculation histories whose entries do
/// not alternate numbers and operations.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
