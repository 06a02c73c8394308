use logos::Logos;

use crate::{
    calculator::{history::History, operation::Operation},
    error::ParseError,
};

/// Represents a single entry typed into the calculator.
/// A token is either a numeric literal or an operator symbol; everything else
/// in the input is whitespace or an error.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `2.1e-10`. A decimal
    /// comma is accepted in place of the decimal point (`3,5`), matching
    /// locales that display results that way.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+,[0-9]+", parse_decimal_comma)]
    Number(f64),
    /// Operator symbol tokens: `+`, `-`, `/`, and `x` or `*` for
    /// multiplication.
    #[regex(r"[+\-x*/]", parse_operation)]
    Operation(Operation),
    /// Spaces, tabs and line breaks between entries.
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses a decimal-comma literal (`3,5`) from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value with the comma read as a decimal point.
/// - `None`: If the token slice is not a valid number.
fn parse_decimal_comma(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().replace(',', ".").parse().ok()
}

/// Parses an operator symbol from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(Operation)`: The operation for the symbol.
/// - `None`: If the symbol is not a recognized operator.
fn parse_operation(lex: &logos::Lexer<Token>) -> Option<Operation> {
    Operation::from_symbol(lex.slice())
}

/// Tokenizes one input line into a calculation history.
///
/// Numbers and operations are appended in the order they appear, exactly the
/// way a session owner records them one entry at a time. The lexer does not
/// check that entries alternate; the evaluator reports a malformed history if
/// they do not.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] when the input contains a
/// character sequence that is neither a number nor an operator symbol.
///
/// # Example
/// ```
/// use reckon::calculator::lexer::tokenize;
///
/// let history = tokenize("3,5 + 1,5").unwrap();
/// assert_eq!(history.len(), 3);
///
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<History, ParseError> {
    let mut history = History::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Number(value)) => history.push_number(value),
            Ok(Token::Operation(operation)) => history.push_operation(operation),
            Ok(Token::Ignored) => {},
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token:  lexer.slice().to_string(),
                                                         column: lexer.span().start, });
            },
        }
    }

    Ok(history)
}
