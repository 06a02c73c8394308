#[derive(Debug)]
/// Represents all errors that can occur while tokenizing an input line.
pub enum ParseError {
    /// Found a character sequence that is neither a number nor an operator.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The byte column in the input where the token starts.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
