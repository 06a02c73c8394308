#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero,
    /// The calculation history did not alternate numbers and operations.
    MalformedHistory {
        /// Details describing where the alternation broke down.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::MalformedHistory { details } => {
                write!(f, "Malformed calculation history: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
