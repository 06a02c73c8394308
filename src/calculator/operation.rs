use crate::{calculator::evaluator::EvalResult, error::RuntimeError};

/// Represents one of the four binary arithmetic operations.
///
/// Operations are stateless: each variant carries a fixed precedence tier and
/// a compute rule. They are built from their input symbol at token-build time
/// and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Subtract,
    /// Multiplication (`x` or `*`).
    Multiply,
    /// Division (`/`).
    Divide,
}

impl Operation {
    /// Returns the precedence tier of the operation.
    ///
    /// Lower values are applied first: `Multiply` and `Divide` sit on tier 1,
    /// `Add` and `Subtract` on tier 2. Within a tier the evaluator applies
    /// operations left to right.
    ///
    /// # Example
    /// ```
    /// use reckon::calculator::operation::Operation;
    ///
    /// assert!(Operation::Multiply.precedence() < Operation::Add.precedence());
    /// assert_eq!(Operation::Divide.precedence(), Operation::Multiply.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Multiply | Self::Divide => 1,
            Self::Add | Self::Subtract => 2,
        }
    }

    /// Applies the operation to two operands.
    ///
    /// Arithmetic follows IEEE-754 double-precision semantics, including its
    /// rounding and overflow-to-infinity behavior. Division by zero is the
    /// only checked failure.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] if the operation is `Divide`
    /// and `right` equals zero.
    ///
    /// # Example
    /// ```
    /// use reckon::calculator::operation::Operation;
    ///
    /// let result = Operation::Multiply.apply(1.5, 2.0).unwrap();
    /// assert_eq!(result, 3.0);
    ///
    /// assert!(Operation::Divide.apply(1.0, 0.0).is_err());
    /// ```
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Subtract => Ok(left - right),
            Self::Multiply => Ok(left * right),
            Self::Divide => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(left / right)
            },
        }
    }

    /// Builds an operation from its input symbol.
    ///
    /// Recognizes `+`, `-`, `/`, and both `x` and `*` for multiplication.
    ///
    /// # Returns
    /// - `Some(Operation)`: The operation for a recognized symbol.
    /// - `None`: If the symbol is not an operator.
    ///
    /// # Example
    /// ```
    /// use reckon::calculator::operation::Operation;
    ///
    /// assert_eq!(Operation::from_symbol("x"), Some(Operation::Multiply));
    /// assert_eq!(Operation::from_symbol("*"), Some(Operation::Multiply));
    /// assert_eq!(Operation::from_symbol("%"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "x" | "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "/",
        };
        write!(f, "{symbol}")
    }
}
