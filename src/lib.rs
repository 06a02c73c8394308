//! # reckon
//!
//! reckon is a small calculator core written in Rust.
//! It evaluates flat arithmetic expressions (numbers joined by the four basic
//! operators, no parentheses) with the usual operator precedence and
//! left-to-right evaluation within a precedence tier.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::calculator::{evaluator::evaluate, lexer::tokenize};

/// Orchestrates the entire process of turning entries into a result.
///
/// This module ties together the input lexer, the calculation history, the
/// operation set, and the two-stack evaluator that computes the final number.
/// It exposes the public API for building and evaluating calculations.
///
/// # Responsibilities
/// - Defines the four arithmetic operations and their precedence tiers.
/// - Accumulates operands and operations into an ordered session history.
/// - Evaluates a history down to a single number, or a runtime error.
pub mod calculator;
/// Provides unified error types for tokenization and evaluation.
///
/// This module defines all errors that can be raised while tokenizing an
/// input line or evaluating a calculation history. It standardizes error
/// reporting and carries detailed information about failures for user
/// feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator).
/// - Attaches positions and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;

/// Returns the final result of evaluating one input line.
///
/// This function tokenizes the provided source string into a calculation
/// history and evaluates it with the two-stack precedence algorithm. If both
/// phases succeed, it returns the computed number; otherwise, it returns an
/// error with details about the failure.
///
/// # Errors
/// Returns an error if the input contains an unrecognized token, if the
/// entries do not alternate numbers and operations, or if the calculation
/// divides by zero.
///
/// # Examples
/// ```
/// use reckon::get_result;
///
/// // Multiplication binds tighter than addition.
/// let result = get_result("2 + 3 x 4").unwrap();
/// assert_eq!(result, 14.0);
///
/// // Example with an intentional error (division by zero).
/// let result = get_result("1 / 0");
/// assert!(result.is_err());
/// ```
pub fn get_result(source: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let history = tokenize(source)?;
    let result = evaluate(history.items())?;

    Ok(result)
}
