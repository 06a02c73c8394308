use crate::calculator::operation::Operation;

/// Represents one entry in a calculation history.
///
/// An entry is either an operand or a binary operation between the operands
/// surrounding it. A well-formed history alternates numbers and operations,
/// starting and ending with a number; the session owner is responsible for
/// appending entries in that order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistoryItem {
    /// An operand.
    Number(f64),
    /// A binary operation between the surrounding operands.
    Operation(Operation),
}

/// Stores the ordered entries of one calculation session.
///
/// The session owner appends operands and operations as they are entered and
/// clears the history once a result has been produced or the session is
/// reset. The evaluator never mutates a history; it only receives the
/// read-only slice returned by [`items`](Self::items).
///
/// # Example
/// ```
/// use reckon::calculator::{evaluator::evaluate, history::History, operation::Operation};
///
/// let mut history = History::new();
/// history.push_number(2.0);
/// history.push_operation(Operation::Add);
/// history.push_number(3.0);
///
/// assert_eq!(evaluate(history.items()).unwrap(), 5.0);
///
/// history.clear();
/// assert!(history.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct History {
    items: Vec<HistoryItem>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an operand.
    pub fn push_number(&mut self, value: f64) {
        self.items.push(HistoryItem::Number(value));
    }

    /// Appends an operation.
    pub fn push_operation(&mut self, operation: Operation) {
        self.items.push(HistoryItem::Operation(operation));
    }

    /// Removes every entry, resetting the session to its initial state.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns `true` if the history holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns a read-only view of the entries, in the order they were
    /// appended. This is the form the evaluator consumes.
    #[must_use]
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }
}
