/// Errors returned by [`crate::CantorStack`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum StackError {
    /// Tried to remove an element from a stack with no elements.
    #[error("stack is empty")]
    Empty,
}

/// Result type for stack operations.
pub type StackResult<T> = Result<T, StackError>;
