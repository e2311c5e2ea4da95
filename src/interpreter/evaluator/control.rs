use crate::interpreter::value::core::Value;

/// How executing a statement ended.
///
/// Loops consume `Break` and `Continue`; every other construct passes a
/// non-normal flow up unchanged, after closing its own frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Fell through to the next statement.
    Normal,
    /// `break;`
    Break,
    /// `continue;`
    Continue,
    /// `return value;`
    Return(Value),
}

impl Flow {
    /// Returns `true` unless the statement transferred control.
    #[must_use]
    pub const fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// How a whole program ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Ran off the end of the program.
    Completed,
    /// A top-level `return` stopped execution with this value.
    Returned(Value),
}
