/// Core evaluation logic.
///
/// Holds the evaluation context, expression dispatch and statement dispatch.
pub mod core;

/// How a statement finished: normally, or by `break`, `continue` or
/// `return`.
pub mod control;

/// The runtime memory stack and its dump.
pub mod memory;

/// Control-flow statements and assignments.
///
/// Executes `if`, `while` and `for` inside their own frames, and stores
/// assigned values into variables and array elements.
pub mod statement;

/// Unary operator evaluation: negation and transpose.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements arithmetic, element-wise and matrix operations, comparisons,
/// logical operators and ranges.
pub mod binary;

/// Built-in function calls.
pub mod function;

/// Literal construction and subscripting helpers.
pub mod utils;
