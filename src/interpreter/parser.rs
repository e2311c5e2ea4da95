/// Entry points: whole programs and full expressions.
pub mod core;

/// Binary operator precedence levels, from range down to multiplication.
pub mod binary;

/// Prefix minus, postfix transpose and subscripts, and primary expressions.
pub mod unary;

/// Brace blocks and the bodies of `if`, `while` and `for`.
pub mod block;

/// Statement parsing.
///
/// Control flow, `return`, `break`/`continue`, assignments and expression
/// statements.
pub mod statement;

/// Shared helpers: token expectations, comma lists and bracket literals.
pub mod utils;
