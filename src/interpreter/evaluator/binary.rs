/// Operator dispatch.
pub mod core;

/// Element-wise application over nested arrays, with scalar broadcasting.
pub mod array;

/// Arithmetic on two numbers.
pub mod scalar;

/// Comparison operators.
pub mod comparison;

/// `and`, `or` and `xor`.
pub mod logic;

/// Matrix products for `*`.
pub mod matmul;
