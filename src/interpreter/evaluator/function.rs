/// Argument evaluation and dispatch to the built-ins.
pub mod core;

/// `eye`, `zeros` and `ones`.
pub mod builtin;

/// `print`.
pub mod print;
