/// The checker state and the statement rules.
///
/// Walks the program once, maintaining a symbol table of named frames that
/// mirrors the frames the interpreter will open, and collects a diagnostic
/// for every violated rule.
pub mod core;

/// Typing rules for expressions.
///
/// Computes the symbol each expression produces: literals, identifiers,
/// vector and matrix literals, operators, subscripts and built-in calls.
pub mod expression;

/// Static types: base types, shapes and the symbol table.
pub mod symbol;
