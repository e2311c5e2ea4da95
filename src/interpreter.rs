/// The type checker validates a parsed program before it runs.
///
/// It walks the AST with a symbol table of named frames, computing a base
/// type and shape for every expression, and reports each violated rule as a
/// diagnostic without stopping.
///
/// # Responsibilities
/// - Tracks which names are defined in which frame, and with what symbol.
/// - Enforces operand rules for element-wise, matrix and logical operators.
/// - Rejects `break`/`continue` outside loops and ranges outside `for`
///   headers.
pub mod checker;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Opens and closes memory frames around control-flow bodies.
/// - Reports runtime errors such as unbound variables or out-of-bounds
///   indices.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each tagged with the line it appears on.
///
/// # Responsibilities
/// - Recognizes keywords, identifiers, literals, operators and punctuation.
/// - Skips whitespace and `#` comments while counting lines.
/// - Reports illegal characters and keeps going.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence level. It
/// stops at the first syntax error.
pub mod parser;
/// Named frames with lexical lookup, shared by the symbol table and the
/// runtime memory.
pub mod scope;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: integers, floats, booleans, strings, nested
///   arrays and ranges.
/// - Provides accessors that fail with a runtime error on the wrong kind.
/// - Formats values for `print` and the memory dump.
pub mod value;
