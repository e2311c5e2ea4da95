/// Lexical errors.
///
/// Produced by the lexer for characters it cannot tokenize. Lexical errors are
/// reported and skipped; they never stop tokenizing.
pub mod lex_error;
/// Parsing errors.
///
/// Syntax errors detected while building the AST. The first one aborts parsing.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include unbound variables, out-of-bounds indexing, type
/// mismatches and failed numeric conversions. Every one of them is fatal.
pub mod runtime_error;
/// Semantic errors found by the type checker.
pub mod type_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use type_error::TypeError;

/// Everything that can stop a program from running to completion.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The token stream does not follow the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The type checker rejected the program.
    #[error("Found {count} syntax errors.")]
    Check {
        /// How many diagnostics were reported.
        count: usize,
    },
    /// Execution failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// Writing program output failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
