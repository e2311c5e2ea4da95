//! # matlang
//!
//! matlang is a small matrix-oriented scripting language written in Rust.
//! Programs pass through a lexer, a recursive-descent parser, a static type
//! and shape checker, and a tree-walking interpreter. Integers, floats,
//! strings, vectors and matrices are supported, together with element-wise
//! and matrix arithmetic, `if`/`while`/`for` control flow and the built-ins
//! `eye`, `zeros`, `ones` and `print`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

pub use crate::{
    error::Error,
    interpreter::{
        checker::core::TypeChecker,
        evaluator::{control::Outcome, core::Context},
        lexer::{Lexer, Token, tokenize},
    },
};
use crate::{
    ast::StatementList,
    error::TypeError,
    interpreter::parser::core::parse_program,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of a program as a tree. The AST is
/// built by the parser, validated by the checker and executed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Separates assignment targets (`LValue`) from ordinary expressions.
pub mod ast;
/// Provides unified error types for every phase.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// checking, or evaluating code, each carrying the source line it refers to.
///
/// # Responsibilities
/// - Defines one error enum per phase plus the top-level [`Error`].
/// - Formats messages for the diagnostics written to standard error.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, checking, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, checker, evaluator and
///   value types.
/// - Provides the scope chain shared by the checker and the evaluator.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize` and `f64` without silent data loss.
/// - Resolve runtime indices against array bounds.
pub mod util;

/// How far [`run_with`] takes a program, and what it writes at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Write the memory dump after a program completes normally.
    pub dump_memory: bool,
    /// Stop after the type checker.
    pub check_only:  bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { dump_memory: true,
               check_only:  false, }
    }
}

/// Tokenizes and parses a program.
///
/// Lexical errors are written to standard error as they are found; the
/// remaining tokens are still parsed.
///
/// # Errors
/// Returns the first syntax error.
///
/// # Examples
/// ```
/// use matlang::parse;
///
/// let program = parse("x = 1; if (x > 0) print(x);").unwrap();
/// assert_eq!(program.len(), 2);
///
/// assert!(parse("x = ;").is_err());
/// ```
pub fn parse(source: &str) -> Result<StatementList, Error> {
    let (tokens, errors) = tokenize(source);
    for error in &errors {
        eprintln!("{error}");
    }

    let mut iter = tokens.iter().peekable();
    Ok(parse_program(&mut iter)?)
}

/// Type-checks a parsed program and returns every diagnostic found.
///
/// # Examples
/// ```
/// use matlang::{check, parse};
///
/// let program = parse("break; x = y;").unwrap();
/// assert_eq!(check(&program).len(), 2);
/// ```
#[must_use]
pub fn check(program: &StatementList) -> Vec<TypeError> {
    let mut checker = TypeChecker::new();
    checker.check(program);
    checker.into_errors()
}

/// Runs a program, printing to standard output.
///
/// # Errors
/// Returns an error if parsing, checking, or evaluation fails.
///
/// # Examples
/// ```
/// use matlang::{Outcome, run};
///
/// assert!(matches!(run("a = [1, 2] .* [3, 4];"), Ok(Outcome::Completed)));
///
/// // `y` is never assigned, so the checker rejects the program.
/// assert!(run("x = y + 1;").is_err());
/// ```
pub fn run(source: &str) -> Result<Outcome, Error> {
    run_with(source, &RunOptions::default(), io::stdout())
}

/// Runs a program through the whole pipeline, writing program output to
/// `out`.
///
/// Checker diagnostics go to standard error, followed by a
/// `Found <n> syntax errors.` summary, and the program does not run. After a
/// normal completion the memory dump is written to `out` unless disabled.
///
/// # Errors
/// Returns an error if parsing, checking, or evaluation fails.
pub fn run_with(source: &str,
                options: &RunOptions,
                out: impl Write + 'static)
                -> Result<Outcome, Error> {
    let program = parse(source)?;

    let errors = check(&program);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{error}");
        }
        let error = Error::Check { count: errors.len() };
        eprintln!("{error}");
        return Err(error);
    }
    if options.check_only {
        return Ok(Outcome::Completed);
    }

    let mut context = Context::with_output(out);
    let outcome = context.interpret(&program)?;
    if options.dump_memory && outcome == Outcome::Completed {
        context.dump_memory()?;
    }
    Ok(outcome)
}
