use std::iter::Peekable;

use crate::{
    ast::{Expr, StatementList},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_range, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// Statements are parsed until the token stream is exhausted. Parsing stops at
/// the first syntax error.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The top-level statement list. An empty input yields an empty list.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<StatementList>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();
    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens)?);
    }
    Ok(StatementList { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, the range operator, and recursively descends
/// through the precedence hierarchy.
///
/// Grammar: `expression := range`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_range(tokens)
}
