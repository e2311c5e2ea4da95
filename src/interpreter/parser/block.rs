use std::iter::Peekable;

use crate::{
    ast::{Statement, StatementList},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, utils::expect},
    },
};

/// Parses a brace-delimited block into a statement list.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Errors
/// Returns `UnexpectedEndOfInput` if the closing brace is missing.
pub fn parse_braced<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<StatementList>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LBrace)?;

    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }

    Ok(StatementList { statements })
}

/// Parses the body of `if`, `else`, `while` or `for`.
///
/// A brace block becomes the body directly; a single statement is wrapped in
/// a one-element list, so every body is a [`StatementList`].
pub fn parse_body<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<StatementList>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match parse_statement(tokens)? {
        Statement::List(list) => Ok(list),
        statement => Ok(StatementList { statements: vec![statement] }),
    }
}
