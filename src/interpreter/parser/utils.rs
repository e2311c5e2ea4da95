use std::iter::Peekable;

use crate::{
    ast::{Expr, VectorLiteral},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Builds the error for a token that cannot appear here, or for a premature
/// end of input.
pub(in crate::interpreter::parser) fn unexpected(found: Option<&(Token, usize)>) -> ParseError {
    match found {
        Some((token, line)) => ParseError::UnexpectedToken { token: token.kind().to_string(),
                                                             line:  *line, },
        None => ParseError::UnexpectedEndOfInput,
    }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Returns
/// The line of the consumed token.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((token, line)) if token == expected => Ok(*line),
        other => Err(unexpected(other)),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// Shared by built-in argument lists and subscript index lists. An
/// immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            other => return Err(unexpected(other)),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        other => Err(unexpected(other)),
    }
}

/// Parses the inside of a bracket literal; the `[` is already consumed.
///
/// `[a, b, c]` is a vector. Rows separated by `;`, as in `[1, 2; 3, 4]`, form a
/// matrix, and so does a bracket whose elements are all vector literals, as in
/// `[[1, 2], [3, 4]]`. `[]` is the empty vector.
///
/// Grammar: `bracket := "[" (row (";" row)*)? "]"`, `row := expression (","
/// expression)*`
pub(in crate::interpreter::parser) fn parse_bracket_literal<'a, I>(tokens: &mut Peekable<I>,
                                                                   line: usize)
                                                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::RBracket, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::Vector(VectorLiteral { elements: Vec::new(),
                                               line }));
    }

    let mut rows = Vec::new();
    let mut current = Vec::new();
    loop {
        current.push(parse_expression(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::Semicolon, _)) => {
                rows.push(VectorLiteral { elements: std::mem::take(&mut current),
                                          line });
            },
            Some((Token::RBracket, _)) => break,
            other => return Err(unexpected(other)),
        }
    }

    if !rows.is_empty() {
        rows.push(VectorLiteral { elements: current,
                                  line });
        return Ok(Expr::Matrix { rows, line });
    }

    if current.iter().all(|e| matches!(e, Expr::Vector(_))) {
        let rows = current.into_iter()
                          .filter_map(|e| match e {
                              Expr::Vector(row) => Some(row),
                              _ => None,
                          })
                          .collect();
        return Ok(Expr::Matrix { rows, line });
    }

    Ok(Expr::Vector(VectorLiteral { elements: current,
                                    line }))
}
