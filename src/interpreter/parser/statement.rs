use std::iter::Peekable;

use crate::{
    ast::{AssignOperator, ControlKind, LValue, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::{parse_body, parse_braced},
            core::{ParseResult, parse_expression},
            utils::{expect, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// This is the top-level statement parser. It dispatches on the first token:
///
/// - `{ ... }` nested block
/// - `if (...) ... [else ...]`
/// - `while (...) ...`
/// - `for (id = a:b) ...`
/// - `break;`, `continue;`, `return expr;`
/// - otherwise an assignment or an expression statement
///
/// # Errors
/// Returns the first syntax error encountered.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.peek().copied() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };
    let line = *line;

    match token {
        Token::LBrace => Ok(Statement::List(parse_braced(tokens)?)),
        Token::If => {
            tokens.next();
            parse_if(tokens, line)
        },
        Token::While => {
            tokens.next();
            parse_while(tokens, line)
        },
        Token::For => {
            tokens.next();
            parse_for(tokens, line)
        },
        Token::Break | Token::Continue => {
            let kind = if matches!(token, Token::Break) {
                ControlKind::Break
            } else {
                ControlKind::Continue
            };
            tokens.next();
            expect(tokens, &Token::Semicolon)?;
            Ok(Statement::Control { kind, line })
        },
        Token::Return => {
            tokens.next();
            let value = parse_expression(tokens)?;
            expect(tokens, &Token::Semicolon)?;
            Ok(Statement::Return { value, line })
        },
        _ => parse_simple_statement(tokens),
    }
}

/// Parses `if (condition) body [else body]`.
///
/// A dangling `else` binds to the nearest `if`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    let block = parse_body(tokens)?;

    let else_block = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(parse_body(tokens)?)
    } else {
        None
    };

    Ok(Statement::If { condition,
                       block,
                       else_block,
                       line })
}

/// Parses `while (condition) body`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    let block = parse_body(tokens)?;

    Ok(Statement::While { condition,
                          block,
                          line })
}

/// Parses `for (iterator = range) body`.
///
/// The header is not restricted to a range syntactically; the checker
/// rejects anything else.
fn parse_for<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let iterator = parse_identifier(tokens)?;
    expect(tokens, &Token::Assign)?;
    let range = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    let block = parse_body(tokens)?;

    Ok(Statement::For { iterator,
                        range,
                        block,
                        line })
}

/// Parses `expression;` or `target op expression;`.
///
/// Assignments do not chain: `a = b = 1;` stops at the second `=`.
fn parse_simple_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens)?;

    let assignment = tokens.peek().and_then(|(token, line)| {
                                      let op = match token {
                                          Token::Assign => AssignOperator::Assign,
                                          Token::AddAssign => AssignOperator::AddAssign,
                                          Token::SubAssign => AssignOperator::SubAssign,
                                          Token::MulAssign => AssignOperator::MulAssign,
                                          Token::DivAssign => AssignOperator::DivAssign,
                                          _ => return None,
                                      };
                                      Some((op, *line))
                                  });

    let Some((op, line)) = assignment else {
        let line = expr.line();
        expect(tokens, &Token::Semicolon)?;
        return Ok(Statement::Expression { expr, line });
    };

    tokens.next();
    let value = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon)?;

    Ok(Statement::Assign { target: LValue::from_expr(expr),
                           op,
                           value,
                           line })
}
