use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Builtin, Expr, LiteralValue, UnaryOperator, VectorLiteral},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_bracket_literal, parse_comma_separated, unexpected},
        },
    },
};

/// Parses prefix negation.
///
/// Unary minus binds tighter than every binary operator but looser than the
/// postfix operators, so `-a'` negates the transpose.
///
/// The rule is: `unary := "-" unary | postfix`
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let operand = parse_unary(tokens)?;
        return Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                                  operand: Box::new(operand),
                                  line });
    }
    parse_postfix(tokens)
}

/// Parses transposes and subscripts applied to a primary expression.
///
/// Both can repeat and mix, as in `a'[0]` or `m[1]'`.
///
/// The rule is: `postfix := primary ("'" | "[" expression ("," expression)*
/// "]")*`
pub fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut expr = parse_primary(tokens)?;
    loop {
        match tokens.peek() {
            Some((Token::Transpose, line)) => {
                let line = *line;
                tokens.next();
                expr = Expr::UnaryOp { op: UnaryOperator::Transpose,
                                       operand: Box::new(expr),
                                       line };
            },
            Some((Token::LBracket, line)) => {
                let line = *line;
                tokens.next();
                let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
                if elements.is_empty() {
                    return Err(ParseError::UnexpectedToken { token: Token::RBracket.kind().to_string(),
                                                             line });
                }
                expr = Expr::BinaryOp { left: Box::new(expr),
                                        op: BinaryOperator::Subscript,
                                        right: Box::new(Expr::Vector(VectorLiteral { elements,
                                                                                     line })),
                                        line };
            },
            _ => break,
        }
    }
    Ok(expr)
}

/// Parses literals, identifiers, parenthesized expressions, bracket literals
/// and built-in calls.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(value), line)) => Ok(Expr::Literal { value: LiteralValue::Integer(*value),
                                                                  line:  *line, }),
        Some((Token::Float(value), line)) => Ok(Expr::Literal { value: LiteralValue::Real(*value),
                                                                line:  *line, }),
        Some((Token::Str(text), line)) => Ok(Expr::StringLiteral { value: text.clone(),
                                                                   line:  *line, }),
        Some((Token::Identifier(name), line)) => Ok(Expr::Identifier { name: name.clone(),
                                                                       line: *line, }),
        Some((Token::LParen, _)) => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen)?;
            Ok(expr)
        },
        Some((Token::LBracket, line)) => parse_bracket_literal(tokens, *line),
        Some((Token::Print, line)) => parse_print_call(tokens, *line),
        Some((Token::Eye, line)) => parse_sized_call(tokens, Builtin::Eye, *line),
        Some((Token::Zeros, line)) => parse_sized_call(tokens, Builtin::Zeros, *line),
        Some((Token::Ones, line)) => parse_sized_call(tokens, Builtin::Ones, *line),
        other => Err(unexpected(other)),
    }
}

/// `print(a, b, ...)` takes any number of arguments.
fn parse_print_call<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
    Ok(Expr::FunctionCall { function: Builtin::Print,
                            arguments,
                            line })
}

/// `eye(n)`, `zeros(n)` and `ones(n)` take exactly one size expression.
fn parse_sized_call<'a, I>(tokens: &mut Peekable<I>,
                           function: Builtin,
                           line: usize)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let size = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    Ok(Expr::FunctionCall { function,
                            arguments: vec![size],
                            line })
}
