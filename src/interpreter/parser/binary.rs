use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::parse_unary,
            utils::unexpected,
        },
    },
};

/// Parses a range expression, `start:end`.
///
/// The range operator binds loosest and does not associate: `a:b:c` is a
/// syntax error.
///
/// The rule is: `range := logical (":" logical)?`
pub fn parse_range<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_logical(tokens)?;

    let Some((Token::Range, line)) = tokens.peek() else {
        return Ok(left);
    };
    let line = *line;
    tokens.next();

    let right = parse_logical(tokens)?;
    if let Some((Token::Range, _)) = tokens.peek() {
        return Err(unexpected(tokens.next()));
    }

    Ok(Expr::BinaryOp { left: Box::new(left),
                        op: BinaryOperator::Range,
                        right: Box::new(right),
                        line })
}

/// Parses `and`, `or` and `xor`, which share one precedence level.
///
/// The rule is: `logical := relational (("and" | "or" | "xor") relational)*`
pub fn parse_logical<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_relational, |token| match token {
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        Token::Xor => Some(BinaryOperator::Xor),
        _ => None,
    })
}

/// Parses the comparison operators.
///
/// The rule is: `relational := additive (("==" | "!=" | ">" | ">=" | "<" |
/// "<=") additive)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_additive, |token| match token {
        Token::Equal => Some(BinaryOperator::Equal),
        Token::NotEqual => Some(BinaryOperator::NotEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        _ => None,
    })
}

/// Parses addition and subtraction, plain and element-wise.
///
/// The rule is: `additive := multiplicative (("+" | "-" | ".+" | ".-")
/// multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_multiplicative, |token| match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::DotPlus => Some(BinaryOperator::DotAdd),
        Token::DotMinus => Some(BinaryOperator::DotSub),
        _ => None,
    })
}

/// Parses multiplication and division, plain and element-wise.
///
/// The rule is: `multiplicative := unary (("*" | "/" | ".*" | "./") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_unary, |token| match token {
        Token::Times => Some(BinaryOperator::Mul),
        Token::Divide => Some(BinaryOperator::Div),
        Token::DotTimes => Some(BinaryOperator::DotMul),
        Token::DotDivide => Some(BinaryOperator::DotDiv),
        _ => None,
    })
}

/// Folds `operand (operator operand)*` into a left-leaning tree.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>,
                                 operator: impl Fn(&Token) -> Option<BinaryOperator>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = operand(tokens)?;
    while let Some((op, line)) =
        tokens.peek().and_then(|(token, line)| operator(token).map(|op| (op, *line)))
    {
        tokens.next();
        let right = operand(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}
