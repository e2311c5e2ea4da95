use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Every variant has an upper-case kind name (see [`Token::kind`]) used in
/// diagnostics, such as `RPAR` or `ADDASSIGN`.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFault)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literals. The slice keeps its surrounding quotes.
    #[regex(r#""[^"]*""#, parse_string, allow_greedy = true)]
    Str(String),
    /// Identifier tokens, such as `x` or `row_sum`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `for`
    #[token("for")]
    For,
    /// `while`
    #[token("while")]
    While,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// `return`
    #[token("return")]
    Return,
    /// `eye`
    #[token("eye")]
    Eye,
    /// `zeros`
    #[token("zeros")]
    Zeros,
    /// `ones`
    #[token("ones")]
    Ones,
    /// `print`
    #[token("print")]
    Print,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `xor`
    #[token("xor")]
    Xor,

    /// `.+`
    #[token(".+")]
    DotPlus,
    /// `.-`
    #[token(".-")]
    DotMinus,
    /// `.*`
    #[token(".*")]
    DotTimes,
    /// `./`
    #[token("./")]
    DotDivide,
    /// `+=`
    #[token("+=")]
    AddAssign,
    /// `-=`
    #[token("-=")]
    SubAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Times,
    /// `/`
    #[token("/")]
    Divide,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Assign,
    /// `'`
    #[token("'")]
    Transpose,
    /// `:`
    #[token(":")]
    Range,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,

    /// `# comments` run to the end of the line.
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the upper-case kind name of the token.
    ///
    /// ```
    /// use matlang::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::DotTimes.kind(), "DOTTIMES");
    /// assert_eq!(Token::Identifier("x".into()).kind(), "ID");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Float(_) => "FLOAT",
            Self::Integer(_) => "INTEGER",
            Self::Str(_) => "STRING",
            Self::Identifier(_) => "ID",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::For => "FOR",
            Self::While => "WHILE",
            Self::Break => "BREAK",
            Self::Continue => "CONTINUE",
            Self::Return => "RETURN",
            Self::Eye => "EYE",
            Self::Zeros => "ZEROS",
            Self::Ones => "ONES",
            Self::Print => "PRINT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::DotPlus => "DOTPLUS",
            Self::DotMinus => "DOTMINUS",
            Self::DotTimes => "DOTTIMES",
            Self::DotDivide => "DOTDIVIDE",
            Self::AddAssign => "ADDASSIGN",
            Self::SubAssign => "SUBASSIGN",
            Self::MulAssign => "MULASSIGN",
            Self::DivAssign => "DIVASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Times => "TIMES",
            Self::Divide => "DIVIDE",
            Self::Equal => "EQ",
            Self::NotEqual => "NE",
            Self::LessEqual => "LE",
            Self::GreaterEqual => "GE",
            Self::Less => "LT",
            Self::Greater => "GT",
            Self::Assign => "ASSIGN",
            Self::Transpose => "TRANSPOSE",
            Self::Range => "RANGE",
            Self::LParen => "LPAR",
            Self::RParen => "RPAR",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::LBrace => "LCPAR",
            Self::RBrace => "RCPAR",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Comment => "COMMENT",
            Self::NewLine => "NEWLINE",
            Self::Ignored => "IGNORED",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(value) => write!(f, "{} {value}", self.kind()),
            Self::Integer(value) => write!(f, "{} {value}", self.kind()),
            Self::Str(text) | Self::Identifier(text) => write!(f, "{} {text}", self.kind()),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// The raw failure reported by the generated lexer, before the offending
/// slice and line are attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexFault {
    /// No rule matches the input.
    #[default]
    IllegalCharacter,
    /// An integer literal overflowed `i64`.
    IntegerTooLarge,
}

fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexFault> {
    lex.slice().parse().map_err(|_| LexFault::IntegerTooLarge)
}

fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();
    slice.to_string()
}

/// A restartable, lazy token stream over a source string.
///
/// Yields `(token, line)` pairs. A character no rule accepts is reported as a
/// [`LexError`] and skipped; the next call continues after it.
///
/// ```
/// use matlang::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("x = 1;\n$y");
/// assert_eq!(lexer.next(), Some(Ok((Token::Identifier("x".into()), 1))));
/// assert_eq!(lexer.nth(2), Some(Ok((Token::Semicolon, 1))));
/// assert!(lexer.next().is_some_and(|t| t.is_err()));
/// assert_eq!(lexer.next(), Some(Ok((Token::Identifier("y".into()), 2))));
/// assert_eq!(lexer.next(), None);
/// ```
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, Token>,
}

impl<'source> Lexer<'source> {
    /// Starts tokenizing `source` at line 1.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner: Token::lexer(source) }
    }

    /// The line the lexer has reached.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.inner.extras.line
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<(Token, usize), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.inner.next()?;
        let line = self.inner.extras.line;

        Some(match token {
            Ok(token) => Ok((token, line)),
            Err(LexFault::IllegalCharacter) => {
                let character = self.inner.slice().chars().next().unwrap_or('\u{fffd}');
                Err(LexError::IllegalCharacter { character, line })
            },
            Err(LexFault::IntegerTooLarge) => {
                Err(LexError::IntegerTooLarge { literal: self.inner.slice().to_string(),
                                                line })
            },
        })
    }
}

/// Tokenizes a whole source string, separating tokens from diagnostics.
///
/// ```
/// use matlang::interpreter::lexer::{Token, tokenize};
///
/// let (tokens, errors) = tokenize("a = 2 ? 3;");
/// let kinds: Vec<_> = tokens.iter().map(|(t, _)| t.kind()).collect();
/// assert_eq!(kinds, ["ID", "ASSIGN", "INTEGER", "INTEGER", "SEMICOLON"]);
/// assert_eq!(errors[0].to_string(), "illegal character '?' at 1");
/// ```
#[must_use]
pub fn tokenize(source: &str) -> (Vec<(Token, usize)>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for item in Lexer::new(source) {
        match item {
            Ok(token) => tokens.push(token),
            Err(error) => errors.push(error),
        }
    }

    (tokens, errors)
}
