use std::fmt;

/// A numeric literal as written in the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// Integer literal, such as `42`.
    Integer(i64),
    /// Floating-point literal, such as `2.5` or `1e-3`.
    Real(f64),
}

/// A bracketed, comma-separated list of expressions, such as `[1, 2, 3]`.
///
/// Vector literals double as the rows of a [`Expr::Matrix`] and as the index
/// list of a subscript.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorLiteral {
    /// The element expressions, in source order.
    pub elements: Vec<Expr>,
    /// The source line of the opening bracket.
    pub line:     usize,
}

/// The built-in functions of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `print(a, b, ...)`
    Print,
    /// `eye(n)`, the `n x n` identity matrix.
    Eye,
    /// `zeros(n)`, a vector of `n` zeros.
    Zeros,
    /// `ones(n)`, an `n x n` matrix of ones.
    Ones,
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Print => "print",
            Self::Eye => "eye",
            Self::Zeros => "zeros",
            Self::Ones => "ones",
        };
        write!(f, "{name}")
    }
}

/// Represents an expression node in the abstract syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The literal value.
        value: LiteralValue,
        /// The source line.
        line:  usize,
    },
    /// A string literal, stored as written.
    StringLiteral {
        /// The source text, including the surrounding quotes.
        value: String,
        /// The source line.
        line:  usize,
    },
    /// A reference to a variable.
    Identifier {
        /// The variable name.
        name: String,
        /// The source line.
        line: usize,
    },
    /// A vector literal, `[a, b, c]`.
    Vector(VectorLiteral),
    /// A matrix literal, `[[1, 2], [3, 4]]` or `[1, 2; 3, 4]`.
    Matrix {
        /// One vector literal per row.
        rows: Vec<VectorLiteral>,
        /// The source line of the opening bracket.
        line: usize,
    },
    /// A call to one of the built-in functions.
    FunctionCall {
        /// Which built-in is called.
        function:  Builtin,
        /// The argument expressions.
        arguments: Vec<Expr>,
        /// The source line.
        line:      usize,
    },
    /// A binary operation. For [`BinaryOperator::Subscript`], `right` is always
    /// an [`Expr::Vector`] holding the indices.
    BinaryOp {
        /// The left operand.
        left:  Box<Expr>,
        /// The operator.
        op:    BinaryOperator,
        /// The right operand.
        right: Box<Expr>,
        /// The source line of the operator.
        line:  usize,
    },
    /// A unary operation.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Expr>,
        /// The source line of the operator.
        line:    usize,
    },
}

impl Expr {
    /// Returns the source line this expression starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::Identifier { line, .. }
            | Self::Matrix { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::Vector(VectorLiteral { line, .. }) => *line,
        }
    }
}

/// Binary operators, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `:`
    Range,
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `.+`
    DotAdd,
    /// `.-`
    DotSub,
    /// `*`, matrix multiplication.
    Mul,
    /// `/`
    Div,
    /// `.*`, element-wise multiplication.
    DotMul,
    /// `./`
    DotDiv,
    /// `a[i, j]`
    Subscript,
}

impl BinaryOperator {
    /// Returns `true` for `and`, `or` and `xor`.
    #[must_use]
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Xor)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Range => ":",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::DotAdd => ".+",
            Self::DotSub => ".-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::DotMul => ".*",
            Self::DotDiv => "./",
            Self::Subscript => "[]",
        };
        write!(f, "{symbol}")
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Prefix `-`
    Negate,
    /// Postfix `'`
    Transpose,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Transpose => write!(f, "'"),
        }
    }
}

/// Assignment operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOperator {
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
}

impl AssignOperator {
    /// The binary operator a compound assignment combines with, or `None` for
    /// plain `=`.
    #[must_use]
    pub const fn binary(self) -> Option<BinaryOperator> {
        match self {
            Self::Assign => None,
            Self::AddAssign => Some(BinaryOperator::Add),
            Self::SubAssign => Some(BinaryOperator::Sub),
            Self::MulAssign => Some(BinaryOperator::Mul),
            Self::DivAssign => Some(BinaryOperator::Div),
        }
    }
}

impl fmt::Display for AssignOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
        };
        write!(f, "{symbol}")
    }
}

/// The target of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum LValue {
    /// `x = ...`
    Identifier {
        /// The variable name.
        name: String,
        /// The source line.
        line: usize,
    },
    /// `x[i, j] = ...`
    Subscript {
        /// The subscripted variable.
        name:    String,
        /// The index expressions.
        indices: VectorLiteral,
        /// The source line.
        line:    usize,
    },
    /// Anything else that appeared left of an assignment operator. Kept so the
    /// checker can report it.
    Invalid(Box<Expr>),
}

impl LValue {
    /// Converts a parsed expression into an assignment target.
    #[must_use]
    pub fn from_expr(expr: Expr) -> Self {
        match expr {
            Expr::Identifier { name, line } => Self::Identifier { name, line },
            Expr::BinaryOp { left,
                             op: BinaryOperator::Subscript,
                             right,
                             line, } => match (*left, *right) {
                (Expr::Identifier { name, .. }, Expr::Vector(indices)) => {
                    Self::Subscript { name, indices, line }
                },
                (left, right) => Self::Invalid(Box::new(Expr::BinaryOp { left: Box::new(left),
                                                                         op: BinaryOperator::Subscript,
                                                                         right: Box::new(right),
                                                                         line })),
            },
            other => Self::Invalid(Box::new(other)),
        }
    }

    /// Returns the source line of the target.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Identifier { line, .. } | Self::Subscript { line, .. } => *line,
            Self::Invalid(expr) => expr.line(),
        }
    }
}

/// `break` or `continue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// `break`
    Break,
    /// `continue`
    Continue,
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Break => write!(f, "break"),
            Self::Continue => write!(f, "continue"),
        }
    }
}

/// An ordered sequence of statements. Both a whole program and every block
/// body are statement lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatementList {
    /// The statements, in source order.
    pub statements: Vec<Statement>,
}

impl StatementList {
    /// Returns `true` if the list holds no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Returns the number of top-level statements in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

/// Represents a statement node in the abstract syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A nested `{ ... }` block. Does not open a scope.
    List(StatementList),
    /// An expression evaluated for its effect, such as `print(x);`.
    Expression {
        /// The expression.
        expr: Expr,
        /// The source line.
        line: usize,
    },
    /// `target op value;`
    Assign {
        /// Where the value is stored.
        target: LValue,
        /// `=` or one of the compound operators.
        op:     AssignOperator,
        /// The right-hand side.
        value:  Expr,
        /// The source line of the operator.
        line:   usize,
    },
    /// `if (condition) block [else else_block]`
    If {
        /// The condition.
        condition:  Expr,
        /// The body run when the condition holds.
        block:      StatementList,
        /// The optional `else` body.
        else_block: Option<StatementList>,
        /// The source line of `if`.
        line:       usize,
    },
    /// `while (condition) block`
    While {
        /// The loop condition.
        condition: Expr,
        /// The loop body.
        block:     StatementList,
        /// The source line of `while`.
        line:      usize,
    },
    /// `for (iterator = range) block`
    For {
        /// The loop variable.
        iterator: String,
        /// The range expression; must be `a:b`.
        range:    Expr,
        /// The loop body.
        block:    StatementList,
        /// The source line of `for`.
        line:     usize,
    },
    /// `return value;`
    Return {
        /// The returned expression.
        value: Expr,
        /// The source line.
        line:  usize,
    },
    /// `break;` or `continue;`
    Control {
        /// Which control statement.
        kind: ControlKind,
        /// The source line.
        line: usize,
    },
}
