use std::fmt;

use crate::interpreter::scope::ScopeChain;

/// The element type of a value, independent of its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    /// 64-bit signed integers.
    Int,
    /// 64-bit floats.
    Float,
    /// Text.
    Str,
    /// `true` / `false`; only produced by comparisons.
    Bool,
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "string",
            Self::Bool => "bool",
        };
        write!(f, "{name}")
    }
}

/// The static type of an expression: a base type and a shape.
///
/// Scalars have shape `(1,)`, and a vector of `n` elements of shape `s` has
/// shape `(n, *s)`, so `[1, 2]` is `int(2, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// The element type.
    pub base:  BaseType,
    /// The extent of each dimension.
    pub shape: Vec<usize>,
}

impl Symbol {
    /// A single value of `base`.
    #[must_use]
    pub fn scalar(base: BaseType) -> Self {
        Self { base,
               shape: vec![1] }
    }

    /// Builds a symbol with an explicit shape.
    #[must_use]
    pub const fn new(base: BaseType, shape: Vec<usize>) -> Self {
        Self { base, shape }
    }

    /// Returns `true` if the shape is exactly `(1,)`.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.shape == [1]
    }

    /// Returns `true` for a scalar of base type `base`.
    #[must_use]
    pub fn is_scalar_of(&self, base: BaseType) -> bool {
        self.base == base && self.is_scalar()
    }
}

/// Prints `int(1,)` or `float(2, 3)`.
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.base)?;
        match self.shape.as_slice() {
            [single] => write!(f, "{single},")?,
            dims => {
                for (i, dim) in dims.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{dim}")?;
                }
            },
        }
        write!(f, ")")
    }
}

/// What checking an expression produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checked {
    /// A well-typed value.
    Known(Symbol),
    /// The expression had an error that was already reported. Rules that meet
    /// an unknown operand stay silent.
    Unknown,
    /// The expression produces no value, as `print(...)` does.
    Void,
}

impl Checked {
    /// Returns the symbol, if one is known.
    #[must_use]
    pub const fn symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Known(symbol) => Some(symbol),
            Self::Unknown | Self::Void => None,
        }
    }
}

impl From<Symbol> for Checked {
    fn from(symbol: Symbol) -> Self {
        Self::Known(symbol)
    }
}

/// Names in scope during checking, each with its symbol.
pub type SymbolTable = ScopeChain<Symbol>;
