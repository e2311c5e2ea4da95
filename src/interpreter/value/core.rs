use std::{fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64_checked,
};

/// A runtime value.
///
/// Arrays are nested: a matrix is an array of row arrays. The backing vector
/// is reference counted, so copying a value is cheap and writes go through
/// [`Rc::make_mut`], which clones only when the array is shared.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit float.
    Real(f64),
    /// The result of a comparison.
    Bool(bool),
    /// Text from a string literal.
    Str(Rc<str>),
    /// A vector, or a matrix as a vector of rows.
    Array(Rc<Vec<Self>>),
    /// The half-open integer range `start:end`, iterated lazily by `for`.
    Range {
        /// The first value produced.
        start: i64,
        /// One past the last value produced.
        end:   i64,
    },
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.into())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Value {
    /// Reads a number as a float, widening integers.
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge { line }),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }

    pub const fn as_integer(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedInteger { line }),
        }
    }

    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { line }),
        }
    }

    pub fn as_vec(&self, line: usize) -> EvalResult<&Vec<Self>> {
        match self {
            Self::Array(v) => Ok(v),
            _ => Err(RuntimeError::ExpectedArray { line }),
        }
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Decides a branch or loop condition.
    ///
    /// Booleans stand for themselves and numbers are true when non-zero.
    /// Anything else is an error.
    pub fn is_truthy(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Integer(n) => Ok(*n != 0),
            Self::Real(r) => Ok(*r != 0.0),
            _ => Err(RuntimeError::ExpectedBoolean { line }),
        }
    }

    /// The extent of each dimension. Non-arrays have the empty shape.
    ///
    /// # Errors
    /// Fails on ragged arrays, whose rows differ in shape.
    pub fn shape(&self, line: usize) -> EvalResult<Vec<usize>> {
        let Self::Array(items) = self else {
            return Ok(Vec::new());
        };
        let Some(first) = items.first() else {
            return Ok(vec![0]);
        };

        let sub = first.shape(line)?;
        for item in items.iter().skip(1) {
            if item.shape(line)? != sub {
                return Err(RuntimeError::TypeError { details: "ragged arrays are not supported".into(),
                                                     line });
            }
        }

        let mut shape = vec![items.len()];
        shape.extend(sub);
        Ok(shape)
    }

    /// A short name for the kind of value, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Real(_) => "float",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
            Self::Array(_) => "array",
            Self::Range { .. } => "range",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Range { start, end } => write!(f, "{start}:{end}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}
