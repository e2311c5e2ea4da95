/// Represents all errors that can occur during evaluation.
#[derive(thiserror::Error, Debug)]
pub enum RuntimeError {
    /// Tried to read a variable that is not bound in any frame.
    #[error("Error on line {line}: variable '{name}' is not defined")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An index fell outside the array along one axis.
    #[error("Error on line {line}: index {index} is out of bounds for axis {axis} with size {size}")]
    IndexOutOfBounds {
        /// The axis being indexed, counting from zero.
        axis:  usize,
        /// The requested index.
        index: i64,
        /// The length of that axis.
        size:  usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// More indices than the value has dimensions.
    #[error("Error on line {line}: too many indices: got {found}, value has {rank} dimensions")]
    TooManyIndices {
        /// The number of indices supplied.
        found: usize,
        /// The rank of the indexed value.
        rank:  usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error on line {line}: {details}")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A boolean value was expected, but not found.
    #[error("Error on line {line}: expected a boolean")]
    ExpectedBoolean {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric value was expected, but not found.
    #[error("Error on line {line}: expected a number")]
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer value was expected, but not found.
    #[error("Error on line {line}: expected an integer")]
    ExpectedInteger {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An array value was expected, but not found.
    #[error("Error on line {line}: expected an array")]
    ExpectedArray {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value was needed but the expression produced none.
    #[error("Error on line {line}: expression does not produce a value")]
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Array operands whose shapes cannot be combined.
    #[error("Error on line {line}: shapes {left:?} and {right:?} are not aligned")]
    ShapeMismatch {
        /// The left operand's shape.
        left:  Vec<usize>,
        /// The right operand's shape.
        right: Vec<usize>,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A built-in was asked for a negative size.
    #[error("Error on line {line}: {function} expects a non-negative size, got {size}")]
    NegativeSize {
        /// The built-in name.
        function: String,
        /// The requested size.
        size:     i64,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A built-in was asked for more elements than can be allocated.
    #[error("Error on line {line}: {function}({size}) is too large to allocate")]
    SizeTooLarge {
        /// The built-in name.
        function: String,
        /// The requested size.
        size:     i64,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The wrong number of arguments was supplied to a built-in.
    #[error("Error on line {line}: {function} expects {expected} argument(s), got {found}")]
    ArgumentCountMismatch {
        /// The built-in name.
        function: String,
        /// How many arguments it takes.
        expected: usize,
        /// How many were passed.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: division by zero")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Error on line {line}: integer overflow")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer too large to convert without losing precision.
    #[error("Error on line {line}: integer is too large")]
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `break`/`continue` reached the top level.
    #[error("Error on line {line}: {statement} outside of a loop")]
    ControlOutsideLoop {
        /// `break` or `continue`.
        statement: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Writing to the output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
