use crate::interpreter::checker::symbol::Symbol;

/// A semantic rule violated by the program.
///
/// The checker reports one of these per violation and keeps going; nothing
/// here is fatal on its own.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// A name was read before anything was assigned to it.
    #[error("Error on line {line}: unknown identifier {name}")]
    UnknownIdentifier {
        /// The variable name.
        name: String,
        /// The source line.
        line: usize,
    },
    /// A name was defined twice in the same frame.
    ///
    /// Raised when [`ScopeChain::define`] refuses a name the innermost frame
    /// already binds. Assignments only define names that are not visible yet
    /// and every loop iterator gets a fresh frame, so well-formed programs do
    /// not reach it.
    ///
    /// [`ScopeChain::define`]: crate::interpreter::scope::ScopeChain::define
    #[error("Error on line {line}: {name} is already defined in this scope")]
    Redefinition {
        /// The variable name.
        name: String,
        /// The source line.
        line: usize,
    },
    /// The operands of an element-wise or equality operator differ.
    #[error("Error on line {line}: operands of {op} must have the same type and shape, got {left} and {right}")]
    MismatchedOperands {
        /// The operator.
        op:    String,
        /// The left operand's symbol.
        left:  Symbol,
        /// The right operand's symbol.
        right: Symbol,
        /// The source line.
        line:  usize,
    },
    /// The operands of `*` have different base types.
    #[error("Error on line {line}: operands of {op} must have the same base type, got {left} and {right}")]
    MismatchedBaseTypes {
        /// The operator.
        op:    String,
        /// The left operand's symbol.
        left:  Symbol,
        /// The right operand's symbol.
        right: Symbol,
        /// The source line.
        line:  usize,
    },
    /// The inner dimensions of a matrix product do not agree.
    #[error("Error on line {line}: incompatible shapes {left} and {right} for matrix multiplication")]
    IncompatibleShapes {
        /// The left operand's symbol.
        left:  Symbol,
        /// The right operand's symbol.
        right: Symbol,
        /// The source line.
        line:  usize,
    },
    /// An operand of `/` or an ordering comparison was not a single value.
    #[error("Error on line {line}: {op} requires scalar operands, got {found}")]
    ExpectedScalar {
        /// The operator.
        op:    String,
        /// The offending symbol.
        found: Symbol,
        /// The source line.
        line:  usize,
    },
    /// An operand had to be a single boolean.
    #[error("Error on line {line}: {op} requires boolean operands, got {found}")]
    ExpectedBool {
        /// The operator.
        op:    String,
        /// The offending symbol.
        found: Symbol,
        /// The source line.
        line:  usize,
    },
    /// Range bounds must be integers.
    #[error("Error on line {line}: range bounds must be integers, got {found}")]
    ExpectedIntegerBound {
        /// The offending symbol.
        found: Symbol,
        /// The source line.
        line:  usize,
    },
    /// Elements of a vector literal differ in type or shape.
    #[error("Error on line {line}: all elements of a vector must have the same type and shape")]
    InconsistentElements {
        /// The source line.
        line: usize,
    },
    /// A matrix row holds something other than scalars.
    #[error("Error on line {line}: matrix rows must contain scalars")]
    NonScalarMatrixElement {
        /// The source line.
        line: usize,
    },
    /// The left of an assignment is not a variable or a subscripted variable.
    #[error("Error on line {line}: invalid assignment target")]
    InvalidAssignmentTarget {
        /// The source line.
        line: usize,
    },
    /// Reassignment with a different type or shape.
    #[error("Error on line {line}: cannot assign {found} to {name} of type {expected}")]
    AssignmentMismatch {
        /// The variable, or `name[...]` for an element.
        name:     String,
        /// What the target currently holds.
        expected: Symbol,
        /// What the right-hand side produces.
        found:    Symbol,
        /// The source line.
        line:     usize,
    },
    /// `print(...)` used where a value is required.
    #[error("Error on line {line}: print does not produce a value")]
    VoidValue {
        /// The source line.
        line: usize,
    },
    /// `break`/`continue` with no enclosing loop.
    #[error("Error on line {line}: control statement outside of a loop")]
    ControlOutsideLoop {
        /// `break` or `continue`.
        statement: String,
        /// The source line.
        line:      usize,
    },
    /// A range appeared somewhere other than a `for` header.
    #[error("Error on line {line}: a range is only allowed in a for loop header")]
    RangeOutsideFor {
        /// The source line.
        line: usize,
    },
    /// A `for` header that is not a range.
    #[error("Error on line {line}: for loop expects a range")]
    ForExpectsRange {
        /// The source line.
        line: usize,
    },
    /// `eye`, `zeros` or `ones` called with the wrong number of arguments.
    #[error("Error on line {line}: {function} expects exactly one argument, got {found}")]
    BuiltinArity {
        /// The built-in name.
        function: String,
        /// The number of arguments passed.
        found:    usize,
        /// The source line.
        line:     usize,
    },
    /// A built-in size that is not a non-negative integer literal.
    #[error("Error on line {line}: {function} expects a non-negative integer literal size")]
    BuiltinSize {
        /// The built-in name.
        function: String,
        /// The source line.
        line:     usize,
    },
    /// Something other than a variable was subscripted.
    #[error("Error on line {line}: only variables can be subscripted")]
    InvalidSubscriptTarget {
        /// The source line.
        line: usize,
    },
}
