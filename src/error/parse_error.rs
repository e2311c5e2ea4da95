/// Represents all errors that can occur while parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Encountered a token that is not valid at this position.
    #[error("unexpected token {token} at line {line}")]
    UnexpectedToken {
        /// The kind name of the token, such as `RPAR`.
        token: String,
        /// The source line where the token appears.
        line:  usize,
    },
    /// The input ended in the middle of a construct.
    #[error("end of file reached")]
    UnexpectedEndOfInput,
}
