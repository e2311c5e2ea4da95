/// A character sequence the lexer could not turn into a token.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No token starts with this character.
    #[error("illegal character '{character}' at {line}")]
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// The source line.
        line:      usize,
    },
    /// An integer literal that does not fit in 64 bits.
    #[error("integer literal {literal} is too large at {line}")]
    IntegerTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line.
        line:    usize,
    },
}

impl LexError {
    /// Returns the line the error occurred on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::IllegalCharacter { line, .. } | Self::IntegerTooLarge { line, .. } => *line,
        }
    }
}
