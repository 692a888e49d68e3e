use crate::error::LexerError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing the token stream.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered, with a hint about what was expected.
        token: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A name was called like a class, but no class with that name exists.
    UnknownClass {
        /// The name that was used.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A field access on a call result was not itself a method call.
    FieldOfCallResult {
        /// The field name that was accessed.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A token expectation failed inside the lexer cursor.
    Expect(LexerError),
}

impl From<LexerError> for ParseError {
    fn from(error: LexerError) -> Self {
        Self::Expect(error)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
            Self::UnknownClass { name, line } => {
                write!(f, "Error on line {line}: Unknown class '{name}'.")
            },
            Self::FieldOfCallResult { name, line } => {
                write!(
                    f,
                    "Error on line {line}: Field '{name}' of a call result cannot be read directly."
                )
            },
            Self::Expect(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for ParseError {}
