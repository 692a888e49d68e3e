#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while producing the token stream.
pub enum LexerError {
    /// A numeric literal does not fit into a 64-bit signed integer.
    NumberOutOfRange {
        /// The literal as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A run of characters matched no token rule.
    UnrecognizedToken {
        /// The offending characters.
        slice: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A token expectation raised through `expect` or `expect_advance` failed.
    ExpectFailed {
        /// Description of the expected token.
        expected: String,
        /// The token actually found.
        found: String,
        /// The source line of the token actually found.
        line: usize,
    },
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumberOutOfRange { literal, line } => {
                write!(f, "Error on line {line}: Numeric literal '{literal}' is out of range.")
            },
            Self::UnrecognizedToken { slice, line } => {
                write!(f, "Error on line {line}: Unrecognized token '{slice}'.")
            },
            Self::ExpectFailed { expected, found, line } => {
                write!(f, "Error on line {line}: Expected {expected}, but found {found}.")
            },
        }
    }
}

impl std::error::Error for LexerError {}
