#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Tried to read a field that the object does not have.
    UnknownField {
        /// The name of the field.
        name: String,
    },
    /// Used dotted access, a method call, or a field assignment on a value
    /// that is not an object.
    NotAnInstance,
    /// Called a method that does not exist with the given argument count.
    MethodNotImplemented {
        /// The name of the method.
        name: String,
    },
    /// An operator was applied to operands it does not support.
    UnsupportedOperands {
        /// The operator, as written in the source.
        op: &'static str,
    },
    /// A boolean value was expected, but not found.
    ExpectedBoolean,
    /// Attempted division by zero.
    DivisionByZero,
    /// Arithmetic operation overflowed.
    Overflow,
    /// Two values could not be compared.
    NotComparable {
        /// The relation that was requested, `"equality"` or `"less"`.
        relation: &'static str,
    },
    /// Writing to the output stream failed.
    OutputFailed {
        /// Details reported by the output sink.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),
            Self::UnknownField { name } => write!(f, "Unknown field '{name}'."),
            Self::NotAnInstance => write!(f, "Value is not an object."),
            Self::MethodNotImplemented { name } => {
                write!(f, "Method '{name}' is not implemented with this argument count.")
            },
            Self::UnsupportedOperands { op } => {
                write!(f, "Operator '{op}' is not supported for these operands.")
            },
            Self::ExpectedBoolean => write!(f, "Expected boolean."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
            Self::NotComparable { relation } => {
                write!(f, "Cannot compare objects for {relation}.")
            },
            Self::OutputFailed { details } => write!(f, "Failed to write output: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
