/// The binary operator precedence chain.
pub mod binary;
/// The parser state, program entry point and suites.
pub mod core;
/// Statement forms: classes, methods, `if`, `print`, `return`, assignments.
pub mod statement;
/// Unary operators, primaries, name chains and call trailers.
pub mod unary;

pub use self::core::{parse_program, ParseResult, Parser};
