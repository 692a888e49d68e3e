//! # pyrite
//!
//! pyrite is an interpreter for a small, indentation-structured, dynamically
//! typed object-oriented scripting language: classes with single
//! inheritance, methods with an implicit `self`, integer arithmetic,
//! strings, booleans, `None`, `if`/`else`, and `print`.
//!
//! Source text is lexed into a token stream with synthetic
//! `Indent`/`Dedent`/`Newline`/`Eof` markers, parsed into an AST, and the
//! AST is walked directly; output goes to a stream the embedder supplies.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

use std::io;

use crate::interpreter::evaluator::core::Context;
use crate::interpreter::lexer::Lexer;
use crate::interpreter::parser::parse_program;
use crate::interpreter::value::class::Closure;

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` enum that represents the syntactic
/// structure of source code as a tree. Statements and expressions share one
/// polymorphic node type, built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines the node variants for all language constructs.
/// - Carries the constants, names, classes and operator tags each node
///   needs to execute.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while interpreting
/// code. Lexer and parser errors carry the source line they occurred on;
/// runtime errors describe the failing operation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and error handling to provide a complete runtime for
/// source code execution.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and values.
/// - Provides the entry points for interpreting programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Executes a program, writing its output to the given sink.
///
/// The source is lexed, parsed and executed against a fresh global scope.
/// Whatever the program printed before a failure stays in the sink.
///
/// # Errors
/// Returns an error if lexing, parsing or execution fails.
///
/// # Examples
/// ```
/// let mut output = Vec::new();
/// pyrite::run("print 1 + 2 * 3", &mut output).unwrap();
/// assert_eq!(output, b"7\n");
/// ```
pub fn run(source: &str, output: &mut impl io::Write) -> Result<(), Box<dyn std::error::Error>> {
    let lexer = Lexer::new(source)?;
    let program = parse_program(lexer)?;

    let mut scope = Closure::new();
    let mut context = Context::new(output);
    context.execute(&program, &mut scope)?;

    Ok(())
}
