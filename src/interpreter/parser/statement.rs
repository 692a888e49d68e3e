use std::rc::Rc;

use crate::ast::Statement;
use crate::error::ParseError;
use crate::interpreter::lexer::Token;
use crate::interpreter::parser::core::{ParseResult, Parser};
use crate::interpreter::value::class::{Class, Method};

impl Parser {
    /// Parses a single statement, including its terminating `Newline`.
    pub(crate) fn statement(&mut self) -> ParseResult<Statement> {
        match self.lexer.current() {
            Token::Class => self.class_definition(),
            Token::If => self.if_statement(),
            Token::Print => self.print_statement(),
            Token::Return => self.return_statement(),
            _ => self.simple_statement(),
        }
    }

    /// Parses `class Name [ ( Parent ) ] :` followed by an indented block of
    /// method definitions.
    ///
    /// The finished class is recorded in the class table, which makes the
    /// name available for instantiation and inheritance in everything parsed
    /// afterwards.
    fn class_definition(&mut self) -> ParseResult<Statement> {
        let name = self.lexer.expect_advance_id()?.to_string();
        self.lexer.advance();

        let parent = if *self.lexer.current() == Token::Char('(') {
            let parent_name = self.lexer.expect_advance_id()?.to_string();
            let line = self.lexer.line();
            self.lexer.expect_advance(&Token::Char(')'))?;
            self.lexer.advance();

            match self.classes.get(&parent_name) {
                Some(parent) => Some(Rc::clone(parent)),
                None => return Err(ParseError::UnknownClass { name: parent_name, line }),
            }
        } else {
            None
        };

        self.lexer.expect(&Token::Char(':'))?;
        self.lexer.expect_advance(&Token::Newline)?;
        self.lexer.expect_advance(&Token::Indent)?;
        self.lexer.advance();

        let mut methods = Vec::new();
        while *self.lexer.current() == Token::Def {
            methods.push(self.method_definition()?);
        }

        self.lexer.expect(&Token::Dedent)?;
        self.lexer.advance();

        let class = Rc::new(Class::new(name.clone(), methods, parent));
        self.classes.insert(name, Rc::clone(&class));

        Ok(Statement::ClassDefinition { class })
    }

    /// Parses `def name(params):` and its body, wrapping the body in the
    /// method boundary node.
    fn method_definition(&mut self) -> ParseResult<Method> {
        let name = self.lexer.expect_advance_id()?.to_string();
        self.lexer.expect_advance(&Token::Char('('))?;
        self.lexer.advance();

        let mut formal_params = Vec::new();
        while *self.lexer.current() != Token::Char(')') {
            formal_params.push(self.lexer.expect_id()?.to_string());
            self.lexer.advance();
            if *self.lexer.current() == Token::Char(',') {
                self.lexer.advance();
            } else {
                break;
            }
        }

        self.lexer.expect(&Token::Char(')'))?;
        self.lexer.expect_advance(&Token::Char(':'))?;
        self.lexer.advance();

        let body = self.suite()?;
        Ok(Method {
            name,
            formal_params,
            body: Statement::MethodBody { body: Box::new(body) },
        })
    }

    /// Parses `if cond:` with an optional `else:` branch.
    fn if_statement(&mut self) -> ParseResult<Statement> {
        self.lexer.advance();
        let condition = self.expression()?;

        self.lexer.expect(&Token::Char(':'))?;
        self.lexer.advance();
        let then_body = self.suite()?;

        let else_body = if *self.lexer.current() == Token::Else {
            self.lexer.expect_advance(&Token::Char(':'))?;
            self.lexer.advance();
            Some(Box::new(self.suite()?))
        } else {
            None
        };

        Ok(Statement::IfElse {
            condition: Box::new(condition),
            then_body: Box::new(then_body),
            else_body,
        })
    }

    /// Parses `print` with zero or more comma-separated arguments.
    fn print_statement(&mut self) -> ParseResult<Statement> {
        self.lexer.advance();

        let mut args = Vec::new();
        if *self.lexer.current() != Token::Newline {
            loop {
                args.push(self.expression()?);
                if *self.lexer.current() == Token::Char(',') {
                    self.lexer.advance();
                } else {
                    break;
                }
            }
        }

        self.lexer.expect(&Token::Newline)?;
        self.lexer.advance();

        Ok(Statement::Print { args })
    }

    /// Parses `return`, with a bare form returning `None`.
    fn return_statement(&mut self) -> ParseResult<Statement> {
        self.lexer.advance();

        let value = if *self.lexer.current() == Token::Newline {
            Statement::NoneConst
        } else {
            self.expression()?
        };

        self.lexer.expect(&Token::Newline)?;
        self.lexer.advance();

        Ok(Statement::Return { value: Box::new(value) })
    }

    /// Parses an expression statement or, when an `=` follows a plain or
    /// dotted name, an assignment.
    fn simple_statement(&mut self) -> ParseResult<Statement> {
        let expression = self.expression()?;

        let statement = if *self.lexer.current() == Token::Char('=') {
            let mut names = match expression {
                Statement::VariableValue { names } => names,
                _ => return Err(self.unexpected("an assignment target")),
            };

            self.lexer.advance();
            let value = Box::new(self.expression()?);

            match (names.pop(), names.is_empty()) {
                (Some(name), true) => Statement::Assignment { name, value },
                (Some(field), false) => Statement::FieldAssignment {
                    object: Box::new(Statement::VariableValue { names }),
                    field,
                    value,
                },
                (None, _) => return Err(self.unexpected("an assignment target")),
            }
        } else {
            expression
        };

        self.lexer.expect(&Token::Newline)?;
        self.lexer.advance();

        Ok(statement)
    }
}
