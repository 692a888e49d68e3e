use std::rc::Rc;

use crate::ast::Statement;
use crate::error::ParseError;
use crate::interpreter::lexer::Token;
use crate::interpreter::parser::core::{ParseResult, Parser};

impl Parser {
    /// Parses a unary minus or a primary.
    ///
    /// The lexer emits `-` as an ordinary operator token, so negation and
    /// subtraction look alike; in operand position a `-` is resolved here as
    /// subtraction from zero.
    pub(crate) fn factor(&mut self) -> ParseResult<Statement> {
        if *self.lexer.current() == Token::Char('-') {
            self.lexer.advance();
            let value = self.factor()?;
            return Ok(Statement::Sub {
                lhs: Box::new(Statement::NumericConst { value: 0 }),
                rhs: Box::new(value),
            });
        }

        self.primary()
    }

    /// Parses a literal, a parenthesized expression, or a name followed by
    /// its field and call trailers.
    fn primary(&mut self) -> ParseResult<Statement> {
        match self.lexer.current() {
            Token::Number(value) => {
                let value = *value;
                self.lexer.advance();
                Ok(Statement::NumericConst { value })
            },
            Token::String(value) => {
                let value = value.clone();
                self.lexer.advance();
                Ok(Statement::StringConst { value })
            },
            Token::True => {
                self.lexer.advance();
                Ok(Statement::BoolConst { value: true })
            },
            Token::False => {
                self.lexer.advance();
                Ok(Statement::BoolConst { value: false })
            },
            Token::None => {
                self.lexer.advance();
                Ok(Statement::NoneConst)
            },
            Token::Char('(') => {
                self.lexer.advance();
                let expression = self.expression()?;
                self.lexer.expect(&Token::Char(')'))?;
                self.lexer.advance();
                Ok(expression)
            },
            Token::Id(name) => {
                let name = name.clone();
                self.lexer.advance();
                self.call_chain(name)
            },
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// Parses what follows a leading identifier: an instantiation, a `str`
    /// conversion, or a dotted chain of fields ending in an optional method
    /// call.
    fn call_chain(&mut self, first: String) -> ParseResult<Statement> {
        if *self.lexer.current() == Token::Char('(') {
            let line = self.lexer.line();

            if let Some(class) = self.classes.get(&first) {
                let class = Rc::clone(class);
                let args = self.arguments()?;
                return self.trailers(Statement::NewInstance { class, args });
            }

            if first == "str" {
                let mut args = self.arguments()?;
                return match (args.pop(), args.is_empty()) {
                    (Some(value), true) => {
                        self.trailers(Statement::Stringify { value: Box::new(value) })
                    },
                    _ => Err(ParseError::UnexpectedToken {
                        token: "argument list of 'str'".to_string(),
                        line,
                    }),
                };
            }

            return Err(ParseError::UnknownClass { name: first, line });
        }

        let mut names = vec![first];
        while *self.lexer.current() == Token::Char('.') {
            let name = self.lexer.expect_advance_id()?.to_string();
            self.lexer.advance();

            if *self.lexer.current() == Token::Char('(') {
                let args = self.arguments()?;
                let call = Statement::MethodCall {
                    object: Box::new(Statement::VariableValue { names }),
                    method: name,
                    args,
                };
                return self.trailers(call);
            }

            names.push(name);
        }

        Ok(Statement::VariableValue { names })
    }

    /// Parses further `.method(...)` calls chained onto a call result.
    ///
    /// A plain field of a call result cannot be read: field reads are name
    /// chains only.
    fn trailers(&mut self, mut node: Statement) -> ParseResult<Statement> {
        while *self.lexer.current() == Token::Char('.') {
            let method = self.lexer.expect_advance_id()?.to_string();
            self.lexer.advance();

            if *self.lexer.current() != Token::Char('(') {
                return Err(ParseError::FieldOfCallResult {
                    name: method,
                    line: self.lexer.line(),
                });
            }

            let args = self.arguments()?;
            node = Statement::MethodCall { object: Box::new(node), method, args };
        }

        Ok(node)
    }

    /// Parses a parenthesized, comma-separated argument list. The cursor
    /// must stand on the opening `(`; it ends up past the closing `)`.
    fn arguments(&mut self) -> ParseResult<Vec<Statement>> {
        self.lexer.advance();

        let mut args = Vec::new();
        if *self.lexer.current() == Token::Char(')') {
            self.lexer.advance();
            return Ok(args);
        }

        loop {
            args.push(self.expression()?);
            match self.lexer.current() {
                Token::Char(',') => {
                    self.lexer.advance();
                },
                Token::Char(')') => {
                    self.lexer.advance();
                    return Ok(args);
                },
                _ => return Err(self.unexpected("',' or ')'")),
            }
        }
    }
}
