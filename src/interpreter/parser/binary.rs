use crate::ast::{ComparisonOp, Statement};
use crate::interpreter::lexer::Token;
use crate::interpreter::parser::core::{ParseResult, Parser};

impl Parser {
    /// Parses a full expression.
    ///
    /// Precedence, loosest first: `or`, `and`, `not`, comparisons, `+`/`-`,
    /// `*`/`/`, unary minus, primaries. Comparisons do not chain.
    pub(crate) fn expression(&mut self) -> ParseResult<Statement> {
        self.or_expression()
    }

    fn or_expression(&mut self) -> ParseResult<Statement> {
        let mut lhs = self.and_expression()?;

        while *self.lexer.current() == Token::Or {
            self.lexer.advance();
            let rhs = self.and_expression()?;
            lhs = Statement::Or { lhs: Box::new(lhs), rhs: Box::new(rhs) };
        }

        Ok(lhs)
    }

    fn and_expression(&mut self) -> ParseResult<Statement> {
        let mut lhs = self.not_expression()?;

        while *self.lexer.current() == Token::And {
            self.lexer.advance();
            let rhs = self.not_expression()?;
            lhs = Statement::And { lhs: Box::new(lhs), rhs: Box::new(rhs) };
        }

        Ok(lhs)
    }

    fn not_expression(&mut self) -> ParseResult<Statement> {
        if *self.lexer.current() == Token::Not {
            self.lexer.advance();
            let value = self.not_expression()?;
            return Ok(Statement::Not { value: Box::new(value) });
        }

        self.comparison()
    }

    fn comparison(&mut self) -> ParseResult<Statement> {
        let lhs = self.sum()?;

        let op = match self.lexer.current() {
            Token::Eq => ComparisonOp::Equal,
            Token::NotEq => ComparisonOp::NotEqual,
            Token::Char('<') => ComparisonOp::Less,
            Token::LessOrEq => ComparisonOp::LessOrEqual,
            Token::Char('>') => ComparisonOp::Greater,
            Token::GreaterOrEq => ComparisonOp::GreaterOrEqual,
            _ => return Ok(lhs),
        };

        self.lexer.advance();
        let rhs = self.sum()?;

        Ok(Statement::Comparison { op, lhs: Box::new(lhs), rhs: Box::new(rhs) })
    }

    fn sum(&mut self) -> ParseResult<Statement> {
        let mut lhs = self.term()?;

        loop {
            let op = match self.lexer.current() {
                Token::Char('+') => '+',
                Token::Char('-') => '-',
                _ => break,
            };

            self.lexer.advance();
            let rhs = Box::new(self.term()?);
            lhs = match op {
                '+' => Statement::Add { lhs: Box::new(lhs), rhs },
                _ => Statement::Sub { lhs: Box::new(lhs), rhs },
            };
        }

        Ok(lhs)
    }

    fn term(&mut self) -> ParseResult<Statement> {
        let mut lhs = self.factor()?;

        loop {
            let op = match self.lexer.current() {
                Token::Char('*') => '*',
                Token::Char('/') => '/',
                _ => break,
            };

            self.lexer.advance();
            let rhs = Box::new(self.factor()?);
            lhs = match op {
                '*' => Statement::Mult { lhs: Box::new(lhs), rhs },
                _ => Statement::Div { lhs: Box::new(lhs), rhs },
            };
        }

        Ok(lhs)
    }
}
