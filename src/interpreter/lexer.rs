use std::fmt;

use logos::Logos;

use crate::error::LexerError;

/// Represents a lexical token in the source input.
///
/// Tokens are either valued (numbers, identifiers, strings, single
/// characters), keywords, two-character operators, or the structural markers
/// the indentation layer produces: `Newline` at the end of every non-empty
/// line, `Indent`/`Dedent` for changes in indentation depth, and a single
/// `Eof` closing every stream.
///
/// Single-character operators (`+ - * / = < >`) and punctuation
/// (`( ) : , .`) are all carried as [`Token::Char`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An integer literal.
    Number(i64),
    /// An identifier.
    Id(String),
    /// A single-character operator or punctuation mark.
    Char(char),
    /// A string literal, with escapes already decoded.
    String(String),
    /// `class`
    Class,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `def`
    Def,
    /// `print`
    Print,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// `None`. Also produced by a lone `!`, a quirk kept for compatibility.
    None,
    /// `True`
    True,
    /// `False`
    False,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<=`
    LessOrEq,
    /// `>=`
    GreaterOrEq,
    /// End of a line that produced at least one token.
    Newline,
    /// Indentation increased by one level (two spaces).
    Indent,
    /// Indentation decreased by one level.
    Dedent,
    /// End of the token stream.
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "Number{{{value}}}"),
            Self::Id(value) => write!(f, "Id{{{value}}}"),
            Self::Char(value) => write!(f, "Char{{{value}}}"),
            Self::String(value) => write!(f, "String{{{value}}}"),
            Self::Class => write!(f, "Class"),
            Self::Return => write!(f, "Return"),
            Self::If => write!(f, "If"),
            Self::Else => write!(f, "Else"),
            Self::Def => write!(f, "Def"),
            Self::Print => write!(f, "Print"),
            Self::And => write!(f, "And"),
            Self::Or => write!(f, "Or"),
            Self::Not => write!(f, "Not"),
            Self::None => write!(f, "None"),
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
            Self::Eq => write!(f, "Eq"),
            Self::NotEq => write!(f, "NotEq"),
            Self::LessOrEq => write!(f, "LessOrEq"),
            Self::GreaterOrEq => write!(f, "GreaterOrEq"),
            Self::Newline => write!(f, "Newline"),
            Self::Indent => write!(f, "Indent"),
            Self::Dedent => write!(f, "Dedent"),
            Self::Eof => write!(f, "Eof"),
        }
    }
}

/// The per-line token rules.
///
/// The raw lexer only ever sees a single line body, with the leading
/// indentation already stripped; the structural tokens are supplied by
/// [`tokenize`]. Comments run to the end of the line, so skipping them is
/// equivalent to cutting the line short. Spaces separate tokens, but no
/// other character does: identifiers are free to contain digits, quotes and
/// even tabs after their first character, exactly as written.
#[derive(Logos, Debug, Clone, PartialEq)]
enum RawToken {
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Number(i64),

    #[regex(r#""([^"\\]|\\.)*"?"#, unescape)]
    #[regex(r"'([^'\\]|\\.)*'?", unescape)]
    Str(String),

    #[token("class")]
    Class,
    #[token("return")]
    Return,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("def")]
    Def,
    #[token("print")]
    Print,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("not")]
    Not,
    // A lone `!` is not an operator; it lexes as `None`.
    #[token("None")]
    #[token("!")]
    None,
    #[token("True")]
    True,
    #[token("False")]
    False,

    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LessOrEq,
    #[token(">=")]
    GreaterOrEq,

    #[regex(r"[+\-*/=<>():,.]", |lex| lex.slice().chars().next())]
    Sym(char),

    #[regex(r#"[^ 0-9'"+\-*/=<>!():,.#][^ +\-*/=<>!():,.#]*"#, |lex| lex.slice().to_string())]
    Id(String),

    /// A comment, running to the end of the line.
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
    /// Spaces between tokens.
    #[regex(r"[ ]+", logos::skip)]
    Ignored,
}

/// Decodes a string literal slice: strips the quotes and resolves escapes.
///
/// The opening quote fixes the terminator. `\t` and `\n` decode to tab and
/// newline, any other escaped character decodes to itself. A literal without
/// its closing quote simply ends with the line.
fn unescape(lex: &logos::Lexer<RawToken>) -> String {
    let slice = lex.slice();
    let quote = slice.chars().next().unwrap_or('"');
    let mut chars = slice[quote.len_utf8()..].chars();
    let mut result = String::new();

    while let Some(c) = chars.next() {
        if c == quote {
            break;
        }
        if c == '\\' {
            match chars.next() {
                Some('t') => result.push('\t'),
                Some('n') => result.push('\n'),
                Some(other) => result.push(other),
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }

    result
}

fn from_raw(raw: RawToken) -> Option<Token> {
    let token = match raw {
        RawToken::Number(value) => Token::Number(value),
        RawToken::Str(value) => Token::String(value),
        RawToken::Class => Token::Class,
        RawToken::Return => Token::Return,
        RawToken::If => Token::If,
        RawToken::Else => Token::Else,
        RawToken::Def => Token::Def,
        RawToken::Print => Token::Print,
        RawToken::And => Token::And,
        RawToken::Or => Token::Or,
        RawToken::Not => Token::Not,
        RawToken::None => Token::None,
        RawToken::True => Token::True,
        RawToken::False => Token::False,
        RawToken::Eq => Token::Eq,
        RawToken::NotEq => Token::NotEq,
        RawToken::LessOrEq => Token::LessOrEq,
        RawToken::GreaterOrEq => Token::GreaterOrEq,
        RawToken::Sym(value) => Token::Char(value),
        RawToken::Id(value) => Token::Id(value),
        // Skipped by the lexer; they never surface.
        RawToken::Comment | RawToken::Ignored => return None,
    };
    Some(token)
}

/// Turns source text into the full token stream.
///
/// The input is processed line by line. A line whose first character is `#`
/// is a comment and contributes nothing, and so does a line that is empty or
/// all spaces. For any other line the leading spaces are counted in pairs
/// (two spaces per level, a leftover single space counts for nothing) and
/// the difference against the previous depth is emitted as `Indent` or
/// `Dedent` tokens. A `Newline` follows every line that produced at least
/// one body token. At the end of the input any open indentation is closed
/// with `Dedent` tokens and the stream is sealed with `Eof`.
fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexerError> {
    let mut tokens = Vec::new();
    let mut indent = 0;
    let mut line_number = 0;

    for (index, line) in source.split('\n').enumerate() {
        line_number = index + 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let body_start = line.len() - line.trim_start_matches(' ').len();
        let body = &line[body_start..];
        if body.is_empty() {
            continue;
        }

        let level = body_start / 2;
        for _ in level..indent {
            tokens.push((Token::Dedent, line_number));
        }
        for _ in indent..level {
            tokens.push((Token::Indent, line_number));
        }
        indent = level;

        let body_tokens_from = tokens.len();
        let mut lexer = RawToken::lexer(body);

        while let Some(raw) = lexer.next() {
            match raw {
                Ok(raw) => {
                    if let Some(token) = from_raw(raw) {
                        tokens.push((token, line_number));
                    }
                },
                Err(()) => {
                    let slice = lexer.slice().to_string();
                    return Err(if slice.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                        LexerError::NumberOutOfRange { literal: slice, line: line_number }
                    } else {
                        LexerError::UnrecognizedToken { slice, line: line_number }
                    });
                },
            }
        }

        if tokens.len() > body_tokens_from {
            tokens.push((Token::Newline, line_number));
        }
    }

    for _ in 0..indent {
        tokens.push((Token::Dedent, line_number));
    }
    tokens.push((Token::Eof, line_number));

    Ok(tokens)
}

/// The token stream, exposed to the parser through a cursor.
///
/// The whole input is tokenized up front; the cursor then moves forward one
/// token at a time and never past the final `Eof`.
pub struct Lexer {
    tokens: Vec<(Token, usize)>,
    position: usize,
}

impl Lexer {
    /// Tokenizes `source` and positions the cursor on the first token.
    pub fn new(source: &str) -> Result<Self, LexerError> {
        let tokens = tokenize(source)?;
        log::debug!("lexed {} tokens", tokens.len());
        Ok(Self { tokens, position: 0 })
    }

    /// The token under the cursor.
    #[must_use]
    pub fn current(&self) -> &Token {
        &self.tokens[self.position].0
    }

    /// The source line of the token under the cursor.
    #[must_use]
    pub fn line(&self) -> usize {
        self.tokens[self.position].1
    }

    /// Advances the cursor and returns the new current token.
    ///
    /// Advancing past the final `Eof` is a no-op.
    pub fn advance(&mut self) -> &Token {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Iterates over the remaining tokens without moving the cursor.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens[self.position..].iter().map(|(token, _)| token)
    }

    fn expect_failed(&self, expected: &str) -> LexerError {
        LexerError::ExpectFailed {
            expected: expected.to_string(),
            found: self.current().to_string(),
            line: self.line(),
        }
    }

    /// Checks that the current token equals `expected`, payload included.
    pub fn expect(&self, expected: &Token) -> Result<(), LexerError> {
        if self.current() == expected {
            Ok(())
        } else {
            Err(self.expect_failed(&expected.to_string()))
        }
    }

    /// Checks that the current token is an identifier and returns its name.
    pub fn expect_id(&self) -> Result<&str, LexerError> {
        match self.current() {
            Token::Id(name) => Ok(name),
            _ => Err(self.expect_failed("an identifier")),
        }
    }

    /// Checks that the current token is a number and returns its value.
    pub fn expect_number(&self) -> Result<i64, LexerError> {
        match self.current() {
            Token::Number(value) => Ok(*value),
            _ => Err(self.expect_failed("a number")),
        }
    }

    /// Checks that the current token is a string literal and returns it.
    pub fn expect_string(&self) -> Result<&str, LexerError> {
        match self.current() {
            Token::String(value) => Ok(value),
            _ => Err(self.expect_failed("a string")),
        }
    }

    /// Advances, then checks the new current token against `expected`.
    pub fn expect_advance(&mut self, expected: &Token) -> Result<(), LexerError> {
        self.advance();
        self.expect(expected)
    }

    /// Advances, then expects an identifier and returns its name.
    pub fn expect_advance_id(&mut self) -> Result<&str, LexerError> {
        self.advance();
        self.expect_id()
    }
}
