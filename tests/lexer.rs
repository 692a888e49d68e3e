use pyrite::interpreter::lexer::{Lexer, Token};

fn lex(source: &str) -> Vec<Token> {
    let lexer = Lexer::new(source).expect("lexing failed");
    lexer.tokens().cloned().collect()
}

#[test]
fn simple_assignment_token_sequence() {
    assert_eq!(
        lex("x = 1"),
        vec![
            Token::Id("x".to_string()),
            Token::Char('='),
            Token::Number(1),
            Token::Newline,
            Token::Eof,
        ]
    );
}

#[test]
fn indented_block_token_sequence() {
    assert_eq!(
        lex("if x:\n  y = 1\n"),
        vec![
            Token::If,
            Token::Id("x".to_string()),
            Token::Char(':'),
            Token::Newline,
            Token::Indent,
            Token::Id("y".to_string()),
            Token::Char('='),
            Token::Number(1),
            Token::Newline,
            Token::Dedent,
            Token::Eof,
        ]
    );
}

#[test]
fn stream_ends_with_exactly_one_eof() {
    for source in ["", "x = 1", "if a:\n  if b:\n    c = 1", "# only a comment"] {
        let tokens = lex(source);
        assert_eq!(tokens.last(), Some(&Token::Eof), "source: {source:?}");
        assert_eq!(tokens.iter().filter(|t| **t == Token::Eof).count(), 1, "source: {source:?}");
    }
}

#[test]
fn indents_and_dedents_balance_to_zero() {
    let sources = [
        "if a:\n  if b:\n    c = 1",
        "if a:\n  b = 1\nif c:\n  d = 2",
        "class A:\n  def f():\n    return 1\nx = 1",
        "if a:\n    b = 1\nc = 2",
    ];

    for source in sources {
        let tokens = lex(source);
        let indents = tokens.iter().filter(|t| **t == Token::Indent).count();
        let dedents = tokens.iter().filter(|t| **t == Token::Dedent).count();
        assert_eq!(indents, dedents, "source: {source:?}");
    }
}

#[test]
fn residual_dedents_are_emitted_before_eof() {
    let tokens = lex("if a:\n  if b:\n    c = 1");
    let tail: Vec<_> = tokens.iter().rev().take(3).collect();
    assert_eq!(tail, vec![&Token::Eof, &Token::Dedent, &Token::Dedent]);
}

#[test]
fn full_line_comments_contribute_nothing() {
    assert_eq!(lex("# a comment line"), vec![Token::Eof]);
    assert_eq!(lex("# one\n# two\n# three"), vec![Token::Eof]);
}

#[test]
fn trailing_comment_ends_the_line() {
    assert_eq!(
        lex("print 1 # print 2"),
        vec![Token::Print, Token::Number(1), Token::Newline, Token::Eof]
    );
}

#[test]
fn hash_inside_identifier_cuts_both_identifier_and_line() {
    assert_eq!(lex("ab#cd ef"), vec![Token::Id("ab".to_string()), Token::Newline, Token::Eof]);
}

#[test]
fn blank_and_whitespace_lines_are_skipped() {
    assert_eq!(
        lex("x = 1\n\n   \ny = 2"),
        vec![
            Token::Id("x".to_string()),
            Token::Char('='),
            Token::Number(1),
            Token::Newline,
            Token::Id("y".to_string()),
            Token::Char('='),
            Token::Number(2),
            Token::Newline,
            Token::Eof,
        ]
    );
}

#[test]
fn partial_indent_pair_produces_no_level() {
    // Three spaces are one level: a pair plus a leftover space.
    assert_eq!(
        lex("if a:\n   b = 1"),
        vec![
            Token::If,
            Token::Id("a".to_string()),
            Token::Char(':'),
            Token::Newline,
            Token::Indent,
            Token::Id("b".to_string()),
            Token::Char('='),
            Token::Number(1),
            Token::Newline,
            Token::Dedent,
            Token::Eof,
        ]
    );
}

#[test]
fn keywords_are_recognized_whole() {
    assert_eq!(
        lex("class return if else def print and or not None True False"),
        vec![
            Token::Class,
            Token::Return,
            Token::If,
            Token::Else,
            Token::Def,
            Token::Print,
            Token::And,
            Token::Or,
            Token::Not,
            Token::None,
            Token::True,
            Token::False,
            Token::Newline,
            Token::Eof,
        ]
    );
}

#[test]
fn identifier_with_keyword_prefix_stays_an_identifier() {
    assert_eq!(
        lex("classy None7"),
        vec![
            Token::Id("classy".to_string()),
            Token::Id("None7".to_string()),
            Token::Newline,
            Token::Eof,
        ]
    );
}

#[test]
fn two_character_operators() {
    assert_eq!(
        lex("a == b != c <= d >= e"),
        vec![
            Token::Id("a".to_string()),
            Token::Eq,
            Token::Id("b".to_string()),
            Token::NotEq,
            Token::Id("c".to_string()),
            Token::LessOrEq,
            Token::Id("d".to_string()),
            Token::GreaterOrEq,
            Token::Id("e".to_string()),
            Token::Newline,
            Token::Eof,
        ]
    );
}

#[test]
fn single_character_operators_and_punctuation() {
    assert_eq!(
        lex("( ) : , . + - * / = < >"),
        vec![
            Token::Char('('),
            Token::Char(')'),
            Token::Char(':'),
            Token::Char(','),
            Token::Char('.'),
            Token::Char('+'),
            Token::Char('-'),
            Token::Char('*'),
            Token::Char('/'),
            Token::Char('='),
            Token::Char('<'),
            Token::Char('>'),
            Token::Newline,
            Token::Eof,
        ]
    );
}

#[test]
fn lone_bang_lexes_as_none() {
    assert_eq!(lex("!"), vec![Token::None, Token::Newline, Token::Eof]);
}

#[test]
fn minus_before_a_number_is_a_separate_token() {
    // Negation is the parser's job; the lexer always emits `-` on its own.
    assert_eq!(
        lex("-5"),
        vec![Token::Char('-'), Token::Number(5), Token::Newline, Token::Eof]
    );
}

#[test]
fn digits_terminate_at_non_digits() {
    assert_eq!(
        lex("1.5"),
        vec![Token::Number(1), Token::Char('.'), Token::Number(5), Token::Newline, Token::Eof]
    );
}

#[test]
fn string_literals_with_either_quote() {
    assert_eq!(
        lex("\"double\" 'single'"),
        vec![
            Token::String("double".to_string()),
            Token::String("single".to_string()),
            Token::Newline,
            Token::Eof,
        ]
    );
}

#[test]
fn string_escapes_decode() {
    assert_eq!(
        lex(r"s = 'a\tb\nc\qd\''"),
        vec![
            Token::Id("s".to_string()),
            Token::Char('='),
            Token::String("a\tb\ncqd'".to_string()),
            Token::Newline,
            Token::Eof,
        ]
    );
}

#[test]
fn opposite_quote_is_plain_text_inside_a_string() {
    assert_eq!(
        lex("\"it's\""),
        vec![Token::String("it's".to_string()), Token::Newline, Token::Eof]
    );
}

#[test]
fn unterminated_string_ends_with_the_line() {
    assert_eq!(
        lex("s = \"abc"),
        vec![
            Token::Id("s".to_string()),
            Token::Char('='),
            Token::String("abc".to_string()),
            Token::Newline,
            Token::Eof,
        ]
    );
}

#[test]
fn largest_number_lexes_and_overflow_is_rejected() {
    assert_eq!(
        lex("9223372036854775807"),
        vec![Token::Number(i64::MAX), Token::Newline, Token::Eof]
    );
    assert!(Lexer::new("9223372036854775808").is_err());
    assert!(Lexer::new("99999999999999999999").is_err());
}

#[test]
fn cursor_advances_and_parks_on_eof() {
    let mut lexer = Lexer::new("x").expect("lexing failed");
    assert_eq!(*lexer.current(), Token::Id("x".to_string()));
    assert_eq!(*lexer.advance(), Token::Newline);
    assert_eq!(*lexer.advance(), Token::Eof);
    assert_eq!(*lexer.advance(), Token::Eof);
    assert_eq!(*lexer.current(), Token::Eof);
}

#[test]
fn expect_matches_and_reports_mismatches() {
    let mut lexer = Lexer::new("x = 5").expect("lexing failed");

    assert_eq!(lexer.expect_id().expect("expected an identifier"), "x");
    assert!(lexer.expect_number().is_err());
    assert!(lexer.expect(&Token::If).is_err());

    lexer.expect_advance(&Token::Char('=')).expect("expected '='");
    assert_eq!(*lexer.advance(), Token::Number(5));
    assert_eq!(lexer.expect_number().expect("expected a number"), 5);
    assert!(lexer.expect(&Token::Number(6)).is_err());
    lexer.expect(&Token::Number(5)).expect("payload should match");
}

#[test]
fn expect_advance_and_string_payloads() {
    let mut lexer = Lexer::new("name = 'pyrite'").expect("lexing failed");

    assert!(lexer.expect_string().is_err());
    lexer.expect_advance(&Token::Char('=')).expect("expected '='");
    lexer.advance();
    assert_eq!(lexer.expect_string().expect("expected a string"), "pyrite");

    let mut lexer = Lexer::new("def f").expect("lexing failed");
    assert_eq!(lexer.expect_advance_id().expect("expected an identifier"), "f");
    assert!(lexer.expect_advance_id().is_err());
}

#[test]
fn lines_are_tracked_per_token() {
    let mut lexer = Lexer::new("x = 1\ny = 2").expect("lexing failed");
    assert_eq!(lexer.line(), 1);
    lexer.advance();
    lexer.advance();
    lexer.advance();
    assert_eq!(*lexer.current(), Token::Newline);
    assert_eq!(lexer.line(), 1);
    lexer.advance();
    assert_eq!(*lexer.current(), Token::Id("y".to_string()));
    assert_eq!(lexer.line(), 2);
}
