use std::path::Path;

use solace::{
    base::{Error, MemoryProvider, SilentHandler, VoidHandler},
    lexical::{
        token::{PunctuationKind, TokenKind},
        LexerConfig,
    },
};

#[test]
fn lexing_test1() {
    let source = include_str!("./test1.solace");
    let mut dir = MemoryProvider::new();
    dir.add_file("test1.solace", source);

    let handler = SilentHandler::new();
    let tokens = solace::tokenize(&handler, &dir, Path::new("test1.solace"))
        .expect("Failed to tokenize");

    assert!(!handler.has_received());
    assert!(!tokens.has_diagnostics());
    assert_eq!(tokens.len(), 27);

    let first = &tokens[0];
    assert_eq!(first.kind(), TokenKind::Identifier);
    assert_eq!(first.lexeme(), "greet");
    assert_eq!(first.line(), 1);
    assert_eq!(first.source_name(), "test1.solace");

    let strings = tokens
        .iter()
        .filter(|token| token.kind() == TokenKind::StringLiteral)
        .map(|token| (token.lexeme().as_str(), token.line()))
        .collect::<Vec<_>>();
    assert_eq!(strings, vec![("Hello, ", 2), ("World", 6)]);

    let numbers = tokens
        .iter()
        .filter(|token| token.kind().is_int_literal() || token.kind().is_float_literal())
        .map(|token| (token.kind(), token.lexeme().as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        numbers,
        vec![(TokenKind::IntLiteral, "3"), (TokenKind::FloatLiteral, "0.5")]
    );

    let last = tokens.last().unwrap();
    assert_eq!(
        last.kind(),
        TokenKind::Punctuation(PunctuationKind::CloseBrace)
    );
    assert_eq!(last.line(), 7);
}

#[test]
fn lexing_end_of_line_tokens() {
    let source = include_str!("./test1.solace");
    let mut dir = MemoryProvider::new();
    dir.add_file("test1.solace", source);

    let config = LexerConfig::default().with_end_of_line_tokens(true);
    let tokens =
        solace::tokenize_with_config(&VoidHandler, &dir, Path::new("test1.solace"), &config)
            .expect("Failed to tokenize");

    let end_of_lines = tokens
        .iter()
        .filter(|token| token.kind().is_end_of_line())
        .map(solace::lexical::token::Token::line)
        .collect::<Vec<_>>();
    assert_eq!(end_of_lines, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tokens.len(), 27 + 7);
}

#[test]
fn lexing_invalid() {
    let source = include_str!("./invalid.solace");
    let mut dir = MemoryProvider::new();
    dir.add_file("invalid.solace", source);

    let handler = SilentHandler::new();
    let tokens = solace::tokenize(&handler, &dir, Path::new("invalid.solace"))
        .expect("Non-fatal diagnostics must not abort tokenizing");

    let malformed = tokens
        .iter()
        .filter(|token| token.kind().is_malformed())
        .map(|token| token.lexeme().as_str())
        .collect::<Vec<_>>();
    assert_eq!(malformed, vec!["1.2.3", "4."]);
    assert_eq!(tokens.len(), 10);
    assert_eq!(tokens.last().unwrap().lexeme(), "done");

    assert_eq!(tokens.diagnostics().len(), 3);
    assert_eq!(handler.take().len(), 3);
}

#[test]
fn lexing_unterminated() {
    let source = include_str!("./unterminated.solace");
    let mut dir = MemoryProvider::new();
    dir.add_file("unterminated.solace", source);

    let handler = SilentHandler::new();
    let err = solace::tokenize(&handler, &dir, Path::new("unterminated.solace"))
        .expect_err("Expecting tokenizing failure");

    let Error::LexicalError(lexical) = &err else {
        panic!("Expected a lexical error");
    };
    assert!(lexical.is_fatal());
    assert_eq!(lexical.line(), 2);
    assert_eq!(lexical.source_name(), "unterminated.solace");

    let unterminated = lexical.as_unterminated_literal().unwrap();
    assert_eq!(unterminated.preview(), "Hello | 1\n}\n");

    let rendered = err.to_string();
    assert!(rendered.contains("unterminated.solace:2:11"));
    assert!(rendered.contains(r"Hello | 1\n}\n"));

    assert_eq!(handler.take(), vec![err]);
}

#[test]
fn lexing_missing_source() {
    let dir = MemoryProvider::new();
    let handler = SilentHandler::new();

    let err = solace::tokenize(&handler, &dir, Path::new("missing.solace"))
        .expect_err("Expecting missing source failure");

    assert!(matches!(
        &err,
        Error::SourceUnavailable { source_name, .. } if source_name == "missing.solace"
    ));
    assert_eq!(handler.take(), vec![err]);
}

#[test]
fn lexing_same_source_twice_is_equal() {
    let mut dir = MemoryProvider::new();
    dir.add_file("main.solace", "main ~ (x) \"hi\" 1.5 $");

    let first = solace::tokenize(&VoidHandler, &dir, Path::new("main.solace"))
        .expect("Failed to tokenize");
    let second = solace::tokenize(&VoidHandler, &dir, Path::new("main.solace"))
        .expect("Failed to tokenize");

    assert!(!std::sync::Arc::ptr_eq(
        first[0].span().source_file(),
        second[0].span().source_file()
    ));
    assert_eq!(first, second);
    assert_eq!(first.diagnostics(), second.diagnostics());

    dir.add_file("main.solace", "main ~ (y) \"hi\" 1.5 $");
    let edited = solace::tokenize(&VoidHandler, &dir, Path::new("main.solace"))
        .expect("Failed to tokenize");
    assert_ne!(first, edited);
}
