use super::*;

#[test]
fn test_keyword_lookup() {
    assert_eq!(TokenKind::keyword("fn"), Some(TokenKind::Function));
    assert_eq!(TokenKind::keyword("let"), Some(TokenKind::Let));
    assert_eq!(TokenKind::keyword("return"), Some(TokenKind::Return));
    assert_eq!(TokenKind::keyword("function"), None);
    assert_eq!(TokenKind::keyword("Let"), None);
}

#[test]
fn test_display_name() {
    assert_eq!(TokenKind::Assign.to_string(), "=");
    assert_eq!(TokenKind::RParen.to_string(), ")");
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
}

#[test]
fn test_fixed_token_literal() {
    let tok = Token::fixed(TokenKind::GtEq);
    assert_eq!(tok.literal, ">=");
    assert!(tok.is(TokenKind::GtEq));
}

#[test]
fn test_token_stream_pads_with_eof() {
    let mut stream = TokenStream::new(vec![Token::new(TokenKind::Int, "5")]);

    assert_eq!(stream.next_token(), Token::new(TokenKind::Int, "5"));
    assert_eq!(stream.next_token().kind, TokenKind::Eof);
    assert_eq!(stream.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_token_source_by_mut_ref() {
    fn drain(mut source: impl TokenSource) -> usize {
        let mut count = 0;
        while source.next_token().kind != TokenKind::Eof {
            count += 1;
        }
        count
    }

    let mut stream = TokenStream::new(vec![
        Token::fixed(TokenKind::Let),
        Token::new(TokenKind::Ident, "x"),
    ]);
    assert_eq!(drain(&mut stream), 2);
}
