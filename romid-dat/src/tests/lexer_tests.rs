use super::*;

fn tokens(input: &str) -> Vec<(TokenKind, String)> {
    let mut lexer = Lexer::new(input);
    let mut out = Vec::new();
    loop {
        let token = lexer.scan();
        if token.is_eof() {
            return out;
        }
        out.push((token.kind, token.text));
    }
}

fn ws() -> (TokenKind, String) {
    (TokenKind::Whitespace, " ".into())
}

fn ident(text: &str) -> (TokenKind, String) {
    (TokenKind::Ident, text.into())
}

#[test]
fn test_whitespace_runs_collapse() {
    for input in [" ", "   ", "\t\n  \r\n", "\u{3000}\u{a0}"] {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.scan(), Token::new(TokenKind::Whitespace, " "));
        assert_eq!(lexer.scan(), Token::eof());
    }
}

#[test]
fn test_empty_input_is_eof() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.scan(), Token::eof());
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("game");
    assert_eq!(lexer.scan(), Token::new(TokenKind::Ident, "game"));
    for _ in 0..3 {
        assert_eq!(lexer.scan(), Token::eof());
    }
}

#[test]
fn test_quoted_string_with_spaces() {
    assert_eq!(tokens(r#""Test Name""#), vec![ident(r#""Test Name""#)]);
}

#[test]
fn test_quoted_string_keeps_parens() {
    assert_eq!(
        tokens(r#""Game (USA, Europe).nes""#),
        vec![ident(r#""Game (USA, Europe).nes""#)]
    );
}

#[test]
fn test_lone_quote_runs_to_eof() {
    assert_eq!(tokens(r#"""#), vec![ident(r#"""#)]);
    assert_eq!(tokens(r#""abc def"#), vec![ident(r#""abc def"#)]);
}

#[test]
fn test_quote_closes_at_first_quote() {
    assert_eq!(
        tokens(r#""a"b""#),
        vec![ident(r#""a""#), ident("b"), ident(r#"""#)]
    );
}

#[test]
fn test_ident_with_hyphens() {
    assert_eq!(tokens("20080101-123456"), vec![ident("20080101-123456")]);
}

#[test]
fn test_ident_cannot_start_with_hyphen() {
    let mut lexer = Lexer::new("-abc");
    assert_eq!(lexer.scan(), Token::new(TokenKind::Illegal, "-"));
    assert_eq!(lexer.scan(), Token::new(TokenKind::Ident, "abc"));
}

#[test]
fn test_illegal_advances_one_char() {
    let mut lexer = Lexer::new("%%x");
    assert_eq!(lexer.scan(), Token::new(TokenKind::Illegal, "%"));
    assert_eq!(lexer.scan(), Token::new(TokenKind::Illegal, "%"));
    assert_eq!(lexer.scan(), Token::new(TokenKind::Ident, "x"));
    assert_eq!(lexer.scan(), Token::eof());
}

#[test]
fn test_ident_stops_at_punctuation() {
    assert_eq!(
        tokens("abc.def"),
        vec![
            ident("abc"),
            (TokenKind::Illegal, ".".into()),
            ident("def")
        ]
    );
}

#[test]
fn test_key_value() {
    assert_eq!(
        tokens(r#"key "value""#),
        vec![ident("key"), ws(), ident(r#""value""#)]
    );
}

#[test]
fn test_parens_without_spaces() {
    assert_eq!(
        tokens("rom(name x)"),
        vec![
            ident("rom"),
            (TokenKind::LeftParen, "(".into()),
            ident("name"),
            ws(),
            ident("x"),
            (TokenKind::RightParen, ")".into()),
        ]
    );
}

#[test]
fn test_multiline_game_block() {
    let input = "game (\n\t\tname \"Test Name\"\n\t\tdescription \"Test Description\"\n\t\trom ( name \"Test Name\" size 2621440 )\n\t)";
    assert_eq!(
        tokens(input),
        vec![
            ident("game"),
            ws(),
            (TokenKind::LeftParen, "(".into()),
            ws(),
            ident("name"),
            ws(),
            ident(r#""Test Name""#),
            ws(),
            ident("description"),
            ws(),
            ident(r#""Test Description""#),
            ws(),
            ident("rom"),
            ws(),
            (TokenKind::LeftParen, "(".into()),
            ws(),
            ident("name"),
            ws(),
            ident(r#""Test Name""#),
            ws(),
            ident("size"),
            ws(),
            ident("2621440"),
            ws(),
            (TokenKind::RightParen, ")".into()),
            ws(),
            (TokenKind::RightParen, ")".into()),
        ]
    );
}

#[test]
fn test_unicode_letters_are_ident() {
    assert_eq!(tokens("Pokémon"), vec![ident("Pokémon")]);
}

#[test]
fn test_non_letter_digit_characters_are_illegal() {
    // Superscript, vulgar fraction, runic letter number, combining mark.
    for input in ["\u{b2}", "\u{bd}", "\u{16ee}", "\u{345}"] {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.scan(), Token::new(TokenKind::Illegal, input));
        assert_eq!(lexer.scan(), Token::eof());
    }
}

#[test]
fn test_ident_stops_at_superscript() {
    assert_eq!(
        tokens("x\u{b2}"),
        vec![ident("x"), (TokenKind::Illegal, "\u{b2}".into())]
    );
}

#[test]
fn test_non_latin_letters_and_digits_form_idents() {
    assert_eq!(tokens("ゲーム\u{661}\u{662}"), vec![ident("ゲーム\u{661}\u{662}")]);
}
