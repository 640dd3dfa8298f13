use super::*;

fn parse(input: &str) -> Result<Collection, DatError> {
    Parser::new(input).parse()
}

fn assert_unexpected(input: &str, expected: &str) {
    match parse(input) {
        Err(DatError::UnexpectedToken(text)) => assert_eq!(text, expected, "input: {input:?}"),
        other => panic!("expected UnexpectedToken({expected:?}) for {input:?}, got {other:?}"),
    }
}

fn assert_missing_paren(input: &str) {
    assert!(
        matches!(parse(input), Err(DatError::MissingClosingParen)),
        "expected MissingClosingParen for {input:?}"
    );
}

const SAMPLE_CLR_DAT: &str = r#"clrmamepro (
        name "Test Name"
        description "Test Description"
        version 20080101-123456
        comment "Test Comment"
)

game (
	name "First Game"
	description "First Game Description"
	rom ( name "Test Name" size 2621440 crc C167987D md5 A990AE4416DD75F7C68C5DB06425D648 sha1 21286747D360C03E3BF86CD4504508CE55DEFF8F )
)

game (
	name "Second Game"
	description "Second Game Description"
	serial "SLUS-00001"
	rom ( name "Track 1.bin" size 1024 crc DEADBEEF flags verified )
	rom ( name "Track 2.bin" size 2048 sha1 0123456789ABCDEF0123456789ABCDEF01234567 )
)
"#;

#[test]
fn test_parse_clrmamepro_dat() {
    let col = parse(SAMPLE_CLR_DAT).unwrap();

    assert_eq!(
        col.file_info,
        FileInfo {
            name: r#""Test Name""#.into(),
            description: r#""Test Description""#.into(),
            version: "20080101-123456".into(),
            comment: r#""Test Comment""#.into(),
        }
    );
    assert_eq!(col.games.len(), 2);

    let first = &col.games[0];
    assert_eq!(first.name, r#""First Game""#);
    assert_eq!(first.description, r#""First Game Description""#);
    assert_eq!(first.serial, "");
    assert_eq!(
        first.roms,
        vec![Rom {
            name: r#""Test Name""#.into(),
            size: "2621440".into(),
            crc: "C167987D".into(),
            md5: "A990AE4416DD75F7C68C5DB06425D648".into(),
            sha1: "21286747D360C03E3BF86CD4504508CE55DEFF8F".into(),
            flags: String::new(),
        }]
    );

    let second = &col.games[1];
    assert_eq!(second.serial, r#""SLUS-00001""#);
    assert_eq!(second.roms.len(), 2);
    assert_eq!(second.roms[0].name, r#""Track 1.bin""#);
    assert_eq!(second.roms[0].flags, "verified");
    assert_eq!(second.roms[0].md5, "");
    assert_eq!(second.roms[1].name, r#""Track 2.bin""#);
    assert_eq!(second.roms[1].size, "2048");
    assert_eq!(second.roms[1].sha1, "0123456789ABCDEF0123456789ABCDEF01234567");
}

#[test]
fn test_empty_input() {
    let col = parse("").unwrap();
    assert_eq!(col, Collection::default());

    let col = parse(" \n\t ").unwrap();
    assert_eq!(col, Collection::default());
}

#[test]
fn test_empty_file_info_block() {
    let col = parse("clrmamepro ()").unwrap();
    assert_eq!(col.file_info, FileInfo::default());
    assert!(col.games.is_empty());
}

#[test]
fn test_empty_game_block() {
    let col = parse("game ()").unwrap();
    assert_eq!(col.games, vec![Game::default()]);
}

#[test]
fn test_empty_rom_block() {
    let col = parse("game ( rom () )").unwrap();
    assert_eq!(col.games.len(), 1);
    assert_eq!(col.games[0].roms, vec![Rom::default()]);
}

#[test]
fn test_truncated_after_open_paren() {
    assert_missing_paren("clrmamepro (");
    assert_missing_paren("game (");
    assert_missing_paren("game ( rom (");
}

#[test]
fn test_truncated_inside_fields() {
    assert_missing_paren("clrmamepro ( name");
    assert_missing_paren("game ( name \"x\"");
    assert_missing_paren("game ( rom ( size 10 )");
}

#[test]
fn test_unknown_top_level_keyword() {
    assert_unexpected("unknown ()", "unknown");
}

#[test]
fn test_unknown_field_keyword() {
    assert_unexpected("clrmamepro ( invalid )", "invalid");
    assert_unexpected("game ( invalid )", "invalid");
    assert_unexpected("game ( rom ( invalid x ) )", "invalid");
    // serial belongs to games, not ROMs
    assert_unexpected("game ( rom ( serial x ) )", "serial");
}

#[test]
fn test_missing_open_paren() {
    assert_unexpected("clrmamepro )", ")");
    assert_unexpected("game )", ")");
    assert_unexpected("game ( rom name )", "name");
}

#[test]
fn test_keyword_without_paren_at_eof() {
    assert_unexpected("game", "");
}

#[test]
fn test_field_without_literal() {
    assert_unexpected("clrmamepro ( name )", ")");
    assert_unexpected("game ( description ( ) )", "(");
}

#[test]
fn test_stray_tokens_rejected() {
    assert_unexpected(")", ")");
    assert_unexpected("game ( ( )", "(");
    assert_unexpected("game ( % )", "%");
    assert_unexpected("game ( name % )", "%");
}

#[test]
fn test_error_discards_earlier_blocks() {
    let input = "game ( name a )\ngame ( name b )\nbogus ( )";
    assert!(parse(input).is_err());
}

#[test]
fn test_games_keep_textual_order_and_duplicates() {
    let col = parse("game ( name a ) game ( name b ) game ( name a )").unwrap();
    let names: Vec<&str> = col.games.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "a"]);
}

#[test]
fn test_last_file_info_wins() {
    let col = parse("clrmamepro ( name first ) clrmamepro ( version 2 )").unwrap();
    assert_eq!(col.file_info.name, "");
    assert_eq!(col.file_info.version, "2");
}

#[test]
fn test_repeated_field_last_wins() {
    let col = parse("game ( name a name b )").unwrap();
    assert_eq!(col.games[0].name, "b");
}

#[test]
fn test_no_whitespace_between_tokens() {
    let col = parse(r#"game(name"A B"rom(name"a.bin"size 1))"#).unwrap();
    assert_eq!(col.games[0].name, r#""A B""#);
    assert_eq!(col.games[0].roms[0].name, r#""a.bin""#);
    assert_eq!(col.games[0].roms[0].size, "1");
}

#[test]
fn test_values_are_verbatim() {
    // Lowercase digests and odd spacing inside quotes are kept as written.
    let input = "game ( rom ( name \"  spaced  name \" md5 a990ae4416dd75f7c68c5db06425d648 ) )";
    let col = parse(input).unwrap();
    let rom = &col.games[0].roms[0];
    assert_eq!(rom.name, "\"  spaced  name \"");
    assert_eq!(rom.md5, "a990ae4416dd75f7c68c5db06425d648");
}

#[test]
fn test_field_values_rescan_to_same_literal() {
    let col = parse(SAMPLE_CLR_DAT).unwrap();
    let values = [
        &col.file_info.name,
        &col.file_info.version,
        &col.games[0].description,
        &col.games[0].roms[0].sha1,
        &col.games[1].roms[0].name,
    ];
    for value in values {
        let mut lexer = Lexer::new(value);
        assert_eq!(lexer.scan(), Token::new(TokenKind::Ident, value.as_str()));
        assert!(lexer.scan().is_eof());
    }
}

#[test]
fn test_parse_dat_reader() {
    let col = parse_dat(SAMPLE_CLR_DAT.as_bytes()).unwrap();
    assert_eq!(col.games.len(), 2);
}

#[test]
fn test_parse_dat_strips_bom() {
    let input = "\u{feff}game ( name x )";
    let col = parse_dat(input.as_bytes()).unwrap();
    assert_eq!(col.games[0].name, "x");
}

#[test]
fn test_parse_dat_invalid_utf8() {
    let bytes: &[u8] = &[b'g', b'a', 0xff, 0xfe];
    assert!(matches!(parse_dat(bytes), Err(DatError::Io(_))));
}

#[test]
fn test_parse_dat_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.dat");
    std::fs::write(&path, SAMPLE_CLR_DAT).unwrap();

    let col = parse_dat_file(&path).unwrap();
    assert_eq!(col.file_info.version, "20080101-123456");
    assert_eq!(col.rom_count(), 3);
}

#[test]
fn test_parse_dat_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = parse_dat_file(&dir.path().join("nope.dat"));
    assert!(matches!(result, Err(DatError::Io(_))));
}

#[test]
fn test_superscript_digit_is_rejected() {
    assert_unexpected("game ( name x\u{b2} )", "\u{b2}");
    assert_unexpected("game ( name \u{bd} )", "\u{bd}");
}
