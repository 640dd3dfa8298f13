//! Recursive-descent parser for ClrMamePro DAT files.
//!
//! Format:
//! ```text
//! clrmamepro (
//!     name "System Name"
//!     version 20240101-000000
//! )
//!
//! game (
//!     name "Game Name (Region)"
//!     rom ( name "Game Name (Region).ext" size 12345 crc AABBCCDD md5 ... sha1 ... )
//! )
//! ```
//!
//! Literal values are stored verbatim; quoted literals keep their quotes.
//! The first syntax error aborts the parse and no partial collection is
//! returned.

use std::io::Read;
use std::path::Path;

use crate::cursor::TokenCursor;
use crate::dat::{Collection, FileInfo, Game, Rom};
use crate::error::DatError;
use crate::lexer::{Lexer, Token, TokenKind};

const FILE_INFO_KEYWORD: &str = "clrmamepro";
const GAME_KEYWORD: &str = "game";
const ROM_KEYWORD: &str = "rom";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileInfoKey {
    Name,
    Description,
    Version,
    Comment,
}

impl FileInfoKey {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "name" => Some(Self::Name),
            "description" => Some(Self::Description),
            "version" => Some(Self::Version),
            "comment" => Some(Self::Comment),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameKey {
    Name,
    Description,
    Serial,
    Rom,
}

impl GameKey {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "name" => Some(Self::Name),
            "description" => Some(Self::Description),
            "serial" => Some(Self::Serial),
            ROM_KEYWORD => Some(Self::Rom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RomKey {
    Name,
    Size,
    Crc,
    Md5,
    Sha1,
    Flags,
}

impl RomKey {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "name" => Some(Self::Name),
            "size" => Some(Self::Size),
            "crc" => Some(Self::Crc),
            "md5" => Some(Self::Md5),
            "sha1" => Some(Self::Sha1),
            "flags" => Some(Self::Flags),
            _ => None,
        }
    }
}

/// Single-use parser over one DAT text.
pub struct Parser<'a> {
    cursor: TokenCursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: TokenCursor::new(Lexer::new(input)),
        }
    }

    /// Parse the whole input into a [`Collection`].
    pub fn parse(mut self) -> Result<Collection, DatError> {
        let mut col = Collection::default();

        loop {
            let token = self.cursor.scan_ignoring_whitespace();
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Ident if token.text == FILE_INFO_KEYWORD => {
                    self.cursor.unscan();
                    col.file_info = self.parse_file_info()?;
                }
                TokenKind::Ident if token.text == GAME_KEYWORD => {
                    self.cursor.unscan();
                    let game = self.parse_game()?;
                    col.games.push(game);
                }
                TokenKind::Ident
                | TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::Illegal
                | TokenKind::Whitespace => {
                    return Err(DatError::unexpected_token(token.text));
                }
            }
        }

        log::debug!(
            "Parsed DAT: {} games, {} roms",
            col.games.len(),
            col.rom_count()
        );
        Ok(col)
    }

    fn parse_file_info(&mut self) -> Result<FileInfo, DatError> {
        let mut info = FileInfo::default();
        self.open_block(FILE_INFO_KEYWORD)?;

        while let Some(key) = self.next_field()? {
            let field = FileInfoKey::from_keyword(&key.text)
                .ok_or_else(|| DatError::unexpected_token(key.text))?;
            let value = self.literal()?;
            match field {
                FileInfoKey::Name => info.name = value,
                FileInfoKey::Description => info.description = value,
                FileInfoKey::Version => info.version = value,
                FileInfoKey::Comment => info.comment = value,
            }
        }

        Ok(info)
    }

    fn parse_game(&mut self) -> Result<Game, DatError> {
        let mut game = Game::default();
        self.open_block(GAME_KEYWORD)?;

        while let Some(key) = self.next_field()? {
            let field = GameKey::from_keyword(&key.text)
                .ok_or_else(|| DatError::unexpected_token(key.text))?;
            match field {
                GameKey::Rom => {
                    self.cursor.unscan();
                    let rom = self.parse_rom()?;
                    game.roms.push(rom);
                }
                GameKey::Name => game.name = self.literal()?,
                GameKey::Description => game.description = self.literal()?,
                GameKey::Serial => game.serial = self.literal()?,
            }
        }

        Ok(game)
    }

    fn parse_rom(&mut self) -> Result<Rom, DatError> {
        let mut rom = Rom::default();
        self.open_block(ROM_KEYWORD)?;

        while let Some(key) = self.next_field()? {
            let field = RomKey::from_keyword(&key.text)
                .ok_or_else(|| DatError::unexpected_token(key.text))?;
            let value = self.literal()?;
            match field {
                RomKey::Name => rom.name = value,
                RomKey::Size => rom.size = value,
                RomKey::Crc => rom.crc = value,
                RomKey::Md5 => rom.md5 = value,
                RomKey::Sha1 => rom.sha1 = value,
                RomKey::Flags => rom.flags = value,
            }
        }

        Ok(rom)
    }

    /// Consume `keyword (`.
    fn open_block(&mut self, keyword: &str) -> Result<(), DatError> {
        let token = self.cursor.scan_ignoring_whitespace();
        if token.kind != TokenKind::Ident || token.text != keyword {
            return Err(DatError::unexpected_token(token.text));
        }

        let token = self.cursor.scan_ignoring_whitespace();
        if token.kind != TokenKind::LeftParen {
            return Err(DatError::unexpected_token(token.text));
        }
        Ok(())
    }

    /// Next field keyword inside an open block, or `None` once the closing
    /// paren has been consumed.
    fn next_field(&mut self) -> Result<Option<Token>, DatError> {
        let token = self.cursor.scan_ignoring_whitespace();
        match token.kind {
            TokenKind::RightParen => Ok(None),
            TokenKind::Eof => Err(DatError::MissingClosingParen),
            TokenKind::Ident => Ok(Some(token)),
            TokenKind::LeftParen | TokenKind::Illegal | TokenKind::Whitespace => {
                Err(DatError::unexpected_token(token.text))
            }
        }
    }

    /// The literal value following a field keyword.
    fn literal(&mut self) -> Result<String, DatError> {
        let token = self.cursor.scan_ignoring_whitespace();
        match token.kind {
            TokenKind::Ident => Ok(token.text),
            TokenKind::Eof => Err(DatError::MissingClosingParen),
            _ => Err(DatError::unexpected_token(token.text)),
        }
    }
}

/// Parse a ClrMamePro DAT from a reader.
///
/// The reader is consumed to completion before parsing starts. A leading
/// UTF-8 byte order mark is ignored.
pub fn parse_dat<R: Read>(mut reader: R) -> Result<Collection, DatError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    Parser::new(text).parse()
}

/// Parse a DAT file from a file path.
pub fn parse_dat_file(path: &Path) -> Result<Collection, DatError> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    parse_dat(reader)
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
