//! ClrMamePro DAT parsing and digest matching.
//!
//! Text flows `Lexer` → `TokenCursor` → `Parser` → [`Collection`]; the
//! matcher only ever reads a finished collection.

pub mod cursor;
pub mod dat;
pub mod error;
pub mod lexer;
pub mod matcher;
pub mod parser;

pub use cursor::TokenCursor;
pub use dat::{Collection, FileInfo, Game, Rom};
pub use error::DatError;
pub use lexer::{Lexer, Token, TokenKind};
pub use matcher::{CandidateDigests, LookupResult, MatchMethod, RomMatch, find_rom};
pub use parser::{Parser, parse_dat, parse_dat_file};
