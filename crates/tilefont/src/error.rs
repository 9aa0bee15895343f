use std::path::PathBuf;

use thiserror::Error;

use crate::tile::Tile;

#[derive(Debug, Error)]
pub enum TileFontError {
    #[error("failed to read font source {}: {source}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("too many tiles: found {count} distinct tiles, only {max} are allowed")]
    TooManyTiles { count: usize, max: usize },
    #[error("unexpected number of characters {found}, expected {expected}")]
    GlyphCount { found: usize, expected: usize },
    #[error("glyph {0:#04x} is missing from the block font")]
    MissingGlyph(u8),
    #[error("{0:?} is not in the tile palette")]
    TileNotInPalette(Tile),
    #[error("failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TileFontError>;
