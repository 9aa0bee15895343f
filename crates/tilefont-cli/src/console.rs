use std::fmt::Write;

use tilefont::{Font, Tile};

/// Palette dump: the tile count followed by every tile and its pixels.
pub fn palette_listing(tiles: &[Tile]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "There are {} distinct tiles", tiles.len());
    for (idx, tile) in tiles.iter().enumerate() {
        let _ = write!(out, "{idx:2}: {tile:?}:\n{}", tile.bitmap());
    }
    out
}

pub fn glyph_listing(font: &Font) -> String {
    let mut out = String::new();
    for (code, glyph) in font.iter_glyphs() {
        let (w, h) = glyph.bitmap.size_tiles();
        let _ = write!(
            out,
            "\n{code:#04x} {:?} ({w}x{h} tiles):\n{}",
            code as char, glyph.bitmap
        );
    }
    out
}
