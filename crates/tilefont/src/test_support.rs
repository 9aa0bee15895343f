//! Test support utilities for tilefont.
//!
//! Helpers to build bitmaps from `#`/`-` art and fonts that cover the whole
//! dense block font range. Not part of the stable API.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    blockfont::{BlockFontMap, TILE_ROWS},
    Bitmap, Font, Glyph, Tile,
};

/// Builds a bitmap from rows of `#` (set) and `-` (unset). Row length must be a multiple of 4.
pub fn bitmap_from_art(art: &[&str]) -> Bitmap {
    let rows = art
        .iter()
        .map(|line| {
            let bits: Vec<bool> = line.chars().map(|c| c == '#').collect();
            bits.chunks(Tile::SIZE)
                .map(|chunk| {
                    chunk
                        .iter()
                        .enumerate()
                        .fold(0u8, |acc, (i, set)| acc | (u8::from(*set) << (3 - i)))
                })
                .collect()
        })
        .collect();
    Bitmap::from_rows(rows)
}

/// Builds a single tile from four rows of art.
pub fn tile_from_art(art: [&str; 4]) -> Tile {
    bitmap_from_art(&art).tile_at(0, 0)
}

/// A glyph of `width_tiles` x `height_tiles` where every tile is `tile`.
pub fn uniform_glyph(width_tiles: usize, height_tiles: usize, tile: Tile) -> Glyph {
    let mut rows = Vec::with_capacity(height_tiles * Tile::SIZE);
    for _ in 0..height_tiles {
        for y in 0..Tile::SIZE {
            rows.push(vec![tile.row(y); width_tiles]);
        }
    }
    Glyph::new(width_tiles, Bitmap::from_rows(rows))
}

/// A block font with a 5x5 tile glyph for every retained codepoint, all made of `tile`.
pub fn uniform_block_font(tile: Tile) -> Font {
    let mut font = Font::new("block");
    for code in BlockFontMap::default().codepoints() {
        font.insert(code, uniform_glyph(5, TILE_ROWS, tile));
    }
    font
}

/// A font with one single tile glyph per entry of `tiles`, starting at codepoint `'0'`.
pub fn single_tile_font(name: &str, tiles: &[Tile]) -> Font {
    let mut font = Font::new(name);
    for (i, tile) in tiles.iter().enumerate() {
        font.insert(b'0' + i as u8, uniform_glyph(1, 1, *tile));
    }
    font
}

/// Renders a font back into the BDF subset understood by the parser.
pub fn to_bdf(font: &Font) -> String {
    let height = font
        .iter_glyphs()
        .map(|(_, g)| g.bitmap.row_count())
        .max()
        .unwrap_or(0);
    let mut out = format!("STARTFONT 2.1\nFONT_ASCENT {height}\nCHARS {}\n", font.glyph_count());
    for (code, glyph) in font.iter_glyphs() {
        out.push_str(&format!("STARTCHAR c{code:02x}\nENCODING {code}\n"));
        out.push_str(&format!("BBX {} {} 0 0\nBITMAP\n", glyph.width_tiles * 4, height));
        for row in glyph.bitmap.rows() {
            for nibble in row {
                out.push_str(&format!("{nibble:X}"));
            }
            out.push('\n');
        }
        out.push_str("ENDCHAR\n");
    }
    out.push_str("ENDFONT\n");
    out
}

/// A temporary directory removed on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir()
            .join("tilefont-tests")
            .join(format!("{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("create scratch dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `contents` to `rel`, creating parent directories.
    pub fn write(&self, rel: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, contents).expect("write scratch file");
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
