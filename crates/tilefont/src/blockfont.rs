//! Dense encoding of the block font.
//!
//! The font only uses a sparse part of ASCII, so glyphs are numbered in ASCII
//! order with the unused codepoints left out. [`BLOCK_FONT_RANGES`] lists the
//! retained ranges; they are written to the map file so the firmware can
//! translate ASCII to dense indices at runtime.
//!
//! Glyphs are 5x5 tiles, 6x5 for a few ligatures. Each glyph is stored as 5
//! tile rows of 6 nibbles (3 bytes), leftmost nibble in the low bits. That is
//! 15 bytes per glyph, packed without alignment, 720 bytes for all 48 glyphs.
use log::debug;

use crate::{
    error::{Result, TileFontError},
    font::Font,
    glyph::Glyph,
    palette::TileBlock,
};

/// Inclusive codepoint ranges kept in the dense encoding, in dense order.
///
/// `?` is left out to keep the glyph count at 48.
pub const BLOCK_FONT_RANGES: [(u8, u8); 5] = [
    (b' ', b'!'),
    (b',', b'.'),
    (b'0', b':'),
    (b'A', b'Z'),
    // ordinal ligatures and other misc glyphs
    (0x7B, 0x80),
];

pub const BLOCK_FONT_GLYPHS: usize = 48;
pub const TILE_ROWS: usize = 5;
pub const TILE_COLUMNS: usize = 6;
pub const BYTES_PER_GLYPH: usize = TILE_ROWS * TILE_COLUMNS / 2;

/// Codepoint the firmware substitutes for characters outside every range.
pub const PLACEHOLDER: u8 = 0x7F;

/// Range table of the dense encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockFontMap {
    ranges: Vec<(u8, u8)>,
}

impl Default for BlockFontMap {
    fn default() -> Self {
        Self::new(&BLOCK_FONT_RANGES)
    }
}

impl BlockFontMap {
    pub fn new(ranges: &[(u8, u8)]) -> Self {
        Self {
            ranges: ranges.to_vec(),
        }
    }

    pub fn ranges(&self) -> &[(u8, u8)] {
        &self.ranges
    }

    /// Codepoints in dense order.
    pub fn codepoints(&self) -> impl Iterator<Item = u8> + '_ {
        self.ranges.iter().flat_map(|&(lo, hi)| lo..=hi)
    }

    pub fn glyph_count(&self) -> usize {
        self.ranges
            .iter()
            .map(|&(lo, hi)| (hi as usize + 1).saturating_sub(lo as usize))
            .sum()
    }

    /// Dense index of `code`, or of the placeholder when `code` is not retained.
    pub fn dense_index(&self, code: u8) -> Option<usize> {
        self.lookup(code).or_else(|| self.lookup(PLACEHOLDER))
    }

    fn lookup(&self, code: u8) -> Option<usize> {
        let mut start = 0;
        for &(lo, hi) in &self.ranges {
            if (lo..=hi).contains(&code) {
                return Some(start + (code - lo) as usize);
            }
            start += (hi as usize + 1).saturating_sub(lo as usize);
        }
        None
    }

    /// `blockfontmap.bin`: one `(low, high)` byte pair per range.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.ranges.iter().flat_map(|&(lo, hi)| [lo, hi]).collect()
    }
}

/// Encodes the retained glyphs of `font` as palette indices (`blockfont.bin`).
pub fn encode_glyphs(font: &Font, map: &BlockFontMap, tiles: &TileBlock) -> Result<Vec<u8>> {
    let found = map.glyph_count();
    if found != BLOCK_FONT_GLYPHS {
        return Err(TileFontError::GlyphCount {
            found,
            expected: BLOCK_FONT_GLYPHS,
        });
    }

    let mut out = Vec::with_capacity(BLOCK_FONT_GLYPHS * BYTES_PER_GLYPH);
    for code in map.codepoints() {
        let glyph = font.glyph(code).ok_or(TileFontError::MissingGlyph(code))?;
        encode_glyph(glyph, tiles, &mut out)?;
    }
    debug!("{}: encoded {} glyph bytes", font.name, out.len());
    Ok(out)
}

fn encode_glyph(glyph: &Glyph, tiles: &TileBlock, out: &mut Vec<u8>) -> Result<()> {
    for ty in 0..TILE_ROWS {
        for tx in (0..TILE_COLUMNS).step_by(2) {
            let lo = tile_index(glyph, tx, ty, tiles)?;
            let hi = tile_index(glyph, tx + 1, ty, tiles)?;
            out.push(lo | hi << 4);
        }
    }
    Ok(())
}

/// Palette index of a tile cell, zero for columns past the glyph width.
fn tile_index(glyph: &Glyph, tx: usize, ty: usize, tiles: &TileBlock) -> Result<u8> {
    if tx >= glyph.width_tiles {
        return Ok(0);
    }
    let tile = glyph.tile_at(tx, ty);
    tiles
        .index(tile)
        .map(|idx| idx as u8)
        .ok_or(TileFontError::TileNotInPalette(tile))
}
