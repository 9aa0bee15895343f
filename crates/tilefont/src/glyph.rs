use crate::tile::{Bitmap, Tile};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    /// Width of the glyph in tile columns
    pub width_tiles: usize,
    /// Nibble rows making up the glyph
    pub bitmap: Bitmap,
}

impl Glyph {
    pub fn new(width_tiles: usize, bitmap: Bitmap) -> Self {
        Self {
            width_tiles,
            bitmap,
        }
    }

    /// Tile at tile column `tx`, tile row `ty`.
    pub fn tile_at(&self, tx: usize, ty: usize) -> Tile {
        self.bitmap.tile_at(tx, ty)
    }

    /// All whole tiles of the glyph, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.bitmap.tiles()
    }

    /// True when the row count leaves a partial tile row at the bottom.
    pub fn has_partial_tile_row(&self) -> bool {
        self.bitmap.row_count() % Tile::SIZE != 0
    }
}
