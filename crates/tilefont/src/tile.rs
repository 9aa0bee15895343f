//! 4×4 pixel tiles and the nibble bitmaps they are cut from.
use std::fmt;

/// One 4×4 pixel block packed into 16 bits.
///
/// Each nibble holds one pixel row, row 0 in the least significant nibble.
/// Within a row the leftmost pixel is the most significant bit.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile(u16);

impl Tile {
    /// Side length of a tile in pixels.
    pub const SIZE: usize = 4;
    pub const EMPTY: Tile = Tile(0x0000);
    pub const FULL: Tile = Tile(0xFFFF);

    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    /// Nibble of pixel row `row` (0..4).
    pub fn row(self, row: usize) -> u8 {
        ((self.0 >> (row * 4)) & 0xF) as u8
    }

    /// The tile as a one column, four row bitmap.
    pub fn bitmap(self) -> Bitmap {
        Bitmap::from_rows((0..Self::SIZE).map(|y| vec![self.row(y)]).collect())
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile(0x{:04x})", self.0)
    }
}

impl From<u16> for Tile {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

/// A grid of pixel rows where every byte stores one 4 pixel nibble.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bitmap {
    rows: Vec<Vec<u8>>,
}

impl Bitmap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bitmap from nibble rows. Only the low 4 bits of each byte are used.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        debug_assert!(
            rows.windows(2).all(|w| w[0].len() == w[1].len()),
            "bitmap rows must have equal length"
        );
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of a row in nibbles (tile columns).
    pub fn row_width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    fn nibble(&self, tx: usize, y: usize) -> u8 {
        self.rows
            .get(y)
            .and_then(|row| row.get(tx))
            .map_or(0, |n| n & 0xF)
    }

    /// Tests pixel `(x, y)`. Coordinates outside the bitmap read as unset.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        let strip = self.nibble(x / Tile::SIZE, y);
        (strip >> (3 - x % Tile::SIZE)) & 1 != 0
    }

    /// Packs tile column `tx` of pixel rows `ty*4 .. ty*4+4` into a [`Tile`].
    pub fn tile_at(&self, tx: usize, ty: usize) -> Tile {
        let y = ty * Tile::SIZE;
        let raw = (0..Tile::SIZE).fold(0u16, |acc, i| {
            acc | (self.nibble(tx, y + i) as u16) << (i * 4)
        });
        Tile(raw)
    }

    /// `(width, height)` in pixels.
    pub fn size_pixels(&self) -> (usize, usize) {
        (self.row_width() * Tile::SIZE, self.rows.len())
    }

    /// `(columns, rows)` in whole tiles. A partial last tile row is dropped.
    pub fn size_tiles(&self) -> (usize, usize) {
        (self.row_width(), self.rows.len() / Tile::SIZE)
    }

    /// Iterates all whole tiles, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        let (w, h) = self.size_tiles();
        (0..h).flat_map(move |ty| (0..w).map(move |tx| self.tile_at(tx, ty)))
    }

    pub fn debug_string(&self) -> String {
        let (w, h) = self.size_pixels();
        let mut out = String::with_capacity(h * (w + 1));
        for y in 0..h {
            for x in 0..w {
                out.push(if self.is_set(x, y) { '#' } else { '-' });
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}
