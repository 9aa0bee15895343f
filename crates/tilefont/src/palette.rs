//! Tile deduplication and the indexed tile palette.
use std::collections::BTreeSet;

use log::debug;

use crate::{
    error::{Result, TileFontError},
    font::Font,
    tile::Tile,
};

/// Distinct tiles seen across a set of fonts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileSet {
    tiles: BTreeSet<Tile>,
}

impl TileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tile: Tile) {
        self.tiles.insert(tile);
    }

    pub fn add_font(&mut self, font: &Font) {
        self.tiles.extend(font.tiles());
    }

    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in ascending raw value order.
    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }
}

impl FromIterator<Tile> for TileSet {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

/// Collects every whole tile of every glyph in `fonts`.
pub fn collect_tiles<'a>(fonts: impl IntoIterator<Item = &'a Font>) -> TileSet {
    let mut set = TileSet::new();
    for font in fonts {
        set.add_font(font);
        debug!("{}: {} distinct tiles so far", font.name, set.len());
    }
    set
}

/// The tile palette: distinct tiles sorted by raw value, indexed by position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBlock {
    tiles: Vec<Tile>,
}

impl TileBlock {
    /// Palette indices are stored in a nibble.
    pub const MAX_TILES: usize = 16;

    pub fn from_set(set: &TileSet) -> Result<Self> {
        if set.len() > Self::MAX_TILES {
            return Err(TileFontError::TooManyTiles {
                count: set.len(),
                max: Self::MAX_TILES,
            });
        }
        let block = Self {
            tiles: set.iter().collect(),
        };
        debug_assert!(block.tiles.windows(2).all(|w| w[0] < w[1]));
        if set.contains(Tile::EMPTY) {
            assert_eq!(
                block.index(Tile::EMPTY),
                Some(0),
                "the empty tile must be palette entry 0"
            );
        }
        Ok(block)
    }

    /// Position of `tile` in the palette.
    pub fn index(&self, tile: Tile) -> Option<usize> {
        self.tiles.binary_search(&tile).ok()
    }

    pub fn tile(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// `tiles.bin`: each tile as a little endian u16.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.tiles.iter().flat_map(|t| t.to_le_bytes()).collect()
    }
}
