//! tilefont: tile font compiler for a 4-bit tile clock display.
//! Parses BDF subset fonts, cuts glyphs into 4x4 tiles, builds a 16 entry
//! tile palette and encodes the firmware blobs.

pub mod bdf;
pub mod blockfont;
pub mod digits;
mod error;
mod font;
mod glyph;
pub mod output;
pub mod palette;
pub mod pipeline;
mod tile;
pub use error::{Result, TileFontError};
pub use font::Font;
pub use glyph::Glyph;
pub use palette::{collect_tiles, TileBlock, TileSet};
pub use pipeline::{compile, run, Artifacts, BuildConfig};
pub use tile::{Bitmap, Tile};

// Test utilities
pub mod test_support;
