//! The end-to-end build: parse both fonts, build the palette, write the blobs.
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::{
    blockfont::{encode_glyphs, BlockFontMap},
    digits::digit_table_bytes,
    error::Result,
    font::Font,
    output::{remove_stale, StagedOutput},
    palette::{collect_tiles, TileBlock, TileSet},
};

/// Input and output locations. Relative paths are resolved against `root`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BuildConfig {
    pub root: PathBuf,
    pub block_font: PathBuf,
    pub digit_font: PathBuf,
    pub tiles_out: PathBuf,
    pub digits_out: PathBuf,
    pub block_font_out: PathBuf,
    pub block_font_map_out: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            block_font: PathBuf::from("blockfont/blockfont.bdf"),
            digit_font: PathBuf::from("digitfont/digitfont.bdf"),
            tiles_out: PathBuf::from("tiles.bin"),
            digits_out: PathBuf::from("digitfont/digits.bin"),
            block_font_out: PathBuf::from("blockfont/blockfont.bin"),
            block_font_map_out: PathBuf::from("blockfont/blockfontmap.bin"),
        }
    }
}

impl BuildConfig {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Output files in the order they are written.
    pub fn output_paths(&self) -> [PathBuf; 4] {
        [
            self.resolve(&self.tiles_out),
            self.resolve(&self.digits_out),
            self.resolve(&self.block_font_map_out),
            self.resolve(&self.block_font_out),
        ]
    }
}

/// Everything one build produces, still in memory.
#[derive(Clone, Debug)]
pub struct Artifacts {
    pub tiles: TileBlock,
    /// `blockfontmap.bin`
    pub block_font_map: Vec<u8>,
    /// `blockfont.bin`
    pub block_font: Vec<u8>,
}

impl Artifacts {
    /// `tiles.bin`
    pub fn tiles_bytes(&self) -> Vec<u8> {
        self.tiles.to_bytes()
    }

    /// `digits.bin`
    pub fn digits_bytes(&self) -> Vec<u8> {
        digit_table_bytes()
    }

    pub fn stage(&self, config: &BuildConfig) -> StagedOutput {
        let [tiles, digits, map, glyphs] = config.output_paths();
        let mut out = StagedOutput::new();
        out.add(tiles, self.tiles_bytes());
        out.add(digits, self.digits_bytes());
        out.add(map, self.block_font_map.clone());
        out.add(glyphs, self.block_font.clone());
        out
    }
}

/// Palette shared by both fonts. Fails when more than 16 tiles are needed.
pub fn build_palette(block_font: &Font, digit_font: &Font) -> Result<TileBlock> {
    let set: TileSet = collect_tiles([block_font, digit_font]);
    info!("There are {} distinct tiles", set.len());
    for tile in set.iter() {
        debug!("{tile:?}:\n{}", tile.bitmap());
    }
    TileBlock::from_set(&set)
}

/// Builds all blobs from already parsed fonts.
pub fn compile(block_font: &Font, digit_font: &Font) -> Result<Artifacts> {
    let tiles = build_palette(block_font, digit_font)?;
    let map = BlockFontMap::default();
    let block_font = encode_glyphs(block_font, &map, &tiles)?;
    Ok(Artifacts {
        tiles,
        block_font_map: map.to_bytes(),
        block_font,
    })
}

fn load_and_compile(config: &BuildConfig) -> Result<Artifacts> {
    let block_font = Font::load(&config.resolve(&config.block_font))?;
    let digit_font = Font::load(&config.resolve(&config.digit_font))?;
    info!(
        "loaded {} block glyphs and {} digit glyphs",
        block_font.glyph_count(),
        digit_font.glyph_count()
    );
    compile(&block_font, &digit_font)
}

/// Runs the whole build. On failure no output file is left behind.
pub fn run(config: &BuildConfig) -> Result<Artifacts> {
    let artifacts = match load_and_compile(config) {
        Ok(artifacts) => artifacts,
        Err(e) => {
            let paths = config.output_paths();
            remove_stale(paths.iter().map(PathBuf::as_path));
            return Err(e);
        }
    };
    artifacts.stage(config).commit()?;
    info!("wrote {} tiles to {}", artifacts.tiles.len(), config.root.display());
    Ok(artifacts)
}
