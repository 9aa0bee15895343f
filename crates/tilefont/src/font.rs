use std::collections::BTreeMap;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use zip::ZipArchive;

use crate::{
    bdf,
    error::{Result, TileFontError},
    glyph::Glyph,
    tile::Tile,
};

/// A parsed font: one glyph per single byte codepoint.
#[derive(Clone, Debug, Default)]
pub struct Font {
    pub name: String,
    glyphs: BTreeMap<u8, Glyph>,
}

impl Font {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            glyphs: BTreeMap::new(),
        }
    }

    /// Reads and parses a font file. The font is named after the file stem.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| TileFontError::Source {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_bytes(name, &bytes)
    }

    /// Parses font source bytes. Zip archives are searched for their first `.bdf` entry.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let name = name.into();
        if bytes.len() >= 4 && &bytes[0..4] == b"PK\x03\x04" {
            let mut archive = ZipArchive::new(Cursor::new(bytes))
                .map_err(|e| TileFontError::Parse(format!("zip open error: {e}")))?;
            for i in 0..archive.len() {
                let mut file = archive
                    .by_index(i)
                    .map_err(|e| TileFontError::Parse(format!("zip entry error: {e}")))?;
                if file.name().to_ascii_lowercase().ends_with(".bdf") {
                    let mut buf = String::new();
                    file.read_to_string(&mut buf)
                        .map_err(|e| TileFontError::Parse(format!("zip read bdf error: {e}")))?;
                    return Ok(bdf::parse(name, &buf));
                }
            }
            return Err(TileFontError::Parse("zip archive contained no .bdf".into()));
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|e| TileFontError::Parse(format!("utf8 error: {e}")))?;
        Ok(bdf::parse(name, content))
    }

    pub fn insert(&mut self, code: u8, glyph: Glyph) {
        self.glyphs.insert(code, glyph);
    }

    pub fn glyph(&self, code: u8) -> Option<&Glyph> {
        self.glyphs.get(&code)
    }

    pub fn has_char(&self, code: u8) -> bool {
        self.glyphs.contains_key(&code)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Glyphs in ascending codepoint order.
    pub fn iter_glyphs(&self) -> impl Iterator<Item = (u8, &Glyph)> {
        self.glyphs.iter().map(|(code, glyph)| (*code, glyph))
    }

    /// Every whole tile of every glyph, duplicates included.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.glyphs.values().flat_map(Glyph::tiles)
    }
}
