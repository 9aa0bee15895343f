//! Parser for the BDF subset used by the clock fonts.
//!
//! Only the directives that shape the tile bitmaps are understood; everything
//! else in the file is skipped. Numeric arguments that fail to parse are read
//! as zero and malformed hex digits in bitmap rows decode as a zero nibble.
//! Arguments may be separated by any run of whitespace, not only the single
//! spaces the font files use. Glyph dimensions are capped at
//! [`MAX_DIMENSION`] so absurd header values cannot exhaust memory.
use log::{debug, warn};

use crate::{font::Font, glyph::Glyph, tile::Bitmap, tile::Tile};

/// One recognized line of the font description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    /// `FONT_ASCENT h`: rows per glyph bitmap
    FontAscent(i64),
    /// `AVERAGE_WIDTH w`: minimum glyph width in pixels
    AverageWidth(i64),
    /// `ENCODING n`: codepoint of the following glyph
    Encoding(i64),
    /// `BBX w h x y`: glyph bounding box
    Bbx { width: i64, height: i64, x: i64, y: i64 },
    /// `BITMAP`: start of the hex rows
    Bitmap,
    /// `ENDCHAR`: end of the hex rows
    EndChar,
    /// Anything else
    Other,
}

impl Directive {
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or_default();
        let args: Vec<i64> = words.map(parse_number).collect();
        let arg = |i: usize| args.get(i).copied().unwrap_or(0);
        match keyword {
            "FONT_ASCENT" => Directive::FontAscent(arg(0)),
            "AVERAGE_WIDTH" => Directive::AverageWidth(arg(0)),
            "ENCODING" => Directive::Encoding(arg(0)),
            "BBX" => Directive::Bbx {
                width: arg(0),
                height: arg(1),
                x: arg(2),
                y: arg(3),
            },
            "BITMAP" => Directive::Bitmap,
            "ENDCHAR" => Directive::EndChar,
            _ => Directive::Other,
        }
    }
}

fn parse_number(word: &str) -> i64 {
    word.parse().unwrap_or(0)
}

fn hex_nibble(ch: char) -> u8 {
    ch.to_digit(16).map_or(0, |d| d as u8)
}

/// Largest row count, tile width or padding accepted from a font file.
pub const MAX_DIMENSION: usize = 4096;

fn non_negative(v: i64) -> usize {
    usize::try_from(v).unwrap_or(0).min(MAX_DIMENSION)
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ParseState {
    #[default]
    Header,
    InGlyph,
    InBitmapBody,
}

/// Per glyph state, reset after every `ENDCHAR`.
#[derive(Debug, Default)]
struct GlyphState {
    code: u8,
    width_tiles: usize,
    pad_left: usize,
    rows: Vec<Vec<u8>>,
}

/// Line by line parser state.
#[derive(Debug)]
pub struct ParseContext {
    font: Font,
    state: ParseState,
    ascent: usize,
    min_width_tiles: usize,
    glyph: GlyphState,
}

impl ParseContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            font: Font::new(name),
            state: ParseState::Header,
            ascent: 0,
            min_width_tiles: 0,
            glyph: GlyphState::default(),
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn feed_line(&mut self, line: &str) {
        if self.state == ParseState::InBitmapBody {
            if line == "ENDCHAR" {
                self.end_glyph();
            } else {
                self.push_bitmap_row(line);
            }
            return;
        }

        match Directive::parse(line) {
            Directive::FontAscent(h) => self.ascent = non_negative(h),
            Directive::AverageWidth(w) => self.min_width_tiles = non_negative(w / 4),
            Directive::Encoding(n) => {
                self.glyph.code = n as u8;
                self.state = ParseState::InGlyph;
            }
            Directive::Bbx { width, x, y, .. } => {
                let width_tiles =
                    non_negative(width.saturating_add(x) / 4).max(self.min_width_tiles);
                self.glyph.width_tiles = width_tiles;
                self.glyph.pad_left = non_negative(x / 4);
                // `y` is taken as a row count as-is, not converted from pixels.
                self.glyph.rows = vec![vec![0; width_tiles]; non_negative(y)];
                self.state = ParseState::InGlyph;
            }
            Directive::Bitmap => self.state = ParseState::InBitmapBody,
            Directive::EndChar | Directive::Other => {}
        }
    }

    fn push_bitmap_row(&mut self, line: &str) {
        let width = self.glyph.width_tiles;
        let mut row = vec![0u8; self.glyph.pad_left];
        row.extend(line.chars().map(hex_nibble));
        row.resize(width, 0);
        self.glyph.rows.push(row);
    }

    fn end_glyph(&mut self) {
        let glyph = std::mem::take(&mut self.glyph);
        let mut rows = glyph.rows;
        while rows.len() < self.ascent {
            rows.push(vec![0; glyph.width_tiles]);
        }
        let glyph_out = Glyph::new(glyph.width_tiles, Bitmap::from_rows(rows));
        if glyph_out.has_partial_tile_row() {
            warn!(
                "{}: glyph {:#04x} has {} rows, the last {} are not part of any tile",
                self.font.name,
                glyph.code,
                glyph_out.bitmap.row_count(),
                glyph_out.bitmap.row_count() % Tile::SIZE
            );
        }
        debug!(
            "{}: glyph {:#04x} is {}x{} tiles",
            self.font.name,
            glyph.code,
            glyph_out.bitmap.size_tiles().0,
            glyph_out.bitmap.size_tiles().1
        );
        self.font.insert(glyph.code, glyph_out);
        self.state = ParseState::Header;
    }

    /// Completes parsing. A bitmap left open at end of input is still stored.
    pub fn finish(mut self) -> Font {
        if self.state == ParseState::InBitmapBody {
            warn!("{}: missing ENDCHAR at end of input", self.font.name);
            self.end_glyph();
        }
        self.font
    }
}

/// Parses a whole font description.
pub fn parse(name: impl Into<String>, content: &str) -> Font {
    let mut ctx = ParseContext::new(name);
    for line in content.lines() {
        ctx.feed_line(line);
    }
    ctx.finish()
}
