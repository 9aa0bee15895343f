use pretty_assertions::assert_eq;
use tilefont::{
    blockfont::{encode_glyphs, BlockFontMap, BLOCK_FONT_GLYPHS, BLOCK_FONT_RANGES, PLACEHOLDER},
    collect_tiles,
    digits::{digit_table_bytes, Digit, DIGIT_TABLE},
    test_support::{uniform_block_font, uniform_glyph},
    Tile, TileBlock, TileFontError, TileSet,
};

#[test]
fn digit_table_values() {
    assert_eq!(DIGIT_TABLE[0x0], 0x2D3F);
    assert_eq!(DIGIT_TABLE[0x1], 0x0006);
    assert_eq!(DIGIT_TABLE[0x7], 0x0007);
    assert_eq!(DIGIT_TABLE[0x8], 0x3F7F);
    assert_eq!(DIGIT_TABLE[0xF], 0x0071);
}

#[test]
fn digit_table_bytes_are_little_endian() {
    let bytes = digit_table_bytes();
    assert_eq!(bytes.len(), 32);
    assert_eq!(&bytes[0..4], &[0x3F, 0x2D, 0x06, 0x00]);
}

#[test]
fn corners_only_where_segments_meet() {
    for (digit, bits) in DIGIT_TABLE.iter().enumerate() {
        let d = Digit::from_raw(*bits);
        let checks = [
            (d.curve_ab(), d.draw_a() && d.draw_b()),
            (d.curve_cd(), d.draw_c() && d.draw_d()),
            (d.curve_de(), d.draw_d() && d.draw_e()),
            (d.curve_fa(), d.draw_f() && d.draw_a()),
            (d.curve_bc(), [d.draw_b(), d.draw_c(), d.draw_g()].iter().filter(|s| **s).count() >= 2),
            (d.curve_ef(), [d.draw_e(), d.draw_f(), d.draw_g()].iter().filter(|s| **s).count() >= 2),
        ];
        for (curved, segments_meet) in checks {
            assert!(!curved || segments_meet, "digit {digit:x}");
        }
    }
}

#[test]
fn digit_view() {
    let one = Digit::get(1);
    assert!(one.is_one());
    assert!(one.draw_b() && one.draw_c());
    assert!(!one.draw_a());
    assert_eq!(Digit::from_ascii('a'), Digit::get(0xA));
    assert_eq!(Digit::from_ascii('z'), Digit::get(0));
    assert_eq!(Digit::get(0x18), Digit::get(0x8));
}

#[test]
fn map_layout() {
    let map = BlockFontMap::default();
    let bytes = map.to_bytes();
    assert_eq!(bytes.len(), 2 * BLOCK_FONT_RANGES.len());
    assert_eq!(&bytes[0..2], &[0x20, 0x21]);
    assert_eq!(bytes, vec![0x20, 0x21, 0x2C, 0x2E, 0x30, 0x3A, 0x41, 0x5A, 0x7B, 0x80]);
    assert_eq!(map.glyph_count(), BLOCK_FONT_GLYPHS);
}

#[test]
fn dense_indices() {
    let map = BlockFontMap::default();
    assert_eq!(map.dense_index(b' '), Some(0));
    assert_eq!(map.dense_index(b'!'), Some(1));
    assert_eq!(map.dense_index(b','), Some(2));
    assert_eq!(map.dense_index(b'0'), Some(5));
    assert_eq!(map.dense_index(b'A'), Some(16));
    assert_eq!(map.dense_index(b'Z'), Some(41));
    assert_eq!(map.dense_index(0x80), Some(47));
    // not retained: falls back to the placeholder glyph
    assert_eq!(map.dense_index(b'?'), map.dense_index(PLACEHOLDER));
    assert_eq!(map.dense_index(b'?'), Some(46));
    let dense: Vec<u8> = map.codepoints().collect();
    assert_eq!(dense.len(), 48);
    assert_eq!(dense[16], b'A');
}

fn palette(tiles: &[Tile]) -> TileBlock {
    TileBlock::from_set(&tiles.iter().copied().collect::<TileSet>()).unwrap()
}

#[test]
fn encode_uniform_font() {
    let tile = Tile::new(0x6996);
    let font = uniform_block_font(tile);
    let tiles = palette(&[Tile::EMPTY, Tile::new(0x0001), tile]);
    let data = encode_glyphs(&font, &BlockFontMap::default(), &tiles).unwrap();
    assert_eq!(data.len(), 720);
    // 5 columns: two full bytes, then column 4 alone
    for glyph in data.chunks(15) {
        for row in glyph.chunks(3) {
            assert_eq!(row, &[0x22, 0x22, 0x02]);
        }
    }
}

#[test]
fn six_column_glyph_fills_high_nibble() {
    let mut font = uniform_block_font(Tile::FULL);
    font.insert(b'{', uniform_glyph(6, 5, Tile::EMPTY));
    let tiles = collect_tiles([&font]);
    let block = TileBlock::from_set(&tiles).unwrap();
    let data = encode_glyphs(&font, &BlockFontMap::default(), &block).unwrap();
    let map = BlockFontMap::default();
    let full = &data[0..15];
    assert_eq!(&full[0..3], &[0x11, 0x11, 0x01]);
    let start = map.dense_index(b'{').unwrap() * 15;
    assert_eq!(&data[start..start + 15], &[0u8; 15]);
}

#[test]
fn columns_are_packed_low_nibble_first() {
    let mut font = uniform_block_font(Tile::EMPTY);
    let mut art = vec![vec![0u8; 5]; 20];
    for row in art.iter_mut() {
        row[1] = 0xF;
    }
    font.insert(b'A', tilefont::Glyph::new(5, tilefont::Bitmap::from_rows(art)));
    let block = TileBlock::from_set(&collect_tiles([&font])).unwrap();
    assert_eq!(block.tiles(), &[Tile::EMPTY, Tile::FULL]);
    let data = encode_glyphs(&font, &BlockFontMap::default(), &block).unwrap();
    let start = BlockFontMap::default().dense_index(b'A').unwrap() * 15;
    assert_eq!(&data[start..start + 3], &[0x10, 0x00, 0x00]);
}

#[test]
fn wrong_glyph_count_is_rejected() {
    let font = uniform_block_font(Tile::FULL);
    let tiles = palette(&[Tile::FULL]);
    let short = BlockFontMap::new(&[(b' ', b'!'), (b'A', b'Z')]);
    let err = encode_glyphs(&font, &short, &tiles).unwrap_err();
    assert!(
        matches!(err, TileFontError::GlyphCount { found: 28, expected: 48 }),
        "{err}"
    );
    let private_block_to_7f = BlockFontMap::new(&[
        (b' ', b'!'),
        (b',', b'.'),
        (b'0', b':'),
        (b'A', b'Z'),
        (0x7B, 0x7F),
    ]);
    assert!(matches!(
        encode_glyphs(&font, &private_block_to_7f, &tiles),
        Err(TileFontError::GlyphCount { found: 47, .. })
    ));
}

#[test]
fn missing_glyph_is_rejected() {
    let mut font = uniform_block_font(Tile::FULL);
    let mut trimmed = tilefont::Font::new("trimmed");
    for (code, glyph) in font.iter_glyphs() {
        if code != b'Q' {
            trimmed.insert(code, glyph.clone());
        }
    }
    font = trimmed;
    let err = encode_glyphs(&font, &BlockFontMap::default(), &palette(&[Tile::FULL])).unwrap_err();
    assert!(matches!(err, TileFontError::MissingGlyph(b'Q')), "{err}");
}

#[test]
fn foreign_tile_is_an_internal_error() {
    let font = uniform_block_font(Tile::FULL);
    let err = encode_glyphs(&font, &BlockFontMap::default(), &palette(&[Tile::EMPTY])).unwrap_err();
    assert!(matches!(err, TileFontError::TileNotInPalette(t) if t == Tile::FULL), "{err}");
}
