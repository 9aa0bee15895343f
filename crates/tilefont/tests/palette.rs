use pretty_assertions::assert_eq;
use tilefont::{
    collect_tiles,
    test_support::{single_tile_font, uniform_glyph},
    Font, Tile, TileBlock, TileFontError, TileSet,
};

fn distinct_tiles(n: u16) -> Vec<Tile> {
    (0..n).map(|i| Tile::new(0x1000 + i * 3)).collect()
}

#[test]
fn duplicates_collapse() {
    let mut font = Font::new("dup");
    font.insert(b'a', uniform_glyph(3, 2, Tile::FULL));
    font.insert(b'b', uniform_glyph(2, 2, Tile::new(0x0F0F)));
    font.insert(b'c', uniform_glyph(1, 1, Tile::FULL));

    let extracted = font.tiles().count();
    let set = collect_tiles([&font]);
    assert_eq!(extracted, 11);
    assert!(set.len() <= extracted);
    assert_eq!(set.len(), 2);
    assert!(set.contains(Tile::FULL));
    assert!(set.contains(Tile::new(0x0F0F)));
}

#[test]
fn tiles_from_all_fonts_are_merged() {
    let a = single_tile_font("a", &[Tile::new(5), Tile::new(7)]);
    let b = single_tile_font("b", &[Tile::new(7), Tile::new(1)]);
    let set = collect_tiles([&a, &b]);
    let tiles: Vec<Tile> = set.iter().collect();
    assert_eq!(tiles, vec![Tile::new(1), Tile::new(5), Tile::new(7)]);
}

#[test]
fn block_is_sorted_and_distinct() {
    let set: TileSet = [0xFFFF, 0x0001, 0x8000, 0x0001, 0x00F0]
        .into_iter()
        .map(Tile::new)
        .collect();
    let block = TileBlock::from_set(&set).unwrap();
    assert_eq!(
        block.tiles(),
        &[
            Tile::new(0x0001),
            Tile::new(0x00F0),
            Tile::new(0x8000),
            Tile::new(0xFFFF)
        ]
    );
    assert!(block.tiles().windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn index_lookup() {
    let set: TileSet = [0x0300, 0x0020, 0x0001].into_iter().map(Tile::new).collect();
    let block = TileBlock::from_set(&set).unwrap();
    assert_eq!(block.index(Tile::new(0x0001)), Some(0));
    assert_eq!(block.index(Tile::new(0x0020)), Some(1));
    assert_eq!(block.index(Tile::new(0x0300)), Some(2));
    assert_eq!(block.index(Tile::new(0x0002)), None);
    assert_eq!(block.tile(2), Some(Tile::new(0x0300)));
    assert_eq!(block.tile(3), None);
}

#[test]
fn empty_tile_is_first() {
    let set: TileSet = [Tile::FULL, Tile::new(0x1234), Tile::EMPTY]
        .into_iter()
        .collect();
    let block = TileBlock::from_set(&set).unwrap();
    assert_eq!(block.index(Tile::EMPTY), Some(0));
    assert_eq!(block.index(Tile::FULL), Some(2));
}

#[test]
fn sixteen_tiles_fit() {
    let font = single_tile_font("sixteen", &distinct_tiles(16));
    let block = TileBlock::from_set(&collect_tiles([&font])).unwrap();
    assert_eq!(block.len(), TileBlock::MAX_TILES);
    assert_eq!(block.to_bytes().len(), 32);
}

#[test]
fn seventeen_tiles_overflow() {
    let font = single_tile_font("seventeen", &distinct_tiles(17));
    let err = TileBlock::from_set(&collect_tiles([&font])).unwrap_err();
    assert!(
        matches!(err, TileFontError::TooManyTiles { count: 17, max: 16 }),
        "{err}"
    );
}

#[test]
fn palette_bytes_are_little_endian() {
    let set: TileSet = [Tile::new(0x2D3F), Tile::new(0x0102)].into_iter().collect();
    let block = TileBlock::from_set(&set).unwrap();
    assert_eq!(block.to_bytes(), vec![0x02, 0x01, 0x3F, 0x2D]);
}
