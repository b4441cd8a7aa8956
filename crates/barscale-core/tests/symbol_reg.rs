//! Symbol regression test
//!
//! In-memory symbols and their materialized rasters.

use barscale_core::{Bitmap, CheckSum, Color, Metadata, Raster, Rect, Symbol};
use barscale_test::RegParams;
use barscale_test::fixtures;

#[test]
fn symbol_reg() {
    let mut rp = RegParams::new("symbol");

    // --- Test 1: fixtures as symbols ---
    let board = fixtures::checkerboard(6, 4).expect("checkerboard");
    rp.compare_values(2.0, board.metadata().dimensions as f64, 0.0);
    rp.compare_values(1.0, if board.bounds() == Rect::from_size(6, 4) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(12.0, Raster::from_symbol(&board).dark_count() as f64, 0.0);
    rp.display_symbol("checkerboard", &board);

    let diag = fixtures::diagonal(5).expect("diagonal");
    let raster = Raster::from_symbol(&diag);
    rp.compare_values(5.0, raster.dark_count() as f64, 0.0);
    for i in 0..5 {
        rp.compare_colors(Color::BLACK, raster.get(i, i).unwrap_or(Color::WHITE));
    }

    // --- Test 2: rows round-trip through ASCII ---
    let rows = ["##.#", "....", "#..#"];
    let bm = Bitmap::from_rows(&rows, Metadata::matrix("Test"), "rows").expect("rows");
    let expected: String = rows.iter().map(|r| format!("{}\n", r)).collect();
    let ascii = Raster::from_symbol(&bm).to_ascii();
    rp.compare_values(1.0, if ascii == expected { 1.0 } else { 0.0 }, 0.0);

    // --- Test 3: type-erased symbols keep their capabilities ---
    let symbols: Vec<Box<dyn Symbol>> = vec![
        Box::new(fixtures::bars("#.#").expect("bars")),
        Box::new(fixtures::bars("#.#").expect("bars").with_checksum(9)),
    ];
    let checksums: Vec<Option<u32>> = symbols
        .iter()
        .map(|s| s.as_checksum().map(|c| c.checksum()))
        .collect();
    rp.compare_values(1.0, if checksums == [None, Some(9)] { 1.0 } else { 0.0 }, 0.0);
    rp.compare_symbols(symbols[0].as_ref(), symbols[1].as_ref());

    assert!(rp.cleanup());
}
