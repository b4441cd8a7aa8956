//! Matrix symbol scaling regression test
//!
//! Integer-factor scaling of 2D symbols: factor selection, quiet zone,
//! overflow past the source, and module replication.

use barscale_core::{Color, Rect, Symbol};
use barscale_test::fixtures::{self, Numbered};
use barscale_test::RegParams;
use barscale_transform::{TransformError, scale, scale_2d};
use std::sync::Arc;

#[test]
fn scale2d_reg() {
    let mut rp = RegParams::new("scale2d");

    // --- Test 1: 10x10 into 44x44 with a 2 pixel quiet zone ---
    let src = Arc::new(Numbered::new(10, 10, 2));
    let scaled = scale(Arc::clone(&src), 44, 44, 2).expect("scale 44x44");
    rp.compare_values(4.0, scaled.sampler().factor(), 0.0);
    rp.compare_values(
        1.0,
        if scaled.bounds() == Rect::from_size(44, 44) { 1.0 } else { 0.0 },
        0.0,
    );
    rp.compare_colors(Color::WHITE, scaled.at(2, 2));
    rp.compare_colors(Numbered::color_of(0, 0), scaled.at(3, 3));
    rp.compare_colors(Numbered::color_of(9, 9), scaled.at(41, 41));
    rp.compare_colors(Color::WHITE, scaled.at(42, 3));
    rp.compare_colors(Color::WHITE, scaled.at(3, 42));
    rp.compare_colors(Numbered::color_of(0, 0), scaled.at(5, 5));
    rp.compare_colors(Numbered::color_of(1, 0), scaled.at(6, 5));

    // --- Test 2: every source module becomes a solid factor x factor block ---
    let f = scaled.sampler().factor() as i32;
    let mut mismatches = 0;
    for sy in 0..10 {
        for sx in 0..10 {
            for dy in 0..f {
                for dx in 0..f {
                    let x = 2 + sx * f + dx;
                    let y = 2 + sy * f + dy;
                    if scaled.at(x, y) != Numbered::color_of(sx, sy) {
                        mismatches += 1;
                    }
                }
            }
        }
    }
    rp.compare_values(0.0, mismatches as f64, 0.0);

    // --- Test 3: checkerboard keeps its dark module count, times factor^2 ---
    let board = Arc::new(fixtures::checkerboard(5, 5).expect("checkerboard"));
    let scaled_board = scale(board, 30, 30, 0).expect("scale checkerboard");
    let raster = barscale_core::Raster::from_symbol(&scaled_board);
    rp.compare_values((13 * 36) as f64, raster.dark_count() as f64, 0.0);
    rp.display_symbol("checkerboard x6", &scaled_board);

    // --- Test 4: rejection ---
    let err = scale(Arc::new(Numbered::new(10, 10, 2)), 4, 4, 2).unwrap_err();
    rp.compare_values(
        1.0,
        if matches!(
            err,
            TransformError::ScaleTooSmall {
                min_width: 10,
                min_height: 10
            }
        ) {
            1.0
        } else {
            0.0
        },
        0.0,
    );
    let err = scale(Arc::new(Numbered::new(10, 10, 3)), 100, 100, 0).unwrap_err();
    rp.compare_values(
        1.0,
        if matches!(err, TransformError::UnsupportedFormat { dimensions: 3 }) {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    assert!(rp.cleanup());
}

#[test]
fn scale2d_border_reg() {
    let mut rp = RegParams::new("scale2d_border");

    // Boxes whose leftover space is not a multiple of the factor, and
    // non-square boxes limited by either axis
    let cases = [
        (45, 45, 2),
        (44, 44, 2),
        (33, 60, 3),
        (60, 33, 0),
        (20, 20, 1),
        (71, 52, 5),
    ];

    for &(w, h, o) in &cases {
        let src = Arc::new(Numbered::new(7, 5, 2));
        let scaled = scale_2d(src, w, h, o).expect("scale");
        let f = scaled.sampler().factor() as i32;
        let (w, h, o) = (w as i32, h as i32, o as i32);

        // Content ends no later than the start of a full-width right/bottom border
        rp.compare_values(1.0, if o + f * 7 <= w - o { 1.0 } else { 0.0 }, 0.0);
        rp.compare_values(1.0, if o + f * 5 <= h - o { 1.0 } else { 0.0 }, 0.0);

        let mut mismatches = 0;
        for y in 0..h {
            for x in 0..w {
                let border = x < o || y < o || x >= o + f * 7 || y >= o + f * 5;
                let expected = if border {
                    Color::WHITE
                } else {
                    Numbered::color_of((x - o) / f, (y - o) / f)
                };
                if scaled.at(x, y) != expected {
                    mismatches += 1;
                }
            }
        }
        rp.compare_values(0.0, mismatches as f64, 0.0);
        let expected_bounds = Rect::from_size(w as u32, h as u32);
        rp.compare_values(1.0, if scaled.bounds() == expected_bounds { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup());
}

#[test]
fn scale2d_origin_reg() {
    let mut rp = RegParams::new("scale2d_origin");

    // Source bounds that do not start at (0, 0) are read relative to their origin
    let diag = fixtures::diagonal(4).expect("diagonal");
    let shifted = Arc::new(diag.clone().with_origin(-3, 8));
    let a = scale(Arc::new(diag), 20, 20, 2).expect("scale diagonal");
    let b = scale(shifted, 20, 20, 2).expect("scale shifted diagonal");
    rp.compare_symbols(&a, &b);
    rp.compare_colors(Color::BLACK, b.at(2, 2));
    rp.compare_colors(Color::BLACK, b.at(17, 17));
    rp.compare_colors(Color::WHITE, b.at(17, 2));

    assert!(rp.cleanup());
}
