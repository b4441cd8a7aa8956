//! Linear symbol scaling regression test
//!
//! Fractional horizontal scaling of 1D symbols: quiet zone, overflow, and
//! uniform columns at any requested height.

use barscale_core::{Color, Rect, Symbol};
use barscale_test::RegParams;
use barscale_test::fixtures::{self, Numbered};
use barscale_transform::{ScaleOptions, TransformError, scale, scale_with_options};
use std::sync::Arc;

#[test]
fn scale1d_reg() {
    let mut rp = RegParams::new("scale1d");

    // --- Test 1: integral factor ---
    let bars = Arc::new(fixtures::bars("#.##..#").expect("bars"));
    let opts = ScaleOptions::new(25, 40).offset(2);
    let scaled = scale_with_options(Arc::clone(&bars), &opts).expect("scale bars");
    rp.compare_values(3.0, scaled.sampler().factor(), 0.0);
    rp.compare_values(
        1.0,
        if scaled.bounds() == Rect::from_size(25, 40) { 1.0 } else { 0.0 },
        0.0,
    );
    rp.compare_colors(Color::WHITE, scaled.at(1, 0));
    rp.compare_colors(Color::BLACK, scaled.at(2, 0));
    rp.compare_colors(Color::BLACK, scaled.at(4, 39));
    rp.compare_colors(Color::WHITE, scaled.at(5, 20));
    rp.compare_colors(Color::BLACK, scaled.at(22, 10));
    rp.compare_colors(Color::WHITE, scaled.at(23, 10));
    rp.compare_colors(Color::WHITE, scaled.at(24, 10));
    rp.display_symbol("bars x3", &scaled);

    // --- Test 2: every column is uniform ---
    let mut non_uniform = 0;
    for x in 0..25 {
        let top = scaled.at(x, 0);
        for y in 1..40 {
            if scaled.at(x, y) != top {
                non_uniform += 1;
            }
        }
    }
    rp.compare_values(0.0, non_uniform as f64, 0.0);

    // --- Test 3: fractional factor 3.5 ---
    let src = Arc::new(Numbered::new(8, 1, 1));
    let scaled = scale(src, 30, 3, 1).expect("scale numbered");
    rp.compare_values(3.5, scaled.sampler().factor(), 0.0);
    let mut mismatches = 0;
    for x in 0..30 {
        let expected = if x < 1 || x >= 29 {
            Color::WHITE
        } else {
            Numbered::color_of(2 * (x - 1) / 7, 0)
        };
        for y in 0..3 {
            if scaled.at(x, y) != expected {
                mismatches += 1;
            }
        }
    }
    rp.compare_values(0.0, mismatches as f64, 0.0);

    // --- Test 4: factor 1 reproduces the source ---
    let same = scale(Arc::clone(&bars), 7, 1, 0).expect("scale 1:1");
    rp.compare_values(1.0, same.sampler().factor(), 0.0);
    rp.compare_symbols(&*bars, &same);

    // --- Test 5: rejection ---
    let err = scale(Arc::clone(&bars), 10, 10, 5).unwrap_err();
    rp.compare_values(
        1.0,
        if matches!(
            err,
            TransformError::ScaleTooSmall {
                min_width: 7,
                min_height: 1
            }
        ) {
            1.0
        } else {
            0.0
        },
        0.0,
    );
    rp.compare_values(
        1.0,
        if err.to_string() == "cannot scale symbol to an image smaller than 7x1" {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    assert!(rp.cleanup());
}

#[test]
fn scale1d_origin_reg() {
    let mut rp = RegParams::new("scale1d_origin");

    // Rows are read at the top of the source bounds, wherever they start
    let bars = fixtures::bars("##..#").expect("bars");
    let shifted = Arc::new(bars.clone().with_origin(4, -6));
    let a = scale(Arc::new(bars), 50, 12, 5).expect("scale bars");
    let b = scale(shifted, 50, 12, 5).expect("scale shifted bars");
    rp.compare_symbols(&a, &b);
    rp.compare_colors(Color::BLACK, b.at(5, 11));
    rp.compare_colors(Color::WHITE, b.at(25, 0));
    rp.compare_colors(Color::BLACK, b.at(44, 6));
    rp.compare_colors(Color::WHITE, b.at(45, 6));

    assert!(rp.cleanup());
}
