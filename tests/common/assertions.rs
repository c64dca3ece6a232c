//! Assertion helpers for tests.

use depth_dither::{BitDepth, RgbaImage};
use pretty_assertions::assert_eq;

use super::app::TestOutput;

/// Assert the process exited with `expected`.
pub fn assert_exit_code(output: &TestOutput, expected: i32) {
    assert_eq!(
        output.code,
        Some(expected),
        "Unexpected exit status. stdout: {} stderr: {}",
        output.stdout,
        output.stderr
    );
}

/// Assert the process exited successfully.
pub fn assert_success(output: &TestOutput) {
    assert_exit_code(output, 0);
}

/// Assert every channel of every pixel is a palette level for `bits`.
pub fn assert_on_palette(image: &RgbaImage, bits: BitDepth) {
    let levels = bits.levels();
    for (i, p) in image.pixels().iter().enumerate() {
        for c in p.to_bytes() {
            assert!(
                levels.contains(&c),
                "Pixel {i} channel value {c} is not a {bits}-bit level {levels:?}"
            );
        }
    }
}

/// Assert two images differ by at most `tolerance` in every channel.
pub fn assert_within(a: &RgbaImage, b: &RgbaImage, tolerance: i32) {
    assert_eq!((a.width(), a.height()), (b.width(), b.height()));
    for (i, (p, q)) in a.pixels().iter().zip(b.pixels()).enumerate() {
        for (x, y) in p.to_bytes().iter().zip(q.to_bytes()) {
            assert!(
                (*x as i32 - y as i32).abs() <= tolerance,
                "Pixel {i}: {p:?} vs {q:?}"
            );
        }
    }
}
