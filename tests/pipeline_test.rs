//! End-to-end runs of the decode → dither → encode pipeline over real files.

mod common;

use bitdither::error::RunError;
use bitdither::models::DitherConfig;
use bitdither::services::DitherPipeline;
use common::{fixtures, TestWorkspace};
use depth_dither::{BitDepth, Rgba8, RgbaImage};
use pretty_assertions::assert_eq;

fn run(ws: &TestWorkspace, input: &RgbaImage, bits: u8) -> RgbaImage {
    ws.write_png("in.png", input);
    let config = DitherConfig::new(ws.path("in.png"), ws.path("out.png"), BitDepth::new(bits).unwrap());
    let summary = DitherPipeline::new(config).run().expect("run failed");
    assert_eq!((summary.width, summary.height), (input.width(), input.height()));
    assert_eq!(summary.bits.get(), bits);
    ws.read_png("out.png")
}

#[test]
fn test_single_mid_gray_pixel() {
    let ws = TestWorkspace::new();
    let out = run(&ws, &fixtures::uniform(1, 1, Rgba8::new(128, 128, 128, 255)), 1);
    assert_eq!(out.pixels(), &[Rgba8::new(127, 127, 127, 255)]);
}

#[test]
fn test_single_row_has_no_diffusion() {
    let ws = TestWorkspace::new();
    let input = RgbaImage::new(
        vec![Rgba8::new(255, 0, 0, 255), Rgba8::new(0, 0, 0, 255)],
        2,
        1,
    )
    .unwrap();
    let out = run(&ws, &input, 1);
    assert_eq!(out, input);
}

#[test]
fn test_small_residual_truncates_to_nothing() {
    let ws = TestWorkspace::new();
    let input = RgbaImage::new(
        vec![Rgba8::new(128, 128, 128, 255), Rgba8::new(0, 0, 0, 255)],
        1,
        2,
    )
    .unwrap();
    let out = run(&ws, &input, 1);
    assert_eq!(
        out.pixels(),
        &[Rgba8::new(127, 127, 127, 255), Rgba8::new(0, 0, 0, 255)]
    );
}

#[test]
fn test_on_palette_input_is_unchanged() {
    for bits in BitDepth::all() {
        let ws = TestWorkspace::new();
        let levels = bits.levels();
        let pixels = (0..30)
            .map(|i| {
                let l = |k: usize| levels[(i + k) % levels.len()];
                Rgba8::new(l(0), l(1), l(2), l(3))
            })
            .collect();
        let input = RgbaImage::new(pixels, 6, 5).unwrap();
        let out = run(&ws, &input, bits.get());
        assert_eq!(out, input, "changed at {bits} bits");
    }
}

#[test]
fn test_two_by_two_diffusion_sign_and_weight() {
    // (0,0): 200 -> 255, residual -55; east gets -24 (176), south -17
    // (183), south-east -3 (197). (1,0): 176 -> 127, residual 49; south-west
    // +9 (192), south +15 (212). The last row then rounds both up to 255.
    let ws = TestWorkspace::new();
    let out = run(&ws, &fixtures::uniform(2, 2, Rgba8::new(200, 200, 200, 255)), 1);
    let gray: Vec<u8> = out.pixels().iter().map(|p| p.r).collect();
    assert_eq!(gray, vec![255, 127, 255, 255]);
    assert!(out.pixels().iter().all(|p| p.a == 255 && p.r == p.g && p.g == p.b));
}

#[test]
fn test_seven_bit_pattern_stays_within_one() {
    let ws = TestWorkspace::new();
    let input = fixtures::stripes(24, 10);
    let out = run(&ws, &input, 7);
    common::assert_within(&out, &input, 1);
}

#[test]
fn test_gradient_lands_on_palette_for_every_depth() {
    for bits in BitDepth::all() {
        let ws = TestWorkspace::new();
        let out = run(&ws, &fixtures::gradient(33, 9), bits.get());
        common::assert_on_palette(&out, bits);
    }
}

#[test]
fn test_extremes_are_fixed_points() {
    for fill in [Rgba8::from_bytes([0; 4]), Rgba8::from_bytes([255; 4])] {
        let ws = TestWorkspace::new();
        let input = fixtures::uniform(7, 4, fill);
        assert_eq!(run(&ws, &input, 3), input);
    }
}

#[test]
fn test_rgb_input_is_written_as_rgba() {
    let ws = TestWorkspace::new();
    let mut png = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png, 2, 1);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[255, 255, 255, 0, 0, 0]).unwrap();
    }
    ws.write_bytes("in.png", &png);

    let config = DitherConfig::new(ws.path("in.png"), ws.path("out.png"), BitDepth::DEFAULT);
    DitherPipeline::new(config).run().unwrap();

    let bytes = std::fs::read(ws.path("out.png")).unwrap();
    let decoder = png::Decoder::new(&bytes[..]);
    let reader = decoder.read_info().unwrap();
    assert_eq!(reader.info().color_type, png::ColorType::Rgba);
    assert_eq!(reader.info().bit_depth, png::BitDepth::Eight);
    assert_eq!(
        ws.read_png("out.png").pixels(),
        &[Rgba8::WHITE, Rgba8::BLACK]
    );
}

#[test]
fn test_undecodable_input_writes_nothing() {
    let ws = TestWorkspace::new();
    ws.write_bytes("in.png", b"GIF89a not a png");
    let config = DitherConfig::new(ws.path("in.png"), ws.path("out.png"), BitDepth::DEFAULT);

    let err = DitherPipeline::new(config).run().unwrap_err();

    assert!(matches!(err, RunError::Decode { .. }), "got {err:?}");
    assert!(err.to_string().starts_with("Error decoding file "));
    assert!(!ws.exists("out.png"));
}

#[test]
fn test_unwritable_output_is_encode_error() {
    let ws = TestWorkspace::new();
    ws.write_png("in.png", &fixtures::gradient(4, 4));
    let config = DitherConfig::new(
        ws.path("in.png"),
        ws.path("missing-dir/out.png"),
        BitDepth::DEFAULT,
    );

    let err = DitherPipeline::new(config).run().unwrap_err();

    assert!(matches!(err, RunError::Encode { .. }), "got {err:?}");
    assert_eq!(err.path(), ws.path("missing-dir/out.png"));
}
