// File: crates/marketshare-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing SVG and PNG.

use chrono::NaiveDate;
use marketshare_core::{Chart, RenderOptions, ShareColumn};

fn small_chart() -> Chart {
    let dates: Vec<NaiveDate> = (1..=5)
        .map(|m| NaiveDate::from_ymd_opt(2015, m, 1).expect("valid date"))
        .collect();
    Chart::from_columns(
        dates,
        vec![
            ShareColumn::with_values(
                "uber",
                vec![Some(0.55), Some(0.58), Some(0.60), Some(0.62), Some(0.61)],
            ),
            ShareColumn::with_values(
                "lyft",
                vec![Some(0.35), Some(0.33), None, Some(0.30), Some(0.31)],
            ),
        ],
    )
}

#[test]
fn render_smoke_svg() {
    let chart = small_chart();
    let opts = RenderOptions::default();

    let svg = chart.render_to_svg_string(&opts).expect("render svg");
    assert!(svg.contains("<svg"), "svg document expected");

    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    chart.render_to_svg(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "svg should be non-empty");
}

#[test]
fn render_smoke_png() {
    let chart = small_chart();
    let opts = RenderOptions::default();

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    // Decoded size matches the requested surface
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.width(), opts.width as u32);
    assert_eq!(img.height(), opts.height as u32);
}

#[test]
fn degenerate_viewport_renders_background_only() {
    let chart = small_chart();
    let mut opts = RenderOptions::default();
    opts.width = 40;
    opts.height = 40; // smaller than the insets
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
