// File: crates/swingchart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshots with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips the golden comparison to ease first run.
// - Independently of goldens, every render is checked for determinism and
//   for known pixels (background, area fill, volume bar color).

mod common;

use swingchart_core::{compose, ChartConfig, DisplayOptions, HoverState};
use swingchart_render_skia::{RenderOptions, SkiaRenderer};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn decode(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory(bytes).expect("decode png").to_rgba8()
}

fn background() -> [u8; 4] {
    let bg = RenderOptions::default().theme.background;
    [bg.r(), bg.g(), bg.b(), bg.a()]
}

fn render(options: DisplayOptions, hover: HoverState) -> Vec<u8> {
    let cfg = ChartConfig::default();
    let outcome = compose(&common::fixture_series(), &options, &cfg, hover);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // deterministic
    SkiaRenderer::new().render_to_png_bytes(&outcome, &cfg, &opts).expect("render bytes")
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_price_line() {
    let bytes = render(DisplayOptions::default(), HoverState::Idle);
    assert_eq!(decode(&bytes).as_raw(), decode(&render(DisplayOptions::default(), HoverState::Idle)).as_raw());

    let img = decode(&bytes);
    // Price domain is 100..115 over 360px; between indices 3 and 4 the line runs from y=168 to y=216.
    assert_eq!(img.get_pixel(360, 60).0, background(), "above the line is untouched");
    assert_ne!(img.get_pixel(360, 355).0, background(), "below the line is area fill");

    write_or_compare(&snapshot_path("price_line.png"), &bytes);
}

#[test]
fn golden_all_layers_hovered() {
    let bytes = render(DisplayOptions::all(), HoverState::Active(3));
    assert_eq!(decode(&bytes).as_raw(), decode(&render(DisplayOptions::all(), HoverState::Active(3))).as_raw());

    let img = decode(&bytes);
    // Bar 3 is centered at x=308.6, 88px wide and about 57px tall; its close is above its open.
    let [r, g, b, _] = img.get_pixel(300, 350).0;
    assert!(g > r.saturating_add(50) && g > b, "rising volume bar should be green, got {:?}", (r, g, b));

    write_or_compare(&snapshot_path("all_layers_hovered.png"), &bytes);
}

#[test]
fn hover_changes_pixels() {
    let idle = render(DisplayOptions::all(), HoverState::Idle);
    let active = render(DisplayOptions::all(), HoverState::Active(3));
    assert_ne!(decode(&idle).as_raw(), decode(&active).as_raw());
}
