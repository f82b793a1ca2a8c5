// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic small charts (plain and spline) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips the golden comparison.
// - Independently of golden files, every render must be deterministic and
//   must put the stroke color on the line.

use chart_core::{Chart, ChartConfig, ChartProps, Color, RenderOptions, Sizing};

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
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn chart(smoothing: bool, color: &str) -> Chart {
    let config = ChartConfig { sizing: Sizing::Static { width: 400.0, height: 260.0 }, ..ChartConfig::default() };
    Chart::mounted(ChartProps::new(vec![10.0, 12.0, 9.0, 15.0, 11.0, 13.5], smoothing, color), config)
}

fn opts() -> RenderOptions {
    RenderOptions { draw_labels: false, ..RenderOptions::default() } // avoid font variance
}

fn channel_distance(px: &[u8], c: Color) -> u32 {
    [(px[0], c.r), (px[1], c.g), (px[2], c.b)].iter().map(|&(a, b)| a.abs_diff(b) as u32).sum()
}

/// Some pixel around an interior path vertex is closer to the stroke than to the background.
fn assert_stroke_on_path(chart: &Chart, stroke: Color) {
    let (pixels, w, h, stride) = chart.render_to_rgba8(&opts()).expect("render rgba");
    let scene = chart.scene().expect("scene");
    let vertex = scene
        .path
        .vertices()
        .into_iter()
        .find(|v| v.x > 5.0 && v.x < scene.plot.width - 5.0 && v.y > 5.0 && v.y < scene.plot.height - 5.0)
        .expect("interior vertex");
    let at = scene.to_container(vertex);
    let (cx, cy) = (at.x.floor() as i64, at.y.floor() as i64);
    let found = (cy - 1..=cy + 1)
        .flat_map(|y| (cx - 1..=cx + 1).map(move |x| (x, y)))
        .filter(|&(x, y)| x >= 0 && y >= 0 && x < w as i64 && y < h as i64)
        .any(|(x, y)| {
            let i = y as usize * stride + x as usize * 4;
            let px = &pixels[i..i + 4];
            channel_distance(px, stroke) < channel_distance(px, Color::WHITE)
        });
    assert!(found, "no stroke-colored pixel near ({cx}, {cy})");
}

fn assert_deterministic(smoothing: bool, color: &str) {
    let first = chart(smoothing, color).render_to_rgba8(&opts()).expect("render rgba");
    let second = chart(smoothing, color).render_to_rgba8(&opts()).expect("render rgba");
    assert_eq!(first, second, "two renders of the same chart differ");
}

#[test]
fn golden_plain_chart() {
    let c = chart(false, "steelblue");
    assert_deterministic(false, "steelblue");
    assert_stroke_on_path(&c, Color::from_rgb(70, 130, 180));
    let bytes = c.render_to_png_bytes(&opts()).expect("render bytes");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/plain_chart.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_spline_chart() {
    let c = chart(true, "red");
    assert_deterministic(true, "red");
    assert_stroke_on_path(&c, Color::from_rgb(255, 0, 0));
    let bytes = c.render_to_png_bytes(&opts()).expect("render bytes");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/spline_chart.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn css_named_stroke_reaches_the_raster() {
    let c = chart(false, "darkred");
    assert_stroke_on_path(&c, Color::from_rgb(139, 0, 0));
}
