// File: crates/atlas-core/tests/snapshot.rs
// Purpose: Golden snapshots for text-free plots; bless with UPDATE_SNAPSHOTS=1.

use atlas_core::{BubblePlot, DotPlot, FeatureCollection, HeatMap, LinePlot, Plot, Table, Viewport};
use skia_safe::Color;

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

/// Checks that hold with or without a golden: a 320x200 PNG with marks on the white background.
fn assert_drawn(path: &std::path::Path, bytes: &[u8]) {
    let img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
    assert_eq!(img.dimensions(), (320, 200), "Size: {}", path.display());
    let marked = img.pixels().filter(|p| p.0 != [255, 255, 255, 255]).count();
    assert!(marked > 50, "Nothing drawn for {} ({marked} pixels)", path.display());
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    assert_drawn(path, bytes);
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
        assert_eq!(got_img.dimensions(), want_img.dimensions(), "Size differs: {}", path.display());
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

fn render<P: Plot>(plot: P) -> Vec<u8> {
    let mut vp = Viewport::new(320, 200).expect("viewport");
    plot.draw(&mut vp).expect("draw");
    vp.render_to_png_bytes().expect("render bytes")
}

fn wave() -> Table {
    let mut csv = String::from("x,y,size\n");
    for i in 0..12 {
        let x = i as f64;
        csv.push_str(&format!("{x},{:.3},{}\n", (x * 0.6).sin() * 3.0, i % 4 + 1));
    }
    Table::parse_str(&csv).expect("csv")
}

#[test]
fn golden_dots() {
    let bytes = render(DotPlot::new(wave(), "x", "y").with_filled(true).with_color(Color::from_rgb(0, 139, 139)));
    write_or_compare(&snapshot_path("dots.png"), &bytes);
}

#[test]
fn golden_line() {
    let bytes = render(LinePlot::new(wave(), "x", "y").with_line_width(2.0).with_color(Color::from_rgb(220, 20, 60)));
    write_or_compare(&snapshot_path("line.png"), &bytes);
}

#[test]
fn golden_bubbles() {
    let bytes = render(BubblePlot::new(wave(), "x", "y", "size").with_sizes(3.0, 18.0));
    write_or_compare(&snapshot_path("bubbles.png"), &bytes);
}

#[test]
fn golden_heat_map() {
    let map = FeatureCollection::parse_str(
        r#"{"type":"FeatureCollection","features":[
          {"type":"Feature","properties":{"id":1},"geometry":{"type":"Polygon","coordinates":[[[0,0],[2,0],[1,2],[0,0]]]}},
          {"type":"Feature","properties":{"id":2},"geometry":{"type":"Polygon","coordinates":[[[2,0],[4,0],[3,2],[2,0]]]}},
          {"type":"Feature","properties":{"id":3},"geometry":{"type":"Polygon","coordinates":[[[1,2],[3,2],[2,4],[1,2]]]}}
        ]}"#,
    )
    .expect("geojson");
    let table = Table::parse_str("id,v\n1,5\n2,20\n").expect("csv");
    let bytes = render(HeatMap::new(map, table, "v", "id", "id").with_color(Color::BLUE));
    write_or_compare(&snapshot_path("heat_map.png"), &bytes);
}
