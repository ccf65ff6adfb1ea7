// File: crates/atlas-core/tests/smoke.rs
// Purpose: End-to-end render of a demo scene to a PNG file.

use std::path::PathBuf;

use atlas_core::Scene;

fn demos() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos")
}

#[test]
fn render_smoke_png() {
    let scene = Scene::from_path(demos().join("dot.toml")).expect("scene");
    let (mut vp, hover) = scene.render(demos()).expect("render should succeed");
    assert_eq!(hover.len(), 12);

    let out = PathBuf::from("target/test_out/smoke.png");
    vp.render_to_png(&out).expect("write png");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = vp.render_to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn every_demo_scene_renders() {
    let mut seen = 0;
    for entry in std::fs::read_dir(demos()).expect("demos dir") {
        let path = entry.expect("entry").path();
        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            continue;
        }
        let scene = Scene::from_path(&path).expect("scene parses");
        scene.render(demos()).unwrap_or_else(|e| panic!("{} failed: {e}", path.display()));
        seen += 1;
    }
    assert_eq!(seen, 8);
}
