// File: crates/atlas-core/tests/geo.rs
// Purpose: GeoJSON parsing, bounding boxes, point-in-polygon and projection.

use atlas_core::geo::point_in_rings;
use atlas_core::types::PlotRect;
use atlas_core::{BoundingBox, FeatureCollection, MapProjection};

const GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    { "type": "Feature", "properties": { "name": "West", "code": 5 },
      "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [2, 0], [2, 2], [0, 2], [0, 0]]] } },
    { "type": "Feature", "properties": { "name": "Islands", "code": 7.5 },
      "geometry": { "type": "MultiPolygon", "coordinates": [
        [[[3, 0], [4, 0], [4, 1], [3, 1], [3, 0]]],
        [[[5, -1], [6, -1], [6, 3], [5, 3], [5, -1]]]
      ] } },
    { "type": "Feature", "properties": { "name": "Lighthouse" },
      "geometry": { "type": "Point", "coordinates": [9, 9] } },
    { "type": "Feature", "properties": null, "geometry": null }
  ]
}"#;

#[test]
fn parses_polygons_and_ignores_other_geometry() {
    let fc = FeatureCollection::parse_str(GEOJSON).expect("parse");
    assert_eq!(fc.features.len(), 4);
    assert_eq!(fc.features[0].polygons().len(), 1);
    assert_eq!(fc.features[1].polygons().len(), 2);
    assert!(fc.features[2].polygons().is_empty());
    assert!(fc.features[3].polygons().is_empty());
}

#[test]
fn properties_render_as_text() {
    let fc = FeatureCollection::parse_str(GEOJSON).expect("parse");
    assert_eq!(fc.features[0].property("name").as_deref(), Some("West"));
    assert_eq!(fc.features[0].property("code").as_deref(), Some("5"));
    assert_eq!(fc.features[1].property("code").as_deref(), Some("7.5"));
    assert_eq!(fc.features[2].property("code"), None);
    assert_eq!(fc.features[3].property("name"), None);
}

#[test]
fn bounding_box_covers_polygons_only() {
    let fc = FeatureCollection::parse_str(GEOJSON).expect("parse");
    let bbox = fc.bounding_box();
    assert_eq!(bbox, BoundingBox { min_x: 0.0, min_y: -1.0, max_x: 6.0, max_y: 3.0 });
}

#[test]
fn empty_box_union() {
    let empty = BoundingBox::empty();
    assert!(empty.is_empty());
    let mut b = BoundingBox::empty();
    b.extend(1.0, 2.0);
    b.extend(f64::NAN, 50.0);
    assert!(!b.is_empty());
    assert_eq!(empty.union(&b), b);
    assert_eq!(b.union(&empty), b);
}

#[test]
fn point_in_polygon_respects_holes() {
    let outer = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
    let hole = vec![(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)];
    let rings = [outer, hole];
    assert!(point_in_rings((2.0, 2.0), &rings));
    assert!(!point_in_rings((5.0, 5.0), &rings));
    assert!(!point_in_rings((11.0, 5.0), &rings));
}

#[test]
fn projection_stretches_box_onto_rect() {
    let bbox = BoundingBox { min_x: -10.0, min_y: 0.0, max_x: 10.0, max_y: 5.0 };
    let rect = PlotRect::padded(220, 120, 10.0);
    let p = MapProjection::new(&bbox, &rect);
    assert_eq!(p.project(-10.0, 0.0), (10.0, 10.0));
    assert_eq!(p.project(10.0, 5.0), (210.0, 110.0));
    assert_eq!(p.project(0.0, 2.5), (110.0, 60.0));
    let rings = p.project_rings(&[vec![vec![-10.0, 0.0], vec![10.0], vec![10.0, 5.0, 100.0]]]);
    assert_eq!(rings, vec![vec![(10.0, 10.0), (210.0, 110.0)]]);
}
