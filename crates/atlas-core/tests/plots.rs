// File: crates/atlas-core/tests/plots.rs
// Purpose: Each plot kind draws onto a small viewport and reports the right hover targets.

use atlas_core::{
    BarPlot, BubblePlot, DotPlot, FeatureCollection, HeatMap, LinePlot, MapBubblePlot, MapDotPlot, Plot, Table,
    Viewport,
};
use skia_safe::Color;

fn pixel(vp: &mut Viewport, x: usize, y: usize) -> [u8; 4] {
    let (px, _, _, stride) = vp.render_to_rgba8().expect("rgba");
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

fn xy_table() -> Table {
    Table::parse_str("x,y,name\n2,2,c\n0,0,a\n1,1,b\nnope,5,skip\n").expect("csv")
}

#[test]
fn dot_plot_targets_follow_sorted_rows() {
    let mut vp = Viewport::new(200, 100).expect("viewport");
    let plot = DotPlot::new(xy_table(), "x", "y")
        .with_info(vec!["name".into(), "y".into()])
        .with_padding(10.0);
    let layer = plot.draw(&mut vp).expect("draw");
    assert_eq!(plot.id(), "dot");
    // the non-numeric row is skipped
    assert_eq!(layer.len(), 3);

    // (0,0) lands at plot (10,10): surface (10,90)
    let first = layer.hover(10.0, 90.0).expect("first point");
    assert_eq!(first.lines, ["name : a", "y : 0.000"]);
    assert_eq!((first.left, first.top), (60.0, 100.0));

    // (2,2) lands at plot (190,90) and is past the middle, so the tooltip opens left
    let last = layer.hover(190.0, 10.0).expect("last point");
    assert_eq!(last.lines, ["name : c", "y : 2.000"]);
    assert_eq!(last.left, 10.0);

    assert!(layer.hover(100.0, 90.0).is_none());
}

#[test]
fn dot_plot_needs_numeric_rows() {
    let mut vp = Viewport::new(200, 100).expect("viewport");
    let table = Table::parse_str("x,y\na,b\n").expect("csv");
    assert!(DotPlot::new(table, "x", "y").draw(&mut vp).is_err());
    let missing = DotPlot::new(xy_table(), "x", "height").draw(&mut vp);
    assert!(missing.is_err());
}

#[test]
fn line_plot_strokes_between_points() {
    let mut vp = Viewport::new(200, 100).expect("viewport");
    let plot = LinePlot::new(xy_table(), "x", "y")
        .with_color(Color::BLACK)
        .with_line_width(3.0)
        .with_padding(10.0);
    let layer = plot.draw(&mut vp).expect("draw");
    assert_eq!(layer.len(), 3);
    // midway along the diagonal from (10,10) to (100,50) in plot space
    let [r, g, b, _] = pixel(&mut vp, 55, 100 - 30);
    assert!(r < 128 && g < 128 && b < 128, "line pixel is dark");
    // far from the line stays white
    assert_eq!(pixel(&mut vp, 150, 80), [255, 255, 255, 255]);
}

#[test]
fn bar_plot_counts_from_zero() {
    let mut vp = Viewport::new(200, 100).expect("viewport");
    let table = Table::parse_str("fruit\na\nb\na\n").expect("csv");
    let plot = BarPlot::new(table, "fruit").with_padding(10.0).with_seed(3);
    let layer = plot.draw(&mut vp).expect("draw");
    assert_eq!(layer.len(), 2);

    // bar "a": x 10..100, full height 10..90 in plot space
    let tip = layer.hover(50.0, 50.0).expect("bar a");
    assert_eq!(tip.lines, ["fruit : a", "count : 2.000"]);
    // bar "b": x 100..190, half height 10..50; plot y 70 is above it
    assert!(layer.hover(150.0, 30.0).is_none());
    let tip = layer.hover(150.0, 70.0).expect("bar b");
    assert_eq!(tip.lines, ["fruit : b", "count : 1.000"]);

    // seeded fills are pastel
    let [r, g, b, _] = pixel(&mut vp, 50, 30);
    for ch in [r, g, b] {
        assert!((127..=253).contains(&ch));
    }
}

#[test]
fn bubble_hit_radius_has_a_floor() {
    let mut vp = Viewport::new(200, 100).expect("viewport");
    let table = Table::parse_str("x,y,size\n0,0,1\n1,1,10\n").expect("csv");
    let plot = BubblePlot::new(table, "x", "y", "size").with_sizes(1.0, 30.0).with_padding(10.0);
    let layer = plot.draw(&mut vp).expect("draw");
    assert_eq!(layer.len(), 2);
    // smallest bubble (radius 1) still hits at 5 px
    assert!(layer.hover(15.0, 90.0).is_some());
    // largest bubble hits anywhere inside its radius
    assert!(layer.hover(170.0, 20.0).is_some());
}

const TWO_SQUARES: &str = r#"{"type":"FeatureCollection","features":[
  {"type":"Feature","properties":{"name":"A"},
   "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1],[0,0]]]}},
  {"type":"Feature","properties":{"name":"B"},
   "geometry":{"type":"Polygon","coordinates":[[[1,0],[2,0],[2,1],[1,1],[1,0]]]}}
]}"#;

#[test]
fn heat_map_shades_matched_regions() {
    let map = FeatureCollection::parse_str(TWO_SQUARES).expect("geojson");
    let table = Table::parse_str("region,value\nA,10\n").expect("csv");
    let mut vp = Viewport::new(200, 100).expect("viewport");
    let plot = HeatMap::new(map, table, "value", "name", "region")
        .with_color(Color::RED)
        .with_info(vec!["region".into(), "value".into()])
        .with_padding(10.0);
    let layer = plot.draw(&mut vp).expect("draw");
    assert_eq!(layer.len(), 2);

    assert_eq!(pixel(&mut vp, 55, 50), [255, 0, 0, 255]);
    assert_eq!(pixel(&mut vp, 145, 50), [211, 211, 211, 255]);

    let a = layer.hover(55.0, 50.0).expect("region A");
    assert_eq!(a.lines, ["region : A", "value : 10.000"]);
    assert_eq!(a.left, 105.0);
    let b = layer.hover(145.0, 50.0).expect("region B");
    assert_eq!(b.lines, ["region : N/A", "value : N/A"]);
    assert_eq!(b.left, -35.0);
}

#[test]
fn map_dots_share_the_map_frame() {
    let map = FeatureCollection::parse_str(TWO_SQUARES).expect("geojson");
    // one city sits outside the map box, widening the frame to x 0..4
    let table = Table::parse_str("name,lon,lat\nin,0.5,0.5\nout,4,1\n").expect("csv");
    let mut vp = Viewport::new(200, 100).expect("viewport");
    let plot = MapDotPlot::new(map.clone(), table.clone(), "lon", "lat")
        .with_info(vec!["name".into()])
        .with_padding(10.0);
    let layer = plot.draw(&mut vp).expect("draw");
    assert_eq!(layer.len(), 2);
    // lon 0.5 of 0..4 over 10..190, lat 0.5 of 0..1 over 10..90
    assert_eq!(layer.hover(32.5, 50.0).expect("in").lines, ["name : in"]);
    assert_eq!(layer.hover(190.0, 10.0).expect("out").lines, ["name : out"]);

    let sized = Table::parse_str("name,lon,lat,pop\nin,0.5,0.5,10\nout,4,1,20\n").expect("csv");
    let mut vp = Viewport::new(200, 100).expect("viewport");
    let bubbles = MapBubblePlot::new(map, sized, "lon", "lat", "pop").with_sizes(2.0, 20.0).with_padding(10.0);
    let layer = bubbles.draw(&mut vp).expect("draw");
    assert_eq!(layer.len(), 2);
    assert!(layer.hover(32.5, 50.0).is_some());
    assert!(layer.hover(175.0, 10.0).is_some());
}
