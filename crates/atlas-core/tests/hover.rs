// File: crates/atlas-core/tests/hover.rs
// Purpose: Hit-testing rules and tooltip placement.

use atlas_core::{HitShape, HoverLayer, HoverTarget, Placement, Viewport};

fn dot(cx: f64, cy: f64, label: &str) -> HoverTarget {
    HoverTarget { shape: HitShape::Circle { cx, cy, r: 5.0 }, lines: vec![label.to_string()] }
}

#[test]
fn pointer_y_is_flipped_into_plot_space() {
    let layer = HoverLayer::with_targets(200, 100, Placement::ByIndex, vec![dot(20.0, 80.0, "a")]);
    // plot y 80 is surface y 20
    let tip = layer.hover(20.0, 20.0).expect("hit");
    assert_eq!(tip.lines, ["a"]);
    assert_eq!((tip.left, tip.top), (70.0, 30.0));
    assert!(layer.hover(20.0, 80.0).is_none());
}

#[test]
fn hover_and_viewport_agree_on_plot_space() {
    let vp = Viewport::new(200, 100).expect("viewport");
    let (x, y) = vp.to_plot_space(40.0, 30.0);
    let layer = HoverLayer::with_targets(vp.width(), vp.height(), Placement::ByIndex, vec![dot(x, y, "here")]);
    assert_eq!((x, y), (40.0, 70.0));
    assert_eq!(layer.hover(40.0, 30.0).expect("hit").lines, ["here"]);
}

#[test]
fn circle_hit_radius_is_inclusive() {
    let layer = HoverLayer::with_targets(200, 100, Placement::ByIndex, vec![dot(50.0, 50.0, "a")]);
    assert!(layer.hover(55.0, 50.0).is_some());
    assert!(layer.hover(53.0, 54.0).is_some());
    assert!(layer.hover(55.1, 50.0).is_none());
}

#[test]
fn last_target_wins() {
    let layer = HoverLayer::with_targets(
        200,
        100,
        Placement::ByIndex,
        vec![dot(50.0, 50.0, "under"), dot(52.0, 50.0, "over")],
    );
    assert_eq!(layer.hover(51.0, 50.0).expect("hit").text(), "over");
}

#[test]
fn flips_left_past_the_middle_index() {
    let targets: Vec<HoverTarget> = (0..4).map(|i| dot(20.0 + i as f64 * 40.0, 50.0, &i.to_string())).collect();
    let layer = HoverLayer::with_targets(200, 100, Placement::ByIndex, targets);
    // index 2 of 4 is not past the middle
    assert_eq!(layer.hover(100.0, 50.0).expect("hit").left, 150.0);
    // index 3 is
    assert_eq!(layer.hover(140.0, 50.0).expect("hit").left, -40.0);
}

#[test]
fn regions_flip_by_pointer() {
    let square = vec![vec![vec![(0.0, 0.0), (200.0, 0.0), (200.0, 100.0), (0.0, 100.0)]]];
    let region = HoverTarget { shape: HitShape::Region(square), lines: vec!["r".into()] };
    let layer = HoverLayer::with_targets(200, 100, Placement::ByPointer, vec![region]);
    assert_eq!(layer.hover(99.0, 10.0).expect("left half").left, 149.0);
    assert_eq!(layer.hover(101.0, 10.0).expect("right half").left, -79.0);
}

#[test]
fn rect_hit_and_merge_order() {
    let bar = HoverTarget {
        shape: HitShape::Rect { left: 10.0, bottom: 10.0, width: 30.0, height: 40.0 },
        lines: vec!["bar".into()],
    };
    let mut layer = HoverLayer::with_targets(200, 100, Placement::ByIndex, vec![bar]);
    assert_eq!(layer.hover(25.0, 60.0).expect("inside").text(), "bar");
    assert!(layer.hover(25.0, 45.0).is_none());

    layer.merge(HoverLayer::with_targets(200, 100, Placement::ByIndex, vec![dot(25.0, 40.0, "dot")]));
    assert_eq!(layer.len(), 2);
    assert_eq!(layer.hover(25.0, 60.0).expect("top").text(), "dot");
    assert!(!layer.is_empty());
    assert!(HoverLayer::new(10, 10).is_empty());
}
